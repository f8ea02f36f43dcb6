//! 補貨清單與參考表的欄位視圖

use crate::catalog::FieldCatalog;
use crate::mode::ComparisonMode;
use crate::row::Row;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 補貨清單列（已解析欄位）
///
/// 數值欄位的預設策略：基礎建議量缺值或解析失敗視為 0；
/// 採購建議量缺值或解析失敗回退到基礎建議量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRow {
    /// 商品 UPC（已修剪）
    pub upc: String,

    /// 商品 SKU
    pub sku: String,

    /// 收貨方（門店／倉）編碼
    pub store_code: String,

    /// 收貨方名稱（已修剪）
    pub store_name: String,

    /// 發貨方（供應商）編碼
    pub supplier_code: String,

    /// 採購單位
    pub unit: String,

    /// 基礎建議補貨量
    pub baseline_qty: Decimal,

    /// 採購建議補貨量
    pub purchase_qty: Decimal,

    /// 檢查狀態（原值，不修剪）
    pub check_status: String,

    /// 供應商商品連結（原值，不修剪）
    pub supplier_link: String,
}

impl ListingRow {
    /// 從原始資料列解析欄位
    pub fn resolve(row: &Row, fields: &FieldCatalog) -> Self {
        let baseline_qty = fields
            .baseline_qty
            .resolve_decimal(row)
            .unwrap_or(Decimal::ZERO);
        let purchase_qty = fields
            .purchase_qty
            .resolve_decimal(row)
            .unwrap_or(baseline_qty);

        Self {
            upc: fields.upc.resolve_text(row).trim().to_string(),
            sku: fields.sku.resolve_text(row),
            store_code: fields.store_code.resolve_text(row),
            store_name: fields.store_name.resolve_text(row).trim().to_string(),
            supplier_code: fields.supplier_code.resolve_text(row),
            unit: fields.unit.resolve_text(row),
            baseline_qty,
            purchase_qty,
            check_status: fields.check_status.resolve_text(row),
            supplier_link: fields.supplier_link.resolve_text(row),
        }
    }

    /// 是否通過合規過濾：檢查狀態完全符合且供應商連結非空
    pub fn is_eligible(&self, approved_status: &str) -> bool {
        self.check_status == approved_status && !self.supplier_link.is_empty()
    }
}

/// 補貨參考列（已解析欄位）
///
/// 銷量與起訂量缺值或解析失敗一律視為 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// 商品 UPC（已修剪；空字串代表缺識別碼）
    pub upc: String,

    /// 7 天銷量
    pub weekly_sales: Decimal,

    /// 30 天銷量
    pub monthly_sales: Decimal,

    /// 起訂量（採購單位）
    pub min_order_qty: Decimal,
}

impl ReferenceRow {
    /// 從原始資料列解析欄位
    pub fn resolve(row: &Row, fields: &FieldCatalog) -> Self {
        Self {
            upc: fields.ref_upc.resolve_text(row).trim().to_string(),
            weekly_sales: fields
                .weekly_sales
                .resolve_decimal(row)
                .unwrap_or(Decimal::ZERO),
            monthly_sales: fields
                .monthly_sales
                .resolve_decimal(row)
                .unwrap_or(Decimal::ZERO),
            min_order_qty: fields
                .min_order_qty
                .resolve_decimal(row)
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// 依模式取比對銷量（`month` 取 30 天，其餘取 7 天）
    pub fn comparison_sales(&self, mode: ComparisonMode) -> Decimal {
        match mode {
            ComparisonMode::Month => self.monthly_sales,
            _ => self.weekly_sales,
        }
    }
}

//! 預設欄位目錄
//!
//! 補貨清單、補貨參考表與採購單明細沿用牽牛花商家後台匯出的
//! 簡體欄位詞彙；欄名的版本差異交由各欄位的關鍵字遞補吸收。

use crate::field::FieldSpec;
use serde::{Deserialize, Serialize};

/// 補貨建議欄位目錄
///
/// 涵蓋補貨清單（合規過濾、輸出編碼、建議量）與補貨參考表
/// （銷量窗口、起訂量）兩張表的邏輯欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    /// 檢查狀態（合規過濾用）
    pub check_status: FieldSpec,

    /// 供應商商品連結（合規過濾用）
    pub supplier_link: FieldSpec,

    /// 商品 UPC（參考表對應鍵）
    pub upc: FieldSpec,

    /// 商品 SKU
    pub sku: FieldSpec,

    /// 收貨方（門店／倉）編碼
    pub store_code: FieldSpec,

    /// 收貨方（門店）名稱
    pub store_name: FieldSpec,

    /// 發貨方（供應商）編碼
    pub supplier_code: FieldSpec,

    /// 採購單位
    pub unit: FieldSpec,

    /// 基礎建議補貨量
    pub baseline_qty: FieldSpec,

    /// 採購建議補貨量
    pub purchase_qty: FieldSpec,

    /// 參考表：商品 UPC
    pub ref_upc: FieldSpec,

    /// 參考表：7 天銷量
    pub weekly_sales: FieldSpec,

    /// 參考表：30 天銷量
    pub monthly_sales: FieldSpec,

    /// 參考表：起訂量（採購單位）
    pub min_order_qty: FieldSpec,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self {
            check_status: FieldSpec::new("检查状态").keyword_group(&["检查状态"]),
            supplier_link: FieldSpec::new("供应商商品链接").keyword_group(&["供应商商品链接"]),
            upc: FieldSpec::new("商品UPC").keyword_group(&["商品upc"]),
            sku: FieldSpec::new("商品SKU").keyword_group(&["商品sku"]),
            store_code: FieldSpec::new("收货方编码").keyword_group(&["收货方编码"]),
            store_name: FieldSpec::new("收货方名称")
                .keyword_group(&["收货方", "名"])
                .keyword_group(&["门店", "名"]),
            supplier_code: FieldSpec::new("发货方编码").keyword_group(&["发货方编码"]),
            unit: FieldSpec::new("采购单位").keyword_group(&["采购单位"]),
            baseline_qty: FieldSpec::new("基础建议补货量")
                .keyword_group(&["补货量", "基础"])
                .keyword_group(&["补货量", "建议"]),
            purchase_qty: FieldSpec::new("采购建议补货量").keyword_group(&["补货量", "采购"]),
            // 參考表的 UPC 欄名變化最多，任何含 upc 的欄都接受
            ref_upc: FieldSpec::new("商品UPC").keyword_group(&["upc"]),
            weekly_sales: FieldSpec::new("7天销量")
                .keyword_group(&["7天"])
                .keyword_group(&["周销"]),
            monthly_sales: FieldSpec::new("30天销量")
                .keyword_group(&["30天"])
                .keyword_group(&["月销"]),
            min_order_qty: FieldSpec::new("起订量(采购单位)")
                .keyword_group(&["起订量", "采购单位"]),
        }
    }
}

/// 採購計劃欄位目錄
///
/// 採購單明細表（購買狀態、採購量、單價）的邏輯欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFieldCatalog {
    /// 門店／倉編碼
    pub store_code: FieldSpec,

    /// SKU 編碼
    pub sku: FieldSpec,

    /// 採購量
    pub quantity: FieldSpec,

    /// 採購單價
    pub price: FieldSpec,

    /// 供應商編碼
    pub supplier_code: FieldSpec,

    /// 購買狀態
    pub status: FieldSpec,
}

impl Default for PlanFieldCatalog {
    fn default() -> Self {
        Self {
            store_code: FieldSpec::new("*门店/仓编码")
                .keyword_group(&["门店"])
                .keyword_group(&["仓编码"]),
            sku: FieldSpec::new("*SKU编码").keyword_group(&["sku"]),
            quantity: FieldSpec::new("*采购量").keyword_group(&["采购量"]),
            price: FieldSpec::new("采购单价(元)")
                .keyword_group(&["采购单价"])
                .keyword_group(&["单价"]),
            supplier_code: FieldSpec::new("供应商编码").keyword_group(&["供应商"]),
            status: FieldSpec::new("购买状态").keyword_group(&["购买状态"]),
        }
    }
}

/// 爆好價報名欄位目錄
///
/// 活動商品表（條碼、活動價、組包資訊）的邏輯欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReportFieldCatalog {
    /// 商品條碼
    pub barcode: FieldSpec,

    /// 活動價
    pub price: FieldSpec,

    /// 是否組包
    pub is_package: FieldSpec,

    /// 組包件數
    pub package_count: FieldSpec,
}

impl Default for PriceReportFieldCatalog {
    fn default() -> Self {
        Self {
            // 「条形码」不含「条码」子字串，三組關鍵字缺一不可
            barcode: FieldSpec::new("商品条码")
                .keyword_group(&["条码"])
                .keyword_group(&["条形码"])
                .keyword_group(&["upc"]),
            price: FieldSpec::new("活动价上限").keyword_group(&["活动价"]),
            is_package: FieldSpec::new("是否组包").keyword_group(&["是否组包"]),
            package_count: FieldSpec::new("组包件数").keyword_group(&["组包件数"]),
        }
    }
}

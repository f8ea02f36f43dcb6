//! 訂單明細列解析

use replen_core::{FieldSpec, Row};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單明細欄位目錄
///
/// 外賣平台訂單匯出的商品明細欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFieldCatalog {
    /// 商品名稱
    pub product_name: FieldSpec,

    /// 商品售價
    pub sale_price: FieldSpec,

    /// 商品原價（成本）
    pub original_price: FieldSpec,

    /// 商品銷售數量
    pub quantity: FieldSpec,
}

impl Default for OrderFieldCatalog {
    fn default() -> Self {
        Self {
            product_name: FieldSpec::new("商品名称")
                .keyword_group(&["商品名称"])
                .keyword_group(&["名称"]),
            sale_price: FieldSpec::new("商品售价").keyword_group(&["售价"]),
            original_price: FieldSpec::new("商品原价").keyword_group(&["原价"]),
            quantity: FieldSpec::new("商品销售数量")
                .keyword_group(&["销售数量"])
                .keyword_group(&["数量"]),
        }
    }
}

/// 訂單明細列（已解析欄位）
///
/// 數值欄位缺值或解析失敗一律視為 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// 商品名稱（已修剪）
    pub product_name: String,

    /// 售價
    pub sale_price: Decimal,

    /// 原價（成本）
    pub original_price: Decimal,

    /// 銷售數量
    pub quantity: Decimal,
}

impl OrderLine {
    /// 從原始資料列解析欄位
    pub fn resolve(row: &Row, fields: &OrderFieldCatalog) -> Self {
        Self {
            product_name: fields.product_name.resolve_text(row).trim().to_string(),
            sale_price: fields
                .sale_price
                .resolve_decimal(row)
                .unwrap_or(Decimal::ZERO),
            original_price: fields
                .original_price
                .resolve_decimal(row)
                .unwrap_or(Decimal::ZERO),
            quantity: fields.quantity.resolve_decimal(row).unwrap_or(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replen_core::CellValue;

    #[test]
    fn test_resolve_order_line() {
        let row = Row::new()
            .with("商品名称", CellValue::text(" 美式咖啡 "))
            .with("商品售价", CellValue::text("18"))
            .with("商品原价", CellValue::text("6.5"))
            .with("商品销售数量", CellValue::text("42"));
        let line = OrderLine::resolve(&row, &OrderFieldCatalog::default());

        assert_eq!(line.product_name, "美式咖啡");
        assert_eq!(line.sale_price, Decimal::from(18));
        assert_eq!(line.original_price, Decimal::new(65, 1));
        assert_eq!(line.quantity, Decimal::from(42));
    }

    #[test]
    fn test_malformed_values_default_to_zero() {
        let row = Row::new()
            .with("商品名称", CellValue::text("拿鐵"))
            .with("商品售价", CellValue::text("面议"));
        let line = OrderLine::resolve(&row, &OrderFieldCatalog::default());

        assert_eq!(line.sale_price, Decimal::ZERO);
        assert_eq!(line.original_price, Decimal::ZERO);
        assert_eq!(line.quantity, Decimal::ZERO);
    }
}

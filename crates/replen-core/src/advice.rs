//! 補貨建議輸出模型

use serde::{Deserialize, Serialize};

/// 補貨建議列
///
/// 調整後保留的一筆建議，欄位對應補貨單模板。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRow {
    /// 門店／倉編碼
    pub store_code: String,

    /// 商品 SKU
    pub sku: String,

    /// 最終補貨量（正整數）
    pub quantity: i64,

    /// 供應商編碼
    pub supplier_code: String,

    /// 補貨單位
    pub unit: String,

    /// 是否因超量被砍半（僅供呈現端標示，不影響業務欄位）
    pub halved: bool,
}

impl AdviceRow {
    /// 創建新的建議列
    pub fn new(
        store_code: String,
        sku: String,
        quantity: i64,
        supplier_code: String,
        unit: String,
    ) -> Self {
        Self {
            store_code,
            sku,
            quantity,
            supplier_code,
            unit,
            halved: false,
        }
    }

    /// 建構器模式：標記砍半
    pub fn with_halved(mut self, halved: bool) -> Self {
        self.halved = halved;
        self
    }
}

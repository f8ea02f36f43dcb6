//! 儲存格值模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 儲存格值
///
/// 表格載入器產出的原始值。平台匯出的表格常混用文字與數值欄位，
/// 數值解析統一由 [`CellValue::as_decimal`] 處理，失敗時回傳 `None`，
/// 由呼叫端決定預設值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 空白儲存格
    Empty,
    /// 文字
    Text(String),
    /// 數值
    Number(Decimal),
    /// 布林
    Bool(bool),
}

impl CellValue {
    /// 建立文字儲存格
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// 建立數值儲存格
    pub fn number(value: Decimal) -> Self {
        CellValue::Number(value)
    }

    /// 是否為空（空白或空字串）
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 轉為文字（數值以十進位字串呈現，空白為空字串）
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(d) => d.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// 解析為數值
    ///
    /// 文字先修剪再解析，支援科學記號；空白、布林與解析失敗
    /// 一律回傳 `None`。
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(d) => Some(*d),
            CellValue::Bool(_) => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed)
                    .ok()
                    .or_else(|| Decimal::from_scientific(trimmed).ok())
            }
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

//! 欄位描述與兩段式解析
//!
//! 平台匯出表格的欄名隨版本變動（例如「7天销量」改為「近7天周销量」），
//! 逐欄寫死欄名無法維護。每個邏輯欄位以 [`FieldSpec`] 描述：
//!
//! 1. 先以完全符合欄名取值（必填欄位常帶 `*` 前綴，去除 `*` 後再試一次）
//! 2. 找不到時走關鍵字遞補：依來源欄序掃描，取第一個符合任一關鍵字組的欄位

use crate::cell::CellValue;
use crate::row::Row;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 邏輯欄位描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// 完全符合的欄名
    pub exact: String,

    /// 遞補關鍵字組：組內子字串須全部出現在欄名中，任一組符合即可。
    /// 比對不分大小寫。
    pub keywords: Vec<Vec<String>>,
}

impl FieldSpec {
    /// 建立只含完全符合欄名的欄位描述
    pub fn new(exact: impl Into<String>) -> Self {
        Self {
            exact: exact.into(),
            keywords: Vec::new(),
        }
    }

    /// 建構器模式：加入一組遞補關鍵字（組內全須命中）
    pub fn keyword_group(mut self, group: &[&str]) -> Self {
        self.keywords
            .push(group.iter().map(|kw| kw.to_string()).collect());
        self
    }

    /// 解析欄位值
    ///
    /// 完全符合（含去 `*` 欄名）優先；否則依來源欄序取第一個
    /// 符合關鍵字的欄位；都沒有時回傳 `None`。
    pub fn resolve<'a>(&self, row: &'a Row) -> Option<&'a CellValue> {
        if let Some(value) = row.get(&self.exact) {
            return Some(value);
        }

        let stripped = self.exact.replace('*', "");
        if stripped != self.exact {
            if let Some(value) = row.get(&stripped) {
                return Some(value);
            }
        }

        row.iter()
            .find(|(name, _)| self.matches_keywords(name))
            .map(|(_, value)| value)
    }

    /// 解析為文字；缺欄時回傳空字串
    pub fn resolve_text(&self, row: &Row) -> String {
        self.resolve(row).map(|v| v.as_text()).unwrap_or_default()
    }

    /// 解析為數值；缺欄或解析失敗回傳 `None`，預設值由呼叫端決定
    pub fn resolve_decimal(&self, row: &Row) -> Option<Decimal> {
        self.resolve(row).and_then(|v| v.as_decimal())
    }

    /// 欄名是否符合任一關鍵字組（不分大小寫）
    fn matches_keywords(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.keywords.iter().any(|group| {
            !group.is_empty()
                && group
                    .iter()
                    .all(|kw| lowered.contains(&kw.to_lowercase()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_row() -> Row {
        Row::new()
            .with("*门店/仓编码", CellValue::text("S001"))
            .with("近7天周销量", CellValue::text("40"))
            .with("商品upc", CellValue::text("6901234567890"))
            .with("采购建议补货量", CellValue::text("12"))
            .with("基础建议补货量", CellValue::text("10"))
    }

    #[test]
    fn test_exact_match_wins() {
        let spec = FieldSpec::new("基础建议补货量").keyword_group(&["补货量"]);
        let row = sample_row();

        // 關鍵字「补货量」會先碰到採購欄，但完全符合優先
        assert_eq!(spec.resolve_text(&row), "10");
    }

    #[test]
    fn test_star_prefix_stripped() {
        let spec = FieldSpec::new("门店/仓编码");
        let row = sample_row();
        assert_eq!(spec.resolve(&row), None);

        let spec = FieldSpec::new("*门店/仓编码");
        let row = Row::new().with("门店/仓编码", CellValue::text("S002"));
        assert_eq!(spec.resolve_text(&row), "S002");
    }

    #[test]
    fn test_keyword_fallback_takes_first_column_in_order() {
        let spec = FieldSpec::new("补货量")
            .keyword_group(&["补货量", "基础"])
            .keyword_group(&["补货量", "建议"]);
        let row = sample_row();

        // 「采购建议补货量」含「补货量」+「建议」且欄序在前
        assert_eq!(spec.resolve_text(&row), "12");
    }

    #[rstest]
    #[case("商品UPC", "6901234567890")]
    #[case("UPC", "6901234567890")]
    #[case("upc", "6901234567890")]
    fn test_keyword_match_is_case_insensitive(#[case] keyword: &str, #[case] expected: &str) {
        let spec = FieldSpec::new("不存在的欄").keyword_group(&[keyword]);
        let row = sample_row();
        assert_eq!(spec.resolve_text(&row), expected);
    }

    #[test]
    fn test_group_requires_all_keywords() {
        let spec = FieldSpec::new("无").keyword_group(&["7天", "月销"]);
        let row = sample_row();
        assert_eq!(spec.resolve(&row), None);
    }

    #[test]
    fn test_missing_field_defaults() {
        let spec = FieldSpec::new("不存在").keyword_group(&["也不存在"]);
        let row = sample_row();

        assert_eq!(spec.resolve(&row), None);
        assert_eq!(spec.resolve_text(&row), "");
        assert_eq!(spec.resolve_decimal(&row), None);
    }

    #[test]
    fn test_empty_keyword_group_never_matches() {
        let spec = FieldSpec {
            exact: "无".to_string(),
            keywords: vec![vec![]],
        };
        let row = sample_row();
        assert_eq!(spec.resolve(&row), None);
    }
}

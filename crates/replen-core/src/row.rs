//! 資料列模型

use crate::cell::CellValue;
use serde::{Deserialize, Serialize};

/// 一列資料：欄名對應儲存格值
///
/// 欄位維持來源表格的出現順序，關鍵字遞補解析依此順序取第一個
/// 符合的欄位。重複欄名以後值覆寫，位置維持首次出現處。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    columns: Vec<(String, CellValue)>,
}

impl Row {
    /// 建立空列
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// 加入一欄；欄名已存在時覆寫其值
    pub fn push(&mut self, name: impl Into<String>, value: CellValue) {
        let name = name.into();
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.columns.push((name, value));
        }
    }

    /// 建構器模式：加入一欄
    pub fn with(mut self, name: impl Into<String>, value: CellValue) -> Self {
        self.push(name, value);
        self
    }

    /// 依欄名取值
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// 依來源欄序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// 欄位數
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// 是否沒有任何欄位
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

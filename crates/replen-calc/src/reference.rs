//! 參考表索引

use replen_core::{FieldCatalog, ReferenceRow, Row};
use std::collections::HashMap;

/// 參考表索引：商品識別碼 → 參考列
///
/// 缺識別碼的列略過，重複識別碼以後列覆寫前列；兩類異常都
/// 不中斷建立，計數與覆寫清單留給呼叫端轉為警告。
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: HashMap<String, ReferenceRow>,

    /// 缺識別碼而略過的列數
    pub skipped_missing_id: usize,

    /// 被後列覆寫的識別碼（依覆寫發生順序）
    pub overwritten: Vec<String>,
}

impl ReferenceIndex {
    /// 從參考表資料列建立索引
    pub fn build(rows: &[Row], fields: &FieldCatalog) -> Self {
        let mut index = Self::default();

        for row in rows {
            let reference = ReferenceRow::resolve(row, fields);
            if reference.upc.is_empty() {
                index.skipped_missing_id += 1;
                continue;
            }

            let upc = reference.upc.clone();
            if index.entries.insert(upc.clone(), reference).is_some() {
                tracing::debug!("參考表識別碼重複，後列覆寫前列: {}", upc);
                index.overwritten.push(upc);
            }
        }

        tracing::debug!(
            "參考表索引建立完成: {} 筆（略過 {} 列，覆寫 {} 次）",
            index.entries.len(),
            index.skipped_missing_id,
            index.overwritten.len()
        );

        index
    }

    /// 依商品識別碼查詢（查詢端先修剪）
    pub fn get(&self, upc: &str) -> Option<&ReferenceRow> {
        self.entries.get(upc.trim())
    }

    /// 索引筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否為空索引
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! 結果彙總

use crate::adjustment::Adjustment;
use replen_core::{AdviceRow, ComparisonMode, ListingRow};
use serde::{Deserialize, Serialize};

/// 運行彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// 掃描總列數（含不合規列）
    pub total_scanned: usize,

    /// 保留列數
    pub kept: usize,

    /// 移除列數（不合規列 + 最終量非正而剔除的列）
    pub removed: usize,

    /// 使用的比對模式
    pub mode: ComparisonMode,

    /// 合規列出現過的門店名稱（首見順序去重）
    pub store_names: Vec<String>,
}

impl RunSummary {
    /// 彙總文字（供呈現端顯示）
    pub fn render_text(&self) -> String {
        format!(
            "處理完成！（模式: {}）\n共掃描 {} 條資料，保留 {} 條，已移除 {} 條",
            self.mode.label(),
            self.total_scanned,
            self.kept,
            self.removed
        )
    }
}

/// 結果彙總器
///
/// 逐列收集調整結果：最終量非正的列剔除並計數，其餘轉為
/// [`AdviceRow`]，輸出順序即收集順序。
#[derive(Debug, Default)]
pub struct ResultAggregator {
    rows: Vec<AdviceRow>,
    store_names: Vec<String>,
    dropped: usize,
}

impl ResultAggregator {
    /// 創建空的彙總器
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄一筆合規列的門店名稱（空值略過，首見順序去重）
    pub fn record_store_name(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if !self.store_names.iter().any(|n| n == name) {
            self.store_names.push(name.to_string());
        }
    }

    /// 收集一筆調整結果
    pub fn collect(&mut self, listing: &ListingRow, adjustment: Adjustment) {
        if adjustment.final_qty <= 0 {
            tracing::debug!(
                "剔除非正最終量: SKU {} 最終量 {}",
                listing.sku,
                adjustment.final_qty
            );
            self.dropped += 1;
            return;
        }

        self.rows.push(
            AdviceRow::new(
                listing.store_code.clone(),
                listing.sku.clone(),
                adjustment.final_qty,
                listing.supplier_code.clone(),
                listing.unit.clone(),
            )
            .with_halved(adjustment.halved),
        );
    }

    /// 結束彙總
    ///
    /// `total_scanned` 為清單總列數，`eligible` 為通過合規過濾的
    /// 列數；移除數 = 不合規列數 + 剔除列數。
    pub fn finish(
        self,
        total_scanned: usize,
        eligible: usize,
        mode: ComparisonMode,
    ) -> (Vec<AdviceRow>, RunSummary) {
        let kept = self.rows.len();
        // 呼叫端計數不一致時不可 panic，移除數以 0 為下限
        let removed = total_scanned.saturating_sub(eligible) + self.dropped;
        let summary = RunSummary {
            total_scanned,
            kept,
            removed,
            mode,
            store_names: self.store_names,
        };
        (self.rows, summary)
    }
}

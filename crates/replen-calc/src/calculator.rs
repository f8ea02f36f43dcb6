//! 補貨建議主計算器

use replen_core::{AdvisorConfig, ListingRow, ReplenError, Row};

use crate::adjustment::AdjustmentCalculator;
use crate::reference::ReferenceIndex;
use crate::summary::ResultAggregator;
use crate::{ReplenResult, ReplenWarning};

/// 補貨建議計算器
pub struct ReplenCalculator {
    /// 計算配置
    config: AdvisorConfig,
}

impl ReplenCalculator {
    /// 創建新的補貨建議計算器
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    ///
    /// `listing_rows` 為補貨清單，`reference_rows` 為補貨參考表。
    /// `none` 模式下參考表完全不參與計算，可傳空切片。
    /// 合規過濾後一列不剩時回傳 [`ReplenError::NoEligibleRows`]；
    /// 單列資料異常不中斷，以預設值吸收或轉為警告。
    pub fn calculate(
        &self,
        listing_rows: &[Row],
        reference_rows: &[Row],
    ) -> replen_core::Result<ReplenResult> {
        let mode = self.config.mode;
        tracing::info!(
            "開始補貨建議計算：清單 {} 列，參考 {} 列，模式 {}",
            listing_rows.len(),
            reference_rows.len(),
            mode
        );

        let start_time = std::time::Instant::now();

        // Step 1: 解析清單列並做合規過濾
        tracing::debug!("Step 1: 合規過濾");
        let listings: Vec<ListingRow> = listing_rows
            .iter()
            .map(|row| ListingRow::resolve(row, &self.config.fields))
            .collect();
        let eligible: Vec<&ListingRow> = listings
            .iter()
            .filter(|listing| listing.is_eligible(&self.config.approved_status))
            .collect();
        tracing::debug!("合規列: {} / {}", eligible.len(), listings.len());

        if eligible.is_empty() {
            return Err(ReplenError::NoEligibleRows);
        }

        // Step 2: 建立參考表索引（none 模式跳過）
        tracing::debug!("Step 2: 參考表索引");
        let index = if mode.is_no_compare() {
            ReferenceIndex::default()
        } else {
            ReferenceIndex::build(reference_rows, &self.config.fields)
        };
        let warnings = Self::index_warnings(&index);

        // Step 3: 逐列調整數量並彙總
        tracing::debug!("Step 3: 數量調整與彙總");
        let mut aggregator = ResultAggregator::new();
        for listing in &eligible {
            aggregator.record_store_name(&listing.store_name);
            let adjustment = AdjustmentCalculator::apply(listing, mode, &index);
            aggregator.collect(listing, adjustment);
        }
        let (rows, summary) = aggregator.finish(listing_rows.len(), eligible.len(), mode);

        tracing::info!("補貨建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "保留 {} 列，移除 {} 列，門店: {:?}",
            summary.kept,
            summary.removed,
            summary.store_names
        );

        Ok(ReplenResult {
            rows,
            summary,
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 參考表索引的異常轉為警告
    fn index_warnings(index: &ReferenceIndex) -> Vec<ReplenWarning> {
        let mut warnings = Vec::new();

        if index.skipped_missing_id > 0 {
            warnings.push(ReplenWarning::warning(
                String::new(),
                format!("參考表 {} 列缺商品識別碼，已略過", index.skipped_missing_id),
            ));
        }
        for upc in &index.overwritten {
            warnings.push(ReplenWarning::info(
                upc.clone(),
                "參考表識別碼重複，後列覆寫前列".to_string(),
            ));
        }

        warnings
    }

    /// 獲取配置引用
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

//! # Replen Calculation Engine
//!
//! 補貨建議計算引擎

pub mod activity;
pub mod adjustment;
pub mod calculator;
pub mod plan;
pub mod price_report;
pub mod reference;
pub mod summary;

// Re-export 主要類型
pub use adjustment::{Adjustment, AdjustmentCalculator};
pub use calculator::ReplenCalculator;
pub use plan::{PlanGenerator, PlanResult, PlanRow};
pub use price_report::{PriceReportResult, PriceReportRow, PriceReportTransformer};
pub use reference::ReferenceIndex;
pub use summary::{ResultAggregator, RunSummary};

/// 補貨建議計算結果
#[derive(Debug, Clone)]
pub struct ReplenResult {
    /// 保留的建議列（維持清單原始順序）
    pub rows: Vec<replen_core::AdviceRow>,

    /// 運行彙總
    pub summary: RunSummary,

    /// 警告信息
    pub warnings: Vec<ReplenWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

/// 補貨計算警告
///
/// 單列資料異常不中斷計算，以警告型式附在結果上。
#[derive(Debug, Clone)]
pub struct ReplenWarning {
    pub upc: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ReplenWarning {
    pub fn new(upc: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            upc,
            message,
            severity,
        }
    }

    pub fn info(upc: String, message: String) -> Self {
        Self::new(upc, message, WarningSeverity::Info)
    }

    pub fn warning(upc: String, message: String) -> Self {
        Self::new(upc, message, WarningSeverity::Warning)
    }

    pub fn error(upc: String, message: String) -> Self {
        Self::new(upc, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

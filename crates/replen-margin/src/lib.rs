//! # Replen Margin
//!
//! 訂單毛利率分析

pub mod order;
pub mod report;
pub mod stats;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use order::{OrderFieldCatalog, OrderLine};
pub use report::{MarginAnalyzer, MarginBand, MarginReport, MarginStats};
pub use stats::ProductMargin;

/// 毛利率分析配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    /// 目標毛利率（百分比）
    pub target_margin: Decimal,

    /// 欄位目錄
    pub fields: OrderFieldCatalog,
}

impl MarginConfig {
    /// 創建預設配置（目標毛利率 30%）
    pub fn new() -> Self {
        Self {
            target_margin: Decimal::from(30),
            fields: OrderFieldCatalog::default(),
        }
    }

    /// 建構器模式：設置目標毛利率
    pub fn with_target_margin(mut self, target_margin: Decimal) -> Self {
        self.target_margin = target_margin;
        self
    }

    /// 建構器模式：設置欄位目錄
    pub fn with_fields(mut self, fields: OrderFieldCatalog) -> Self {
        self.fields = fields;
        self
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self::new()
    }
}

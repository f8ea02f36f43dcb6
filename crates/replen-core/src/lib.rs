//! # Replen Core
//!
//! 核心資料模型與欄位解析

pub mod advice;
pub mod catalog;
pub mod cell;
pub mod config;
pub mod field;
pub mod listing;
pub mod mode;
pub mod row;

// Re-export 主要類型
pub use advice::AdviceRow;
pub use catalog::{FieldCatalog, PlanFieldCatalog, PriceReportFieldCatalog};
pub use cell::CellValue;
pub use config::{AdvisorConfig, PlanConfig, PlanTemplate, PriceReportConfig};
pub use field::FieldSpec;
pub use listing::{ListingRow, ReferenceRow};
pub use mode::ComparisonMode;
pub use row::Row;

/// Replen 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenError {
    #[error("未找到有效資料，請檢查上傳的檔案內容")]
    EmptyInput,

    #[error("未找到有效的商品UPC資料")]
    NoValidUpcs,

    #[error("找不到符合條件的資料（檢查狀態未通過或缺少供應商商品連結）")]
    NoEligibleRows,

    #[error("無效的比對模式: {0}（支援 week / month / none）")]
    UnknownMode(String),

    #[error("無效的計劃模板: {0}（支援 qianniuhua / aoxiang）")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, ReplenError>;

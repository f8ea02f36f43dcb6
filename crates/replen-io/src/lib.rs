//! # Replen IO
//!
//! 表格檔案讀寫。核心計算 crate 不碰檔案系統，載入與輸出
//! 都在這一層。

pub mod naming;
pub mod reader;
pub mod writer;

// Re-export 主要類型
pub use reader::{read_table, read_table_file};

/// IO 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("表格解析錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("檔案讀寫錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;

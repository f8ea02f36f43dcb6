//! 比對模式

use crate::ReplenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 比對模式：決定超量判斷所採用的銷量窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// 與 7 天週銷量比對（預設）
    Week,
    /// 與 30 天月銷量比對
    Month,
    /// 不比對，採購建議量直接通過
    None,
}

impl ComparisonMode {
    /// 是否略過比對（`none` 模式下參考表完全不參與計算）
    pub fn is_no_compare(&self) -> bool {
        matches!(self, ComparisonMode::None)
    }

    /// 線路值
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Week => "week",
            ComparisonMode::Month => "month",
            ComparisonMode::None => "none",
        }
    }

    /// 使用者標籤
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMode::Week => "按週銷量",
            ComparisonMode::Month => "按月銷量",
            ComparisonMode::None => "不比對",
        }
    }
}

impl Default for ComparisonMode {
    fn default() -> Self {
        ComparisonMode::Week
    }
}

impl FromStr for ComparisonMode {
    type Err = ReplenError;

    /// 解析模式字串；前後空白先修剪，未知值回傳
    /// [`ReplenError::UnknownMode`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "week" => Ok(ComparisonMode::Week),
            "month" => Ok(ComparisonMode::Month),
            "none" => Ok(ComparisonMode::None),
            other => Err(ReplenError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! 計算配置

use crate::catalog::{FieldCatalog, PlanFieldCatalog, PriceReportFieldCatalog};
use crate::mode::ComparisonMode;
use crate::ReplenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 採購計劃模板（目標平台）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTemplate {
    /// 牽牛花補貨單（七欄）
    Qianniuhua,
    /// 翱象補貨單（六欄，首列為填寫說明）
    Aoxiang,
}

impl PlanTemplate {
    /// 線路值
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTemplate::Qianniuhua => "qianniuhua",
            PlanTemplate::Aoxiang => "aoxiang",
        }
    }

    /// 平台顯示名稱（用於輸出檔名）
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTemplate::Qianniuhua => "牵牛花",
            PlanTemplate::Aoxiang => "翱象",
        }
    }
}

impl Default for PlanTemplate {
    fn default() -> Self {
        PlanTemplate::Qianniuhua
    }
}

impl FromStr for PlanTemplate {
    type Err = ReplenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "qianniuhua" => Ok(PlanTemplate::Qianniuhua),
            "aoxiang" => Ok(PlanTemplate::Aoxiang),
            other => Err(ReplenError::UnknownTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for PlanTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 補貨建議參數配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// 比對模式
    pub mode: ComparisonMode,

    /// 合規的檢查狀態值（完全符合，不修剪）
    pub approved_status: String,

    /// 欄位目錄
    pub fields: FieldCatalog,
}

impl AdvisorConfig {
    /// 創建指定模式的配置，其餘採預設值
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            approved_status: "已通过".to_string(),
            fields: FieldCatalog::default(),
        }
    }

    /// 建構器模式：設置合規狀態值
    pub fn with_approved_status(mut self, approved_status: impl Into<String>) -> Self {
        self.approved_status = approved_status.into();
        self
    }

    /// 建構器模式：設置欄位目錄
    pub fn with_fields(mut self, fields: FieldCatalog) -> Self {
        self.fields = fields;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::new(ComparisonMode::default())
    }
}

/// 採購計劃生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// 目標平台模板
    pub template: PlanTemplate,

    /// 合規的購買狀態值
    pub success_status: String,

    /// 欄位目錄
    pub fields: PlanFieldCatalog,
}

impl PlanConfig {
    /// 創建指定模板的配置，其餘採預設值
    pub fn new(template: PlanTemplate) -> Self {
        Self {
            template,
            success_status: "成功".to_string(),
            fields: PlanFieldCatalog::default(),
        }
    }

    /// 建構器模式：設置合規購買狀態值
    pub fn with_success_status(mut self, success_status: impl Into<String>) -> Self {
        self.success_status = success_status.into();
        self
    }

    /// 建構器模式：設置欄位目錄
    pub fn with_fields(mut self, fields: PlanFieldCatalog) -> Self {
        self.fields = fields;
        self
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::new(PlanTemplate::default())
    }
}

/// 爆好價報名轉換配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceReportConfig {
    /// 活動初始庫存（每列固定帶出）
    pub initial_stock: i64,

    /// 欄位目錄
    pub fields: PriceReportFieldCatalog,
}

impl PriceReportConfig {
    /// 創建預設配置（初始庫存 9999）
    pub fn new() -> Self {
        Self {
            initial_stock: 9999,
            fields: PriceReportFieldCatalog::default(),
        }
    }

    /// 建構器模式：設置初始庫存
    pub fn with_initial_stock(mut self, initial_stock: i64) -> Self {
        self.initial_stock = initial_stock;
        self
    }

    /// 建構器模式：設置欄位目錄
    pub fn with_fields(mut self, fields: PriceReportFieldCatalog) -> Self {
        self.fields = fields;
        self
    }
}

impl Default for PriceReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! 採購計劃生成
//!
//! 將多個採購單明細表合併，保留購買狀態合規的列，映射為目標
//! 平台模板的計劃列。

use replen_core::{PlanConfig, PlanTemplate, ReplenError, Row};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 採購計劃列
///
/// 平台模板共用的邏輯欄位；商品名稱與單位留空由平台帶入。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    /// 門店／倉編碼
    pub store_code: String,

    /// SKU 編碼
    pub sku: String,

    /// 採購量（缺值或解析失敗視為 0）
    pub quantity: Decimal,

    /// 採購單價（原樣傳遞，空字串代表未填）
    pub price: String,

    /// 供應商編碼
    pub supplier_code: String,
}

/// 採購計劃生成結果
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// 計劃列（維持來源順序）
    pub rows: Vec<PlanRow>,

    /// 目標平台模板
    pub template: PlanTemplate,

    /// 合併的來源檔案數
    pub files_merged: usize,

    /// 略過的列數（缺 SKU 或購買狀態不合規）
    pub skipped: usize,
}

impl PlanResult {
    /// 彙總文字（供呈現端顯示）
    pub fn render_text(&self) -> String {
        format!(
            "生成成功！\n目標平台：{}\n共合併 {} 個檔案，生成 {} 條資料",
            self.template.display_name(),
            self.files_merged,
            self.rows.len()
        )
    }
}

/// 採購計劃生成器
pub struct PlanGenerator {
    /// 生成配置
    config: PlanConfig,
}

impl PlanGenerator {
    /// 創建新的採購計劃生成器
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// 合併來源明細並生成計劃列
    ///
    /// `sources` 為各來源檔案的資料列。合併後一列都沒有時回傳
    /// [`ReplenError::EmptyInput`]；缺 SKU 或購買狀態不合規的列
    /// 略過不算錯誤，全數略過會生成空計劃。
    pub fn generate(&self, sources: &[Vec<Row>]) -> replen_core::Result<PlanResult> {
        let total: usize = sources.iter().map(|rows| rows.len()).sum();
        tracing::info!(
            "開始生成採購計劃：{} 個來源共 {} 列，模板 {}",
            sources.len(),
            total,
            self.config.template
        );

        if total == 0 {
            return Err(ReplenError::EmptyInput);
        }

        let fields = &self.config.fields;
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for row in sources.iter().flatten() {
            let sku = fields.sku.resolve_text(row);
            if sku.is_empty() {
                skipped += 1;
                continue;
            }

            let status = fields.status.resolve_text(row);
            if status != self.config.success_status {
                tracing::debug!("略過購買狀態不合規的列: SKU {} 狀態 {}", sku, status);
                skipped += 1;
                continue;
            }

            rows.push(PlanRow {
                store_code: fields.store_code.resolve_text(row),
                sku,
                quantity: fields
                    .quantity
                    .resolve_decimal(row)
                    .unwrap_or(Decimal::ZERO),
                price: fields.price.resolve_text(row),
                supplier_code: fields.supplier_code.resolve_text(row),
            });
        }

        tracing::info!("採購計劃生成完成：{} 條，略過 {} 條", rows.len(), skipped);

        Ok(PlanResult {
            rows,
            template: self.config.template,
            files_merged: sources.len(),
            skipped,
        })
    }
}

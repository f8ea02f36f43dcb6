//! 爆好價報名轉換
//!
//! 將活動商品表轉為爆好價報名列：條碼必填，缺條碼的列略過
//! 計數，活動初始庫存每列固定帶出。

use replen_core::{PriceReportConfig, ReplenError, Row};
use serde::{Deserialize, Serialize};

/// 爆好價報名列
///
/// 活動價與組包件數原樣傳遞，空字串代表來源未填。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReportRow {
    /// UPC 條碼（已修剪）
    pub upc: String,

    /// 活動價
    pub price: String,

    /// 活動初始庫存
    pub stock: i64,

    /// 是否組包（來源未填時為「否」）
    pub is_package: String,

    /// 組包件數
    pub package_count: String,
}

/// 爆好價報名轉換結果
#[derive(Debug, Clone)]
pub struct PriceReportResult {
    /// 報名列（維持來源順序）
    pub rows: Vec<PriceReportRow>,

    /// 掃描總列數
    pub scanned: usize,

    /// 缺條碼而略過的列數
    pub skipped: usize,
}

impl PriceReportResult {
    /// 彙總文字（供呈現端顯示）
    pub fn render_text(&self) -> String {
        format!(
            "處理完成！共掃描 {} 條資料，成功轉換 {} 條，跳過 {} 條（缺條碼）",
            self.scanned,
            self.rows.len(),
            self.skipped
        )
    }
}

/// 爆好價報名轉換器
pub struct PriceReportTransformer {
    /// 轉換配置
    config: PriceReportConfig,
}

impl PriceReportTransformer {
    /// 創建新的爆好價報名轉換器
    pub fn new(config: PriceReportConfig) -> Self {
        Self { config }
    }

    /// 轉換活動商品表
    ///
    /// 空輸入回傳 [`ReplenError::EmptyInput`]；缺條碼的列略過
    /// 計數，不算錯誤。
    pub fn transform(&self, rows: &[Row]) -> replen_core::Result<PriceReportResult> {
        tracing::info!(
            "開始爆好價報名轉換：{} 列，初始庫存 {}",
            rows.len(),
            self.config.initial_stock
        );

        if rows.is_empty() {
            return Err(ReplenError::EmptyInput);
        }

        let fields = &self.config.fields;
        let mut result_rows = Vec::new();
        let mut skipped = 0usize;

        for row in rows {
            let upc = fields.barcode.resolve_text(row).trim().to_string();
            if upc.is_empty() {
                skipped += 1;
                continue;
            }

            let is_package = fields.is_package.resolve_text(row);
            result_rows.push(PriceReportRow {
                upc,
                price: fields.price.resolve_text(row),
                stock: self.config.initial_stock,
                is_package: if is_package.is_empty() {
                    "否".to_string()
                } else {
                    is_package
                },
                package_count: fields.package_count.resolve_text(row),
            });
        }

        tracing::info!(
            "爆好價報名轉換完成：{} 條，略過 {} 條",
            result_rows.len(),
            skipped
        );

        Ok(PriceReportResult {
            rows: result_rows,
            scanned: rows.len(),
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replen_core::CellValue;

    fn product_row(barcode: &str, price: &str) -> Row {
        Row::new()
            .with("商品条码", CellValue::text(barcode))
            .with("活动价上限", CellValue::text(price))
            .with("是否组包", CellValue::text("是"))
            .with("组包件数", CellValue::text("2"))
    }

    #[test]
    fn test_transform_carries_initial_stock() {
        let rows = vec![product_row("690001", "9.9"), product_row("690002", "19.9")];

        let transformer = PriceReportTransformer::new(PriceReportConfig::new());
        let result = transformer.transform(&rows).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.scanned, 2);
        assert_eq!(result.skipped, 0);

        let first = &result.rows[0];
        assert_eq!(first.upc, "690001");
        assert_eq!(first.price, "9.9");
        assert_eq!(first.stock, 9999);
        assert_eq!(first.is_package, "是");
        assert_eq!(first.package_count, "2");
    }

    #[test]
    fn test_rows_without_barcode_skipped_and_counted() {
        let rows = vec![
            product_row("690001", "9.9"),
            product_row("", "19.9"),
            product_row("  ", "29.9"),
        ];

        let transformer = PriceReportTransformer::new(PriceReportConfig::new());
        let result = transformer.transform(&rows).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.skipped, 2);
        assert!(result.render_text().contains("跳過 2 條（缺條碼）"));
    }

    #[test]
    fn test_fuzzy_barcode_columns() {
        let rows = vec![
            Row::new().with("商品条形码", CellValue::text("690001")),
            Row::new().with("UPC", CellValue::text("690002")),
        ];

        let transformer = PriceReportTransformer::new(PriceReportConfig::new());
        let result = transformer.transform(&rows).unwrap();

        assert_eq!(result.rows[0].upc, "690001");
        assert_eq!(result.rows[1].upc, "690002");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let rows = vec![Row::new().with("商品条码", CellValue::text("690001"))];

        let transformer = PriceReportTransformer::new(PriceReportConfig::new());
        let result = transformer.transform(&rows).unwrap();

        let row = &result.rows[0];
        assert_eq!(row.price, "");
        assert_eq!(row.is_package, "否");
        assert_eq!(row.package_count, "");
    }

    #[test]
    fn test_custom_initial_stock() {
        let rows = vec![product_row("690001", "9.9")];

        let transformer =
            PriceReportTransformer::new(PriceReportConfig::new().with_initial_stock(500));
        let result = transformer.transform(&rows).unwrap();

        assert_eq!(result.rows[0].stock, 500);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let transformer = PriceReportTransformer::new(PriceReportConfig::default());
        let err = transformer.transform(&[]).unwrap_err();

        assert!(matches!(err, ReplenError::EmptyInput));
    }
}

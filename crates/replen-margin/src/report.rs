//! 毛利分析報告

use crate::order::OrderLine;
use crate::stats::{MarginAccumulator, ProductMargin};
use crate::MarginConfig;
use replen_core::Row;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 毛利率分佈區間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginBand {
    /// 區間下限（含）
    pub min: Decimal,

    /// 區間上限（不含）
    pub max: Decimal,

    /// 區間標籤
    pub label: String,

    /// 落在區間內的商品數
    pub count: usize,
}

/// 整體毛利統計
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginStats {
    /// 平均毛利率
    pub average: Decimal,

    /// 最高毛利率
    pub highest: Decimal,

    /// 最低毛利率
    pub lowest: Decimal,
}

/// 毛利分析報告
#[derive(Debug, Clone)]
pub struct MarginReport {
    /// 全部商品（毛利率升冪）
    pub products: Vec<ProductMargin>,

    /// 低於目標毛利率的商品
    pub low_margin: Vec<ProductMargin>,

    /// 目標毛利率（百分比）
    pub target_margin: Decimal,

    /// 整體統計（無商品時全為 0）
    pub stats: MarginStats,

    /// 毛利率分佈
    pub bands: Vec<MarginBand>,
}

impl MarginReport {
    /// 彙總文字（供呈現端顯示）
    pub fn render_text(&self) -> String {
        if self.low_margin.is_empty() {
            return format!("恭喜！所有商品毛利率都高於 {}%", self.target_margin);
        }
        format!(
            "低於 {}% 目標毛利率的商品共 {} 個（全部 {} 個）\n平均毛利率 {:.2}%，最高 {:.2}%，最低 {:.2}%",
            self.target_margin,
            self.low_margin.len(),
            self.products.len(),
            self.stats.average,
            self.stats.highest,
            self.stats.lowest
        )
    }
}

/// 毛利率分析器
pub struct MarginAnalyzer {
    /// 分析配置
    config: MarginConfig,
}

impl MarginAnalyzer {
    /// 創建新的毛利率分析器
    pub fn new(config: MarginConfig) -> Self {
        Self { config }
    }

    /// 分析訂單明細
    ///
    /// 空輸入不是錯誤，回傳空報告。
    pub fn analyze(&self, rows: &[Row]) -> MarginReport {
        tracing::info!(
            "開始毛利率分析：{} 列，目標毛利率 {}%",
            rows.len(),
            self.config.target_margin
        );

        // Step 1: 解析明細並按商品累計
        let mut accumulator = MarginAccumulator::new();
        for row in rows {
            accumulator.add(&OrderLine::resolve(row, &self.config.fields));
        }
        let products = accumulator.finish();

        // Step 2: 低毛利分組與整體統計
        let low_margin: Vec<ProductMargin> = products
            .iter()
            .filter(|p| p.gross_margin < self.config.target_margin)
            .cloned()
            .collect();
        let stats = Self::stats(&products);

        // Step 3: 毛利率分佈
        let bands = Self::bands(&products);

        tracing::info!(
            "毛利率分析完成：{} 個商品，低毛利 {} 個",
            products.len(),
            low_margin.len()
        );

        MarginReport {
            products,
            low_margin,
            target_margin: self.config.target_margin,
            stats,
            bands,
        }
    }

    fn stats(products: &[ProductMargin]) -> MarginStats {
        if products.is_empty() {
            return MarginStats {
                average: Decimal::ZERO,
                highest: Decimal::ZERO,
                lowest: Decimal::ZERO,
            };
        }

        let sum: Decimal = products.iter().map(|p| p.gross_margin).sum();
        // 商品已按毛利率升冪排序
        MarginStats {
            average: sum / Decimal::from(products.len() as i64),
            highest: products[products.len() - 1].gross_margin,
            lowest: products[0].gross_margin,
        }
    }

    fn bands(products: &[ProductMargin]) -> Vec<MarginBand> {
        let ranges: [(i64, i64, &'static str); 5] = [
            (0, 10, "0-10%（嚴重偏低）"),
            (10, 20, "10-20%（偏低）"),
            (20, 30, "20-30%（待改善）"),
            (30, 50, "30-50%（健康）"),
            (50, 100, "50% 以上（高毛利）"),
        ];

        ranges
            .iter()
            .map(|&(min, max, label)| {
                let min = Decimal::from(min);
                let max = Decimal::from(max);
                let count = products
                    .iter()
                    .filter(|p| p.gross_margin >= min && p.gross_margin < max)
                    .count();
                MarginBand {
                    min,
                    max,
                    label: label.to_string(),
                    count,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replen_core::CellValue;
    use rstest::rstest;

    fn order_row(name: &str, price: &str, cost: &str, quantity: &str) -> Row {
        Row::new()
            .with("商品名称", CellValue::text(name))
            .with("商品售价", CellValue::text(price))
            .with("商品原价", CellValue::text(cost))
            .with("商品销售数量", CellValue::text(quantity))
    }

    #[test]
    fn test_analyze_partitions_low_margin() {
        let rows = vec![
            order_row("低毛利", "10", "9", "5"),
            order_row("高毛利", "100", "20", "2"),
        ];

        let analyzer = MarginAnalyzer::new(MarginConfig::new());
        let report = analyzer.analyze(&rows);

        assert_eq!(report.products.len(), 2);
        assert_eq!(report.low_margin.len(), 1);
        assert_eq!(report.low_margin[0].name, "低毛利");
        assert_eq!(report.target_margin, Decimal::from(30));
    }

    #[test]
    fn test_stats_cover_extremes() {
        let rows = vec![
            order_row("甲", "10", "9", "1"),
            order_row("乙", "10", "5", "1"),
            order_row("丙", "10", "1", "1"),
        ];

        let analyzer = MarginAnalyzer::new(MarginConfig::new());
        let report = analyzer.analyze(&rows);

        assert_eq!(report.stats.lowest, Decimal::from(10));
        assert_eq!(report.stats.highest, Decimal::from(90));
        assert_eq!(report.stats.average, Decimal::from(50));
    }

    #[test]
    fn test_bands_count_products() {
        let rows = vec![
            order_row("甲", "10", "9", "1"),   // 10%
            order_row("乙", "10", "8.5", "1"), // 15%
            order_row("丙", "10", "6", "1"),   // 40%
        ];

        let analyzer = MarginAnalyzer::new(MarginConfig::new());
        let report = analyzer.analyze(&rows);

        let counts: Vec<usize> = report.bands.iter().map(|b| b.count).collect();
        // 10% 與 15% 落在 [10, 20)，40% 落在 [30, 50)
        assert_eq!(counts, vec![0, 2, 0, 1, 0]);
    }

    #[rstest]
    // 區間下限含、上限不含
    #[case("9", 1)] // 毛利率 10% 落在 [10, 20)
    #[case("8", 2)] // 20% 落在 [20, 30)
    #[case("7", 3)] // 30% 落在 [30, 50)
    #[case("5", 4)] // 50% 落在 [50, 100)
    fn test_band_boundaries_are_half_open(#[case] cost: &str, #[case] band_index: usize) {
        let rows = vec![order_row("甲", "10", cost, "1")];

        let analyzer = MarginAnalyzer::new(MarginConfig::new());
        let report = analyzer.analyze(&rows);

        for (i, band) in report.bands.iter().enumerate() {
            assert_eq!(band.count, usize::from(i == band_index));
        }
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let analyzer = MarginAnalyzer::new(MarginConfig::new());
        let report = analyzer.analyze(&[]);

        assert!(report.products.is_empty());
        assert!(report.low_margin.is_empty());
        assert_eq!(report.stats.average, Decimal::ZERO);
        assert!(report.render_text().contains("恭喜"));
    }

    #[test]
    fn test_custom_target_margin() {
        let rows = vec![order_row("甲", "10", "6", "1")]; // 40%

        let analyzer =
            MarginAnalyzer::new(MarginConfig::new().with_target_margin(Decimal::from(50)));
        let report = analyzer.analyze(&rows);

        assert_eq!(report.low_margin.len(), 1);
    }
}

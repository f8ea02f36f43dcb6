//! 商品毛利統計

use crate::order::OrderLine;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 商品毛利
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMargin {
    /// 商品名稱
    pub name: String,

    /// 毛利率（百分比；售價為 0 時定義為 0）
    pub gross_margin: Decimal,

    /// 加權平均售價
    pub avg_price: Decimal,

    /// 加權平均原價（成本）
    pub avg_cost: Decimal,

    /// 總銷量
    pub total_sales: Decimal,

    /// 總銷售額
    pub total_revenue: Decimal,
}

impl ProductMargin {
    /// 達到目標毛利率所需的建議售價
    ///
    /// `目標 ≥ 100%` 無解，回傳平均原價。
    pub fn suggested_price(&self, target_margin: Decimal) -> Decimal {
        let hundred = Decimal::from(100);
        if target_margin >= hundred {
            return self.avg_cost;
        }
        self.avg_cost / (Decimal::ONE - target_margin / hundred)
    }
}

/// 單一商品的銷售累計
#[derive(Debug, Clone, Default)]
struct ProductTotals {
    total_sales: Decimal,
    total_revenue: Decimal,
    total_cost: Decimal,
}

impl ProductTotals {
    fn into_margin(self, name: String) -> ProductMargin {
        let (avg_price, avg_cost) = if self.total_sales > Decimal::ZERO {
            (
                self.total_revenue / self.total_sales,
                self.total_cost / self.total_sales,
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        let gross_margin = if avg_price > Decimal::ZERO {
            (avg_price - avg_cost) / avg_price * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        ProductMargin {
            name,
            gross_margin,
            avg_price,
            avg_cost,
            total_sales: self.total_sales,
            total_revenue: self.total_revenue,
        }
    }
}

/// 毛利統計器：按商品名稱分組累計，再計算加權平均與毛利率
#[derive(Debug, Default)]
pub struct MarginAccumulator {
    totals: HashMap<String, ProductTotals>,
}

impl MarginAccumulator {
    /// 創建空的統計器
    pub fn new() -> Self {
        Self::default()
    }

    /// 累計一筆明細（商品名稱為空的列略過）
    pub fn add(&mut self, line: &OrderLine) {
        if line.product_name.is_empty() {
            return;
        }

        let totals = self.totals.entry(line.product_name.clone()).or_default();
        totals.total_sales += line.quantity;
        totals.total_revenue += line.sale_price * line.quantity;
        totals.total_cost += line.original_price * line.quantity;
    }

    /// 結算為商品毛利列表（毛利率升冪，同值按名稱排序）
    pub fn finish(self) -> Vec<ProductMargin> {
        let mut products: Vec<ProductMargin> = self
            .totals
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(name, totals)| totals.into_margin(name))
            .collect();

        products.sort_by(|a, b| {
            a.gross_margin
                .cmp(&b.gross_margin)
                .then_with(|| a.name.cmp(&b.name))
        });
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: i64, cost: i64, quantity: i64) -> OrderLine {
        OrderLine {
            product_name: name.to_string(),
            sale_price: Decimal::from(price),
            original_price: Decimal::from(cost),
            quantity: Decimal::from(quantity),
        }
    }

    #[test]
    fn test_weighted_average_across_lines() {
        let mut accumulator = MarginAccumulator::new();
        // 同商品兩筆：售價 10 × 3 件 + 售價 20 × 1 件
        accumulator.add(&line("咖啡", 10, 5, 3));
        accumulator.add(&line("咖啡", 20, 5, 1));

        let products = accumulator.finish();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(product.total_sales, Decimal::from(4));
        assert_eq!(product.total_revenue, Decimal::from(50));
        // 加權均價 50 / 4 = 12.5
        assert_eq!(product.avg_price, Decimal::new(125, 1));
        assert_eq!(product.avg_cost, Decimal::from(5));
        // 毛利率 (12.5 - 5) / 12.5 = 60%
        assert_eq!(product.gross_margin, Decimal::from(60));
    }

    #[test]
    fn test_sorted_by_margin_ascending() {
        let mut accumulator = MarginAccumulator::new();
        accumulator.add(&line("高毛利", 100, 20, 1));
        accumulator.add(&line("低毛利", 10, 9, 1));
        accumulator.add(&line("中毛利", 10, 5, 1));

        let products = accumulator.finish();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["低毛利", "中毛利", "高毛利"]);
    }

    #[test]
    fn test_zero_price_margin_is_zero() {
        let mut accumulator = MarginAccumulator::new();
        accumulator.add(&line("贈品", 0, 3, 5));

        let products = accumulator.finish();
        assert_eq!(products[0].gross_margin, Decimal::ZERO);
    }

    #[test]
    fn test_zero_quantity_lines_do_not_panic() {
        let mut accumulator = MarginAccumulator::new();
        accumulator.add(&line("滯銷品", 10, 5, 0));

        let products = accumulator.finish();
        assert_eq!(products[0].avg_price, Decimal::ZERO);
        assert_eq!(products[0].gross_margin, Decimal::ZERO);
    }

    #[test]
    fn test_unnamed_lines_skipped() {
        let mut accumulator = MarginAccumulator::new();
        accumulator.add(&line("", 10, 5, 1));

        assert!(accumulator.finish().is_empty());
    }

    #[test]
    fn test_suggested_price() {
        let product = line("咖啡", 10, 7, 1);
        let mut accumulator = MarginAccumulator::new();
        accumulator.add(&product);
        let product = accumulator.finish().remove(0);

        // 成本 7，目標 30%：7 / 0.7 = 10
        assert_eq!(product.suggested_price(Decimal::from(30)), Decimal::from(10));
        // 目標 ≥ 100% 無解
        assert_eq!(
            product.suggested_price(Decimal::from(100)),
            Decimal::from(7)
        );
    }
}

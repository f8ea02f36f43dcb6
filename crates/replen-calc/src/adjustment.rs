//! 數量調整引擎
//!
//! 超量判斷與起訂量地板。超量比較使用嚴格大於：基礎建議量
//! 等於比對銷量時不砍半。起訂量只在查得參考列時套用，且在
//! 砍半之後，因此起訂量永遠是最終量的下限。

use crate::reference::ReferenceIndex;
use replen_core::{ComparisonMode, ListingRow};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單列調整結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// 最終補貨量（向下取整；非正值由彙總端剔除）
    pub final_qty: i64,

    /// 是否因超量被砍半
    pub halved: bool,
}

/// 數量調整計算器
pub struct AdjustmentCalculator;

impl AdjustmentCalculator {
    /// 計算單列的最終補貨量
    ///
    /// 流程：
    /// 1. `none` 模式或查無參考列：採購建議量直接通過
    /// 2. 超量判斷（基礎建議量 > 比對銷量）：採購建議量砍半
    ///    向下取整，下限 1
    /// 3. 起訂量地板：參考列起訂量大於目前值時取起訂量
    /// 4. 最終量向下取整為整數
    pub fn apply(listing: &ListingRow, mode: ComparisonMode, index: &ReferenceIndex) -> Adjustment {
        let reference = if mode.is_no_compare() {
            None
        } else {
            index.get(&listing.upc)
        };

        let (mut final_qty, halved) = match reference {
            Some(reference) => {
                let comparison = reference.comparison_sales(mode);
                if listing.baseline_qty > comparison {
                    let halved_qty = (listing.purchase_qty / Decimal::from(2))
                        .floor()
                        .max(Decimal::ONE);
                    tracing::debug!(
                        "砍半: SKU {} 基礎 {} > 比對銷量 {}，採購 {} → {}",
                        listing.sku,
                        listing.baseline_qty,
                        comparison,
                        listing.purchase_qty,
                        halved_qty
                    );
                    (halved_qty, true)
                } else {
                    (listing.purchase_qty, false)
                }
            }
            None => (listing.purchase_qty, false),
        };

        if let Some(reference) = reference {
            if reference.min_order_qty > final_qty {
                tracing::debug!(
                    "起訂量: SKU {} {} → {}",
                    listing.sku,
                    final_qty,
                    reference.min_order_qty
                );
                final_qty = reference.min_order_qty;
            }
        }

        Adjustment {
            final_qty: final_qty.floor().to_i64().unwrap_or(0),
            halved,
        }
    }
}

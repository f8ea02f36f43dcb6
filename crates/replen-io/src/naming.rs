//! 輸出檔名
//!
//! 與桌面端下載目錄的既有檔名慣例一致，改動會打亂使用者的
//! 歸檔習慣。

use chrono::Utc;
use replen_core::PlanTemplate;

/// 檔名時間戳：UTC，取到秒，冒號替換為連字號
///
/// 例如 `2026-08-22T10-30-45`。
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// 補貨建議輸出檔名：`{原檔名}-{門店,門店}-补货计划.csv`
///
/// `stem` 為來源檔名（不含副檔名）；門店名稱為空時省略該段。
pub fn advice_file_name(stem: &str, store_names: &[String]) -> String {
    if store_names.is_empty() {
        format!("{}-补货计划.csv", stem)
    } else {
        format!("{}-{}-补货计划.csv", stem, store_names.join(","))
    }
}

/// 採購計劃輸出檔名：`采购计划_{平台}_{時間戳}.csv`
pub fn plan_file_name(template: PlanTemplate) -> String {
    format!("采购计划_{}_{}.csv", template.display_name(), timestamp())
}

/// 低毛利商品輸出檔名：`低毛利商品_{時間戳}.csv`
pub fn low_margin_file_name() -> String {
    format!("低毛利商品_{}.csv", timestamp())
}

/// 活動報名表輸出檔名：`饿了么活动报名表_{時間戳}.csv`
pub fn activity_file_name() -> String {
    format!("饿了么活动报名表_{}.csv", timestamp())
}

/// 爆好價報名輸出檔名：`爆好价报名_{原檔名}.csv`
///
/// `stem` 為來源檔名（不含副檔名）。
pub fn price_report_file_name(stem: &str) -> String {
    format!("爆好价报名_{}.csv", stem)
}

//! 結果輸出
//!
//! 依平台模板序列化為表格檔案。欄名必須與平台匯入格式逐字
//! 一致（含「补货单价(元）」的全形括號），不要整理。

use crate::Result;
use replen_calc::{PlanResult, PlanRow, PriceReportResult};
use replen_core::{AdviceRow, PlanTemplate};
use replen_margin::MarginReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 牽牛花補貨單表頭（補貨建議與牽牛花採購計劃共用）
const QIANNIUHUA_HEADERS: [&str; 7] = [
    "*门店/仓编码",
    "*SKU编码",
    "补货量",
    "商品名称",
    "补货单价(元）",
    "供应商编码",
    "补货单位",
];

/// 翱象補貨單首列填寫說明
const AOXIANG_NOTES: [&str; 6] = [
    "必填",
    "",
    "",
    "非必填\n可通过补货建议列表导出的供应商填入，不填则默认取供货关系设置的默认供应商",
    "非必填\n下拉选择【库存单位】，【采购单位】，不填则默认取供货关系设置的单位",
    "非必填\n可通过补货建议列表导出的采购价填入，不填则默认取供货关系设置的采购价",
];

/// 翱象補貨單表頭（第二列）
const AOXIANG_HEADERS: [&str; 6] = [
    "*仓库/门店编码",
    "*商品编码",
    "*补货量",
    "供应商编码",
    "单位",
    "采购价",
];

/// 活動報名表首列說明
const ACTIVITY_NOTE: &str = "说明： \n 1、不要删除表头 \n 2、商品条形码：必填。";

/// 活動報名表表頭（第二列，單欄）
const ACTIVITY_HEADER: &str = "商品条形码（必填）";

/// 爆好價報名表頭
const PRICE_REPORT_HEADERS: [&str; 5] = ["UPC条形码", "活动价", "活动初始库存", "是否组包", "组包件数"];

/// 寫出補貨建議（牽牛花補貨模板；商品名稱與單價留空由平台帶入）
pub fn write_advice<W: Write>(output: W, rows: &[AdviceRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(QIANNIUHUA_HEADERS)?;

    for row in rows {
        let quantity = row.quantity.to_string();
        writer.write_record([
            row.store_code.as_str(),
            row.sku.as_str(),
            quantity.as_str(),
            "",
            "",
            row.supplier_code.as_str(),
            row.unit.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// 寫出補貨建議到檔案
pub fn write_advice_file(path: impl AsRef<Path>, rows: &[AdviceRow]) -> Result<()> {
    write_advice(File::create(path)?, rows)
}

/// 寫出採購計劃（依結果的目標平台模板）
pub fn write_plan<W: Write>(output: W, result: &PlanResult) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    match result.template {
        PlanTemplate::Aoxiang => {
            writer.write_record(AOXIANG_NOTES)?;
            writer.write_record(AOXIANG_HEADERS)?;
            for row in &result.rows {
                write_aoxiang_row(&mut writer, row)?;
            }
        }
        PlanTemplate::Qianniuhua => {
            writer.write_record(QIANNIUHUA_HEADERS)?;
            for row in &result.rows {
                write_qianniuhua_row(&mut writer, row)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// 寫出採購計劃到檔案
pub fn write_plan_file(path: impl AsRef<Path>, result: &PlanResult) -> Result<()> {
    write_plan(File::create(path)?, result)
}

fn write_aoxiang_row<W: Write>(writer: &mut csv::Writer<W>, row: &PlanRow) -> Result<()> {
    let quantity = row.quantity.to_string();
    writer.write_record([
        row.store_code.as_str(),
        row.sku.as_str(),
        quantity.as_str(),
        row.supplier_code.as_str(),
        "",
        row.price.as_str(),
    ])?;
    Ok(())
}

fn write_qianniuhua_row<W: Write>(writer: &mut csv::Writer<W>, row: &PlanRow) -> Result<()> {
    let quantity = row.quantity.to_string();
    writer.write_record([
        row.store_code.as_str(),
        row.sku.as_str(),
        quantity.as_str(),
        "",
        row.price.as_str(),
        row.supplier_code.as_str(),
        "",
    ])?;
    Ok(())
}

/// 寫出活動報名表（首列說明 + 單欄表頭 + 條碼列）
pub fn write_activity<W: Write>(output: W, entries: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record([ACTIVITY_NOTE])?;
    writer.write_record([ACTIVITY_HEADER])?;

    for entry in entries {
        writer.write_record([entry.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

/// 寫出活動報名表到檔案
pub fn write_activity_file(path: impl AsRef<Path>, entries: &[String]) -> Result<()> {
    write_activity(File::create(path)?, entries)
}

/// 寫出爆好價報名表
pub fn write_price_report<W: Write>(output: W, result: &PriceReportResult) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(PRICE_REPORT_HEADERS)?;

    for row in &result.rows {
        let stock = row.stock.to_string();
        writer.write_record([
            row.upc.as_str(),
            row.price.as_str(),
            stock.as_str(),
            row.is_package.as_str(),
            row.package_count.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// 寫出爆好價報名表到檔案
pub fn write_price_report_file(path: impl AsRef<Path>, result: &PriceReportResult) -> Result<()> {
    write_price_report(File::create(path)?, result)
}

/// 寫出低毛利商品清單
///
/// 金額欄帶 `¥` 前綴、毛利率帶 `%` 後綴，皆取兩位小數。
pub fn write_low_margin<W: Write>(output: W, report: &MarginReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record([
        "商品名称",
        "毛利率",
        "平均售价",
        "平均原价",
        "总销量",
        "总销售额",
        "建议售价",
    ])?;

    for product in &report.low_margin {
        writer.write_record([
            product.name.clone(),
            format!("{:.2}%", product.gross_margin),
            format!("¥{:.2}", product.avg_price),
            format!("¥{:.2}", product.avg_cost),
            product.total_sales.to_string(),
            format!("¥{:.2}", product.total_revenue),
            format!("¥{:.2}", product.suggested_price(report.target_margin)),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// 寫出低毛利商品清單到檔案
pub fn write_low_margin_file(path: impl AsRef<Path>, report: &MarginReport) -> Result<()> {
    write_low_margin(File::create(path)?, report)
}

//! 表格讀取（含表頭自動偵測）
//!
//! 商家後台匯出的表格表頭不一定在第一列（常見前置說明列或
//! 合併儲存格殘留），在前 10 列中尋找含商品標記的列作為表頭，
//! 找不到時回退第一列。

use crate::Result;
use replen_core::{CellValue, Row};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 表頭偵測的掃描列數上限
const HEADER_SCAN_LIMIT: usize = 10;

/// 是否為表頭列：任一儲存格含商品標記字樣
///
/// UPC 不分大小寫；「条码」「SKU」「门店」完全符合子字串。
fn is_header_row(cells: &[String]) -> bool {
    cells.iter().any(|cell| {
        cell.to_lowercase().contains("upc")
            || cell.contains("条码")
            || cell.contains("SKU")
            || cell.contains("门店")
    })
}

/// 清理表頭欄名：去除換行符並修剪空白
fn clean_header(cell: &str) -> String {
    cell.replace(['\r', '\n'], "").trim().to_string()
}

/// 讀取整個表格為資料列
///
/// 表頭列之後的每一列映射為 [`Row`]；欄名為空或儲存格為空的
/// 欄位略過，列內欄序維持表格欄序。
pub fn read_table<R: Read>(input: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for record in csv_reader.records() {
        records.push(record?);
    }

    // 偵測表頭列
    let mut headers: Vec<String> = Vec::new();
    let mut header_index = 0usize;
    for (i, record) in records.iter().take(HEADER_SCAN_LIMIT).enumerate() {
        let cells: Vec<String> = record.iter().map(clean_header).collect();
        if is_header_row(&cells) {
            tracing::debug!("偵測到表頭列: 第 {} 列", i + 1);
            headers = cells;
            header_index = i;
            break;
        }
    }

    // 回退：第一列作為表頭
    if headers.is_empty() {
        if let Some(first) = records.first() {
            tracing::debug!("未偵測到表頭列，回退使用第一列");
            headers = first.iter().map(|cell| cell.trim().to_string()).collect();
            header_index = 0;
        }
    }

    let mut rows = Vec::with_capacity(records.len().saturating_sub(header_index + 1));
    for record in records.iter().skip(header_index + 1) {
        let mut row = Row::new();
        for (col, value) in record.iter().enumerate() {
            match headers.get(col) {
                Some(header) if !header.is_empty() && !value.is_empty() => {
                    row.push(header.clone(), CellValue::text(value));
                }
                _ => {}
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// 從檔案路徑讀取表格
pub fn read_table_file(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let file = File::open(path)?;
    read_table(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_on_first_row() {
        let data = "商品UPC,7天销量\n690001,40\n690002,12\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("商品UPC"), Some(&CellValue::text("690001")));
        assert_eq!(rows[1].get("7天销量"), Some(&CellValue::text("12")));
    }

    #[test]
    fn test_header_detected_past_leading_rows() {
        let data = "\
導出報表,,\n\
統計區間: 2026-08,,\n\
商品UPC,7天销量,30天销量\n\
690001,40,150\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("商品UPC"), Some(&CellValue::text("690001")));
        assert_eq!(rows[0].get("30天销量"), Some(&CellValue::text("150")));
    }

    #[test]
    fn test_fallback_to_first_row() {
        let data = "编号,数量\nA1,5\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("编号"), Some(&CellValue::text("A1")));
    }

    #[test]
    fn test_headers_cleaned_of_newlines_and_spaces() {
        let data = "\" 商品\nUPC \",\" 7天销量 \"\n690001,40\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows[0].get("商品UPC"), Some(&CellValue::text("690001")));
        assert_eq!(rows[0].get("7天销量"), Some(&CellValue::text("40")));
    }

    #[test]
    fn test_empty_cells_and_unnamed_columns_skipped() {
        let data = "商品UPC,,7天销量\n690001,備註,40\n690002,,\n";
        let rows = read_table(data.as_bytes()).unwrap();

        // 無欄名的欄與空儲存格不進入資料列
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[1].get("7天销量"), None);
    }

    #[test]
    fn test_ragged_records_tolerated() {
        let data = "商品UPC,7天销量\n690001\n690002,12,多余\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].get("7天销量"), Some(&CellValue::text("12")));
    }

    #[test]
    fn test_empty_input() {
        let rows = read_table("".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}

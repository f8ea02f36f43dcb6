//! 補貨建議計算示例

use replen_calc::ReplenCalculator;
use replen_core::{AdvisorConfig, ComparisonMode};
use replen_io::{naming, reader, writer};

const LISTING_CSV: &str = "\
检查状态,供应商商品链接,商品UPC,商品SKU,收货方编码,收货方名称,发货方编码,采购单位,基础建议补货量,采购建议补货量\n\
已通过,https://s.example/p1,690001,SKU-001,S001,门店A,V001,箱,10,12\n\
已通过,https://s.example/p2,690002,SKU-002,S001,门店A,V001,箱,50,20\n\
已通过,https://s.example/p3,690003,SKU-003,S002,门店B,V002,件,50,20\n\
未通过,https://s.example/p4,690001,SKU-004,S003,门店C,V001,箱,10,12\n";

const REFERENCE_CSV: &str = "\
商品UPC,7天销量,30天销量,起订量(采购单位)\n\
690001,40,150,0\n\
690002,40,150,0\n\
690003,40,150,15\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 補貨建議計算示例 ===\n");

    // 載入補貨清單與參考表
    let listing_rows = reader::read_table(LISTING_CSV.as_bytes())?;
    let reference_rows = reader::read_table(REFERENCE_CSV.as_bytes())?;

    // 以週銷量模式計算
    let calculator = ReplenCalculator::new(AdvisorConfig::new(ComparisonMode::Week));
    let result = calculator.calculate(&listing_rows, &reference_rows)?;

    println!("\n建議列:");
    for row in &result.rows {
        println!(
            "  - 門店 {} SKU {} 補貨量 {}{}",
            row.store_code,
            row.sku,
            row.quantity,
            if row.halved { "（已砍半）" } else { "" }
        );
    }

    for warning in &result.warnings {
        println!("警告: {}", warning.message);
    }

    println!("\n{}", result.summary.render_text());
    println!(
        "\n彙總 JSON: {}",
        serde_json::to_string_pretty(&result.summary)?
    );

    // 寫出補貨單
    let file_name = naming::advice_file_name("8月补货清单", &result.summary.store_names);
    let mut buffer = Vec::new();
    writer::write_advice(&mut buffer, &result.rows)?;
    println!("\n輸出檔案 {}:\n{}", file_name, String::from_utf8(buffer)?);

    Ok(())
}

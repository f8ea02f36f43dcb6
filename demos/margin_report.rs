//! 毛利率分析示例

use replen_io::{naming, reader, writer};
use replen_margin::{MarginAnalyzer, MarginConfig};
use rust_decimal::Decimal;

const ORDERS_CSV: &str = "\
商品名称,商品售价,商品原价,商品销售数量\n\
美式咖啡,18,6.5,42\n\
美式咖啡,16,6.5,8\n\
烤肠,6,5.5,10\n\
可乐,3,2.8,20\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 毛利率分析示例 ===\n");

    // 載入訂單明細，以 30% 目標毛利率分析
    let rows = reader::read_table(ORDERS_CSV.as_bytes())?;
    let config = MarginConfig::new().with_target_margin(Decimal::from(30));
    let report = MarginAnalyzer::new(config).analyze(&rows);

    println!("{}\n", report.render_text());

    println!("低毛利商品:");
    for product in &report.low_margin {
        println!(
            "  - {} 毛利率 {:.2}%，建議售價 ¥{:.2}",
            product.name,
            product.gross_margin,
            product.suggested_price(report.target_margin)
        );
    }

    println!("\n毛利率分佈:");
    for band in &report.bands {
        println!("  {} {} 個", band.label, band.count);
    }

    // 寫出低毛利清單
    let mut buffer = Vec::new();
    writer::write_low_margin(&mut buffer, &report)?;
    println!(
        "\n輸出檔案 {}:\n{}",
        naming::low_margin_file_name(),
        String::from_utf8(buffer)?
    );

    Ok(())
}

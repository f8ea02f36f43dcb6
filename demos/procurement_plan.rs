//! 採購計劃生成示例

use replen_calc::PlanGenerator;
use replen_core::{PlanConfig, PlanTemplate};
use replen_io::{naming, reader, writer};

const FIRST_ORDER_CSV: &str = "\
*门店/仓编码,*SKU编码,*采购量,采购单价(元),供应商编码,购买状态\n\
S001,SKU-001,6,3.5,V001,成功\n\
S001,SKU-002,4,2,V001,失败\n";

const SECOND_ORDER_CSV: &str = "\
*门店/仓编码,*SKU编码,*采购量,采购单价(元),供应商编码,购买状态\n\
S002,SKU-003,9,5,V002,成功\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 採購計劃生成示例 ===\n");

    // 載入兩個採購單明細檔案
    let sources = vec![
        reader::read_table(FIRST_ORDER_CSV.as_bytes())?,
        reader::read_table(SECOND_ORDER_CSV.as_bytes())?,
    ];

    // 兩個平台模板各生成一次
    for template in [PlanTemplate::Qianniuhua, PlanTemplate::Aoxiang] {
        let generator = PlanGenerator::new(PlanConfig::new(template));
        let result = generator.generate(&sources)?;

        println!("{}\n", result.render_text());

        let mut buffer = Vec::new();
        writer::write_plan(&mut buffer, &result)?;
        println!(
            "輸出檔案 {}:\n{}",
            naming::plan_file_name(template),
            String::from_utf8(buffer)?
        );
    }

    Ok(())
}

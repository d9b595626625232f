//! 輸入順序無關性示例
//!
//! 同一批訂單明細不論以什麼順序餵入，分組結果都相同。

use ppg::{LineItem, PackingEngine};

fn item(po: &str, color_style: &str, size: &str, quantity: u32) -> LineItem {
    LineItem::new(
        po.to_string(),
        color_style.to_string(),
        size.to_string(),
        quantity,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 輸入順序無關性示例 ===\n");

    // 同一批明細的兩種排列
    let forward = vec![
        item("100", "RED - 12", "6-12M", 5),
        item("100", "NAVY - 9", "2-3Y", 2),
        item("200", "NAVY - 9", "2-3Y", 2),
        item("200", "RED - 12", "6-12M", 5),
        item("300", "GREEN - 7", "7-8Y", 8),
    ];
    let reversed: Vec<LineItem> = forward.iter().rev().cloned().collect();

    let engine = PackingEngine::with_default_chart();
    let a = engine.run(&forward)?;
    let b = engine.run(&reversed)?;

    println!("正序輸入的分組:");
    for group in &a.groups {
        println!("  - {}: [{}]", group.label(), group.po_numbers.join(", "));
    }

    println!("\n倒序輸入的分組:");
    for group in &b.groups {
        println!("  - {}: [{}]", group.label(), group.po_numbers.join(", "));
    }

    let identical = a.groups == b.groups && a.report_rows == b.report_rows;
    println!("\n兩種順序的結果一致: {}", identical);

    Ok(())
}

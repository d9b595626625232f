//! 簡單裝箱分組示例

use std::path::Path;

use ppg::{LineItem, PackingEngine, ReportRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單裝箱分組示例 ===\n");

    // 準備訂單明細：三張 PO，其中兩張內容完全相同
    let items = vec![
        LineItem::new(
            "4500012345".to_string(),
            "RED - 12".to_string(),
            "6-12M".to_string(),
            40,
        ),
        LineItem::new(
            "4500012345".to_string(),
            "RED - 12".to_string(),
            "12-18M".to_string(),
            20,
        ),
        LineItem::new(
            "4500012346".to_string(),
            "NAVY - 9".to_string(),
            "2-3Y".to_string(),
            12,
        ),
        LineItem::new(
            "4500012347".to_string(),
            "RED - 12".to_string(),
            "6-12M".to_string(),
            40,
        ),
        LineItem::new(
            "4500012347".to_string(),
            "RED - 12".to_string(),
            "12-18M".to_string(),
            20,
        ),
    ];

    println!("訂單明細:");
    for item in &items {
        println!(
            "  - PO: {}, 色款: {}, 尺碼: {}, 數量: {}",
            item.po_number, item.color_style, item.size, item.quantity
        );
    }

    // 執行分組計算
    let engine = PackingEngine::with_default_chart();
    let result = engine.run(&items)?;

    println!("\n分組結果:");
    for group in &result.groups {
        println!(
            "  - {} ({} 張 PO): {}",
            group.label(),
            group.po_count(),
            group.po_numbers.join(", ")
        );
    }

    println!("\n彙總:");
    println!("  群組數: {}", result.summary.total_groups);
    println!("  PO 總數: {}", result.summary.total_po_count);
    println!("  不同色款數: {}", result.summary.unique_color_styles);
    for band in &result.summary.band_totals {
        println!("  {} 總量: {}", band.band, band.quantity);
    }

    // 輸出報表
    let output = Path::new("Packing_Group_Report.xlsx");
    ReportRenderer::write_file(engine.chart(), &result.report_rows, output)?;
    println!("\n報表已輸出: {}", output.display());

    Ok(())
}

//! ppg 命令列工具：PO 匯出檔 → 裝箱分組報表

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use ppg::{
    DelimitedOptions, PackingEngine, PackingRunResult, PpgError, ReportRenderer, SizeChart,
    WarningSeverity,
};

fn print_usage() {
    eprintln!("用法: ppg <輸入檔> [--out 檔案] [--chart 檔案.json] [--delimiter 字元] [--summary-json]");
    eprintln!();
    eprintln!("選項:");
    eprintln!("  --out           報表輸出路徑（預設: Packing_Group_Report.xlsx）");
    eprintln!("  --chart         尺碼表 JSON 配置檔（預設: 內建嬰幼兩帶尺碼表）");
    eprintln!("  --delimiter     分隔文字檔的分隔字元（預設: ,）");
    eprintln!("  --summary-json  彙總改以 JSON 輸出");
    eprintln!();
    eprintln!("範例:");
    eprintln!("  ppg po_export.xlsx");
    eprintln!("  ppg po_export.txt --delimiter \"\\t\" --out report.xlsx");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let mut output = PathBuf::from("Packing_Group_Report.xlsx");
    let mut chart_path: Option<PathBuf> = None;
    let mut delimiter: u8 = b',';
    let mut summary_json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if i + 1 < args.len() {
                    output = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("錯誤: --out 需要一個輸出路徑");
                    process::exit(1);
                }
            }
            "--chart" => {
                if i + 1 < args.len() {
                    chart_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("錯誤: --chart 需要一個 JSON 檔路徑");
                    process::exit(1);
                }
            }
            "--delimiter" => {
                if i + 1 < args.len() {
                    delimiter = parse_delimiter(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("錯誤: --delimiter 需要一個字元");
                    process::exit(1);
                }
            }
            "--summary-json" => {
                summary_json = true;
                i += 1;
            }
            other => {
                eprintln!("未知參數: {}", other);
                eprintln!();
                print_usage();
                process::exit(1);
            }
        }
    }

    if let Err(e) = run(&input, &output, chart_path.as_deref(), delimiter, summary_json) {
        eprintln!("錯誤: {:#}", e);
        process::exit(1);
    }
}

fn parse_delimiter(raw: &str) -> u8 {
    // 讓殼層好打的跳脫寫法
    let unescaped = match raw {
        "\\t" => "\t",
        other => other,
    };
    match unescaped.as_bytes() {
        [byte] => *byte,
        _ => {
            eprintln!("錯誤: --delimiter 必須是單一字元，收到 {:?}", raw);
            process::exit(1);
        }
    }
}

fn run(
    input: &Path,
    output: &Path,
    chart_path: Option<&Path>,
    delimiter: u8,
    summary_json: bool,
) -> anyhow::Result<()> {
    let chart = match chart_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("讀取尺碼表 '{}'", path.display()))?;
            SizeChart::from_json(&json)?
        }
        None => SizeChart::default_chart(),
    };

    let ingest = match input.extension().and_then(|e| e.to_str()) {
        Some("xlsx") | Some("xlsm") | Some("xls") | Some("xlsb") | Some("ods") => {
            ppg::read_xlsx_file(input)?
        }
        _ => ppg::read_delimited_file(input, DelimitedOptions::new().with_delimiter(delimiter))?,
    };

    if ingest.line_items.is_empty() {
        return Err(PpgError::EmptyInput.into());
    }

    let engine = PackingEngine::new(chart)?;
    let mut result = engine.run(&ingest.line_items)?;
    ppg::merge_ingest_warnings(&mut result, ingest.warnings);

    ReportRenderer::write_file(engine.chart(), &result.report_rows, output)?;

    if summary_json {
        let payload = serde_json::json!({
            "run_id": result.run_id,
            "summary": result.summary,
            "warnings": result.warnings,
            "calculation_time_ms": result.calculation_time_ms,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_summary(&result, output);
    }

    Ok(())
}

fn print_summary(result: &PackingRunResult, output: &Path) {
    println!("=== 裝箱分組結果 ===");
    println!("群組總數:       {}", result.summary.total_groups);
    println!("PO 總數:        {}", result.summary.total_po_count);
    println!("不重複色款:     {}", result.summary.unique_color_styles);
    println!("最大群組 PO 數: {}", result.summary.largest_group_po_count);
    for band_total in &result.summary.band_totals {
        println!("{} 數量總計: {}", band_total.band, band_total.quantity);
    }

    if !result.warnings.is_empty() {
        println!();
        println!("警告 {} 則:", result.warnings.len());
        for warning in &result.warnings {
            let tag = match warning.severity {
                WarningSeverity::Info => "INFO",
                WarningSeverity::Warning => "WARN",
                WarningSeverity::Error => "ERROR",
            };
            println!("  [{}] {} {}", tag, warning.context, warning.message);
        }
    }

    println!();
    println!("報表已寫入: {}", output.display());
}

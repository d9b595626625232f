//! # PPG
//!
//! 採購訂單裝箱分組報表引擎。讀取 PO 匯出檔（XLSX 或
//! 分隔文字），依各 PO 的色款尺碼數量簽名把內容完全相同
//! 的 PO 分在一組，再輸出帶樣式的裝箱分組 XLSX 報表。

use std::path::Path;

// Re-export 主要類型
pub use ppg_calc::{PackingEngine, PackingRunResult};
pub use ppg_core::{
    LineItem, PackingGroup, PackingWarning, PivotRow, PpgError, ReportRow, ReportSummary, Result,
    Signature, SignatureLine, SizeBand, SizeChart, WarningSeverity,
};
pub use ppg_io::{
    read_delimited, read_delimited_file, read_xlsx_bytes, read_xlsx_file, DelimitedOptions,
    IngestResult,
};
pub use ppg_report::ReportRenderer;

/// 一次完整轉換：XLSX 檔案 → 報表檔案
pub fn convert_xlsx_file(
    input: &Path,
    output: &Path,
    chart: SizeChart,
) -> Result<PackingRunResult> {
    let ingest = ppg_io::read_xlsx_file(input)?;
    run_and_write(chart, ingest, output)
}

/// 一次完整轉換：分隔文字檔案 → 報表檔案
pub fn convert_delimited_file(
    input: &Path,
    output: &Path,
    chart: SizeChart,
    options: DelimitedOptions,
) -> Result<PackingRunResult> {
    let ingest = ppg_io::read_delimited_file(input, options)?;
    run_and_write(chart, ingest, output)
}

/// 一次完整轉換：XLSX 位元組 → 報表位元組（上傳/下載情境）
pub fn convert_xlsx_bytes(bytes: &[u8], chart: SizeChart) -> Result<(Vec<u8>, PackingRunResult)> {
    let ingest = ppg_io::read_xlsx_bytes(bytes)?;
    let engine = PackingEngine::new(chart)?;
    let mut result = engine.run(&ingest.line_items)?;
    merge_ingest_warnings(&mut result, ingest.warnings);

    let report = ReportRenderer::render_bytes(engine.chart(), &result.report_rows)?;
    Ok((report, result))
}

/// 把讀取警告併入計算結果，排在計算警告之前
pub fn merge_ingest_warnings(result: &mut PackingRunResult, ingest_warnings: Vec<PackingWarning>) {
    if ingest_warnings.is_empty() {
        return;
    }
    let mut warnings = ingest_warnings;
    warnings.append(&mut result.warnings);
    result.warnings = warnings;
}

fn run_and_write(
    chart: SizeChart,
    ingest: IngestResult,
    output: &Path,
) -> Result<PackingRunResult> {
    let engine = PackingEngine::new(chart)?;
    let mut result = engine.run(&ingest.line_items)?;
    merge_ingest_warnings(&mut result, ingest.warnings);

    ReportRenderer::write_file(engine.chart(), &result.report_rows, output)?;
    tracing::info!("報表已寫入: {}", output.display());
    Ok(result)
}

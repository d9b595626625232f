//! 報表活頁簿渲染
//!
//! 渲染層只負責版面：收到的報表列已含全部數字與 PO 清單，
//! 這裡不再做任何計算，列順序照收到的輸出。

use std::path::Path;

use ppg_core::{PpgError, ReportRow, Result, SizeChart};
use umya_spreadsheet::{
    HorizontalAlignmentValues, Spreadsheet, VerticalAlignmentValues,
};

/// 工作表名稱
const SHEET_NAME: &str = "Packing Groups";

/// 報表渲染器
pub struct ReportRenderer;

impl ReportRenderer {
    /// 渲染為 XLSX 位元組（下載情境）
    pub fn render_bytes(chart: &SizeChart, rows: &[ReportRow]) -> Result<Vec<u8>> {
        let book = Self::build_workbook(chart, rows)?;

        let mut out: Vec<u8> = Vec::new();
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)
            .map_err(|e| PpgError::Render(format!("序列化活頁簿失敗: {}", e)))?;

        tracing::debug!("報表序列化完成：{} bytes", out.len());
        Ok(out)
    }

    /// 渲染並寫入檔案
    pub fn write_file(chart: &SizeChart, rows: &[ReportRow], path: &Path) -> Result<()> {
        let bytes = Self::render_bytes(chart, rows)?;
        std::fs::write(path, bytes)
            .map_err(|e| PpgError::Render(format!("寫入 '{}' 失敗: {}", path.display(), e)))
    }

    fn build_workbook(chart: &SizeChart, rows: &[ReportRow]) -> Result<Spreadsheet> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_by_name_mut("Sheet1")
            .ok_or_else(|| PpgError::Render("預設工作表不存在".to_string()))?;
        sheet.set_name(SHEET_NAME);

        let spans = chart.band_spans();
        // 色款欄 + 最寬尺碼帶 + Total 欄
        let merge_width = (chart.max_band_width() + 2) as u32;

        let mut current_row: u32 = 1;
        for group_rows in chunk_rows_by_group(rows) {
            let first = &group_rows[0];

            // 群組抬頭：合併、粗體、置中
            sheet.add_merge_cells(format!(
                "A{}:{}{}",
                current_row,
                column_letter(merge_width),
                current_row
            ));
            sheet.get_cell_mut((1u32, current_row)).set_value(format!(
                "Group {} (PO Count: {})",
                first.group_id, first.po_count
            ));
            let style = sheet.get_style_mut((1u32, current_row));
            style.get_font_mut().set_bold(true);
            style.get_font_mut().set_size(12.0);
            style
                .get_alignment_mut()
                .set_horizontal(HorizontalAlignmentValues::Center);
            current_row += 1;

            // 每個尺碼帶一張子表
            for (band_idx, band) in chart.bands.iter().enumerate() {
                let total_column = (band.size_count() + 2) as u32;

                sheet
                    .get_cell_mut((1u32, current_row))
                    .set_value("ColorStyle");
                for (offset, size) in band.sizes.iter().enumerate() {
                    sheet
                        .get_cell_mut(((offset + 2) as u32, current_row))
                        .set_value(size.as_str());
                }
                sheet
                    .get_cell_mut((total_column, current_row))
                    .set_value("Total");
                current_row += 1;

                for row in group_rows {
                    sheet
                        .get_cell_mut((1u32, current_row))
                        .set_value(row.color_style.as_str());
                    for (offset, idx) in spans[band_idx].clone().enumerate() {
                        let quantity = row.quantities.get(idx).copied().unwrap_or(0);
                        sheet
                            .get_cell_mut(((offset + 2) as u32, current_row))
                            .set_value_number(quantity);
                    }
                    let band_total = row.band_totals.get(band_idx).copied().unwrap_or(0);
                    sheet
                        .get_cell_mut((total_column, current_row))
                        .set_value_number(band_total as f64);
                    current_row += 1;
                }

                // 子表後空一列
                current_row += 1;
            }

            // PO 清單：合併儲存格、換行、靠上
            sheet
                .get_cell_mut((1u32, current_row))
                .set_value("Associated POs:");
            sheet.add_merge_cells(format!(
                "B{}:{}{}",
                current_row,
                column_letter(merge_width),
                current_row
            ));
            sheet
                .get_cell_mut((2u32, current_row))
                .set_value(first.po_list_joined("\n"));
            let style = sheet.get_style_mut((2u32, current_row));
            style.get_alignment_mut().set_wrap_text(true);
            style
                .get_alignment_mut()
                .set_vertical(VerticalAlignmentValues::Top);

            // 群組之間空一列
            current_row += 2;
        }

        Ok(book)
    }
}

/// 依群組編號切出連續列段（列已按群組編號遞增排好）
fn chunk_rows_by_group(rows: &[ReportRow]) -> Vec<&[ReportRow]> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for i in 1..=rows.len() {
        if i == rows.len() || rows[i].group_id != rows[start].group_id {
            chunks.push(&rows[start..i]);
            start = i;
        }
    }

    chunks
}

/// 1 起算的欄位編號 → Excel 欄位字母
fn column_letter(mut index: u32) -> String {
    let mut letters = String::new();
    while index > 0 {
        let rem = ((index - 1) % 26) as u8;
        letters.insert(0, (b'A' + rem) as char);
        index = (index - 1) / 26;
    }
    letters
}

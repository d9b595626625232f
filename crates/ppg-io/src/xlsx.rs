//! XLSX 活頁簿讀取
//!
//! 一律讀第一張工作表，格式（xlsx/xls/ods/xlsb）由
//! calamine 自動判別。

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader};
use ppg_core::{PackingWarning, PpgError, Result};

use crate::record::{self, ColumnMap};
use crate::IngestResult;

/// 從檔案讀取第一張工作表
pub fn read_xlsx_file(path: &Path) -> Result<IngestResult> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PpgError::Ingest(format!("無法開啟活頁簿 '{}': {}", path.display(), e)))?;
    read_first_sheet(&mut workbook)
}

/// 從記憶體位元組讀取第一張工作表（上傳情境）
pub fn read_xlsx_bytes(bytes: &[u8]) -> Result<IngestResult> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| PpgError::Ingest(format!("無法開啟活頁簿: {}", e)))?;
    read_first_sheet(&mut workbook)
}

fn read_first_sheet<RS>(workbook: &mut calamine::Sheets<RS>) -> Result<IngestResult>
where
    RS: std::io::Read + std::io::Seek,
{
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PpgError::Ingest("活頁簿沒有任何工作表".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PpgError::Ingest(format!("讀取工作表 '{}' 失敗: {}", sheet_name, e)))?;

    tracing::debug!("讀取工作表 '{}'：{} 列", sheet_name, range.height());
    ingest_range(&range)
}

fn ingest_range(range: &Range<Data>) -> Result<IngestResult> {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_to_text(cell).trim().to_string())
            .collect(),
        None => Vec::new(),
    };
    let columns = ColumnMap::resolve(&headers)?;

    let mut result = IngestResult::empty();
    for (idx, row) in rows.enumerate() {
        // 表頭佔第 1 列，資料從第 2 列起
        let row_number = idx + 2;

        let quantity =
            cell_to_quantity(cell_at(row, columns.quantity), row_number, &mut result.warnings);
        let po_text = cell_to_text(cell_at(row, columns.po_number));
        let description = cell_to_text(cell_at(row, columns.description));
        let style_code = cell_to_text(cell_at(row, columns.style_code));
        let size_text = cell_to_text(cell_at(row, columns.size));

        if let Some(item) = record::assemble_line_item(
            &po_text,
            &description,
            &style_code,
            &size_text,
            quantity,
            row_number,
            &mut result.warnings,
        ) {
            result.line_items.push(item);
        }
    }

    tracing::debug!(
        "XLSX 讀取完成：明細 {} 筆，警告 {} 則",
        result.line_items.len(),
        result.warnings.len()
    );
    Ok(result)
}

fn cell_at(row: &[Data], idx: usize) -> &Data {
    row.get(idx).unwrap_or(&Data::Empty)
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= -9_007_199_254_740_992.0 && *f <= 9_007_199_254_740_992.0
            {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::DateTime(serial) => serial.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERROR:{:?}", e),
    }
}

fn cell_to_quantity(cell: &Data, row_number: usize, warnings: &mut Vec<PackingWarning>) -> u32 {
    match cell {
        Data::Empty => 0,
        Data::Float(f) => record::coerce_quantity_number(*f, row_number, warnings),
        Data::Int(i) => record::coerce_quantity_number(*i as f64, row_number, warnings),
        other => record::coerce_quantity_text(&cell_to_text(other), row_number, warnings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 5] = [
        "PO Number",
        "Material Description",
        "Style Code",
        "Size",
        "Article Qty",
    ];

    fn workbook_bytes(headers: &[&str], rows: &[(&str, &str, &str, &str, f64)]) -> Vec<u8> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();

        for (col, name) in headers.iter().enumerate() {
            sheet.get_cell_mut(((col + 1) as u32, 1u32)).set_value(*name);
        }
        for (r, (po, desc, style, size, qty)) in rows.iter().enumerate() {
            let row = (r + 2) as u32;
            sheet.get_cell_mut((1u32, row)).set_value(*po);
            sheet.get_cell_mut((2u32, row)).set_value(*desc);
            sheet.get_cell_mut((3u32, row)).set_value(*style);
            sheet.get_cell_mut((4u32, row)).set_value(*size);
            sheet.get_cell_mut((5u32, row)).set_value_number(*qty);
        }

        let mut out: Vec<u8> = Vec::new();
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out).unwrap();
        out
    }

    #[test]
    fn test_read_bytes_builds_line_items() {
        let bytes = workbook_bytes(
            &HEADERS,
            &[
                ("4500012345", "BABY_TEE_RED", "STY12", "6-12M", 40.0),
                ("4500012346", "ROMPER_LS_NAVY", "STY9", "2-3Y", 12.0),
            ],
        );

        let result = read_xlsx_bytes(&bytes).unwrap();

        assert_eq!(result.line_items.len(), 2);
        assert!(result.warnings.is_empty());
        assert_eq!(result.line_items[0].po_number, "4500012345");
        assert_eq!(result.line_items[0].color_style, "RED - 12");
        assert_eq!(result.line_items[0].quantity, 40);
        assert_eq!(result.line_items[1].color_style, "NAVY - 9");
    }

    #[test]
    fn test_missing_columns_rejected() {
        let bytes = workbook_bytes(
            &["PO Number", "Material Description", "Style Code"],
            &[],
        );

        let err = read_xlsx_bytes(&bytes).unwrap_err();

        assert!(matches!(err, PpgError::Schema(_)));
        assert!(err.to_string().contains("Size"));
        assert!(err.to_string().contains("Article Qty"));
    }

    #[test]
    fn test_numeric_po_cell_loses_float_tail() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
        for (col, name) in HEADERS.iter().enumerate() {
            sheet.get_cell_mut(((col + 1) as u32, 1u32)).set_value(*name);
        }
        sheet.get_cell_mut((1u32, 2u32)).set_value_number(4500012345.0);
        sheet.get_cell_mut((2u32, 2u32)).set_value("BABY_TEE_RED");
        sheet.get_cell_mut((3u32, 2u32)).set_value("STY12");
        sheet.get_cell_mut((4u32, 2u32)).set_value("6-12M");
        sheet.get_cell_mut((5u32, 2u32)).set_value_number(5.0);
        let mut bytes: Vec<u8> = Vec::new();
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut bytes).unwrap();

        let result = read_xlsx_bytes(&bytes).unwrap();

        assert_eq!(result.line_items[0].po_number, "4500012345");
    }

    #[test]
    fn test_text_quantity_cell_warns_and_zeroes() {
        let bytes = {
            let mut book = umya_spreadsheet::new_file();
            let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
            for (col, name) in HEADERS.iter().enumerate() {
                sheet.get_cell_mut(((col + 1) as u32, 1u32)).set_value(*name);
            }
            sheet.get_cell_mut((1u32, 2u32)).set_value("100");
            sheet.get_cell_mut((2u32, 2u32)).set_value("BABY_TEE_RED");
            sheet.get_cell_mut((3u32, 2u32)).set_value("STY12");
            sheet.get_cell_mut((4u32, 2u32)).set_value("6-12M");
            sheet.get_cell_mut((5u32, 2u32)).set_value("n/a");
            let mut out: Vec<u8> = Vec::new();
            umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out).unwrap();
            out
        };

        let result = read_xlsx_bytes(&bytes).unwrap();

        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.line_items[0].quantity, 0);
        assert_eq!(result.warnings.len(), 1);
    }
}

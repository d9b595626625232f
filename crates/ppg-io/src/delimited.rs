//! 分隔文字檔讀取

use std::io::Read;
use std::path::Path;

use ppg_core::{PpgError, Result};

use crate::record::{self, ColumnMap};
use crate::IngestResult;

/// 分隔文字讀取選項
#[derive(Debug, Clone, Copy)]
pub struct DelimitedOptions {
    /// 欄位分隔字元
    pub delimiter: u8,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl DelimitedOptions {
    /// 創建預設選項（逗號分隔）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置分隔字元
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// 從檔案讀取分隔文字
pub fn read_delimited_file(path: &Path, options: DelimitedOptions) -> Result<IngestResult> {
    let file = std::fs::File::open(path)
        .map_err(|e| PpgError::Ingest(format!("無法開啟 '{}': {}", path.display(), e)))?;
    read_delimited(file, options)
}

/// 從任意資料來源讀取分隔文字
pub fn read_delimited<R: Read>(reader: R, options: DelimitedOptions) -> Result<IngestResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| PpgError::Ingest(format!("讀取表頭失敗: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut result = IngestResult::empty();
    for (idx, record) in csv_reader.records().enumerate() {
        // 表頭佔第 1 列，資料從第 2 列起
        let row_number = idx + 2;
        let record = record
            .map_err(|e| PpgError::Ingest(format!("第 {} 列解析失敗: {}", row_number, e)))?;

        let field = |i: usize| record.get(i).unwrap_or("");
        let quantity = record::coerce_quantity_text(
            field(columns.quantity),
            row_number,
            &mut result.warnings,
        );

        if let Some(item) = record::assemble_line_item(
            field(columns.po_number),
            field(columns.description),
            field(columns.style_code),
            field(columns.size),
            quantity,
            row_number,
            &mut result.warnings,
        ) {
            result.line_items.push(item);
        }
    }

    tracing::debug!(
        "分隔文字讀取完成：明細 {} 筆，警告 {} 則",
        result.line_items.len(),
        result.warnings.len()
    );
    Ok(result)
}

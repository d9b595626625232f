//! # PPG IO
//!
//! 輸入端讀取：XLSX 活頁簿與分隔文字檔，經欄位檢查與
//! 色款擷取後產出正規化明細

pub mod delimited;
pub mod extract;
mod record;
pub mod xlsx;

// Re-export 主要類型
pub use delimited::{read_delimited, read_delimited_file, DelimitedOptions};
pub use extract::{derive_color_style, extract_color, extract_style_digits, UNKNOWN_COLOR};
pub use xlsx::{read_xlsx_bytes, read_xlsx_file};

/// 輸入表頭必須包含的欄位名稱
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "PO Number",
    "Material Description",
    "Style Code",
    "Size",
    "Article Qty",
];

/// 讀取結果：正規化明細與讀取階段的資料品質警告
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// 正規化明細（保留輸入列順序）
    pub line_items: Vec<ppg_core::LineItem>,

    /// 讀取階段警告
    pub warnings: Vec<ppg_core::PackingWarning>,
}

impl IngestResult {
    /// 創建空的讀取結果
    pub fn empty() -> Self {
        Self {
            line_items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

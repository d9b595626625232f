//! # PPG Report
//!
//! 報表輸出：將報表列渲染為帶樣式的 XLSX 活頁簿

pub mod workbook;

// Re-export 主要類型
pub use workbook::ReportRenderer;

//! # PPG Core
//!
//! 裝箱分組核心資料模型與類型定義

pub mod group;
pub mod line_item;
pub mod pivot;
pub mod report;
pub mod signature;
pub mod size_chart;

// Re-export 主要類型
pub use group::PackingGroup;
pub use line_item::{compare_po_numbers, LineItem};
pub use pivot::PivotRow;
pub use report::{BandTotal, ReportRow, ReportSummary};
pub use signature::{Signature, SignatureLine};
pub use size_chart::{SizeBand, SizeChart};

/// 裝箱分組錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PpgError {
    #[error("缺少必要欄位: {0}")]
    Schema(String),

    #[error("輸入沒有任何明細列")]
    EmptyInput,

    #[error("讀取輸入失敗: {0}")]
    Ingest(String),

    #[error("尺碼表配置無效: {0}")]
    InvalidSizeChart(String),

    #[error("報表輸出失敗: {0}")]
    Render(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PpgError>;

/// 資料品質警告（不中斷計算，隨結果一併回報）
#[derive(Debug, Clone, serde::Serialize)]
pub struct PackingWarning {
    pub context: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PackingWarning {
    pub fn new(context: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            context,
            message,
            severity,
        }
    }

    pub fn info(context: String, message: String) -> Self {
        Self::new(context, message, WarningSeverity::Info)
    }

    pub fn warning(context: String, message: String) -> Self {
        Self::new(context, message, WarningSeverity::Warning)
    }

    pub fn error(context: String, message: String) -> Self {
        Self::new(context, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

//! # PPG Calculation Engine
//!
//! 裝箱分組計算引擎：樞紐彙整、簽名正規化、分組與報表展開

pub mod engine;
pub mod grouping;
pub mod materialize;
pub mod pivot;
pub mod signature;

// Re-export 主要類型
pub use engine::PackingEngine;
pub use grouping::GroupingEngine;
pub use materialize::Materializer;
pub use pivot::PivotBuilder;
pub use signature::SignatureBuilder;

/// 裝箱分組計算結果
#[derive(Debug, Clone, serde::Serialize)]
pub struct PackingRunResult {
    /// 群組（依群組編號遞增）
    pub groups: Vec<ppg_core::PackingGroup>,

    /// 報表列（群組編號遞增，組內依簽名順序）
    pub report_rows: Vec<ppg_core::ReportRow>,

    /// 報表彙總
    pub summary: ppg_core::ReportSummary,

    /// 警告信息
    pub warnings: Vec<ppg_core::PackingWarning>,

    /// 執行 ID（日誌關聯用）
    pub run_id: uuid::Uuid,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PackingRunResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            report_rows: Vec::new(),
            summary: ppg_core::ReportSummary::empty(),
            warnings: Vec::new(),
            run_id: uuid::Uuid::new_v4(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ppg_core::PackingWarning) {
        self.warnings.push(warning);
    }

    /// 檢查是否沒有任何群組
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

//! 報表列與彙總模型

use serde::{Deserialize, Serialize};

/// 報表列（一個 (群組, 色款) 輸出記錄，渲染層不再做任何計算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 群組編號
    pub group_id: u32,

    /// 色款鍵
    pub color_style: String,

    /// 各尺碼數量（依尺碼表展平順序）
    pub quantities: Vec<u32>,

    /// 各尺碼帶小計
    pub band_totals: Vec<u64>,

    /// 群組全部 PO 編號（已排序）
    pub po_numbers: Vec<String>,

    /// 群組不重複 PO 數（同群組各列相同）
    pub po_count: usize,
}

impl ReportRow {
    /// 群組標籤（如 "Group 3"）
    pub fn group_label(&self) -> String {
        format!("Group {}", self.group_id)
    }

    /// 以分隔字元串接 PO 清單
    pub fn po_list_joined(&self, separator: &str) -> String {
        self.po_numbers.join(separator)
    }
}

/// 單一尺碼帶的數量總計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTotal {
    /// 尺碼帶名稱
    pub band: String,

    /// 數量總計
    pub quantity: u64,
}

/// 報表彙總（對報表列序列的純歸約，每次重新計算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// 群組總數
    pub total_groups: usize,

    /// 全部群組不重複 PO 總數
    pub total_po_count: usize,

    /// 各尺碼帶數量總計（每群組計一次）
    pub band_totals: Vec<BandTotal>,

    /// 不重複色款數
    pub unique_color_styles: usize,

    /// 最大群組的 PO 數
    pub largest_group_po_count: usize,
}

impl ReportSummary {
    /// 創建空的彙總
    pub fn empty() -> Self {
        Self {
            total_groups: 0,
            total_po_count: 0,
            band_totals: Vec::new(),
            unique_color_styles: 0,
            largest_group_po_count: 0,
        }
    }
}

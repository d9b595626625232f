//! 樞紐列模型

use serde::{Deserialize, Serialize};

/// 樞紐列（一個觀察到的 (PO, 色款) 配對及其各尺碼數量）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotRow {
    /// 採購訂單編號
    pub po_number: String,

    /// 色款鍵
    pub color_style: String,

    /// 各尺碼數量（依尺碼表展平順序，缺漏尺碼補 0）
    pub quantities: Vec<u32>,

    /// 各尺碼帶小計（依帶順序）
    pub band_totals: Vec<u64>,
}

impl PivotRow {
    /// 創建新的樞紐列
    pub fn new(
        po_number: String,
        color_style: String,
        quantities: Vec<u32>,
        band_totals: Vec<u64>,
    ) -> Self {
        Self {
            po_number,
            color_style,
            quantities,
            band_totals,
        }
    }

    /// 全部尺碼數量加總
    pub fn total_quantity(&self) -> u64 {
        self.quantities.iter().map(|&q| q as u64).sum()
    }
}

//! 訂單明細模型

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 訂單明細（讀取階段產出的單筆正規化記錄）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 採購訂單編號（一律正規化為字串）
    pub po_number: String,

    /// 色款鍵（讀取階段由描述與款式碼導出）
    pub color_style: String,

    /// 尺碼標籤
    pub size: String,

    /// 數量
    pub quantity: u32,
}

impl LineItem {
    /// 創建新的明細
    pub fn new(po_number: String, color_style: String, size: String, quantity: u32) -> Self {
        Self {
            po_number,
            color_style,
            size,
            quantity,
        }
    }
}

/// PO 編號排序
///
/// 可解析為整數的編號依數值排序並排在最前，其餘依字典序；
/// 同數值不同寫法（如 "007" 與 "7"）再以字典序決勝，
/// 保證全序關係穩定。
pub fn compare_po_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

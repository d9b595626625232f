//! 簽名模型
//!
//! 簽名是一個 PO 裝箱內容的正規化表示：排序後的
//! (色款, 各尺碼數量) 序列。兩個 PO 分在同一組，
//! 若且唯若兩者簽名完全相等。

use serde::Serialize;

/// 簽名中的單一色款行
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SignatureLine {
    /// 色款鍵
    pub color_style: String,

    /// 各尺碼數量（依尺碼表展平順序）
    pub quantities: Vec<u32>,
}

impl SignatureLine {
    /// 創建新的色款行
    pub fn new(color_style: String, quantities: Vec<u32>) -> Self {
        Self {
            color_style,
            quantities,
        }
    }
}

/// 簽名（排序由建構函數維護，與輸入順序無關）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Signature {
    lines: Vec<SignatureLine>,
}

impl Signature {
    /// 創建簽名（色款行自動排序）
    pub fn new(mut lines: Vec<SignatureLine>) -> Self {
        lines.sort();
        Self { lines }
    }

    /// 色款行（保證已排序）
    pub fn lines(&self) -> &[SignatureLine] {
        &self.lines
    }

    /// 色款行數
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 檢查是否為空簽名
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_ignores_line_order() {
        let a = Signature::new(vec![
            SignatureLine::new("RED - 12".to_string(), vec![5, 0, 3]),
            SignatureLine::new("BLUE - 34".to_string(), vec![0, 2, 0]),
        ]);
        let b = Signature::new(vec![
            SignatureLine::new("BLUE - 34".to_string(), vec![0, 2, 0]),
            SignatureLine::new("RED - 12".to_string(), vec![5, 0, 3]),
        ]);

        assert_eq!(a, b);
        assert_eq!(a.lines()[0].color_style, "BLUE - 34");
    }

    #[test]
    fn test_signature_distinguishes_quantities() {
        let a = Signature::new(vec![SignatureLine::new(
            "RED - 12".to_string(),
            vec![5, 0, 0],
        )]);
        let b = Signature::new(vec![SignatureLine::new(
            "RED - 12".to_string(),
            vec![5, 0, 1],
        )]);

        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_signature_orders_by_color_style_first() {
        let a = Signature::new(vec![SignatureLine::new(
            "BLUE - 34".to_string(),
            vec![9, 9, 9],
        )]);
        let b = Signature::new(vec![SignatureLine::new(
            "RED - 12".to_string(),
            vec![0, 0, 0],
        )]);

        assert!(a < b);
    }

    #[test]
    fn test_empty_signature() {
        let sig = Signature::new(vec![]);
        assert!(sig.is_empty());
        assert_eq!(sig.line_count(), 0);
    }
}

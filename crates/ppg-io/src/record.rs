//! 列記錄組裝（XLSX 與分隔文字共用）

use ppg_core::{LineItem, PackingWarning, PpgError, Result};

use crate::extract::{derive_color_style, UNKNOWN_COLOR};
use crate::REQUIRED_COLUMNS;

/// 必要欄位在表頭中的位置
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnMap {
    pub po_number: usize,
    pub description: usize,
    pub style_code: usize,
    pub size: usize,
    pub quantity: usize,
}

impl ColumnMap {
    /// 對照表頭找出必要欄位；缺漏時一次列出全部缺的欄位
    pub(crate) fn resolve(headers: &[String]) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let positions: Vec<Option<usize>> =
            REQUIRED_COLUMNS.iter().map(|name| position(name)).collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .zip(&positions)
            .filter(|(_, pos)| pos.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(PpgError::Schema(missing.join(", ")));
        }

        match positions[..] {
            [Some(po_number), Some(description), Some(style_code), Some(size), Some(quantity)] => {
                Ok(Self {
                    po_number,
                    description,
                    style_code,
                    size,
                    quantity,
                })
            }
            _ => Err(PpgError::Schema(REQUIRED_COLUMNS.join(", "))),
        }
    }
}

/// 單列欄位 → 明細
///
/// 全部文字欄位皆空白的列視為尾端空列，靜默略過；
/// 缺 PO 或缺尺碼的列略過並回報警告。
pub(crate) fn assemble_line_item(
    po_text: &str,
    description: &str,
    style_code: &str,
    size_text: &str,
    quantity: u32,
    row_number: usize,
    warnings: &mut Vec<PackingWarning>,
) -> Option<LineItem> {
    let po_number = normalize_po_text(po_text);
    let size = size_text.trim();

    if po_number.is_empty()
        && description.trim().is_empty()
        && style_code.trim().is_empty()
        && size.is_empty()
    {
        return None;
    }

    if po_number.is_empty() {
        warnings.push(PackingWarning::warning(
            format!("第 {} 列", row_number),
            "缺少 PO Number，該列略過".to_string(),
        ));
        return None;
    }

    if size.is_empty() {
        warnings.push(PackingWarning::warning(
            format!("第 {} 列", row_number),
            "缺少 Size，該列略過".to_string(),
        ));
        return None;
    }

    let color_style = derive_color_style(description, style_code);
    if color_style.starts_with(&format!("{} - ", UNKNOWN_COLOR)) {
        warnings.push(PackingWarning::info(
            format!("第 {} 列", row_number),
            format!("描述 '{}' 無法辨識色彩，色款以 {} 標記", description, UNKNOWN_COLOR),
        ));
    }

    Some(LineItem::new(
        po_number,
        color_style,
        size.to_string(),
        quantity,
    ))
}

/// 數量文字 → 非負整數
///
/// 空白視為 0（無警告）；非數值、負值與超出範圍者以 0 計
/// 並回報警告；帶小數的數值截斷取整。
pub(crate) fn coerce_quantity_text(
    raw: &str,
    row_number: usize,
    warnings: &mut Vec<PackingWarning>,
) -> u32 {
    let text = raw.trim();
    if text.is_empty() {
        return 0;
    }

    match text.parse::<f64>() {
        Ok(value) => coerce_quantity_number(value, row_number, warnings),
        Err(_) => {
            warnings.push(PackingWarning::warning(
                format!("第 {} 列", row_number),
                format!("數量 '{}' 不是數值，以 0 計", raw),
            ));
            0
        }
    }
}

/// 數值數量 → 非負整數（規則同文字版）
pub(crate) fn coerce_quantity_number(
    value: f64,
    row_number: usize,
    warnings: &mut Vec<PackingWarning>,
) -> u32 {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        warnings.push(PackingWarning::warning(
            format!("第 {} 列", row_number),
            format!("數量 {} 超出可用範圍，以 0 計", value),
        ));
        return 0;
    }
    value.trunc() as u32
}

/// PO 儲存格正規化
///
/// 純數字字面照抄（保留前導零）；可解析為整數值的浮點
/// 字面（數值欄位常見的 "4500012345.0"）去掉小數尾巴；
/// 其餘文字原樣保留。
pub(crate) fn normalize_po_text(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() || text.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    if let Ok(value) = text.parse::<f64>() {
        if value.fract() == 0.0 && value >= 0.0 && value <= 9_007_199_254_740_992.0 {
            return format!("{:.0}", value);
        }
    }

    text.to_string()
}

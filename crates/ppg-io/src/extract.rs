//! 色款擷取
//!
//! 從自由文字的物料描述與款式碼導出色款鍵。擷取是
//! 啟發式的：描述寫法不規範時退回 UNKNOWN 標記，讓
//! 問題在報表上一眼可見，而不是讓整批轉換失敗。

use once_cell::sync::Lazy;
use regex::Regex;

/// 色彩擷取失敗時的標記值
pub const UNKNOWN_COLOR: &str = "UNKNOWN";

static STYLE_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)$").unwrap());

/// 從物料描述擷取色彩標籤
///
/// 規則：以底線分段，由後往前取第一個長度至少 3 的
/// 純字母段（轉大寫）。找不到且描述含逗號時，改以逗號
/// 分段由前往後找。兩者皆無則回傳 UNKNOWN。
pub fn extract_color(description: &str) -> String {
    for part in description.split('_').rev() {
        let clean = part.trim();
        if is_alpha_word(clean) {
            return clean.to_uppercase();
        }
    }

    if description.contains(',') {
        for segment in description.split(',') {
            let word = segment.trim();
            if is_alpha_word(word) {
                return word.to_uppercase();
            }
        }
    }

    UNKNOWN_COLOR.to_string()
}

/// 從款式碼擷取尾端數字（無尾端數字時回傳空字串）
pub fn extract_style_digits(style_code: &str) -> String {
    STYLE_DIGITS_RE
        .captures(style_code.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// 導出色款鍵："{色彩} - {款式數字}"
///
/// 任一邊擷取失敗時鍵仍然成形（UNKNOWN 或空數字），
/// 分組只看鍵的字面值。
pub fn derive_color_style(description: &str, style_code: &str) -> String {
    format!(
        "{} - {}",
        extract_color(description),
        extract_style_digits(style_code)
    )
}

fn is_alpha_word(s: &str) -> bool {
    s.chars().count() >= 3 && s.chars().all(|c| c.is_alphabetic())
}

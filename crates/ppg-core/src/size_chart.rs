//! 尺碼表配置模型
//!
//! 尺碼欄位是固定配置，不由輸入資料推導；輸入中出現
//! 配置之外的尺碼屬於資料品質問題，由上層以警告回報。

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::{PpgError, Result};

/// 尺碼帶（一組有序的尺碼標籤，對應報表中的一張子表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBand {
    /// 尺碼帶名稱（如 Infant、Toddler）
    pub name: String,

    /// 尺碼標籤（固定順序，即報表欄位順序）
    pub sizes: Vec<String>,
}

impl SizeBand {
    /// 創建新的尺碼帶
    pub fn new(name: String, sizes: Vec<String>) -> Self {
        Self { name, sizes }
    }

    /// 尺碼數
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }

    /// 檢查尺碼標籤是否屬於本帶
    pub fn contains(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s == label)
    }
}

/// 尺碼表（全部尺碼帶的固定順序集合）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeChart {
    /// 尺碼帶（順序即報表子表順序）
    pub bands: Vec<SizeBand>,
}

impl SizeChart {
    /// 創建新的尺碼表
    pub fn new(bands: Vec<SizeBand>) -> Self {
        Self { bands }
    }

    /// 預設尺碼表（嬰兒與幼兒兩帶）
    pub fn default_chart() -> Self {
        Self::new(vec![
            SizeBand::new(
                "Infant".to_string(),
                vec![
                    "6-12M".to_string(),
                    "12-18M".to_string(),
                    "18-24M".to_string(),
                ],
            ),
            SizeBand::new(
                "Toddler".to_string(),
                vec![
                    "2-3Y".to_string(),
                    "3-4Y".to_string(),
                    "5-6Y".to_string(),
                    "7-8Y".to_string(),
                ],
            ),
        ])
    }

    /// 從 JSON 字串載入並檢查配置
    pub fn from_json(json: &str) -> Result<Self> {
        let chart: SizeChart =
            serde_json::from_str(json).map_err(|e| PpgError::InvalidSizeChart(e.to_string()))?;
        chart.validate()?;
        Ok(chart)
    }

    /// 檢查配置有效性
    ///
    /// 尺碼標籤在整張表內必須唯一，否則樞紐欄位順序會有歧義。
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(PpgError::InvalidSizeChart(
                "至少需要一個尺碼帶".to_string(),
            ));
        }

        let mut seen_bands: Vec<&str> = Vec::new();
        let mut seen_labels: Vec<&str> = Vec::new();

        for band in &self.bands {
            if band.name.trim().is_empty() {
                return Err(PpgError::InvalidSizeChart(
                    "尺碼帶名稱不可為空白".to_string(),
                ));
            }
            if seen_bands.contains(&band.name.as_str()) {
                return Err(PpgError::InvalidSizeChart(format!(
                    "尺碼帶名稱 '{}' 重複",
                    band.name
                )));
            }
            seen_bands.push(band.name.as_str());

            if band.sizes.is_empty() {
                return Err(PpgError::InvalidSizeChart(format!(
                    "尺碼帶 '{}' 沒有任何尺碼",
                    band.name
                )));
            }

            for label in &band.sizes {
                if label.trim().is_empty() {
                    return Err(PpgError::InvalidSizeChart(format!(
                        "尺碼帶 '{}' 含空白尺碼標籤",
                        band.name
                    )));
                }
                if seen_labels.contains(&label.as_str()) {
                    return Err(PpgError::InvalidSizeChart(format!(
                        "尺碼 '{}' 重複出現",
                        label
                    )));
                }
                seen_labels.push(label.as_str());
            }
        }

        Ok(())
    }

    /// 展平後的全部尺碼（各帶依序串接，即樞紐數量向量的順序）
    pub fn all_sizes(&self) -> Vec<String> {
        self.bands
            .iter()
            .flat_map(|band| band.sizes.iter().cloned())
            .collect()
    }

    /// 全部尺碼數
    pub fn size_count(&self) -> usize {
        self.bands.iter().map(SizeBand::size_count).sum()
    }

    /// 尺碼標籤在展平順序中的索引
    pub fn size_index(&self, label: &str) -> Option<usize> {
        self.bands
            .iter()
            .flat_map(|band| band.sizes.iter())
            .position(|s| s == label)
    }

    /// 各帶在展平順序中的索引範圍（小計與報表切片用）
    pub fn band_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::with_capacity(self.bands.len());
        let mut offset = 0;
        for band in &self.bands {
            spans.push(offset..offset + band.size_count());
            offset += band.size_count();
        }
        spans
    }

    /// 依帶切片計算小計（輸入為展平順序的數量向量）
    pub fn band_totals(&self, quantities: &[u32]) -> Vec<u64> {
        self.band_spans()
            .into_iter()
            .map(|span| {
                span.filter_map(|i| quantities.get(i))
                    .map(|&q| q as u64)
                    .sum()
            })
            .collect()
    }

    /// 最寬尺碼帶的尺碼數（報表抬頭合併欄寬用）
    pub fn max_band_width(&self) -> usize {
        self.bands
            .iter()
            .map(SizeBand::size_count)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_chart_layout() {
        let chart = SizeChart::default_chart();

        assert_eq!(chart.bands.len(), 2);
        assert_eq!(chart.bands[0].name, "Infant");
        assert_eq!(chart.bands[1].name, "Toddler");
        assert_eq!(
            chart.all_sizes(),
            vec!["6-12M", "12-18M", "18-24M", "2-3Y", "3-4Y", "5-6Y", "7-8Y"]
        );
        assert_eq!(chart.size_count(), 7);
        assert_eq!(chart.max_band_width(), 4);
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn test_size_index_and_spans() {
        let chart = SizeChart::default_chart();

        assert_eq!(chart.size_index("6-12M"), Some(0));
        assert_eq!(chart.size_index("2-3Y"), Some(3));
        assert_eq!(chart.size_index("XL"), None);
        assert_eq!(chart.band_spans(), vec![0..3, 3..7]);
    }

    #[test]
    fn test_band_totals_slices_by_band() {
        let chart = SizeChart::default_chart();
        let quantities = vec![5, 0, 3, 10, 0, 0, 2];

        assert_eq!(chart.band_totals(&quantities), vec![8, 12]);
    }

    #[rstest]
    #[case(SizeChart::new(vec![]))]
    #[case(SizeChart::new(vec![SizeBand::new("Infant".to_string(), vec![])]))]
    #[case(SizeChart::new(vec![
        SizeBand::new("Infant".to_string(), vec!["6-12M".to_string()]),
        SizeBand::new("Infant".to_string(), vec!["2-3Y".to_string()]),
    ]))]
    #[case(SizeChart::new(vec![
        SizeBand::new("A".to_string(), vec!["6-12M".to_string()]),
        SizeBand::new("B".to_string(), vec!["6-12M".to_string()]),
    ]))]
    #[case(SizeChart::new(vec![SizeBand::new("A".to_string(), vec!["  ".to_string()])]))]
    fn test_validate_rejects_bad_charts(#[case] chart: SizeChart) {
        assert!(matches!(
            chart.validate(),
            Err(PpgError::InvalidSizeChart(_))
        ));
    }

    #[test]
    fn test_from_json_custom_chart() {
        let json = r#"{
            "bands": [
                {"name": "Kids", "sizes": ["4Y", "6Y", "8Y"]},
                {"name": "Junior", "sizes": ["10Y", "12Y"]}
            ]
        }"#;

        let chart = SizeChart::from_json(json).unwrap();
        assert_eq!(chart.bands.len(), 2);
        assert_eq!(chart.all_sizes(), vec!["4Y", "6Y", "8Y", "10Y", "12Y"]);
    }

    #[test]
    fn test_from_json_rejects_duplicate_label() {
        let json = r#"{"bands": [{"name": "Kids", "sizes": ["4Y", "4Y"]}]}"#;
        assert!(SizeChart::from_json(json).is_err());
    }
}

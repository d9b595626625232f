//! 數量樞紐彙整

use std::collections::{BTreeMap, BTreeSet};

use ppg_core::{LineItem, PackingWarning, PivotRow, SizeChart};

/// 數量樞紐計算器
pub struct PivotBuilder;

impl PivotBuilder {
    /// 將明細彙整為樞紐列：每個觀察到的 (PO, 色款) 一列
    ///
    /// - 同一 (PO, 色款, 尺碼) 出現多筆時數量相加，不互相覆蓋
    /// - 配置內未出現的尺碼補 0
    /// - 配置外的尺碼不進欄位與小計，但該 (PO, 色款) 仍會成列；
    ///   每個被捨棄的尺碼標籤回報一筆警告
    pub fn build(chart: &SizeChart, items: &[LineItem]) -> (Vec<PivotRow>, Vec<PackingWarning>) {
        let all_sizes = chart.all_sizes();
        let size_index: BTreeMap<&str, usize> = all_sizes
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        // BTreeMap 讓樞紐列順序只由 (PO, 色款) 決定，與輸入順序無關
        let mut cells: BTreeMap<(String, String), Vec<u32>> = BTreeMap::new();
        let mut dropped_labels: BTreeSet<String> = BTreeSet::new();

        for item in items {
            let quantities = cells
                .entry((item.po_number.clone(), item.color_style.clone()))
                .or_insert_with(|| vec![0u32; all_sizes.len()]);

            match size_index.get(item.size.as_str()) {
                Some(&idx) => {
                    quantities[idx] = quantities[idx].saturating_add(item.quantity);
                }
                None => {
                    dropped_labels.insert(item.size.clone());
                }
            }
        }

        let warnings = dropped_labels
            .into_iter()
            .map(|label| {
                PackingWarning::warning(
                    format!("尺碼 '{}'", label),
                    "不在任何尺碼帶配置中，數量不列入欄位與小計".to_string(),
                )
            })
            .collect();

        let rows = cells
            .into_iter()
            .map(|((po_number, color_style), quantities)| {
                let band_totals = chart.band_totals(&quantities);
                PivotRow::new(po_number, color_style, quantities, band_totals)
            })
            .collect();

        (rows, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(po: &str, color_style: &str, size: &str, quantity: u32) -> LineItem {
        LineItem::new(
            po.to_string(),
            color_style.to_string(),
            size.to_string(),
            quantity,
        )
    }

    #[test]
    fn test_pivot_zero_fills_missing_sizes() {
        let chart = SizeChart::default_chart();
        let items = vec![item("100", "RED - 12", "12-18M", 7)];

        let (rows, warnings) = PivotBuilder::build(&chart, &items);

        assert!(warnings.is_empty());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantities, vec![0, 7, 0, 0, 0, 0, 0]);
        assert_eq!(rows[0].band_totals, vec![7, 0]);
    }

    #[test]
    fn test_pivot_sums_duplicate_cells() {
        let chart = SizeChart::default_chart();
        let items = vec![
            item("100", "RED - 12", "6-12M", 5),
            item("100", "RED - 12", "6-12M", 3),
        ];

        let (rows, _) = PivotBuilder::build(&chart, &items);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantities[0], 8);
    }

    #[test]
    fn test_out_of_band_size_keeps_pair_as_zero_row() {
        let chart = SizeChart::default_chart();
        let items = vec![item("100", "RED - 12", "XL", 9)];

        let (rows, warnings) = PivotBuilder::build(&chart, &items);

        // 配對仍成列，但數量全為 0
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantities, vec![0; 7]);
        assert_eq!(rows[0].band_totals, vec![0, 0]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].context.contains("XL"));
    }

    #[test]
    fn test_one_warning_per_distinct_dropped_label() {
        let chart = SizeChart::default_chart();
        let items = vec![
            item("100", "RED - 12", "XL", 1),
            item("200", "RED - 12", "XL", 2),
            item("100", "RED - 12", "XXL", 3),
        ];

        let (_, warnings) = PivotBuilder::build(&chart, &items);

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_pivot_row_order_is_input_order_independent() {
        let chart = SizeChart::default_chart();
        let forward = vec![
            item("200", "BLUE - 34", "2-3Y", 4),
            item("100", "RED - 12", "6-12M", 5),
        ];
        let reversed: Vec<LineItem> = forward.iter().rev().cloned().collect();

        let (rows_a, _) = PivotBuilder::build(&chart, &forward);
        let (rows_b, _) = PivotBuilder::build(&chart, &reversed);

        assert_eq!(rows_a, rows_b);
        assert_eq!(rows_a[0].po_number, "100");
    }

    #[test]
    fn test_empty_items_yield_no_rows() {
        let chart = SizeChart::default_chart();
        let (rows, warnings) = PivotBuilder::build(&chart, &[]);

        assert!(rows.is_empty());
        assert!(warnings.is_empty());
    }

    #[rstest]
    #[case(vec![item("100", "RED - 12", "6-12M", 8)])]
    #[case(vec![
        item("100", "RED - 12", "6-12M", 5),
        item("100", "RED - 12", "6-12M", 3),
    ])]
    #[case(vec![
        item("100", "RED - 12", "6-12M", 2),
        item("100", "RED - 12", "6-12M", 2),
        item("100", "RED - 12", "6-12M", 4),
    ])]
    fn test_pre_summed_and_split_quantities_agree(#[case] items: Vec<LineItem>) {
        let chart = SizeChart::default_chart();
        let (rows, _) = PivotBuilder::build(&chart, &items);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantities[0], 8);
    }
}

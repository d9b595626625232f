//! 報表展開與彙總

use std::collections::{BTreeMap, BTreeSet};

use ppg_core::{BandTotal, PackingGroup, ReportRow, ReportSummary, SizeChart};

/// 報表展開計算器
pub struct Materializer;

impl Materializer {
    /// 將群組展開為報表列
    ///
    /// 列順序：群組編號遞增，組內依簽名色款行順序。
    /// 群組的 PO 清單與 PO 數複寫到該組每一列，渲染層
    /// 不需要回頭查群組。
    pub fn expand(chart: &SizeChart, groups: &[PackingGroup]) -> Vec<ReportRow> {
        let mut rows = Vec::new();

        for group in groups {
            for line in group.signature.lines() {
                rows.push(ReportRow {
                    group_id: group.id,
                    color_style: line.color_style.clone(),
                    quantities: line.quantities.clone(),
                    band_totals: chart.band_totals(&line.quantities),
                    po_numbers: group.po_numbers.clone(),
                    po_count: group.po_count(),
                });
            }
        }

        rows
    }

    /// 彙總報表列（純歸約，不依賴任何外部狀態）
    pub fn summarize(chart: &SizeChart, rows: &[ReportRow]) -> ReportSummary {
        let mut color_styles: BTreeSet<&str> = BTreeSet::new();
        let mut po_count_by_group: BTreeMap<u32, usize> = BTreeMap::new();
        let mut band_sums = vec![0u64; chart.bands.len()];

        for row in rows {
            color_styles.insert(row.color_style.as_str());
            po_count_by_group.insert(row.group_id, row.po_count);
            for (acc, total) in band_sums.iter_mut().zip(&row.band_totals) {
                *acc += total;
            }
        }

        ReportSummary {
            total_groups: po_count_by_group.len(),
            total_po_count: po_count_by_group.values().sum(),
            band_totals: chart
                .bands
                .iter()
                .zip(band_sums)
                .map(|(band, quantity)| BandTotal {
                    band: band.name.clone(),
                    quantity,
                })
                .collect(),
            unique_color_styles: color_styles.len(),
            largest_group_po_count: po_count_by_group.values().copied().max().unwrap_or(0),
        }
    }
}

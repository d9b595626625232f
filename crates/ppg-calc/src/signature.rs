//! 簽名正規化

use std::collections::BTreeMap;

use ppg_core::{PivotRow, Signature, SignatureLine};

/// 簽名計算器
pub struct SignatureBuilder;

impl SignatureBuilder {
    /// 為單一 PO 的樞紐列建立簽名
    ///
    /// 同一色款出現多列時逐尺碼相加後才進簽名，
    /// 保證同一 PO 不會產生重複色款行。
    pub fn canonicalize(rows: &[PivotRow]) -> Signature {
        let mut merged: BTreeMap<String, Vec<u32>> = BTreeMap::new();

        for row in rows {
            match merged.get_mut(&row.color_style) {
                Some(quantities) => {
                    for (acc, q) in quantities.iter_mut().zip(&row.quantities) {
                        *acc = acc.saturating_add(*q);
                    }
                }
                None => {
                    merged.insert(row.color_style.clone(), row.quantities.clone());
                }
            }
        }

        Signature::new(
            merged
                .into_iter()
                .map(|(color_style, quantities)| SignatureLine::new(color_style, quantities))
                .collect(),
        )
    }

    /// 為全部樞紐列建立 PO → 簽名映射
    pub fn build_signatures(rows: &[PivotRow]) -> BTreeMap<String, Signature> {
        let mut by_po: BTreeMap<String, Vec<PivotRow>> = BTreeMap::new();
        for row in rows {
            by_po
                .entry(row.po_number.clone())
                .or_default()
                .push(row.clone());
        }

        by_po
            .into_iter()
            .map(|(po_number, po_rows)| (po_number, Self::canonicalize(&po_rows)))
            .collect()
    }
}

//! 依簽名分組

use std::collections::{BTreeMap, BTreeSet};

use ppg_core::{compare_po_numbers, PackingGroup, Signature};

/// 分組計算器
pub struct GroupingEngine;

impl GroupingEngine {
    /// 把 PO → 簽名映射反轉為群組
    ///
    /// 兩個 PO 同組若且唯若簽名完全相等。群組編號依簽名
    /// 自然順序從 1 遞增指派，和輸入順序無關；同一批輸入
    /// 不論怎麼打亂都得到同一組編號指派。
    pub fn group(signatures: &BTreeMap<String, Signature>) -> Vec<PackingGroup> {
        let mut by_signature: BTreeMap<Signature, BTreeSet<String>> = BTreeMap::new();

        for (po_number, signature) in signatures {
            by_signature
                .entry(signature.clone())
                .or_default()
                .insert(po_number.clone());
        }

        by_signature
            .into_iter()
            .enumerate()
            .map(|(idx, (signature, members))| {
                let mut po_numbers: Vec<String> = members.into_iter().collect();
                po_numbers.sort_by(|a, b| compare_po_numbers(a, b));
                PackingGroup::new((idx + 1) as u32, signature, po_numbers)
            })
            .collect()
    }
}

//! 分組結果模型

use serde::Serialize;

use crate::Signature;

/// 裝箱群組（共享同一簽名的 PO 集合）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingGroup {
    /// 群組編號（從 1 起算，依簽名自然順序指派）
    pub id: u32,

    /// 群組簽名
    pub signature: Signature,

    /// 成員 PO 編號（去重後依 PO 編號順序）
    pub po_numbers: Vec<String>,
}

impl PackingGroup {
    /// 創建新的群組
    pub fn new(id: u32, signature: Signature, po_numbers: Vec<String>) -> Self {
        Self {
            id,
            signature,
            po_numbers,
        }
    }

    /// 不重複 PO 數
    pub fn po_count(&self) -> usize {
        self.po_numbers.len()
    }

    /// 群組標籤（報表抬頭用）
    pub fn label(&self) -> String {
        format!("Group {}", self.id)
    }
}

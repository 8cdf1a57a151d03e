use crate::tools::{ExtensionFilter, FileInventory};
use std::path::Path;

/// 來源與目標的統計結果，僅供提示，不影響結束碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    pub source: FileInventory,
    pub destination: FileInventory,
}

impl VerificationReport {
    #[must_use]
    pub fn count_matches(&self) -> bool {
        self.source.count == self.destination.count
    }

    #[must_use]
    pub fn size_matches(&self) -> bool {
        self.source.total_bytes == self.destination.total_bytes
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.count_matches() && self.size_matches()
    }
}

/// 重新掃描來源與目標，比較檔案數量與總大小
pub fn verify_copy<P: AsRef<Path>>(
    source_dirs: &[P],
    dest_dir: &Path,
    filter: &ExtensionFilter,
) -> VerificationReport {
    VerificationReport {
        source: FileInventory::collect(source_dirs, filter),
        destination: FileInventory::collect(&[dest_dir], filter),
    }
}

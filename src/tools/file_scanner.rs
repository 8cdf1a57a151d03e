use crate::tools::ExtensionFilter;
use log::warn;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

/// 檔案數量與總大小
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileInventory {
    pub count: usize,
    pub total_bytes: u64,
}

impl FileInventory {
    /// 重新掃描資料夾並統計符合副檔名的檔案
    pub fn collect<P: AsRef<Path>>(directories: &[P], filter: &ExtensionFilter) -> Self {
        scan_photo_files(directories, filter)
            .iter()
            .fold(Self::default(), |acc, file| Self {
                count: acc.count + 1,
                total_bytes: acc.total_bytes + file.size,
            })
    }

    #[must_use]
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / 1024.0 / 1024.0
    }
}

/// 遞迴掃描所有資料夾中符合副檔名的檔案
///
/// 依資料夾順序回傳，同一資料夾內依檔名排序。無法讀取的項目會記錄警告後略過。
pub fn scan_photo_files<P: AsRef<Path>>(
    directories: &[P],
    filter: &ExtensionFilter,
) -> Vec<PhotoFile> {
    directories
        .iter()
        .flat_map(|directory| {
            WalkDir::new(directory.as_ref())
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("無法讀取項目: {e}");
                None
            }
        })
        // 指向檔案的符號連結也視為檔案，大小與時間取自連結目標
        .filter(|entry| entry.path().is_file())
        .filter(|entry| filter.matches(entry.path()))
        .filter_map(|entry| {
            let metadata = match std::fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("無法讀取檔案資訊 {}: {e}", entry.path().display());
                    return None;
                }
            };
            let modified = metadata.modified().ok()?;
            Some(PhotoFile {
                path: entry.into_path(),
                size: metadata.len(),
                modified,
            })
        })
        .collect()
}

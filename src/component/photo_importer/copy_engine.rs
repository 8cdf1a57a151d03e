use crate::tools::{ExtensionFilter, copy_preserving_metadata, scan_photo_files};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// 單一檔案的複製結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied {
        source: PathBuf,
        target: PathBuf,
        bytes: u64,
    },
    Failed {
        source: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    /// 沒有任何待複製檔案時為 false，其餘情況（即使部分失敗）皆為 true
    #[must_use]
    pub fn completed(&self) -> bool {
        !self.outcomes.is_empty()
    }

    #[must_use]
    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, CopyOutcome::Copied { .. }))
            .count()
    }

    #[must_use]
    pub fn copied_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                CopyOutcome::Copied { bytes, .. } => *bytes,
                CopyOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CopyOutcome::Failed { source, reason } => Some((source.as_path(), reason.as_str())),
            CopyOutcome::Copied { .. } => None,
        })
    }
}

/// 將所有符合副檔名的檔案複製到單一目標資料夾
///
/// 不保留來源的子資料夾結構，不同資料夾中的同名檔案會互相覆蓋。
/// 單一檔案失敗只記錄在報告中，不中斷其他檔案。
pub fn copy_with_progress<P: AsRef<Path>>(
    source_dirs: &[P],
    dest_dir: &Path,
    filter: &ExtensionFilter,
) -> CopyReport {
    let files = scan_photo_files(source_dirs, filter);
    let mut report = CopyReport::default();

    if files.is_empty() {
        warn!("沒有可複製的檔案");
        return report;
    }

    info!("準備複製 {} 個檔案到 {}", files.len(), dest_dir.display());

    let progress_bar = ProgressBar::new(files.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message("複製檔案中...");

    for file in files {
        let outcome = copy_one(&file.path, dest_dir);
        if let CopyOutcome::Failed { source, reason } = &outcome {
            warn!("複製失敗 {}: {reason}", source.display());
            progress_bar.println(format!("複製失敗 {}: {reason}", source.display()));
        }
        report.outcomes.push(outcome);
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("完成");

    report
}

fn copy_one(source: &Path, dest_dir: &Path) -> CopyOutcome {
    let Some(file_name) = source.file_name() else {
        return CopyOutcome::Failed {
            source: source.to_path_buf(),
            reason: "無法取得檔名".to_string(),
        };
    };
    let target = dest_dir.join(file_name);

    match copy_preserving_metadata(source, &target) {
        Ok(bytes) => {
            debug!("複製檔案: {} -> {}", source.display(), target.display());
            CopyOutcome::Copied {
                source: source.to_path_buf(),
                target,
                bytes,
            }
        }
        Err(e) => CopyOutcome::Failed {
            source: source.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

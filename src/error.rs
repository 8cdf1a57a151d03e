//! 匯入流程的錯誤型別
//!
//! 致命錯誤在此定義，單一檔案複製失敗與驗證不符則以報告形式回傳

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("無法存取設定檔 {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("設定檔格式錯誤 {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("找不到標籤為 {label} 的磁碟，已檢查路徑: {}", join_paths(.tried))]
    MountNotFound { label: String, tried: Vec<PathBuf> },

    #[error("無效的搜尋樣式 {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("依樣式找不到任何照片資料夾: {}", .patterns.join(", "))]
    NoPhotoDirectories { patterns: Vec<String> },

    #[error("找不到任何副檔名為 {} 的照片", .extensions.join(", "))]
    NoDatedFiles { extensions: Vec<String> },

    #[error("範本 {template:?} 無效: {reason}")]
    Template { template: String, reason: String },

    #[error("無法建立資料夾 {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ImportResult<T> = Result<T, ImportError>;

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ImportError {
    pub fn create_directory(path: &Path, source: io::Error) -> Self {
        Self::CreateDirectory {
            path: path.to_path_buf(),
            source,
        }
    }
}

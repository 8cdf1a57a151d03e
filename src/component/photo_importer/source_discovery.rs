use crate::error::{ImportError, ImportResult};
use glob::{MatchOptions, Pattern};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// 以 glob 樣式在掛載點下搜尋照片資料夾，只保留資料夾
pub fn find_photo_directories(
    mount_point: &Path,
    source_patterns: &[String],
) -> ImportResult<Vec<PathBuf>> {
    // 掛載點本身可能含有 glob 特殊字元（例如標籤含 `[`）
    let escaped_mount = Pattern::escape(&mount_point.to_string_lossy());
    // `*` 不比對以 `.` 開頭的隱藏項目（例如 `.Trashes`、`.thumbnails`）
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut photo_dirs = Vec::new();

    for pattern in source_patterns {
        let full_pattern = Path::new(&escaped_mount).join(pattern);
        let matches = glob::glob_with(&full_pattern.to_string_lossy(), options).map_err(
            |source| ImportError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            },
        )?;

        for entry in matches {
            match entry {
                Ok(path) if path.is_dir() => {
                    info!("找到照片資料夾: {}", path.display());
                    photo_dirs.push(path);
                }
                Ok(_) => {}
                Err(e) => warn!("無法讀取搜尋結果: {e}"),
            }
        }
    }

    if photo_dirs.is_empty() {
        return Err(ImportError::NoPhotoDirectories {
            patterns: source_patterns.to_vec(),
        });
    }

    Ok(photo_dirs)
}

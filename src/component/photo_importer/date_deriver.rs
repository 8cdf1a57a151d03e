use crate::error::{ImportError, ImportResult};
use crate::tools::{ExtensionFilter, scan_photo_files};
use chrono::{DateTime, Local};
use std::path::Path;

/// 取得最早一張照片的修改日期（本地時間，`YYYYMMDD`）
///
/// 使用檔案系統的修改時間而非 EXIF，拍攝後被改寫過的檔案會影響結果。
pub fn get_earliest_photo_date<P: AsRef<Path>>(
    photo_dirs: &[P],
    filter: &ExtensionFilter,
) -> ImportResult<String> {
    let earliest = scan_photo_files(photo_dirs, filter)
        .into_iter()
        .map(|file| file.modified)
        .min()
        .ok_or_else(|| ImportError::NoDatedFiles {
            extensions: filter.extensions().to_vec(),
        })?;

    Ok(DateTime::<Local>::from(earliest).format("%Y%m%d").to_string())
}

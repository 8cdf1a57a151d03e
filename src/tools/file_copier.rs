use filetime::{FileTime, set_file_times};
use std::fs;
use std::io;
use std::path::Path;

/// 複製檔案並保留權限與存取、修改時間，回傳複製的位元組數
pub fn copy_preserving_metadata(source: &Path, target: &Path) -> io::Result<u64> {
    let bytes = fs::copy(source, target)?;

    let metadata = fs::metadata(source)?;
    let access_time = FileTime::from_last_access_time(&metadata);
    let modify_time = FileTime::from_last_modification_time(&metadata);
    set_file_times(target, access_time, modify_time)?;

    Ok(bytes)
}

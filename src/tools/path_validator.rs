use crate::error::{ImportError, ImportResult};
use std::path::Path;

/// 建立資料夾（含上層），已存在時不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> ImportResult<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|e| ImportError::create_directory(path, e))?;
    }
    Ok(())
}

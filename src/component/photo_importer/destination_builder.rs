use crate::config::Config;
use crate::error::ImportResult;
use crate::tools::{ensure_directory_exists, render_template};
use log::debug;
use std::path::{Path, PathBuf};

/// 依範本產生目標資料夾路徑
pub fn build_destination(
    config: &Config,
    root: &Path,
    date: &str,
    name: &str,
) -> ImportResult<PathBuf> {
    let folder_name = render_template(
        &config.destination_template,
        &[("date", date), ("name", name)],
    )?;
    Ok(root.join(folder_name))
}

/// 建立目標資料夾與子資料夾，已存在時不視為錯誤
///
/// 不檢查目標是否已有檔案，重複匯入會直接覆蓋同名檔案。
pub fn setup_destination<S: AsRef<str>>(dest_path: &Path, subfolders: &[S]) -> ImportResult<()> {
    ensure_directory_exists(dest_path)?;
    for folder in subfolders {
        let subfolder = dest_path.join(folder.as_ref());
        debug!("建立子資料夾: {}", subfolder.display());
        ensure_directory_exists(&subfolder)?;
    }
    Ok(())
}

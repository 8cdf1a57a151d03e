use crate::config::types::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config};
use crate::error::{ImportError, ImportResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 預設設定檔路徑：`<config_dir>/photo_copy/config.json`
///
/// 取不到使用者設定目錄時退回目前工作目錄
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

pub fn save_config(path: &Path, config: &Config) -> ImportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ImportError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
    }

    // Config 只含字串與陣列，序列化不會失敗
    let content = serde_json::to_string_pretty(config).map_err(|source| {
        ImportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, content).map_err(|source| ImportError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}

use crate::config::Config;
use crate::error::{ImportError, ImportResult};
use crate::tools::{MountTable, render_template};
use log::debug;
use std::path::PathBuf;

/// 依序套用掛載點範本，回傳第一個實際掛載中的路徑
pub fn find_mount_point(
    config: &Config,
    label: &str,
    user: &str,
    mount_table: &MountTable,
) -> ImportResult<PathBuf> {
    let mut tried = Vec::with_capacity(config.mount_patterns.len());

    for pattern in &config.mount_patterns {
        let candidate = PathBuf::from(render_template(
            pattern,
            &[("user", user), ("label", label)],
        )?);
        debug!("檢查掛載點: {}", candidate.display());

        if mount_table.is_mount_point(&candidate) {
            return Ok(candidate);
        }
        tried.push(candidate);
    }

    Err(ImportError::MountNotFound {
        label: label.to_string(),
        tried,
    })
}

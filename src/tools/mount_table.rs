use log::debug;
use std::path::{Path, PathBuf};
use sysinfo::Disks;

/// 目前掛載中的路徑清單
#[derive(Debug, Clone, Default)]
pub struct MountTable {
    mount_points: Vec<PathBuf>,
}

impl MountTable {
    /// 從系統讀取目前所有掛載點
    #[must_use]
    pub fn from_system() -> Self {
        let disks = Disks::new_with_refreshed_list();
        let table = Self {
            mount_points: disks
                .list()
                .iter()
                .map(|disk| disk.mount_point().to_path_buf())
                .collect(),
        };
        debug!("系統掛載點: {:?}", table.mount_points());
        table
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            mount_points: paths.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_mount_point(&self, path: &Path) -> bool {
        self.mount_points.iter().any(|mount| mount == path)
    }

    #[must_use]
    pub(crate) fn mount_points(&self) -> &[PathBuf] {
        &self.mount_points
    }
}

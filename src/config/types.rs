use serde::{Deserialize, Serialize};

/// 設定檔所在的資料夾名稱（位於使用者設定目錄下）
pub const CONFIG_DIR_NAME: &str = "photo_copy";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 匯入設定，每次執行只載入一次，之後不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 掛載點範本，可使用 `{user}` 與 `{label}`，依序比對
    pub mount_patterns: Vec<String>,
    /// 相對於掛載點的 glob 樣式
    pub source_patterns: Vec<String>,
    /// 照片副檔名（不分大小寫）
    pub photo_extensions: Vec<String>,
    /// 目標資料夾名稱範本，可使用 `{date}` 與 `{name}`
    pub destination_template: String,
    /// 在目標資料夾下預先建立的子資料夾
    pub subfolders: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_patterns: vec![
                "/media/{user}/{label}".to_string(),
                "/run/media/{user}/{label}".to_string(),
            ],
            source_patterns: vec!["DCIM/*".to_string()],
            photo_extensions: vec![
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".cr2".to_string(),
                ".raw".to_string(),
            ],
            destination_template: "{date}-canon600d-{name}".to_string(),
            subfolders: vec!["selected".to_string(), "selected/exported".to_string()],
        }
    }
}

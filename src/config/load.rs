use crate::config::save::save_config;
use crate::config::types::Config;
use crate::error::{ImportError, ImportResult};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// 載入設定檔
///
/// 檔案不存在時寫入預設設定並回傳；存在時只補上缺少的頂層欄位（不寫回檔案）。
/// 範本語法不在此檢查，於實際套用時才會報錯。
pub fn load_config(path: &Path) -> ImportResult<Config> {
    if !path.exists() {
        let config = Config::default();
        save_config(path, &config)?;
        info!("設定檔不存在，已建立預設設定: {}", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(path).map_err(|source| ImportError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |source| ImportError::ConfigParse {
        path: path.to_path_buf(),
        source,
    };

    let mut loaded: Value = serde_json::from_str(&content).map_err(parse_error)?;
    merge_missing_keys(&mut loaded, default_value());

    serde_json::from_value(loaded).map_err(parse_error)
}

fn default_value() -> Value {
    serde_json::to_value(Config::default()).unwrap_or(Value::Null)
}

/// 淺層合併：只補上 `target` 缺少的頂層欄位，已存在的值保持不變
fn merge_missing_keys(target: &mut Value, defaults: Value) {
    let (Value::Object(target), Value::Object(defaults)) = (target, defaults) else {
        return;
    };

    for (key, value) in defaults {
        if !target.contains_key(&key) {
            debug!("設定檔缺少欄位 {key}，使用預設值");
            target.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load_config(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::to_value(Config::default()).unwrap());
    }

    #[test]
    fn test_missing_keys_are_backfilled() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"destination_template": "{date}-{name}", "photo_extensions": [".png"]}"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.destination_template, "{date}-{name}");
        assert_eq!(config.photo_extensions, vec![".png"]);
        assert_eq!(config.mount_patterns, Config::default().mount_patterns);
        assert_eq!(config.subfolders, Config::default().subfolders);
    }

    #[test]
    fn test_backfill_does_not_rewrite_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let original = r#"{"subfolders": []}"#;
        fs::write(&path, original).unwrap();

        let config = load_config(&path).unwrap();

        assert!(config.subfolders.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ImportError::ConfigParse { .. }));
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"source_patterns": "DCIM/*"}"#).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ImportError::ConfigParse { .. }));
    }

    #[test]
    fn test_merge_only_touches_objects() {
        let mut target = json!([1, 2, 3]);
        merge_missing_keys(&mut target, json!({"a": 1}));
        assert_eq!(target, json!([1, 2, 3]));
    }
}

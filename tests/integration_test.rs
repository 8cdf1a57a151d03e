//! 整合測試 - 以暫存資料夾模擬記憶卡，驗證各步驟的行為

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use filetime::{FileTime, set_file_mtime};
use photo_copy::component::photo_importer::{
    find_mount_point, find_photo_directories, get_earliest_photo_date, setup_destination,
};
use photo_copy::config::{Config, load_config};
use photo_copy::error::ImportError;
use photo_copy::tools::{ExtensionFilter, MountTable};
use tempfile::TempDir;

fn set_date(path: &Path, year: i32, month: u32, day: u32) {
    let timestamp = Local
        .with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .unwrap()
        .timestamp();
    set_file_mtime(path, FileTime::from_unix_time(timestamp, 0)).unwrap();
}

/// 測試 1: 掛載點解析
#[test]
fn test_mount_point_resolution() {
    let config = Config {
        mount_patterns: vec!["/media/{user}/{label}".to_string()],
        ..Config::default()
    };
    let table = MountTable::from_paths(["/", "/home", "/media/alice/EOS_DIGITAL"]);

    let mount = find_mount_point(&config, "EOS_DIGITAL", "alice", &table).unwrap();
    assert_eq!(mount, PathBuf::from("/media/alice/EOS_DIGITAL"));

    let err = find_mount_point(&config, "NIKON", "alice", &table).unwrap_err();
    assert!(matches!(err, ImportError::MountNotFound { .. }));
}

/// 測試 2: 只回傳資料夾，不回傳檔案
#[test]
fn test_photo_directory_discovery() {
    let temp_dir = TempDir::new().unwrap();
    let mount = temp_dir.path();
    fs::create_dir_all(mount.join("DCIM/100CANON")).unwrap();
    fs::create_dir_all(mount.join("DCIM/101CANON")).unwrap();
    fs::write(mount.join("DCIM/readme.txt"), "stray").unwrap();

    let dirs = find_photo_directories(mount, &["DCIM/*".to_string()]).unwrap();

    assert_eq!(dirs.len(), 2);
    assert!(dirs.contains(&mount.join("DCIM/100CANON")));
    assert!(dirs.contains(&mount.join("DCIM/101CANON")));
    assert!(!dirs.contains(&mount.join("DCIM/readme.txt")));
}

/// 測試 3: 最早日期
#[test]
fn test_earliest_photo_date() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("DCIM/100CANON");
    fs::create_dir_all(&dir).unwrap();

    for (name, day) in [("IMG_0001.jpg", 5), ("IMG_0002.jpg", 2), ("IMG_0003.jpg", 9)] {
        let path = dir.join(name);
        fs::write(&path, "photo").unwrap();
        set_date(&path, 2024, 1, day);
    }

    let filter = ExtensionFilter::new(&[".jpg"]);
    assert_eq!(get_earliest_photo_date(&[&dir], &filter).unwrap(), "20240102");
}

/// 測試 4: 重複建立目標資料夾不會出錯
#[test]
fn test_setup_destination_twice() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("20240102-canon600d-trip");
    let subfolders = Config::default().subfolders;

    setup_destination(&dest, &subfolders).unwrap();
    setup_destination(&dest, &subfolders).unwrap();

    assert!(dest.join("selected").is_dir());
    assert!(dest.join("selected/exported").is_dir());
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
}

/// 測試 5: 設定檔不存在時建立預設設定
#[test]
fn test_default_config_synthesis() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("photo_copy/config.json");

    let config = load_config(&path).unwrap();
    assert_eq!(config, Config::default());

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({
            "mount_patterns": ["/media/{user}/{label}", "/run/media/{user}/{label}"],
            "source_patterns": ["DCIM/*"],
            "photo_extensions": [".jpg", ".jpeg", ".cr2", ".raw"],
            "destination_template": "{date}-canon600d-{name}",
            "subfolders": ["selected", "selected/exported"]
        })
    );

    // 第二次載入讀取同一個檔案
    assert_eq!(load_config(&path).unwrap(), config);
}

//! 对一个临时支持包目录做完整扫描：一个带时间戳与 SR 号的包 + 一个 logs 子目录。

use std::fs::{self, File};
use std::io::Write;

use bundle_domain::DIRECTORY_SIZE;
use bundle_scanner::list_bundles;

const BUNDLE: &str = "abc_20240813T091500123_3-12345678901.tar.gz";

#[test]
fn scan_bundle_and_log_dir() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join("logs")).unwrap();
    File::create(dir.path().join(BUNDLE))
        .unwrap()
        .write_all(&[0u8; 2048])
        .unwrap();

    let entries = list_bundles(dir.path()).unwrap();
    assert_eq!(entries.len(), 2);

    let logs = entries.iter().find(|e| e.name == "logs").unwrap();
    assert!(logs.is_dir);
    assert!(!logs.is_selectable());
    assert_eq!(logs.size_bytes, DIRECTORY_SIZE);
    assert!(logs.embedded_timestamp.is_none());

    let bundle = entries.iter().find(|e| e.name == BUNDLE).unwrap();
    assert!(!bundle.is_dir);
    assert_eq!(bundle.size_bytes, 2048);
    assert_eq!(
        bundle
            .embedded_timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .as_deref(),
        Some("2024-08-13 09:15:00")
    );
    assert_eq!(bundle.embedded_service_request_id.as_deref(), Some("3-12345678901"));
    assert!(bundle.path.ends_with(BUNDLE));

    // 无时间戳的目录排在前面
    assert_eq!(entries[0].name, "logs");
}

#[test]
fn scan_is_fresh_each_call() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_bundles(dir.path()).unwrap().is_empty());
    File::create(dir.path().join("late.tar")).unwrap();
    assert_eq!(list_bundles(dir.path()).unwrap().len(), 1);
}

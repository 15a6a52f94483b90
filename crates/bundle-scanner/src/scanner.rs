use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bundle_common::{Result, SendBundleError};
use bundle_domain::{BundleEntry, DIRECTORY_SIZE};
use chrono::{DateTime, Local};

use crate::patterns::{parse_for_service_request_id, parse_for_timestamp};

/// 规范化路径（去除首尾空白）
fn normalize_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    }
}

fn build_entry(path: &Path, name: String) -> std::io::Result<BundleEntry> {
    let metadata = fs::metadata(path)?;
    let is_dir = metadata.is_dir();
    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    Ok(BundleEntry {
        embedded_timestamp: parse_for_timestamp(&name),
        embedded_service_request_id: parse_for_service_request_id(&name),
        name,
        path: path.display().to_string(),
        is_dir,
        size_bytes: if is_dir {
            DIRECTORY_SIZE
        } else {
            i64::try_from(metadata.len()).unwrap_or(i64::MAX)
        },
        modified_at: DateTime::<Local>::from(modified),
    })
}

/// 按文件名中的时间戳升序稳定排序，无时间戳的排最前
pub fn sort_by_embedded_timestamp(entries: &mut [BundleEntry]) {
    entries.sort_by_key(|e| e.embedded_timestamp);
}

/// 列出目录下的直接子项（不递归），按嵌入时间戳排序。
///
/// 目录不存在、不是目录或不可读时返回明确的错误；单个子项读不到元数据
/// （如悬空的符号链接）时跳过该项并记录警告。
pub fn list_bundles(dir: impl AsRef<Path>) -> Result<Vec<BundleEntry>> {
    let dir = normalize_path(dir.as_ref());

    let metadata = fs::metadata(&dir).map_err(|e| SendBundleError::from_io_at(e, &dir))?;
    if !metadata.is_dir() {
        return Err(SendBundleError::NotADirectory(dir.display().to_string()));
    }

    let dir = fs::canonicalize(&dir).map_err(|e| SendBundleError::from_io_at(e, &dir))?;
    let read_dir = fs::read_dir(&dir).map_err(|e| SendBundleError::from_io_at(e, &dir))?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let name = item.file_name().to_string_lossy().to_string();
        let path = item.path();
        match build_entry(&path, name) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("skipping {}: {}", path.display(), e),
        }
    }

    sort_by_embedded_timestamp(&mut entries);
    log::debug!("found {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

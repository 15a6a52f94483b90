use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;

/// 目录项的大小哨兵值：目录不计算大小
pub const DIRECTORY_SIZE: i64 = -1;

/// 支持包目录中的一项（文件或子目录），每次扫描重新生成
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    /// 目录为 `DIRECTORY_SIZE`
    pub size_bytes: i64,
    pub modified_at: DateTime<Local>,
    /// 文件名中嵌入的时间戳，形如 `20240813T091500123`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_timestamp: Option<NaiveDateTime>,
    /// 文件名中嵌入的 SR 号，形如 `3-12345678901`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_service_request_id: Option<String>,
}

impl BundleEntry {
    /// 目录不可被选中上传
    pub fn is_selectable(&self) -> bool {
        !self.is_dir
    }
}

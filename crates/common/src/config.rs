use std::path::PathBuf;
use std::time::Duration;

/// 支持包默认存放目录
pub const DEFAULT_BUNDLE_DIR: &str = "/nfs/shared_storage/support_bundles/";

/// 上传端点前缀，完整地址为 `{base}/{sr}/{file}`
pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://transport.oracle.com/upload/issue";

pub const HTTPS_PROXY_ENV: &str = "https_proxy";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bundle_dir: PathBuf,
    pub upload_base_url: String,
    pub https_proxy: Option<String>,
    /// None 表示不限时，大文件上传不应被客户端默认超时打断
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bundle_dir: PathBuf::from(DEFAULT_BUNDLE_DIR),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            https_proxy: None,
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// 默认配置 + 环境变量 `https_proxy`
    pub fn from_env() -> Self {
        Self {
            https_proxy: proxy_from(std::env::var(HTTPS_PROXY_ENV).ok()),
            ..Self::default()
        }
    }
}

/// 空字符串视为未设置
fn proxy_from(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

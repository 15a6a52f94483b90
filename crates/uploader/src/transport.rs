use std::fs::File;
use std::time::Duration;

use bundle_common::{AppConfig, Result, SendBundleError};
use reqwest::blocking::{Body, Client};

/// 发送一次 PUT 并返回 HTTP 状态码；拿不到响应时返回 `Transport` 错误
pub trait Transport {
    fn put_file(&self, url: &str, login: &str, password: &str, body: File) -> Result<u16>;
}

/// 基于 reqwest 阻塞客户端的实现。
///
/// 客户端在发送时才构建，代理地址非法只影响这一次上传的结果。
pub struct HttpTransport {
    https_proxy: Option<String>,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            https_proxy: config.https_proxy.clone(),
            timeout: config.request_timeout,
        }
    }

    /// 只使用配置中的代理，不读取其他代理环境变量
    fn client(&self) -> Result<Client> {
        let mut builder = Client::builder().no_proxy().timeout(self.timeout);
        if let Some(proxy) = self.https_proxy.as_deref() {
            let proxy = reqwest::Proxy::https(proxy)
                .map_err(|e| SendBundleError::Config(format!("invalid https_proxy {}: {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .map_err(|e| SendBundleError::Config(format!("cannot build HTTP client: {}", e)))
    }
}

impl Transport for HttpTransport {
    fn put_file(&self, url: &str, login: &str, password: &str, body: File) -> Result<u16> {
        let client = self.client()?;
        let body = match body.metadata() {
            Ok(meta) => Body::sized(body, meta.len()),
            Err(_) => Body::new(body),
        };
        let response = client
            .put(url)
            .basic_auth(login, Some(password))
            .body(body)
            .send()
            .map_err(|e| SendBundleError::Transport(error_chain(&e)))?;
        Ok(response.status().as_u16())
    }
}

/// reqwest 的顶层错误信息很短，把 source 链拼上
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

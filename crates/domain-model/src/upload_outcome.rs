/// 一次上传的结果，按 HTTP 状态码归类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success,
    Unauthorized,
    Forbidden,
    /// 其他任意状态码
    HttpError(u16),
    /// 请求未能发出或未收到响应（DNS、连接、TLS、代理、打开文件失败）
    TransportFailure(String),
}

impl UploadOutcome {
    pub fn from_status(code: u16) -> Self {
        match code {
            200 => UploadOutcome::Success,
            401 => UploadOutcome::Unauthorized,
            403 => UploadOutcome::Forbidden,
            other => UploadOutcome::HttpError(other),
        }
    }

    /// 传输失败时没有状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UploadOutcome::Success => Some(200),
            UploadOutcome::Unauthorized => Some(401),
            UploadOutcome::Forbidden => Some(403),
            UploadOutcome::HttpError(code) => Some(*code),
            UploadOutcome::TransportFailure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success)
    }

    /// 进程退出码：仅 200 为 0；其余取状态码低 8 位，落到 0 时改为 1
    pub fn exit_code(&self) -> u8 {
        match self.status_code() {
            Some(200) => 0,
            Some(code) => match (code % 256) as u8 {
                0 => 1,
                low => low,
            },
            None => 1,
        }
    }
}

use std::fmt;

/// 一次上传所需的全部字段，由选中的支持包与用户输入拼成
#[derive(Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub bundle_file_name: String,
    pub bundle_path: String,
    pub service_request_id: String,
    pub login: String,
    pub password: String,
}

// 密码不进日志
impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("bundle_file_name", &self.bundle_file_name)
            .field("bundle_path", &self.bundle_path)
            .field("service_request_id", &self.service_request_id)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let req = UploadRequest {
            bundle_file_name: "a.tar.gz".into(),
            bundle_path: "/tmp/a.tar.gz".into(),
            service_request_id: "3-12345678901".into(),
            login: "ops@example.com".into(),
            password: "hunter2".into(),
        };
        let s = format!("{:?}", req);
        assert!(s.contains("ops@example.com"));
        assert!(!s.contains("hunter2"));
    }
}

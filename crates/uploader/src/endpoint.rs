use bundle_domain::UploadRequest;

/// `{base}/{sr}/{file}`，SR 号与文件名按路径段编码
pub fn upload_url(base: &str, service_request_id: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        service_request_dir_url(base, service_request_id).trim_end_matches('/'),
        urlencoding::encode(file_name)
    )
}

/// SR 目录地址，以 `/` 结尾；curl `--upload-file` 会自动补上文件名
pub fn service_request_dir_url(base: &str, service_request_id: &str) -> String {
    format!(
        "{}/{}/",
        base.trim_end_matches('/'),
        urlencoding::encode(service_request_id)
    )
}

/// 等价的 curl 命令，供用户手动排查网络/代理问题。不含密码，curl 会自行提示输入。
pub fn curl_command(base: &str, request: &UploadRequest, proxy: Option<&str>) -> String {
    let mut lines = vec!["curl".to_string(), "    --verbose".to_string()];
    if let Some(proxy) = proxy {
        lines.push(format!("    --proxy \"{}\"", proxy));
    }
    lines.push(format!("    --user \"{}\"", request.login));
    lines.push(format!("    --upload-file \"{}\"", request.bundle_path));
    lines.push(format!(
        "    \"{}\"",
        service_request_dir_url(base, &request.service_request_id)
    ));
    lines.join(" \\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://transport.oracle.com/upload/issue";

    fn request() -> UploadRequest {
        UploadRequest {
            bundle_file_name: "abc_20240813T091500123_3-12345678901.tar.gz".into(),
            bundle_path: "/nfs/shared_storage/support_bundles/abc_20240813T091500123_3-12345678901.tar.gz".into(),
            service_request_id: "3-12345678901".into(),
            login: "ops@example.com".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn builds_canonical_url() {
        assert_eq!(
            upload_url(BASE, "3-12345678901", "abc.tar.gz"),
            "https://transport.oracle.com/upload/issue/3-12345678901/abc.tar.gz"
        );
        assert_eq!(
            upload_url("https://example.test/upload/", "3-12345678901", "abc.tar.gz"),
            "https://example.test/upload/3-12345678901/abc.tar.gz"
        );
    }

    #[test]
    fn encodes_path_segments() {
        assert_eq!(
            upload_url(BASE, "3-12345678901", "my bundle#1.zip"),
            "https://transport.oracle.com/upload/issue/3-12345678901/my%20bundle%231.zip"
        );
    }

    #[test]
    fn curl_without_proxy() {
        let cmd = curl_command(BASE, &request(), None);
        assert_eq!(
            cmd,
            "curl \\\n    --verbose \\\n    --user \"ops@example.com\" \\\n    \
             --upload-file \"/nfs/shared_storage/support_bundles/abc_20240813T091500123_3-12345678901.tar.gz\" \\\n    \
             \"https://transport.oracle.com/upload/issue/3-12345678901/\""
        );
        assert!(!cmd.contains("secret"));
    }

    #[test]
    fn curl_with_proxy() {
        let cmd = curl_command(BASE, &request(), Some("http://proxy.corp:3128"));
        assert!(cmd.contains("--proxy \"http://proxy.corp:3128\""));
    }
}

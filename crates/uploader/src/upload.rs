use std::fs::File;
use std::io::Write;

use bundle_common::{AppConfig, SendBundleError, UploadTimer};
use bundle_domain::{UploadOutcome, UploadRequest};

use crate::endpoint::{curl_command, upload_url};
use crate::transport::Transport;

/// 执行一次上传：单次 PUT，无重试。
///
/// 任何失败（打开文件、DNS、连接、TLS、代理）都折算为 `UploadOutcome`，
/// 不会向调用方返回错误。耗时在所有路径上都会打印。
pub fn perform_upload<T, W>(
    request: &UploadRequest,
    config: &AppConfig,
    transport: &T,
    out: &mut W,
) -> UploadOutcome
where
    T: Transport + ?Sized,
    W: Write,
{
    let timer = UploadTimer::start("perform_upload");
    let outcome = upload_and_report(request, config, transport, out);
    timer.finish(out);
    outcome
}

fn upload_and_report<T, W>(
    request: &UploadRequest,
    config: &AppConfig,
    transport: &T,
    out: &mut W,
) -> UploadOutcome
where
    T: Transport + ?Sized,
    W: Write,
{
    let url = upload_url(
        &config.upload_base_url,
        &request.service_request_id,
        &request.bundle_file_name,
    );
    let _ = writeln!(out, "Uploading {}", request.bundle_path);
    let _ = writeln!(out, "... to {}", url);
    let _ = writeln!(
        out,
        "... via proxy {}",
        config.https_proxy.as_deref().unwrap_or("none")
    );
    let _ = writeln!(out, "... for user {}", request.login);
    log::debug!("PUT {} as {:?}", url, request);

    // 文件句柄随 put_file 调用结束而关闭
    let outcome = match File::open(&request.bundle_path) {
        Ok(file) => match transport.put_file(&url, &request.login, &request.password, file) {
            Ok(status) => UploadOutcome::from_status(status),
            Err(e) => {
                log::error!("upload of {} failed: {}", request.bundle_path, e);
                UploadOutcome::TransportFailure(failure_reason(e))
            }
        },
        Err(e) => {
            log::error!("cannot open {}: {}", request.bundle_path, e);
            UploadOutcome::TransportFailure(format!("cannot open {}: {}", request.bundle_path, e))
        }
    };

    report_outcome(&outcome, request, config, out);
    outcome
}

/// 传输与代理配置错误只取内层信息，其他错误保留类别前缀
fn failure_reason(err: SendBundleError) -> String {
    match err {
        SendBundleError::Transport(msg) | SendBundleError::Config(msg) => msg,
        other => other.to_string(),
    }
}

/// 按状态码输出面向用户的结果说明
pub fn report_outcome<W: Write>(
    outcome: &UploadOutcome,
    request: &UploadRequest,
    config: &AppConfig,
    out: &mut W,
) {
    match outcome {
        UploadOutcome::Success => {
            let _ = writeln!(out, "200 OK - upload successful.");
            return;
        }
        UploadOutcome::Unauthorized => {
            let _ = writeln!(
                out,
                "401 Unauthorized - please check your login and password."
            );
            return;
        }
        UploadOutcome::Forbidden => {
            let _ = writeln!(
                out,
                "403 Forbidden - please check the SR # is valid and that you have access to it."
            );
            return;
        }
        UploadOutcome::HttpError(code) => {
            let _ = writeln!(
                out,
                "{} Error - please check your network settings and your proxy server.",
                code
            );
        }
        UploadOutcome::TransportFailure(reason) => {
            let _ = writeln!(
                out,
                "Upload failed ({}) - please check your network settings and your proxy server.",
                reason
            );
        }
    }
    let _ = writeln!(out, "If you want to test using `curl`, here is the CLI equivalent:");
    let _ = writeln!(
        out,
        "{}",
        curl_command(
            &config.upload_base_url,
            request,
            config.https_proxy.as_deref()
        )
    );
}

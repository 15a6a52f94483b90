use std::io::Write;
use std::path::Path;

use bundle_common::Result;
use bundle_domain::{BundleEntry, UploadRequest};

use crate::prompt::Prompter;

/// 补齐上传所需字段：文件名里没有 SR 号时询问，然后询问登录名与密码
pub fn get_upload_details<P, W>(entry: &BundleEntry, prompter: &mut P, out: &mut W) -> Result<UploadRequest>
where
    P: Prompter + ?Sized,
    W: Write,
{
    writeln!(out, "Support bundle path: {}", entry.path)?;

    let service_request_id = match &entry.embedded_service_request_id {
        Some(sr) => {
            writeln!(out, "SR #: {}", sr)?;
            sr.clone()
        }
        None => prompter.read_line("Enter SR #: ")?,
    };
    let login = prompter.read_line("Enter MOS login: ")?;
    let password = prompter.read_password("Enter MOS password: ")?;

    let bundle_file_name = Path::new(&entry.path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| entry.name.clone());

    Ok(UploadRequest {
        bundle_file_name,
        bundle_path: entry.path.clone(),
        service_request_id,
        login,
        password,
    })
}

use std::io::Write;

use bundle_common::{Result, SendBundleError};
use bundle_domain::BundleEntry;

use super::select::render_table;

/// `--list`：输出表格或 JSON，不进入交互
pub fn print_listing<W: Write>(bundles: &[BundleEntry], json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, bundles)
            .map_err(|e| SendBundleError::Io(e.into()))?;
        writeln!(out)?;
    } else {
        render_table(bundles, out);
    }
    Ok(())
}

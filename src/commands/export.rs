//! mime export コマンド
//!
//! インストール済みレコードを `mime install` で読み込めるリソースファイルとして書き出す。

use super::Context;
use crate::application::export_type;
use crate::mime_type::MimeType;
use crate::resource::ResourceArchiveWriter;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Parser)]
pub struct Args {
    /// MIME type to export (e.g. "text/x-sample")
    pub identifier: String,

    /// Resource file to write
    pub output: PathBuf,
}

pub fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let mime = MimeType::parse(&args.identifier).map_err(|e| e.to_string())?;

    // 途中で失敗しても出力先に壊れたファイルを残さない
    let dir = parent_dir(&args.output);
    let temp = NamedTempFile::new_in(dir)
        .map_err(|e| format!("Failed to create temp file in {}: {}", dir.display(), e))?;

    let mut writer = ResourceArchiveWriter::new(temp);
    let fields = export_type(ctx.registry.as_ref(), &mime, &mut writer)
        .map_err(|e| format!("{} Failed to export {}: {}", "✗".red(), mime, e))?;
    let temp = writer.finish().map_err(|e| e.to_string())?;
    temp.persist(&args.output)
        .map_err(|e| format!("Failed to write {}: {}", args.output.display(), e))?;

    println!(
        "{} Exported {} to {} ({} resource(s))",
        "✓".green(),
        mime.bold(),
        args.output.display(),
        fields.len()
    );
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;

//! mime install コマンド
//!
//! 引数が既存ファイルならリソースとしてインポートし、
//! そうでなければ MIME タイプ識別子として空のレコードをインストールする。

use super::Context;
use crate::application::{self, Disposition, ImportContext, ImportReport, InstallOutcome};
use crate::output::CommandSummary;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Resource file to import, or a MIME type to install (e.g. "text/x-sample")
    #[arg(value_name = "PATH_OR_TYPE")]
    pub target: String,
}

pub fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let path = Path::new(&args.target);
    if path.is_file() {
        import(path, ctx)
    } else {
        install_identifier(&args.target, ctx)
    }
}

fn import(path: &Path, ctx: &Context) -> Result<(), String> {
    let import_ctx = ImportContext {
        registry: ctx.registry.as_ref(),
        index: ctx.index.as_ref(),
        volume: &ctx.volume,
    };
    let report = application::import_from_path(path, &import_ctx)
        .map_err(|e| format!("{} Failed to import {}: {}", "✗".red(), path.display(), e))?;

    print_report(&report);
    Ok(())
}

fn install_identifier(target: &str, ctx: &Context) -> Result<(), String> {
    match application::install_type(ctx.registry.as_ref(), target) {
        Ok(InstallOutcome::Installed) => {
            println!("{} Installed {}", "✓".green(), target.to_lowercase().bold());
            Ok(())
        }
        Ok(InstallOutcome::AlreadyInstalled) => {
            println!(
                "{} {} is already installed",
                "•".yellow(),
                target.to_lowercase()
            );
            Ok(())
        }
        Err(e) => Err(format!(
            "{} {} is neither a resource file nor an installable MIME type: {}",
            "✗".red(),
            target,
            e
        )),
    }
}

fn print_report(report: &ImportReport) {
    if report.disposition == Disposition::Updated {
        println!(
            "  {} {} already installed, updating",
            "•".blue(),
            report.mime_type
        );
    }
    for warning in &report.warnings {
        eprintln!("  {} {}", "!".yellow(), warning);
    }
    for outcome in &report.index_outcomes {
        if outcome.is_warning() {
            eprintln!("  {} {}", "!".yellow(), outcome);
        } else {
            println!("  {} {}", "•".blue(), outcome);
        }
    }
    println!("{}", CommandSummary::import(report));
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;

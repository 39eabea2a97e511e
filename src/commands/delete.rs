//! mime delete コマンド

use super::Context;
use crate::application::{self, DeleteOutcome};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// MIME type to delete (e.g. "text/x-sample")
    pub identifier: String,
}

pub fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let outcome = application::delete_type(ctx.registry.as_ref(), &args.identifier).map_err(
        |e| format!("{} Failed to delete {}: {}", "✗".red(), args.identifier, e),
    )?;

    match outcome {
        DeleteOutcome::Deleted => {
            println!(
                "{} Deleted {}",
                "✓".green(),
                args.identifier.to_lowercase().bold()
            );
        }
        DeleteOutcome::NotInstalled => {
            eprintln!(
                "{} {} is not installed, skipping",
                "!".yellow(),
                args.identifier.to_lowercase()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_test.rs"]
mod tests;

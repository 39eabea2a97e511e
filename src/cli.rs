use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{delete, export, install, list};
use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "mime", version)]
#[command(about = "MIME type database import, manipulation and export", long_about = None)]
pub struct Cli {
    /// MIME database directory (overrides MIME_DB_DIR and config.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub db: Option<PathBuf>,

    /// Attribute index directory (overrides MIME_INDEX_DIR and config.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub index_dir: Option<PathBuf>,

    /// Volume on which attribute indexes are created
    #[arg(long, global = true, value_name = "NAME")]
    pub volume: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// 設定の上書き値
    pub fn overrides(&self) -> Overrides {
        Overrides {
            database_dir: self.db.clone(),
            index_dir: self.index_dir.clone(),
            volume: self.volume.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import a resource file or install an empty MIME type
    Install(install::Args),

    /// Delete an installed MIME type
    #[command(alias = "uninstall")]
    Delete(delete::Args),

    /// List installed entity and relation types
    List(list::Args),

    /// Export an installed MIME type as a resource file
    Export(export::Args),
}

use crate::cli::Command;
use crate::config::Settings;
use crate::index::{IndexService, IndexStore};
use crate::registry::{FsMimeDb, MimeRegistry};

pub mod delete;
pub mod export;
pub mod install;
pub mod list;

/// コマンド実行に必要なサービス
pub struct Context {
    pub registry: Box<dyn MimeRegistry>,
    pub index: Box<dyn IndexService>,
    pub volume: String,
}

impl Context {
    /// 設定からファイルベースのサービスを組み立てる
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            registry: Box::new(FsMimeDb::open(&settings.database_dir)),
            index: Box::new(IndexStore::open(&settings.index_dir)),
            volume: settings.volume.clone(),
        }
    }
}

pub fn dispatch(command: Command, ctx: &Context) -> Result<(), String> {
    match command {
        Command::Install(args) => install::run(args, ctx),
        Command::Delete(args) => delete::run(args, ctx),
        Command::List(args) => list::run(args, ctx),
        Command::Export(args) => export::run(args, ctx),
    }
}

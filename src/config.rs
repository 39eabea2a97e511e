//! 設定
//!
//! 優先順位: CLI オプション > 環境変数 > `$MIME_HOME/config.toml` > デフォルト
//!
//! ```toml
//! database_dir = "mime_db"   # 相対パスは MIME_HOME 基準
//! index_dir = "indices"
//! volume = "boot"
//! ```

use crate::env::EnvVar;
use crate::error::{MimeError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 設定ファイル名
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_DB_DIR: &str = "mime_db";
const DEFAULT_INDEX_DIR: &str = "indices";
const DEFAULT_VOLUME: &str = "boot";

/// config.toml の内容（すべて任意）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    database_dir: Option<PathBuf>,
    index_dir: Option<PathBuf>,
    volume: Option<String>,
}

/// CLI から渡される上書き値
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_dir: Option<PathBuf>,
    pub index_dir: Option<PathBuf>,
    pub volume: Option<String>,
}

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_dir: PathBuf,
    pub index_dir: PathBuf,
    pub volume: String,
}

impl Settings {
    /// MIME_HOME（未設定なら `~/.mime`）から読み込む
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let home = mime_home()?;
        Self::load_from(&home, overrides)
    }

    /// 指定ディレクトリの config.toml から読み込む
    pub fn load_from(home: &Path, overrides: &Overrides) -> Result<Self> {
        let file = read_config_file(&home.join(CONFIG_FILE))?;

        // CLI・環境変数のパスはそのまま、config.toml とデフォルトは MIME_HOME 基準
        let database_dir = overrides
            .database_dir
            .clone()
            .or_else(|| EnvVar::get(EnvVar::DB_DIR).map(PathBuf::from))
            .unwrap_or_else(|| {
                home.join(file.database_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_DIR)))
            });

        let index_dir = overrides
            .index_dir
            .clone()
            .or_else(|| EnvVar::get(EnvVar::INDEX_DIR).map(PathBuf::from))
            .unwrap_or_else(|| {
                home.join(file.index_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR)))
            });

        let volume = overrides
            .volume
            .clone()
            .or_else(|| EnvVar::get(EnvVar::VOLUME))
            .or(file.volume)
            .unwrap_or_else(|| DEFAULT_VOLUME.to_string());

        if volume.trim().is_empty() {
            return Err(MimeError::Config("volume cannot be empty".to_string()));
        }

        let settings = Self {
            database_dir,
            index_dir,
            volume,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// 設定ディレクトリ
fn mime_home() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::get(EnvVar::HOME) {
        return Ok(PathBuf::from(dir));
    }
    let home = EnvVar::get("HOME")
        .ok_or_else(|| MimeError::Config("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home).join(".mime"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map_err(|e| {
            MimeError::Config(format!("Failed to parse {}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(MimeError::Io(e)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

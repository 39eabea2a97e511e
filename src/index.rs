//! 属性インデックス
//!
//! ボリューム単位の属性インデックスの作成・削除と、
//! 属性記述子に合わせたベストエフォートの同期処理を提供する。

#[cfg(test)]
pub mod mock;

use crate::error::MimeError;
use crate::fs::{FileSystem, RealFs};
use crate::record::{AttrType, AttributeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// インデックス操作のエラー分類
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index {0} already exists")]
    AlreadyExists(String),

    #[error("index {0} not found")]
    NotFound(String),

    #[error("attributes of type {0} cannot be indexed")]
    Unsupported(AttrType),

    #[error(transparent)]
    Other(#[from] MimeError),
}

/// ファイルシステムのインデックスサービス
pub trait IndexService {
    /// インデックスを作成
    fn create_index(&self, volume: &str, name: &str, attr_type: AttrType) -> Result<(), IndexError>;

    /// インデックスを削除
    fn remove_index(&self, volume: &str, name: &str) -> Result<(), IndexError>;
}

/// インデックス 1 件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: AttrType,
}

/// `<volume>.json` のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct IndexTable {
    indices: Vec<IndexEntry>,
}

/// ファイルベースのインデックスストア
///
/// ボリュームごとに `<root>/<volume>.json` を管理する。
pub struct IndexStore {
    root: PathBuf,
    fs: Box<dyn FileSystem>,
}

impl IndexStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, Box::new(RealFs))
    }

    /// ファイルシステム実装を指定して作成（テスト用）
    pub fn with_fs(root: impl Into<PathBuf>, fs: Box<dyn FileSystem>) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    /// ボリュームのインデックス一覧
    #[cfg(test)]
    pub fn list(&self, volume: &str) -> Result<Vec<IndexEntry>, IndexError> {
        Ok(self.load(volume)?.indices)
    }

    fn table_path(&self, volume: &str) -> Result<PathBuf, IndexError> {
        validate_volume(volume)?;
        Ok(self.root.join(format!("{}.json", volume)))
    }

    fn load(&self, volume: &str) -> Result<IndexTable, IndexError> {
        let path = self.table_path(volume)?;
        if !self.fs.exists(&path) {
            return Ok(IndexTable::default());
        }
        let content = self.fs.read(&path)?;
        serde_json::from_slice(&content).map_err(|e| {
            IndexError::Other(MimeError::Index(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            )))
        })
    }

    fn save(&self, volume: &str, table: &IndexTable) -> Result<(), IndexError> {
        let path = self.table_path(volume)?;
        let content = serde_json::to_string_pretty(table).map_err(MimeError::from)?;
        self.fs.write(&path, content.as_bytes())?;
        Ok(())
    }
}

impl IndexService for IndexStore {
    fn create_index(&self, volume: &str, name: &str, attr_type: AttrType) -> Result<(), IndexError> {
        if !attr_type.is_indexable() {
            return Err(IndexError::Unsupported(attr_type));
        }

        let mut table = self.load(volume)?;
        if table.indices.iter().any(|e| e.name == name) {
            return Err(IndexError::AlreadyExists(name.to_string()));
        }

        table.indices.push(IndexEntry {
            name: name.to_string(),
            attr_type,
        });
        table.indices.sort_by(|a, b| a.name.cmp(&b.name));
        self.save(volume, &table)
    }

    fn remove_index(&self, volume: &str, name: &str) -> Result<(), IndexError> {
        let mut table = self.load(volume)?;
        let original_len = table.indices.len();

        table.indices.retain(|e| e.name != name);

        if table.indices.len() == original_len {
            return Err(IndexError::NotFound(name.to_string()));
        }
        self.save(volume, &table)
    }
}

/// ボリューム名の検証（パス区切りやトラバーサルを拒否）
fn validate_volume(volume: &str) -> Result<(), IndexError> {
    let invalid = volume.is_empty()
        || volume.contains(['/', '\\'])
        || volume.starts_with('.')
        || Path::new(volume).components().count() != 1;
    if invalid {
        return Err(IndexError::Other(MimeError::Index(format!(
            "invalid volume name '{}'",
            volume
        ))));
    }
    Ok(())
}

/// 同期処理で行った操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAction {
    Create,
    Remove,
}

/// 操作結果の分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStatus {
    Created,
    Removed,
    /// 作成しようとしたが既に存在（目的の状態には到達済み）
    AlreadyExists,
    /// 削除しようとしたが存在しない（目的の状態には到達済み）
    NotFound,
    Failed(String),
}

/// 属性 1 件分の同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub attribute: String,
    pub action: IndexAction,
    pub status: IndexStatus,
}

impl IndexOutcome {
    /// 警告として表示すべき結果かどうか
    pub fn is_warning(&self) -> bool {
        matches!(self.status, IndexStatus::Failed(_))
    }
}

impl fmt::Display for IndexOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            IndexStatus::Created => write!(f, "created index {}", self.attribute),
            IndexStatus::Removed => write!(f, "removed index {}", self.attribute),
            IndexStatus::AlreadyExists => write!(f, "index {} already exists", self.attribute),
            IndexStatus::NotFound => write!(f, "index {} does not exist", self.attribute),
            IndexStatus::Failed(reason) => {
                let verb = match self.action {
                    IndexAction::Create => "create",
                    IndexAction::Remove => "remove",
                };
                write!(f, "failed to {} index {}: {}", verb, self.attribute, reason)
            }
        }
    }
}

/// 属性記述子に合わせてインデックスを同期する
///
/// `searchable` が Some(true) なら作成、Some(false) なら削除、None なら何もしない。
/// 失敗しても処理は中断せず、属性ごとの結果を返す。
pub fn sync_indexes(
    service: &dyn IndexService,
    volume: &str,
    attributes: &[AttributeDescriptor],
) -> Vec<IndexOutcome> {
    let mut outcomes = Vec::new();

    for attr in attributes {
        let Some(searchable) = attr.searchable else {
            continue;
        };

        let (action, result) = if searchable {
            (
                IndexAction::Create,
                service.create_index(volume, &attr.name, attr.attr_type),
            )
        } else {
            (IndexAction::Remove, service.remove_index(volume, &attr.name))
        };

        let status = match (action, result) {
            (IndexAction::Create, Ok(())) => IndexStatus::Created,
            (IndexAction::Remove, Ok(())) => IndexStatus::Removed,
            (_, Err(IndexError::AlreadyExists(_))) => IndexStatus::AlreadyExists,
            (_, Err(IndexError::NotFound(_))) => IndexStatus::NotFound,
            (_, Err(e)) => IndexStatus::Failed(e.to_string()),
        };

        let outcome = IndexOutcome {
            attribute: attr.name.clone(),
            action,
            status,
        };
        tracing::debug!(volume, "{}", outcome);
        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;

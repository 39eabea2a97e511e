//! ファイルベースの MIME データベース
//!
//! レイアウト: `<root>/<supertype>/<subtype>.json`
//! 1 ファイルに 1 レコードを JSON で保存する。

use super::{FieldUpdate, MimeRegistry};
use crate::error::{MimeError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::mime_type::{validate_supertype, MimeType};
use crate::record::TypeRecord;
use std::path::{Path, PathBuf};

const RECORD_EXTENSION: &str = "json";

/// ファイルベースの MIME データベース
pub struct FsMimeDb {
    root: PathBuf,
    fs: Box<dyn FileSystem>,
}

impl FsMimeDb {
    /// 実ファイルシステム上のデータベースを開く
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

    /// レコードファイルのパス
    pub fn record_path(&self, mime: &MimeType) -> PathBuf {
        self.root
            .join(mime.supertype())
            .join(format!("{}.{}", mime.subtype(), RECORD_EXTENSION))
    }

    fn load(&self, path: &Path) -> Result<TypeRecord> {
        let content = self.fs.read(path)?;
        serde_json::from_slice(&content).map_err(|e| {
            MimeError::Database(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn store(&self, record: &TypeRecord) -> Result<()> {
        let content = serde_json::to_string_pretty(record)?;
        self.fs
            .write(&self.record_path(&record.mime_type), content.as_bytes())
    }

    /// スーパータイプ 1 件分のレコードを読み込む
    fn load_supertype(&self, dir: &Path, records: &mut Vec<TypeRecord>) -> Result<()> {
        for entry in self.fs.read_dir(dir)? {
            let is_record = entry.is_file()
                && entry
                    .path
                    .extension()
                    .is_some_and(|ext| ext == RECORD_EXTENSION);
            if !is_record {
                continue;
            }
            match self.load(&entry.path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %entry.path.display(), error = %e, "skipping unreadable record");
                }
            }
        }
        Ok(())
    }
}

impl MimeRegistry for FsMimeDb {
    fn is_installed(&self, mime: &MimeType) -> Result<bool> {
        Ok(self.fs.exists(&self.record_path(mime)))
    }

    fn install(&self, mime: &MimeType) -> Result<()> {
        if self.is_installed(mime)? {
            return Err(MimeError::AlreadyInstalled(mime.to_string()));
        }
        tracing::debug!(mime = %mime, "installing record");
        self.store(&TypeRecord::empty(mime.clone()))
    }

    fn delete(&self, mime: &MimeType) -> Result<()> {
        if !self.is_installed(mime)? {
            return Err(MimeError::NotInstalled(mime.to_string()));
        }
        tracing::debug!(mime = %mime, "deleting record");
        self.fs.remove_file(&self.record_path(mime))
    }

    fn get(&self, mime: &MimeType) -> Result<TypeRecord> {
        if !self.is_installed(mime)? {
            return Err(MimeError::NotInstalled(mime.to_string()));
        }
        self.load(&self.record_path(mime))
    }

    fn list_installed(&self, supertype: Option<&str>) -> Result<Vec<TypeRecord>> {
        let mut records = Vec::new();

        match supertype {
            Some(name) => {
                validate_supertype(name).map_err(|reason| MimeError::InvalidMimeType {
                    identifier: name.to_string(),
                    reason,
                })?;
                let dir = self.root.join(name.to_ascii_lowercase());
                if self.fs.is_dir(&dir) {
                    self.load_supertype(&dir, &mut records)?;
                }
            }
            None => {
                if !self.fs.is_dir(&self.root) {
                    return Ok(records);
                }
                for entry in self.fs.read_dir(&self.root)? {
                    if entry.is_dir() {
                        self.load_supertype(&entry.path, &mut records)?;
                    }
                }
            }
        }

        records.sort_by(|a, b| a.mime_type.cmp(&b.mime_type));
        Ok(records)
    }

    fn set(&self, mime: &MimeType, update: FieldUpdate) -> Result<()> {
        let mut record = self.get(mime)?;
        tracing::trace!(mime = %mime, field = update.field_name(), "setting field");
        update.apply(&mut record);
        self.store(&record)
    }
}

#[cfg(test)]
#[path = "fs_db_test.rs"]
mod tests;

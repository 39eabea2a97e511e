//! テスト用モックインデックスサービス

use super::{IndexError, IndexService};
use crate::error::MimeError;
use crate::record::AttrType;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// テスト用モックインデックスサービス
///
/// `(volume, name)` をキーにインデックスを保持し、呼び出し回数を記録する。
#[derive(Default)]
pub struct MockIndex {
    indices: RwLock<BTreeMap<(String, String), AttrType>>,
    calls: RwLock<usize>,
    broken: bool,
}

impl MockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作を I/O エラーで失敗させる
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn add(&self, volume: &str, name: &str, attr_type: AttrType) {
        self.indices
            .write()
            .unwrap()
            .insert((volume.to_string(), name.to_string()), attr_type);
    }

    pub fn get(&self, volume: &str, name: &str) -> Option<AttrType> {
        self.indices
            .read()
            .unwrap()
            .get(&(volume.to_string(), name.to_string()))
            .copied()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.read().unwrap()
    }

    fn record_call(&self) -> Result<(), IndexError> {
        *self.calls.write().unwrap() += 1;
        if self.broken {
            return Err(IndexError::Other(MimeError::Index(
                "volume is read-only".to_string(),
            )));
        }
        Ok(())
    }
}

impl IndexService for MockIndex {
    fn create_index(&self, volume: &str, name: &str, attr_type: AttrType) -> Result<(), IndexError> {
        self.record_call()?;
        let key = (volume.to_string(), name.to_string());
        let mut indices = self.indices.write().unwrap();
        if indices.contains_key(&key) {
            return Err(IndexError::AlreadyExists(name.to_string()));
        }
        indices.insert(key, attr_type);
        Ok(())
    }

    fn remove_index(&self, volume: &str, name: &str) -> Result<(), IndexError> {
        self.record_call()?;
        self.indices
            .write()
            .unwrap()
            .remove(&(volume.to_string(), name.to_string()))
            .map(|_| ())
            .ok_or_else(|| IndexError::NotFound(name.to_string()))
    }
}

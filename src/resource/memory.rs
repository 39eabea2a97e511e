//! テスト用インメモリリソースソース

use super::{MetaField, ResourceSource, TypeCode};
use crate::error::Result;
use std::collections::HashMap;

/// テスト用インメモリリソースソース
#[derive(Default)]
pub struct MemoryResources {
    entries: HashMap<(TypeCode, String), Vec<u8>>,
    loads: usize,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドに生データを設定
    pub fn with(mut self, field: MetaField, data: &[u8]) -> Self {
        self.entries
            .insert((field.type_code(), field.name().to_string()), data.to_vec());
        self
    }

    /// 文字列フィールドを設定
    pub fn with_str(self, field: MetaField, value: &str) -> Self {
        self.with(field, value.as_bytes())
    }

    /// JSON メッセージフィールドを設定
    pub fn with_json(self, field: MetaField, value: serde_json::Value) -> Self {
        let data = serde_json::to_vec(&value).unwrap();
        self.with(field, &data)
    }

    /// load が呼ばれた回数
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

impl ResourceSource for MemoryResources {
    fn load(&mut self, type_code: TypeCode, name: &str) -> Result<Option<Vec<u8>>> {
        self.loads += 1;
        Ok(self.entries.get(&(type_code, name.to_string())).cloned())
    }
}

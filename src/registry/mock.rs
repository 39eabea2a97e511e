//! テスト用モックレジストリ
//!
//! 呼び出し履歴を記録するインメモリ実装。

use super::{FieldUpdate, MimeRegistry};
use crate::error::{MimeError, Result};
use crate::mime_type::MimeType;
use crate::record::TypeRecord;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// 記録された呼び出し
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryCall {
    IsInstalled(String),
    Install(String),
    Delete(String),
    Get(String),
    List(Option<String>),
    Set(String, &'static str),
}

/// テスト用モックレジストリ
#[derive(Default)]
pub struct MockRegistry {
    records: RwLock<BTreeMap<String, TypeRecord>>,
    calls: RwLock<Vec<RegistryCall>>,
    fail_install: bool,
    fail_list: Vec<String>,
    fail_set: Option<&'static str>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// install を常に失敗させる
    pub fn failing_install() -> Self {
        Self {
            fail_install: true,
            ..Self::default()
        }
    }

    /// 指定スーパータイプの list_installed を失敗させる
    pub fn failing_list(supertypes: &[&str]) -> Self {
        Self {
            fail_list: supertypes.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// 指定フィールドの set を失敗させる（名前は `FieldUpdate::field_name`）
    pub fn failing_set(field_name: &'static str) -> Self {
        Self {
            fail_set: Some(field_name),
            ..Self::default()
        }
    }

    /// レコードを直接追加
    pub fn add_record(&self, record: TypeRecord) {
        self.records
            .write()
            .unwrap()
            .insert(record.mime_type.to_string(), record);
    }

    pub fn record(&self, mime: &str) -> Option<TypeRecord> {
        self.records.read().unwrap().get(mime).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.read().unwrap().clone()
    }

    fn log(&self, call: RegistryCall) {
        self.calls.write().unwrap().push(call);
    }
}

impl MimeRegistry for MockRegistry {
    fn is_installed(&self, mime: &MimeType) -> Result<bool> {
        self.log(RegistryCall::IsInstalled(mime.to_string()));
        Ok(self.records.read().unwrap().contains_key(mime.as_str()))
    }

    fn install(&self, mime: &MimeType) -> Result<()> {
        self.log(RegistryCall::Install(mime.to_string()));
        if self.fail_install {
            return Err(MimeError::Database("registry unavailable".to_string()));
        }
        let mut records = self.records.write().unwrap();
        if records.contains_key(mime.as_str()) {
            return Err(MimeError::AlreadyInstalled(mime.to_string()));
        }
        records.insert(mime.to_string(), TypeRecord::empty(mime.clone()));
        Ok(())
    }

    fn delete(&self, mime: &MimeType) -> Result<()> {
        self.log(RegistryCall::Delete(mime.to_string()));
        self.records
            .write()
            .unwrap()
            .remove(mime.as_str())
            .map(|_| ())
            .ok_or_else(|| MimeError::NotInstalled(mime.to_string()))
    }

    fn get(&self, mime: &MimeType) -> Result<TypeRecord> {
        self.log(RegistryCall::Get(mime.to_string()));
        self.record(mime.as_str())
            .ok_or_else(|| MimeError::NotInstalled(mime.to_string()))
    }

    fn list_installed(&self, supertype: Option<&str>) -> Result<Vec<TypeRecord>> {
        self.log(RegistryCall::List(supertype.map(str::to_string)));
        if let Some(name) = supertype {
            if self.fail_list.iter().any(|s| s == name) {
                return Err(MimeError::Database(format!("cannot query {}", name)));
            }
        }
        Ok(self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| supertype.map_or(true, |s| r.mime_type.supertype() == s))
            .cloned()
            .collect())
    }

    fn set(&self, mime: &MimeType, update: FieldUpdate) -> Result<()> {
        self.log(RegistryCall::Set(mime.to_string(), update.field_name()));
        if self.fail_set == Some(update.field_name()) {
            return Err(MimeError::Database(format!(
                "cannot write {}",
                update.field_name()
            )));
        }
        let mut records = self.records.write().unwrap();
        let record = records
            .get_mut(mime.as_str())
            .ok_or_else(|| MimeError::NotInstalled(mime.to_string()))?;
        update.apply(record);
        Ok(())
    }
}

/// `Context` に渡した後も呼び出し履歴を確認できるようにする
impl MimeRegistry for Arc<MockRegistry> {
    fn is_installed(&self, mime: &MimeType) -> Result<bool> {
        (**self).is_installed(mime)
    }

    fn install(&self, mime: &MimeType) -> Result<()> {
        (**self).install(mime)
    }

    fn delete(&self, mime: &MimeType) -> Result<()> {
        (**self).delete(mime)
    }

    fn get(&self, mime: &MimeType) -> Result<TypeRecord> {
        (**self).get(mime)
    }

    fn list_installed(&self, supertype: Option<&str>) -> Result<Vec<TypeRecord>> {
        (**self).list_installed(supertype)
    }

    fn set(&self, mime: &MimeType, update: FieldUpdate) -> Result<()> {
        (**self).set(mime, update)
    }
}

//! リソースソース
//!
//! ファイルに格納されたキー付きメタデータブロックを `(type code, name)` で引く。
//! 実装はリソースアーカイブ（zip コンテナ）。

mod archive;

#[cfg(test)]
pub mod memory;

pub use archive::{ResourceArchive, ResourceArchiveWriter};

use crate::error::{MimeError, Result};
use crate::record::AttributeDescriptor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 4 文字のリソース型コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode([u8; 4]);

impl TypeCode {
    /// NUL 終端文字列
    pub const STRING: TypeCode = TypeCode(*b"CSTR");
    /// 短い説明
    pub const SHORT_DESCRIPTION: TypeCode = TypeCode(*b"MSDC");
    /// 長い説明
    pub const LONG_DESCRIPTION: TypeCode = TypeCode(*b"MLDC");
    /// アプリケーションシグネチャ
    pub const SIGNATURE: TypeCode = TypeCode(*b"MSIG");
    /// メッセージ（JSON ドキュメント）
    pub const MESSAGE: TypeCode = TypeCode(*b"MSGG");
    /// ベクターアイコン
    pub const VECTOR_ICON: TypeCode = TypeCode(*b"VICN");

    pub fn as_str(&self) -> &str {
        // 定数はすべて ASCII
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// インポート対象のメタデータフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Type,
    ShortDescription,
    LongDescription,
    PreferredApp,
    SnifferRule,
    Extensions,
    AttrInfo,
    Icon,
}

impl MetaField {
    #[cfg(test)]
    pub const ALL: [MetaField; 8] = [
        MetaField::Type,
        MetaField::ShortDescription,
        MetaField::LongDescription,
        MetaField::PreferredApp,
        MetaField::SnifferRule,
        MetaField::Extensions,
        MetaField::AttrInfo,
        MetaField::Icon,
    ];

    pub fn type_code(&self) -> TypeCode {
        match self {
            MetaField::Type | MetaField::SnifferRule => TypeCode::STRING,
            MetaField::ShortDescription => TypeCode::SHORT_DESCRIPTION,
            MetaField::LongDescription => TypeCode::LONG_DESCRIPTION,
            MetaField::PreferredApp => TypeCode::SIGNATURE,
            MetaField::Extensions | MetaField::AttrInfo => TypeCode::MESSAGE,
            MetaField::Icon => TypeCode::VECTOR_ICON,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetaField::Type => "META:TYPE",
            MetaField::ShortDescription => "META:S:DESC",
            MetaField::LongDescription => "META:L:DESC",
            MetaField::PreferredApp => "META:PREF_APP",
            MetaField::SnifferRule => "META:SNIFF_RULE",
            MetaField::Extensions => "META:EXTENS",
            MetaField::AttrInfo => "META:ATTR_INFO",
            MetaField::Icon => "META:ICON",
        }
    }
}

/// 拡張子メッセージ（META:EXTENS）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionsMessage {
    pub extensions: Vec<String>,
}

/// 属性情報メッセージ（META:ATTR_INFO）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrInfoMessage {
    pub attributes: Vec<AttributeDescriptor>,
}

/// キー付きリソースの読み出し
pub trait ResourceSource {
    /// `(type_code, name)` のリソースを読み出す
    ///
    /// 存在しない場合は Ok(None)
    fn load(&mut self, type_code: TypeCode, name: &str) -> Result<Option<Vec<u8>>>;

    /// フィールドの生データを読み出す
    fn load_field(&mut self, field: MetaField) -> Result<Option<Vec<u8>>> {
        self.load(field.type_code(), field.name())
    }

    /// 文字列フィールドを読み出す（末尾の NUL は除去）
    fn load_string(&mut self, field: MetaField) -> Result<Option<String>> {
        let Some(mut bytes) = self.load_field(field)? else {
            return Ok(None);
        };
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| MimeError::MalformedField {
                field: field.name(),
                reason: e.to_string(),
            })
    }

    /// メッセージフィールドを読み出す
    fn load_message<T: DeserializeOwned>(&mut self, field: MetaField) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(bytes) = self.load_field(field)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| MimeError::MalformedField {
                field: field.name(),
                reason: e.to_string(),
            })
    }
}

/// 型コードと名前からアーカイブ内のエントリ名を組み立てる
pub fn entry_name(type_code: TypeCode, name: &str) -> String {
    format!("{}/{}", type_code, name)
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod tests;

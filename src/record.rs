//! タイプレコードと属性記述子
//!
//! MIME データベースに登録される 1 エントリ分のメタデータを表す。

use crate::mime_type::MimeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 属性値のエンコーディング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrType {
    String,
    #[serde(alias = "integer", alias = "int")]
    Int32,
    Int64,
    Float,
    Double,
    Bool,
    Time,
}

impl AttrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Int32 => "int32",
            AttrType::Int64 => "int64",
            AttrType::Float => "float",
            AttrType::Double => "double",
            AttrType::Bool => "bool",
            AttrType::Time => "time",
        }
    }

    /// 属性インデックスを作成できる型かどうか
    pub fn is_indexable(&self) -> bool {
        !matches!(self, AttrType::Bool)
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// タイプに紐づくファイル属性の記述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    #[serde(default)]
    pub public_name: String,
    #[serde(rename = "type")]
    pub attr_type: AttrType,
    /// Some(true) ならインデックス追加、Some(false) なら削除
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[cfg(test)]
impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, public_name: impl Into<String>, attr_type: AttrType) -> Self {
        Self {
            name: name.into(),
            public_name: public_name.into(),
            attr_type,
            searchable: None,
            viewable: None,
            editable: None,
            width: None,
        }
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = Some(searchable);
        self
    }
}

/// MIME データベースの 1 レコード
///
/// 未設定のフィールドは `None` のまま保持し、デフォルト値で埋めない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "type")]
    pub mime_type: MimeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sniffer_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_info: Option<Vec<AttributeDescriptor>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "icon_base64"
    )]
    pub icon: Option<Vec<u8>>,
}

impl TypeRecord {
    /// 空のレコードを作成
    pub fn empty(mime_type: MimeType) -> Self {
        Self {
            mime_type,
            short_description: None,
            long_description: None,
            preferred_app: None,
            sniffer_rule: None,
            extensions: None,
            attr_info: None,
            icon: None,
        }
    }
}

/// アイコンのバイト列を base64 文字列としてシリアライズする
mod icon_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(icon: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match icon {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

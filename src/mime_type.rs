//! MIME タイプ識別子
//!
//! `supertype/subtype` 形式の識別子をパース・検証する。
//! 大文字小文字は区別せず、小文字に正規化して保持する。

use crate::error::{MimeError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 識別子の最大長（終端分を除く）
pub const MAX_MIME_TYPE_LENGTH: usize = 255;

/// 識別子に使えない区切り文字
const SEPARATORS: &[char] = &[
    ' ', '<', '>', '@', ',', ';', ':', '"', '(', ')', '[', ']', '?', '=', '\\',
];

/// 検証済み MIME タイプ識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MimeType {
    value: String,
    slash: usize,
}

impl MimeType {
    /// 文字列をパースして検証する
    pub fn parse(input: &str) -> Result<Self> {
        validate(input).map_err(|reason| MimeError::InvalidMimeType {
            identifier: input.to_string(),
            reason,
        })?;

        let value = input.to_ascii_lowercase();
        // validate 済みなので必ず見つかる
        let slash = value.find('/').unwrap_or(value.len());
        Ok(Self { value, slash })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// スーパータイプ（例: "text"）
    pub fn supertype(&self) -> &str {
        &self.value[..self.slash]
    }

    /// サブタイプ（例: "x-example"）
    pub fn subtype(&self) -> &str {
        &self.value[self.slash + 1..]
    }
}

/// 識別子の構文チェック
///
/// エラー時は理由を返す。
pub fn validate(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        return Err("identifier cannot be empty".to_string());
    }

    if input.len() >= MAX_MIME_TYPE_LENGTH {
        return Err(format!(
            "identifier is too long (max {} characters)",
            MAX_MIME_TYPE_LENGTH - 1
        ));
    }

    for c in input.chars() {
        if !c.is_ascii_graphic() {
            return Err(format!("invalid character {:?}", c));
        }
        if SEPARATORS.contains(&c) {
            return Err(format!("separator character '{}' is not allowed", c));
        }
    }

    let (supertype, subtype) = input
        .split_once('/')
        .ok_or_else(|| "expected <supertype>/<subtype>".to_string())?;

    if supertype.is_empty() {
        return Err("supertype cannot be empty".to_string());
    }
    if subtype.is_empty() {
        return Err("subtype cannot be empty".to_string());
    }
    if subtype.contains('/') {
        return Err("only one '/' is allowed".to_string());
    }
    // データベース上のパス要素になる
    if [supertype, subtype].iter().any(|part| matches!(*part, "." | "..")) {
        return Err("'.' and '..' are reserved".to_string());
    }

    Ok(())
}

/// スーパータイプ単体（list のカテゴリ指定用）の検証
pub fn validate_supertype(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        return Err("supertype cannot be empty".to_string());
    }
    if input.contains('/') {
        return Err("supertype cannot contain '/'".to_string());
    }
    validate(&format!("{}/x", input))
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for MimeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for MimeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MimeType::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "mime_type_test.rs"]
mod tests;

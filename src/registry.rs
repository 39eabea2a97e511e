//! MIME タイプレジストリ
//!
//! タイプレコードの登録・削除・一覧取得を行うクライアント層。
//! すべての操作は同期的な往復呼び出しで、ローカルキャッシュは持たない。

mod fs_db;

#[cfg(test)]
pub mod mock;

pub use fs_db::FsMimeDb;

use crate::error::Result;
use crate::mime_type::MimeType;
use crate::record::{AttributeDescriptor, TypeRecord};

/// インストール済みレコードに対するフィールド更新
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    ShortDescription(String),
    LongDescription(String),
    PreferredApp(String),
    SnifferRule(String),
    Extensions(Vec<String>),
    AttrInfo(Vec<AttributeDescriptor>),
    Icon(Vec<u8>),
}

impl FieldUpdate {
    /// 対応するリソース名（ログ・エラー表示用）
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::ShortDescription(_) => "short description",
            FieldUpdate::LongDescription(_) => "long description",
            FieldUpdate::PreferredApp(_) => "preferred app",
            FieldUpdate::SnifferRule(_) => "sniffer rule",
            FieldUpdate::Extensions(_) => "file extensions",
            FieldUpdate::AttrInfo(_) => "attribute info",
            FieldUpdate::Icon(_) => "icon",
        }
    }

    /// レコードに適用
    pub fn apply(self, record: &mut TypeRecord) {
        match self {
            FieldUpdate::ShortDescription(v) => record.short_description = Some(v),
            FieldUpdate::LongDescription(v) => record.long_description = Some(v),
            FieldUpdate::PreferredApp(v) => record.preferred_app = Some(v),
            FieldUpdate::SnifferRule(v) => record.sniffer_rule = Some(v),
            FieldUpdate::Extensions(v) => record.extensions = Some(v),
            FieldUpdate::AttrInfo(v) => record.attr_info = Some(v),
            FieldUpdate::Icon(v) => record.icon = Some(v),
        }
    }
}

/// MIME タイプレジストリのクライアント
///
/// フィールド更新はインストール済みの識別子に対してのみ有効。
/// 未インストールの場合は `MimeError::NotInstalled` を返す。
pub trait MimeRegistry {
    /// インストール済みかどうか
    fn is_installed(&self, mime: &MimeType) -> Result<bool>;

    /// 空のレコードを登録
    ///
    /// 既に存在する場合は `MimeError::AlreadyInstalled`
    fn install(&self, mime: &MimeType) -> Result<()>;

    /// レコードを削除
    ///
    /// 存在しない場合は `MimeError::NotInstalled`
    fn delete(&self, mime: &MimeType) -> Result<()>;

    /// レコードを取得
    fn get(&self, mime: &MimeType) -> Result<TypeRecord>;

    /// インストール済みレコードの一覧
    ///
    /// `supertype` が None なら全件。順序は保証しない。
    fn list_installed(&self, supertype: Option<&str>) -> Result<Vec<TypeRecord>>;

    /// フィールドを設定
    fn set(&self, mime: &MimeType, update: FieldUpdate) -> Result<()>;
}

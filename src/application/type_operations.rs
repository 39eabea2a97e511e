//! MIME タイプ操作ユースケース
//!
//! 識別子指定のインストール、削除、カテゴリ別一覧を提供する。

use crate::error::{MimeError, Result};
use crate::mime_type::MimeType;
use crate::record::TypeRecord;
use crate::registry::MimeRegistry;

/// `list` が問い合わせるカテゴリ（表示順）
pub const LIST_CATEGORIES: [&str; 2] = ["entity", "relation"];

/// 識別子指定インストールの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

/// 削除の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// 未インストールのためスキップ
    NotInstalled,
}

/// カテゴリ 1 件分の一覧結果
#[derive(Debug)]
pub struct CategoryListing {
    pub category: &'static str,
    pub result: Result<Vec<TypeRecord>>,
}

/// 空のレコードとしてインストール
///
/// 既にインストール済みならエラーにせず `AlreadyInstalled` を返す。
pub fn install_type(registry: &dyn MimeRegistry, identifier: &str) -> Result<InstallOutcome> {
    let mime = MimeType::parse(identifier)?;
    match registry.install(&mime) {
        Ok(()) => Ok(InstallOutcome::Installed),
        Err(MimeError::AlreadyInstalled(_)) => Ok(InstallOutcome::AlreadyInstalled),
        Err(e) => Err(e),
    }
}

/// レコードを削除
///
/// 未インストールの識別子はスキップとして成功扱い。
pub fn delete_type(registry: &dyn MimeRegistry, identifier: &str) -> Result<DeleteOutcome> {
    let mime = MimeType::parse(identifier)?;

    if !registry.is_installed(&mime)? {
        tracing::info!(mime = %mime, "not installed, skipping");
        return Ok(DeleteOutcome::NotInstalled);
    }

    match registry.delete(&mime) {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        // 確認後に別プロセスが消した場合
        Err(MimeError::NotInstalled(_)) => Ok(DeleteOutcome::NotInstalled),
        Err(e) => Err(e),
    }
}

/// カテゴリごとに一覧を取得
///
/// 片方の失敗でもう片方の問い合わせを止めない。
pub fn list_categories(
    registry: &dyn MimeRegistry,
    categories: &[&'static str],
) -> Vec<CategoryListing> {
    categories
        .iter()
        .map(|&category| {
            let result = registry.list_installed(Some(category));
            if let Err(e) = &result {
                tracing::debug!(category, error = %e, "failed to query MIME database");
            }
            CategoryListing { category, result }
        })
        .collect()
}

#[cfg(test)]
#[path = "type_operations_test.rs"]
mod tests;

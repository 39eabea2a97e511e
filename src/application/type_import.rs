//! リソースからの MIME タイプインポート
//!
//! ## 処理順序
//!
//! 1. リソースを開く（失敗は致命的）
//! 2. META:TYPE を読む（無ければ致命的。この時点までレジストリ呼び出しはゼロ）
//! 3. 識別子を検証
//! 4. 未インストールなら install、インストール済みなら更新として続行
//! 5. META:S:DESC を設定（無ければ致命的）
//! 6. 任意フィールドを設定（無ければスキップ、壊れていれば警告してスキップ）
//! 7. 属性情報があればインデックスを同期（ベストエフォート）
//! 8. アイコンを設定（空ならスキップ）
//!
//! レジストリのフィールド更新はインストール済みの識別子にしか効かないため、
//! install は識別子の検証直後、他のフィールドを読む前に行う。

use crate::error::{MimeError, Result};
use crate::index::{sync_indexes, IndexOutcome, IndexService};
use crate::mime_type::MimeType;
use crate::record::AttributeDescriptor;
use crate::registry::{FieldUpdate, MimeRegistry};
use crate::resource::{
    AttrInfoMessage, ExtensionsMessage, MetaField, ResourceArchive, ResourceSource,
};
use crate::sniffer;
use std::path::Path;

/// インポート先
pub struct ImportContext<'a> {
    pub registry: &'a dyn MimeRegistry,
    pub index: &'a dyn IndexService,
    /// 属性インデックスを作成するボリューム
    pub volume: &'a str,
}

/// レコードの登録状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// 新規にインストールした
    Installed,
    /// 既存レコードを更新した
    Updated,
}

/// インポート結果
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub mime_type: MimeType,
    pub disposition: Disposition,
    /// 設定したフィールド（設定順）
    pub fields: Vec<MetaField>,
    pub index_outcomes: Vec<IndexOutcome>,
    pub warnings: Vec<String>,
}

impl ImportReport {
    fn new(mime_type: MimeType, disposition: Disposition) -> Self {
        Self {
            mime_type,
            disposition,
            fields: Vec::new(),
            index_outcomes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// インデックス同期の警告件数
    pub fn index_warning_count(&self) -> usize {
        self.index_outcomes.iter().filter(|o| o.is_warning()).count()
    }
}

/// ファイルからインポート
///
/// リソースアーカイブはこの関数の中だけで開かれ、戻る時に必ず閉じられる。
pub fn import_from_path(path: &Path, ctx: &ImportContext) -> Result<ImportReport> {
    let mut archive = ResourceArchive::open(path)?;
    import_resources(&mut archive, &path.display().to_string(), ctx)
}

/// リソースソースからインポート
///
/// `origin` はエラーメッセージに使うリソースの表示名。
pub fn import_resources<S: ResourceSource>(
    source: &mut S,
    origin: &str,
    ctx: &ImportContext,
) -> Result<ImportReport> {
    let mime = read_identifier(source, origin)?;

    let disposition = if ctx.registry.is_installed(&mime)? {
        tracing::info!(mime = %mime, "already installed, updating");
        Disposition::Updated
    } else {
        ctx.registry.install(&mime)?;
        Disposition::Installed
    };
    let mut report = ImportReport::new(mime, disposition);

    // 短い説明は必須
    let short = source
        .load_string(MetaField::ShortDescription)?
        .ok_or_else(|| MimeError::MissingField {
            field: MetaField::ShortDescription.name(),
            path: origin.to_string(),
        })?;
    apply(ctx, &mut report, MetaField::ShortDescription, FieldUpdate::ShortDescription(short))?;

    let mut attributes = None;
    for field in OPTIONAL_FIELDS {
        if let Some(attrs) = import_optional(source, ctx, &mut report, field)? {
            attributes = Some(attrs);
        }
    }

    if let Some(attrs) = attributes {
        report.index_outcomes = sync_indexes(ctx.index, ctx.volume, &attrs);
    }

    import_optional(source, ctx, &mut report, MetaField::Icon)?;

    Ok(report)
}

/// アイコンより前に設定する任意フィールド（設定順）
const OPTIONAL_FIELDS: [MetaField; 5] = [
    MetaField::LongDescription,
    MetaField::PreferredApp,
    MetaField::SnifferRule,
    MetaField::Extensions,
    MetaField::AttrInfo,
];

/// 任意フィールドを 1 件読み出して設定する
///
/// 設定したのが属性情報ならその内容を返す。
fn import_optional<S: ResourceSource>(
    source: &mut S,
    ctx: &ImportContext,
    report: &mut ImportReport,
    field: MetaField,
) -> Result<Option<Vec<AttributeDescriptor>>> {
    let update = match read_optional(source, field) {
        Ok(Some(update)) => update,
        Ok(None) => return Ok(None),
        Err(MimeError::MalformedField { field, reason }) => {
            tracing::debug!(field, %reason, "skipping malformed resource");
            report
                .warnings
                .push(format!("skipped malformed {}: {}", field, reason));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let attributes = match &update {
        FieldUpdate::AttrInfo(attrs) => Some(attrs.clone()),
        _ => None,
    };
    apply(ctx, report, field, update)?;
    Ok(attributes)
}

/// 識別子を読み出して検証する
fn read_identifier<S: ResourceSource>(source: &mut S, origin: &str) -> Result<MimeType> {
    let raw = source
        .load_string(MetaField::Type)?
        .ok_or_else(|| MimeError::MissingField {
            field: MetaField::Type.name(),
            path: origin.to_string(),
        })?;
    MimeType::parse(raw.trim())
}

/// 任意フィールドを読み出して更新内容に変換する
///
/// 存在しなければ Ok(None)。空のアイコンも未設定として扱う。
fn read_optional<S: ResourceSource>(source: &mut S, field: MetaField) -> Result<Option<FieldUpdate>> {
    let update = match field {
        MetaField::LongDescription => source
            .load_string(field)?
            .map(FieldUpdate::LongDescription),
        MetaField::PreferredApp => source.load_string(field)?.map(FieldUpdate::PreferredApp),
        MetaField::SnifferRule => match source.load_string(field)? {
            Some(rule) => {
                sniffer::validate_rule(&rule).map_err(|reason| MimeError::MalformedField {
                    field: field.name(),
                    reason,
                })?;
                Some(FieldUpdate::SnifferRule(rule))
            }
            None => None,
        },
        MetaField::Extensions => source
            .load_message::<ExtensionsMessage>(field)?
            .map(|msg| FieldUpdate::Extensions(msg.extensions)),
        MetaField::AttrInfo => source
            .load_message::<AttrInfoMessage>(field)?
            .map(|msg| FieldUpdate::AttrInfo(msg.attributes)),
        MetaField::Icon => source
            .load_field(field)?
            .filter(|bytes| !bytes.is_empty())
            .map(FieldUpdate::Icon),
        MetaField::Type | MetaField::ShortDescription => None,
    };
    Ok(update)
}

fn apply(
    ctx: &ImportContext,
    report: &mut ImportReport,
    field: MetaField,
    update: FieldUpdate,
) -> Result<()> {
    ctx.registry.set(&report.mime_type, update)?;
    report.fields.push(field);
    Ok(())
}

#[cfg(test)]
#[path = "type_import_test.rs"]
mod tests;

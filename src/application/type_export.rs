//! MIME タイプのエクスポート
//!
//! インストール済みレコードをインポートと同じレイアウトのリソースとして書き出す。
//! 書き出したファイルを空のデータベースにインポートすると同じレコードが再現される。

use crate::error::Result;
use crate::mime_type::MimeType;
use crate::registry::MimeRegistry;
use crate::resource::{AttrInfoMessage, ExtensionsMessage, MetaField, ResourceArchiveWriter};
use std::io::{Seek, Write};

/// レコードをリソースとして書き出す
///
/// 書き出したフィールドを返す。未設定のフィールドは書き出さない。
pub fn export_type<W: Write + Seek>(
    registry: &dyn MimeRegistry,
    mime: &MimeType,
    writer: &mut ResourceArchiveWriter<W>,
) -> Result<Vec<MetaField>> {
    let record = registry.get(mime)?;
    let mut written = Vec::new();

    let mut put = |field: MetaField, data: &[u8]| -> Result<()> {
        writer.add(field.type_code(), field.name(), data)?;
        written.push(field);
        Ok(())
    };

    put(MetaField::Type, record.mime_type.as_str().as_bytes())?;

    if let Some(desc) = &record.short_description {
        put(MetaField::ShortDescription, desc.as_bytes())?;
    }
    if let Some(desc) = &record.long_description {
        put(MetaField::LongDescription, desc.as_bytes())?;
    }
    if let Some(app) = &record.preferred_app {
        put(MetaField::PreferredApp, app.as_bytes())?;
    }
    if let Some(rule) = &record.sniffer_rule {
        put(MetaField::SnifferRule, rule.as_bytes())?;
    }
    if let Some(extensions) = record.extensions {
        let msg = serde_json::to_vec(&ExtensionsMessage { extensions })?;
        put(MetaField::Extensions, &msg)?;
    }
    if let Some(attributes) = record.attr_info {
        let msg = serde_json::to_vec(&AttrInfoMessage { attributes })?;
        put(MetaField::AttrInfo, &msg)?;
    }
    if let Some(icon) = &record.icon {
        put(MetaField::Icon, icon)?;
    }

    tracing::debug!(mime = %mime, fields = written.len(), "exported record");
    Ok(written)
}

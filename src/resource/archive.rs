//! リソースアーカイブ
//!
//! 各リソースを `<TYPE>/<NAME>` という名前の zip エントリとして格納する。
//! 例: `MSDC/META:S:DESC`

use super::{entry_name, ResourceSource, TypeCode};
use crate::error::{MimeError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// リソース 1 件あたりの最大サイズ
const MAX_RESOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// 読み取り専用のリソースアーカイブ
///
/// ファイルハンドルは値のドロップ時に解放される。
pub struct ResourceArchive<R: Read + Seek = BufReader<File>> {
    path: PathBuf,
    archive: ZipArchive<R>,
}

impl ResourceArchive {
    /// パスからアーカイブを開く
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| MimeError::InvalidResource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(path, BufReader::new(file))
    }
}

impl<R: Read + Seek> ResourceArchive<R> {
    /// 任意のリーダーから開く
    pub fn from_reader(path: &Path, reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| MimeError::InvalidResource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }
}

impl<R: Read + Seek> ResourceSource for ResourceArchive<R> {
    fn load(&mut self, type_code: TypeCode, name: &str) -> Result<Option<Vec<u8>>> {
        let entry = entry_name(type_code, name);
        let mut file = match self.archive.by_name(&entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // ヘッダーの宣言サイズは信用せず、上限を超えた時点で打ち切る
        let mut buf = Vec::new();
        file.by_ref()
            .take(MAX_RESOURCE_SIZE + 1)
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > MAX_RESOURCE_SIZE {
            return Err(MimeError::InvalidResource {
                path: self.path.display().to_string(),
                reason: format!("{} exceeds {} bytes", entry, MAX_RESOURCE_SIZE),
            });
        }
        tracing::trace!(entry = %entry, size = buf.len(), "loaded resource");
        Ok(Some(buf))
    }
}

/// リソースアーカイブの書き出し
pub struct ResourceArchiveWriter<W: Write + Seek = File> {
    zip: ZipWriter<W>,
}

#[cfg(test)]
impl ResourceArchiveWriter {
    /// ファイルを作成して書き出しを開始（既存ファイルは上書き）
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write + Seek> ResourceArchiveWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// リソースを 1 件追加
    pub fn add(&mut self, type_code: TypeCode, name: &str, data: &[u8]) -> Result<()> {
        self.zip
            .start_file(entry_name(type_code, name), SimpleFileOptions::default())?;
        self.zip.write_all(data)?;
        Ok(())
    }

    /// 書き出しを完了して内部のライターを返す
    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

#[cfg(test)]
#[path = "archive_test.rs"]
mod tests;

//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
}

struct MockFile {
    content: Vec<u8>,
    file_type: FsFileType,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: content.as_bytes().to_vec(),
                file_type: FsFileType::File,
            },
        );
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: Vec::new(),
                file_type: FsFileType::Dir,
            },
        );
    }

    /// 登録済みファイルの内容を文字列で取得
    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .filter(|f| f.file_type == FsFileType::File)
            .map(|f| String::from_utf8_lossy(&f.content).to_string())
    }

    /// ファイルを登録（親ディレクトリも作成）
    fn insert_file(&self, path: &Path, content: &[u8]) {
        let mut files = self.files.write().unwrap();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            let key = dir.to_string_lossy().to_string();
            if key.is_empty() {
                break;
            }
            files.entry(key).or_insert(MockFile {
                content: Vec::new(),
                file_type: FsFileType::Dir,
            });
            parent = dir.parent();
        }
        files.insert(
            path.to_string_lossy().to_string(),
            MockFile {
                content: content.to_vec(),
                file_type: FsFileType::File,
            },
        );
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .filter(|f| f.file_type == FsFileType::File)
            .map(|f| f.content.clone())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.insert_file(path, content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy().to_string();
        let mut files = self.files.write().unwrap();

        if let Some(file) = files.get(&path_str) {
            if file.file_type == FsFileType::Dir {
                return Err(crate::error::MimeError::Io(std::io::Error::new(
                    std::io::ErrorKind::IsADirectory,
                    "Cannot remove directory with remove_file",
                )));
            }
        }

        files.remove(&path_str);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .map(|f| f.file_type == FsFileType::Dir)
            .unwrap_or(false)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let path_str = path.to_string_lossy().to_string();
        let files = self.files.read().unwrap();

        match files.get(&path_str) {
            Some(file) if file.file_type != FsFileType::Dir => {
                return Err(crate::error::MimeError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "Not a directory",
                )));
            }
            None => {
                return Err(crate::error::MimeError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not found",
                )));
            }
            Some(_) => {}
        }

        let prefix = if path_str.ends_with('/') {
            path_str.clone()
        } else {
            format!("{}/", path_str)
        };

        let entries: Vec<_> = files
            .iter()
            .filter(|(k, _)| {
                if !k.starts_with(&prefix) {
                    return false;
                }
                // 直接の子のみ（サブディレクトリの中身は除外）
                let remainder = &k[prefix.len()..];
                !remainder.is_empty() && !remainder.contains('/')
            })
            .map(|(k, v)| FsDirEntry {
                path: PathBuf::from(k),
                file_type: v.file_type,
            })
            .collect();

        Ok(entries)
    }
}

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 設定ディレクトリ（未指定なら `~/.mime`）
    pub const HOME: &'static str = "MIME_HOME";
    /// MIME データベースのディレクトリ
    pub const DB_DIR: &'static str = "MIME_DB_DIR";
    /// インデックスストアのディレクトリ
    pub const INDEX_DIR: &'static str = "MIME_INDEX_DIR";
    /// 属性インデックスを作成するボリューム
    pub const VOLUME: &'static str = "MIME_VOLUME";

    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;

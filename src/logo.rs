//! Logo Module
//!
//! ロゴ画像をbase64のデータURIとしてページに埋め込むためのモジュール。
//! ロゴが読めない場合はエラーにせず、ロゴなしでページを生成します。

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 埋め込み用のロゴ画像（PNG）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogoImage {
    bytes: Vec<u8>,
}

impl LogoImage {
    /// ファイルからロゴを読み込む
    ///
    /// ファイルが存在しない、読めない、またはサイズ上限を超える場合は警告を出して`None`を返します。
    ///
    /// # 引数
    ///
    /// * `path` - ロゴ画像のパス
    /// * `max_size` - 許容する最大サイズ（バイト）
    pub fn load(path: &Path, max_size: u64) -> Option<Self> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => {
                tracing::warn!("Logo not found: {}", path.display());
                return None;
            }
        };

        if metadata.len() > max_size {
            tracing::warn!(
                "Logo {} is too large: {} bytes (max: {} bytes), skipping",
                path.display(),
                metadata.len(),
                max_size
            );
            return None;
        }

        match fs::read(path) {
            Ok(bytes) => Some(Self { bytes }),
            Err(e) => {
                tracing::warn!("Failed to read logo {}: {}", path.display(), e);
                None
            }
        }
    }

    /// バイト列からロゴを生成
    #[cfg(test)]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// `data:image/png;base64,...`形式のデータURI
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_data_uri() {
        let logo = LogoImage::from_bytes(b"PNG".to_vec());
        assert_eq!(logo.data_uri(), "data:image/png;base64,UE5H");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        assert!(LogoImage::load(&path, 1024).is_none());
    }

    #[test]
    fn test_load_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let bytes: Vec<u8> = (0u8..=255).collect();
        file.write_all(&bytes).unwrap();

        let logo = LogoImage::load(file.path(), 1024).unwrap();
        let uri = logo.data_uri();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();

        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        assert!(LogoImage::load(file.path(), 16).is_none());
    }
}

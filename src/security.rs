//! Security Module
//!
//! 入力ファイルをメモリに読み込む際のサイズ制限を定義するモジュール。

/// セキュリティ設定
///
/// ファイル処理時のサイズ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// ワークブックの最大サイズ（バイト）
    /// デフォルト: 256MB (268_435_456 bytes)
    pub max_input_file_size: u64,
    /// ロゴ画像の最大サイズ（バイト）
    /// デフォルト: 10MB (10_485_760 bytes)
    pub max_logo_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 268_435_456, // 256MB
            max_logo_size: 10_485_760,        // 10MB
        }
    }
}

/// 入力サイズの検証
///
/// # 引数
///
/// * `bytes_read` - 読み込んだバイト数
/// * `limit` - 上限（バイト）
///
/// # 戻り値
///
/// * `Ok(())` - 上限以内の場合
/// * `Err(String)` - 上限を超えた場合（エラーメッセージ）
pub(crate) fn check_input_size(bytes_read: u64, limit: u64) -> Result<(), String> {
    if bytes_read > limit {
        return Err(format!(
            "Input file size exceeds maximum: {} bytes (max: {} bytes)",
            bytes_read, limit
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = SecurityConfig::default();
        assert_eq!(config.max_input_file_size, 268_435_456);
        assert_eq!(config.max_logo_size, 10_485_760);
    }

    #[test]
    fn test_check_input_size() {
        assert!(check_input_size(0, 10).is_ok());
        assert!(check_input_size(10, 10).is_ok());

        let err = check_input_size(11, 10).unwrap_err();
        assert!(err.contains("exceeds maximum"));
        assert!(err.contains("11 bytes"));
    }
}

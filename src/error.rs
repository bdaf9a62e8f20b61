//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxmenuクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの解析、HTMLページの書き出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ワークブックが存在しない、出力ファイルに書き込めないなど）
/// - `Parse`: ワークブックの解析中に発生したエラー（calamine由来）
/// - `Config`: 設定の検証に失敗したエラー（空の店舗名など）
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
///
/// ロゴ画像の読み込み失敗はエラーになりません（ロゴなしでページを生成します）。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmenu::MenuError;
/// use std::fs::File;
///
/// fn open_workbook(path: &str) -> Result<File, MenuError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum MenuError {
    /// I/O操作中に発生したエラー
    ///
    /// ワークブックの読み込み失敗、HTMLファイルの書き込み失敗など、
    /// `std::io::Error`が発生した場合に使用されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// calamineがファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、読めないシートなどが原因となります。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `MenuBuilder::build()`時に設定を検証し、無効な設定が検出された場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsxmenu::{MenuBuilder, MenuError};
    ///
    /// let result = MenuBuilder::new().with_venue_name("   ").build();
    ///
    /// match result {
    ///     Err(MenuError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// 入力サイズ制限に違反したエラー
    ///
    /// ワークブック全体をメモリに読み込むため、上限を超える入力は拒否されます。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

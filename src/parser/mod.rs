//! Parser Module
//!
//! calamineを使用したワークブック解析の実装。
//! シートごとにヘッダーとデータ行を読み込み、`Menu`列による表示フィルタを適用します。

mod workbook;

pub(crate) use workbook::WorkbookParser;

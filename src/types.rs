//! Types Module
//!
//! ローダーとレンダラーの間で受け渡す共通データ型を定義するモジュール。

use std::fmt;

use indexmap::IndexMap;

/// 表示対象の行を絞り込む列の名前（大文字小文字を区別する完全一致）
pub const MENU_COLUMN: &str = "Menu";

/// シート名からフィルタ済みテーブルへの写像
///
/// ワークブック内のシート順を保持します。
pub type SheetTables = IndexMap<String, SheetTable>;

/// 空のヘッダーセルに付けるラベルの接頭辞（後ろに列番号が続く）
pub(crate) const UNNAMED_PREFIX: &str = "Unnamed: ";

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    ///
    /// 空白のみの文字列も空として扱います。
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 表示用の文字列を取得
    ///
    /// 空セル、空白のみの文字列、エラー値は`None`になります。
    /// 整数値の数値は小数点なしで表示されます（`2.0` → `"2"`）。
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::String(s) if !s.trim().is_empty() => Some(s.clone()),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            _ => None,
        }
    }

    /// `Menu`列の値として表示対象を示すか
    ///
    /// 数値の1と、1と等しい真偽値TRUEが一致します。文字列の`"1"`は一致しません。
    pub fn is_menu_visible(&self) -> bool {
        match self {
            CellValue::Number(n) => *n == 1.0,
            CellValue::Bool(b) => *b,
            _ => false,
        }
    }
}

/// 列ラベル
///
/// 数値ラベルはサイズ（例: リットル）を表し、その列はサイズ別価格列になります。
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnLabel {
    /// テキストラベル
    Text(String),

    /// 数値ラベル
    Numeric(f64),
}

impl ColumnLabel {
    /// 数値ラベルかどうか
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnLabel::Numeric(_))
    }

    /// 数値ラベルの値
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            ColumnLabel::Numeric(n) => Some(*n),
            ColumnLabel::Text(_) => None,
        }
    }

    /// 空のヘッダーセルから生成されたラベルかどうか
    pub fn is_unnamed(&self) -> bool {
        matches!(self, ColumnLabel::Text(s) if s.starts_with(UNNAMED_PREFIX))
    }

    /// テキストラベルが`name`と完全一致するか
    pub fn is_text(&self, name: &str) -> bool {
        matches!(self, ColumnLabel::Text(s) if s == name)
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnLabel::Text(s) => write!(f, "{}", s),
            ColumnLabel::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// 1シート分のテーブル（ヘッダー行 + データ行）
///
/// calamineの内部ストレージとは独立した所有データです。
/// すべての行は列数と同じ長さに揃えられます。
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    columns: Vec<ColumnLabel>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// 新しいテーブルを生成
    ///
    /// 列数より短い行は`CellValue::Empty`で埋め、長い行は切り詰めます。
    pub fn new(columns: Vec<ColumnLabel>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// 列ラベルのリスト
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    /// データ行のリスト
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// データ行の数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// データ行がないかどうか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// テキストラベルが完全一致する列のインデックス
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|label| label.is_text(name))
    }

    /// `Menu`列を持つかどうか
    pub fn has_menu_column(&self) -> bool {
        self.column_index(MENU_COLUMN).is_some()
    }

    /// 表示フィルタを適用
    ///
    /// `Menu`列がある場合、その値が数値の1である行だけを残し、`Menu`列自体を取り除きます。
    /// 文字列の`"1"`、論理値、空セルは一致しません。
    /// `Menu`列がない場合はテーブルをそのまま返します。
    pub fn apply_menu_filter(self) -> Self {
        let Some(menu_idx) = self.column_index(MENU_COLUMN) else {
            return self;
        };

        let mut columns = self.columns;
        columns.remove(menu_idx);

        let rows = self
            .rows
            .into_iter()
            .filter(|row| row[menu_idx].is_menu_visible())
            .map(|mut row| {
                row.remove(menu_idx);
                row
            })
            .collect();

        Self { columns, rows }
    }
}

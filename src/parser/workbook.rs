//! Workbook Parser
//!
//! calamineを使用したワークブック読み込みと、シートごとのフィルタ済みテーブルの構築。

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read};

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::MenuError;
use crate::security::{check_input_size, SecurityConfig};
use crate::types::{CellValue, ColumnLabel, SheetTable, SheetTables, UNNAMED_PREFIX};

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// xlsx / xlsm / xlsb / xls / ods の各形式を自動判別します。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（メモリ上のバッファから開いたもの）
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// 入力全体をメモリに読み込んでから解析します。読み込み後はリーダーを保持しません。
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックを読み込むためのリーダー
    /// * `security` - 入力サイズ制限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(MenuError::Io)` - 読み込みに失敗した場合
    /// * `Err(MenuError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(MenuError::Parse)` - ワークブックとして解析できない場合
    pub fn open<R: Read>(reader: R, security: &SecurityConfig) -> Result<Self, MenuError> {
        let limit = security.max_input_file_size;

        // 上限+1バイトまで読めば超過を検出できる
        let mut buffer = Vec::new();
        let bytes_read = reader
            .take(limit.saturating_add(1))
            .read_to_end(&mut buffer)?;
        check_input_size(bytes_read as u64, limit).map_err(MenuError::SecurityViolation)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;

        Ok(Self { workbook })
    }

    /// すべてのシート名をワークブック内の順序で取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シートをテーブルとして読み込む
    ///
    /// 先頭行をヘッダーとして扱い、残りの行をデータ行とします。
    /// すべてのセルが空のデータ行は取り除かれます。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetTable)` - 読み込んだテーブル（フィルタ適用前）
    /// * `Err(MenuError::Parse)` - シートの読み込みに失敗した場合
    pub fn read_table(&mut self, sheet_name: &str) -> Result<SheetTable, MenuError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(build_table(&range))
    }

    /// すべてのシートを読み込み、表示フィルタを適用する
    ///
    /// データ行がないシートと、フィルタ後に行が残らないシートは結果から除外されます。
    /// 1つでも読み込みに失敗したシートがあれば、全体がエラーになります。
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetTables)` - シート名からフィルタ済みテーブルへの写像（シート順）
    /// * `Err(MenuError)` - 読み込みエラー
    pub fn load_sheets(&mut self) -> Result<SheetTables, MenuError> {
        let sheet_names = self.sheet_names();
        tracing::info!("Sheets found: {:?}", sheet_names);

        let mut tables = SheetTables::new();
        for sheet_name in sheet_names {
            let table = self.read_table(&sheet_name)?;
            if table.is_empty() {
                tracing::info!("Sheet '{}' has no data rows, skipping", sheet_name);
                continue;
            }

            let columns: Vec<String> = table.columns().iter().map(|c| c.to_string()).collect();
            tracing::debug!("Sheet '{}' columns: {:?}", sheet_name, columns);

            let total_rows = table.row_count();
            let has_menu_column = table.has_menu_column();
            let filtered = table.apply_menu_filter();

            if has_menu_column {
                tracing::info!(
                    "Sheet '{}': {} rows, {} with Menu=1",
                    sheet_name,
                    total_rows,
                    filtered.row_count()
                );
            } else {
                tracing::info!("Sheet '{}': {} rows", sheet_name, total_rows);
            }

            if filtered.is_empty() {
                tracing::info!("No rows with Menu=1 in sheet '{}', skipping", sheet_name);
                continue;
            }

            tables.insert(sheet_name, filtered);
        }

        Ok(tables)
    }
}

/// calamineのセル範囲からテーブルを構築
fn build_table(range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return SheetTable::new(Vec::new(), Vec::new());
    };

    let columns = deduplicate_labels(
        header
            .iter()
            .enumerate()
            .map(|(index, cell)| header_label(index, cell))
            .collect(),
    );

    let data_rows = rows
        .map(|row| row.iter().map(convert_cell).collect::<Vec<_>>())
        .filter(|row| !row.iter().all(CellValue::is_empty))
        .collect();

    SheetTable::new(columns, data_rows)
}

/// calamineのセルデータを`CellValue`に変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        #[allow(unreachable_patterns)]
        _ => CellValue::Empty,
    }
}

/// ヘッダーセルから列ラベルを生成
///
/// 数値のヘッダーは数値ラベル、空のヘッダーは`Unnamed: {index}`になります。
fn header_label(index: usize, cell: &Data) -> ColumnLabel {
    match cell {
        Data::Int(i) => ColumnLabel::Numeric(*i as f64),
        Data::Float(f) => ColumnLabel::Numeric(*f),
        other => match convert_cell(other).as_text() {
            Some(text) => ColumnLabel::Text(text),
            None => ColumnLabel::Text(format!("{}{}", UNNAMED_PREFIX, index)),
        },
    }
}

/// 重複した列ラベルを一意にする
///
/// 2回目以降の出現には`.1`, `.2`, ... を付けたテキストラベルを割り当てます。
fn deduplicate_labels(labels: Vec<ColumnLabel>) -> Vec<ColumnLabel> {
    let mut used: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(labels.len());

    for label in labels {
        let key = label.to_string();
        if used.insert(key.clone()) {
            result.push(label);
            continue;
        }

        let counter = counters.entry(key.clone()).or_insert(0);
        let candidate = loop {
            *counter += 1;
            let candidate = format!("{}.{}", key, counter);
            if !used.contains(&candidate) {
                break candidate;
            }
        };
        used.insert(candidate.clone());
        result.push(ColumnLabel::Text(candidate));
    }

    result
}

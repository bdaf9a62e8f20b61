//! Menu Section Module
//!
//! フィルタ済みテーブルと列の役割から、描画単位となるセクションと品目を構築するモジュール。
//! テーブルは読み取るだけで変更しません。

use crate::api::MultiPriceLayout;
use crate::columns::{ColumnRole, ColumnRoles};
use crate::output::SectionLayout;
use crate::types::{CellValue, SheetTable};

/// シート名からセクションの識別子（URLフラグメント）を生成
///
/// 小文字化し、空白をアンダースコアに置き換えます。
/// ナビゲーションのリンク先とセクションの`id`属性の両方にこの値を使います。
///
/// # 使用例
///
/// ```rust
/// assert_eq!(xlsxmenu::section_id("Birre Spina"), "birre_spina");
/// ```
pub fn section_id(sheet_name: &str) -> String {
    sheet_name.to_lowercase().replace(' ', "_")
}

/// 1行分の品目
///
/// 各フィールドは値がない場合`None`です。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MenuItem {
    pub name: Option<String>,
    pub price: Option<CellValue>,
    pub description: Option<String>,
    pub producer: Option<String>,
    pub kind: Option<String>,
    pub characteristic: Option<String>,
    /// サイズ別価格（`MenuSection::sizes`と同じ昇順）
    pub sized_prices: Vec<Option<CellValue>>,
}

impl MenuItem {
    /// テーブルの1行から品目を構築
    fn from_row(row: &[CellValue], roles: &ColumnRoles, size_columns: &[(f64, usize)]) -> Self {
        let text = |role: ColumnRole| roles.column_for(role).and_then(|idx| row[idx].as_text());
        let price_value =
            |idx: usize| Some(&row[idx]).filter(|v| v.as_text().is_some()).cloned();

        Self {
            name: text(ColumnRole::Name),
            price: roles.column_for(ColumnRole::Price).and_then(price_value),
            description: text(ColumnRole::Description),
            producer: text(ColumnRole::Producer),
            kind: text(ColumnRole::Type),
            characteristic: text(ColumnRole::Characteristic),
            sized_prices: size_columns.iter().map(|&(_, idx)| price_value(idx)).collect(),
        }
    }
}

/// 1シート分のセクション
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MenuSection {
    /// 見出し（シート名）
    pub title: String,

    /// セクション識別子（`section_id`）
    pub id: String,

    /// 描画レイアウト
    pub layout: SectionLayout,

    /// サイズ別価格列のサイズ（昇順）
    pub sizes: Vec<f64>,

    /// 品目（行の順序）
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    /// テーブルからセクションを構築
    ///
    /// # 引数
    ///
    /// * `sheet_name` - シート名
    /// * `table` - フィルタ済みテーブル
    /// * `multi_price_layout` - サイズ別価格列がある場合に使うレイアウト
    pub fn build(sheet_name: &str, table: &SheetTable, multi_price_layout: MultiPriceLayout) -> Self {
        let roles = ColumnRoles::resolve(table.columns());

        let mut size_columns: Vec<(f64, usize)> = roles
            .size_columns()
            .iter()
            .filter_map(|&idx| table.columns()[idx].numeric_value().map(|size| (size, idx)))
            .collect();
        size_columns.sort_by(|a, b| a.0.total_cmp(&b.0));

        let layout = SectionLayout::select(roles.has_size_columns(), multi_price_layout);

        let items = table
            .rows()
            .iter()
            .map(|row| MenuItem::from_row(row, &roles, &size_columns))
            .collect();

        Self {
            title: sheet_name.to_string(),
            id: section_id(sheet_name),
            layout,
            sizes: size_columns.iter().map(|&(size, _)| size).collect(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnLabel;

    fn text(s: &str) -> ColumnLabel {
        ColumnLabel::Text(s.to_string())
    }

    fn string(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn test_section_id() {
        assert_eq!(section_id("Antipasti"), "antipasti");
        assert_eq!(section_id("Birre Spina"), "birre_spina");
        assert_eq!(section_id("Gin Tonic  Speciali"), "gin_tonic__speciali");
    }

    #[test]
    fn test_build_single_price_section() {
        let table = SheetTable::new(
            vec![text("Piatto"), text("Prezzo"), text("Descrizione")],
            vec![
                vec![string("Bruschetta"), CellValue::Number(6.0), string("Pomodoro e basilico")],
                vec![string("Tagliere"), CellValue::Empty, CellValue::Empty],
            ],
        );

        let section = MenuSection::build("Antipasti", &table, MultiPriceLayout::Inline);

        assert_eq!(section.id, "antipasti");
        assert_eq!(section.layout, SectionLayout::SinglePrice);
        assert!(section.sizes.is_empty());
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[0].name.as_deref(), Some("Bruschetta"));
        assert_eq!(section.items[0].price, Some(CellValue::Number(6.0)));
        assert_eq!(section.items[0].description.as_deref(), Some("Pomodoro e basilico"));
        assert_eq!(section.items[1].price, None);
        assert_eq!(section.items[1].description, None);
    }

    #[test]
    fn test_build_multi_price_section_sorts_sizes() {
        let table = SheetTable::new(
            vec![
                text("Nome"),
                text("Birrificio"),
                ColumnLabel::Numeric(0.5),
                ColumnLabel::Numeric(0.3),
            ],
            vec![vec![
                string("Pils"),
                string("Birrificio Nord"),
                CellValue::Number(6.0),
                CellValue::Empty,
            ]],
        );

        let section = MenuSection::build("Birre Spina", &table, MultiPriceLayout::Grid);

        assert_eq!(section.layout, SectionLayout::PriceGrid);
        assert_eq!(section.sizes, vec![0.3, 0.5]);
        assert_eq!(
            section.items[0].sized_prices,
            vec![None, Some(CellValue::Number(6.0))]
        );
        assert_eq!(section.items[0].producer.as_deref(), Some("Birrificio Nord"));
    }

    #[test]
    fn test_build_does_not_modify_table() {
        let table = SheetTable::new(
            vec![text("Nome"), text("Tipo"), text("Caratteristica")],
            vec![vec![string("Hendrick's"), string("London Dry"), string("Cetriolo")]],
        );
        let before = table.clone();

        let section = MenuSection::build("Gin", &table, MultiPriceLayout::Inline);

        assert_eq!(table, before);
        assert_eq!(section.items[0].kind.as_deref(), Some("London Dry"));
        assert_eq!(section.items[0].characteristic.as_deref(), Some("Cetriolo"));
    }
}

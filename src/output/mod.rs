//! Output Layout Module
//!
//! Strategy Patternによるセクションレイアウトの抽象化を提供するモジュール。

mod formatters;

use std::io::Write;

use crate::api::MultiPriceLayout;
use crate::error::MenuError;
use crate::formatter::FieldFormatter;
use crate::section::MenuSection;

pub(crate) use formatters::*;

/// セクションレイアウト（Strategy Pattern）
///
/// 各レイアウト（価格表グリッド、インライン複数価格、単一価格）をenumとして表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionLayout {
    /// サイズ列ごとの価格表
    PriceGrid,

    /// 品目ブロック内にサイズ別価格を並べる
    InlinePrices,

    /// 品目ブロックに1つの価格
    SinglePrice,
}

impl SectionLayout {
    /// シートの列構成と設定からレイアウトを選択
    ///
    /// # 引数
    ///
    /// * `has_size_columns` - 数値ラベルの列（サイズ別価格列）があるか
    /// * `multi_price_layout` - サイズ別価格列がある場合に使うレイアウト（シートごとの設定）
    pub fn select(has_size_columns: bool, multi_price_layout: MultiPriceLayout) -> Self {
        if !has_size_columns {
            return SectionLayout::SinglePrice;
        }
        match multi_price_layout {
            MultiPriceLayout::Grid => SectionLayout::PriceGrid,
            MultiPriceLayout::Inline => SectionLayout::InlinePrices,
        }
    }

    /// セクションの品目をこのレイアウトで出力する
    ///
    /// # 引数
    ///
    /// * `section` - 出力するセクション
    /// * `formatter` - フィールドフォーマッター
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(MenuError)` - エラーが発生した場合
    pub fn render<W: Write>(
        &self,
        section: &MenuSection,
        formatter: &FieldFormatter,
        writer: &mut W,
    ) -> Result<(), MenuError> {
        match self {
            SectionLayout::PriceGrid => PriceGridFormatter.render(section, formatter, writer),
            SectionLayout::InlinePrices => InlinePriceFormatter.render(section, formatter, writer),
            SectionLayout::SinglePrice => SinglePriceFormatter.render(section, formatter, writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_layout() {
        assert_eq!(
            SectionLayout::select(false, MultiPriceLayout::Grid),
            SectionLayout::SinglePrice
        );
        assert_eq!(
            SectionLayout::select(false, MultiPriceLayout::Inline),
            SectionLayout::SinglePrice
        );
        assert_eq!(
            SectionLayout::select(true, MultiPriceLayout::Grid),
            SectionLayout::PriceGrid
        );
        assert_eq!(
            SectionLayout::select(true, MultiPriceLayout::Inline),
            SectionLayout::InlinePrices
        );
    }
}

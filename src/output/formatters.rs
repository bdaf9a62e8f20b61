//! Section Layout Formatters Implementation
//!
//! 各セクションレイアウトの実装を提供するモジュール。

use std::io::Write;

use crate::error::MenuError;
use crate::formatter::{FieldFormatter, MISSING_SIZE_PRICE};
use crate::section::{MenuItem, MenuSection};

/// 価格表グリッドのフォーマッター
///
/// サイズ列は降順に並べます。
pub(crate) struct PriceGridFormatter;

impl PriceGridFormatter {
    pub fn render<W: Write>(
        &self,
        section: &MenuSection,
        formatter: &FieldFormatter,
        writer: &mut W,
    ) -> Result<(), MenuError> {
        writeln!(writer, "<div class=\"price-table\">")?;

        // ヘッダー行（先頭は品目名の列なので空セル）
        writeln!(writer, "<div class=\"price-header\">")?;
        writeln!(writer, "<div class=\"price-row\">")?;
        writeln!(writer, "<div class=\"price-cell\"></div>")?;
        for size in section.sizes.iter().rev() {
            writeln!(
                writer,
                "<div class=\"price-cell\">{}</div>",
                formatter.size_label(*size)
            )?;
        }
        writeln!(writer, "</div>")?;
        writeln!(writer, "</div>")?;

        for item in &section.items {
            writeln!(writer, "<div class=\"price-row\">")?;

            let label = match formatter.producer(item) {
                Some(producer) => format!("{} - {}", formatter.name(item), producer),
                None => formatter.name(item),
            };
            writeln!(
                writer,
                "<div class=\"price-cell\" style=\"text-align: left; font-weight: bold;\">{}</div>",
                label
            )?;

            for value in item.sized_prices.iter().rev() {
                match value {
                    Some(value) => writeln!(
                        writer,
                        "<div class=\"price-cell\"><span class=\"price-value\">{}</span></div>",
                        formatter.price(value)
                    )?,
                    None => writeln!(writer, "<div class=\"price-cell\">{}</div>", MISSING_SIZE_PRICE)?,
                }
            }

            writeln!(writer, "</div>")?;

            if let Some(description) = formatter.description(item) {
                writeln!(
                    writer,
                    "<div class=\"item-description\" style=\"padding: 4px 0;\">{}</div>",
                    description
                )?;
            }
        }

        writeln!(writer, "</div>")?;
        Ok(())
    }
}

/// インライン複数価格のフォーマッター
pub(crate) struct InlinePriceFormatter;

impl InlinePriceFormatter {
    pub fn render<W: Write>(
        &self,
        section: &MenuSection,
        formatter: &FieldFormatter,
        writer: &mut W,
    ) -> Result<(), MenuError> {
        for item in &section.items {
            let prices = formatter.inline_prices(item, &section.sizes);
            write_item_block(writer, formatter, item, &prices)?;
        }
        Ok(())
    }
}

/// 単一価格のフォーマッター
pub(crate) struct SinglePriceFormatter;

impl SinglePriceFormatter {
    pub fn render<W: Write>(
        &self,
        section: &MenuSection,
        formatter: &FieldFormatter,
        writer: &mut W,
    ) -> Result<(), MenuError> {
        for item in &section.items {
            let price = formatter.single_price(item);
            write_item_block(writer, formatter, item, &price)?;
        }
        Ok(())
    }
}

/// 品目ブロック（品目名、価格、説明行）を出力
fn write_item_block<W: Write>(
    writer: &mut W,
    formatter: &FieldFormatter,
    item: &MenuItem,
    price: &str,
) -> Result<(), MenuError> {
    writeln!(writer, "<div class=\"menu-item\">")?;
    writeln!(writer, "<div class=\"item-header\">")?;

    match formatter.producer(item) {
        Some(producer) => writeln!(
            writer,
            "<div class=\"item-name\">{} - <span class=\"item-producer\">{}</span></div>",
            formatter.name(item),
            producer
        )?,
        None => writeln!(writer, "<div class=\"item-name\">{}</div>", formatter.name(item))?,
    }

    writeln!(writer, "<div class=\"item-price\">{}</div>", price)?;
    writeln!(writer, "</div>")?;

    if let Some(description) = formatter.description_line(item) {
        writeln!(writer, "<div class=\"item-description\">{}</div>", description)?;
    }

    writeln!(writer, "</div>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SectionLayout;
    use crate::types::CellValue;

    fn item(name: &str) -> MenuItem {
        MenuItem {
            name: Some(name.to_string()),
            price: None,
            description: None,
            producer: None,
            kind: None,
            characteristic: None,
            sized_prices: Vec::new(),
        }
    }

    fn section(layout: SectionLayout, sizes: Vec<f64>, items: Vec<MenuItem>) -> MenuSection {
        MenuSection {
            title: "Test".to_string(),
            id: "test".to_string(),
            layout,
            sizes,
            items,
        }
    }

    fn render(section: &MenuSection) -> String {
        let mut output = Vec::new();
        section
            .layout
            .render(section, &FieldFormatter::new(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_price_grid() {
        let pils = MenuItem {
            producer: Some("Birrificio Nord".to_string()),
            description: Some("Bionda, 4.8%".to_string()),
            sized_prices: vec![Some(CellValue::Number(4.0)), Some(CellValue::Number(6.0))],
            ..item("Pils")
        };
        let stout = MenuItem {
            sized_prices: vec![Some(CellValue::Number(4.5)), None],
            ..item("Stout")
        };
        let html = render(&section(SectionLayout::PriceGrid, vec![0.3, 0.5], vec![pils, stout]));

        // ヘッダーは降順
        let pos_05 = html.find(">0.5L<").unwrap();
        let pos_03 = html.find(">0.3L<").unwrap();
        assert!(pos_05 < pos_03);

        assert!(html.contains(">Pils - Birrificio Nord</div>"));
        assert!(html.contains(">Stout</div>"));
        assert!(html.contains("<span class=\"price-value\">€6.00</span>"));
        assert!(html.contains("<div class=\"price-cell\">-</div>"));
        assert!(html.contains(">Bionda, 4.8%</div>"));

        // 0.5Lの価格が0.3Lの価格より前
        let pils_05 = html.find("€6.00").unwrap();
        let pils_03 = html.find("€4.00").unwrap();
        assert!(pils_05 < pils_03);
    }

    #[test]
    fn test_inline_prices() {
        let ipa = MenuItem {
            producer: Some("Birrificio Sud".to_string()),
            kind: Some("IPA".to_string()),
            sized_prices: vec![Some(CellValue::Number(3.5)), Some(CellValue::Number(5.0))],
            ..item("Hoppy")
        };
        let html = render(&section(SectionLayout::InlinePrices, vec![0.33, 0.75], vec![ipa]));

        assert!(html.contains(
            "<div class=\"item-name\">Hoppy - <span class=\"item-producer\">Birrificio Sud</span></div>"
        ));
        assert!(html.contains("<div class=\"item-price\">0.33L: €3.50 0.75L: €5.00</div>"));
        assert!(html.contains("<div class=\"item-description\">IPA</div>"));
    }

    #[test]
    fn test_single_price() {
        let priced = MenuItem {
            price: Some(CellValue::Number(8.0)),
            description: Some("Con burrata".to_string()),
            ..item("Bruschetta")
        };
        let unpriced = item("Olive");
        let html = render(&section(SectionLayout::SinglePrice, vec![], vec![priced, unpriced]));

        assert_eq!(html.matches("<div class=\"menu-item\">").count(), 2);
        assert!(html.contains("<div class=\"item-name\">Bruschetta</div>"));
        assert!(html.contains("<div class=\"item-price\">€8.00</div>"));
        assert!(html.contains("<div class=\"item-description\">Con burrata</div>"));
        assert!(html.contains("<div class=\"item-price\">Prezzo non disponibile</div>"));
        // 説明のない品目には説明行がない
        assert_eq!(html.matches("item-description").count(), 1);
    }
}

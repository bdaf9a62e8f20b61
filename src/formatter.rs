//! Formatter Module
//!
//! 品目のフィールドをHTML用の文字列に整形するモジュール。
//! 3つのレイアウトはすべて、役割ごとに1つずつ用意されたこの整形関数を通して値を出力します。

use crate::section::MenuItem;
use crate::types::CellValue;

/// 品目名がない場合の表示
pub(crate) const NAME_PLACEHOLDER: &str = "Nome non disponibile";

/// 価格がない場合の表示（単一価格レイアウト）
pub(crate) const PRICE_PLACEHOLDER: &str = "Prezzo non disponibile";

/// サイズ別価格がない場合の表示（価格表グリッド）
pub(crate) const MISSING_SIZE_PRICE: &str = "-";

/// フィールドフォーマッター
///
/// ワークブック由来の文字列はすべてHTMLエスケープして返します。
#[derive(Debug, Default)]
pub(crate) struct FieldFormatter;

impl FieldFormatter {
    /// 新しいFieldFormatterインスタンスを生成
    pub fn new() -> Self {
        Self
    }

    /// 品目名（ない場合はプレースホルダー）
    pub fn name(&self, item: &MenuItem) -> String {
        self.escape_html(item.name.as_deref().unwrap_or(NAME_PLACEHOLDER))
    }

    /// 生産者名
    pub fn producer(&self, item: &MenuItem) -> Option<String> {
        item.producer.as_deref().map(|s| self.escape_html(s))
    }

    /// 価格を整形
    ///
    /// 数値は`€`と小数点以下2桁（例: `€4.50`）、文字列は書かれたとおりに出力します。
    ///
    /// # 引数
    ///
    /// * `value` - 価格セルの値
    ///
    /// # 戻り値
    ///
    /// 整形済み（エスケープ済み）の価格文字列
    pub fn price(&self, value: &CellValue) -> String {
        match value {
            CellValue::Number(n) => format!("€{:.2}", n),
            other => self.escape_html(&other.as_text().unwrap_or_default()),
        }
    }

    /// 単一価格（ない場合はプレースホルダー）
    pub fn single_price(&self, item: &MenuItem) -> String {
        match &item.price {
            Some(value) => self.price(value),
            None => PRICE_PLACEHOLDER.to_string(),
        }
    }

    /// サイズラベル（例: `0.3L`）
    pub fn size_label(&self, size: f64) -> String {
        format!("{}L", size)
    }

    /// インライン表示用のサイズ別価格
    ///
    /// 値のあるサイズだけを昇順に`0.3L: €4.00 0.5L: €6.00`の形式で連結します。
    ///
    /// # 引数
    ///
    /// * `item` - 品目
    /// * `sizes` - セクションのサイズ（昇順、`item.sized_prices`と同じ順序）
    pub fn inline_prices(&self, item: &MenuItem, sizes: &[f64]) -> String {
        sizes
            .iter()
            .zip(&item.sized_prices)
            .filter_map(|(size, value)| {
                value
                    .as_ref()
                    .map(|value| format!("{}: {}", self.size_label(*size), self.price(value)))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 説明行（優先順位: 種類+特徴 > 種類 > 特徴 > 説明）
    ///
    /// 種類と特徴が両方ある場合は`{種類} - {特徴}`になります。
    /// いずれもない場合は`None`（説明行を出力しない）。
    pub fn description_line(&self, item: &MenuItem) -> Option<String> {
        let line = match (&item.kind, &item.characteristic) {
            (Some(kind), Some(characteristic)) => Some(format!("{} - {}", kind, characteristic)),
            (Some(kind), None) => Some(kind.clone()),
            (None, Some(characteristic)) => Some(characteristic.clone()),
            (None, None) => item.description.clone(),
        };
        line.map(|s| self.escape_html(&s))
    }

    /// 説明（価格表グリッドの行の下に表示するもの）
    pub fn description(&self, item: &MenuItem) -> Option<String> {
        item.description.as_deref().map(|s| self.escape_html(s))
    }

    /// HTML特殊文字をエスケープ
    ///
    /// # 引数
    ///
    /// * `s` - エスケープする文字列
    ///
    /// # 戻り値
    ///
    /// エスケープ済み文字列
    pub fn escape_html(&self, s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 複数サイズ価格を持つシートのレイアウト
///
/// 列ラベルが数値（例: `0.3`, `0.5` リットル）の列を持つシートは、
/// 1つの品目に複数の価格があるため、専用のレイアウトで出力されます。
/// どちらのレイアウトを使うかはシートごとに`MenuBuilder::with_sheet_layout`で指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MultiPriceLayout {
    /// 価格表グリッド
    ///
    /// サイズ列ごとに1つのヘッダーセル（数値の降順、`L`付き）を持つ表として出力します。
    /// 価格がないサイズには`-`を表示し、説明は行の下に斜体で表示します。
    ///
    /// # 出力例
    ///
    /// ```text
    ///                         | 0.5L  | 0.3L
    /// Pils - Birrificio Nord  | €6.00 | €4.00
    /// Stout - Birrificio Sud  | -     | €4.50
    /// ```
    Grid,

    /// 品目ブロック内のインライン表示（デフォルト）
    ///
    /// 通常の品目ブロックの価格欄に`0.3L: €4.00 0.5L: €6.00`の形式で
    /// サイズの昇順に並べて出力します。
    Inline,
}

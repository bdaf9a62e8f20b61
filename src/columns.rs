//! Column Role Module
//!
//! 列ラベルから各列の意味的な役割（品目名、価格、説明など）を推定するモジュール。
//!
//! 推定は2段階で行います。
//!
//! 1. キーワード判定: 優先順位付きのルール表`ROLE_RULES`を先頭から評価し、
//!    最初に一致したルールの役割を割り当てる（大文字小文字を区別しない部分一致）
//! 2. 位置によるフォールバック: 未設定の品目名と価格に未分類の列を元の順序で割り当て、
//!    続いて未設定の説明と生産者に、残りの未分類の列または種類・特徴の列を割り当てる

use crate::types::ColumnLabel;

/// 列の意味的な役割
///
/// シートごとに、列ラベルのキーワードと位置から1回だけ推定されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnRole {
    /// 品目名（例: `Nome`, `Piatto`, `Birra`）
    Name,

    /// 価格（例: `Prezzo`）。数値ラベルの列は常にこの役割になります
    Price,

    /// 説明（例: `Descrizione`, `Stile`）
    Description,

    /// 生産者・醸造所（例: `Birrificio`, `Produttore`）
    Producer,

    /// 種類（例: `Tipo`）
    Type,

    /// 特徴（例: `Caratteristica`）
    Characteristic,

    /// 未分類
    Unclassified,
}

/// キーワードによる役割判定のルール表（優先順位順）
///
/// 数値ラベルの列はこの表に関係なく`ColumnRole::Price`になります。
pub(crate) const ROLE_RULES: &[(ColumnRole, &[&str])] = &[
    (
        ColumnRole::Producer,
        &["gineria", "sidreria", "birrificio", "brewery", "produttore", "producer"],
    ),
    (ColumnRole::Type, &["tipo"]),
    (ColumnRole::Characteristic, &["caratteristica"]),
    (
        ColumnRole::Name,
        &[
            "nome", "name", "piatto", "dish", "prodotto", "product", "birra", "bevanda", "sidro",
            "gin",
        ],
    ),
    (
        ColumnRole::Price,
        &["prezzo", "price", "costo", "cost", "€", "euro"],
    ),
    (
        ColumnRole::Description,
        &["descrizione", "description", "dettagli", "details", "stile"],
    ),
];

/// 1シート分の列の役割割り当て
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnRoles {
    /// 列ごとの役割（列の順序）
    roles: Vec<ColumnRole>,

    /// 役割ごとに採用された列（`role_slot`の順）
    assigned: [Option<usize>; 6],

    /// 数値ラベルを持つサイズ別価格列（列の順序）
    size_columns: Vec<usize>,
}

impl ColumnRoles {
    /// 列ラベルのリストから役割を推定
    ///
    /// 同じラベル列に対しては常に同じ結果を返します。
    /// `Menu`列は事前に取り除かれている前提です。
    ///
    /// # 引数
    ///
    /// * `columns` - シートの列ラベル（元の順序）
    ///
    /// # 戻り値
    ///
    /// 全列の役割と、サイズ別価格列の集合
    pub fn resolve(columns: &[ColumnLabel]) -> Self {
        let mut resolved = Self {
            roles: Vec::with_capacity(columns.len()),
            assigned: [None; 6],
            size_columns: Vec::new(),
        };

        // 1. キーワード判定（同じ役割に複数一致した場合は後の列が採用される）
        for (idx, label) in columns.iter().enumerate() {
            let role = classify_label(label);
            resolved.roles.push(role);
            if let Some(slot) = role_slot(role) {
                resolved.assigned[slot] = Some(idx);
            }
            if label.is_numeric() {
                resolved.size_columns.push(idx);
            }
        }

        // 2. 位置によるフォールバック
        // 品目名と価格は未分類の列から順に割り当てる
        let mut unclassified = (0..columns.len())
            .filter(|&idx| resolved.roles[idx] == ColumnRole::Unclassified)
            .collect::<Vec<_>>()
            .into_iter();

        for role in [ColumnRole::Name, ColumnRole::Price] {
            if resolved.column_for(role).is_some() {
                continue;
            }
            let Some(idx) = unclassified.next() else {
                break;
            };
            resolved.assign(idx, role);
        }

        // 説明と生産者は、未分類の列、次に種類・特徴の列の順に、他の役割に使われていない列から選ぶ
        let candidates: Vec<usize> = (0..columns.len())
            .filter(|&idx| resolved.roles[idx] == ColumnRole::Unclassified)
            .chain((0..columns.len()).filter(|&idx| {
                matches!(
                    resolved.roles[idx],
                    ColumnRole::Type | ColumnRole::Characteristic
                )
            }))
            .collect();

        for (role, excluded) in [
            (
                ColumnRole::Description,
                [ColumnRole::Name, ColumnRole::Price, ColumnRole::Producer],
            ),
            (
                ColumnRole::Producer,
                [ColumnRole::Name, ColumnRole::Price, ColumnRole::Description],
            ),
        ] {
            if resolved.column_for(role).is_some() {
                continue;
            }
            let free = candidates.iter().copied().find(|&idx| {
                excluded
                    .iter()
                    .all(|other| resolved.column_for(*other) != Some(idx))
            });
            if let Some(idx) = free {
                resolved.assign(idx, role);
            }
        }

        tracing::debug!("Resolved column roles: {:?}", resolved.roles);

        resolved
    }

    /// フォールバックで列に役割を割り当てる
    ///
    /// 種類・特徴の列が説明や生産者を兼ねる場合、列自体の役割は変わりません。
    fn assign(&mut self, column: usize, role: ColumnRole) {
        if self.roles[column] == ColumnRole::Unclassified {
            self.roles[column] = role;
        }
        if let Some(slot) = role_slot(role) {
            self.assigned[slot] = Some(column);
        }
    }

    /// 役割に割り当てられた列のインデックス
    pub fn column_for(&self, role: ColumnRole) -> Option<usize> {
        role_slot(role).and_then(|slot| self.assigned[slot])
    }

    /// 列の役割
    #[cfg(test)]
    pub fn role_of(&self, column: usize) -> ColumnRole {
        self.roles
            .get(column)
            .copied()
            .unwrap_or(ColumnRole::Unclassified)
    }

    /// サイズ別価格列のインデックス（列の順序）
    pub fn size_columns(&self) -> &[usize] {
        &self.size_columns
    }

    /// 複数サイズ価格のシートかどうか
    pub fn has_size_columns(&self) -> bool {
        !self.size_columns.is_empty()
    }
}

/// キーワードによる列ラベルの分類
fn classify_label(label: &ColumnLabel) -> ColumnRole {
    // 数値ラベルの文字列はどのキーワードも含まないので、先に判定しても優先順位は変わらない
    if label.is_numeric() {
        return ColumnRole::Price;
    }
    // `Unnamed: n`は"name"を含むが、キーワード判定の対象外
    if label.is_unnamed() {
        return ColumnRole::Unclassified;
    }

    let lower = label.to_string().to_lowercase();
    ROLE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(role, _)| *role)
        .unwrap_or(ColumnRole::Unclassified)
}

fn role_slot(role: ColumnRole) -> Option<usize> {
    match role {
        ColumnRole::Name => Some(0),
        ColumnRole::Price => Some(1),
        ColumnRole::Description => Some(2),
        ColumnRole::Producer => Some(3),
        ColumnRole::Type => Some(4),
        ColumnRole::Characteristic => Some(5),
        ColumnRole::Unclassified => None,
    }
}

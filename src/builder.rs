//! Builder Module
//!
//! Fluent Builder APIを提供し、`MenuGenerator`インスタンスを段階的に構築する。

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::api::MultiPriceLayout;
use crate::error::MenuError;
use crate::formatter::FieldFormatter;
use crate::logo::LogoImage;
use crate::page::{render_page, PageContext};
use crate::parser::WorkbookParser;
use crate::section::MenuSection;
use crate::security::SecurityConfig;
use crate::types::SheetTables;
use crate::{DEFAULT_VENUE_NAME, GRID_SHEET_NAME, LOGO_PATH};

/// フッターの生成日時の形式
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// 生成処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct MenuConfig {
    /// 店舗名
    pub venue_name: String,

    /// ロゴ画像のパス（Noneの場合はロゴなし）
    pub logo_path: Option<PathBuf>,

    /// シートごとの複数価格レイアウト（指定のないシートはインライン）
    pub sheet_layouts: HashMap<String, MultiPriceLayout>,

    /// フッターに表示する日時（Noneの場合は生成時の現在時刻）
    pub generated_at: Option<NaiveDateTime>,

    /// サイズ制限
    pub security: SecurityConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let mut sheet_layouts = HashMap::new();
        sheet_layouts.insert(GRID_SHEET_NAME.to_string(), MultiPriceLayout::Grid);

        Self {
            venue_name: DEFAULT_VENUE_NAME.to_string(),
            logo_path: Some(PathBuf::from(LOGO_PATH)),
            sheet_layouts,
            generated_at: None,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `MenuGenerator`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmenu::{MenuBuilder, MultiPriceLayout};
///
/// # fn main() -> Result<(), xlsxmenu::MenuError> {
/// let generator = MenuBuilder::new()
///     .with_venue_name("Osteria")
///     .with_sheet_layout("Vini", MultiPriceLayout::Grid)
///     .without_logo()
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MenuBuilder {
    /// 内部設定（構築中）
    config: MenuConfig,
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 店舗名: `The Craft`
    /// - ロゴ: `The_Craft_logo.png`
    /// - 価格表グリッド: `Birre Spina`シートのみ
    /// - 生成日時: 現在時刻
    pub fn new() -> Self {
        Self {
            config: MenuConfig::default(),
        }
    }

    /// 店舗名を指定する
    ///
    /// タイトル、見出し、ロゴの代替テキスト、フッターに使われます。
    pub fn with_venue_name(mut self, name: &str) -> Self {
        self.config.venue_name = name.to_string();
        self
    }

    /// ロゴ画像のパスを指定する
    ///
    /// ファイルが存在しない場合でもエラーにはならず、ロゴなしで生成されます。
    pub fn with_logo_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.logo_path = Some(path.into());
        self
    }

    /// ロゴを埋め込まない
    pub fn without_logo(mut self) -> Self {
        self.config.logo_path = None;
        self
    }

    /// シートごとの複数価格レイアウトを指定する
    ///
    /// サイズ別価格列を持たないシートには影響しません。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - シート名（大文字小文字を区別）
    /// * `layout` - 使用するレイアウト
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxmenu::{MenuBuilder, MultiPriceLayout};
    ///
    /// // デフォルトのグリッド表示をやめる
    /// let builder = MenuBuilder::new()
    ///     .with_sheet_layout("Birre Spina", MultiPriceLayout::Inline);
    /// ```
    pub fn with_sheet_layout(mut self, sheet_name: &str, layout: MultiPriceLayout) -> Self {
        self.config
            .sheet_layouts
            .insert(sheet_name.to_string(), layout);
        self
    }

    /// フッターに表示する日時を固定する
    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.config.generated_at = Some(generated_at);
        self
    }

    /// 設定を検証し、`MenuGenerator`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(MenuGenerator)`: 設定が有効な場合
    /// * `Err(MenuError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `MenuError::Config(String)`
    ///   * 店舗名が空（空白のみを含む）
    ///   * レイアウト指定のシート名が空
    pub fn build(self) -> Result<MenuGenerator, MenuError> {
        if self.config.venue_name.trim().is_empty() {
            return Err(MenuError::Config(
                "Venue name must not be empty".to_string(),
            ));
        }

        if self
            .config
            .sheet_layouts
            .keys()
            .any(|name| name.trim().is_empty())
        {
            return Err(MenuError::Config(
                "Sheet layout override has an empty sheet name".to_string(),
            ));
        }

        Ok(MenuGenerator::new(self.config))
    }
}

/// メニュー生成処理のファサード
///
/// ワークブックを読み込み（Load）、HTMLページを描画し（Render）、出力します（Write）。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmenu::MenuBuilder;
///
/// # fn main() -> Result<(), xlsxmenu::MenuError> {
/// let generator = MenuBuilder::new().build()?;
/// let sheets = generator.generate_file("menu The Craft.xlsx", "menu.html")?;
/// println!("{} sheets", sheets);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MenuGenerator {
    /// 生成設定
    config: MenuConfig,

    /// フィールドフォーマッター
    formatter: FieldFormatter,
}

impl MenuGenerator {
    pub(crate) fn new(config: MenuConfig) -> Self {
        Self {
            formatter: FieldFormatter::new(),
            config,
        }
    }

    /// ワークブックを読み込み、表示フィルタ済みのテーブルを返す
    ///
    /// # 引数
    ///
    /// * `input` - ワークブックを読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetTables)` - シート名からテーブルへの写像（シート順、空のシートは除外）
    /// * `Err(MenuError)` - 読み込みエラー
    pub fn load<R: Read>(&self, input: R) -> Result<SheetTables, MenuError> {
        let mut parser = WorkbookParser::open(input, &self.config.security)?;
        parser.load_sheets()
    }

    /// テーブルからHTMLページを描画する
    ///
    /// # 引数
    ///
    /// * `tables` - `load`で得たテーブル
    /// * `output` - HTML出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(MenuError::Io)` - 書き込みに失敗した場合
    pub fn render<W: Write>(&self, tables: &SheetTables, output: W) -> Result<(), MenuError> {
        let sections: Vec<MenuSection> = tables
            .iter()
            .map(|(sheet_name, table)| {
                MenuSection::build(sheet_name, table, self.layout_for(sheet_name))
            })
            .collect();

        let context = PageContext {
            venue_name: &self.config.venue_name,
            generated_at: self.timestamp(),
            logo: self.load_logo(),
        };

        let mut writer = BufWriter::new(output);
        render_page(&mut writer, &context, &sections, &self.formatter)
    }

    /// テーブルからHTML文字列を描画する
    pub fn render_to_string(&self, tables: &SheetTables) -> Result<String, MenuError> {
        let mut buffer = Vec::new();
        self.render(tables, &mut buffer)?;

        let result = String::from_utf8(buffer)
            .map_err(|e| MenuError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        Ok(result)
    }

    /// ワークブックを読み込み、HTMLページを出力する
    ///
    /// # 戻り値
    ///
    /// * `Ok(usize)` - 出力したセクション（シート）の数
    /// * `Err(MenuError)` - エラーが発生した場合
    pub fn generate<R: Read, W: Write>(&self, input: R, output: W) -> Result<usize, MenuError> {
        let tables = self.load(input)?;
        self.render(&tables, output)?;
        Ok(tables.len())
    }

    /// ワークブックファイルを読み込み、HTMLファイルを出力する
    ///
    /// 描画がすべて成功した後にだけ出力ファイルを作成（上書き）します。
    /// 途中で失敗した場合、出力ファイルには触れません。
    ///
    /// # 引数
    ///
    /// * `input_path` - ワークブックのパス
    /// * `output_path` - 出力するHTMLファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(usize)` - 出力したセクション（シート）の数
    /// * `Err(MenuError)` - エラーが発生した場合
    pub fn generate_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<usize, MenuError> {
        let input = fs::File::open(input_path.as_ref())?;
        let tables = self.load(input)?;
        let html = self.render_to_string(&tables)?;

        fs::write(output_path.as_ref(), html)?;
        tracing::info!("Menu written to {}", output_path.as_ref().display());

        Ok(tables.len())
    }

    /// シートに適用する複数価格レイアウト
    pub(crate) fn layout_for(&self, sheet_name: &str) -> MultiPriceLayout {
        self.config
            .sheet_layouts
            .get(sheet_name)
            .copied()
            .unwrap_or(MultiPriceLayout::Inline)
    }

    fn timestamp(&self) -> String {
        let generated_at = self
            .config
            .generated_at
            .unwrap_or_else(|| Local::now().naive_local());
        generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    fn load_logo(&self) -> Option<LogoImage> {
        self.config
            .logo_path
            .as_deref()
            .and_then(|path| LogoImage::load(path, self.config.security.max_logo_size))
    }
}

//! xlsxmenu - Restaurant menu workbook to static HTML page generator
//!
//! This crate reads a menu workbook (one sheet per menu section) and renders a single,
//! self-contained, mobile-friendly HTML page with navigation, one section per sheet
//! and an optional embedded logo.
//!
//! Rows are shown only when their `Menu` column equals `1`; sheets without a `Menu`
//! column are shown in full. Column meanings (name, price, description, producer,
//! type, characteristic) are inferred from the header labels, and numeric header
//! labels (e.g. `0.3`, `0.5`) are treated as per-size price columns.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxmenu::MenuBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a generator with default settings
//!     let generator = MenuBuilder::new().build()?;
//!
//!     // Read the workbook and write the HTML page
//!     let sheets = generator.generate_file("menu The Craft.xlsx", "menu_completo_the_craft.html")?;
//!     println!("{} sheets rendered", sheets);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Load and render separately
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsxmenu::{MenuBuilder, MultiPriceLayout};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = MenuBuilder::new()
//!         .with_venue_name("Osteria")
//!         .with_sheet_layout("Vini", MultiPriceLayout::Grid)
//!         .without_logo()
//!         .build()?;
//!
//!     let tables = generator.load(File::open("menu.xlsx")?)?;
//!     for (sheet, table) in &tables {
//!         println!("{}: {} items", sheet, table.row_count());
//!     }
//!
//!     let html = generator.render_to_string(&tables)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod columns;
mod error;
mod formatter;
mod logo;
mod output;
mod page;
mod parser;
mod section;
mod security;
mod types;

// 公開API
pub use api::MultiPriceLayout;
pub use builder::{MenuBuilder, MenuGenerator};
pub use error::MenuError;
pub use section::section_id;
pub use types::{CellValue, ColumnLabel, SheetTable, SheetTables, MENU_COLUMN};

/// ワークブックのパス（カレントディレクトリからの相対パス）
pub const WORKBOOK_PATH: &str = "menu The Craft.xlsx";

/// ロゴ画像のパス
pub const LOGO_PATH: &str = "The_Craft_logo.png";

/// 出力するHTMLファイルのパス
pub const OUTPUT_PATH: &str = "menu_completo_the_craft.html";

/// デフォルトの店舗名
pub const DEFAULT_VENUE_NAME: &str = "The Craft";

/// デフォルトで価格表グリッドを使うシート
pub const GRID_SHEET_NAME: &str = "Birre Spina";

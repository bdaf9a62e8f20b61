//! Boundary Tests for xlsxmenu
//!
//! Edge cases of workbook shape: empty sheets, header-only sheets, blank rows,
//! unlabeled columns, text prices and corrupted input.

use rust_xlsxwriter::*;
use std::io::Cursor;
use xlsxmenu::{CellValue, ColumnLabel, MenuBuilder, MenuError, MenuGenerator};

// Helper module for generating boundary test fixtures
mod fixtures {
    use super::*;

    /// Generate a workbook with an empty sheet (no cells)
    pub fn generate_empty_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Vuoto")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet with a header row only
    pub fn generate_header_only() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Intestazione")?;
        worksheet.write_string(0, 0, "Menu")?;
        worksheet.write_string(0, 1, "Nome")?;
        worksheet.write_string(0, 2, "Prezzo")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet with blank rows between items and an unlabeled column
    pub fn generate_sparse_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Cocktail")?;

        worksheet.write_string(0, 0, "Nome")?;
        // B1 has no label
        worksheet.write_string(0, 2, "Prezzo")?;

        worksheet.write_string(1, 0, "Negroni")?;
        worksheet.write_string(1, 1, "Campari, vermouth, gin")?;
        worksheet.write_number(1, 2, 8)?;
        // rows 3-4 are blank
        worksheet.write_string(4, 0, "Spritz")?;
        worksheet.write_string(4, 2, "su richiesta")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet whose Menu values are text and booleans
    pub fn generate_non_numeric_menu() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Vini")?;

        worksheet.write_string(0, 0, "Menu")?;
        worksheet.write_string(0, 1, "Nome")?;
        worksheet.write_string(1, 0, "1")?;
        worksheet.write_string(1, 1, "Testo")?;
        worksheet.write_boolean(2, 0, true)?;
        worksheet.write_string(2, 1, "Booleano")?;
        worksheet.write_number(3, 0, 1.0)?;
        worksheet.write_string(3, 1, "Numero")?;
        worksheet.write_boolean(4, 0, false)?;
        worksheet.write_string(4, 1, "Falso")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet with very long cell content
    pub fn generate_long_content(length: usize) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Lungo")?;
        worksheet.write_string(0, 0, "Nome")?;
        worksheet.write_string(0, 1, "Descrizione")?;
        worksheet.write_string(1, 0, "Degustazione")?;
        worksheet.write_string(1, 1, "a".repeat(length))?;
        Ok(workbook.save_to_buffer()?)
    }
}

fn generator() -> MenuGenerator {
    MenuBuilder::new().without_logo().build().unwrap()
}

#[test]
fn test_empty_sheet() {
    let generator = generator();
    let tables = generator
        .load(Cursor::new(fixtures::generate_empty_sheet().unwrap()))
        .unwrap();
    assert!(tables.is_empty());

    let html = generator.render_to_string(&tables).unwrap();
    assert!(html.contains("Nessun dato disponibile nel menu"));
}

#[test]
fn test_header_only_sheet() {
    let tables = generator()
        .load(Cursor::new(fixtures::generate_header_only().unwrap()))
        .unwrap();
    assert!(tables.is_empty());
}

#[test]
fn test_blank_rows_and_unlabeled_column() {
    let generator = generator();
    let tables = generator
        .load(Cursor::new(fixtures::generate_sparse_sheet().unwrap()))
        .unwrap();

    let table = &tables["Cocktail"];
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[1], ColumnLabel::Text("Unnamed: 1".to_string()));
    assert_eq!(
        table.rows()[1][2],
        CellValue::String("su richiesta".to_string())
    );

    let html = generator.render_to_string(&tables).unwrap();
    assert_eq!(html.matches("<div class=\"menu-item\">").count(), 2);
    // The unlabeled column falls back to the description role
    assert!(html.contains("<div class=\"item-description\">Campari, vermouth, gin</div>"));
    assert!(html.contains("<div class=\"item-price\">€8.00</div>"));
    assert!(html.contains("<div class=\"item-price\">su richiesta</div>"));
}

#[test]
fn test_menu_matches_number_one_and_true() {
    let html = generator()
        .render_to_string(
            &generator()
                .load(Cursor::new(fixtures::generate_non_numeric_menu().unwrap()))
                .unwrap(),
        )
        .unwrap();

    assert!(html.contains(">Numero<"));
    assert!(html.contains(">Booleano<"));
    assert!(!html.contains("Testo"));
    assert!(!html.contains("Falso"));
}

#[test]
fn test_very_long_cell_content() {
    let length = 32_767; // Excelのセル文字数上限
    let html = generator()
        .render_to_string(
            &generator()
                .load(Cursor::new(fixtures::generate_long_content(length).unwrap()))
                .unwrap(),
        )
        .unwrap();

    assert!(html.contains(&"a".repeat(length)));
}

#[test]
fn test_corrupted_file() {
    // ZIPヘッダーだけを持つ壊れたファイル
    let corrupted = vec![0x50, 0x4B, 0x03, 0x04, 0x00, 0x00];
    let result = generator().load(Cursor::new(corrupted));
    assert!(matches!(result, Err(MenuError::Parse(_))));
}

#[test]
fn test_empty_input() {
    let result = generator().load(Cursor::new(Vec::new()));
    assert!(result.is_err());
}

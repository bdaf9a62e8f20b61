//! Menu page generator
//!
//! Reads `menu The Craft.xlsx` from the current directory and writes
//! `menu_completo_the_craft.html` next to it.

use std::path::Path;
use std::process::ExitCode;

use tracing::Level;
use xlsxmenu::{MenuBuilder, MenuError, OUTPUT_PATH, WORKBOOK_PATH};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !Path::new(WORKBOOK_PATH).exists() {
        println!("Errore: Il file '{}' non esiste!", WORKBOOK_PATH);
        return ExitCode::FAILURE;
    }

    println!("Leggendo il file {}...", WORKBOOK_PATH);

    match generate() {
        Ok(sheets) => {
            println!("Menu HTML generato: {}", OUTPUT_PATH);
            println!("Sezioni elaborate: {}", sheets);
            ExitCode::SUCCESS
        }
        Err(e) => {
            handle_error(e);
            ExitCode::FAILURE
        }
    }
}

fn generate() -> Result<usize, MenuError> {
    let generator = MenuBuilder::new().build()?;
    generator.generate_file(WORKBOOK_PATH, OUTPUT_PATH)
}

fn handle_error(error: MenuError) {
    match error {
        MenuError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        MenuError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid workbook or may be corrupted.");
        }
        MenuError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        MenuError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
    }
}

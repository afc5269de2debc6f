//! flatiron: Flatten a JSON array of records into a CSV table
//!
//! Usage:
//!   # Whole document is the record array, CSV to stdout
//!   flatiron data.json
//!
//!   # Record array nested inside the document, CSV to a file
//!   flatiron api_response.json --json-path results,items --output-file out.csv
//!
//!   # Custom naming for the columns of array-valued fields
//!   flatiron data.json --array-field-naming '{fieldName}[{index}]'

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use flatiron::{write_table, write_table_to_file, ColumnNaming, FlattenConfig, JsonFlattener};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "flatiron")]
#[command(about = "Flatten a JSON array of records into a CSV table", long_about = None)]
struct Args {
    /// Input JSON file
    #[arg(value_name = "FILE")]
    input: String,

    /// Write the CSV to this file instead of stdout
    #[arg(long, short = 'o')]
    output_file: Option<String>,

    /// Comma-separated path to the record array inside the document,
    /// e.g. 'results,items'. Omit if the document root is the array
    #[arg(long, short = 'p')]
    json_path: Option<String>,

    /// Naming template for the columns of array-valued fields, with
    /// '{fieldName}' and '{index}' placeholders
    #[arg(long, short = 'n', default_value = ColumnNaming::DEFAULT_TEMPLATE)]
    array_field_naming: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let doc = load_document(&args.input)?;

    let mut config = FlattenConfig::default();
    if let Some(path) = args.json_path.as_deref().filter(|p| !p.is_empty()) {
        // Segments are not trimmed: JSON keys may contain spaces.
        config.path = path.split(',').map(str::to_string).collect();
    }
    config.naming = ColumnNaming::new(args.array_field_naming);

    // The table is fully materialized before any output is opened, so a
    // failed conversion never leaves a partial CSV behind.
    let flattener = JsonFlattener::new(config);
    let table = flattener.flatten(&doc)?;

    match args.output_file {
        Some(path) => {
            let written = write_table_to_file(&path, &table)?;
            println!("{} records written to {}", written, path);
        }
        None => {
            let written = write_table(std::io::stdout().lock(), &table)?;
            eprintln!("{} records", written);
        }
    }

    Ok(())
}

/// Load and parse the input document, whole file at once.
///
/// Tries SIMD-accelerated parsing first; on failure, re-parses with
/// serde_json, whose errors carry line and column information.
fn load_document(path: &str) -> Result<Value> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path))?;

    // simd-json parses in place, so give it its own buffer
    let mut simd_buffer = content.clone();
    match simd_json::to_owned_value(&mut simd_buffer) {
        Ok(owned) => {
            let json_str = simd_json::to_string(&owned)?;
            let value: Value = serde_json::from_str(&json_str)?;
            Ok(value)
        }
        Err(_) => serde_json::from_slice(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path)),
    }
}

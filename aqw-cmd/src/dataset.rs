//! Opening a dataset file.

use anyhow::Context;
use aqw_db::Database;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load `path` into a fresh in-memory database. Files ending in `.gz` are
/// decompressed on the fly.
pub fn open_dataset(path: &str) -> anyhow::Result<Database> {
    let db = Database::new()?;
    let file = File::open(path).with_context(|| format!("Cannot open dataset {}", path))?;
    let reader = BufReader::new(file);

    let rows = if is_gzip(path) {
        db.load_records_from_reader(GzDecoder::new(reader))
    } else {
        db.load_records_from_reader(reader)
    }
    .with_context(|| format!("Failed to load dataset {}", path))?;

    info!("Loaded {} records from {}", rows, path);
    Ok(db)
}

fn is_gzip(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

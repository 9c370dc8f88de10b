//! In-memory SQLite database layer for the U.S. air pollution dataset.
//!
//! The dataset is parsed once from CSV (plain or gzip-compressed) into a
//! single `records` table. Every chart then reads through a typed query
//! method that groups and sums or averages in SQL and returns serializable
//! rows from [`models`].
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Dataset embedded at compile time by the web app, read from disk by the CLI
//! - After loading only `SELECT` statements run
//!
//! # Usage
//!
//! ```rust
//! use aqw_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_records("State,City,Time_zone,Date,O3 Mean,O3 AQI,O3 1st Max Hour,SO2 Mean,SO2 AQI,SO2 1st Max Hour,NO2 Mean,NO2 AQI,NO2 1st Max Hour,CO Mean,CO AQI,CO 1st Max Hour\n\
//! Arizona,Phoenix,Mountain Time Zone,2010-01-01,0.02,37,9,1.9,13,9,25.0,34,19,0.87,25,23\n").unwrap();
//!
//! let states = db.query_states().unwrap();
//! assert_eq!(states, vec!["Arizona".to_string()]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the pollution records.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

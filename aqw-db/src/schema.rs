//! SQL schema for the in-memory SQLite database.
//!
//! One wide table mirrors the dataset rows. Measurement columns are
//! nullable: an empty CSV cell is stored as NULL and skipped by `AVG`.

/// Returns the full SQL schema as a single batch string.
///
/// - `records` - one row per (state, city, date) reading; duplicate
///   readings for the same city and day are kept
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        state TEXT NOT NULL,
        city TEXT NOT NULL,
        time_zone TEXT NOT NULL,
        date TEXT NOT NULL,
        o3_mean REAL,
        o3_aqi REAL,
        o3_max_hour INTEGER,
        so2_mean REAL,
        so2_aqi REAL,
        so2_max_hour INTEGER,
        no2_mean REAL,
        no2_aqi REAL,
        no2_max_hour INTEGER,
        co_mean REAL,
        co_aqi REAL,
        co_max_hour INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_records_state ON records(state);
    CREATE INDEX IF NOT EXISTS idx_records_tz_date ON records(time_zone, date);
    CREATE INDEX IF NOT EXISTS idx_records_state_city ON records(state, city);
    "#
}

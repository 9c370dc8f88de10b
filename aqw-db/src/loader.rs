//! Dataset loading into the in-memory SQLite database.
//!
//! The CSV must carry a header row naming at least `State`, `City`,
//! `Time_zone`, `Date` and the three measurement columns of each pollutant
//! (`O3 Mean`, `O3 AQI`, `O3 1st Max Hour`, ...). Other columns are ignored.
//! A missing column, a malformed non-empty cell or an hour outside 0-23
//! aborts the load.

use crate::Database;
use aqw_core::dates::format_date;
use aqw_core::{Measure, Pollutant, PollutionRecord};
use anyhow::{bail, Context};
use flate2::read::GzDecoder;
use rusqlite::params;
use std::io::Read;

impl Database {
    /// Load pollution records from a CSV string.
    ///
    /// Returns the number of rows inserted.
    ///
    /// # Example CSV
    /// ```text
    /// State,City,Time_zone,Date,O3 Mean,O3 AQI,O3 1st Max Hour,...
    /// Arizona,Phoenix,Mountain Time Zone,2010-01-01,0.0197,37,9,...
    /// ```
    pub fn load_records(&self, csv_data: &str) -> anyhow::Result<usize> {
        self.load_records_from_reader(csv_data.as_bytes())
    }

    /// Load pollution records from gzip-compressed CSV bytes.
    pub fn load_records_gz(&self, gz_data: &[u8]) -> anyhow::Result<usize> {
        self.load_records_from_reader(GzDecoder::new(gz_data))
    }

    /// Load pollution records from any CSV byte stream.
    pub fn load_records_from_reader<R: Read>(&self, reader: R) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = rdr.headers().context("Cannot read dataset header")?.clone();
        let missing = missing_columns(&headers);
        if !missing.is_empty() {
            bail!("Dataset is missing required columns: {}", missing.join(", "));
        }

        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO records (
                    state, city, time_zone, date,
                    o3_mean, o3_aqi, o3_max_hour,
                    so2_mean, so2_aqi, so2_max_hour,
                    no2_mean, no2_aqi, no2_max_hour,
                    co_mean, co_aqi, co_max_hour)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            )?;
            for (index, result) in rdr.deserialize::<PollutionRecord>().enumerate() {
                // Line 1 is the header.
                let line = index + 2;
                let r = result.with_context(|| format!("Malformed dataset row at line {}", line))?;
                r.validate()
                    .with_context(|| format!("Invalid dataset row at line {}", line))?;

                stmt.execute(params![
                    r.state,
                    r.city,
                    r.time_zone,
                    format_date(&r.date),
                    r.o3_mean,
                    r.o3_aqi,
                    r.o3_max_hour,
                    r.so2_mean,
                    r.so2_aqi,
                    r.so2_max_hour,
                    r.no2_mean,
                    r.no2_aqi,
                    r.no2_max_hour,
                    r.co_mean,
                    r.co_aqi,
                    r.co_max_hour,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!("[AQW Debug] loader: Loaded {} pollution records", count);
        Ok(count)
    }
}

/// Required headers absent from `headers`, in dataset column order.
fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    let measures = [Measure::Mean, Measure::Aqi, Measure::FirstMaxHour];
    ["State", "City", "Time_zone", "Date"]
        .into_iter()
        .map(str::to_string)
        .chain(
            Pollutant::ALL
                .into_iter()
                .flat_map(|p| measures.into_iter().map(move |m| p.header(m))),
        )
        .filter(|column| !headers.iter().any(|h| h == column))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::test_support::{sample_db, HEADER};
    use crate::Database;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn row_count(db: &Database) -> i64 {
        db.conn
            .borrow()
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_records_inserts_every_row() {
        let db = sample_db();
        assert_eq!(row_count(&db), 7);
    }

    #[test]
    fn load_records_stores_empty_cells_as_null() {
        let db = sample_db();
        let nulls: i64 = db
            .conn
            .borrow()
            .query_row(
                "SELECT COUNT(*) FROM records WHERE co_mean IS NULL AND co_aqi IS NULL AND co_max_hour IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 2);
    }

    #[test]
    fn load_records_ignores_extra_columns_in_any_order() {
        let db = Database::new().unwrap();
        let csv = "\
Date,Address,State,County,City,O3 Mean,O3 1st Max Value,O3 1st Max Hour,O3 AQI,CO Mean,CO 1st Max Value,CO 1st Max Hour,CO AQI,SO2 Mean,SO2 1st Max Value,SO2 1st Max Hour,SO2 AQI,NO2 Mean,NO2 1st Max Value,NO2 1st Max Hour,NO2 AQI,Time_zone
2010-01-01,1645 E Roosevelt St,Arizona,Maricopa,Phoenix,0.019765,0.04,9,37,0.878947,2.2,23,25,1.926316,3,9,13,25.0,36,19,34,Mountain Time Zone
";
        assert_eq!(db.load_records(csv).unwrap(), 1);
        assert_eq!(db.query_states().unwrap(), vec!["Arizona".to_string()]);
    }

    #[test]
    fn load_records_rejects_missing_column() {
        let db = Database::new().unwrap();
        let csv = "State,City,Date\nArizona,Phoenix,2010-01-01\n";
        assert!(db.load_records(csv).is_err());
    }

    #[test]
    fn load_records_rejects_malformed_cell() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}\nArizona,Phoenix,Mountain Time Zone,2010-01-01,zero,30,9,1.0,10,8,20.0,30,19,0.5,5,23\n",
            HEADER
        );
        let err = db.load_records(&csv).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"), "{:#}", err);
    }

    #[test]
    fn load_records_rejects_hour_out_of_range() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}\nArizona,Phoenix,Mountain Time Zone,2010-01-01,0.02,30,9,1.0,10,8,20.0,30,24,0.5,5,23\n",
            HEADER
        );
        let err = db.load_records(&csv).unwrap_err();
        assert!(format!("{:#}", err).contains("NO2 1st Max Hour"), "{:#}", err);
    }

    #[test]
    fn failed_load_leaves_table_empty() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "Arizona,Phoenix,Mountain Time Zone,2010-01-01,0.02,30,9,1.0,10,8,20.0,30,19,0.5,5,23",
            "Arizona,Phoenix,Mountain Time Zone,not-a-date,0.02,30,9,1.0,10,8,20.0,30,19,0.5,5,23"
        );
        assert!(db.load_records(&csv).is_err());
        assert_eq!(row_count(&db), 0);
    }

    #[test]
    fn load_records_gz_decompresses() {
        let csv = format!(
            "{}\nArizona,Phoenix,Mountain Time Zone,2010-01-01,0.02,30,9,1.0,10,8,20.0,30,19,0.5,5,23\n",
            HEADER
        );
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(csv.as_bytes()).unwrap();
        let gz = encoder.finish().unwrap();

        let db = Database::new().unwrap();
        assert_eq!(db.load_records_gz(&gz).unwrap(), 1);
        assert!(db.load_records_gz(b"not gzip").is_err());
    }

    #[test]
    fn header_only_csv_with_missing_columns_is_rejected() {
        let db = Database::new().unwrap();
        let err = db.load_records("State,City\n").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Time_zone"), "{}", message);
        assert!(message.contains("CO 1st Max Hour"), "{}", message);
        assert!(!message.contains("State,"), "{}", message);
    }

    #[test]
    fn header_only_csv_with_all_columns_loads_nothing() {
        let db = Database::new().unwrap();
        assert_eq!(db.load_records(&format!("{}\n", HEADER)).unwrap(), 0);
    }
}

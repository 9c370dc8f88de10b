//! Typed query methods over the `records` table.
//!
//! All queries return structs from [`crate::models`] ordered by their
//! grouping keys, so callers that pick "the first" row on ties get the
//! alphabetically first state or city and then the earliest date.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text, so range filters compare
//! strings.

use crate::models::{
    CityDateAqi, CityPeakHours, DailyPeakSummary, DatasetSummary, StateCitySums, StateDateSums,
    StatePeakSummary,
};
use crate::Database;
use aqw_core::dates::{format_date, parse_date};
use aqw_core::{DateRange, Measure, PerPollutant, Pollutant, PollutionRecord};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row};

/// Read an ISO date column.
fn date_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    parse_date(&text).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read four consecutive columns in O3, SO2, NO2, CO order.
fn per_pollutant_at<T: rusqlite::types::FromSql>(
    row: &Row<'_>,
    first: usize,
) -> rusqlite::Result<PerPollutant<T>> {
    Ok(PerPollutant {
        o3: row.get(first)?,
        so2: row.get(first + 1)?,
        no2: row.get(first + 2)?,
        co: row.get(first + 3)?,
    })
}

impl Database {
    // ───────────────────── Dataset Shape ─────────────────────

    /// Distinct time zones in order of first appearance in the dataset.
    pub fn query_time_zones(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT time_zone FROM records
             GROUP BY time_zone
             ORDER BY MIN(rowid)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_time_zones returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct states in order of first appearance in the dataset.
    pub fn query_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state FROM records
             GROUP BY state
             ORDER BY MIN(rowid)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("[AQW Debug] query: query_states returned {} records", rows.len());
        Ok(rows)
    }

    /// Cities of a state, ascending by name.
    pub fn query_cities(&self, state: &str) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT city FROM records
             WHERE state = ?1
             ORDER BY city",
        )?;
        let rows = stmt
            .query_map(params![state], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("[AQW Debug] query: query_cities returned {} records", rows.len());
        Ok(rows)
    }

    /// Earliest and latest date in the dataset, `None` when it is empty.
    pub fn query_date_range(&self) -> anyhow::Result<Option<DateRange>> {
        let conn = self.conn.borrow();
        let (min_date, max_date) =
            conn.query_row("SELECT MIN(date), MAX(date) FROM records", [], |row| {
                Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?))
            })?;
        let range = match (min_date, max_date) {
            (Some(min), Some(max)) => Some(DateRange(parse_date(&min)?, parse_date(&max)?)),
            _ => None,
        };
        log::info!("[AQW Debug] query: query_date_range returned {:?}", range);
        Ok(range)
    }

    /// Row, state and city counts plus the time zones and date bounds.
    pub fn query_summary(&self) -> anyhow::Result<DatasetSummary> {
        let (rows, states, cities) = {
            let conn = self.conn.borrow();
            conn.query_row(
                "SELECT COUNT(*), COUNT(DISTINCT state), COUNT(DISTINCT state || '/' || city) FROM records",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )?
        };
        let range = self.query_date_range()?;
        let summary = DatasetSummary {
            rows: usize::try_from(rows)?,
            states: usize::try_from(states)?,
            cities: usize::try_from(cities)?,
            time_zones: self.query_time_zones()?,
            first_date: range.map(|r| r.start()),
            last_date: range.map(|r| r.end()),
        };
        log::info!("[AQW Debug] query: query_summary returned {} rows", summary.rows);
        Ok(summary)
    }

    /// Raw records matching every filter that is given, in load order.
    pub fn query_records(
        &self,
        time_zone: Option<&str>,
        state: Option<&str>,
        range: Option<&DateRange>,
    ) -> anyhow::Result<Vec<PollutionRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, city, time_zone, date,
                    o3_mean, o3_max_hour, o3_aqi,
                    co_mean, co_max_hour, co_aqi,
                    so2_mean, so2_max_hour, so2_aqi,
                    no2_mean, no2_max_hour, no2_aqi
             FROM records
             WHERE (?1 IS NULL OR time_zone = ?1)
               AND (?2 IS NULL OR state = ?2)
               AND (?3 IS NULL OR date >= ?3)
               AND (?4 IS NULL OR date <= ?4)
             ORDER BY rowid",
        )?;
        let start = range.map(|r| format_date(&r.start()));
        let end = range.map(|r| format_date(&r.end()));
        let rows = stmt
            .query_map(params![time_zone, state, start, end], |row| {
                Ok(PollutionRecord {
                    state: row.get(0)?,
                    city: row.get(1)?,
                    time_zone: row.get(2)?,
                    date: date_at(row, 3)?,
                    o3_mean: row.get(4)?,
                    o3_max_hour: row.get(5)?,
                    o3_aqi: row.get(6)?,
                    co_mean: row.get(7)?,
                    co_max_hour: row.get(8)?,
                    co_aqi: row.get(9)?,
                    so2_mean: row.get(10)?,
                    so2_max_hour: row.get(11)?,
                    so2_aqi: row.get(12)?,
                    no2_mean: row.get(13)?,
                    no2_max_hour: row.get(14)?,
                    no2_aqi: row.get(15)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[AQW Debug] query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    // ───────────────────── Time Series Tab ─────────────────────

    /// Sum the four pollutant means per (state, date) within one time zone
    /// and an inclusive date range. Ordered by state, then date.
    pub fn query_state_date_sums(
        &self,
        time_zone: &str,
        range: &DateRange,
    ) -> anyhow::Result<Vec<StateDateSums>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, date,
                    COALESCE(SUM(o3_mean), 0.0), COALESCE(SUM(so2_mean), 0.0),
                    COALESCE(SUM(no2_mean), 0.0), COALESCE(SUM(co_mean), 0.0)
             FROM records
             WHERE time_zone = ?1 AND date >= ?2 AND date <= ?3
             GROUP BY state, date
             ORDER BY state, date",
        )?;
        let rows = stmt
            .query_map(
                params![time_zone, format_date(&range.start()), format_date(&range.end())],
                |row| {
                    Ok(StateDateSums {
                        state: row.get(0)?,
                        date: date_at(row, 1)?,
                        means: per_pollutant_at(row, 2)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_state_date_sums returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Sum the four pollutant means per (state, city) within one time zone
    /// and an inclusive date range. Ordered by state, then city.
    pub fn query_state_city_sums(
        &self,
        time_zone: &str,
        range: &DateRange,
    ) -> anyhow::Result<Vec<StateCitySums>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, city,
                    COALESCE(SUM(o3_mean), 0.0), COALESCE(SUM(so2_mean), 0.0),
                    COALESCE(SUM(no2_mean), 0.0), COALESCE(SUM(co_mean), 0.0)
             FROM records
             WHERE time_zone = ?1 AND date >= ?2 AND date <= ?3
             GROUP BY state, city
             ORDER BY state, city",
        )?;
        let rows = stmt
            .query_map(
                params![time_zone, format_date(&range.start()), format_date(&range.end())],
                |row| {
                    Ok(StateCitySums {
                        state: row.get(0)?,
                        city: row.get(1)?,
                        means: per_pollutant_at(row, 2)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_state_city_sums returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── AQI Tab ─────────────────────

    /// Average the four AQI columns per (city, date) within one state.
    /// Ordered by city, then date.
    pub fn query_city_date_aqi(&self, state: &str) -> anyhow::Result<Vec<CityDateAqi>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT city, date, AVG(o3_aqi), AVG(so2_aqi), AVG(no2_aqi), AVG(co_aqi)
             FROM records
             WHERE state = ?1
             GROUP BY city, date
             ORDER BY city, date",
        )?;
        let rows = stmt
            .query_map(params![state], |row| {
                Ok(CityDateAqi {
                    city: row.get(0)?,
                    date: date_at(row, 1)?,
                    aqi: per_pollutant_at(row, 2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_city_date_aqi returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Drill-down Tab ─────────────────────

    /// Per state over the whole dataset: summed mean concentration and
    /// average first max hour of one pollutant. Ordered by state name.
    pub fn query_state_peaks(&self, pollutant: Pollutant) -> anyhow::Result<Vec<StatePeakSummary>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT state, COALESCE(SUM({mean}), 0.0), AVG({hour})
             FROM records
             GROUP BY state
             ORDER BY state",
            mean = pollutant.sql_column(Measure::Mean),
            hour = pollutant.sql_column(Measure::FirstMaxHour),
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StatePeakSummary {
                    state: row.get(0)?,
                    mean_sum: row.get(1)?,
                    avg_max_hour: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_state_peaks returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Per day for one state within a date range: summed mean concentration
    /// and average first max hour of one pollutant. Ordered by date.
    pub fn query_daily_peaks(
        &self,
        pollutant: Pollutant,
        state: &str,
        range: &DateRange,
    ) -> anyhow::Result<Vec<DailyPeakSummary>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT date, COALESCE(SUM({mean}), 0.0), AVG({hour})
             FROM records
             WHERE state = ?1 AND date >= ?2 AND date <= ?3
             GROUP BY date
             ORDER BY date",
            mean = pollutant.sql_column(Measure::Mean),
            hour = pollutant.sql_column(Measure::FirstMaxHour),
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![state, format_date(&range.start()), format_date(&range.end())],
                |row| {
                    Ok(DailyPeakSummary {
                        date: date_at(row, 0)?,
                        mean_sum: row.get(1)?,
                        avg_max_hour: row.get(2)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQW Debug] query: query_daily_peaks returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Distribution Tab ─────────────────────

    /// First max hours of one pollutant for every city of a state, cities
    /// ascending by name. A city whose readings are all missing is still
    /// listed, with no hours.
    pub fn query_city_peak_hours(
        &self,
        state: &str,
        pollutant: Pollutant,
    ) -> anyhow::Result<Vec<CityPeakHours>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT city, {hour} FROM records
             WHERE state = ?1
             ORDER BY city, rowid",
            hour = pollutant.sql_column(Measure::FirstMaxHour),
        );
        let mut stmt = conn.prepare(&sql)?;
        let raw_rows: Vec<(String, Option<u32>)> = stmt
            .query_map(params![state], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut results: Vec<CityPeakHours> = Vec::new();
        for (city, hour) in raw_rows {
            if results.last().map(|last| last.city != city).unwrap_or(true) {
                results.push(CityPeakHours {
                    city,
                    hours: Vec::new(),
                });
            }
            if let Some(entry) = results.last_mut() {
                entry.hours.extend(hour);
            }
        }
        log::info!(
            "[AQW Debug] query: query_city_peak_hours returned {} records",
            results.len()
        );
        Ok(results)
    }

    /// First max hours of all four pollutants for one city, in row order.
    pub fn query_city_all_peak_hours(
        &self,
        state: &str,
        city: &str,
    ) -> anyhow::Result<PerPollutant<Vec<u32>>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT o3_max_hour, so2_max_hour, no2_max_hour, co_max_hour
             FROM records
             WHERE state = ?1 AND city = ?2
             ORDER BY rowid",
        )?;
        let raw_rows = stmt
            .query_map(params![state, city], |row| per_pollutant_at::<Option<u32>>(row, 0))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut hours: PerPollutant<Vec<u32>> = PerPollutant::default();
        for row in &raw_rows {
            for pollutant in Pollutant::ALL {
                hours.get_mut(pollutant).extend(*row.get(pollutant));
            }
        }
        log::info!(
            "[AQW Debug] query: query_city_all_peak_hours returned {} records",
            raw_rows.len()
        );
        Ok(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_db, HEADER};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn january() -> DateRange {
        DateRange(d(2010, 1, 1), d(2010, 1, 31))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ───────────────────── Dataset Shape ─────────────────────

    #[test]
    fn query_time_zones_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(
            db.query_time_zones().unwrap(),
            vec!["Mountain Time Zone".to_string(), "Pacific Time Zone".to_string()]
        );
    }

    #[test]
    fn query_states_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(db.query_states().unwrap(), vec!["Arizona", "Colorado", "California"]);
    }

    #[test]
    fn query_cities_sorted() {
        let db = sample_db();
        assert_eq!(db.query_cities("Arizona").unwrap(), vec!["Phoenix", "Tucson"]);
        assert!(db.query_cities("Nowhere").unwrap().is_empty());
    }

    #[test]
    fn query_date_range_spans_dataset() {
        let db = sample_db();
        assert_eq!(
            db.query_date_range().unwrap(),
            Some(DateRange(d(2010, 1, 1), d(2010, 2, 15)))
        );
    }

    #[test]
    fn query_summary_counts() {
        let db = sample_db();
        let summary = db.query_summary().unwrap();
        assert_eq!(summary.rows, 7);
        assert_eq!(summary.states, 3);
        assert_eq!(summary.cities, 4);
        assert_eq!(summary.time_zones.len(), 2);
        assert_eq!(summary.first_date, Some(d(2010, 1, 1)));
        assert_eq!(summary.last_date, Some(d(2010, 2, 15)));
    }

    #[test]
    fn query_records_applies_each_filter() {
        let db = sample_db();
        assert_eq!(db.query_records(None, None, None).unwrap().len(), 7);
        assert_eq!(db.query_records(Some("Pacific Time Zone"), None, None).unwrap().len(), 1);
        assert_eq!(db.query_records(None, Some("Colorado"), None).unwrap().len(), 2);
        let january_mountain = db
            .query_records(Some("Mountain Time Zone"), None, Some(&january()))
            .unwrap();
        assert_eq!(january_mountain.len(), 5);
        let denver = &january_mountain[4];
        assert_eq!(denver.city, "Denver");
        assert_eq!(denver.co_mean, None);
        assert_eq!(denver.no2_max_hour, Some(21));
    }

    // ───────────────────── Time Series Tab ─────────────────────

    #[test]
    fn query_state_date_sums_groups_and_orders() {
        let db = sample_db();
        let rows = db.query_state_date_sums("Mountain Time Zone", &january()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].state.as_str(), rows[0].date), ("Arizona", d(2010, 1, 1)));
        assert_eq!((rows[1].state.as_str(), rows[1].date), ("Arizona", d(2010, 1, 2)));
        assert_eq!((rows[2].state.as_str(), rows[2].date), ("Colorado", d(2010, 1, 1)));
        // Phoenix + two Tucson rows
        assert!(close(rows[0].means.o3, 0.06));
        assert!(close(rows[0].means.no2, 44.0));
        // Denver has no CO readings: a missing sum is zero
        assert_eq!(rows[2].means.co, 0.0);
    }

    #[test]
    fn query_state_date_sums_empty_range() {
        let db = sample_db();
        let range = DateRange(d(2020, 1, 1), d(2020, 1, 31));
        assert!(db.query_state_date_sums("Mountain Time Zone", &range).unwrap().is_empty());
        assert!(db.query_state_date_sums("Atlantic Time Zone", &january()).unwrap().is_empty());
    }

    #[test]
    fn query_state_city_sums_groups_and_orders() {
        let db = sample_db();
        let rows = db.query_state_city_sums("Mountain Time Zone", &january()).unwrap();
        let keys: Vec<(&str, &str)> = rows.iter().map(|r| (r.state.as_str(), r.city.as_str())).collect();
        assert_eq!(keys, vec![("Arizona", "Phoenix"), ("Arizona", "Tucson"), ("Colorado", "Denver")]);
        assert!(close(rows[0].means.o3, 0.05));
        assert!(close(rows[1].means.so2, 2.0));
        // The February Denver row is outside the range
        assert!(close(rows[2].means.o3, 0.04));
    }

    // ───────────────────── AQI Tab ─────────────────────

    #[test]
    fn query_city_date_aqi_averages_duplicates() {
        let db = sample_db();
        let rows = db.query_city_date_aqi("Arizona").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].city, "Tucson");
        assert_eq!(rows[2].aqi.o3, Some(30.0));
        assert_eq!(rows[2].aqi.so2, Some(6.0));
        assert_eq!(rows[2].aqi.co, Some(3.0));
    }

    #[test]
    fn query_city_date_aqi_missing_pollutant_is_none() {
        let db = sample_db();
        let rows = db.query_city_date_aqi("Colorado").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.aqi.co.is_none()));
        assert_eq!(rows[1].aqi.no2, Some(45.0));
    }

    // ───────────────────── Drill-down Tab ─────────────────────

    #[test]
    fn query_state_peaks_sorted_by_state() {
        let db = sample_db();
        let rows = db.query_state_peaks(Pollutant::O3).unwrap();
        let states: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, vec!["Arizona", "California", "Colorado"]);
        assert!(close(rows[0].mean_sum, 0.09));
        assert_eq!(rows[0].avg_max_hour, Some(10.75));
        assert_eq!(rows[1].avg_max_hour, Some(13.0));
    }

    #[test]
    fn query_state_peaks_all_missing_hour_is_none() {
        let db = sample_db();
        let rows = db.query_state_peaks(Pollutant::CO).unwrap();
        let colorado = rows.iter().find(|r| r.state == "Colorado").unwrap();
        assert_eq!(colorado.mean_sum, 0.0);
        assert_eq!(colorado.avg_max_hour, None);
    }

    #[test]
    fn query_daily_peaks_filters_state_and_range() {
        let db = sample_db();
        let rows = db.query_daily_peaks(Pollutant::O3, "Arizona", &january()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, d(2010, 1, 1));
        assert!(close(rows[0].mean_sum, 0.06));
        assert_eq!(rows[0].avg_max_hour, Some(11.0));
        assert_eq!(rows[1].avg_max_hour, Some(10.0));

        let single_day = DateRange(d(2010, 1, 2), d(2010, 1, 2));
        assert_eq!(
            db.query_daily_peaks(Pollutant::O3, "Arizona", &single_day).unwrap().len(),
            1
        );
    }

    // ───────────────────── Distribution Tab ─────────────────────

    #[test]
    fn query_city_peak_hours_per_city() {
        let db = sample_db();
        let rows = db.query_city_peak_hours("Arizona", Pollutant::O3).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], CityPeakHours { city: "Phoenix".into(), hours: vec![9, 10] });
        assert_eq!(rows[1], CityPeakHours { city: "Tucson".into(), hours: vec![11, 13] });
    }

    #[test]
    fn query_city_peak_hours_keeps_city_without_readings() {
        let db = sample_db();
        let rows = db.query_city_peak_hours("Colorado", Pollutant::CO).unwrap();
        assert_eq!(rows, vec![CityPeakHours { city: "Denver".into(), hours: vec![] }]);
    }

    #[test]
    fn query_city_all_peak_hours_splits_pollutants() {
        let db = sample_db();
        let hours = db.query_city_all_peak_hours("Arizona", "Tucson").unwrap();
        assert_eq!(hours.o3, vec![11, 13]);
        assert_eq!(hours.so2, vec![7, 9]);
        assert_eq!(hours.no2, vec![18, 20]);
        assert_eq!(hours.co, vec![0, 2]);

        let denver = db.query_city_all_peak_hours("Colorado", "Denver").unwrap();
        assert!(denver.co.is_empty());
        assert_eq!(denver.o3, vec![12, 14]);
    }

    // ───────────────────── Properties ─────────────────────

    const STATES: [&str; 3] = ["Alpha", "Beta", "Gamma"];
    const CITIES: [&str; 2] = ["North", "South"];
    const ZONES: [&str; 2] = ["Mountain Time Zone", "Pacific Time Zone"];

    #[derive(Debug, Clone)]
    struct GenRow {
        state: usize,
        city: usize,
        zone: usize,
        day: u32,
        o3_mean: Option<f64>,
    }

    fn arb_row() -> impl Strategy<Value = GenRow> {
        (0..3usize, 0..2usize, 0..2usize, 1..=10u32, prop::option::of(0.0f64..5.0)).prop_map(
            |(state, city, zone, day, o3_mean)| GenRow {
                state,
                city,
                zone,
                day,
                o3_mean,
            },
        )
    }

    fn load(rows: &[GenRow]) -> Database {
        let mut csv = format!("{}\n", HEADER);
        for r in rows {
            let mean = r.o3_mean.map(|v| v.to_string()).unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},2010-01-{:02},{},30,9,1.0,10,8,20.0,30,19,0.5,5,23\n",
                STATES[r.state], CITIES[r.city], ZONES[r.zone], r.day, mean
            ));
        }
        let db = Database::new().unwrap();
        db.load_records(&csv).unwrap();
        db
    }

    proptest! {
        #[test]
        fn prop_state_date_sums_are_associative(
            rows in prop::collection::vec(arb_row(), 0..40),
            start in 1..=10u32,
            len in 0..10u32,
        ) {
            let db = load(&rows);
            let end = (start + len).min(10);
            let range = DateRange(d(2010, 1, start), d(2010, 1, end));
            for zone in ZONES {
                let by_state_date = db.query_state_date_sums(zone, &range).unwrap();

                // Per-date totals from the partial (state, date) sums ...
                let mut from_partials: BTreeMap<NaiveDate, f64> = BTreeMap::new();
                for r in &by_state_date {
                    *from_partials.entry(r.date).or_default() += r.means.o3;
                }
                // ... equal per-date totals straight from the rows in the window.
                let mut direct: BTreeMap<NaiveDate, f64> = BTreeMap::new();
                let in_window = rows
                    .iter()
                    .filter(|r| ZONES[r.zone] == zone && r.day >= start && r.day <= end);
                for r in in_window.clone() {
                    *direct.entry(d(2010, 1, r.day)).or_default() += r.o3_mean.unwrap_or(0.0);
                }
                prop_assert_eq!(from_partials.len(), direct.len());
                for (date, total) in &direct {
                    prop_assert!((from_partials[date] - total).abs() < 1e-9);
                }

                // Per-state totals agree between the (state, date) and
                // (state, city) groupings.
                let by_state_city = db.query_state_city_sums(zone, &range).unwrap();
                let mut a: BTreeMap<&str, f64> = BTreeMap::new();
                for r in &by_state_date {
                    *a.entry(r.state.as_str()).or_default() += r.means.o3;
                }
                let mut b: BTreeMap<&str, f64> = BTreeMap::new();
                for r in &by_state_city {
                    *b.entry(r.state.as_str()).or_default() += r.means.o3;
                }
                prop_assert_eq!(a.len(), b.len());
                for (state, total) in &a {
                    prop_assert!((b[state] - total).abs() < 1e-9);
                }

                // Both groupings see exactly the states present in the window.
                let mut expected_states: Vec<&str> = in_window.map(|r| STATES[r.state]).collect();
                expected_states.sort_unstable();
                expected_states.dedup();
                prop_assert_eq!(b.keys().copied().collect::<Vec<_>>(), expected_states);
                for r in &by_state_date {
                    prop_assert!(range.contains(&r.date));
                }
            }
        }

        #[test]
        fn prop_filtered_records_match_selection(
            rows in prop::collection::vec(arb_row(), 0..40),
            zone in 0..2usize,
            start in 1..=10u32,
            len in 0..10u32,
        ) {
            let db = load(&rows);
            let end = (start + len).min(10);
            let range = DateRange(d(2010, 1, start), d(2010, 1, end));
            let kept = db.query_records(Some(ZONES[zone]), None, Some(&range)).unwrap();
            for r in &kept {
                prop_assert_eq!(r.time_zone.as_str(), ZONES[zone]);
                prop_assert!(range.contains(&r.date));
            }
            let expected = rows
                .iter()
                .filter(|r| r.zone == zone && r.day >= start && r.day <= end)
                .count();
            prop_assert_eq!(kept.len(), expected);
        }
    }
}

//! One runner per subcommand.

use crate::dataset::open_dataset;
use crate::output::{sink, write_json};
use crate::{Common, Window};
use anyhow::bail;
use aqw_charts::ChartTarget;
use aqw_core::dates::parse_date;
use aqw_core::{DateRange, Pollutant, PollutionRecord, SecondaryPollutant};
use aqw_views::{
    air_quality_view, distribution_view, drilldown_view, time_series_view, AirQualitySelection,
    DistributionSelection, DrilldownSelection, TimeSeriesSelection,
};
use chrono::NaiveDate;
use log::info;
use std::io::Write;

fn parse_window(window: &Window) -> anyhow::Result<DateRange> {
    Ok(DateRange(parse_date(&window.start)?, parse_date(&window.end)?))
}

fn parse_optional_date(value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    Ok(value.map(parse_date).transpose()?)
}

/// The optional `--start`/`--end` filter of `records`. Either both bounds or
/// neither must be given.
fn parse_optional_window(
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<Option<DateRange>> {
    let (start, end) = (parse_optional_date(start)?, parse_optional_date(end)?);
    if start.is_some() != end.is_some() {
        bail!("--start and --end must be given together");
    }
    Ok(DateRange::from_bounds(start, end))
}

pub fn run_summary(common: &Common) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    write_json(common, &db.query_summary()?)
}

pub fn run_time_series(
    common: &Common,
    time_zone: String,
    pollutant: Pollutant,
    window: &Window,
) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    let selection = TimeSeriesSelection {
        time_zone,
        pollutant,
        range: Some(parse_window(window)?),
    };
    let view = time_series_view(&db, &selection)?;
    info!("{}", view.narrative);
    write_json(common, &view)
}

pub fn run_air_quality(
    common: &Common,
    state: String,
    secondary: SecondaryPollutant,
) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    let selection = AirQualitySelection {
        state: Some(state),
        secondary,
    };
    let view = air_quality_view(&db, &selection)?;
    info!(
        "{} rows after outlier removal, correlation {:?}",
        view.retained_rows, view.correlation
    );
    write_json(common, &view)
}

pub fn run_drilldown(
    common: &Common,
    pollutant: Pollutant,
    window: &Window,
    hover: Option<String>,
) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    let selection = DrilldownSelection {
        pollutant,
        range: Some(parse_window(window)?),
        hover: hover.map(ChartTarget::named),
    };
    let view = drilldown_view(&db, &selection)?;
    if selection.hover.is_some() && view.resolved_state.is_none() {
        log::warn!("Hovered state is not in the dataset; showing the scatter only");
    }
    write_json(common, &view)
}

pub fn run_distribution(
    common: &Common,
    state: String,
    pollutant: Pollutant,
    city: Option<String>,
) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    let selection = DistributionSelection {
        state: Some(state),
        pollutant,
        click: city.map(ChartTarget::named),
    };
    let view = distribution_view(&db, &selection)?;
    if selection.click.is_some() && view.resolved_city.is_none() {
        log::warn!("Clicked city is not in the selected state; showing densities only");
    }
    write_json(common, &view)
}

pub fn run_records(
    common: &Common,
    time_zone: Option<String>,
    state: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> anyhow::Result<()> {
    let db = open_dataset(&common.dataset)?;
    let range = parse_optional_window(start.as_deref(), end.as_deref())?;
    let records = db.query_records(time_zone.as_deref(), state.as_deref(), range.as_ref())?;
    let out = sink(common)?;
    let written = write_records(out, &records)?;
    info!("Exported {} records", written);
    Ok(())
}

/// Write `records` as CSV with the dataset's own headers.
pub fn write_records<W: Write>(out: W, records: &[PollutionRecord]) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(records.len())
}

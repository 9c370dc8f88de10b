//! AQI tab: how ozone AQI tracks a second pollutant's AQI across the cities
//! of one state, and how each varies per city.

use crate::selection::AirQualitySelection;
use aqw_charts::palette::series_color;
use aqw_charts::{BoxTrace, Figure, Layout, Line, Marker, Mode, ScatterTrace, Trace};
use aqw_core::{Pollutant, SecondaryPollutant};
use aqw_data::{linear_fit, pearson, remove_outliers_iqr, round_to, IQR_THRESHOLD};
use aqw_db::models::CityDateAqi;
use aqw_db::Database;
use serde::Serialize;

/// Columns screened for outliers, in screening order.
pub const OUTLIER_COLUMNS: [Pollutant; 4] =
    [Pollutant::O3, Pollutant::CO, Pollutant::SO2, Pollutant::NO2];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityView {
    pub scatter: Figure,
    pub ozone_box: Figure,
    pub secondary_box: Figure,
    /// Pearson r of ozone vs secondary AQI, 3 decimals. `None` when it
    /// cannot be computed.
    pub correlation: Option<f64>,
    /// (city, date) rows left after outlier removal.
    pub retained_rows: usize,
}

pub fn scatter_title(secondary: SecondaryPollutant, correlation: Option<f64>) -> String {
    let r = match correlation {
        Some(r) => format!("{:.3}", r),
        None => "n/a".to_string(),
    };
    format!(
        "{} AQI vs Ozone (O3) AQI Across Cities (Overall Correlation: {})",
        secondary, r
    )
}

/// Ozone is spelled out on this tab; the others go by formula.
fn display_name(pollutant: Pollutant) -> String {
    match pollutant {
        Pollutant::O3 => pollutant.label(),
        other => other.code().to_string(),
    }
}

fn aqi_label(pollutant: Pollutant) -> String {
    format!("{} Air Quality Index (AQI)", display_name(pollutant))
}

pub fn air_quality_view(
    db: &Database,
    selection: &AirQualitySelection,
) -> anyhow::Result<AirQualityView> {
    let secondary = selection.secondary.pollutant();
    let rows = match selection.state.as_deref() {
        Some(state) => db.query_city_date_aqi(state)?,
        None => {
            log::warn!("air_quality: no state selected");
            Vec::new()
        }
    };

    let filtered = remove_outliers_iqr(&rows, &OUTLIER_COLUMNS, IQR_THRESHOLD, |row, p| {
        *row.aqi.get(*p)
    });
    log::info!(
        "[AQW Debug] air_quality: {} of {} city/date rows kept after IQR filter",
        filtered.len(),
        rows.len()
    );

    let correlation = overall_correlation(&filtered, secondary);
    let cities = city_groups(&filtered);

    Ok(AirQualityView {
        scatter: scatter_figure(&cities, selection.secondary, correlation),
        ozone_box: box_figure(&cities, Pollutant::O3),
        secondary_box: box_figure(&cities, secondary),
        correlation,
        retained_rows: filtered.len(),
    })
}

/// Pearson r over every retained (city, date) row. Needs at least two
/// distinct cities.
pub fn overall_correlation(rows: &[CityDateAqi], secondary: Pollutant) -> Option<f64> {
    let first_city = rows.first().map(|r| r.city.as_str())?;
    if rows.iter().all(|r| r.city == first_city) {
        log::debug!("air_quality: single city, correlation undefined");
        return None;
    }
    let (xs, ys) = paired(rows, secondary);
    pearson(&xs, &ys).map(|r| round_to(r, 3))
}

fn paired<'a>(
    rows: impl IntoIterator<Item = &'a CityDateAqi>,
    secondary: Pollutant,
) -> (Vec<f64>, Vec<f64>) {
    rows.into_iter()
        .filter_map(|r| Some(((*r.aqi.get(Pollutant::O3))?, (*r.aqi.get(secondary))?)))
        .unzip()
}

/// Rows arrive ordered by city, so each city is one contiguous run.
fn city_groups(rows: &[CityDateAqi]) -> Vec<(&str, &[CityDateAqi])> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let city = rows[start].city.as_str();
        let end = start + rows[start..].iter().take_while(|r| r.city == city).count();
        groups.push((city, &rows[start..end]));
        start = end;
    }
    groups
}

fn scatter_figure(
    cities: &[(&str, &[CityDateAqi])],
    secondary: SecondaryPollutant,
    correlation: Option<f64>,
) -> Figure {
    let pollutant = secondary.pollutant();
    let mut traces = Vec::new();
    for (i, (city, rows)) in cities.iter().enumerate() {
        let color = series_color(i);
        let (xs, ys) = paired(rows.iter(), pollutant);

        let mut points = ScatterTrace::new(
            Some(city.to_string()),
            xs.clone().into(),
            ys.clone().into(),
            Mode::Markers,
        );
        points.marker = Some(Marker::colored(color));
        points.legendgroup = Some(city.to_string());
        traces.push(Trace::Scatter(points));

        if let Some(fit) = linear_fit(&xs, &ys) {
            let fitted: Vec<f64> = xs.iter().map(|x| fit.predict(*x)).collect();
            let mut trend = ScatterTrace::new(
                Some(city.to_string()),
                xs.into(),
                fitted.into(),
                Mode::Lines,
            );
            trend.line = Some(Line::colored(color));
            trend.legendgroup = Some(city.to_string());
            trend.showlegend = Some(false);
            traces.push(Trace::Scatter(trend));
        }
    }

    let layout = Layout::new(&scatter_title(secondary, correlation))
        .with_axes(aqi_label(Pollutant::O3), aqi_label(pollutant));
    Figure::new(traces, layout)
}

fn box_figure(cities: &[(&str, &[CityDateAqi])], pollutant: Pollutant) -> Figure {
    let traces = cities
        .iter()
        .enumerate()
        .map(|(i, (city, rows))| {
            let ys: Vec<f64> = rows.iter().filter_map(|r| *r.aqi.get(pollutant)).collect();
            Trace::Box(BoxTrace {
                name: Some(city.to_string()),
                x: vec![city.to_string(); ys.len()].into(),
                y: ys.into(),
                marker: Some(Marker::colored(series_color(i))),
                offsetgroup: Some(city.to_string()),
            })
        })
        .collect();

    let mut layout = Layout::new(&format!(
        "Variation in {} AQI Across Cities",
        display_name(pollutant)
    ))
    .with_axes("City", aqi_label(pollutant));
    layout.boxmode = Some("group".to_string());
    Figure::new(traces, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::db_from_rows;
    use aqw_charts::Values;

    /// Mesa and Tempe, four days each. CO AQI is a tenth of O3 AQI; SO2 and
    /// NO2 are constant.
    fn linear_db() -> Database {
        db_from_rows(
            "\
Arizona,Mesa,Mountain Time Zone,2010-01-01,0.01,10,8,0.1,5,1,1.0,7,1,0.1,1,1
Arizona,Mesa,Mountain Time Zone,2010-01-02,0.01,20,8,0.1,5,1,1.0,7,1,0.1,2,1
Arizona,Mesa,Mountain Time Zone,2010-01-03,0.01,30,8,0.1,5,1,1.0,7,1,0.1,3,1
Arizona,Mesa,Mountain Time Zone,2010-01-04,0.01,40,8,0.1,5,1,1.0,7,1,0.1,4,1
Arizona,Tempe,Mountain Time Zone,2010-01-01,0.01,15,8,0.1,5,1,1.0,7,1,0.1,1.5,1
Arizona,Tempe,Mountain Time Zone,2010-01-02,0.01,25,8,0.1,5,1,1.0,7,1,0.1,2.5,1
Arizona,Tempe,Mountain Time Zone,2010-01-03,0.01,35,8,0.1,5,1,1.0,7,1,0.1,3.5,1
Arizona,Tempe,Mountain Time Zone,2010-01-04,0.01,45,8,0.1,5,1,1.0,7,1,0.1,4.5,1
Utah,Provo,Mountain Time Zone,2010-01-01,0.01,99,8,0.1,5,1,1.0,7,1,0.1,1,1
",
        )
    }

    fn select(state: &str, secondary: SecondaryPollutant) -> AirQualitySelection {
        AirQualitySelection {
            state: Some(state.to_string()),
            secondary,
        }
    }

    #[test]
    fn perfectly_linear_cities_correlate_fully() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Arizona", SecondaryPollutant::CO)).unwrap();
        assert_eq!(view.correlation, Some(1.0));
        assert_eq!(view.retained_rows, 8);
        assert_eq!(
            view.scatter.title(),
            "CO AQI vs Ozone (O3) AQI Across Cities (Overall Correlation: 1.000)"
        );
    }

    #[test]
    fn scatter_has_points_and_hidden_trend_per_city() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Arizona", SecondaryPollutant::CO)).unwrap();
        assert_eq!(
            view.scatter.trace_names(),
            vec![Some("Mesa"), Some("Mesa"), Some("Tempe"), Some("Tempe")]
        );
        let Trace::Scatter(trend) = &view.scatter.data[1] else {
            panic!("expected scatter");
        };
        assert_eq!(trend.mode, Mode::Lines);
        assert_eq!(trend.showlegend, Some(false));
        let v = serde_json::to_value(&view.scatter).unwrap();
        assert_eq!(v["layout"]["xaxis"]["title"]["text"], "Ozone (O3) Air Quality Index (AQI)");
        assert_eq!(v["layout"]["yaxis"]["title"]["text"], "CO Air Quality Index (AQI)");
    }

    #[test]
    fn constant_secondary_has_no_correlation() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Arizona", SecondaryPollutant::SO2)).unwrap();
        assert_eq!(view.correlation, None);
        assert!(view.scatter.title().ends_with("(Overall Correlation: n/a)"));
    }

    #[test]
    fn single_city_state_reports_sentinel() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Utah", SecondaryPollutant::CO)).unwrap();
        assert_eq!(view.correlation, None);
        assert!(view.scatter.title().contains("n/a"));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["correlation"].is_null());
    }

    #[test]
    fn outliers_are_removed_before_correlation() {
        let db = db_from_rows(
            "\
Nevada,Reno,Pacific Time Zone,2010-01-01,0.01,10,8,0.1,5,1,1.0,7,1,0.1,1,1
Nevada,Reno,Pacific Time Zone,2010-01-02,0.01,11,8,0.1,5,1,1.0,7,1,0.1,2,1
Nevada,Reno,Pacific Time Zone,2010-01-03,0.01,12,8,0.1,5,1,1.0,7,1,0.1,3,1
Nevada,Reno,Pacific Time Zone,2010-01-04,0.01,500,8,0.1,5,1,1.0,7,1,0.1,4,1
Nevada,Vegas,Pacific Time Zone,2010-01-01,0.01,13,8,0.1,5,1,1.0,7,1,0.1,4,1
",
        );
        let view = air_quality_view(&db, &select("Nevada", SecondaryPollutant::CO)).unwrap();
        assert_eq!(view.retained_rows, 4);
        assert_eq!(view.correlation, Some(1.0));
    }

    #[test]
    fn box_plots_group_by_city() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Arizona", SecondaryPollutant::NO2)).unwrap();
        assert_eq!(view.ozone_box.title(), "Variation in Ozone (O3) AQI Across Cities");
        assert_eq!(view.secondary_box.title(), "Variation in NO2 AQI Across Cities");
        assert_eq!(view.ozone_box.trace_names(), vec![Some("Mesa"), Some("Tempe")]);
        assert_eq!(view.ozone_box.layout.boxmode.as_deref(), Some("group"));
        let Trace::Box(mesa) = &view.ozone_box.data[0] else {
            panic!("expected box");
        };
        assert_eq!(mesa.y, Values::Numbers(vec![10.0, 20.0, 30.0, 40.0]));
    }

    #[test]
    fn missing_state_gives_empty_figures() {
        let db = linear_db();
        let sel = AirQualitySelection {
            state: None,
            secondary: SecondaryPollutant::CO,
        };
        let view = air_quality_view(&db, &sel).unwrap();
        assert!(view.scatter.is_empty());
        assert!(view.ozone_box.is_empty());
        assert!(view.secondary_box.is_empty());
        assert_eq!(view.correlation, None);
    }

    #[test]
    fn unknown_state_gives_empty_figures() {
        let db = linear_db();
        let view = air_quality_view(&db, &select("Atlantis", SecondaryPollutant::CO)).unwrap();
        assert!(view.scatter.is_empty());
        assert_eq!(view.retained_rows, 0);
    }
}

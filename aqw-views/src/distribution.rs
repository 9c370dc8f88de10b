//! Distribution tab: when in the day each city's pollution peaks.

use crate::selection::DistributionSelection;
use aqw_charts::palette::{series_color, HISTOGRAM_COLOR};
use aqw_charts::{
    Figure, HistogramTrace, Layout, Line, Marker, Mode, ScatterTrace, SeriesIndex, Trace, XBins,
};
use aqw_core::{PerPollutant, Pollutant};
use aqw_data::{gaussian_kde, KDE_BANDWIDTH, KDE_POINTS};
use aqw_db::models::CityPeakHours;
use aqw_db::Database;
use serde::Serialize;

/// Order of the per-city peak hour histograms.
pub const CITY_HISTOGRAM_ORDER: [Pollutant; 4] =
    [Pollutant::O3, Pollutant::NO2, Pollutant::SO2, Pollutant::CO];

const DENSITY_OPACITY: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionView {
    pub density: Figure,
    /// Cities behind each density trace: histograms first, then KDE curves.
    pub cities: SeriesIndex,
    pub resolved_city: Option<String>,
    /// One histogram per pollutant in [`CITY_HISTOGRAM_ORDER`].
    pub city_histograms: Vec<Figure>,
}

pub fn density_title(pollutant: Pollutant, state: &str) -> String {
    format!("Distribution of {} 1st Max Hour in {}", pollutant.code(), state)
}

pub fn histogram_title(pollutant: Pollutant, city: &str) -> String {
    format!("Hourly Distribution of {} Peaks in {}", pollutant.code(), city)
}

pub fn distribution_view(
    db: &Database,
    selection: &DistributionSelection,
) -> anyhow::Result<DistributionView> {
    let pollutant = selection.pollutant;
    let Some(state) = selection.state.as_deref() else {
        log::warn!("distribution: no state selected");
        return Ok(DistributionView {
            density: Figure::empty(""),
            cities: SeriesIndex::default(),
            resolved_city: None,
            city_histograms: empty_histograms(),
        });
    };

    let peaks = db.query_city_peak_hours(state, pollutant)?;
    let cities = SeriesIndex::layered(peaks.iter().map(|c| c.city.clone()).collect(), 2);
    let density = density_figure(&peaks, pollutant, state);

    let resolved_city = selection
        .click
        .as_ref()
        .and_then(|target| cities.resolve(target))
        .map(str::to_string);

    let city_histograms = match &resolved_city {
        Some(city) => {
            let hours = db.query_city_all_peak_hours(state, city)?;
            city_histograms(&hours, city)
        }
        None => empty_histograms(),
    };

    Ok(DistributionView {
        density,
        cities,
        resolved_city,
        city_histograms,
    })
}

fn as_f64(hours: &[u32]) -> Vec<f64> {
    hours.iter().map(|h| f64::from(*h)).collect()
}

/// Every city's normalised histogram, then every city's KDE curve.
fn density_figure(peaks: &[CityPeakHours], pollutant: Pollutant, state: &str) -> Figure {
    let mut histograms = Vec::with_capacity(peaks.len());
    let mut curves = Vec::with_capacity(peaks.len());

    for (i, city) in peaks.iter().enumerate() {
        let color = series_color(i);
        let values = as_f64(&city.hours);

        histograms.push(Trace::Histogram(HistogramTrace {
            name: Some(city.city.clone()),
            x: values.clone().into(),
            histnorm: Some("probability density".to_string()),
            xbins: Some(XBins::hourly()),
            marker: Some(Marker::colored(color)),
            opacity: Some(DENSITY_OPACITY),
            legendgroup: Some(city.city.clone()),
            showlegend: None,
        }));

        let kde = gaussian_kde(&values, KDE_BANDWIDTH, KDE_POINTS);
        let mut curve = ScatterTrace::new(
            Some(city.city.clone()),
            kde.x.into(),
            kde.y.into(),
            Mode::Lines,
        );
        curve.line = Some(Line::colored(color));
        curve.legendgroup = Some(city.city.clone());
        curve.showlegend = Some(false);
        curves.push(Trace::Scatter(curve));
    }

    histograms.extend(curves);
    let code = pollutant.code();
    let mut layout = Layout::new(&density_title(pollutant, state))
        .with_axes(format!("{} 1st Max Hour", code), "Density");
    layout.barmode = Some("overlay".to_string());
    Figure::new(histograms, layout)
}

fn city_histograms(hours: &PerPollutant<Vec<u32>>, city: &str) -> Vec<Figure> {
    CITY_HISTOGRAM_ORDER
        .iter()
        .map(|&pollutant| {
            let values = hours.get(pollutant);
            let code = pollutant.code();
            let layout = Layout::new(&histogram_title(pollutant, city))
                .with_axes(format!("{} First Max Hour", code), "Frequency");
            if values.is_empty() {
                log::debug!("distribution: no {} peak hours for {}", code, city);
                return Figure::new(Vec::new(), layout);
            }
            let trace = Trace::Histogram(HistogramTrace {
                name: Some(code.to_string()),
                x: as_f64(values).into(),
                histnorm: None,
                xbins: Some(XBins::hourly()),
                marker: Some(Marker::colored(HISTOGRAM_COLOR)),
                opacity: None,
                legendgroup: None,
                showlegend: None,
            });
            Figure::new(vec![trace], layout)
        })
        .collect()
}

fn empty_histograms() -> Vec<Figure> {
    CITY_HISTOGRAM_ORDER.iter().map(|_| Figure::empty("")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::db_from_rows;
    use aqw_charts::ChartTarget;

    /// Tucson has no CO readings. Yuma has no O3 hours at all.
    fn db() -> Database {
        db_from_rows(
            "\
Arizona,Tucson,Mountain Time Zone,2010-01-01,0.01,20,11,0.5,4,7,10.0,20,18,,,
Arizona,Tucson,Mountain Time Zone,2010-01-02,0.03,40,13,1.5,8,9,14.0,24,20,,,
Arizona,Phoenix,Mountain Time Zone,2010-01-01,0.02,30,9,1.0,10,8,20.0,30,19,0.5,5,23
Arizona,Yuma,Mountain Time Zone,2010-01-01,,,,1.0,10,8,20.0,30,19,0.5,5,23
Utah,Provo,Mountain Time Zone,2010-01-01,0.02,30,9,1.0,10,8,20.0,30,19,0.5,5,23
",
        )
    }

    fn clicking(target: Option<ChartTarget>) -> DistributionSelection {
        DistributionSelection {
            state: Some("Arizona".into()),
            pollutant: Pollutant::O3,
            click: target,
        }
    }

    #[test]
    fn histograms_precede_kde_curves() {
        let view = distribution_view(&db(), &clicking(None)).unwrap();
        assert_eq!(
            view.density.trace_names(),
            vec![
                Some("Phoenix"),
                Some("Tucson"),
                Some("Yuma"),
                Some("Phoenix"),
                Some("Tucson"),
                Some("Yuma"),
            ]
        );
        assert!(matches!(view.density.data[0], Trace::Histogram(_)));
        assert!(matches!(view.density.data[3], Trace::Scatter(_)));
        assert_eq!(view.density.title(), "Distribution of O3 1st Max Hour in Arizona");
        assert_eq!(view.density.layout.barmode.as_deref(), Some("overlay"));

        let v = serde_json::to_value(&view.density).unwrap();
        assert_eq!(v["data"][1]["histnorm"], "probability density");
        assert_eq!(v["data"][1]["opacity"], 0.75);
        assert_eq!(v["data"][4]["x"].as_array().unwrap().len(), KDE_POINTS);
        assert_eq!(v["data"][4]["x"][0], 11.0);
        assert!((v["data"][4]["x"][KDE_POINTS - 1].as_f64().unwrap() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn city_without_hours_gets_empty_traces() {
        let view = distribution_view(&db(), &clicking(None)).unwrap();
        let Trace::Scatter(yuma_curve) = &view.density.data[5] else {
            panic!("expected scatter");
        };
        assert!(yuma_curve.x.is_empty());
    }

    #[test]
    fn no_click_gives_four_empty_histograms() {
        let view = distribution_view(&db(), &clicking(None)).unwrap();
        assert!(view.resolved_city.is_none());
        assert_eq!(view.city_histograms.len(), 4);
        assert!(view.city_histograms.iter().all(Figure::is_empty));
    }

    #[test]
    fn click_on_kde_curve_resolves_city() {
        // curve 4 is Tucson's KDE line
        let view = distribution_view(&db(), &clicking(Some(ChartTarget::curve(4)))).unwrap();
        assert_eq!(view.resolved_city.as_deref(), Some("Tucson"));
    }

    #[test]
    fn missing_pollutant_histogram_is_empty_others_render() {
        let view = distribution_view(&db(), &clicking(Some(ChartTarget::named("Tucson")))).unwrap();
        let titles: Vec<&str> = view.city_histograms.iter().map(Figure::title).collect();
        assert_eq!(
            titles,
            vec![
                "Hourly Distribution of O3 Peaks in Tucson",
                "Hourly Distribution of NO2 Peaks in Tucson",
                "Hourly Distribution of SO2 Peaks in Tucson",
                "Hourly Distribution of CO Peaks in Tucson",
            ]
        );
        assert!(!view.city_histograms[0].is_empty());
        assert!(!view.city_histograms[1].is_empty());
        assert!(!view.city_histograms[2].is_empty());
        assert!(view.city_histograms[3].is_empty());

        let v = serde_json::to_value(&view.city_histograms[1]).unwrap();
        assert_eq!(v["data"][0]["x"], serde_json::json!([18.0, 20.0]));
        assert_eq!(v["data"][0]["marker"]["color"], "turquoise");
        assert_eq!(v["layout"]["yaxis"]["title"]["text"], "Frequency");
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let view = distribution_view(&db(), &clicking(Some(ChartTarget::curve(6)))).unwrap();
        assert!(view.resolved_city.is_none());
        assert!(view.city_histograms.iter().all(Figure::is_empty));
    }

    #[test]
    fn city_from_another_state_is_stale() {
        let view = distribution_view(&db(), &clicking(Some(ChartTarget::named("Provo")))).unwrap();
        assert!(view.resolved_city.is_none());
    }

    #[test]
    fn missing_state_degrades() {
        let sel = DistributionSelection {
            state: None,
            ..clicking(Some(ChartTarget::curve(0)))
        };
        let view = distribution_view(&db(), &sel).unwrap();
        assert!(view.density.is_empty());
        assert!(view.cities.is_empty());
        assert_eq!(view.city_histograms.len(), 4);
    }
}

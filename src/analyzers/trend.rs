use std::collections::BTreeMap;

use crate::analyzers::statistics::MeanAccumulator;
use crate::error::{AggregateKind, EmptyAggregateWarning};
use crate::models::{ObservationDataset, Pollutant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub value: f64,
}

/// One station's line: yearly values in ascending year order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub station: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendAggregate {
    pub parameter: Pollutant,
    pub series: Vec<TrendSeries>,
}

impl TrendAggregate {
    /// Flattened `(year, station, value)` view, series by series.
    pub fn triples(&self) -> impl Iterator<Item = (i32, &str, f64)> + '_ {
        self.series.iter().flat_map(|s| {
            s.points
                .iter()
                .map(move |p| (p.year, s.station.as_str(), p.value))
        })
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.triples().map(|(year, _, _)| year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Smallest and largest finite value.
    pub fn value_span(&self) -> Option<(f64, f64)> {
        let mut values = self
            .triples()
            .map(|(_, _, value)| value)
            .filter(|v| v.is_finite());
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn warnings(&self) -> Vec<EmptyAggregateWarning> {
        self.series
            .iter()
            .filter(|s| s.points.is_empty())
            .map(|s| {
                EmptyAggregateWarning::new(
                    AggregateKind::Trend,
                    format!("no {} values for station {}", self.parameter, s.station),
                )
            })
            .collect()
    }
}

/// Yearly mean of `parameter` per station.
///
/// Every station in the dataset gets a series, in first-appearance order.
/// Years without a present value are left out rather than interpolated.
pub fn aggregate_trend(dataset: &ObservationDataset, parameter: Pollutant) -> TrendAggregate {
    let mut per_station: Vec<BTreeMap<i32, MeanAccumulator>> =
        vec![BTreeMap::new(); dataset.stations().len()];

    for obs in dataset.observations() {
        let value = obs.pollutant(parameter);
        if value.is_nan() {
            continue;
        }
        if let Some(index) = dataset.station_index(&obs.station) {
            per_station[index].entry(obs.year).or_default().push(value);
        }
    }

    let series: Vec<TrendSeries> = dataset
        .stations()
        .iter()
        .zip(per_station)
        .map(|(station, years)| TrendSeries {
            station: station.clone(),
            points: years
                .into_iter()
                .map(|(year, acc)| TrendPoint {
                    year,
                    value: acc.mean(),
                })
                .collect(),
        })
        .collect();

    let aggregate = TrendAggregate { parameter, series };
    debug!(
        "Trend for {}: {} series, {} points",
        parameter,
        aggregate.series.len(),
        aggregate.point_count()
    );
    aggregate
}

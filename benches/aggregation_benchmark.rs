use air_quality_dashboard::analyzers::{aggregate_trend, compare_stations, correlation_matrix};
use air_quality_dashboard::models::{
    ControlState, Measurement, Observation, ObservationDataset, Pollutant, PARAMETER_THRESHOLDS,
};
use air_quality_dashboard::processors::InteractionHandler;
use air_quality_dashboard::readers::ObservationReader;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Hourly-style rows for a handful of stations over 2013-2017
fn create_test_dataset(station_count: usize, rows_per_year: usize) -> ObservationDataset {
    let mut observations = Vec::with_capacity(station_count * rows_per_year * 5);
    for station in 0..station_count {
        let name = format!("Station {}", station);
        for year in 2013..=2017 {
            for row in 0..rows_per_year {
                let base = (station * 7 + row) as f64;
                let mut obs = Observation::new(&name, year);
                for (i, measurement) in Measurement::ALL.iter().enumerate() {
                    // Leave a sprinkling of gaps, like the real data
                    if (row + i) % 37 == 0 {
                        continue;
                    }
                    obs.set_value(*measurement, base * (i as f64 + 1.0) + (year - 2013) as f64);
                }
                observations.push(obs);
            }
        }
    }
    ObservationDataset::new(observations).expect("benchmark dataset is non-empty")
}

fn create_test_csv(dataset: &ObservationDataset) -> String {
    let mut csv = String::from(
        "No,year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,TEMP,PRES,DEWP,RAIN,wd,WSPM,station\n",
    );
    let order = [5, 6, 7, 8, 9, 10, 0, 1, 2, 3];
    for (no, obs) in dataset.observations().iter().enumerate() {
        let values = obs.values();
        let cell = |i: usize| {
            if values[i].is_nan() {
                "NA".to_string()
            } else {
                values[i].to_string()
            }
        };
        let cells: Vec<String> = order.iter().map(|&i| cell(i)).collect();
        csv.push_str(&format!(
            "{},{},1,1,0,{},N,{},{}\n",
            no + 1,
            obs.year,
            cells.join(","),
            cell(4),
            obs.station
        ));
    }
    csv
}

fn benchmark_trend(c: &mut Criterion) {
    let dataset = create_test_dataset(12, 200);
    c.bench_function("trend_aggregate", |b| {
        b.iter(|| black_box(aggregate_trend(&dataset, Pollutant::Pm25).point_count()))
    });
}

fn benchmark_correlation(c: &mut Criterion) {
    let dataset = create_test_dataset(12, 200);
    c.bench_function("correlation_matrix", |b| {
        b.iter(|| black_box(correlation_matrix(&dataset).size()))
    });
}

fn benchmark_range_comparison(c: &mut Criterion) {
    let dataset = create_test_dataset(12, 200);
    c.bench_function("range_comparison", |b| {
        b.iter(|| black_box(compare_stations(&dataset, 2015, 2017).panels.len()))
    });
}

fn benchmark_csv_parsing(c: &mut Criterion) {
    let csv = create_test_csv(&create_test_dataset(12, 50));
    let path = std::path::Path::new("bench.csv");
    c.bench_function("csv_parsing", |b| {
        b.iter(|| {
            let observations = ObservationReader::new()
                .read_observations(csv.as_bytes(), path)
                .expect("benchmark CSV parses");
            black_box(observations.len())
        })
    });
}

fn benchmark_interaction_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction_by_size");

    for &rows in &[10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("rows_per_year", rows), &rows, |b, &rows| {
            let dataset = create_test_dataset(12, rows);
            let handler = InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS);
            let controls = ControlState::initial(dataset.year_bounds(), 2015, 2017);
            b.iter(|| black_box(handler.handle(&controls).warnings.len()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_trend,
    benchmark_correlation,
    benchmark_range_comparison,
    benchmark_csv_parsing,
    benchmark_interaction_by_size
);
criterion_main!(benches);

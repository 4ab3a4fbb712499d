use crate::analyzers::statistics::pearson_pairwise;
use crate::error::{AggregateKind, EmptyAggregateWarning};
use crate::models::{Measurement, ObservationDataset};
use tracing::debug;

/// Square Pearson matrix over a fixed list of measurement columns.
/// Undefined coefficients are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    columns: Vec<Measurement>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[Measurement] {
        &self.columns
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size() + col]
    }

    pub fn between(&self, a: Measurement, b: Measurement) -> Option<f64> {
        let row = self.columns.iter().position(|c| *c == a)?;
        let col = self.columns.iter().position(|c| *c == b)?;
        Some(self.get(row, col))
    }

    /// NaN-aware symmetry check: NaN mirrors NaN.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            (0..n).all(|j| {
                let (a, b) = (self.get(i, j), self.get(j, i));
                (a.is_nan() && b.is_nan()) || a == b
            })
        })
    }

    /// Columns with at least one undefined coefficient: no variance, or
    /// fewer than two complete pairs with some other column.
    pub fn undefined_columns(&self) -> Vec<Measurement> {
        let n = self.size();
        (0..n)
            .filter(|&i| (0..n).any(|j| self.get(i, j).is_nan()))
            .map(|i| self.columns[i])
            .collect()
    }

    pub fn warnings(&self) -> Vec<EmptyAggregateWarning> {
        let n = self.size();
        self.undefined_columns()
            .into_iter()
            .filter_map(|column| {
                let i = self.columns.iter().position(|c| *c == column)?;
                let undefined: Vec<&str> = (0..n)
                    .filter(|&j| self.get(i, j).is_nan())
                    .map(|j| self.columns[j].name())
                    .collect();
                Some(EmptyAggregateWarning::new(
                    AggregateKind::Correlation,
                    format!(
                        "correlations of {} with {} are undefined",
                        column,
                        undefined.join(", ")
                    ),
                ))
            })
            .collect()
    }
}

/// Correlation between the five weather and six pollutant columns.
pub fn correlation_matrix(dataset: &ObservationDataset) -> CorrelationMatrix {
    correlation_matrix_for(dataset, &Measurement::ALL)
}

pub fn correlation_matrix_for(
    dataset: &ObservationDataset,
    columns: &[Measurement],
) -> CorrelationMatrix {
    let data: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| {
            dataset
                .observations()
                .iter()
                .map(|obs| obs.value(*column))
                .collect()
        })
        .collect();

    let n = columns.len();
    let mut values = vec![f64::NAN; n * n];
    for i in 0..n {
        for j in i..n {
            let r = pearson_pairwise(&data[i], &data[j]);
            // Defined self-correlation is exactly 1
            let r = if i == j && !r.is_nan() { 1.0 } else { r };
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }

    let matrix = CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    };
    debug!(
        "Correlation matrix {}x{}, {} undefined columns",
        n,
        n,
        matrix.undefined_columns().len()
    );
    matrix
}

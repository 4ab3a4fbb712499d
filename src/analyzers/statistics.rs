/// Running mean that skips missing (NaN) and non-finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.sum += value;
            self.count += 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// NaN when nothing was accumulated.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Pearson correlation over the positions where both inputs are present.
///
/// Returns NaN with fewer than two complete pairs or when either side is
/// constant over those pairs.
pub fn pearson_pairwise(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (*x, *y))
        .collect();

    if pairs.len() < 2 || is_constant(pairs.iter().map(|p| p.0)) || is_constant(pairs.iter().map(|p| p.1)) {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

fn is_constant<I: Iterator<Item = f64>>(mut values: I) -> bool {
    match values.next() {
        None => true,
        Some(first) => values.all(|v| v == first),
    }
}

//! Descriptive statistics over plain `f64` slices.
//!
//! Every function returns `NaN` where the statistic is undefined for
//! the input (empty input, or a single value for the deviation).

/// Calculates the mean of a set of values
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculates the sample standard deviation (n-1 denominator)
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return f64::NAN;
    }

    let mean = mean(values);
    let variance = values
        .iter()
        .map(|&value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    variance.sqrt()
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

/// The `q` quantile (`0.0..=1.0`) of already sorted values, linearly
/// interpolated between the two closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

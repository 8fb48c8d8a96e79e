/// Median of the samples, averaging the two middle values for even lengths.
///
/// Returns `None` for an empty sample. Input order does not matter.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    let value = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(value)
}

/// Sample standard deviation (divisor `n - 1`).
///
/// With one sample or none there is no observable dispersion, so this
/// returns `0.0` instead of dividing by zero.
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n <= 1 {
        return 0.0;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let squared_deviations: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();

    (squared_deviations / (n - 1) as f64).sqrt()
}

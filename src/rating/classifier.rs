use super::types::{Polarity, Rating};

/// Classifies `score` against a league distribution.
///
/// Buckets for higher-is-better metrics:
///
/// | condition                              | rating       |
/// |----------------------------------------|--------------|
/// | `score < median - std_dev`             | Bottom       |
/// | `median - std_dev <= score < median`   | BelowAverage |
/// | `score == median`                      | Average      |
/// | `median < score <= median + std_dev`   | AboveAverage |
/// | `score > median + std_dev`             | Top          |
///
/// Lower-is-better metrics take the mirrored bucket, so the one-stddev
/// boundary always belongs to the inner bucket.
///
/// With `std_dev == 0` the inner buckets are empty: anything off the median
/// is Top or Bottom. NaN in any input yields `InsufficientData`.
pub fn classify(score: f64, median: f64, std_dev: f64, polarity: Polarity) -> Rating {
    if score.is_nan() || median.is_nan() || std_dev.is_nan() {
        return Rating::InsufficientData;
    }

    let rating = classify_higher_is_better(score, median, std_dev.abs());
    match polarity {
        Polarity::HigherIsBetter => rating,
        Polarity::LowerIsBetter => rating.invert(),
    }
}

/// Like [`classify`], but any missing statistic yields `InsufficientData`.
pub fn classify_sample(
    score: Option<f64>,
    median: Option<f64>,
    std_dev: Option<f64>,
    polarity: Polarity,
) -> Rating {
    match (score, median, std_dev) {
        (Some(score), Some(median), Some(std_dev)) => classify(score, median, std_dev, polarity),
        _ => Rating::InsufficientData,
    }
}

fn classify_higher_is_better(score: f64, median: f64, std_dev: f64) -> Rating {
    if score < median - std_dev {
        Rating::Bottom
    } else if score < median {
        Rating::BelowAverage
    } else if score > median + std_dev {
        Rating::Top
    } else if score > median {
        Rating::AboveAverage
    } else {
        Rating::Average
    }
}

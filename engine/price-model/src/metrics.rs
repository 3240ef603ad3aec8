//! Pure scoring helpers shared across calculators

/// Price units per value bucket (points per $100k)
const VALUE_PRICE_UNIT: f64 = 100_000.0;

/// Consistency returned when the spread cannot be measured
const NEUTRAL_CONSISTENCY: f64 = 50.0;

/// Round half up, matching how prices and scores are rounded everywhere
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Points per $100k of price; 0 when price is not positive
pub fn value_score(score: f64, price: i64) -> f64 {
    if price <= 0 {
        return 0.0;
    }
    score / (price as f64 / VALUE_PRICE_UNIT)
}

/// `clamp(100 - 200 * CV, 0, 100)` using the population standard deviation.
///
/// Empty input or a zero mean yields a neutral 50.
pub fn consistency_score(scores: &[f64]) -> f64 {
    let avg = mean(scores);
    if scores.is_empty() || avg == 0.0 {
        return NEUTRAL_CONSISTENCY;
    }

    let variance = scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / scores.len() as f64;
    let cv = variance.sqrt() / avg.abs();

    (100.0 - 200.0 * cv).clamp(0.0, 100.0)
}

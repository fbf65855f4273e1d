use hostdeck_models::CategoryRating;

/// Overall rating derived from a category list: 0 for an empty list,
/// otherwise the arithmetic mean with a missing per-category score
/// counting as 0, rounded half-up at the tenths digit.
pub fn average_of(categories: &[CategoryRating]) -> f64 {
    if categories.is_empty() {
        return 0.0;
    }
    let sum: f64 = categories.iter().map(|c| c.rating.unwrap_or(0.0)).sum();
    round_tenths(sum / categories.len() as f64)
}

pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

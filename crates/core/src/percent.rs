/// Formats a unit-interval value as a percentage with one decimal place.
///
/// `0.85` renders as `"85.0%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

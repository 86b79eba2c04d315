//! Utility functions
//!
//! Display formatting helpers used across the frontend.

/// Format a metric value the way the cards display it: whole numbers drop
/// the trailing ".0", everything else keeps up to two decimals.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Quantity plus a unit suffix, e.g. "5 bar" or "120 °C".
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{} {}", format_quantity(value), unit)
}

/// Efficiency score display. Rows with no valid score render as a dash.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format_quantity(value),
        None => "—".to_string(),
    }
}

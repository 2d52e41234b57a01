/// Format a playback position as `m:ss`.
///
/// Undefined, non-finite and negative inputs all render as `0:00` so the time
/// labels never show garbage while metadata is still loading.
pub fn format_time(seconds: Option<f64>) -> String {
    let total = match seconds {
        Some(secs) if secs.is_finite() && secs > 0.0 => secs.round() as u64,
        _ => 0,
    };
    format!("{}:{:02}", total / 60, total % 60)
}

//! Slider clock labels
//!
//! The time slider moves in half-hour steps over a 0-24 scale. Labels use a
//! 12-hour clock; any fractional hour is shown as `:30`.

/// Format a slider hour as `h:mm AM/PM`
///
/// ```
/// use storm_sim_core::clock::format_hour;
///
/// assert_eq!(format_hour(0.0), "12:00 AM");
/// assert_eq!(format_hour(9.5), "9:30 AM");
/// assert_eq!(format_hour(15.0), "3:00 PM");
/// ```
pub fn format_hour(hour: f64) -> String {
    let suffix = if hour >= 12.0 { "PM" } else { "AM" };
    let display_hour = (if hour > 12.0 { hour - 12.0 } else { hour }).floor() as i64;
    let display_hour = if display_hour == 0 { 12 } else { display_hour };
    let minutes = if hour.fract() == 0.0 { "00" } else { "30" };
    format!("{display_hour}:{minutes} {suffix}")
}

/// Finest slider step accepted by [`slider_hours`]: one minute
pub const MIN_SLIDER_STEP: f64 = 1.0 / 60.0;

/// Slider positions covering `[0, 24)` in steps of `step` hours
///
/// Returns an empty list for a step below [`MIN_SLIDER_STEP`] or a
/// non-finite step, so a day never holds more than 1440 positions.
pub fn slider_hours(step: f64) -> Vec<f64> {
    if step < MIN_SLIDER_STEP || !step.is_finite() {
        return Vec::new();
    }
    let count = (24.0 / step).ceil() as usize;
    (0..count)
        .map(|i| i as f64 * step)
        .filter(|h| *h < 24.0)
        .collect()
}

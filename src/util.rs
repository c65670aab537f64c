//! Small helpers shared by the store, the config loader and the CLI.
//!
//! This module provides:
//! - Width range enforcement for stroke widths and text sizes
//! - Parsing of `WIDTHxHEIGHT` window sizes

// ============================================================================
// Width Range
// ============================================================================

/// Smallest stroke width / text size the sliders can produce.
pub const MIN_WIDTH: f64 = 1.0;

/// Largest stroke width / text size the sliders can produce.
pub const MAX_WIDTH: f64 = 20.0;

/// Clamps a width into `MIN_WIDTH..=MAX_WIDTH`, logging any correction.
///
/// NaN maps to [`MIN_WIDTH`]; infinities clamp to the nearest bound.
pub fn clamp_width(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("Width is NaN, using {MIN_WIDTH:.1}");
        return MIN_WIDTH;
    }
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&value) {
        log::warn!("Width {value:.1} outside {MIN_WIDTH:.1}-{MAX_WIDTH:.1}, clamping");
        return value.clamp(MIN_WIDTH, MAX_WIDTH);
    }
    value
}

// ============================================================================
// Window Size
// ============================================================================

/// Parses `"800x600"` (also `800X600`) into `(width, height)`.
///
/// Returns `None` for missing parts, non-numbers, or zero/negative sizes.
pub fn parse_window_size(input: &str) -> Option<(f64, f64)> {
    let (width, height) = input.trim().split_once(['x', 'X'])?;
    let width: f64 = width.trim().parse().ok()?;
    let height: f64 = height.trim().parse().ok()?;
    (width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
        .then_some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_width_keeps_in_range_values() {
        assert_eq!(clamp_width(1.0), 1.0);
        assert_eq!(clamp_width(7.5), 7.5);
        assert_eq!(clamp_width(20.0), 20.0);
    }

    #[test]
    fn clamp_width_corrects_out_of_range_values() {
        assert_eq!(clamp_width(0.0), MIN_WIDTH);
        assert_eq!(clamp_width(-3.0), MIN_WIDTH);
        assert_eq!(clamp_width(64.0), MAX_WIDTH);
        assert_eq!(clamp_width(f64::NAN), MIN_WIDTH);
        assert_eq!(clamp_width(f64::INFINITY), MAX_WIDTH);
        assert_eq!(clamp_width(f64::NEG_INFINITY), MIN_WIDTH);
    }

    #[test]
    fn parse_window_size_accepts_common_forms() {
        assert_eq!(parse_window_size("1024x768"), Some((1024.0, 768.0)));
        assert_eq!(parse_window_size(" 390X844 "), Some((390.0, 844.0)));
    }

    #[test]
    fn parse_window_size_rejects_garbage() {
        assert_eq!(parse_window_size("1024"), None);
        assert_eq!(parse_window_size("x768"), None);
        assert_eq!(parse_window_size("0x768"), None);
        assert_eq!(parse_window_size("wide x tall"), None);
    }
}

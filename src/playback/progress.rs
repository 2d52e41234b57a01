use super::media::BufferedRange;

/// Share of `total` covered by `current`, as a CSS width such as `"42.17%"`.
///
/// The ratio is clamped to `[0, 1]` and rounded to hundredths of a percent.
pub fn percent(current: Option<f64>, total: Option<f64>) -> String {
    let (Some(current), Some(total)) = (current, total) else {
        return "0%".to_string();
    };
    if current.is_nan() || total.is_nan() || total == 0.0 {
        return "0%".to_string();
    }

    let ratio = current / total;
    if ratio.is_nan() || ratio <= 0.0 {
        return "0%".to_string();
    }
    let ratio = ratio.min(1.0);
    let value = (ratio * 10_000.0).round() / 100.0;
    format!("{value}%")
}

/// Furthest point any buffered range reaches, or 0 when nothing is buffered.
pub fn buffered_end(ranges: &[BufferedRange]) -> f64 {
    ranges
        .iter()
        .map(|range| range.end)
        .filter(|end| !end.is_nan())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn value_of(width: &str) -> f64 {
        width.trim_end_matches('%').parse().unwrap()
    }

    #[test]
    fn renders_rounded_percentages() {
        assert_eq!(percent(Some(90.0), Some(180.0)), "50%");
        assert_eq!(percent(Some(22.5), Some(180.0)), "12.5%");
        assert_eq!(percent(Some(1.0), Some(3.0)), "33.33%");
        assert_eq!(percent(Some(180.0), Some(180.0)), "100%");
        assert_eq!(percent(Some(0.0), Some(180.0)), "0%");
    }

    #[test]
    fn undefined_inputs_are_zero() {
        assert_eq!(percent(None, Some(10.0)), "0%");
        assert_eq!(percent(Some(1.0), None), "0%");
        assert_eq!(percent(Some(f64::NAN), Some(10.0)), "0%");
        assert_eq!(percent(Some(1.0), Some(f64::NAN)), "0%");
        assert_eq!(percent(Some(1.0), Some(0.0)), "0%");
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(percent(Some(500.0), Some(180.0)), "100%");
        assert_eq!(percent(Some(-5.0), Some(180.0)), "0%");
        assert_eq!(percent(Some(5.0), Some(-180.0)), "0%");
        assert_eq!(percent(Some(f64::INFINITY), Some(180.0)), "100%");
    }

    #[test]
    fn buffered_end_takes_furthest_range() {
        assert_eq!(buffered_end(&[]), 0.0);
        let ranges = [
            BufferedRange { start: 0.0, end: 12.5 },
            BufferedRange { start: 40.0, end: 95.0 },
            BufferedRange { start: 20.0, end: 30.0 },
        ];
        assert_eq!(buffered_end(&ranges), 95.0);
        assert_eq!(percent(Some(buffered_end(&ranges)), Some(190.0)), "50%");
    }

    proptest! {
        /// Result is always a percentage within [0, 100]
        #[test]
        fn stays_within_bounds(current in -1e6f64..1e6, total in -1e6f64..1e6) {
            let width = percent(Some(current), Some(total));
            prop_assert!(width.ends_with('%'));
            let value = value_of(&width);
            prop_assert!((0.0..=100.0).contains(&value), "{} out of range", width);
        }

        /// For a fixed positive total, more elapsed time never shrinks the bar
        #[test]
        fn monotonic_in_current(a in 0.0f64..1e5, b in 0.0f64..1e5, total in 0.001f64..1e5) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_width = value_of(&percent(Some(low), Some(total)));
            let high_width = value_of(&percent(Some(high), Some(total)));
            prop_assert!(low_width <= high_width);
        }
    }
}

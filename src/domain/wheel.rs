//! Wheel geometry shared by the renderer and the spin animator.
//!
//! Angles are in radians. Positive angles run clockwise on screen and the
//! pointer sits at angle 0 (pointing at the wheel from the right). Slice `i`
//! of `n` covers `[i * slice, (i + 1) * slice)` before rotation.

use std::f64::consts::{PI, TAU};
use std::time::Duration;

/// Duration of a full spin.
pub const SPIN_DURATION: Duration = Duration::from_millis(5000);

/// Minimum rotation of a spin (five full turns).
pub const BASE_SPIN: f64 = 10.0 * PI;

/// Random extra rotation added on top of [`BASE_SPIN`].
pub const SPIN_JITTER: f64 = TAU;

/// Saturation used for slice fill colors.
pub const SLICE_SATURATION: f32 = 0.7;

/// Lightness used for slice fill colors.
pub const SLICE_LIGHTNESS: f32 = 0.7;

/// Angular size of one slice.
///
/// Returns `TAU` for an empty wheel so callers never divide by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slice_angle(count: usize) -> f64 {
    if count == 0 {
        TAU
    } else {
        TAU / count as f64
    }
}

/// Start and end angle of slice `index` before rotation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slice_span(index: usize, count: usize) -> (f64, f64) {
    let slice = slice_angle(count);
    let start = index as f64 * slice;
    (start, start + slice)
}

/// Mid angle of slice `index` before rotation.
#[must_use]
pub fn slice_mid_angle(index: usize, count: usize) -> f64 {
    let (start, end) = slice_span(index, count);
    (start + end) / 2.0
}

/// Hue in degrees for slice `index`, evenly spread over the color wheel.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn slice_hue(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 * 360.0 / count as f64) as f32
}

/// Normalizes an angle into `[0, TAU)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid rounds up to TAU for tiny negative inputs
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Cubic ease-out: fast start, smooth stop.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Index of the slice under the pointer once the wheel rests at `final_angle`.
///
/// Returns `None` for an empty wheel.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn selected_index(final_angle: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let rest = final_angle.rem_euclid(TAU);
    let raw = ((TAU - rest) / TAU * count as f64).floor();
    Some((raw.max(0.0) as usize) % count)
}

/// Slice covering `screen_angle` when the wheel is rotated by `rotation`.
///
/// At `screen_angle == 0` this agrees with [`selected_index`] except on
/// exact slice boundaries.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn slice_at(screen_angle: f64, rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let local = normalize_angle(screen_angle - rotation);
    let index = (local / slice_angle(count)).floor() as usize;
    Some(index.min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EPS: f64 = 1e-9;

    #[test_case(1 ; "one")]
    #[test_case(2 ; "two")]
    #[test_case(3 ; "three")]
    #[test_case(7 ; "seven")]
    #[test_case(360 ; "many")]
    fn test_slices_partition_circle(count: usize) {
        let mut expected_start = 0.0;
        let mut total = 0.0;
        for index in 0..count {
            let (start, end) = slice_span(index, count);
            assert!((start - expected_start).abs() < EPS);
            assert!((end - start - slice_angle(count)).abs() < EPS);
            total += end - start;
            expected_start = end;
        }
        assert!((total - TAU).abs() < EPS);
        assert!((expected_start - TAU).abs() < EPS);
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < EPS);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ease_out_monotonic() {
        let mut previous = ease_out_cubic(0.0);
        for step in 1..=1000 {
            let current = ease_out_cubic(f64::from(step) / 1000.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_ease_out_clamps_input() {
        assert!(ease_out_cubic(-1.0).abs() < EPS);
        assert!((ease_out_cubic(2.0) - 1.0).abs() < EPS);
    }

    #[test_case(0.0, 2, 0 ; "rest_at_zero_picks_first")]
    #[test_case(PI, 2, 1 ; "half_turn_picks_second")]
    #[test_case(TAU, 2, 0 ; "full_turn_picks_first")]
    #[test_case(0.5 * PI, 4, 3 ; "quarter_turn_of_four")]
    #[test_case(1.5 * PI, 4, 1 ; "three_quarter_turn_of_four")]
    #[test_case(11.5 * PI, 2, 0 ; "unnormalized_angle")]
    #[test_case(0.1, 1, 0 ; "single_option")]
    fn test_selected_index(angle: f64, count: usize, expected: usize) {
        assert_eq!(selected_index(angle, count), Some(expected));
    }

    #[test]
    fn test_selected_index_empty_wheel() {
        assert_eq!(selected_index(1.0, 0), None);
    }

    #[test]
    fn test_selected_index_stays_in_range() {
        for step in 0..=10_000 {
            let angle = f64::from(step) * TAU / 10_000.0;
            let index = selected_index(angle, 5).unwrap();
            assert!(index < 5);
        }
    }

    #[test]
    fn test_slice_under_pointer_matches_selection() {
        let count = 6;
        for step in 0..100 {
            // stay clear of slice boundaries
            let rotation = (f64::from(step) + 0.37) * TAU / 100.0;
            let under_pointer = slice_at(1e-9, rotation, count);
            let selected = selected_index(rotation, count);
            let boundary = (rotation / slice_angle(count)).fract();
            if boundary > 1e-6 && boundary < 1.0 - 1e-6 {
                assert_eq!(under_pointer, selected, "rotation {rotation}");
            }
        }
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < EPS);
        assert!((normalize_angle(-0.5 * PI) - 1.5 * PI).abs() < EPS);
        assert!(normalize_angle(TAU).abs() < EPS);
        assert!(normalize_angle(-1e-20) < TAU);
    }

    #[test]
    fn test_slice_hue_evenly_spaced() {
        assert!(slice_hue(0, 4).abs() < 1e-6);
        assert!((slice_hue(1, 4) - 90.0).abs() < 1e-6);
        assert!((slice_hue(3, 4) - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_slice_mid_angle() {
        assert!((slice_mid_angle(0, 4) - PI / 4.0).abs() < EPS);
        assert!((slice_mid_angle(1, 2) - 1.5 * PI).abs() < EPS);
    }
}

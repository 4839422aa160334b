//! Easing helpers shared by procedural animations.

/// Normalized progress of `elapsed` through `duration`, clamped to `[0, 1]`.
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    (elapsed / duration.max(1e-6)).clamp(0.0, 1.0)
}

/// Cubic smoothstep: `t²(3 − 2t)`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Parabolic bump: 0 at both ends, 1 at the midpoint.
pub fn bump(s: f32) -> f32 {
    4.0 * s * (1.0 - s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_is_monotonic() {
        let mut prev = smoothstep(0.0);
        for i in 1..=100 {
            let y = smoothstep(i as f32 / 100.0);
            assert!(y >= prev);
            prev = y;
        }
    }

    #[test]
    fn progress_clamps_and_tolerates_zero_duration() {
        assert_eq!(progress(2.0, 1.0), 1.0);
        assert_eq!(progress(-1.0, 1.0), 0.0);
        assert_eq!(progress(0.1, 0.0), 1.0);
    }

    #[test]
    fn bump_peaks_at_half() {
        assert_eq!(bump(0.0), 0.0);
        assert_eq!(bump(1.0), 0.0);
        assert_eq!(bump(0.5), 1.0);
    }
}

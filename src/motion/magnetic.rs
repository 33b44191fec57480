use super::pointer::PointerSample;

/// Where a magnetic element wants to sit for a given pointer sample.
/// Strength is clamped into `[0, 1]`.
pub fn magnetic_target(sample: PointerSample, strength: f64) -> (f64, f64) {
    let strength = if strength.is_finite() { strength.clamp(0.0, 1.0) } else { 0.0 };
    (sample.x * strength, sample.y * strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude((x, y): (f64, f64)) -> f64 {
        x.hypot(y)
    }

    #[test]
    fn zero_strength_never_moves() {
        for (x, y) in [(0.0, 0.0), (40.0, -12.0), (-300.0, 300.0)] {
            assert_eq!(magnetic_target(PointerSample::new(x, y), 0.0), (0.0, 0.0));
        }
    }

    #[test]
    fn displacement_is_bounded_by_strength() {
        let strength = 0.5;
        for (x, y) in [(10.0, 0.0), (-60.0, 25.0), (120.0, -80.0)] {
            let sample = PointerSample::new(x, y);
            let target = magnetic_target(sample, strength);
            assert!(magnitude(target) <= strength * sample.x.hypot(sample.y) + 1e-9);
        }
    }

    #[test]
    fn displacement_grows_with_offset() {
        let mut last = 0.0;
        for step in 1..=20 {
            let offset = f64::from(step) * 5.0;
            let target = magnetic_target(PointerSample::new(offset, offset / 2.0), 0.3);
            let m = magnitude(target);
            assert!(m > last);
            last = m;
        }
    }

    #[test]
    fn follows_pointer_direction() {
        let (x, y) = magnetic_target(PointerSample::new(-20.0, 8.0), 0.5);
        assert_eq!((x, y), (-10.0, 4.0));
    }

    #[test]
    fn out_of_range_strength_is_clamped() {
        let sample = PointerSample::new(10.0, -10.0);
        assert_eq!(magnetic_target(sample, 3.0), (10.0, -10.0));
        assert_eq!(magnetic_target(sample, -1.0), (0.0, 0.0));
        assert_eq!(magnetic_target(sample, f64::NAN), (0.0, 0.0));
    }
}

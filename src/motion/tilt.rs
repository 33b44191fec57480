use super::pointer::PointerSample;

/// Linear pointer-to-rotation mapping for tilt cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Pointer distance from center at which the tilt saturates.
    pub range_px: f64,
    pub max_degrees: f64,
}

impl TiltConfig {
    /// `(pitch, yaw)` in degrees. Pitch is inverted so the edge under the
    /// pointer dips away from the viewer.
    pub fn angles(&self, sample: PointerSample) -> (f64, f64) {
        let pitch = -self.normalise(sample.y) * self.max_degrees;
        let yaw = self.normalise(sample.x) * self.max_degrees;
        (pitch, yaw)
    }

    fn normalise(&self, offset: f64) -> f64 {
        if self.range_px <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        (offset / self.range_px).clamp(-1.0, 1.0)
    }
}

pub fn tilt_transform(pitch: f64, yaw: f64) -> String {
    format!("rotateX({pitch:.3}deg) rotateY({yaw:.3}deg)")
}

pub fn spotlight_gradient(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(600px circle at {x:.1}px {y:.1}px, rgba(255,255,255,0.08), transparent 80%)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: TiltConfig = TiltConfig {
        range_px: 200.0,
        max_degrees: 15.0,
    };

    #[test]
    fn center_is_neutral() {
        let (pitch, yaw) = CARD.angles(PointerSample::CENTER);
        assert_eq!(pitch.abs(), 0.0);
        assert_eq!(yaw, 0.0);
    }

    #[test]
    fn full_range_maps_to_max_angle_with_inverted_pitch() {
        assert_eq!(CARD.angles(PointerSample::new(200.0, 200.0)), (-15.0, 15.0));
        assert_eq!(CARD.angles(PointerSample::new(-200.0, -200.0)), (15.0, -15.0));
    }

    #[test]
    fn mapping_is_linear_inside_range() {
        let (pitch, yaw) = CARD.angles(PointerSample::new(100.0, -50.0));
        assert_eq!(yaw, 7.5);
        assert_eq!(pitch, 3.75);
    }

    #[test]
    fn beyond_range_is_clamped() {
        assert_eq!(CARD.angles(PointerSample::new(900.0, -900.0)), (15.0, 15.0));
    }

    #[test]
    fn degenerate_range_is_flat() {
        let flat = TiltConfig {
            range_px: 0.0,
            max_degrees: 15.0,
        };
        let (pitch, yaw) = flat.angles(PointerSample::new(50.0, 50.0));
        assert_eq!((pitch.abs(), yaw), (0.0, 0.0));
    }

    #[test]
    fn css_values() {
        assert_eq!(tilt_transform(-1.5, 2.0), "rotateX(-1.500deg) rotateY(2.000deg)");
        assert_eq!(
            spotlight_gradient(12.0, 40.3),
            "radial-gradient(600px circle at 12.0px 40.3px, rgba(255,255,255,0.08), transparent 80%)"
        );
    }
}

//! Damped spring used by every pointer-driven effect.
//!
//! Each frame advances the value with the closed-form solution of
//! `m·x'' + c·x' + k·x = 0` (x measured from the target) over the real frame
//! delta. The damping ratio is never allowed below 1, so from rest the value
//! approaches a held target without crossing it, at any frame rate.

/// Displacement and velocity below which a spring snaps onto its target.
pub const REST_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Same stiffness and mass, with damping raised to at least critical.
    pub fn non_oscillating(self) -> Self {
        let stiffness = self.stiffness.max(f64::EPSILON);
        let mass = self.mass.max(f64::EPSILON);
        let clamped = Self { stiffness, mass, ..self };
        Self {
            damping: clamped.damping.max(clamped.critical_damping()),
            ..clamped
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedValue {
    pub current: f64,
    pub velocity: f64,
    pub target: f64,
    config: SpringConfig,
}

impl SmoothedValue {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            current: 0.0,
            velocity: 0.0,
            target: 0.0,
            config: config.non_oscillating(),
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advances by `dt` seconds. Returns `true` while the value is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return false;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return true;
        }

        let x0 = self.current - self.target;
        let v0 = self.velocity;
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        let (x, v) = if zeta - 1.0 < 1e-9 {
            let decay = (-omega * dt).exp();
            let b = v0 + omega * x0;
            ((x0 + b * dt) * decay, (v0 - omega * b * dt) * decay)
        } else {
            let spread = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - spread);
            let r2 = -omega * (zeta + spread);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if x.abs() < REST_EPSILON && v.abs() < REST_EPSILON {
            self.current = self.target;
            self.velocity = 0.0;
            return false;
        }

        self.current = self.target + x;
        self.velocity = v;
        true
    }
}

/// Two independent springs, one per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringPair {
    pub x: SmoothedValue,
    pub y: SmoothedValue,
}

impl SpringPair {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: SmoothedValue::new(config),
            y: SmoothedValue::new(config),
        }
    }

    pub fn set_target(&mut self, (x, y): (f64, f64)) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    pub fn current(&self) -> (f64, f64) {
        (self.x.current, self.y.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    const MAGNETIC: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 15.0,
        mass: 0.1,
    };

    const BOUNCY: SpringConfig = SpringConfig {
        stiffness: 500.0,
        damping: 30.0,
        mass: 1.0,
    };

    fn run_until_rest(value: &mut SmoothedValue, max_frames: usize) -> Vec<f64> {
        let mut trace = Vec::new();
        for _ in 0..max_frames {
            let moving = value.step(FRAME);
            trace.push(value.current);
            if !moving {
                break;
            }
        }
        trace
    }

    #[test]
    fn under_damped_config_is_raised_to_critical() {
        assert!(BOUNCY.damping_ratio() < 1.0);
        let raised = BOUNCY.non_oscillating();
        assert!((raised.damping_ratio() - 1.0).abs() < 1e-12);
        assert_eq!(raised.stiffness, 500.0);
    }

    #[test]
    fn over_damped_config_is_kept() {
        assert_eq!(MAGNETIC.non_oscillating(), MAGNETIC);
        assert!(MAGNETIC.damping_ratio() > 1.0);
    }

    #[test]
    fn converges_to_constant_target() {
        for config in [MAGNETIC, BOUNCY] {
            let mut value = SmoothedValue::new(config);
            value.set_target(120.0);
            run_until_rest(&mut value, 600);
            assert!(value.is_at_rest());
            assert_eq!(value.current, 120.0);
        }
    }

    #[test]
    fn never_crosses_target_from_rest() {
        for config in [MAGNETIC, BOUNCY] {
            let mut value = SmoothedValue::new(config);
            value.set_target(-35.0);
            let trace = run_until_rest(&mut value, 600);
            assert!(trace.iter().all(|&c| c >= -35.0), "crossed target: {trace:?}");
            assert!(trace.windows(2).all(|w| w[1] <= w[0]));
        }
    }

    #[test]
    fn large_frame_gaps_stay_stable() {
        let mut value = SmoothedValue::new(MAGNETIC);
        value.set_target(40.0);
        value.step(5.0);
        assert!((value.current - 40.0).abs() <= 40.0);
        assert!(value.current <= 40.0);
        for _ in 0..10 {
            value.step(5.0);
        }
        assert!(value.is_at_rest());
    }

    #[test]
    fn zero_or_invalid_delta_does_not_move() {
        let mut value = SmoothedValue::new(MAGNETIC);
        value.set_target(10.0);
        assert!(value.step(0.0));
        assert!(value.step(f64::NAN));
        assert_eq!(value.current, 0.0);
    }

    #[test]
    fn non_finite_targets_are_ignored() {
        let mut value = SmoothedValue::new(MAGNETIC);
        value.set_target(f64::INFINITY);
        assert_eq!(value.target, 0.0);
        assert!(!value.step(FRAME));
    }

    #[test]
    fn retargeting_back_to_rest_returns_home() {
        let mut pair = SpringPair::new(MAGNETIC);
        pair.set_target((30.0, -12.0));
        for _ in 0..5 {
            pair.step(FRAME);
        }
        assert!(!pair.x.is_at_rest() && !pair.y.is_at_rest());
        pair.set_target((0.0, 0.0));
        for _ in 0..600 {
            if !pair.step(FRAME) {
                break;
            }
        }
        assert_eq!(pair.current(), (0.0, 0.0));
    }

    #[test]
    fn axes_are_independent() {
        let mut pair = SpringPair::new(MAGNETIC);
        pair.set_target((25.0, 0.0));
        pair.step(FRAME);
        assert!(pair.x.current > 0.0);
        assert!(pair.y.is_at_rest());
    }
}

use log::Level;

use crate::motion::scroll::NavThresholds;
use crate::motion::spring::SpringConfig;
use crate::motion::tilt::TiltConfig;

const FORMSPREE_ENDPOINT: &str = "https://formspree.io/f/mandkrka";

/// Where the contact form posts. Can be pointed at a test form at build time.
pub fn contact_endpoint() -> &'static str {
    option_env!("PIXELKODE_CONTACT_ENDPOINT").unwrap_or(FORMSPREE_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const NAV_THRESHOLDS: NavThresholds = NavThresholds {
    opaque_after: 50.0,
    hide_after: 150.0,
};

pub const MAGNETIC_STRENGTH: f64 = 0.5;

pub const MAGNETIC_SPRING: SpringConfig = SpringConfig {
    stiffness: 150.0,
    damping: 15.0,
    mass: 0.1,
};

// 500/30/1 upstream is under-damped; SpringConfig raises it to critical.
pub const TILT_SPRING: SpringConfig = SpringConfig {
    stiffness: 500.0,
    damping: 30.0,
    mass: 1.0,
};

pub const TILT: TiltConfig = TiltConfig {
    range_px: 200.0,
    max_degrees: 15.0,
};

pub const PAGE_EXIT_MS: u32 = 600;
pub const PAGE_ENTER_MS: u32 = 800;

pub const SLIDESHOW_INTERVAL_MS: u32 = 3000;

/// Longest frame delta fed to the springs, in seconds.
pub const MAX_FRAME_DELTA: f64 = 1.0 / 20.0;

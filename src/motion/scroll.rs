use log::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavThresholds {
    /// Offset past which the header gets its opaque backdrop.
    pub opaque_after: f64,
    /// Offset past which scrolling down hides the header.
    pub hide_after: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavVisualState {
    pub scrolled: bool,
    pub hidden: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    RevealedTransparent,
    RevealedOpaque,
    Hidden,
}

impl NavVisualState {
    pub fn header_mode(&self) -> HeaderMode {
        match (self.hidden, self.scrolled) {
            (true, _) => HeaderMode::Hidden,
            (false, true) => HeaderMode::RevealedOpaque,
            (false, false) => HeaderMode::RevealedTransparent,
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }
}

/// Header state machine fed with window scroll offsets and menu actions.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    thresholds: NavThresholds,
    last_offset: f64,
    visual: NavVisualState,
}

impl NavState {
    pub fn new(thresholds: NavThresholds) -> Self {
        Self {
            thresholds,
            last_offset: 0.0,
            visual: NavVisualState::default(),
        }
    }

    pub fn visual(&self) -> NavVisualState {
        self.visual
    }

    /// Returns `true` when the visual state changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            return false;
        }
        let before = self.visual;
        let moving_down = offset > self.last_offset;
        self.last_offset = offset;

        self.visual.hidden =
            moving_down && offset > self.thresholds.hide_after && !self.visual.menu_open;
        self.visual.scrolled = offset > self.thresholds.opaque_after;
        self.visual != before
    }

    pub fn toggle_menu(&mut self) {
        if self.visual.menu_open {
            self.close_menu();
        } else {
            self.visual.menu_open = true;
            self.visual.hidden = false;
        }
    }

    pub fn close_menu(&mut self) {
        self.visual.menu_open = false;
    }

    pub fn route_changed(&mut self) {
        self.close_menu();
    }
}

/// Locks or releases document scrolling. Releasing an unlocked document is a
/// no-op, so teardown paths can call it unconditionally.
pub fn set_document_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        warn!("Failed to update scroll lock: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: NavThresholds = NavThresholds {
        opaque_after: 50.0,
        hide_after: 150.0,
    };

    fn replay(offsets: &[f64]) -> Vec<NavVisualState> {
        let mut nav = NavState::new(THRESHOLDS);
        offsets
            .iter()
            .map(|&offset| {
                nav.observe_scroll(offset);
                nav.visual()
            })
            .collect()
    }

    #[test]
    fn down_down_up_sequence() {
        let modes: Vec<HeaderMode> = replay(&[0.0, 60.0, 200.0, 180.0])
            .iter()
            .map(NavVisualState::header_mode)
            .collect();
        assert_eq!(
            modes,
            vec![
                HeaderMode::RevealedTransparent,
                HeaderMode::RevealedOpaque,
                HeaderMode::Hidden,
                HeaderMode::RevealedOpaque,
            ]
        );
    }

    #[test]
    fn scrolling_down_near_top_keeps_header() {
        let states = replay(&[20.0, 80.0, 120.0, 150.0]);
        assert!(states.iter().all(|s| !s.hidden));
        assert!(states[3].scrolled);
    }

    #[test]
    fn any_upward_delta_reveals() {
        let states = replay(&[400.0, 900.0, 899.0]);
        assert!(states[1].hidden);
        assert!(!states[2].hidden);
        assert!(states[2].scrolled);
    }

    #[test]
    fn opacity_is_independent_of_hiding() {
        let states = replay(&[300.0, 40.0]);
        assert!(states[0].hidden && states[0].scrolled);
        assert_eq!(states[1].header_mode(), HeaderMode::RevealedTransparent);
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut nav = NavState::new(THRESHOLDS);
        assert!(!nav.observe_scroll(10.0));
        assert!(nav.observe_scroll(60.0));
        assert!(!nav.observe_scroll(70.0));
        assert!(!nav.observe_scroll(f64::NAN));
    }

    #[test]
    fn open_menu_forces_header_visible() {
        let mut nav = NavState::new(THRESHOLDS);
        nav.observe_scroll(100.0);
        nav.observe_scroll(400.0);
        assert!(nav.visual().hidden);

        nav.toggle_menu();
        assert!(nav.visual().menu_open);
        assert!(!nav.visual().hidden);

        nav.observe_scroll(800.0);
        let visual = nav.visual();
        assert!(!(visual.menu_open && visual.hidden));
    }

    #[test]
    fn open_then_close_unlocks() {
        let mut nav = NavState::new(THRESHOLDS);
        nav.toggle_menu();
        assert!(nav.visual().scroll_locked());
        nav.toggle_menu();
        assert!(!nav.visual().scroll_locked());
    }

    #[test]
    fn open_then_route_change_unlocks() {
        let mut nav = NavState::new(THRESHOLDS);
        nav.toggle_menu();
        nav.route_changed();
        assert!(!nav.visual().menu_open);
        assert!(!nav.visual().scroll_locked());
    }

    #[test]
    fn redundant_closes_are_harmless() {
        let mut nav = NavState::new(THRESHOLDS);
        nav.close_menu();
        nav.route_changed();
        nav.close_menu();
        assert_eq!(nav.visual(), NavVisualState::default());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::set_document_scroll_locked;

    fn body_overflow() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn lock_hides_overflow() {
        set_document_scroll_locked(true);
        assert_eq!(body_overflow(), "hidden");
        set_document_scroll_locked(false);
    }

    #[wasm_bindgen_test]
    fn repeated_release_leaves_scrolling_enabled() {
        set_document_scroll_locked(true);
        set_document_scroll_locked(false);
        set_document_scroll_locked(false);
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn release_without_lock_is_harmless() {
        set_document_scroll_locked(false);
        assert_eq!(body_overflow(), "");
    }
}

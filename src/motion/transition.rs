//! Exit-then-enter sequencing for route changes.
//!
//! The controller owns which route is on screen. A navigation to a different
//! route starts the exit phase; the incoming route is only displayed once the
//! exit has finished. Requests that arrive mid-transition are queued, latest
//! wins, and start after the current phase completes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Idle,
    Exiting,
}

/// What the view has to start playing next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Exit,
    Enter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteTransition<R> {
    displayed: R,
    pending: Option<R>,
    phase: Phase,
}

impl<R: Clone + PartialEq> RouteTransition<R> {
    /// The first page plays its enter animation on mount.
    pub fn new(initial: R) -> Self {
        Self {
            displayed: initial,
            pending: None,
            phase: Phase::Entering,
        }
    }

    pub fn displayed(&self) -> &R {
        &self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn navigate(&mut self, to: R) -> Option<Cue> {
        match self.phase {
            Phase::Idle if to == self.displayed => None,
            Phase::Idle => {
                self.pending = Some(to);
                self.phase = Phase::Exiting;
                Some(Cue::Exit)
            }
            Phase::Entering | Phase::Exiting => {
                self.pending = if self.phase == Phase::Entering && to == self.displayed {
                    None
                } else {
                    Some(to)
                };
                None
            }
        }
    }

    /// Swaps in the queued route. Returns `Cue::Enter` unless the controller
    /// was not exiting.
    pub fn exit_finished(&mut self) -> Option<Cue> {
        if self.phase != Phase::Exiting {
            return None;
        }
        if let Some(next) = self.pending.take() {
            self.displayed = next;
        }
        self.phase = Phase::Entering;
        Some(Cue::Enter)
    }

    /// Returns `Cue::Exit` when a navigation was queued during the enter phase.
    pub fn enter_finished(&mut self) -> Option<Cue> {
        if self.phase != Phase::Entering {
            return None;
        }
        self.phase = Phase::Idle;
        match self.pending.take() {
            Some(next) => self.navigate(next),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(path: &'static str) -> RouteTransition<&'static str> {
        let mut transition = RouteTransition::new(path);
        transition.enter_finished();
        transition
    }

    #[test]
    fn first_page_enters() {
        let transition = RouteTransition::new("/");
        assert_eq!(transition.phase(), Phase::Entering);
        assert_eq!(*transition.displayed(), "/");
    }

    #[test]
    fn same_path_does_not_replay() {
        let mut transition = settled("/work");
        assert_eq!(transition.navigate("/work"), None);
        assert_eq!(transition.phase(), Phase::Idle);
    }

    #[test]
    fn distinct_paths_play_exit_then_enter() {
        let mut transition = settled("/work");
        assert_eq!(transition.navigate("/contact"), Some(Cue::Exit));
        assert_eq!(transition.phase(), Phase::Exiting);
        assert_eq!(*transition.displayed(), "/work");

        assert_eq!(transition.exit_finished(), Some(Cue::Enter));
        assert_eq!(*transition.displayed(), "/contact");
        assert_eq!(transition.phase(), Phase::Entering);

        assert_eq!(transition.enter_finished(), None);
        assert_eq!(transition.phase(), Phase::Idle);
    }

    #[test]
    fn navigation_during_exit_retargets_without_restarting() {
        let mut transition = settled("/");
        transition.navigate("/about");
        assert_eq!(transition.navigate("/services"), None);
        assert_eq!(transition.exit_finished(), Some(Cue::Enter));
        assert_eq!(*transition.displayed(), "/services");
    }

    #[test]
    fn navigation_during_enter_is_played_afterwards() {
        let mut transition = RouteTransition::new("/");
        assert_eq!(transition.navigate("/terms"), None);
        assert_eq!(transition.phase(), Phase::Entering);
        assert_eq!(transition.enter_finished(), Some(Cue::Exit));
        assert_eq!(transition.exit_finished(), Some(Cue::Enter));
        assert_eq!(*transition.displayed(), "/terms");
    }

    #[test]
    fn bouncing_back_during_enter_cancels_the_queue() {
        let mut transition = RouteTransition::new("/");
        transition.navigate("/terms");
        transition.navigate("/");
        assert_eq!(transition.enter_finished(), None);
        assert_eq!(*transition.displayed(), "/");
    }

    #[test]
    fn stray_phase_callbacks_are_ignored() {
        let mut transition = settled("/");
        assert_eq!(transition.exit_finished(), None);
        assert_eq!(transition.enter_finished(), None);
        assert_eq!(transition.phase(), Phase::Idle);
    }
}

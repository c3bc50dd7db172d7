//! Visibility state of the About dialog

use tracing::debug;

use super::close::CloseOutcome;

/// Derived visibility of a mounted dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogState {
    pub visible: bool,
    /// Last `open` value supplied by the owner
    pub open: bool,
}

/// Owns [`DialogState`]; the only writer of `visible`.
///
/// Visibility follows the owner's `open` signal whenever that signal changes,
/// and drops to hidden after a close that was not vetoed. Re-supplying an
/// unchanged `open` is not a change.
#[derive(Debug)]
pub struct ModalController {
    state: DialogState,
}

impl ModalController {
    pub fn new(open: bool) -> Self {
        Self {
            state: DialogState {
                visible: open,
                open,
            },
        }
    }

    /// Observe the owner's `open` signal. Returns true if visibility changed.
    pub fn sync_open(&mut self, open: bool) -> bool {
        if open == self.state.open {
            return false;
        }
        self.state.open = open;
        let changed = self.state.visible != open;
        self.state.visible = open;
        debug!(open, changed, "about modal open signal changed");
        changed
    }

    /// Apply the result of a close attempt. Returns true if visibility changed.
    pub fn apply(&mut self, outcome: CloseOutcome) -> bool {
        match outcome {
            CloseOutcome::Closed if self.state.visible => {
                self.state.visible = false;
                true
            }
            CloseOutcome::Closed | CloseOutcome::Vetoed => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> DialogState {
        self.state
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_follows_open() {
        assert!(ModalController::new(true).is_visible());
        assert!(!ModalController::new(false).is_visible());
        assert!(!ModalController::default().is_visible());
    }

    #[test]
    fn test_open_toggle_without_remount() {
        let mut controller = ModalController::new(false);
        assert!(controller.sync_open(true));
        assert!(controller.is_visible());
        assert!(controller.sync_open(false));
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_closed_outcome_hides() {
        let mut controller = ModalController::new(true);
        assert!(!controller.apply(CloseOutcome::Vetoed));
        assert!(controller.is_visible());
        assert!(controller.apply(CloseOutcome::Closed));
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_unchanged_open_does_not_reopen_after_close() {
        let mut controller = ModalController::new(true);
        controller.apply(CloseOutcome::Closed);

        assert!(!controller.sync_open(true));
        assert!(!controller.is_visible());

        controller.sync_open(false);
        assert!(controller.sync_open(true));
        assert!(controller.is_visible());
    }
}

//! Veto-able close protocol
//!
//! Every dismissal, whether from the close control, the keyboard or the
//! owning program, goes through [`CloseVetoProtocol::attempt`], which calls
//! the owner's guard exactly once.

use tracing::debug;

/// Answer of a close guard.
///
/// Only an explicit veto keeps the dialog open. Guards that return `()` or
/// `None` let the close proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Proceed,
    Veto,
}

impl From<bool> for CloseDecision {
    fn from(allow: bool) -> Self {
        if allow {
            CloseDecision::Proceed
        } else {
            CloseDecision::Veto
        }
    }
}

impl From<()> for CloseDecision {
    fn from(_: ()) -> Self {
        CloseDecision::Proceed
    }
}

impl From<Option<bool>> for CloseDecision {
    fn from(allow: Option<bool>) -> Self {
        allow.map_or(CloseDecision::Proceed, CloseDecision::from)
    }
}

/// Result of a single close attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    Vetoed,
}

/// Capability consulted before the dialog hides
pub trait CloseGuard {
    fn on_close(&mut self) -> CloseDecision;
}

impl<F, R> CloseGuard for F
where
    F: FnMut() -> R,
    R: Into<CloseDecision>,
{
    fn on_close(&mut self) -> CloseDecision {
        (*self)().into()
    }
}

#[derive(Debug)]
pub struct CloseVetoProtocol<G> {
    guard: Option<G>,
}

impl<G: CloseGuard> CloseVetoProtocol<G> {
    pub fn new(guard: Option<G>) -> Self {
        Self { guard }
    }

    pub fn set_guard(&mut self, guard: Option<G>) {
        self.guard = guard;
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Run one close attempt. No retries: a veto is final for this attempt.
    pub fn attempt(&mut self) -> CloseOutcome {
        let Some(guard) = self.guard.as_mut() else {
            return CloseOutcome::Closed;
        };
        match guard.on_close() {
            CloseDecision::Proceed => CloseOutcome::Closed,
            CloseDecision::Veto => {
                debug!("close attempt vetoed by guard");
                CloseOutcome::Vetoed
            }
        }
    }
}

use crate::shared::Notification;
use std::fmt;

/// Reason a person's location changed without passing through the expected prior location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teleport {
    BackToLobby,
    OntoElevator,
    GotOffNoElevator,
    NotLeavingFromWorkspace,
    AlreadyInBuilding,
}

impl fmt::Display for Teleport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Teleport::BackToLobby => "back to lobby",
            Teleport::OntoElevator => "onto elevator",
            Teleport::GotOffNoElevator => "got off no elevator",
            Teleport::NotLeavingFromWorkspace => "not leaving from workspace",
            Teleport::AlreadyInBuilding => "already in building",
        };
        write!(f, "Teleport: {}", reason)
    }
}

/**
 * Recoverable warning log.
 *
 * Warnings never interrupt control flow. Each one bumps the counter and yields the
 * notification a renderer uses to show the latest message.
 *
 * # Fields
 * - `warning_count`:   Number of warnings recorded so far. Never decreases.
 * - `last_warning`:    Most recent warning text, if any.
 */
#[derive(Debug, Default)]
pub struct Diagnostics {
    warning_count: u32,
    last_warning: Option<String>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) -> Notification {
        let message = message.into();
        self.warning_count = self.warning_count.saturating_add(1);
        log::warn!("warning {}: {}", self.warning_count, message);
        self.last_warning = Some(message.clone());

        Notification::Warning {
            count: self.warning_count,
            message,
        }
    }

    pub fn teleport(&mut self, reason: Teleport) -> Notification {
        self.warn(reason.to_string())
    }

    pub fn warning_count(&self) -> u32 {
        self.warning_count
    }

    pub fn last_warning(&self) -> Option<&str> {
        self.last_warning.as_deref()
    }
}

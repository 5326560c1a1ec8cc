use crate::shared::Location;

/// Anger gained per tick spent waiting in a lobby.
pub const ANGER_STEP: u8 = 2;
pub const MAX_ANGER: u8 = 255;

/**
 * A person in the building.
 *
 * # Fields
 * - `location`:    The one place the person currently occupies.
 * - `anger`:       Lobby-wait penalty in `[0, MAX_ANGER]`. Reset on arrival at a workspace.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub location: Location,
    pub anger: u8,
}

impl Person {
    pub fn new(floor: u8) -> Person {
        Person {
            location: Location::Workspace(floor),
            anger: 0,
        }
    }

    /// Ages the person by one tick. Returns the new anger if it changed.
    pub fn tick(&mut self) -> Option<u8> {
        if !self.location.is_lobby() {
            return None;
        }
        let anger = self.anger.saturating_add(ANGER_STEP).min(MAX_ANGER);
        if anger == self.anger {
            return None;
        }
        self.anger = anger;
        Some(anger)
    }
}

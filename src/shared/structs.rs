/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Where a person is. The embedded value is a floor index, or an elevator id.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "at", rename_all = "lowercase")]
pub enum Location {
    Workspace(u8),
    Lobby(u8),
    Elevator(u8),
}

impl Location {
    pub fn is_workspace(&self) -> bool {
        matches!(self, Location::Workspace(_))
    }

    pub fn is_lobby(&self) -> bool {
        matches!(self, Location::Lobby(_))
    }

    pub fn is_elevator(&self) -> bool {
        matches!(self, Location::Elevator(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Workspace(floor) => write!(f, "workspace {}", floor),
            Location::Lobby(floor) => write!(f, "lobby {}", floor),
            Location::Elevator(id) => write!(f, "elevator {}", id),
        }
    }
}

/**
 * State-change notification delivered to a renderer.
 *
 * Every notification is produced after the mutation it reports has been applied.
 * The serialized form is one JSON object tagged by `event`.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    Init {
        floors: u8,
        elevators: u8,
    },
    PersonCreated {
        name: String,
        floor: u8,
    },
    PersonRemoved {
        name: String,
    },
    PersonLocationChanged {
        name: String,
        location: Location,
    },
    PersonAngerChanged {
        name: String,
        anger: u8,
    },
    ElevatorDoor {
        elevator: u8,
        open: bool,
    },
    ElevatorMoved {
        elevator: u8,
        floor: u8,
        slot: u32,
        rank: u32,
    },
    TimeUpdated {
        time: String,
    },
    Warning {
        count: u32,
        message: String,
    },
    Finish {
        message: String,
        warnings: u32,
    },
}

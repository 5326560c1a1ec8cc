/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::diagnostics::FatalError;
use crate::shared::Location;

/// Floor an elevator starts on before its first move.
pub const ELEVATOR_START_FLOOR: u8 = 1;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Floor {
    pub lobby: BTreeSet<String>,
    pub workspace: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    pub current_floor: u8,
    pub door_open: bool,
    pub occupants: BTreeSet<String>,
}

impl Elevator {
    pub fn new() -> Elevator {
        Elevator {
            current_floor: ELEVATOR_START_FLOOR,
            door_open: false,
            occupants: BTreeSet::new(),
        }
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Elevator::new()
    }
}

/**
 * Registry of floors and elevators.
 *
 * The dimensions are fixed at construction. Each floor holds a lobby set and a
 * workspace set, each elevator an occupant set; the person roster keeps a name in
 * exactly one of these sets.
 *
 * # Fields
 * - `n_floors`:    Number of floors, numbered 0 to `n_floors - 1`.
 * - `n_elevators`: Number of elevators, numbered 0 to `n_elevators - 1`.
 * - `floors`:      Lobby and workspace occupancy per floor.
 * - `elevators`:   Door, position and occupancy per elevator.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    n_floors: u8,
    n_elevators: u8,
    floors: Vec<Floor>,
    elevators: Vec<Elevator>,
}

impl Building {
    pub fn new(n_floors: u8, n_elevators: u8) -> Result<Building, FatalError> {
        if n_floors == 0 {
            return Err(FatalError::ZeroCount("floor count"));
        }
        if n_elevators == 0 {
            return Err(FatalError::ZeroCount("elevator count"));
        }

        Ok(Building {
            n_floors,
            n_elevators,
            floors: vec![Floor::default(); n_floors as usize],
            elevators: vec![Elevator::new(); n_elevators as usize],
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn check_floor(&self, floor: u8) -> Result<u8, FatalError> {
        if floor < self.n_floors {
            Ok(floor)
        } else {
            Err(FatalError::FloorOutOfRange {
                floor,
                floors: self.n_floors,
            })
        }
    }

    pub fn check_elevator(&self, elevator: u8) -> Result<u8, FatalError> {
        if elevator < self.n_elevators {
            Ok(elevator)
        } else {
            Err(FatalError::ElevatorOutOfRange {
                elevator,
                elevators: self.n_elevators,
            })
        }
    }

    pub fn check_location(&self, location: Location) -> Result<(), FatalError> {
        match location {
            Location::Workspace(floor) | Location::Lobby(floor) => self.check_floor(floor).map(|_| ()),
            Location::Elevator(id) => self.check_elevator(id).map(|_| ()),
        }
    }

    /// Adds `name` to the set backing `location`.
    pub fn place(&mut self, name: &str, location: Location) -> Result<(), FatalError> {
        self.check_location(location)?;
        if let Some(set) = self.occupants_mut(location) {
            set.insert(name.to_string());
        }
        Ok(())
    }

    /// Removes `name` from the set backing `location`. Returns whether it was there.
    pub fn vacate(&mut self, name: &str, location: Location) -> bool {
        match self.occupants_mut(location) {
            Some(set) => set.remove(name),
            None => false,
        }
    }

    pub fn current_floor(&self, id: u8) -> Result<u8, FatalError> {
        self.check_elevator(id)?;
        Ok(self.elevators[id as usize].current_floor)
    }

    pub fn set_door(&mut self, id: u8, open: bool) -> Result<(), FatalError> {
        let elevator = self.elevator_mut(id)?;
        elevator.door_open = open;
        Ok(())
    }

    pub fn move_elevator(&mut self, id: u8, floor: u8) -> Result<(), FatalError> {
        self.check_floor(floor)?;
        let elevator = self.elevator_mut(id)?;
        if elevator.door_open {
            log::debug!("elevator {} moves with its door open", id);
        }
        elevator.current_floor = floor;
        Ok(())
    }

    fn elevator_mut(&mut self, id: u8) -> Result<&mut Elevator, FatalError> {
        let elevators = self.n_elevators;
        self.elevators
            .get_mut(id as usize)
            .ok_or(FatalError::ElevatorOutOfRange {
                elevator: id,
                elevators,
            })
    }

    fn occupants_mut(&mut self, location: Location) -> Option<&mut BTreeSet<String>> {
        match location {
            Location::Workspace(floor) => self.floors.get_mut(floor as usize).map(|f| &mut f.workspace),
            Location::Lobby(floor) => self.floors.get_mut(floor as usize).map(|f| &mut f.lobby),
            Location::Elevator(id) => self.elevators.get_mut(id as usize).map(|e| &mut e.occupants),
        }
    }
}

#[cfg(test)]
impl Building {
    pub fn floor(&self, floor: u8) -> Option<&Floor> {
        self.floors.get(floor as usize)
    }

    pub fn elevator(&self, id: u8) -> Option<&Elevator> {
        self.elevators.get(id as usize)
    }

    pub fn occupants(&self, location: Location) -> Option<&BTreeSet<String>> {
        match location {
            Location::Workspace(floor) => self.floor(floor).map(|f| &f.workspace),
            Location::Lobby(floor) => self.floor(floor).map(|f| &f.lobby),
            Location::Elevator(id) => self.elevator(id).map(|e| &e.occupants),
        }
    }

    /// Number of sets in the building that contain `name`.
    pub fn memberships(&self, name: &str) -> usize {
        let on_floors = self
            .floors
            .iter()
            .map(|f| f.lobby.contains(name) as usize + f.workspace.contains(name) as usize)
            .sum::<usize>();
        let on_elevators = self
            .elevators
            .iter()
            .filter(|e| e.occupants.contains(name))
            .count();
        on_floors + on_elevators
    }
}

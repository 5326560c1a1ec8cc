/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::diagnostics::{Diagnostics, FatalError, Teleport};
use crate::people::Person;
use crate::shared::{Location, Notification};

/**
 * Person state machine.
 *
 * Owns every live person and keeps the building's location sets in step with each
 * person's `Location`. A transition whose precondition fails is still carried out;
 * the mismatch is recorded as a teleport warning.
 *
 * Every operation validates its target location before touching any set, so an
 * error leaves the roster and the building as they were. Notifications are pushed
 * to `out` in the order the renderer should apply them.
 */
#[derive(Debug, Default)]
pub struct Roster {
    people: BTreeMap<String, Person>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Person)> {
        self.people.iter()
    }

    pub fn create(
        &mut self,
        building: &mut Building,
        diagnostics: &mut Diagnostics,
        out: &mut Vec<Notification>,
        name: &str,
        floor: u8,
    ) -> Result<(), FatalError> {
        building.check_floor(floor)?;

        if let Some(old) = self.people.remove(name) {
            out.push(diagnostics.teleport(Teleport::AlreadyInBuilding));
            building.vacate(name, old.location);
            out.push(Notification::PersonRemoved {
                name: name.to_string(),
            });
        }

        let person = Person::new(floor);
        building.place(name, person.location)?;
        self.people.insert(name.to_string(), person);
        out.push(Notification::PersonCreated {
            name: name.to_string(),
            floor,
        });
        Ok(())
    }

    pub fn move_to_lobby(
        &mut self,
        building: &mut Building,
        diagnostics: &mut Diagnostics,
        out: &mut Vec<Notification>,
        name: &str,
        floor: u8,
    ) -> Result<(), FatalError> {
        let current = self.location_of(name)?;
        building.check_floor(floor)?;

        if current != Location::Workspace(floor) {
            out.push(diagnostics.teleport(Teleport::BackToLobby));
        }
        self.relocate(building, out, name, Location::Lobby(floor))
    }

    pub fn board_elevator(
        &mut self,
        building: &mut Building,
        diagnostics: &mut Diagnostics,
        out: &mut Vec<Notification>,
        name: &str,
        elevator: u8,
        floor: u8,
    ) -> Result<(), FatalError> {
        let current = self.location_of(name)?;
        building.check_elevator(elevator)?;
        building.check_floor(floor)?;

        // Already on board.
        if current == Location::Elevator(elevator) {
            return Ok(());
        }
        if current != Location::Lobby(floor) {
            out.push(diagnostics.teleport(Teleport::OntoElevator));
        }
        self.relocate(building, out, name, Location::Elevator(elevator))
    }

    pub fn disembark(
        &mut self,
        building: &mut Building,
        diagnostics: &mut Diagnostics,
        out: &mut Vec<Notification>,
        name: &str,
        floor: u8,
    ) -> Result<(), FatalError> {
        let current = self.location_of(name)?;
        building.check_floor(floor)?;

        if !current.is_elevator() {
            out.push(diagnostics.teleport(Teleport::GotOffNoElevator));
        }
        self.relocate(building, out, name, Location::Workspace(floor))?;

        if let Some(person) = self.people.get_mut(name) {
            if person.anger != 0 {
                person.anger = 0;
                out.push(Notification::PersonAngerChanged {
                    name: name.to_string(),
                    anger: 0,
                });
            }
        }
        Ok(())
    }

    pub fn destroy(
        &mut self,
        building: &mut Building,
        diagnostics: &mut Diagnostics,
        out: &mut Vec<Notification>,
        name: &str,
    ) -> Result<(), FatalError> {
        let current = self.location_of(name)?;

        if !current.is_workspace() {
            out.push(diagnostics.teleport(Teleport::NotLeavingFromWorkspace));
        }
        building.vacate(name, current);
        self.people.remove(name);
        out.push(Notification::PersonRemoved {
            name: name.to_string(),
        });
        Ok(())
    }

    /// Ages every live person by one tick.
    pub fn tick(&mut self, out: &mut Vec<Notification>) {
        for (name, person) in self.people.iter_mut() {
            if let Some(anger) = person.tick() {
                out.push(Notification::PersonAngerChanged {
                    name: name.clone(),
                    anger,
                });
            }
        }
    }

    /// Places every live person into a freshly built `building`.
    pub fn rehome(&self, building: &mut Building) -> Result<(), FatalError> {
        for (name, person) in self.people.iter() {
            building.place(name, person.location)?;
        }
        Ok(())
    }

    fn location_of(&self, name: &str) -> Result<Location, FatalError> {
        self.people
            .get(name)
            .map(|p| p.location)
            .ok_or_else(|| FatalError::UnknownPerson(name.to_string()))
    }

    fn relocate(
        &mut self,
        building: &mut Building,
        out: &mut Vec<Notification>,
        name: &str,
        to: Location,
    ) -> Result<(), FatalError> {
        building.check_location(to)?;
        let person = self
            .people
            .get_mut(name)
            .ok_or_else(|| FatalError::UnknownPerson(name.to_string()))?;

        building.vacate(name, person.location);
        building.place(name, to)?;
        person.location = to;
        out.push(Notification::PersonLocationChanged {
            name: name.to_string(),
            location: to,
        });
        Ok(())
    }
}

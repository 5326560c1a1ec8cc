pub mod person;
pub mod roster;

pub use person::Person;
pub use roster::Roster;

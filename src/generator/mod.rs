pub mod names;
pub mod schedule;

pub use names::{skew_index, NameCursor};
pub use schedule::{generate, GeneratorError, TripSchedule};

pub mod building;
pub mod geometry;

pub use building::Building;
pub use geometry::{elevator_slot, floor_rank};

pub mod macros;
pub mod structs;

pub use structs::Location;
pub use structs::Notification;

pub mod diagnostics;
pub mod fatal;
mod diagnostics_tests;

pub use diagnostics::Diagnostics;
pub use diagnostics::Teleport;
pub use fatal::FatalError;

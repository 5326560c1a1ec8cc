pub mod command;
pub mod interpreter;
mod command_tests;

pub use command::{parse_line, Command, ElevatorOp, Line, PersonOp};
pub use interpreter::{Interpreter, Outcome};

/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Protocol-grammar violations. Any of these ends the interpreter.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("bad operation `{0}`")]
    UnknownCommand(String),
    #[error("Bad E operation `{0}`")]
    BadElevatorOperation(String),
    #[error("Bad P operation `{0}`")]
    BadPersonOperation(String),
    #[error("Multiple initialization lines")]
    MultipleInitialization,
    #[error("`{command}` line is missing its {what}")]
    MissingToken {
        command: char,
        what: &'static str,
    },
    #[error("malformed number `{0}`")]
    BadNumber(String),
    #[error("number {0} is larger than 255")]
    NumberTooLarge(u64),
    #[error("{0} must be positive")]
    ZeroCount(&'static str),
    #[error("floor {floor} is outside the building ({floors} floors)")]
    FloorOutOfRange { floor: u8, floors: u8 },
    #[error("elevator {elevator} does not exist ({elevators} elevators)")]
    ElevatorOutOfRange { elevator: u8, elevators: u8 },
    #[error("no person named `{0}` is in the building")]
    UnknownPerson(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/***************************************/
/*           Local modules             */
/***************************************/
use crate::diagnostics::FatalError;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorOp {
    Open,
    Close,
    Move,
}

/// Person sub-operation. `GetOff` is spelled `on` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonOp {
    Enter(u8),
    Leave,
    GetOff(u8),
    ToLobby(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init {
        floors: u8,
        elevators: u8,
    },
    Elevator {
        elevator: u8,
        op: ElevatorOp,
        floor: Option<u8>,
        passengers: Vec<String>,
    },
    Person {
        name: String,
        op: PersonOp,
    },
    Tick {
        time: String,
    },
    Warning {
        message: String,
    },
    Finish {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    PassThrough(&'a str),
    Command(Command),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Classifies one input line.
 *
 * Lines not starting with `marker` pass through untouched. Marked lines are parsed
 * into a `Command`; anything that does not fit the grammar is a `FatalError`.
 * Range checks against the building happen later, in the interpreter.
 */
pub fn parse_line(line: &str, marker: char) -> Result<Line<'_>, FatalError> {
    let body = match line.strip_prefix(marker) {
        Some(body) => body,
        None => return Ok(Line::PassThrough(line)),
    };

    let mut tokens = body.split_whitespace();
    let letter = tokens.next().unwrap_or("");

    let command = match letter {
        "E" => {
            let elevator = number(tokens.next(), 'E', "elevator id")?;
            let op = match tokens.next() {
                Some("open") => ElevatorOp::Open,
                Some("close") => ElevatorOp::Close,
                Some("move") => ElevatorOp::Move,
                Some(other) => return Err(FatalError::BadElevatorOperation(other.to_string())),
                None => {
                    return Err(FatalError::MissingToken {
                        command: 'E',
                        what: "operation",
                    })
                }
            };
            // Doors can work without a floor; a move needs its target.
            let floor = match (op, tokens.next()) {
                (ElevatorOp::Open | ElevatorOp::Close, None) => None,
                (_, token) => Some(number(token, 'E', "floor")?),
            };
            let passengers = tokens.map(str::to_string).collect();
            Command::Elevator {
                elevator,
                op,
                floor,
                passengers,
            }
        }
        "P" => {
            let name = required(tokens.next(), 'P', "person name")?.to_string();
            let op = match required(tokens.next(), 'P', "operation")? {
                "enter" => PersonOp::Enter(number(tokens.next(), 'P', "floor")?),
                "leave" => PersonOp::Leave,
                "on" => PersonOp::GetOff(number(tokens.next(), 'P', "floor")?),
                "move" => PersonOp::ToLobby(number(tokens.next(), 'P', "floor")?),
                other => return Err(FatalError::BadPersonOperation(other.to_string())),
            };
            Command::Person { name, op }
        }
        "T" => Command::Tick {
            time: required(tokens.next(), 'T', "time")?.to_string(),
        },
        "W" => Command::Warning {
            message: message(body),
        },
        "I" => Command::Init {
            floors: number(tokens.next(), 'I', "floor count")?,
            elevators: number(tokens.next(), 'I', "elevator count")?,
        },
        "F" => Command::Finish {
            message: message(body),
        },
        other => return Err(FatalError::UnknownCommand(other.to_string())),
    };

    Ok(Line::Command(command))
}

/***************************************/
/*          Private functions          */
/***************************************/
fn required<'a>(token: Option<&'a str>, command: char, what: &'static str) -> Result<&'a str, FatalError> {
    token.ok_or(FatalError::MissingToken { command, what })
}

fn number(token: Option<&str>, command: char, what: &'static str) -> Result<u8, FatalError> {
    let token = required(token, command, what)?;
    match token.parse::<u64>() {
        Ok(value) => u8::try_from(value).map_err(|_| FatalError::NumberTooLarge(value)),
        Err(_) => Err(FatalError::BadNumber(token.to_string())),
    }
}

/// Everything after the command letter, with the separating whitespace removed.
fn message(body: &str) -> String {
    let body = body.trim_start();
    let rest = body
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, _)| &body[i..])
        .unwrap_or("");
    rest.trim_start().to_string()
}

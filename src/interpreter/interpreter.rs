/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io::{BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::{elevator_slot, floor_rank, Building};
use crate::config::InterpreterConfig;
use crate::diagnostics::{Diagnostics, FatalError};
use crate::interpreter::command::{parse_line, Command, ElevatorOp, Line, PersonOp};
use crate::people::Roster;
use crate::renderer::Renderer;
use crate::shared::Notification;

/***************************************/
/*               Enums                 */
/***************************************/

/// How a run ended, when it did not end in a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Finished { message: String, warnings: u32 },
    EndOfStream,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Display-event interpreter.
 *
 * Reads the simulator's output one line at a time, keeps the building and roster
 * consistent with it, and hands state-change notifications to a renderer.
 * Unmarked lines are echoed to the pass-through writer.
 *
 * The interpreter is the only owner of the building, the roster and the
 * diagnostics. Notifications produced by a line are buffered and only delivered
 * once the whole line has been applied. A fatal error drops the buffer.
 *
 * # Fields
 * - `marker`:          Character that starts a command line.
 * - `building`:        Floors and elevators. Starts at the configured default size.
 * - `initialized`:     Whether an `I` line has been applied.
 * - `roster`:          Live people and their state machines.
 * - `diagnostics`:     Warning counter and latest warning.
 * - `time`:            Last time value seen on a `T` line.
 * - `renderer`:        Notification sink.
 * - `passthrough`:     Destination for unmarked lines and warning echoes.
 * - `lines_read`:      Number of input lines consumed.
 */
pub struct Interpreter<R: Renderer, W: Write> {
    marker: char,
    building: Building,
    initialized: bool,
    roster: Roster,
    diagnostics: Diagnostics,
    time: String,
    renderer: R,
    passthrough: W,
    lines_read: u64,
}

impl<R: Renderer, W: Write> Interpreter<R, W> {
    pub fn new(config: &InterpreterConfig, renderer: R, passthrough: W) -> Result<Self, FatalError> {
        Ok(Interpreter {
            marker: config.command_marker,
            building: Building::new(config.default_floors, config.default_elevators)?,
            initialized: false,
            roster: Roster::new(),
            diagnostics: Diagnostics::new(),
            time: "0".to_string(),
            renderer,
            passthrough,
            lines_read: 0,
        })
    }

    /// Consumes `input` until end of stream, an `F` line, or a fatal error.
    pub fn run<B: BufRead>(&mut self, input: B) -> Result<Outcome, FatalError> {
        for line in input.lines() {
            let line = line?;
            if let Some(outcome) = self.process_line(&line)? {
                self.finish()?;
                return Ok(outcome);
            }
        }

        log::debug!("end of stream after {} lines", self.lines_read);
        self.finish()?;
        Ok(Outcome::EndOfStream)
    }

    /// Applies one line. Returns `Some` when the line ends the stream.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Outcome>, FatalError> {
        self.lines_read += 1;

        let command = match parse_line(line, self.marker)? {
            Line::PassThrough(text) => {
                writeln!(self.passthrough, "{}", text)?;
                return Ok(None);
            }
            Line::Command(command) => command,
        };
        log::debug!("line {}: {:?}", self.lines_read, command);

        let mut out = Vec::new();
        let outcome = self.apply(command, &mut out)?;
        self.deliver(out)?;
        Ok(outcome)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    #[cfg(test)]
    pub fn building(&self) -> &Building {
        &self.building
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.renderer, self.passthrough)
    }

    fn apply(&mut self, command: Command, out: &mut Vec<Notification>) -> Result<Option<Outcome>, FatalError> {
        match command {
            Command::Init { floors, elevators } => {
                self.initialize(floors, elevators, out)?;
            }
            Command::Elevator {
                elevator,
                op,
                floor,
                passengers,
            } => {
                // Only a door line with no passengers leaves out the floor.
                let floor = match floor {
                    Some(floor) => {
                        self.building.check_elevator(elevator)?;
                        self.building.check_floor(floor)?
                    }
                    None => self.building.current_floor(elevator)?,
                };

                // Passengers first, so one line can load the car and move it.
                for name in passengers.iter() {
                    self.roster.board_elevator(
                        &mut self.building,
                        &mut self.diagnostics,
                        out,
                        name,
                        elevator,
                        floor,
                    )?;
                }

                match op {
                    ElevatorOp::Open | ElevatorOp::Close => {
                        let open = op == ElevatorOp::Open;
                        self.building.set_door(elevator, open)?;
                        out.push(Notification::ElevatorDoor { elevator, open });
                    }
                    ElevatorOp::Move => {
                        self.building.move_elevator(elevator, floor)?;
                        out.push(Notification::ElevatorMoved {
                            elevator,
                            floor,
                            slot: elevator_slot(elevator),
                            rank: floor_rank(self.building.n_floors(), floor),
                        });
                    }
                }
            }
            Command::Person { name, op } => {
                let (roster, building, diagnostics) =
                    (&mut self.roster, &mut self.building, &mut self.diagnostics);
                match op {
                    PersonOp::Enter(floor) => roster.create(building, diagnostics, out, &name, floor)?,
                    PersonOp::Leave => roster.destroy(building, diagnostics, out, &name)?,
                    PersonOp::GetOff(floor) => roster.disembark(building, diagnostics, out, &name, floor)?,
                    PersonOp::ToLobby(floor) => {
                        roster.move_to_lobby(building, diagnostics, out, &name, floor)?
                    }
                }
            }
            Command::Tick { time } => {
                self.time = time.clone();
                out.push(Notification::TimeUpdated { time });
                self.roster.tick(out);
            }
            Command::Warning { message } => {
                out.push(self.diagnostics.warn(message));
            }
            Command::Finish { message } => {
                let warnings = self.diagnostics.warning_count();
                log::info!("finished: {} ({} warnings)", message, warnings);
                out.push(Notification::Finish {
                    message: message.clone(),
                    warnings,
                });
                return Ok(Some(Outcome::Finished { message, warnings }));
            }
        }
        Ok(None)
    }

    fn initialize(&mut self, floors: u8, elevators: u8, out: &mut Vec<Notification>) -> Result<(), FatalError> {
        if self.initialized {
            return Err(FatalError::MultipleInitialization);
        }

        let mut building = Building::new(floors, elevators)?;
        self.roster.rehome(&mut building)?;
        self.building = building;
        self.initialized = true;

        log::info!("building with {} floors and {} elevators", floors, elevators);
        out.push(Notification::Init { floors, elevators });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), FatalError> {
        self.renderer.flush();
        self.passthrough.flush()?;
        Ok(())
    }

    fn deliver(&mut self, out: Vec<Notification>) -> Result<(), FatalError> {
        for notification in out.iter() {
            if let Notification::Warning { message, .. } = notification {
                writeln!(self.passthrough, "WARNING {}", message)?;
            }
            self.renderer.notify(notification);
        }
        Ok(())
    }
}

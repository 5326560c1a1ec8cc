/*
 * Unit tests for the line parser
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_unmarked_line_passes_through
 * - test_parse_elevator_line
 * - test_parse_door_without_floor
 * - test_parse_person_lines
 * - test_parse_messages_keep_spacing
 * - test_parse_init_and_tick
 * - test_grammar_violations
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod command_tests {
    use crate::diagnostics::FatalError;
    use crate::interpreter::{parse_line, Command, ElevatorOp, Line, PersonOp};

    fn command(line: &str) -> Command {
        match parse_line(line, '!').unwrap() {
            Line::Command(command) => command,
            Line::PassThrough(text) => panic!("expected a command, got pass-through {:?}", text),
        }
    }

    #[test]
    fn test_unmarked_line_passes_through() {
        // Purpose: Simulator log lines are returned untouched

        // Act
        let banner = parse_line("Building with floors 0-10 and 1 elevators", '!').unwrap();
        let indented = parse_line("  !E 0 open 1", '!').unwrap();

        // Assert
        assert_eq!(banner, Line::PassThrough("Building with floors 0-10 and 1 elevators"));
        assert_eq!(indented, Line::PassThrough("  !E 0 open 1"));
    }

    #[test]
    fn test_parse_elevator_line() {
        // Act
        let bare = command("!E 0 open 3");
        let loaded = command("!E 1 move 4 Phil Pat_Fulmer");

        // Assert
        assert_eq!(
            bare,
            Command::Elevator {
                elevator: 0,
                op: ElevatorOp::Open,
                floor: Some(3),
                passengers: vec![],
            }
        );
        assert_eq!(
            loaded,
            Command::Elevator {
                elevator: 1,
                op: ElevatorOp::Move,
                floor: Some(4),
                passengers: vec!["Phil".to_string(), "Pat_Fulmer".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_door_without_floor() {
        // Purpose: open and close may omit the floor, move may not

        // Act
        let open = command("!E 0 open");
        let close = command("!E 2 close");
        let moving = parse_line("!E 0 move", '!');

        // Assert
        assert_eq!(
            open,
            Command::Elevator {
                elevator: 0,
                op: ElevatorOp::Open,
                floor: None,
                passengers: vec![],
            }
        );
        assert!(matches!(close, Command::Elevator { op: ElevatorOp::Close, floor: None, .. }));
        assert!(matches!(
            moving,
            Err(FatalError::MissingToken { command: 'E', what: "floor" })
        ));
    }

    #[test]
    fn test_parse_person_lines() {
        let person = |op| Command::Person {
            name: "Tori".to_string(),
            op,
        };
        assert_eq!(command("!P Tori enter 0"), person(PersonOp::Enter(0)));
        assert_eq!(command("!P Tori leave 5"), person(PersonOp::Leave));
        assert_eq!(command("!P Tori leave"), person(PersonOp::Leave));
        assert_eq!(command("!P Tori on 7"), person(PersonOp::GetOff(7)));
        assert_eq!(command("!P Tori move 2"), person(PersonOp::ToLobby(2)));
    }

    #[test]
    fn test_parse_messages_keep_spacing() {
        // Purpose: W and F carry the raw remainder of the line

        // Act
        let warning = command("!W elevator  0 is   slow");
        let finish = command("!F Average wait: 12.5 ticks");
        let empty = command("!F");

        // Assert
        assert_eq!(
            warning,
            Command::Warning {
                message: "elevator  0 is   slow".to_string()
            }
        );
        assert_eq!(
            finish,
            Command::Finish {
                message: "Average wait: 12.5 ticks".to_string()
            }
        );
        assert_eq!(
            empty,
            Command::Finish {
                message: String::new()
            }
        );
    }

    #[test]
    fn test_parse_init_and_tick() {
        assert_eq!(
            command("!I 11 3"),
            Command::Init {
                floors: 11,
                elevators: 3
            }
        );
        assert_eq!(
            command("!T 42"),
            Command::Tick {
                time: "42".to_string()
            }
        );
    }

    #[test]
    fn test_grammar_violations() {
        // Purpose: Every grammar violation is reported as a fatal error

        assert!(matches!(parse_line("!X 1", '!'), Err(FatalError::UnknownCommand(c)) if c == "X"));
        assert!(matches!(parse_line("!", '!'), Err(FatalError::UnknownCommand(c)) if c.is_empty()));
        assert!(matches!(
            parse_line("!E 0 jump 1", '!'),
            Err(FatalError::BadElevatorOperation(op)) if op == "jump"
        ));
        assert!(matches!(
            parse_line("!P Al dance 1", '!'),
            Err(FatalError::BadPersonOperation(op)) if op == "dance"
        ));
        assert!(matches!(parse_line("!E zero open 1", '!'), Err(FatalError::BadNumber(_))));
        assert!(matches!(parse_line("!I 300 1", '!'), Err(FatalError::NumberTooLarge(300))));
        assert!(matches!(parse_line("!I 12x 1", '!'), Err(FatalError::BadNumber(t)) if t == "12x"));
        assert!(matches!(parse_line("!P Al enter -1", '!'), Err(FatalError::BadNumber(_))));
        assert!(matches!(
            parse_line("!T", '!'),
            Err(FatalError::MissingToken { command: 'T', .. })
        ));
        assert!(matches!(
            parse_line("!E 0 close x", '!'),
            Err(FatalError::BadNumber(t)) if t == "x"
        ));
    }
}

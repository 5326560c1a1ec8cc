/*
 * Unit tests for renderer module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_notify_dispatches_to_hooks
 * - test_recording_renderer
 * - test_json_renderer_lines
 * - test_json_output_file
 * - test_channel_renderer_preserves_order
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod renderer_tests {
    use crate::renderer::{open_output, spawn_renderer, JsonRenderer, NullRenderer, RecordingRenderer, Renderer};
    use crate::shared::{Location, Notification};

    #[derive(Default)]
    struct DoorWatcher {
        doors: Vec<(u8, bool)>,
        moves: Vec<(u8, u32)>,
    }

    impl Renderer for DoorWatcher {
        fn on_elevator_door(&mut self, elevator: u8, open: bool) {
            self.doors.push((elevator, open));
        }

        fn on_elevator_moved(&mut self, elevator: u8, _floor: u8, _slot: u32, rank: u32) {
            self.moves.push((elevator, rank));
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            Notification::Init {
                floors: 3,
                elevators: 1,
            },
            Notification::ElevatorDoor {
                elevator: 0,
                open: true,
            },
            Notification::PersonLocationChanged {
                name: "pat".to_string(),
                location: Location::Lobby(2),
            },
            Notification::ElevatorMoved {
                elevator: 0,
                floor: 2,
                slot: 0,
                rank: 0,
            },
            Notification::ElevatorDoor {
                elevator: 0,
                open: false,
            },
        ]
    }

    #[test]
    fn test_notify_dispatches_to_hooks() {
        // Purpose: The default notify routes each notification to its hook

        // Arrange
        let mut watcher = DoorWatcher::default();
        let mut headless = NullRenderer;

        // Act
        for n in sample() {
            watcher.notify(&n);
            headless.notify(&n);
        }

        // Assert
        assert_eq!(watcher.doors, vec![(0, true), (0, false)]);
        assert_eq!(watcher.moves, vec![(0, 0)]);
    }

    #[test]
    fn test_recording_renderer() {
        // Arrange
        let mut recorder = RecordingRenderer::new();

        // Act
        for n in sample() {
            recorder.notify(&n);
        }
        recorder.notify(&Notification::Warning {
            count: 1,
            message: "Teleport: back to lobby".to_string(),
        });

        // Assert
        assert_eq!(recorder.notifications.len(), 6);
        assert_eq!(recorder.warnings(), vec!["Teleport: back to lobby"]);
        assert!(!recorder.flushed);
    }

    #[test]
    fn test_json_renderer_lines() {
        // Arrange
        let mut renderer = JsonRenderer::new(Vec::new());

        // Act
        renderer.notify(&Notification::ElevatorMoved {
            elevator: 1,
            floor: 4,
            slot: 1,
            rank: 6,
        });
        renderer.notify(&Notification::PersonLocationChanged {
            name: "pat".to_string(),
            location: Location::Elevator(1),
        });
        renderer.flush();

        // Assert
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let moved: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(moved["event"], "elevator_moved");
        assert_eq!(moved["rank"], 6);
        let changed: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(changed["event"], "person_location_changed");
        assert_eq!(changed["location"]["kind"], "elevator");
        assert_eq!(changed["location"]["at"], 1);
    }

    #[test]
    fn test_json_output_file() {
        // Purpose: With an output path the JSON lines land in that file, not on a standard stream

        // Arrange
        let path = std::env::temp_dir().join(format!("elevator-display-{}.jsonl", std::process::id()));
        let mut renderer = JsonRenderer::new(open_output(Some(path.as_path())).unwrap());

        // Act
        renderer.notify(&Notification::TimeUpdated { time: "7".to_string() });
        renderer.flush();
        drop(renderer);

        // Assert
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let time: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(time["event"], "time_updated");
        assert_eq!(time["time"], "7");
    }

    #[test]
    fn test_channel_renderer_preserves_order() {
        // Purpose: Notifications cross to the renderer thread in order, and the thread flushes on hangup

        // Arrange
        let (mut forwarder, handle) = spawn_renderer(RecordingRenderer::new()).unwrap();

        // Act
        for n in sample() {
            forwarder.notify(&n);
        }
        drop(forwarder);
        let recorder = handle.join().unwrap();

        // Assert
        assert_eq!(recorder.notifications, sample());
        assert!(recorder.flushed);
    }
}

/*
 * Unit tests for diagnostics module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_diagnostics_init
 * - test_warning_counts_up
 * - test_teleport_message
 * - test_fatal_messages
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod diagnostics_tests {
    use crate::diagnostics::{Diagnostics, FatalError, Teleport};
    use crate::shared::Notification;

    #[test]
    fn test_diagnostics_init() {
        // Purpose: A fresh log has no warnings

        // Act
        let diagnostics = Diagnostics::new();

        // Assert
        assert_eq!(diagnostics.warning_count(), 0);
        assert_eq!(diagnostics.last_warning(), None);
    }

    #[test]
    fn test_warning_counts_up() {
        // Purpose: Each warning bumps the shared counter and replaces the displayed message

        // Arrange
        let mut diagnostics = Diagnostics::new();

        // Act
        let first = diagnostics.warn("elevator 0 stalled");
        let second = diagnostics.teleport(Teleport::OntoElevator);

        // Assert
        assert_eq!(
            first,
            Notification::Warning {
                count: 1,
                message: "elevator 0 stalled".to_string()
            }
        );
        assert_eq!(
            second,
            Notification::Warning {
                count: 2,
                message: "Teleport: onto elevator".to_string()
            }
        );
        assert_eq!(diagnostics.warning_count(), 2);
        assert_eq!(diagnostics.last_warning(), Some("Teleport: onto elevator"));
    }

    #[test]
    fn test_teleport_message() {
        assert_eq!(Teleport::GotOffNoElevator.to_string(), "Teleport: got off no elevator");
        assert_eq!(Teleport::BackToLobby.to_string(), "Teleport: back to lobby");
        assert_eq!(
            Teleport::NotLeavingFromWorkspace.to_string(),
            "Teleport: not leaving from workspace"
        );
    }

    #[test]
    fn test_fatal_messages() {
        assert_eq!(
            FatalError::MultipleInitialization.to_string(),
            "Multiple initialization lines"
        );
        assert_eq!(
            FatalError::FloorOutOfRange { floor: 12, floors: 11 }.to_string(),
            "floor 12 is outside the building (11 floors)"
        );
    }
}

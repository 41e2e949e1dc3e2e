//! Input mapping
//!
//! Taps, clicks and the space bar are one "primary" action. What it does
//! depends on the phase.

use crate::sim::{Command, GamePhase};

/// High-level actions a page can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Tap, click or space
    Primary,
    /// "Play again"
    Restart,
    /// Switch demo mode on or off (host-only, never reaches the engine)
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<HostAction> {
    match code {
        "Space" => Some(HostAction::Primary),
        "Enter" | "KeyR" => Some(HostAction::Restart),
        "KeyI" => Some(HostAction::ToggleAutopilot),
        _ => None,
    }
}

/// Translate an action into the engine command valid for `phase`
pub fn command_for(action: HostAction, phase: GamePhase) -> Option<Command> {
    match (action, phase) {
        (HostAction::Primary, GamePhase::NotStarted) => Some(Command::Start),
        (HostAction::Primary, GamePhase::Running) => Some(Command::Activate),
        (HostAction::Restart, GamePhase::Over) => Some(Command::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(action_for_key("Space"), Some(HostAction::Primary));
        assert_eq!(action_for_key("KeyR"), Some(HostAction::Restart));
        assert_eq!(action_for_key("Enter"), Some(HostAction::Restart));
        assert_eq!(action_for_key("KeyI"), Some(HostAction::ToggleAutopilot));
        assert_eq!(action_for_key("KeyW"), None);
    }

    #[test]
    fn test_primary_by_phase() {
        assert_eq!(
            command_for(HostAction::Primary, GamePhase::NotStarted),
            Some(Command::Start)
        );
        assert_eq!(
            command_for(HostAction::Primary, GamePhase::Running),
            Some(Command::Activate)
        );
        assert_eq!(command_for(HostAction::Primary, GamePhase::Over), None);
    }

    #[test]
    fn test_restart_only_when_over() {
        assert_eq!(command_for(HostAction::Restart, GamePhase::NotStarted), None);
        assert_eq!(command_for(HostAction::Restart, GamePhase::Running), None);
        assert_eq!(
            command_for(HostAction::Restart, GamePhase::Over),
            Some(Command::Reset)
        );
        assert_eq!(command_for(HostAction::ToggleAutopilot, GamePhase::Running), None);
    }
}

//! Driver states and the commands sent to the timer thread.

use serde::{Deserialize, Serialize};

/// Clock/driver state. `Stopped` is the initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverState {
    #[default]
    Stopped,
    Running,
}

/// Commands sent from the driver to its timer thread.
#[derive(Debug)]
pub enum TimerCommand {
    /// Exit after the in-flight tick, if any.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_default_state_is_stopped() {
        assert_eq!(DriverState::default(), DriverState::Stopped);
        assert_eq!(serde_json::to_string(&DriverState::Running).unwrap(), "\"running\"");
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<TimerCommand>();
        tx.send(TimerCommand::Shutdown).unwrap();
        assert!(matches!(rx.try_recv(), Ok(TimerCommand::Shutdown)));
        assert!(rx.try_recv().is_err());
    }
}

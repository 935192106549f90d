use serde::{Deserialize, Serialize};

use crate::traits::NanoSecs;

/// Where a controller is in its lifecycle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerPhase {
    /// No update has happened yet (or since the last reset).
    Fresh,
    /// At least one update went through; the derivative term is active.
    Running,
}

/// Point-in-time copy of a controller's running state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControllerStatus<T> {
    pub phase: ControllerPhase,
    pub last_time: Option<NanoSecs>,
    pub last_error: T,
    pub error_sum: T,
}

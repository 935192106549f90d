pub mod traits;
pub mod number;
pub mod clock;
pub mod config;
pub mod status;
pub mod error;
pub mod controller;

pub use clock::{MonotonicClock, ScriptedClock};
pub use config::PidGains;
pub use controller::PidController;
pub use error::PidError;
pub use number::Number;
pub use status::{ControllerPhase, ControllerStatus};
pub use traits::{BoxedTimeSource, NanoSecs, TimeSource};

pub mod controller;
pub mod state;

pub use controller::{BreathingController, BreathingEvent};
pub use state::{BreathCue, BreathPhase, BreathingConfig, BreathingSession};

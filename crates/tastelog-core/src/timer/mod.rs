mod engine;

pub use engine::{CountdownTimer, TimerState};

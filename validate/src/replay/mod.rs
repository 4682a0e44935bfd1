//! Replay pacing for the intro schedule
//!
//! The page session runs on virtual time; the clock here decides how long
//! the CLI waits between cues (not at all in accelerated mode).

pub mod clock;

pub use clock::{ReplayClock, format_time, parse_time_arg};

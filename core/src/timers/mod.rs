//! Timer system
//!
//! Deferred actions for the page session. Every delayed transition in the
//! intro, the loading screen and the copy notification is a cue scheduled
//! here, so tearing the page down is a single `cancel_all`.

mod registry;

pub use registry::{TimerHandle, TimerRegistry};

//! Verification of replayed intro behavior
//!
//! Two layers: the built-in phase-order checks every replay must pass, and
//! optional checkpoint files describing the page state at given times.

pub mod checkpoint;
pub mod milestones;

pub use checkpoint::{CheckpointResult, CheckpointVerifier, Expectations};
pub use milestones::Milestones;

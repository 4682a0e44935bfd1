//! Typed-text hero animation
//!
//! - **speed**: randomized per-character delays with a hard floor
//! - **highlight**: splitting partially revealed text around accented substrings
//! - **machine**: the title/description reveal state machine

mod highlight;
mod machine;
mod speed;

pub use highlight::{Segment, char_prefix, highlight_range, highlight_segments};
pub use machine::{TypingAnimation, TypingCue, TypingPhase, TypingScript, TypingState};
pub use speed::jittered_delay;

pub mod blocker;
pub mod config;
pub mod content;
pub mod loading;
pub mod menu;
pub mod navigation;
pub mod notification;
pub mod reveal;
pub mod session;
pub mod timers;
pub mod typing;

// Re-exports for convenience
pub use blocker::{BlockGuard, BlockedEvent, InteractionBlocker, InteractionSurface, SurfaceError};
pub use config::{ConfigError, SiteConfig, SiteConfigExt};
pub use content::{ContentIssue, TechCategory, validate_content};
pub use loading::{LoadingCue, LoadingScreen};
pub use menu::{MenuDismiss, MobileMenu};
pub use navigation::{Section, SectionError, scroll_target};
pub use notification::{
    Alert, Clipboard, ClipboardError, CopyNotification, CopyOutcome, NotificationPhase, NotifyCue,
    copy_with_fallback, fallback_message,
};
pub use reveal::{RevealCue, RevealSequencer, SequenceState};
pub use session::{IntroSnapshot, PageCue, PageSession};
pub use timers::{TimerHandle, TimerRegistry};
pub use typing::{Segment, TypingAnimation, TypingCue, TypingPhase, TypingState};

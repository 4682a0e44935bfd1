//! Page-wide interaction blocking while the intro plays
//!
//! The blocker is a scoped resource: [`BlockGuard::acquire`] locks scrolling
//! and installs one interceptor per [`BlockedEvent`] on an
//! [`InteractionSurface`]; releasing (explicitly or on drop) undoes exactly
//! what was installed, once.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no document available")]
    NoDocument,

    #[error("failed to install '{event}' interceptor: {reason}")]
    Install { event: &'static str, reason: String },
}

/// User input suppressed until the intro completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockedEvent {
    Click,
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
    KeyDown,
    KeyUp,
    Wheel,
    Scroll,
}

impl BlockedEvent {
    pub const ALL: [BlockedEvent; 9] = [
        BlockedEvent::Click,
        BlockedEvent::MouseDown,
        BlockedEvent::MouseUp,
        BlockedEvent::TouchStart,
        BlockedEvent::TouchEnd,
        BlockedEvent::KeyDown,
        BlockedEvent::KeyUp,
        BlockedEvent::Wheel,
        BlockedEvent::Scroll,
    ];

    /// DOM event type name.
    pub fn name(self) -> &'static str {
        match self {
            BlockedEvent::Click => "click",
            BlockedEvent::MouseDown => "mousedown",
            BlockedEvent::MouseUp => "mouseup",
            BlockedEvent::TouchStart => "touchstart",
            BlockedEvent::TouchEnd => "touchend",
            BlockedEvent::KeyDown => "keydown",
            BlockedEvent::KeyUp => "keyup",
            BlockedEvent::Wheel => "wheel",
            BlockedEvent::Scroll => "scroll",
        }
    }

    /// Everything but wheel is intercepted in the capture phase.
    pub fn capture(self) -> bool {
        !matches!(self, BlockedEvent::Wheel)
    }

    /// Wheel must be non-passive or `preventDefault` is ignored.
    pub fn passive(self) -> bool {
        false
    }
}

/// Where interceptors are installed. The web app implements this over the
/// document and body; tests use a recording mock.
pub trait InteractionSurface {
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
    fn install(&mut self, event: BlockedEvent) -> Result<(), SurfaceError>;
    fn remove(&mut self, event: BlockedEvent);
}

/// Held while interactions are blocked.
pub struct BlockGuard<S: InteractionSurface> {
    surface: S,
    installed: Vec<BlockedEvent>,
    released: bool,
}

impl<S: InteractionSurface> BlockGuard<S> {
    pub fn acquire(mut surface: S) -> Self {
        surface.lock_scroll();
        let mut installed = Vec::with_capacity(BlockedEvent::ALL.len());
        for event in BlockedEvent::ALL {
            match surface.install(event) {
                Ok(()) => installed.push(event),
                Err(e) => tracing::warn!(error = %e, "Interceptor not installed"),
            }
        }
        tracing::debug!(count = installed.len(), "Interactions blocked");
        Self {
            surface,
            installed,
            released: false,
        }
    }

    /// Remove interceptors and restore scrolling. Returns false if already released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        for event in self.installed.drain(..) {
            self.surface.remove(event);
        }
        self.surface.unlock_scroll();
        tracing::debug!("Interactions unblocked");
        true
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn installed(&self) -> &[BlockedEvent] {
        &self.installed
    }
}

impl<S: InteractionSurface> Drop for BlockGuard<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Keeps a guard in step with the intro's completion flag.
///
/// Blocking starts on the first sync while incomplete and is lifted for
/// good on the first sync that sees completion.
pub struct InteractionBlocker<S: InteractionSurface> {
    guard: Option<BlockGuard<S>>,
    lifted: bool,
}

impl<S: InteractionSurface> Default for InteractionBlocker<S> {
    fn default() -> Self {
        Self {
            guard: None,
            lifted: false,
        }
    }
}

impl<S: InteractionSurface> InteractionBlocker<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, complete: bool, make_surface: impl FnOnce() -> S) {
        if self.lifted {
            return;
        }
        if complete {
            self.lift();
        } else if self.guard.is_none() {
            self.guard = Some(BlockGuard::acquire(make_surface()));
        }
    }

    /// Release immediately (completion or teardown). Idempotent.
    pub fn lift(&mut self) {
        self.lifted = true;
        if let Some(mut guard) = self.guard.take() {
            guard.release();
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.guard.as_ref().is_some_and(|guard| !guard.is_released())
    }

    pub fn is_lifted(&self) -> bool {
        self.lifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Log {
        scroll_locked: bool,
        active: Vec<BlockedEvent>,
        removals: usize,
        unlocks: usize,
    }

    #[derive(Clone, Default)]
    struct MockSurface {
        log: Rc<RefCell<Log>>,
        fail_on: Option<BlockedEvent>,
    }

    impl InteractionSurface for MockSurface {
        fn lock_scroll(&mut self) {
            self.log.borrow_mut().scroll_locked = true;
        }

        fn unlock_scroll(&mut self) {
            let mut log = self.log.borrow_mut();
            log.scroll_locked = false;
            log.unlocks += 1;
        }

        fn install(&mut self, event: BlockedEvent) -> Result<(), SurfaceError> {
            if self.fail_on == Some(event) {
                return Err(SurfaceError::Install {
                    event: event.name(),
                    reason: "test".to_string(),
                });
            }
            self.log.borrow_mut().active.push(event);
            Ok(())
        }

        fn remove(&mut self, event: BlockedEvent) {
            let mut log = self.log.borrow_mut();
            log.active.retain(|e| *e != event);
            log.removals += 1;
        }
    }

    #[test]
    fn acquire_installs_every_interceptor() {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        let guard = BlockGuard::acquire(surface);

        assert_eq!(guard.installed(), &BlockedEvent::ALL);
        assert!(log.borrow().scroll_locked);
        assert_eq!(log.borrow().active.len(), 9);
    }

    #[test]
    fn double_release_removes_once() {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        let mut guard = BlockGuard::acquire(surface);

        assert!(guard.release());
        assert!(!guard.release());
        drop(guard);

        let log = log.borrow();
        assert!(!log.scroll_locked);
        assert!(log.active.is_empty());
        assert_eq!(log.removals, 9);
        assert_eq!(log.unlocks, 1);
    }

    #[test]
    fn drop_releases() {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        drop(BlockGuard::acquire(surface));
        assert!(log.borrow().active.is_empty());
        assert!(!log.borrow().scroll_locked);
    }

    #[test]
    fn failed_install_is_skipped_on_release() {
        let surface = MockSurface {
            fail_on: Some(BlockedEvent::Wheel),
            ..MockSurface::default()
        };
        let log = surface.log.clone();
        let mut guard = BlockGuard::acquire(surface);

        assert_eq!(guard.installed().len(), 8);
        assert!(!guard.installed().contains(&BlockedEvent::Wheel));
        guard.release();
        assert_eq!(log.borrow().removals, 8);
    }

    #[test]
    fn blocker_lifts_permanently() {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        let mut blocker = InteractionBlocker::new();

        blocker.sync(false, || surface.clone());
        blocker.sync(false, || surface.clone());
        assert!(blocker.is_blocking());
        assert_eq!(log.borrow().active.len(), 9);

        blocker.sync(true, || surface.clone());
        assert!(!blocker.is_blocking());
        assert!(blocker.is_lifted());

        // Never re-acquired, even if asked while "incomplete"
        blocker.sync(false, || surface.clone());
        assert!(!blocker.is_blocking());
        assert!(log.borrow().active.is_empty());
        assert_eq!(log.borrow().unlocks, 1);
    }

    #[test]
    fn teardown_twice_is_harmless() {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        let mut blocker = InteractionBlocker::new();
        blocker.sync(false, || surface.clone());

        blocker.lift();
        blocker.lift();
        assert_eq!(log.borrow().removals, 9);
        assert_eq!(log.borrow().unlocks, 1);
    }

    #[test]
    fn wheel_is_the_only_bubbling_interceptor() {
        for event in BlockedEvent::ALL {
            assert_eq!(event.capture(), event != BlockedEvent::Wheel);
            assert!(!event.passive());
        }
    }
}

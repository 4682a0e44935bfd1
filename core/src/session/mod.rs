//! Page session: the single driver for one page view
//!
//! A [`PageSession`] owns the timer registry and every timed machine on the
//! page. Fired timers come back as [`PageCue`]s; [`PageSession::dispatch`]
//! hands each cue to the machine that owns it and schedules whatever that
//! machine asks for next. Cross-machine hand-offs (loading finished → start
//! typing, buttons shown → reveal header) happen here and nowhere else.
//!
//! The session never sleeps. A real frontend arms a browser timeout for each
//! handle from [`PageSession::take_unarmed`] and calls [`PageSession::fire`];
//! tests and the replay CLI call [`PageSession::advance`] or
//! [`PageSession::step`] instead.

use std::time::Duration;

use folio_types::SiteConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::loading::{LoadingCue, LoadingScreen};
use crate::notification::{CopyNotification, NotificationPhase, NotificationTimings, NotifyCue};
use crate::reveal::{RevealCue, RevealSequencer, RevealTimings, SequenceState};
use crate::timers::{TimerHandle, TimerRegistry};
use crate::typing::{TypingAnimation, TypingCue, TypingScript, TypingState};

/// Every timer action on the page, tagged by owning machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCue {
    Loading(LoadingCue),
    Typing(TypingCue),
    Reveal(RevealCue),
    Notify(NotifyCue),
}

/// Render-facing view of the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroSnapshot {
    pub elapsed: Duration,
    pub loading_visible: bool,
    pub loading_progress: f64,
    pub loading_done: bool,
    pub typing: TypingState,
    pub sequence: SequenceState,
    pub notification: NotificationPhase,
}

impl IntroSnapshot {
    pub fn is_animations_complete(&self) -> bool {
        self.sequence.complete
    }

    pub fn notification_shown(&self) -> bool {
        self.notification != NotificationPhase::Hidden
    }

    pub fn notification_visible(&self) -> bool {
        self.notification == NotificationPhase::Entered
    }
}

pub struct PageSession {
    timers: TimerRegistry<PageCue>,
    rng: StdRng,
    loading_enabled: bool,
    start_delay: Duration,
    typing_start_after_loading: Duration,
    loading: LoadingScreen,
    typing: TypingAnimation,
    reveal: RevealSequencer,
    notification: CopyNotification,
    /// Outstanding cue of the current notification run
    notify_timer: Option<TimerHandle>,
    mounted: bool,
    torn_down: bool,
}

impl PageSession {
    pub fn new(config: &SiteConfig, seed: u64) -> Self {
        Self {
            timers: TimerRegistry::new(),
            rng: StdRng::seed_from_u64(seed),
            loading_enabled: config.intro.loading_screen,
            start_delay: Duration::from_millis(config.intro.start_delay_ms),
            typing_start_after_loading: Duration::from_millis(config.loading.typing_start_delay_ms),
            loading: LoadingScreen::new(config.loading.clone()),
            typing: TypingAnimation::new(TypingScript::from_config(&config.intro)),
            reveal: RevealSequencer::new(RevealTimings::from_config(&config.intro)),
            notification: CopyNotification::new(NotificationTimings::from_config(
                &config.notification,
            )),
            notify_timer: None,
            mounted: false,
            torn_down: false,
        }
    }

    /// Arm the first cue. Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.mounted || self.torn_down {
            return;
        }
        self.mounted = true;

        if self.loading_enabled {
            let (cue, delay) = self.loading.begin();
            self.timers.schedule(PageCue::Loading(cue), delay);
        } else {
            self.timers.schedule(PageCue::Typing(TypingCue::Begin), self.start_delay);
        }
        tracing::debug!(loading = self.loading_enabled, "Page session mounted");
    }

    /// Apply a fired cue and schedule its follow-up.
    pub fn dispatch(&mut self, cue: PageCue) {
        if self.torn_down {
            return;
        }
        tracing::trace!(?cue, at = ?self.timers.now(), "Dispatching cue");

        match cue {
            PageCue::Loading(cue) => {
                let next = self.loading.on_cue(cue, &mut self.rng);
                self.schedule_next(next.map(|(c, d)| (PageCue::Loading(c), d)));
                if cue == LoadingCue::Finish && self.loading.is_finished() {
                    self.timers.schedule(
                        PageCue::Typing(TypingCue::Begin),
                        self.typing_start_after_loading,
                    );
                }
            }
            PageCue::Typing(cue) => {
                let next = self.typing.on_cue(cue, &mut self.rng);
                self.schedule_next(next.map(|(c, d)| (PageCue::Typing(c), d)));
                if self.typing.state().buttons_visible
                    && let Some((cue, delay)) = self.reveal.on_buttons_visible()
                {
                    self.timers.schedule(PageCue::Reveal(cue), delay);
                }
            }
            PageCue::Reveal(cue) => {
                let next = self.reveal.on_cue(cue);
                self.schedule_next(next.map(|(c, d)| (PageCue::Reveal(c), d)));
            }
            PageCue::Notify(cue) => {
                self.notify_timer = self
                    .notification
                    .on_cue(cue)
                    .map(|(next, delay)| self.timers.schedule(PageCue::Notify(next), delay));
            }
        }
    }

    fn schedule_next(&mut self, next: Option<(PageCue, Duration)>) {
        if let Some((cue, delay)) = next {
            self.timers.schedule(cue, delay);
        }
    }

    /// A real timeout elapsed. Returns false for stale or cancelled handles.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.timers.fire(handle) {
            Some(cue) => {
                self.dispatch(cue);
                true
            }
            None => false,
        }
    }

    /// Run every cue due within `by` of virtual time, including cues scheduled
    /// along the way.
    pub fn advance(&mut self, by: Duration) -> Vec<(Duration, PageCue)> {
        let deadline = self.timers.now() + by;
        let mut fired = Vec::new();
        while let Some((_, cue)) = self.timers.pop_due(deadline) {
            fired.push((self.timers.now(), cue));
            self.dispatch(cue);
        }
        self.timers.advance_clock(deadline);
        fired
    }

    /// Jump to the next pending cue and run it.
    pub fn step(&mut self) -> Option<(Duration, PageCue)> {
        self.step_until(Duration::MAX)
    }

    /// Like [`step`](Self::step), but only for cues due at or before
    /// `deadline`. The clock is left alone when nothing is due.
    pub fn step_until(&mut self, deadline: Duration) -> Option<(Duration, PageCue)> {
        let (_, cue) = self.timers.pop_due(deadline)?;
        let at = self.timers.now();
        self.dispatch(cue);
        Some((at, cue))
    }

    /// The copy succeeded: (re)start the notification.
    pub fn notify_copied(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(stale) = self.notify_timer.take() {
            self.timers.cancel(stale);
            tracing::debug!("Restarting copy notification");
        }
        let (cue, delay) = self.notification.show();
        self.notify_timer = Some(self.timers.schedule(PageCue::Notify(cue), delay));
    }

    /// Cancel every outstanding timer. Nothing scheduled before this will run.
    pub fn teardown(&mut self) -> Vec<TimerHandle> {
        self.torn_down = true;
        self.notify_timer = None;
        let cancelled = self.timers.cancel_all();
        if !cancelled.is_empty() {
            tracing::debug!(count = cancelled.len(), "Cancelled pending timers");
        }
        cancelled
    }

    /// Handles the timer backend still has to arm, with their delays.
    pub fn take_unarmed(&mut self) -> Vec<(TimerHandle, Duration)> {
        self.timers.take_unarmed()
    }

    pub fn snapshot(&self) -> IntroSnapshot {
        IntroSnapshot {
            elapsed: self.timers.now(),
            loading_visible: self.loading_enabled && !self.loading.is_finished(),
            loading_progress: self.loading.progress(),
            loading_done: self.loading.is_done(),
            typing: self.typing.state(),
            sequence: self.reveal.state(),
            notification: self.notification.phase(),
        }
    }

    pub fn is_animations_complete(&self) -> bool {
        self.reveal.is_animations_complete()
    }

    pub fn typing(&self) -> &TypingAnimation {
        &self.typing
    }

    pub fn loading(&self) -> &LoadingScreen {
        &self.loading
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

//! End-to-end checks of the page choreography on virtual time.

use std::cell::RefCell;
use std::time::Duration;

use folio_core::typing::TypingCue;
use folio_core::{
    Alert, Clipboard, ClipboardError, CopyOutcome, IntroSnapshot, MenuDismiss, MobileMenu,
    PageCue, PageSession, RevealCue, SiteConfig, copy_with_fallback,
};

/// Step through the whole intro, recording a snapshot after every cue.
fn replay(config: &SiteConfig, seed: u64) -> Vec<(Duration, PageCue, IntroSnapshot)> {
    let mut session = PageSession::new(config, seed);
    session.mount();
    let mut log = Vec::new();
    while let Some((at, cue)) = session.step() {
        log.push((at, cue, session.snapshot()));
    }
    log
}

fn first_time(log: &[(Duration, PageCue, IntroSnapshot)], pred: impl Fn(&IntroSnapshot) -> bool) -> Duration {
    log.iter()
        .find(|(_, _, snapshot)| pred(snapshot))
        .map(|(at, _, _)| *at)
        .expect("condition never reached")
}

#[test]
fn phases_happen_in_order() {
    for seed in [0, 1, 42, 1234] {
        let log = replay(&SiteConfig::default(), seed);

        let loaded = first_time(&log, |s| !s.loading_visible);
        let started = first_time(&log, |s| s.typing.started);
        let title_done = first_time(&log, |s| s.typing.revealed_description > 0);
        let buttons = first_time(&log, |s| s.typing.buttons_visible);
        let header = first_time(&log, |s| s.sequence.header_visible);
        let back = first_time(&log, |s| s.sequence.back_button_visible);
        let complete = first_time(&log, |s| s.sequence.complete);

        assert!(loaded <= started);
        assert!(started < title_done);
        assert!(title_done < buttons);
        assert_eq!(header - buttons, Duration::from_millis(300));
        assert_eq!(back - header, Duration::from_millis(400));
        assert_eq!(complete - back, Duration::from_millis(200));
    }
}

#[test]
fn revealed_text_is_monotone_and_completes_before_buttons() {
    let config = SiteConfig::default();
    let log = replay(&config, 8);
    let title_len = config.intro.title.chars().count();
    let description_len = config.intro.description.chars().count();

    let mut previous = (0, 0);
    for (_, _, snapshot) in &log {
        let current = (snapshot.typing.revealed_title, snapshot.typing.revealed_description);
        assert!(current.0 >= previous.0 && current.1 >= previous.1);
        assert!(!(snapshot.typing.typing_title && snapshot.typing.typing_description));
        if snapshot.typing.buttons_visible {
            assert_eq!(current, (title_len, description_len));
        }
        previous = current;
    }
}

#[test]
fn every_typing_delay_respects_the_floor() {
    let mut config = SiteConfig::default();
    config.intro.loading_screen = false;
    config.intro.description_speed.base_ms = 21.0;
    config.intro.description_speed.variation = 0.9;

    let mut session = PageSession::new(&config, 5);
    session.mount();
    let mut last_tick: Option<Duration> = None;
    while let Some((at, cue)) = session.step() {
        if cue == PageCue::Typing(TypingCue::DescriptionTick) {
            if let Some(last) = last_tick {
                assert!(at - last >= Duration::from_millis(20));
            }
            last_tick = Some(at);
        }
    }
}

#[test]
fn cancel_all_mid_sequence_freezes_the_page() {
    let mut session = PageSession::new(&SiteConfig::default(), 3);
    session.mount();
    session.advance(Duration::from_millis(4000));
    let frozen = session.snapshot();
    assert!(!frozen.is_animations_complete());

    session.teardown();
    assert!(session.advance(Duration::from_secs(120)).is_empty());
    assert_eq!(session.pending_timers(), 0);
    assert_eq!(session.snapshot().typing, frozen.typing);
    assert_eq!(session.snapshot().sequence, frozen.sequence);
}

#[test]
fn reveal_never_runs_ahead_of_typing() {
    let log = replay(&SiteConfig::default(), 99);
    let buttons_at = first_time(&log, |s| s.typing.buttons_visible);
    for (at, cue, _) in &log {
        if matches!(cue, PageCue::Reveal(RevealCue::ShowHeader)) {
            assert!(*at >= buttons_at);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard
// ─────────────────────────────────────────────────────────────────────────────

struct FakeClipboard(Result<(), ClipboardError>);

impl Clipboard for FakeClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        self.0.clone()
    }
}

#[derive(Default)]
struct Alerts(RefCell<Vec<String>>);

impl Alert for Alerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[tokio::test]
async fn copy_success_runs_notification() {
    let config = SiteConfig::default();
    let mut session = PageSession::new(&config, 0);
    let alerts = Alerts::default();

    let outcome = copy_with_fallback(&FakeClipboard(Ok(())), &alerts, &config.notification.username).await;
    assert_eq!(outcome, CopyOutcome::Copied);
    session.notify_copied();
    assert!(session.snapshot().notification_shown());
    assert!(!session.snapshot().notification_visible());

    session.advance(Duration::from_millis(10));
    assert!(session.snapshot().notification_visible());
    session.advance(Duration::from_millis(2490));
    assert!(session.snapshot().notification_shown());
    assert!(!session.snapshot().notification_visible());
    session.advance(Duration::from_millis(500));
    assert!(!session.snapshot().notification_shown());
    assert!(alerts.0.borrow().is_empty());
}

#[tokio::test]
async fn copy_failure_alerts_and_never_notifies() {
    let config = SiteConfig::default();
    let session = PageSession::new(&config, 0);
    let alerts = Alerts::default();

    let outcome = copy_with_fallback(
        &FakeClipboard(Err(ClipboardError::Unavailable)),
        &alerts,
        &config.notification.username,
    )
    .await;

    assert_eq!(outcome, CopyOutcome::AlertShown);
    assert_eq!(
        alerts.0.borrow().as_slice(),
        ["Username: _notNguyen (copied to clipboard)"]
    );
    assert!(!session.snapshot().notification_shown());
}

// ─────────────────────────────────────────────────────────────────────────────
// Menu
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn menu_unlocks_only_after_completion() {
    let mut config = SiteConfig::default();
    config.intro.loading_screen = false;
    let mut session = PageSession::new(&config, 12);
    let mut menu = MobileMenu::default();
    session.mount();

    session.advance(Duration::from_millis(1000));
    assert!(!menu.toggle(session.is_animations_complete()));
    assert!(!menu.is_open());

    while session.step().is_some() {}
    assert!(menu.toggle(session.is_animations_complete()));
    assert!(menu.is_open());
    assert!(menu.dismiss(MenuDismiss::Escape, session.is_animations_complete()));
}

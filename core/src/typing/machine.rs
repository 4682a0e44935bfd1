//! Hero typing animation
//!
//! Reveals the title, pauses, reveals the description, then settles the
//! cursor and shows the hero buttons. Each transition is driven by a fired
//! [`TypingCue`] and returns the next cue to schedule, so the machine never
//! touches a timer itself.
//!
//! # Lifecycle
//!
//! `Idle → TypingTitle → PauseAfterTitle → TypingDescription → Settling → Done`
//!
//! A cue that does not belong to the current phase is ignored, which keeps
//! the two reveal phases from ever overlapping.

use std::time::Duration;

use folio_types::{IntroConfig, TypingSpeed};
use rand::Rng;

use super::highlight::{char_prefix, highlight_range, highlight_segments, Segment};
use super::speed::jittered_delay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingPhase {
    #[default]
    Idle,
    TypingTitle,
    PauseAfterTitle,
    TypingDescription,
    Settling,
    Done,
}

/// Timer actions owned by the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingCue {
    Begin,
    TitleTick,
    BeginDescription,
    DescriptionTick,
    HideCursor,
    ShowButtons,
}

/// Render-facing flags of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    /// Hero text has faded in
    pub started: bool,
    pub revealed_title: usize,
    pub revealed_description: usize,
    pub typing_title: bool,
    pub typing_description: bool,
    pub cursor_visible: bool,
    pub buttons_visible: bool,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            started: false,
            revealed_title: 0,
            revealed_description: 0,
            typing_title: false,
            typing_description: false,
            cursor_visible: true,
            buttons_visible: false,
        }
    }
}

/// Texts and pacing for one run of the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingScript {
    pub title: String,
    pub description: String,
    pub highlighted_name: String,
    pub highlighted_phrase: String,
    /// Title length (in characters) after which the greeting pause applies
    pub greeting_chars: Option<usize>,
    pub title_speed: TypingSpeed,
    pub greeting_pause: TypingSpeed,
    pub title_pause: TypingSpeed,
    pub description_speed: TypingSpeed,
    pub min_delay_ms: f64,
    pub cursor_hide_delay: Duration,
    pub buttons_delay: Duration,
}

impl TypingScript {
    pub fn from_config(config: &IntroConfig) -> Self {
        let greeting_chars = config
            .greeting
            .as_deref()
            .filter(|greeting| !greeting.is_empty() && config.title.starts_with(greeting))
            .map(|greeting| greeting.chars().count());

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            highlighted_name: config.highlighted_name.clone(),
            highlighted_phrase: config.highlighted_phrase.clone(),
            greeting_chars,
            title_speed: config.title_speed,
            greeting_pause: config.greeting_pause,
            title_pause: config.title_pause,
            description_speed: config.description_speed,
            min_delay_ms: config.min_delay_ms,
            cursor_hide_delay: Duration::from_millis(config.cursor_hide_delay_ms),
            buttons_delay: Duration::from_millis(config.buttons_delay_ms),
        }
    }

    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

impl Default for TypingScript {
    fn default() -> Self {
        Self::from_config(&IntroConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct TypingAnimation {
    script: TypingScript,
    title_len: usize,
    description_len: usize,
    phase: TypingPhase,
    state: TypingState,
}

impl TypingAnimation {
    pub fn new(script: TypingScript) -> Self {
        Self {
            title_len: script.title_len(),
            description_len: script.description_len(),
            script,
            phase: TypingPhase::Idle,
            state: TypingState::default(),
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn script(&self) -> &TypingScript {
        &self.script
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypingPhase::Done
    }

    pub fn revealed_title(&self) -> &str {
        char_prefix(&self.script.title, self.state.revealed_title)
    }

    pub fn revealed_description(&self) -> &str {
        char_prefix(&self.script.description, self.state.revealed_description)
    }

    /// Revealed title split around the highlighted name.
    pub fn title_segments(&self) -> Vec<Segment<'_>> {
        let range = highlight_range(&self.script.title, &self.script.highlighted_name);
        highlight_segments(self.revealed_title(), range)
    }

    /// Revealed description split around the highlighted phrase.
    pub fn description_segments(&self) -> Vec<Segment<'_>> {
        let range = highlight_range(&self.script.description, &self.script.highlighted_phrase);
        highlight_segments(self.revealed_description(), range)
    }

    /// Apply a fired cue. Returns the follow-up cue and its delay, if any.
    pub fn on_cue<R: Rng + ?Sized>(
        &mut self,
        cue: TypingCue,
        rng: &mut R,
    ) -> Option<(TypingCue, Duration)> {
        let floor = self.script.min_delay_ms;
        match (self.phase, cue) {
            (TypingPhase::Idle, TypingCue::Begin) => {
                self.enter(TypingPhase::TypingTitle);
                self.state.started = true;
                self.state.typing_title = true;
                Some((
                    TypingCue::TitleTick,
                    jittered_delay(self.script.title_speed, floor, rng),
                ))
            }
            (TypingPhase::TypingTitle, TypingCue::TitleTick) => {
                if self.state.revealed_title < self.title_len {
                    self.state.revealed_title += 1;
                    let speed = if Some(self.state.revealed_title) == self.script.greeting_chars {
                        self.script.greeting_pause
                    } else {
                        self.script.title_speed
                    };
                    Some((TypingCue::TitleTick, jittered_delay(speed, floor, rng)))
                } else {
                    self.state.typing_title = false;
                    self.enter(TypingPhase::PauseAfterTitle);
                    Some((
                        TypingCue::BeginDescription,
                        jittered_delay(self.script.title_pause, floor, rng),
                    ))
                }
            }
            (TypingPhase::PauseAfterTitle, TypingCue::BeginDescription) => {
                self.enter(TypingPhase::TypingDescription);
                self.state.typing_description = true;
                Some((
                    TypingCue::DescriptionTick,
                    jittered_delay(self.script.description_speed, floor, rng),
                ))
            }
            (TypingPhase::TypingDescription, TypingCue::DescriptionTick) => {
                if self.state.revealed_description < self.description_len {
                    self.state.revealed_description += 1;
                    Some((
                        TypingCue::DescriptionTick,
                        jittered_delay(self.script.description_speed, floor, rng),
                    ))
                } else {
                    self.state.typing_description = false;
                    self.enter(TypingPhase::Settling);
                    Some((TypingCue::HideCursor, self.script.cursor_hide_delay))
                }
            }
            (TypingPhase::Settling, TypingCue::HideCursor) if self.state.cursor_visible => {
                self.state.cursor_visible = false;
                Some((TypingCue::ShowButtons, self.script.buttons_delay))
            }
            (TypingPhase::Settling, TypingCue::ShowButtons) if !self.state.cursor_visible => {
                self.state.buttons_visible = true;
                self.enter(TypingPhase::Done);
                None
            }
            (phase, cue) => {
                tracing::trace!(?phase, ?cue, "Ignoring out-of-phase typing cue");
                None
            }
        }
    }

    fn enter(&mut self, phase: TypingPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "Typing phase changed");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn short_script() -> TypingScript {
        let config = IntroConfig {
            title: "Hi! Bo".to_string(),
            description: "Makes things.".to_string(),
            highlighted_name: "Bo".to_string(),
            highlighted_phrase: "things".to_string(),
            ..IntroConfig::default()
        };
        TypingScript::from_config(&config)
    }

    /// Feed each follow-up straight back in, recording every state.
    fn run_to_end(animation: &mut TypingAnimation) -> Vec<(TypingCue, Duration, TypingState)> {
        let mut rng = StdRng::seed_from_u64(3);
        let mut log = Vec::new();
        let mut next = animation.on_cue(TypingCue::Begin, &mut rng);
        while let Some((cue, delay)) = next {
            next = animation.on_cue(cue, &mut rng);
            log.push((cue, delay, animation.state()));
        }
        log
    }

    #[test]
    fn starts_idle_with_nothing_revealed() {
        let animation = TypingAnimation::new(short_script());
        assert_eq!(animation.phase(), TypingPhase::Idle);
        assert_eq!(animation.revealed_title(), "");
        assert!(!animation.state().started);
    }

    #[test]
    fn ticks_are_ignored_before_begin() {
        let mut animation = TypingAnimation::new(short_script());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(animation.on_cue(TypingCue::TitleTick, &mut rng), None);
        assert_eq!(animation.on_cue(TypingCue::ShowButtons, &mut rng), None);
        assert_eq!(animation.state(), TypingState::default());
    }

    #[test]
    fn runs_to_done_with_full_texts() {
        let mut animation = TypingAnimation::new(short_script());
        run_to_end(&mut animation);

        assert!(animation.is_done());
        assert_eq!(animation.revealed_title(), "Hi! Bo");
        assert_eq!(animation.revealed_description(), "Makes things.");
        let state = animation.state();
        assert!(!state.typing_title && !state.typing_description);
        assert!(!state.cursor_visible);
        assert!(state.buttons_visible);
    }

    #[test]
    fn revealed_lengths_are_monotone_and_reach_full_once() {
        let mut animation = TypingAnimation::new(short_script());
        let log = run_to_end(&mut animation);

        let mut last_title = 0;
        let mut last_description = 0;
        let mut title_full_at = Vec::new();
        for (i, (_, _, state)) in log.iter().enumerate() {
            assert!(state.revealed_title >= last_title);
            assert!(state.revealed_description >= last_description);
            if state.revealed_title == 6 && last_title < 6 {
                title_full_at.push(i);
            }
            last_title = state.revealed_title;
            last_description = state.revealed_description;
        }
        assert_eq!(title_full_at.len(), 1);
    }

    #[test]
    fn reveal_phases_never_overlap() {
        let mut animation = TypingAnimation::new(short_script());
        for (_, _, state) in run_to_end(&mut animation) {
            assert!(!(state.typing_title && state.typing_description));
            if state.revealed_description > 0 {
                assert_eq!(state.revealed_title, 6);
                assert!(!state.typing_title);
            }
        }
    }

    #[test]
    fn title_finishes_before_typing_flag_drops() {
        let mut animation = TypingAnimation::new(short_script());
        for (_, _, state) in run_to_end(&mut animation) {
            if state.started && !state.typing_title {
                assert_eq!(state.revealed_title, 6);
            }
            if state.buttons_visible {
                assert_eq!(state.revealed_description, 13);
            }
        }
    }

    #[test]
    fn greeting_gets_the_long_pause() {
        let mut script = short_script();
        script.title_speed = TypingSpeed::new(60.0, 0.0);
        script.greeting_pause = TypingSpeed::new(500.0, 0.0);
        let mut animation = TypingAnimation::new(script);
        let mut rng = StdRng::seed_from_u64(0);

        animation.on_cue(TypingCue::Begin, &mut rng);
        let delays: Vec<Duration> = (0..6)
            .filter_map(|_| animation.on_cue(TypingCue::TitleTick, &mut rng))
            .map(|(_, delay)| delay)
            .collect();

        // The 4th character completes "Hi! "
        assert_eq!(delays[3], Duration::from_millis(500));
        assert_eq!(delays[2], Duration::from_millis(60));
        assert_eq!(delays[4], Duration::from_millis(60));
    }

    #[test]
    fn greeting_is_ignored_when_title_does_not_start_with_it() {
        let config = IntroConfig {
            title: "Hello there".to_string(),
            ..IntroConfig::default()
        };
        assert_eq!(TypingScript::from_config(&config).greeting_chars, None);
    }

    #[test]
    fn settling_hides_cursor_before_buttons() {
        let mut animation = TypingAnimation::new(short_script());
        let log = run_to_end(&mut animation);
        let cues: Vec<TypingCue> = log.iter().map(|(cue, _, _)| *cue).collect();
        let hide = cues.iter().position(|c| *c == TypingCue::HideCursor).unwrap();
        let show = cues.iter().position(|c| *c == TypingCue::ShowButtons).unwrap();
        assert_eq!(show, hide + 1);
        assert_eq!(log[hide].1, Duration::from_millis(200));
        assert_eq!(log[show].1, Duration::from_millis(200));
    }

    #[test]
    fn segments_follow_reveal() {
        let mut animation = TypingAnimation::new(short_script());
        run_to_end(&mut animation);
        let title = animation.title_segments();
        assert_eq!(title.last().unwrap().text, "Bo");
        assert!(title.last().unwrap().highlighted);
        let description = animation.description_segments();
        assert_eq!(description.len(), 3);
        assert_eq!(description[1].text, "things");
    }

    #[test]
    fn empty_title_moves_straight_to_pause() {
        let config = IntroConfig {
            title: String::new(),
            greeting: None,
            ..IntroConfig::default()
        };
        let mut animation = TypingAnimation::new(TypingScript::from_config(&config));
        let mut rng = StdRng::seed_from_u64(0);
        animation.on_cue(TypingCue::Begin, &mut rng);
        let next = animation.on_cue(TypingCue::TitleTick, &mut rng);
        assert!(matches!(next, Some((TypingCue::BeginDescription, _))));
        assert_eq!(animation.phase(), TypingPhase::PauseAfterTitle);
    }
}

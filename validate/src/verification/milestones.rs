//! First-occurrence times of the intro's milestones

use std::time::Duration;

use folio_core::{IntroSnapshot, SiteConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Milestones {
    pub loading_hidden: Option<Duration>,
    pub typing_started: Option<Duration>,
    pub title_typed: Option<Duration>,
    pub buttons: Option<Duration>,
    pub header: Option<Duration>,
    pub back_button: Option<Duration>,
    pub complete: Option<Duration>,
}

fn mark(slot: &mut Option<Duration>, reached: bool, at: Duration) {
    if reached && slot.is_none() {
        *slot = Some(at);
    }
}

impl Milestones {
    /// Record anything reached for the first time at `at`.
    pub fn observe(&mut self, at: Duration, snapshot: &IntroSnapshot) {
        let typing = snapshot.typing;
        mark(&mut self.loading_hidden, !snapshot.loading_visible, at);
        mark(&mut self.typing_started, typing.started, at);
        mark(&mut self.title_typed, typing.revealed_description > 0, at);
        mark(&mut self.buttons, typing.buttons_visible, at);
        mark(&mut self.header, snapshot.sequence.header_visible, at);
        mark(&mut self.back_button, snapshot.sequence.back_button_visible, at);
        mark(&mut self.complete, snapshot.sequence.complete, at);
    }

    /// Check ordering and the configured gaps between reveal steps.
    pub fn verify(&self, config: &SiteConfig) -> Vec<String> {
        let mut failures = Vec::new();
        let steps = [
            ("loading hidden", self.loading_hidden),
            ("typing started", self.typing_started),
            ("title typed", self.title_typed),
            ("buttons visible", self.buttons),
            ("header visible", self.header),
            ("back button visible", self.back_button),
            ("animations complete", self.complete),
        ];

        for (name, at) in steps {
            if at.is_none() {
                failures.push(format!("{name} never happened"));
            }
        }
        for pair in steps.windows(2) {
            if let [(first, Some(a)), (second, Some(b))] = pair
                && b < a
            {
                failures.push(format!("{second} at {b:?} came before {first} at {a:?}"));
            }
        }

        let intro = &config.intro;
        let gaps = [
            ("buttons → header", self.buttons, self.header, intro.header_delay_ms),
            ("header → back button", self.header, self.back_button, intro.back_button_delay_ms),
            ("back button → complete", self.back_button, self.complete, intro.complete_delay_ms),
        ];
        for (name, from, to, expected_ms) in gaps {
            if let (Some(from), Some(to)) = (from, to) {
                let expected = Duration::from_millis(expected_ms);
                if to.saturating_sub(from) != expected {
                    failures.push(format!(
                        "{name} took {:?}, expected {expected:?}",
                        to.saturating_sub(from)
                    ));
                }
            }
        }

        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PageSession;

    fn replay(config: &SiteConfig, seed: u64) -> Milestones {
        let mut session = PageSession::new(config, seed);
        session.mount();
        let mut milestones = Milestones::default();
        milestones.observe(session.now(), &session.snapshot());
        while let Some((at, _)) = session.step() {
            milestones.observe(at, &session.snapshot());
        }
        milestones
    }

    #[test]
    fn default_intro_passes() {
        let config = SiteConfig::default();
        for seed in [0, 7, 31] {
            let milestones = replay(&config, seed);
            assert_eq!(milestones.verify(&config), Vec::<String>::new());
        }
    }

    #[test]
    fn no_loading_screen_is_hidden_from_the_start() {
        let mut config = SiteConfig::default();
        config.intro.loading_screen = false;
        let milestones = replay(&config, 3);
        assert_eq!(milestones.loading_hidden, Some(Duration::ZERO));
        assert!(milestones.verify(&config).is_empty());
    }

    #[test]
    fn missing_and_misordered_steps_are_reported() {
        let milestones = Milestones {
            loading_hidden: Some(Duration::ZERO),
            typing_started: Some(Duration::from_millis(100)),
            title_typed: Some(Duration::from_millis(50)),
            ..Milestones::default()
        };
        let failures = milestones.verify(&SiteConfig::default());
        assert!(failures.iter().any(|f| f == "buttons visible never happened"));
        assert!(failures.iter().any(|f| f.starts_with("title typed at")));
    }
}

//! Simulated loading screen
//!
//! Progress climbs quickly to the fast threshold, then crawls to 100. The
//! tick that sees 100 shows "Done"; after the done display the screen
//! finishes and the intro may start.

use std::time::Duration;

use folio_types::{IncrementRange, LoadingConfig};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingCue {
    Tick,
    Finish,
}

#[derive(Debug, Clone)]
pub struct LoadingScreen {
    config: LoadingConfig,
    progress: f64,
    done: bool,
    finished: bool,
}

impl LoadingScreen {
    pub fn new(config: LoadingConfig) -> Self {
        Self {
            config,
            progress: 0.0,
            done: false,
            finished: false,
        }
    }

    /// First cue to schedule when the page mounts.
    pub fn begin(&self) -> (LoadingCue, Duration) {
        (LoadingCue::Tick, self.tick_interval())
    }

    pub fn on_cue<R: Rng + ?Sized>(
        &mut self,
        cue: LoadingCue,
        rng: &mut R,
    ) -> Option<(LoadingCue, Duration)> {
        match cue {
            LoadingCue::Tick if !self.done => {
                if self.progress >= 100.0 {
                    self.done = true;
                    tracing::debug!("Loading done");
                    Some((LoadingCue::Finish, Duration::from_millis(self.config.done_display_ms)))
                } else {
                    let increment = self.increment(rng);
                    self.progress = (self.progress + increment).min(100.0);
                    tracing::trace!(progress = self.progress, "Loading tick");
                    Some((LoadingCue::Tick, self.tick_interval()))
                }
            }
            LoadingCue::Finish if self.done && !self.finished => {
                self.finished = true;
                tracing::debug!("Loading screen finished");
                None
            }
            _ => None,
        }
    }

    fn increment<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let range = if self.progress < self.config.fast_threshold {
            self.config.fast_increment
        } else {
            self.config.slow_increment
        };
        draw(range, rng)
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Rounded percentage for display.
    pub fn percent(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Status line under the progress bar.
    pub fn status_text(&self) -> String {
        if self.done {
            "Done".to_string()
        } else {
            format!("{}% complete", self.percent())
        }
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new(LoadingConfig::default())
    }
}

fn draw<R: Rng + ?Sized>(range: IncrementRange, rng: &mut R) -> f64 {
    if range.max > range.min {
        rng.random_range(range.min..=range.max)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(screen: &mut LoadingScreen, rng: &mut StdRng) -> Vec<f64> {
        let mut progress = Vec::new();
        let (mut cue, _) = screen.begin();
        while let Some((next, _)) = screen.on_cue(cue, rng) {
            progress.push(screen.progress());
            cue = next;
        }
        progress
    }

    #[test]
    fn progress_is_monotone_and_clamped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut screen = LoadingScreen::default();
        let progress = run(&mut screen, &mut rng);

        assert!(progress.windows(2).all(|w| w[1] >= w[0]));
        assert!(progress.iter().all(|p| (0.0..=100.0).contains(p)));
        assert_eq!(screen.progress(), 100.0);
        assert!(screen.is_finished());
    }

    #[test]
    fn fast_phase_then_slow_phase() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut screen = LoadingScreen::default();
        let mut previous = 0.0;
        let (mut cue, _) = screen.begin();
        while let Some((next, _)) = screen.on_cue(cue, &mut rng) {
            let step = screen.progress() - previous;
            if previous < 70.0 {
                assert!((1.999..=10.001).contains(&step));
            } else if screen.progress() < 100.0 {
                assert!((0.499..=2.501).contains(&step));
            }
            previous = screen.progress();
            cue = next;
        }
    }

    #[test]
    fn done_is_shown_before_finish() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut screen = LoadingScreen::new(LoadingConfig {
            fast_increment: IncrementRange::new(60.0, 60.0),
            ..LoadingConfig::default()
        });

        assert_eq!(screen.on_cue(LoadingCue::Finish, &mut rng), None);
        assert!(!screen.is_finished());

        screen.on_cue(LoadingCue::Tick, &mut rng);
        screen.on_cue(LoadingCue::Tick, &mut rng);
        assert_eq!(screen.progress(), 100.0);
        assert_eq!(screen.status_text(), "100% complete");

        let next = screen.on_cue(LoadingCue::Tick, &mut rng);
        assert_eq!(next, Some((LoadingCue::Finish, Duration::from_millis(1000))));
        assert_eq!(screen.status_text(), "Done");
        assert!(!screen.is_finished());

        assert_eq!(screen.on_cue(LoadingCue::Tick, &mut rng), None);
        assert_eq!(screen.on_cue(LoadingCue::Finish, &mut rng), None);
        assert!(screen.is_finished());
    }

    #[test]
    fn status_text_rounds() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut screen = LoadingScreen::new(LoadingConfig {
            fast_increment: IncrementRange::new(12.6, 12.6),
            ..LoadingConfig::default()
        });
        screen.on_cue(LoadingCue::Tick, &mut rng);
        assert_eq!(screen.status_text(), "13% complete");
    }
}

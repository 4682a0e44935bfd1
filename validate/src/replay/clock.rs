//! Pacing clock for intro replay
//!
//! Supports multiple replay modes:
//! - Realtime (1x speed): Sleep between cues so the schedule can be watched
//! - Accelerated: No sleeping, virtual time only
//! - Custom speed: Any multiplier (0.5x slow-mo, 10x fast-forward, etc.)

use std::time::Duration;

#[derive(Debug)]
pub struct ReplayClock {
    /// Virtual time of the last cue
    current: Duration,

    /// Speed multiplier (1.0 = realtime, 0.0 = instant, 10.0 = 10x speed)
    speed_multiplier: f32,
}

impl ReplayClock {
    pub fn new(speed_multiplier: f32) -> Self {
        Self {
            current: Duration::ZERO,
            speed_multiplier: speed_multiplier.max(0.0),
        }
    }

    /// Create a clock for instant (accelerated) replay
    pub fn instant() -> Self {
        Self::new(0.0)
    }

    /// Create a clock for realtime (1x) replay
    pub fn realtime() -> Self {
        Self::new(1.0)
    }

    /// Advance to a virtual timestamp, sleeping for the scaled gap if paced.
    pub fn advance_to(&mut self, at: Duration) {
        if let Some(wait) = self.wall_delay(at) {
            std::thread::sleep(wait);
        }
        self.current = self.current.max(at);
    }

    /// Wall-clock wait before `at` is reached, or None in instant mode.
    fn wall_delay(&self, at: Duration) -> Option<Duration> {
        if self.is_instant_mode() || at <= self.current {
            return None;
        }
        Some((at - self.current).div_f32(self.speed_multiplier))
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn is_instant_mode(&self) -> bool {
        self.speed_multiplier == 0.0
    }

    pub fn speed(&self) -> f32 {
        self.speed_multiplier
    }
}

/// Format virtual time as SS.mmm (MM:SS.mmm past a minute)
pub fn format_time(at: Duration) -> String {
    let millis = at.as_millis();
    let mins = millis / 60_000;
    let secs = (millis % 60_000) / 1000;
    let ms = millis % 1000;
    if mins > 0 {
        format!("{mins:02}:{secs:02}.{ms:03}")
    } else {
        format!("{secs:02}.{ms:03}")
    }
}

/// Parse `MM:SS` or plain seconds.
pub fn parse_time_arg(s: &str) -> Result<Duration, String> {
    let seconds = match s.split_once(':') {
        Some((mins, secs)) => {
            let mins: f32 = mins.trim().parse().map_err(|e| format!("bad minutes in '{s}': {e}"))?;
            let secs: f32 = secs.trim().parse().map_err(|e| format!("bad seconds in '{s}': {e}"))?;
            mins * 60.0 + secs
        }
        None => s.trim().parse().map_err(|e| format!("invalid time '{s}': {e}"))?,
    };
    Duration::try_from_secs_f32(seconds).map_err(|e| format!("invalid time '{s}': {e}"))
}

//! Checkpoint-based intro verification
//!
//! Allows defining expected page state at specific times and verifying that
//! the replayed intro matches.

use std::path::Path;
use std::time::Duration;

use folio_core::{NotificationPhase, PageSession};
use serde::{Deserialize, Serialize};

/// Expected page state at a given time. Unset fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Virtual time of the check, in milliseconds since mount
    pub at_ms: u64,

    /// Optional description for debugging
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub loading_visible: Option<bool>,
    #[serde(default)]
    pub typing_started: Option<bool>,
    /// Exact title text revealed so far
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_description_chars: Option<usize>,
    #[serde(default)]
    pub buttons_visible: Option<bool>,
    #[serde(default)]
    pub header_visible: Option<bool>,
    #[serde(default)]
    pub back_button_visible: Option<bool>,
    #[serde(default)]
    pub complete: Option<bool>,
    /// Toast on screen (slid in)
    #[serde(default)]
    pub notification_visible: Option<bool>,
}

impl Checkpoint {
    fn label(&self) -> String {
        match &self.description {
            Some(description) => format!("@{}ms {description}", self.at_ms),
            None => format!("@{}ms", self.at_ms),
        }
    }
}

/// Full expectations file for a replay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub meta: ExpectationsMeta,

    /// Checkpoints to verify
    #[serde(default, rename = "checkpoint")]
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectationsMeta {
    #[serde(default)]
    pub description: Option<String>,

    /// Seed the expectations were written for (overrides `--seed`)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Simulate a successful username copy at this time
    #[serde(default)]
    pub copy_at_ms: Option<u64>,
}

impl Expectations {
    /// Load expectations from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut expectations: Expectations = toml::from_str(content)?;
        expectations.checkpoints.sort_by_key(|c| c.at_ms);
        Ok(expectations)
    }
}

/// Result of verifying a single checkpoint
#[derive(Debug, Clone)]
pub struct CheckpointResult {
    pub label: String,
    pub failures: Vec<String>,
}

impl CheckpointResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Verifies page state against expected checkpoints
#[derive(Debug)]
pub struct CheckpointVerifier {
    expectations: Expectations,
    results: Vec<CheckpointResult>,
}

fn expect_flag(failures: &mut Vec<String>, name: &str, expected: Option<bool>, actual: bool) {
    if let Some(expected) = expected
        && expected != actual
    {
        failures.push(format!("{name} should be {expected} but is {actual}"));
    }
}

impl CheckpointVerifier {
    pub fn new(expectations: Expectations) -> Self {
        Self {
            expectations,
            results: Vec::new(),
        }
    }

    pub fn meta(&self) -> &ExpectationsMeta {
        &self.expectations.meta
    }

    /// Checkpoint times in ascending order, by index.
    pub fn times(&self) -> Vec<(usize, Duration)> {
        self.expectations
            .checkpoints
            .iter()
            .enumerate()
            .map(|(idx, c)| (idx, Duration::from_millis(c.at_ms)))
            .collect()
    }

    /// Verify checkpoint `idx` against the session's current state.
    pub fn check(&mut self, idx: usize, session: &PageSession) -> Option<CheckpointResult> {
        let checkpoint = self.expectations.checkpoints.get(idx)?;
        let snapshot = session.snapshot();
        let mut failures = Vec::new();

        expect_flag(&mut failures, "loading_visible", checkpoint.loading_visible, snapshot.loading_visible);
        expect_flag(&mut failures, "typing_started", checkpoint.typing_started, snapshot.typing.started);
        expect_flag(&mut failures, "buttons_visible", checkpoint.buttons_visible, snapshot.typing.buttons_visible);
        expect_flag(&mut failures, "header_visible", checkpoint.header_visible, snapshot.sequence.header_visible);
        expect_flag(
            &mut failures,
            "back_button_visible",
            checkpoint.back_button_visible,
            snapshot.sequence.back_button_visible,
        );
        expect_flag(&mut failures, "complete", checkpoint.complete, snapshot.sequence.complete);
        expect_flag(
            &mut failures,
            "notification_visible",
            checkpoint.notification_visible,
            snapshot.notification == NotificationPhase::Entered,
        );

        if let Some(title) = &checkpoint.title {
            let revealed = session.typing().revealed_title();
            if revealed != title.as_str() {
                failures.push(format!("title should read {title:?} but reads {revealed:?}"));
            }
        }
        if let Some(min) = checkpoint.min_description_chars
            && snapshot.typing.revealed_description < min
        {
            failures.push(format!(
                "description should show at least {min} chars but shows {}",
                snapshot.typing.revealed_description
            ));
        }

        let result = CheckpointResult {
            label: checkpoint.label(),
            failures,
        };
        self.results.push(result.clone());
        Some(result)
    }

    /// (passed, total)
    pub fn finalize(self) -> (u32, u32) {
        let passed = self.results.iter().filter(|r| r.passed()).count();
        let total = self.results.len();
        (
            u32::try_from(passed).unwrap_or(u32::MAX),
            u32::try_from(total).unwrap_or(u32::MAX),
        )
    }
}

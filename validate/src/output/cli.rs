//! Colored CLI output for intro cues
//!
//! Formats loading progress, typing milestones, reveal steps and the copy
//! notification with colored output for easy visual parsing.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use folio_core::typing::TypingCue;
use folio_core::{IntroSnapshot, LoadingCue, NotifyCue, PageCue, RevealCue};

use crate::replay::format_time;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum OutputLevel {
    /// Only show summary at end
    Quiet,
    /// Show milestones (default)
    #[default]
    Normal,
    /// Show every tick as well
    Verbose,
}

/// CLI output formatter with color support
#[derive(Debug)]
pub struct CliOutput {
    level: OutputLevel,
    use_colors: bool,
    cues: u32,
    loading_ticks: u32,
    typing_ticks: u32,
    reveal_steps: u32,
    notification_steps: u32,
    problems: u32,
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new(OutputLevel::Normal)
    }
}

impl CliOutput {
    pub fn new(level: OutputLevel) -> Self {
        Self {
            level,
            use_colors: atty::is(atty::Stream::Stdout),
            cues: 0,
            loading_ticks: 0,
            typing_ticks: 0,
            reveal_steps: 0,
            notification_steps: 0,
            problems: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ANSI Color Codes
    // ═══════════════════════════════════════════════════════════════════════════

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.paint("32", text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint("33", text)
    }

    fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint("36", text)
    }

    fn magenta(&self, text: &str) -> String {
        self.paint("35", text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    fn bold(&self, text: &str) -> String {
        self.paint("1", text)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Setup Output
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn intro_start(&self, seed: u64, loading_screen: bool) {
        if self.level < OutputLevel::Normal {
            return;
        }
        let label = self.bold(&self.green("═══ INTRO START ═══"));
        let loading = if loading_screen { "with loading screen" } else { "no loading screen" };
        println!("\n{label} {}\n", self.dim(&format!("(seed {seed}, {loading})")));
    }

    /// Report a config or content problem. Always printed.
    pub fn problem(&mut self, kind: &str, message: impl Display) {
        self.problems += 1;
        println!("{} {} {message}", self.red("!!!"), self.red(&format!("{kind}:")));
    }

    pub fn problems(&self) -> u32 {
        self.problems
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Cue Output
    // ═══════════════════════════════════════════════════════════════════════════

    /// Log one fired cue and the page state right after it.
    pub fn cue(&mut self, at: Duration, cue: PageCue, snapshot: &IntroSnapshot) {
        self.cues += 1;
        let time = format_time(at);
        match cue {
            PageCue::Loading(LoadingCue::Tick) => {
                self.loading_ticks += 1;
                if self.level >= OutputLevel::Verbose {
                    let progress = format!("{:.1}%", snapshot.loading_progress);
                    println!("[{time}] {} {} {progress}", self.dim("..."), self.dim("LOAD:"));
                }
            }
            PageCue::Loading(LoadingCue::Finish) => {
                self.line(&time, self.green("-->"), self.green("LOADING DONE"), "");
            }
            PageCue::Typing(TypingCue::TitleTick | TypingCue::DescriptionTick) => {
                self.typing_ticks += 1;
                if self.level >= OutputLevel::Verbose {
                    let typing = snapshot.typing;
                    let counts = format!(
                        "title {} / description {}",
                        typing.revealed_title, typing.revealed_description
                    );
                    println!("[{time}] {} {} {counts}", self.dim("..."), self.dim("TYPE:"));
                }
            }
            PageCue::Typing(step) => {
                let name = match step {
                    TypingCue::Begin => "typing started",
                    TypingCue::BeginDescription => "description started",
                    TypingCue::HideCursor => "cursor hidden",
                    TypingCue::ShowButtons => "buttons visible",
                    TypingCue::TitleTick | TypingCue::DescriptionTick => "tick",
                };
                self.line(&time, self.cyan("~~~"), self.cyan("TYPING:"), name);
            }
            PageCue::Reveal(step) => {
                self.reveal_steps += 1;
                let name = match step {
                    RevealCue::ShowHeader => "header",
                    RevealCue::ShowBackButton => "back button",
                    RevealCue::Complete => "animations complete",
                };
                self.line(&time, self.yellow("<<<"), self.yellow("REVEAL:"), name);
            }
            PageCue::Notify(step) => {
                self.notification_steps += 1;
                let name = match step {
                    NotifyCue::Enter => "slide in",
                    NotifyCue::Exit => "slide out",
                    NotifyCue::Hide => "removed",
                };
                self.line(&time, self.magenta("***"), self.magenta("NOTIFY:"), name);
            }
        }
    }

    /// Log a simulated clipboard copy
    pub fn copy(&self, at: Duration) {
        self.line(
            &format_time(at),
            self.magenta("==>"),
            self.magenta("COPY:"),
            "username copied",
        );
    }

    fn line(&self, time: &str, marker: String, label: String, detail: &str) {
        if self.level < OutputLevel::Normal {
            return;
        }
        if detail.is_empty() {
            println!("[{time}] {marker} {label}");
        } else {
            println!("[{time}] {marker} {label} {}", self.bold(detail));
        }
    }

    /// Log a checkpoint outcome
    pub fn checkpoint(&self, description: &str, failures: &[String]) {
        if failures.is_empty() {
            if self.level >= OutputLevel::Normal {
                println!("{} {description}", self.green("PASS"));
            }
            return;
        }
        println!("{} {description}", self.red("FAIL"));
        for failure in failures {
            println!("     {}", self.red(failure));
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Summary Report
    // ═══════════════════════════════════════════════════════════════════════════

    /// Print final summary
    pub fn print_summary(&self, finished_at: Duration, checkpoints: Option<(u32, u32)>) {
        let line = "═".repeat(51);
        println!();
        println!("{line}");
        println!("  INTRO REPLAY SUMMARY");
        println!("{line}");
        println!("Cues Fired:      {}", self.cues);
        println!("Loading Ticks:   {}", self.loading_ticks);
        println!("Typing Ticks:    {}", self.typing_ticks);
        println!("Reveal Steps:    {}", self.reveal_steps);
        println!("Notify Steps:    {}", self.notification_steps);
        println!("Finished At:     {}", format_time(finished_at));
        if self.problems > 0 {
            println!("Problems:        {}", self.red(&self.problems.to_string()));
        }
        if let Some((passed, total)) = checkpoints {
            let status = if passed == total {
                self.green(&format!("PASSED ({passed}/{total})"))
            } else {
                self.red(&format!("FAILED ({passed}/{total})"))
            };
            println!("Verification:    {status}");
        }
        println!("{line}");
    }

    /// Flush stdout
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{PageSession, SiteConfig};

    #[test]
    fn quiet_still_counts() {
        let mut session = PageSession::new(&SiteConfig::default(), 1);
        session.mount();
        let mut output = CliOutput::new(OutputLevel::Quiet);

        while let Some((at, cue)) = session.step() {
            output.cue(at, cue, &session.snapshot());
        }

        assert!(output.loading_ticks > 0);
        assert!(output.typing_ticks > 0);
        assert_eq!(output.reveal_steps, 3);
        assert_eq!(output.notification_steps, 0);
    }

    #[test]
    fn problems_are_counted() {
        let mut output = CliOutput::new(OutputLevel::Quiet);
        output.problem("CONFIG", "bad timing");
        assert_eq!(output.problems(), 1);
    }
}

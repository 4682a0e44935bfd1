//! Intro validation CLI for the portfolio page
//!
//! Checks `site.toml` and the content tables, then replays the intro on a
//! virtual clock and verifies its behavior:
//! - Accelerated mode (default): Fast CI validation with checkpoints
//! - Realtime mode (1x): Watch the schedule unfold at page speed

mod logging;
mod output;
mod replay;
mod verification;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use folio_core::{PageSession, SiteConfig, SiteConfigExt};

use crate::output::{CliOutput, OutputLevel};
use crate::replay::{ReplayClock, parse_time_arg};
use crate::verification::{CheckpointVerifier, Expectations, Milestones};

// ═══════════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ReplayMode {
    /// 1x speed with actual timing delays
    Realtime,
    /// Fast replay with virtual time (default)
    #[default]
    Accelerated,
}

#[derive(Parser, Debug)]
#[command(name = "folio-validate")]
#[command(about = "Validate the site config and replay the intro sequence")]
#[command(version)]
struct Args {
    /// Path to site.toml (defaults to built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the typing and loading jitter
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Replay without the loading screen
    #[arg(long)]
    skip_loading: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Replay Mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Replay mode
    #[arg(long, value_enum, default_value_t = ReplayMode::Accelerated)]
    mode: ReplayMode,

    /// Custom speed multiplier (overrides --mode)
    #[arg(long)]
    speed: Option<f32>,

    /// Simulate a successful username copy at this time (MM:SS or seconds)
    #[arg(long)]
    copy_at: Option<String>,

    /// Stop replaying at this time (MM:SS or seconds)
    #[arg(long)]
    stop_at: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Output Mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Quiet mode: summary only
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode: show every loading and typing tick
    #[arg(short, long)]
    verbose: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────
    /// Path to expectations TOML file for checkpoint verification
    #[arg(long)]
    expect: Option<PathBuf>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Replay Stops
// ═══════════════════════════════════════════════════════════════════════════════

/// Points where the replay pauses to act or inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stop {
    Copy,
    Checkpoint(usize),
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Validation aborted");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every check passed.
fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let level = if args.quiet {
        OutputLevel::Quiet
    } else if args.verbose {
        OutputLevel::Verbose
    } else {
        OutputLevel::Normal
    };
    let mut output = CliOutput::new(level);

    // ─── Config & Content ────────────────────────────────────────────────────
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            SiteConfig::from_toml_str(&source)?
        }
        None => SiteConfig::default(),
    };
    for error in config.validate() {
        output.problem("CONFIG", error);
    }
    for issue in folio_core::validate_content() {
        output.problem("CONTENT", issue);
    }
    if output.problems() > 0 {
        output.print_summary(Duration::ZERO, None);
        return Ok(false);
    }
    if args.skip_loading {
        config.intro.loading_screen = false;
    }

    // ─── Expectations ────────────────────────────────────────────────────────
    let mut verifier = match &args.expect {
        Some(path) => Some(CheckpointVerifier::new(Expectations::load(path)?)),
        None => None,
    };
    let seed = verifier
        .as_ref()
        .and_then(|v| v.meta().seed)
        .unwrap_or(args.seed);

    let copy_at = match &args.copy_at {
        Some(arg) => Some(parse_time_arg(arg)?),
        None => verifier
            .as_ref()
            .and_then(|v| v.meta().copy_at_ms)
            .map(Duration::from_millis),
    };
    let stop_at = args.stop_at.as_deref().map(parse_time_arg).transpose()?;

    let mut stops: Vec<(Duration, Stop)> = Vec::new();
    if let Some(at) = copy_at {
        stops.push((at, Stop::Copy));
    }
    if let Some(verifier) = &verifier {
        stops.extend(verifier.times().into_iter().map(|(idx, at)| (at, Stop::Checkpoint(idx))));
    }
    stops.sort();

    // ─── Replay ──────────────────────────────────────────────────────────────
    let mut clock = match (args.speed, args.mode) {
        (Some(speed), _) => ReplayClock::new(speed),
        (None, ReplayMode::Realtime) => ReplayClock::realtime(),
        (None, ReplayMode::Accelerated) => ReplayClock::instant(),
    };
    tracing::debug!(seed, speed = clock.speed(), stops = stops.len(), "Starting replay");

    let mut session = PageSession::new(&config, seed);
    let mut milestones = Milestones::default();
    output.intro_start(seed, config.intro.loading_screen);
    session.mount();
    milestones.observe(session.now(), &session.snapshot());

    let end = stop_at.unwrap_or(Duration::MAX);
    let mut checkpoint_failures = 0u32;
    for (at, stop) in stops.into_iter().filter(|(at, _)| *at <= end) {
        run_until(&mut session, at, &mut clock, &mut output, &mut milestones);
        session.advance(at.saturating_sub(session.now()));
        clock.advance_to(at);

        match stop {
            Stop::Copy => {
                output.copy(at);
                session.notify_copied();
            }
            Stop::Checkpoint(idx) => {
                if let Some(result) = verifier.as_mut().and_then(|v| v.check(idx, &session)) {
                    output.checkpoint(&result.label, &result.failures);
                    if !result.passed() {
                        checkpoint_failures += 1;
                    }
                }
            }
        }
    }
    run_until(&mut session, end, &mut clock, &mut output, &mut milestones);
    let finished_at = session.now();
    tracing::debug!(paced_to = ?clock.current(), "Replay finished");
    session.teardown();
    output.flush();

    // ─── Verification ────────────────────────────────────────────────────────
    let mut passed = checkpoint_failures == 0;
    if stop_at.is_none() {
        let failures = milestones.verify(&config);
        output.checkpoint("phase order", &failures);
        passed &= failures.is_empty();
    }

    let summary = verifier.map(CheckpointVerifier::finalize);
    output.print_summary(finished_at, summary);
    Ok(passed)
}

/// Fire every cue due at or before `deadline`, logging each one.
fn run_until(
    session: &mut PageSession,
    deadline: Duration,
    clock: &mut ReplayClock,
    output: &mut CliOutput,
    milestones: &mut Milestones,
) {
    while let Some((at, cue)) = session.step_until(deadline) {
        clock.advance_to(at);
        let snapshot = session.snapshot();
        milestones.observe(at, &snapshot);
        output.cue(at, cue, &snapshot);
    }
}

mod config;

use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use duel_core::{run_replay, snapshot, Replay, ReplayOutcome};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if config::log_json() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_replay(path: Option<&str>) -> Result<Replay> {
    let json_str = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read replay file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read replay from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json_str).context("failed to parse replay JSON")
}

fn print_result(outcome: &ReplayOutcome) {
    println!("=== Replay Result ===");
    println!("Frames: {}", outcome.frames_run);
    println!("Phase: {}", outcome.phase);
    match outcome.winner_text() {
        Some(text) => println!("Result: {text}"),
        None => println!("Result: round in progress"),
    }
    println!("Rounds finished: {}", outcome.rounds_finished);
    println!("Scores: P1={}, P2={}", outcome.score[0], outcome.score[1]);
    println!(
        "Health: P1={}%, P2={}%",
        outcome.health[0], outcome.health[1]
    );
    println!(
        "Shield: P1={}%, P2={}%",
        outcome.shield[0], outcome.shield[1]
    );
}

fn run() -> Result<()> {
    let args = config::parse_args(std::env::args().skip(1));

    tracing::info!(source = args.path.as_deref().unwrap_or("stdin"), "loading replay");
    let replay = load_replay(args.path.as_deref())?;
    tracing::info!(frames = replay.frames.len(), "replay loaded");

    let start = Instant::now();
    let (state, outcome) =
        run_replay(&replay, config::max_frames()).context("replay config is invalid")?;
    tracing::info!(
        frames = outcome.frames_run,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "replay finished"
    );

    if args.json {
        let snap = snapshot(&state, &replay.config);
        println!(
            "{}",
            serde_json::to_string_pretty(&snap).context("failed to encode snapshot")?
        );
    } else {
        print_result(&outcome);
    }
    Ok(())
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run() {
        tracing::error!(error = %format!("{e:#}"), "replay failed");
        std::process::exit(1);
    }
}

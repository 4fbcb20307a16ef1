mod discover;
mod leaderboard;
mod model;
mod output;
mod parser;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use model::{Event, LeaderboardRow, Meta};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "raise_hand_board",
    about = "Collect #raise-hand-winner results from markdown notes into dashboard JSON"
)]
struct Cli {
    /// Root directory of the markdown notes [default: notes]
    source_dir: Option<PathBuf>,
    /// Directory for events.json, leaderboard.json and meta.json [default: dashboard/data]
    output_dir: Option<PathBuf>,
    /// Team for winners listed without a TEAM prefix [default: UNKNOWN]
    #[arg(long)]
    default_team: Option<String>,
    /// Scan and aggregate, but write nothing
    #[arg(long)]
    dry_run: bool,
    /// Leaderboard rows to print when done (0 = none)
    #[arg(short = 'n', long, default_value = "10")]
    top: usize,
    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let t0 = Instant::now();
    let settings = Settings::from_env()?.with_overrides(
        cli.source_dir,
        cli.output_dir,
        cli.default_team,
    );

    check_source(&settings.source_dir)?;

    let files = discover::find_markdown_files(&settings.source_dir);
    info!(
        "Found {} markdown files in {}",
        files.len(),
        settings.source_dir.display()
    );

    let (events, counts) = extract_events(&settings, &files)?;
    let rows = leaderboard::build(&events);

    if cli.dry_run {
        info!("Dry run: nothing written to {}", settings.output_dir.display());
    } else {
        let meta = Meta {
            last_updated: output::local_timestamp(),
        };
        output::write_all(&settings.output_dir, &events, &rows, &meta)?;
    }

    let verb = outcome_verb(cli.dry_run);
    info!("Events {}: {}", verb, events.len());
    info!("Leaderboard rows {}: {}", verb, rows.len());
    counts.print();
    print_top(&rows, cli.top);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

/// The notes root must exist and be a directory before anything runs.
fn check_source(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Source directory not found: {}", dir.display());
    }
    Ok(())
}

fn outcome_verb(dry_run: bool) -> &'static str {
    if dry_run {
        "found"
    } else {
        "written"
    }
}

struct ScanCounts {
    files: usize,
    unreadable: usize,
    events: usize,
    empty_triggers: usize,
}

impl ScanCounts {
    fn print(&self) {
        println!(
            "Scanned {} files ({} unreadable): {} events, {} tags without winners.",
            self.files, self.unreadable, self.events, self.empty_triggers,
        );
    }
}

/// Read and parse every file in order. Unreadable files count as zero events.
fn extract_events(
    settings: &Settings,
    files: &[PathBuf],
) -> anyhow::Result<(Vec<Event>, ScanCounts)> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = ScanCounts {
        files: files.len(),
        unreadable: 0,
        events: 0,
        empty_triggers: 0,
    };
    let mut events = Vec::new();

    for path in files {
        let name = discover::display_path(&settings.source_dir, path);
        match read_note(path) {
            Ok(content) => {
                let found = parser::process_file(&content, &name, &settings.default_team);
                for line in &found.empty_triggers {
                    pb.suspend(|| warn!("{}:{}: tag found but no winners captured", name, line));
                }
                counts.empty_triggers += found.empty_triggers.len();
                counts.events += found.events.len();
                events.extend(found.events);
            }
            Err(e) => {
                counts.unreadable += 1;
                pb.suspend(|| warn!("Skipping unreadable file {}: {:#}", name, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((events, counts))
}

fn read_note(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn print_top(rows: &[LeaderboardRow], limit: usize) {
    if limit == 0 || rows.is_empty() {
        return;
    }

    println!("\n{:>3} | {:<12} | {:<28} | {:>4}", "#", "Team", "Winner", "Wins");
    println!("{}", "-".repeat(56));
    for (i, r) in rows.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<12} | {:<28} | {:>4}",
            i + 1,
            truncate(&r.team, 12),
            truncate(&r.winner, 28),
            r.wins
        );
    }
    if rows.len() > limit {
        println!("... {} more rows", rows.len() - limit);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use serde::Serialize;
use tracing::info;

use crate::model::{Event, LeaderboardRow, Meta};

pub const EVENTS_FILE: &str = "events.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const META_FILE: &str = "meta.json";

/// Local time with an explicit offset, e.g. `2024-03-05T09:12:44+01:00`.
pub fn local_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Overwrite all three dashboard artifacts in `dir`, creating it if needed.
pub fn write_all(dir: &Path, events: &[Event], rows: &[LeaderboardRow], meta: &Meta) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create output directory {}", dir.display()))?;

    write_json(&dir.join(EVENTS_FILE), events)?;
    write_json(&dir.join(LEADERBOARD_FILE), rows)?;
    write_json(&dir.join(META_FILE), meta)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("Cannot write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

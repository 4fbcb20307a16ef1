pub mod blocks;
pub mod captures;
pub mod winner;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Event;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Events from one note plus the triggers that captured nothing.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub events: Vec<Event>,
    /// 1-based line numbers of triggers with zero winners.
    pub empty_triggers: Vec<usize>,
}

/// Two-pass pipeline: lines → classified blocks → captures → events.
/// `file` is the display path stored on each event; its last segment drives the date.
pub fn process_file(content: &str, file: &str, default_team: &str) -> FileExtraction {
    let blocks = blocks::classify_lines(content);
    let captures = captures::collect_captures(&blocks, default_team);
    let date = infer_date(file);

    let mut out = FileExtraction::default();
    for capture in captures {
        if capture.winners.is_empty() {
            out.empty_triggers.push(capture.line);
            continue;
        }
        out.events.extend(capture.winners.into_iter().map(|w| Event {
            date: date.clone(),
            team: w.team,
            winner: w.winner,
            file: file.to_string(),
        }));
    }
    out
}

/// First `YYYY-MM-DD` in the base name, verbatim.
pub fn infer_date(file: &str) -> Option<String> {
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    DATE_RE.find(base).map(|m| m.as_str().to_string())
}

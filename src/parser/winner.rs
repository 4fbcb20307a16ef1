use std::sync::LazyLock;

use regex::Regex;

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+] +").unwrap());
static MULTI_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static TEAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]{2,20})\s*[-:–—]\s*(.+)$").unwrap());

/// Lines that look like list scaffolding rather than an answer.
const PLACEHOLDERS: &[&str] = &[
    "-", "*", "+", "[]", "[ ]", "- []", "- [ ]", "* []", "* [ ]", "+ []", "+ [ ]",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub team: String,
    pub winner: String,
}

/// Bullet stripped, whitespace runs collapsed, trimmed.
pub fn normalize_line(raw: &str) -> String {
    let trimmed = raw.trim();
    let unbulleted = BULLET_RE.replace(trimmed, "");
    MULTI_WS_RE.replace_all(&unbulleted, " ").trim().to_string()
}

/// Parse `TEAM - Name` style lines. Lines without a team prefix fall back to
/// `default_team`; blank lines and empty checkboxes yield `None`.
pub fn parse_winner_line(raw: &str, default_team: &str) -> Option<Winner> {
    let line = normalize_line(raw);
    if line.is_empty() || PLACEHOLDERS.contains(&line.as_str()) {
        return None;
    }

    if let Some(caps) = TEAM_RE.captures(&line) {
        let winner = caps[2].trim();
        if winner.is_empty() {
            return None;
        }
        return Some(Winner {
            team: caps[1].to_uppercase(),
            winner: winner.to_string(),
        });
    }

    Some(Winner {
        team: default_team.to_string(),
        winner: line,
    })
}

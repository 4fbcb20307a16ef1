use std::sync::LazyLock;

use regex::Regex;

pub const TAG_TOKEN: &str = "#raise-hand-winner";

static TRIGGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#raise-hand-winner(?:\s|$)").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s").unwrap());

/// Structural role of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Trigger,
    Heading,
    Fence,
    Blank,
    Text(String),
}

/// Classify every line of a markdown note. `\n` and `\r\n` endings both work.
pub fn classify_lines(markdown: &str) -> Vec<Block> {
    markdown.lines().map(classify_line).collect()
}

pub fn classify_line(line: &str) -> Block {
    if is_trigger(line) {
        return Block::Trigger;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }

    // Indented headings and fences still count as structure.
    let lead = line.trim_start();
    if HEADING_RE.is_match(lead) {
        return Block::Heading;
    }
    if lead.starts_with("```") {
        return Block::Fence;
    }

    Block::Text(line.to_string())
}

/// The tag must stand alone: `#raise-hand-winnerbar` or `x#raise-hand-winner` do not count.
pub fn is_trigger(line: &str) -> bool {
    line.contains(TAG_TOKEN) && TRIGGER_RE.is_match(line)
}

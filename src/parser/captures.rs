use super::blocks::Block;
use super::winner::{parse_winner_line, Winner};

/// Lines collected after one tag trigger.
#[derive(Debug, Clone)]
pub struct Capture {
    /// 1-based line number of the trigger.
    pub line: usize,
    pub winners: Vec<Winner>,
}

/// Walk classified lines, opening a capture at every trigger.
pub fn collect_captures(blocks: &[Block], default_team: &str) -> Vec<Capture> {
    let mut captures = Vec::new();
    let mut i = 0;

    while i < blocks.len() {
        if blocks[i] != Block::Trigger {
            i += 1;
            continue;
        }
        let (capture, next) = scan_capture(blocks, i, default_team);
        captures.push(capture);
        i = next;
    }

    captures
}

/// Scan forward from the trigger at `start`. Returns the capture and the
/// index the outer loop resumes at; a trigger that closed the capture is
/// left unconsumed.
fn scan_capture(blocks: &[Block], start: usize, default_team: &str) -> (Capture, usize) {
    let mut winners = Vec::new();
    let mut j = start + 1;

    while j < blocks.len() {
        match &blocks[j] {
            Block::Trigger => break,
            // Leading blanks between the tag and its list are allowed.
            Block::Blank if winners.is_empty() => {}
            Block::Blank | Block::Heading | Block::Fence => break,
            Block::Text(raw) => {
                if let Some(w) = parse_winner_line(raw, default_team) {
                    winners.push(w);
                }
            }
        }
        j += 1;
    }

    (
        Capture {
            line: start + 1,
            winners,
        },
        j,
    )
}

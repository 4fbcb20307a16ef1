use std::collections::HashMap;

use crate::model::{Event, LeaderboardRow};

/// Count wins per (team, winner). Rows sort by wins descending, then team,
/// then winner, so the output does not depend on event order.
pub fn build(events: &[Event]) -> Vec<LeaderboardRow> {
    let mut counts: HashMap<String, HashMap<String, u32>> = HashMap::new();
    for e in events {
        *counts
            .entry(e.team.to_uppercase())
            .or_default()
            .entry(e.winner.clone())
            .or_insert(0) += 1;
    }

    let mut rows: Vec<LeaderboardRow> = counts
        .into_iter()
        .flat_map(|(team, winners)| {
            winners.into_iter().map(move |(winner, wins)| LeaderboardRow {
                team: team.clone(),
                winner,
                wins,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| a.team.cmp(&b.team))
            .then_with(|| a.winner.cmp(&b.winner))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(team: &str, winner: &str) -> Event {
        Event {
            date: None,
            team: team.into(),
            winner: winner.into(),
            file: "x.md".into(),
        }
    }

    fn row(team: &str, winner: &str, wins: u32) -> LeaderboardRow {
        LeaderboardRow {
            team: team.into(),
            winner: winner.into(),
            wins,
        }
    }

    #[test]
    fn counts_pairs() {
        let events = vec![ev("A", "X"), ev("A", "X"), ev("B", "Y")];
        assert_eq!(build(&events), vec![row("A", "X", 2), row("B", "Y", 1)]);
    }

    #[test]
    fn ties_break_on_team_then_winner() {
        let events = vec![ev("B", "A"), ev("A", "Z"), ev("A", "B")];
        assert_eq!(
            build(&events),
            vec![row("A", "B", 1), row("A", "Z", 1), row("B", "A", 1)]
        );
    }

    #[test]
    fn team_case_is_folded() {
        let events = vec![ev("zc", "Christy"), ev("ZC", "Christy")];
        assert_eq!(build(&events), vec![row("ZC", "Christy", 2)]);
    }

    #[test]
    fn same_winner_on_two_teams_stays_separate() {
        let events = vec![ev("A", "Kim"), ev("B", "Kim"), ev("B", "Kim")];
        assert_eq!(build(&events), vec![row("B", "Kim", 2), row("A", "Kim", 1)]);
    }

    #[test]
    fn order_independent() {
        let events = vec![
            ev("A", "X"),
            ev("B", "Y"),
            ev("A", "X"),
            ev("C", "Z"),
            ev("B", "Y"),
            ev("A", "W"),
        ];
        let expected = build(&events);

        let mut reversed = events.clone();
        reversed.reverse();
        assert_eq!(build(&reversed), expected);

        let mut rotated = events.clone();
        rotated.rotate_left(2);
        assert_eq!(build(&rotated), expected);
    }

    #[test]
    fn wins_sum_to_event_count() {
        let events = vec![ev("A", "X"), ev("A", "Y"), ev("A", "X"), ev("B", "X")];
        let total: u32 = build(&events).iter().map(|r| r.wins).sum();
        assert_eq!(total as usize, events.len());
    }

    #[test]
    fn empty() {
        assert!(build(&[]).is_empty());
    }
}

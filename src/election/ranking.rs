//! Vote-count ranking for the leaderboard.

use crate::model::Candidate;

/// Number of podium seats eligible for the animated reveal.
pub const PODIUM_SIZE: usize = 3;

/// A candidate's place in the standings. Computed from a candidate set,
/// never stored; indices refer back into the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    /// Index into the candidate slice the ranking was computed from.
    pub candidate: usize,
    /// 1-based place in the standings.
    pub rank: usize,
    /// Podium slot (0/1/2) for the top three, `None` below the podium.
    pub slot: Option<usize>,
    pub votes: usize,
}

/// Order candidates by vote count, highest first.
///
/// The sort is stable: candidates with equal counts keep their relative
/// input order. That tie-break is a documented contract of the
/// standings display (the earlier-registered candidate is listed
/// first), so this must never switch to an unstable sort.
pub fn rank(candidates: &[Candidate]) -> Vec<RankedEntry> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| candidates[b].vote_count().cmp(&candidates[a].vote_count()));

    order
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| RankedEntry {
            candidate,
            rank: i + 1,
            slot: (i < PODIUM_SIZE).then_some(i),
            votes: candidates[candidate].vote_count(),
        })
        .collect()
}

/// The podium slice of a ranking: at most the first three entries. No
/// placeholder seats are synthesized for short fields.
pub fn podium(ranking: &[RankedEntry]) -> &[RankedEntry] {
    &ranking[..ranking.len().min(PODIUM_SIZE)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ballot, Candidate};

    fn candidate(name: &str, votes: usize) -> Candidate {
        Candidate {
            id: name.to_lowercase(),
            name: name.into(),
            avatar: None,
            position: "President".into(),
            manifesto: None,
            votes: vec![Ballot; votes],
            vote_history: None,
        }
    }

    #[test]
    fn orders_by_votes_descending() {
        let candidates = vec![
            candidate("Alice", 340),
            candidate("Bob", 2200),
            candidate("Carol", 180),
        ];
        let ranking = rank(&candidates);
        let names: Vec<&str> = ranking
            .iter()
            .map(|e| candidates[e.candidate].name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Alice", "Carol"]);
        assert_eq!(ranking[0].votes, 2200);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[2].rank, 3);
    }

    #[test]
    fn equal_counts_keep_input_order() {
        let candidates = vec![candidate("X", 100), candidate("Y", 100)];
        let ranking = rank(&candidates);
        let names: Vec<&str> = ranking
            .iter()
            .map(|e| candidates[e.candidate].name.as_str())
            .collect();
        assert_eq!(names, ["X", "Y"]);
    }

    #[test]
    fn podium_is_at_most_three() {
        let empty: Vec<Candidate> = Vec::new();
        assert!(rank(&empty).is_empty());
        assert!(podium(&rank(&empty)).is_empty());

        let two = vec![candidate("A", 5), candidate("B", 3)];
        let ranking = rank(&two);
        assert_eq!(podium(&ranking).len(), 2);

        let five: Vec<Candidate> =
            (0..5).map(|i| candidate(&format!("C{i}"), 10 - i)).collect();
        let ranking = rank(&five);
        assert_eq!(podium(&ranking).len(), 3);
        assert_eq!(ranking[3].slot, None);
        assert_eq!(ranking[0].slot, Some(0));
    }
}

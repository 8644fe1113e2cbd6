//! Ranking and top-N selection of scored occupations

use std::cmp::Ordering;

use log::{debug, warn};

use crate::models::ScoredOccupation;

/// Sort scored occupations by descending score
///
/// The sort is stable: occupations with equal scores keep their input order.
#[must_use]
pub fn rank(mut scored: Vec<ScoredOccupation>) -> Vec<ScoredOccupation> {
    scored.sort_by(by_descending_score);
    scored
}

/// Keep the first `n` ranked occupations
///
/// Fewer than `n` entries is not an error. An empty input yields an empty
/// selection and a warning, so callers can report that nothing matched.
#[must_use]
pub fn select(ranked: Vec<ScoredOccupation>, n: usize) -> Vec<ScoredOccupation> {
    if ranked.is_empty() {
        warn!("No careers to recommend. Check input data.");
        return Vec::new();
    }

    let mut top = ranked;
    if top.len() > n {
        top.truncate(n);
    } else if top.len() < n {
        debug!("Requested {n} recommendations, only {} available", top.len());
    }
    top
}

fn by_descending_score(a: &ScoredOccupation, b: &ScoredOccupation) -> Ordering {
    b.score.total_cmp(&a.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(occupation: &str, score: f64) -> ScoredOccupation {
        ScoredOccupation::new(occupation, score, None)
    }

    #[test]
    fn test_rank_orders_by_descending_score() {
        let ranked = rank(vec![scored("a", 0.1), scored("b", 0.9), scored("c", 0.5)]);
        let names: Vec<_> = ranked.iter().map(|s| s.occupation.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_keeps_tie_order() {
        let ranked = rank(vec![
            scored("first", 0.5),
            scored("top", 0.8),
            scored("second", 0.5),
            scored("third", 0.5),
        ]);
        let names: Vec<_> = ranked.iter().map(|s| s.occupation.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_select_truncates() {
        let ranked = rank(vec![scored("a", 0.3), scored("b", 0.2), scored("c", 0.1)]);
        assert_eq!(select(ranked.clone(), 2).len(), 2);
        assert_eq!(select(ranked.clone(), 0).len(), 0);
        assert_eq!(select(ranked, 10).len(), 3);
    }
}

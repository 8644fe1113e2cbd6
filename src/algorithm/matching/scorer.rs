//! Match scoring
//!
//! An occupation's score is the mean coverage over the user's skills. A skill
//! whose table exists but does not list the occupation contributes 0 and still
//! counts towards the mean; a skill name with no table is ignored entirely.
//! The representative code comes from the first user skill, in the order the
//! user gave them, whose table lists the occupation.

use std::time::Instant;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::algorithm::network::OccupationGraph;
use crate::models::{ScoredOccupation, SkillRow, SkillTable, SkillTables};

type OccupationIndex<'a> = FxHashMap<&'a str, &'a SkillRow>;

/// Score every occupation in `graph` against `user_skills`
///
/// Returns one entry per node, in node order.
#[must_use]
pub fn score_occupations<S: AsRef<str>>(
    graph: &OccupationGraph,
    user_skills: &[S],
    tables: &SkillTables,
) -> Vec<ScoredOccupation> {
    let start = Instant::now();

    let indexes: Vec<OccupationIndex<'_>> = user_skills
        .iter()
        .filter_map(|skill| tables.get(skill.as_ref()))
        .map(SkillTable::occupation_index)
        .collect();

    let ignored = user_skills.len() - indexes.len();
    if ignored > 0 {
        debug!("Ignoring {ignored} skill names without a skill table");
    }

    let scored: Vec<ScoredOccupation> = graph
        .occupations()
        .map(|occupation| score_occupation(occupation, &indexes))
        .collect();

    info!(
        "Scored {} occupations against {} recognised skills in {:?}",
        scored.len(),
        indexes.len(),
        start.elapsed()
    );

    scored
}

fn score_occupation(occupation: &str, indexes: &[OccupationIndex<'_>]) -> ScoredOccupation {
    if indexes.is_empty() {
        return ScoredOccupation::new(occupation, 0.0, None);
    }

    let mut total = 0.0;
    let mut code: Option<&str> = None;

    for index in indexes {
        if let Some(row) = index.get(occupation) {
            total += row.coverage;
            code.get_or_insert(row.code.as_str());
        }
    }

    ScoredOccupation::new(
        occupation,
        total / indexes.len() as f64,
        code.map(str::to_string),
    )
}

//! User skill input handling

use crate::models::SkillTables;

/// Split a comma-separated list of skill names, trimming each entry
///
/// Empty entries are dropped; order is preserved.
#[must_use]
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split requested skills into those with a skill table and those without
///
/// Both halves keep the order in which the skills were requested.
#[must_use]
pub fn partition_skills<S: AsRef<str>>(
    requested: &[S],
    tables: &SkillTables,
) -> (Vec<String>, Vec<String>) {
    requested
        .iter()
        .map(|skill| skill.as_ref().to_string())
        .partition(|skill| tables.contains(skill))
}

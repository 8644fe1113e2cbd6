//! Skill table model
//!
//! A skill table holds, for one named soft skill, the occupations that exhibit
//! it, their classification code and the fraction of the skill they cover.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A single row of a skill table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    /// Occupation identifier
    #[serde(rename = "Occupation")]
    pub occupation: String,
    /// Classification code shared by related occupations
    #[serde(rename = "Code")]
    pub code: String,
    /// Fraction of the skill covered by the occupation, in `[0, 1]`
    #[serde(rename = "Skills Covered")]
    pub coverage: f64,
}

impl SkillRow {
    /// Create a new row
    #[must_use]
    pub fn new(occupation: impl Into<String>, code: impl Into<String>, coverage: f64) -> Self {
        Self {
            occupation: occupation.into(),
            code: code.into(),
            coverage,
        }
    }
}

/// All rows recorded for one skill, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTable {
    skill: String,
    rows: Vec<SkillRow>,
}

impl SkillTable {
    /// Create a table for `skill` from its rows
    #[must_use]
    pub fn new(skill: impl Into<String>, rows: Vec<SkillRow>) -> Self {
        Self {
            skill: skill.into(),
            rows,
        }
    }

    /// Name of the skill this table describes
    #[must_use]
    pub fn skill(&self) -> &str {
        &self.skill
    }

    /// Rows in source order
    #[must_use]
    pub fn rows(&self) -> &[SkillRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct occupations in order of first appearance
    pub fn occupations(&self) -> impl Iterator<Item = &str> {
        let mut seen = FxHashSet::default();
        self.rows
            .iter()
            .map(|row| row.occupation.as_str())
            .filter(move |occupation| seen.insert(*occupation))
    }

    /// First row recorded for `occupation`, if any
    #[must_use]
    pub fn find(&self, occupation: &str) -> Option<&SkillRow> {
        self.rows.iter().find(|row| row.occupation == occupation)
    }

    /// Lookup from occupation to its first row
    #[must_use]
    pub fn occupation_index(&self) -> FxHashMap<&str, &SkillRow> {
        let mut index = FxHashMap::with_capacity_and_hasher(self.rows.len(), Default::default());
        for row in &self.rows {
            index.entry(row.occupation.as_str()).or_insert(row);
        }
        index
    }

    /// Rows with repeated `(occupation, code)` pairs removed, keeping the first
    pub fn unique_pairs(&self) -> impl Iterator<Item = &SkillRow> {
        let mut seen = FxHashSet::default();
        self.rows
            .iter()
            .filter(move |row| seen.insert((row.occupation.as_str(), row.code.as_str())))
    }
}

/// The complete set of skill tables, keyed and ordered by skill name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillTables {
    tables: BTreeMap<String, SkillTable>,
}

impl SkillTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, returning the table previously stored under the same skill
    pub fn insert(&mut self, table: SkillTable) -> Option<SkillTable> {
        self.tables.insert(table.skill.clone(), table)
    }

    #[must_use]
    pub fn get(&self, skill: &str) -> Option<&SkillTable> {
        self.tables.get(skill)
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.tables.contains_key(skill)
    }

    /// Skill names in sorted order
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Tables in skill-name order
    pub fn iter(&self) -> impl Iterator<Item = &SkillTable> {
        self.tables.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total number of rows across every table
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.tables.values().map(SkillTable::len).sum()
    }
}

impl FromIterator<SkillTable> for SkillTables {
    fn from_iter<I: IntoIterator<Item = SkillTable>>(iter: I) -> Self {
        let mut tables = Self::new();
        for table in iter {
            tables.insert(table);
        }
        tables
    }
}

impl<'a> IntoIterator for &'a SkillTables {
    type Item = &'a SkillTable;
    type IntoIter = std::collections::btree_map::Values<'a, String, SkillTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SkillTable {
        SkillTable::new(
            "Listening",
            vec![
                SkillRow::new("Dancers", "27-2031.00", 0.4),
                SkillRow::new("Roofers", "47-2181.00", 0.2),
                SkillRow::new("Dancers", "27-2031.00", 0.9),
                SkillRow::new("Dancers", "27-9999.00", 0.1),
            ],
        )
    }

    #[test]
    fn test_occupations_are_distinct_in_first_seen_order() {
        let table = table();
        let occupations: Vec<_> = table.occupations().collect();
        assert_eq!(occupations, vec!["Dancers", "Roofers"]);
    }

    #[test]
    fn test_find_returns_first_row() {
        let table = table();
        let row = table.find("Dancers").unwrap();
        assert_eq!(row.coverage, 0.4);
        assert_eq!(table.occupation_index()["Dancers"].coverage, 0.4);
        assert!(table.find("Carpenters").is_none());
    }

    #[test]
    fn test_unique_pairs_drops_repeated_occupation_code() {
        let table = table();
        let pairs: Vec<_> = table
            .unique_pairs()
            .map(|r| (r.occupation.as_str(), r.code.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Dancers", "27-2031.00"),
                ("Roofers", "47-2181.00"),
                ("Dancers", "27-9999.00"),
            ]
        );
    }

    #[test]
    fn test_tables_are_ordered_by_skill_name() {
        let tables: SkillTables = ["Writing", "Active Listening", "Monitoring"]
            .into_iter()
            .map(|skill| SkillTable::new(skill, Vec::new()))
            .collect();
        let names: Vec<_> = tables.skill_names().collect();
        assert_eq!(names, vec!["Active Listening", "Monitoring", "Writing"]);
    }
}

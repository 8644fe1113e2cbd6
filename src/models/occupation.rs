//! Occupation models shared by the network, matching and ranking stages

use serde::{Deserialize, Serialize};

/// A node of the occupation network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationNode {
    /// Occupation identifier
    pub occupation: String,
    /// Skills whose tables mention this occupation, each at most once
    pub skills: Vec<String>,
}

impl OccupationNode {
    #[must_use]
    pub fn new(occupation: impl Into<String>) -> Self {
        Self {
            occupation: occupation.into(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// An occupation together with its match score for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOccupation {
    /// Occupation identifier
    pub occupation: String,
    /// Mean coverage across the requested skills, in `[0, 1]`
    pub score: f64,
    /// Code taken from the first requested skill that lists the occupation
    pub code: Option<String>,
}

impl ScoredOccupation {
    #[must_use]
    pub fn new(occupation: impl Into<String>, score: f64, code: Option<String>) -> Self {
        Self {
            occupation: occupation.into(),
            score,
            code,
        }
    }
}

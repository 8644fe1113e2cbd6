//! Domain models for occupation recommendations
//!
//! Skill tables are the input to every stage; occupation nodes and scored
//! occupations are what the network and matching stages produce.

pub mod occupation;
pub mod skill;

// Re-export commonly used types
pub use occupation::{OccupationNode, ScoredOccupation};
pub use skill::{SkillRow, SkillTable, SkillTables};

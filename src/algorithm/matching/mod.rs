//! Matching occupations against a user's soft skills
//!
//! This module implements:
//!
//! 1. Parsing and validation of the user's skill list
//! 2. Per-occupation match scores averaged over the requested skills

pub mod input;
pub mod scorer;

// Re-export key functions
pub use input::{parse_skill_list, partition_skills};
pub use scorer::score_occupations;

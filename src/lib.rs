//! A Rust library for recommending occupations from soft-skill coverage
//! tables, linking related occupations through shared classification codes.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod recommender;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{OutputFormat, RecommenderConfig};
pub use error::{CareerGraphError, Result};
pub use models::{OccupationNode, ScoredOccupation, SkillRow, SkillTable, SkillTables};
pub use recommender::Recommender;

// Pipeline stages
pub use algorithm::{
    NetworkBuilder, NetworkConfig, OccupationGraph, build_occupation_graph, parse_skill_list,
    partition_skills, rank, score_occupations, select,
};

// Loading
pub use async_io::load_skill_tables_async;
pub use loader::{SkillTableLoader, load_skill_tables, parse_coverage, read_skill_table};

//! Algorithm implementations for occupation recommendations
//!
//! The pipeline runs in three stages:
//!
//! 1. `network` builds the occupation graph from the skill tables
//! 2. `matching` scores every occupation against the user's skills
//! 3. `ranking` orders the scores and keeps the top N

pub mod matching;
pub mod network;
pub mod ranking;

pub use matching::{parse_skill_list, partition_skills, score_occupations};
pub use network::{NetworkBuilder, NetworkConfig, OccupationGraph, build_occupation_graph};
pub use ranking::{rank, select};

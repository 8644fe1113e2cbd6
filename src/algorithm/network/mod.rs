//! Occupation network
//!
//! Links occupations that share a classification code inside a skill table.

pub mod builder;
pub mod graph;

pub use builder::{NetworkBuilder, NetworkConfig, build_occupation_graph, code_group_pairs};
pub use graph::{OccupationGraph, OccupationNetwork};

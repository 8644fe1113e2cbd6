//! Occupation network construction
//!
//! The network is built in three passes over the skill tables:
//!
//! 1. every distinct occupation becomes a node
//! 2. within each table, occupations listed under the same classification code
//!    are linked pairwise
//! 3. every node records the skills whose tables mention it
//!
//! Code grouping is independent per table, so pass 2 can fan out across
//! tables with rayon. Each table produces its own edge list and the lists are
//! merged into the graph on the calling thread afterwards.

use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::graph::OccupationGraph;
use crate::models::{SkillTable, SkillTables};

/// Configuration for building the occupation network
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Group codes across tables in parallel
    pub parallel: bool,
    /// Minimum number of tables before the parallel path is used
    pub parallel_threshold: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 4,
        }
    }
}

/// Builder turning a complete set of skill tables into an [`OccupationGraph`]
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    config: NetworkConfig,
}

impl NetworkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration
    #[must_use]
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable parallel code grouping
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the finished network
    #[must_use]
    pub fn build(&self, tables: &SkillTables) -> OccupationGraph {
        let start = Instant::now();
        let mut graph = OccupationGraph::with_capacity(tables.total_rows(), tables.total_rows());

        for table in tables {
            for occupation in table.occupations() {
                graph.ensure_node(occupation);
            }
        }

        let ordered: Vec<&SkillTable> = tables.iter().collect();
        let edge_lists: Vec<Vec<(&str, &str)>> = if self.use_parallel(ordered.len()) {
            debug!("Grouping codes across {} tables in parallel", ordered.len());
            ordered.par_iter().map(|&table| code_group_pairs(table)).collect()
        } else {
            ordered.iter().map(|&table| code_group_pairs(table)).collect()
        };

        let mut candidate_pairs = 0usize;
        for edges in edge_lists {
            candidate_pairs += edges.len();
            for (a, b) in edges {
                graph.link(a, b);
            }
        }

        for table in tables {
            for occupation in table.occupations() {
                graph.attach_skill(occupation, table.skill());
            }
        }

        debug!(
            "Merged {} candidate pairs into {} edges",
            candidate_pairs,
            graph.edge_count()
        );
        info!(
            "Built occupation network with {} nodes and {} edges from {} skill tables in {:?}",
            graph.node_count(),
            graph.edge_count(),
            tables.len(),
            start.elapsed()
        );

        graph
    }

    fn use_parallel(&self, table_count: usize) -> bool {
        self.config.parallel && table_count >= self.config.parallel_threshold.max(2)
    }
}

/// Build a network with the default configuration
#[must_use]
pub fn build_occupation_graph(tables: &SkillTables) -> OccupationGraph {
    NetworkBuilder::new().build(tables)
}

/// Occupation pairs sharing a code within one table
///
/// Rows are deduplicated on `(occupation, code)` first, so a code group never
/// lists the same occupation twice. Groups keep first-seen order.
pub fn code_group_pairs(table: &SkillTable) -> Vec<(&str, &str)> {
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<SmallVec<[&str; 4]>> = Vec::new();

    for row in table.unique_pairs() {
        let slot = *positions.entry(row.code.as_str()).or_insert_with(|| {
            groups.push(SmallVec::new());
            groups.len() - 1
        });
        groups[slot].push(row.occupation.as_str());
    }

    let mut pairs = Vec::new();
    for group in groups.iter().filter(|group| group.len() >= 2) {
        pairs.extend(group.iter().copied().tuple_combinations::<(&str, &str)>());
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillRow;

    #[test]
    fn test_code_group_pairs_links_every_pair_in_a_group() {
        let table = SkillTable::new(
            "Coordination",
            vec![
                SkillRow::new("Roofers", "47-2181.00", 0.5),
                SkillRow::new("Carpenters", "47-2181.00", 0.5),
                SkillRow::new("Millwrights", "49-9044.00", 0.5),
                SkillRow::new("Stonemasons", "47-2181.00", 0.5),
            ],
        );

        let pairs = code_group_pairs(&table);
        assert_eq!(
            pairs,
            vec![
                ("Roofers", "Carpenters"),
                ("Roofers", "Stonemasons"),
                ("Carpenters", "Stonemasons"),
            ]
        );
    }

    #[test]
    fn test_code_group_pairs_ignores_repeated_rows() {
        let table = SkillTable::new(
            "Coordination",
            vec![
                SkillRow::new("Roofers", "47-2181.00", 0.5),
                SkillRow::new("Roofers", "47-2181.00", 0.7),
            ],
        );

        assert!(code_group_pairs(&table).is_empty());
    }
}

//! Occupation network backed by a petgraph undirected graph
//!
//! Nodes are occupations, edges link occupations that share a classification
//! code in at least one skill table. The graph is only mutated by the network
//! builder; everything public here is read-only.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::models::OccupationNode;

/// The underlying undirected graph type
pub type OccupationNetwork = UnGraph<OccupationNode, ()>;

/// Occupation network with O(1) lookup by occupation identifier
#[derive(Debug, Clone, Default)]
pub struct OccupationGraph {
    graph: OccupationNetwork,
    node_index: FxHashMap<String, NodeIndex>,
}

impl OccupationGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: OccupationNetwork::with_capacity(nodes, edges),
            node_index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Get or create the node for `occupation`
    pub(crate) fn ensure_node(&mut self, occupation: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(occupation) {
            return idx;
        }
        let idx = self.graph.add_node(OccupationNode::new(occupation));
        self.node_index.insert(occupation.to_string(), idx);
        idx
    }

    /// Link two occupations, returning `false` when nothing was added
    ///
    /// Self-pairs, unknown occupations and already linked pairs are skipped so
    /// the graph stays simple.
    pub(crate) fn link(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let (Some(&ia), Some(&ib)) = (self.node_index.get(a), self.node_index.get(b)) else {
            return false;
        };
        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, ());
        true
    }

    /// Record that `skill`'s table mentions `occupation`
    pub(crate) fn attach_skill(&mut self, occupation: &str, skill: &str) {
        if let Some(&idx) = self.node_index.get(occupation) {
            let node = &mut self.graph[idx];
            if !node.has_skill(skill) {
                node.skills.push(skill.to_string());
            }
        }
    }

    /// Number of occupations
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links between occupations
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn contains(&self, occupation: &str) -> bool {
        self.node_index.contains_key(occupation)
    }

    #[must_use]
    pub fn node(&self, occupation: &str) -> Option<&OccupationNode> {
        self.node_index.get(occupation).map(|&idx| &self.graph[idx])
    }

    /// Skills whose tables mention `occupation`
    #[must_use]
    pub fn skills(&self, occupation: &str) -> Option<&[String]> {
        self.node(occupation).map(|node| node.skills.as_slice())
    }

    /// Number of occupations linked to `occupation`
    #[must_use]
    pub fn degree(&self, occupation: &str) -> Option<usize> {
        self.node_index
            .get(occupation)
            .map(|&idx| self.graph.neighbors(idx).count())
    }

    /// Whether the two occupations share a code in some skill table
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_index.get(a), self.node_index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Occupations linked to `occupation`, in node order
    #[must_use]
    pub fn related_occupations(&self, occupation: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(occupation) else {
            return Vec::new();
        };
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_unstable();
        neighbors
            .into_iter()
            .map(|n| self.graph[n].occupation.as_str())
            .collect()
    }

    /// Occupations without any link
    #[must_use]
    pub fn isolated_occupations(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .map(|idx| self.graph[idx].occupation.as_str())
            .collect()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &OccupationNode> {
        self.graph.node_weights()
    }

    /// Occupation identifiers in insertion order
    pub fn occupations(&self) -> impl Iterator<Item = &str> {
        self.nodes().map(|node| node.occupation.as_str())
    }

    /// Every link as a pair of occupation identifiers
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].occupation.as_str(),
                self.graph[edge.target()].occupation.as_str(),
            )
        })
    }

    /// Borrow the underlying petgraph graph
    #[must_use]
    pub fn network(&self) -> &OccupationNetwork {
        &self.graph
    }
}

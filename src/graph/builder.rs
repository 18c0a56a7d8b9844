//! Co-occurrence graph builder
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) token lookups during construction. Edges are unweighted
//! neighbor sets: repeated co-occurrence does not strengthen a link.

use crate::types::Token;
use rustc_hash::{FxHashMap, FxHashSet};

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The token text for this node
    pub token: String,
    /// Neighbor node IDs
    pub neighbors: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            neighbors: FxHashSet::default(),
        }
    }

    /// Number of distinct neighbors
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// A mutable graph builder optimized for incremental construction
///
/// Node IDs are handed out in first-seen order, which is the order ties are
/// resolved in when ranking.
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps token -> node ID
    token_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            token_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            token_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given token, returning its ID
    pub fn get_or_create_node(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.token_to_id.insert(token.to_string(), id);
        self.nodes.push(BuilderNode::new(token));
        id
    }

    /// Link two nodes in both directions
    pub fn add_edge(&mut self, a: u32, b: u32) {
        if a == b {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(a as usize) {
            node.neighbors.insert(b);
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            node.neighbors.insert(a);
        }
    }

    /// Build a graph from tokens using a sliding window
    ///
    /// The token at index `i` is linked to every differing token at indices
    /// `i + 1 .. min(i + window_size, len)`. Every token becomes a node, even
    /// if it ends up without neighbors.
    pub fn from_tokens(tokens: &[Token], window_size: usize) -> Self {
        let mut builder = Self::with_capacity(tokens.len() / 2);

        for i in 0..tokens.len() {
            let node_i = builder.get_or_create_node(&tokens[i].text);

            let end = i.saturating_add(window_size).min(tokens.len());
            for j in (i + 1)..end {
                if tokens[i].text == tokens[j].text {
                    continue;
                }
                let node_j = builder.get_or_create_node(&tokens[j].text);
                builder.add_edge(node_i, node_j);
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by token text
    pub fn get_node_id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Iterate over all nodes in ID order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

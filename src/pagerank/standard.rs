//! TextRank propagation over an unweighted graph
//!
//! Unlike textbook PageRank this runs a fixed number of rounds without a
//! convergence check, starts every node at 1.0 and does not normalize:
//!
//! ```text
//! new[v] = (1 - d) + d * sum(score[u] / degree(u) for u in neighbors(v))
//! ```
//!
//! Every round reads only the previous round's scores.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Fixed-iteration TextRank scorer
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor
    pub damping: f64,
    /// Number of rounds to run
    pub iterations: usize,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 20,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of rounds
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run the recurrence on a graph
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(Vec::new());
        }

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let base = 1.0 - self.damping;

        for _ in 0..self.iterations {
            for (v, slot) in new_scores.iter_mut().enumerate() {
                let sum: f64 = graph
                    .neighbors(v as u32)
                    .iter()
                    .map(|&u| {
                        let degree = graph.degree(u);
                        if degree > 0 {
                            scores[u as usize] / degree as f64
                        } else {
                            0.0
                        }
                    })
                    .sum();
                *slot = base + self.damping * sum;
            }

            std::mem::swap(&mut scores, &mut new_scores);
        }

        PageRankResult::new(scores)
    }
}

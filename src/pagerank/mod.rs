//! Rank propagation
//!
//! This module provides the fixed-iteration TextRank recurrence used to
//! score co-occurrence graph nodes.

pub mod standard;

/// Result of a rank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Nodes ordered by score, highest first
    ///
    /// The sort is stable, so equal scores keep node ID (first-seen) order.
    pub fn ranked(&self) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let result = PageRankResult::new(vec![0.5, 1.0, 0.5, 1.0]);
        let order: Vec<u32> = result.ranked().into_iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_ranked_descending() {
        let result = PageRankResult::new(vec![0.2, 0.9, 0.4]);
        assert_eq!(result.ranked(), vec![(1, 0.9), (2, 0.4), (0, 0.2)]);
    }
}

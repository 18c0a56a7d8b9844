//! Graph construction and representation
//!
//! This module provides graph building and storage for the token
//! co-occurrence graph.

pub mod builder;
pub mod csr;

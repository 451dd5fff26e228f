//! # Network Module
//!
//! Builds the artist collaboration graph from resolved track credits and
//! derives the per-artist metrics.
//!
//! ## Construction
//!
//! Every track links each unordered pair of distinct credited artists. An
//! existing edge gains one weight and the song name; a new edge starts at
//! weight 1. Single-artist tracks add no edge but still count toward the
//! artist's song count. Storage is a `petgraph` undirected graph with a name
//! index on the side; node indices follow first appearance.
//!
//! ## Metrics
//!
//! - Weighted betweenness (Brandes), normalized, cost convention from
//!   [`WeightMode`]
//! - Degree centrality, degree / (n - 1)
//! - Song count and number of collaborators
//!
//! [`rank`] combines them into the ranking table, sorted by betweenness
//! descending with ties kept in node order.

mod centrality;
mod graph;
mod layout;
mod ranking;

pub use centrality::{WeightMode, betweenness, degree_centrality};
pub use graph::{CollabGraph, Collaboration};
pub use layout::{LayoutConfig, spring_layout};
pub use ranking::{rank, top_by_degree};

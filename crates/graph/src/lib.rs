//! Adjacency-list graphs with shortest paths, spanning trees and centroid
//! decomposition.
//!
//! Edge costs are any [`algebraic::Integer`]; sums wrap on overflow.

mod centroid_decomposition;
mod error;
mod graph;
mod read;
mod shortest_path;
mod spanning_tree;

pub use centroid_decomposition::CentroidDecomposition;
pub use error::GraphError;
pub use graph::Edge;
pub use graph::Graph;
pub use read::ReadOptions;

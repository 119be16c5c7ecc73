//! Teleportation network model and queries
//!
//! - `Network`: location/link storage, the public query surface
//! - `algos`: neighborhood, reachability and cycle searches
//! - `AdjacencyProvider`: adjacency seam the algorithms run against

pub mod algos;
pub mod network;
pub mod traversal;
pub mod types;


pub use network::{Network, Vertex};
pub use traversal::AdjacencyProvider;
pub use types::{Jumps, Link, Location};

use crate::graph::types::Location;
use crate::graph::Network;

/// Trait for providing adjacency to the traversal algorithms
pub trait AdjacencyProvider {
    /// Locations directly linked to `location`, in unspecified order.
    /// Unknown locations have no neighbors.
    fn neighbors(&self, location: &Location) -> Vec<Location>;
}

impl AdjacencyProvider for Network {
    fn neighbors(&self, location: &Location) -> Vec<Location> {
        self.vertex(location)
            .map(|vertex| vertex.neighbors().cloned().collect())
            .unwrap_or_default()
    }
}

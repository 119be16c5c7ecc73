use crate::graph::types::Location;
use crate::graph::AdjacencyProvider;
use std::collections::HashSet;

/// Depth-first search for `to`, starting from `from`.
///
/// `from` is marked visited before the search starts and `to` only counts
/// when it turns up as an unvisited neighbor, so a location never reaches
/// itself.
pub fn can_reach(provider: &dyn AdjacencyProvider, from: &Location, to: &Location) -> bool {
    let mut visited: HashSet<Location> = HashSet::new();
    let mut stack: Vec<Location> = vec![from.clone()];
    visited.insert(from.clone());

    while let Some(current) = stack.pop() {
        for neighbor in provider.neighbors(&current) {
            if visited.contains(&neighbor) {
                continue;
            }
            if &neighbor == to {
                return true;
            }
            visited.insert(neighbor.clone());
            stack.push(neighbor);
        }
    }

    false
}

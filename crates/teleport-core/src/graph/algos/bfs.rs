use crate::graph::types::{Jumps, Location};
use crate::graph::AdjacencyProvider;
use std::collections::{HashSet, VecDeque};

/// Locations whose shortest distance from `origin` is in `1..=max_jumps`.
///
/// Breadth-first, so every location is first dequeued at its shortest
/// distance and is expanded at most once.
pub fn neighborhood(
    provider: &dyn AdjacencyProvider,
    origin: &Location,
    max_jumps: Jumps,
) -> HashSet<Location> {
    let mut visited: HashSet<Location> = HashSet::new();
    let mut queue: VecDeque<(Location, u32)> = VecDeque::new();

    visited.insert(origin.clone());
    queue.push_back((origin.clone(), 0));

    while let Some((current, jumps)) = queue.pop_front() {
        if jumps >= max_jumps.value() {
            continue;
        }

        for neighbor in provider.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor, jumps + 1));
            }
        }
    }

    visited.remove(origin);
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Network;

    fn names(set: &HashSet<Location>) -> HashSet<&str> {
        set.iter().map(Location::name).collect()
    }

    #[test]
    fn test_excludes_origin_on_cycle() {
        let mut network = Network::new();
        network.add_link("A".into(), "B".into());
        network.add_link("B".into(), "C".into());
        network.add_link("C".into(), "A".into());

        let found = neighborhood(&network, &"A".into(), Jumps::new(5).unwrap());
        assert_eq!(names(&found), HashSet::from(["B", "C"]));
    }

    #[test]
    fn test_uses_shortest_distance() {
        // A-B-C-D-E plus shortcut A-D. E is two jumps away via the shortcut,
        // four via the chain.
        let mut network = Network::new();
        for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "D")] {
            network.add_link(a.into(), b.into());
        }

        let found = neighborhood(&network, &"A".into(), Jumps::new(2).unwrap());
        assert_eq!(names(&found), HashSet::from(["B", "C", "D", "E"]));

        let found = neighborhood(&network, &"A".into(), Jumps::ONE);
        assert_eq!(names(&found), HashSet::from(["B", "D"]));
    }

    #[test]
    fn test_unknown_origin_is_empty() {
        let network = Network::new();
        assert!(neighborhood(&network, &"Nowhere".into(), Jumps::ONE).is_empty());
    }
}

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, trace};

use crate::graph::algos::{can_reach, neighborhood, on_cycle};
use crate::graph::types::{Jumps, Link, Location};
use crate::trace_time;

/// A location together with the locations it is directly linked to.
#[derive(Debug, Clone)]
pub struct Vertex {
    location: Location,
    neighbors: HashSet<Location>,
}

impl Vertex {
    fn new(location: Location) -> Self {
        Self {
            location,
            neighbors: HashSet::new(),
        }
    }

    pub fn neighbors(&self) -> impl Iterator<Item = &Location> {
        self.neighbors.iter()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Undirected network of locations.
///
/// Vertices are created the first time a location is referenced, by an
/// insertion or by a query, and are never removed. Adjacency is kept
/// symmetric: every link is stored on both endpoints.
#[derive(Debug, Clone, Default)]
pub struct Network {
    vertices: HashMap<Location, Vertex>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `a` and `b`, creating either vertex if needed.
    ///
    /// Adding an existing link leaves the network unchanged.
    pub fn add_link(&mut self, a: Location, b: Location) {
        let added = self.touch(&a).neighbors.insert(b.clone());
        self.touch(&b).neighbors.insert(a.clone());

        if added {
            trace!(from = %a, to = %b, "add_link");
        }
    }

    /// Every stored adjacency as a directed link.
    ///
    /// An undirected link A-B shows up twice, once as A-B and once as B-A.
    /// Order is unspecified.
    pub fn links(&self) -> Vec<Link> {
        self.vertices
            .values()
            .flat_map(|vertex| {
                vertex
                    .neighbors()
                    .map(|neighbor| Link::directed(vertex.location.clone(), neighbor.clone()))
            })
            .collect()
    }

    /// Each undirected link once, in canonical form.
    pub fn unique_links(&self) -> Vec<Link> {
        let unique: HashSet<Link> = self.links().iter().map(Link::canonical).collect();
        unique.into_iter().collect()
    }

    /// Every location whose shortest distance from `origin` is between one
    /// and `max_jumps` links. The origin itself is never included.
    pub fn neighborhood(&mut self, origin: &Location, max_jumps: Jumps) -> HashSet<Location> {
        let start = Instant::now();
        self.touch(origin);

        let found = neighborhood(&*self, origin, max_jumps);
        trace_time!(start, "neighborhood", found = found.len());
        found
    }

    /// True if `to` can be reached from `from` over one or more links.
    pub fn can_reach(&mut self, from: &Location, to: &Location) -> bool {
        let start = Instant::now();
        self.touch(from);

        let reachable = can_reach(&*self, from, to);
        trace_time!(start, "can_reach", reachable = reachable);
        reachable
    }

    /// True if `location` can be left and returned to without crossing any
    /// link twice.
    pub fn on_cycle(&mut self, location: &Location) -> bool {
        let start = Instant::now();
        self.touch(location);

        let cyclic = on_cycle(&*self, location);
        trace_time!(start, "on_cycle", cyclic = cyclic);
        cyclic
    }

    pub fn vertex(&self, location: &Location) -> Option<&Vertex> {
        self.vertices.get(location)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.vertices.contains_key(location)
    }

    /// Number of distinct locations seen so far
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.vertices.keys()
    }

    fn touch(&mut self, location: &Location) -> &mut Vertex {
        self.vertices.entry(location.clone()).or_insert_with(|| {
            debug!(location = %location, "new_vertex");
            Vertex::new(location.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(name: &str) -> Location {
        Location::new(name)
    }

    #[test]
    fn test_add_link_is_symmetric() {
        let mut network = Network::new();
        network.add_link(loc("Fortuna"), loc("Atlantis"));

        let fortuna = network.vertex(&loc("Fortuna")).unwrap();
        let atlantis = network.vertex(&loc("Atlantis")).unwrap();
        assert!(fortuna.neighbors().any(|n| n == &loc("Atlantis")));
        assert!(atlantis.neighbors().any(|n| n == &loc("Fortuna")));
    }

    #[test]
    fn test_add_link_twice_is_noop() {
        let mut network = Network::new();
        network.add_link(loc("Fortuna"), loc("Atlantis"));
        network.add_link(loc("Fortuna"), loc("Atlantis"));
        network.add_link(loc("Atlantis"), loc("Fortuna"));

        assert_eq!(network.len(), 2);
        assert_eq!(network.links().len(), 2);
        assert_eq!(network.vertex(&loc("Fortuna")).unwrap().degree(), 1);
    }

    #[test]
    fn test_links_reports_both_directions() {
        let mut network = Network::new();
        network.add_link(loc("Fortuna"), loc("Atlantis"));

        let links: HashSet<Link> = network.links().into_iter().collect();
        assert!(links.contains(&Link::directed(loc("Fortuna"), loc("Atlantis"))));
        assert!(links.contains(&Link::directed(loc("Atlantis"), loc("Fortuna"))));
        assert_eq!(network.unique_links().len(), 1);
    }

    #[test]
    fn test_self_link_is_accepted() {
        let mut network = Network::new();
        network.add_link(loc("Fortuna"), loc("Fortuna"));

        assert_eq!(network.len(), 1);
        assert_eq!(
            network.links(),
            vec![Link::directed(loc("Fortuna"), loc("Fortuna"))]
        );
        assert_eq!(network.links()[0].to_string(), "Fortuna - Fortuna");
        assert!(network.on_cycle(&loc("Fortuna")));
    }

    #[test]
    fn test_queries_create_unknown_vertices() {
        let mut network = Network::new();
        assert!(network.is_empty());

        assert!(network.neighborhood(&loc("Nowhere"), Jumps::ONE).is_empty());
        assert!(!network.can_reach(&loc("Elsewhere"), &loc("Nowhere")));
        assert!(!network.on_cycle(&loc("Limbo")));

        assert!(network.contains(&loc("Nowhere")));
        assert!(network.contains(&loc("Elsewhere")));
        assert!(network.contains(&loc("Limbo")));
        assert_eq!(network.len(), 3);
        assert!(network.links().is_empty());
    }
}

use crate::graph::types::{Link, Location};
use crate::graph::AdjacencyProvider;
use std::collections::HashSet;
use std::vec;

/// One level of the walk: a location and the neighbors not yet tried from it.
struct Frame {
    location: Location,
    pending: vec::IntoIter<Location>,
}

impl Frame {
    fn new(provider: &dyn AdjacencyProvider, location: Location) -> Self {
        let pending = provider.neighbors(&location).into_iter();
        Self { location, pending }
    }
}

/// Decide whether `origin` lies on a cycle.
///
/// Walks depth-first from `origin`, marking each link as used the first
/// time it is crossed in either direction. Locations may be revisited,
/// links may not. Arriving back at `origin` over an unused link proves a
/// cycle. The used-link set is shared by the whole walk and never unwound,
/// so every link is crossed at most once.
pub fn on_cycle(provider: &dyn AdjacencyProvider, origin: &Location) -> bool {
    let mut used: HashSet<Link> = HashSet::new();
    let mut stack: Vec<Frame> = vec![Frame::new(provider, origin.clone())];

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.pending.next() else {
            stack.pop();
            continue;
        };

        if !used.insert(Link::new(frame.location.clone(), neighbor.clone())) {
            continue;
        }
        if &neighbor == origin {
            return true;
        }

        let next = Frame::new(provider, neighbor);
        stack.push(next);
    }

    false
}

use crate::error::{Result, TeleportError};
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A named point in the network.
///
/// Identity is the name: two locations are equal, and hash the same, iff
/// their names are equal. The name is shared so clones are cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(Arc<str>);

impl Location {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Location(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location::new(name)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A connection between two locations.
///
/// `Link::new` builds the canonical form (endpoints ordered by name), which
/// is what edge-reuse tracking keys on: A-B and B-A are the same link.
/// `Link::directed` keeps the orientation it was discovered in, which is
/// what link enumeration reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Link {
    pub from: Location,
    pub to: Location,
}

impl Link {
    pub fn new(a: Location, b: Location) -> Self {
        if a <= b {
            Link { from: a, to: b }
        } else {
            Link { from: b, to: a }
        }
    }

    pub fn directed(from: Location, to: Location) -> Self {
        Link { from, to }
    }

    /// Same link with endpoints in canonical order
    pub fn canonical(&self) -> Self {
        Link::new(self.from.clone(), self.to.clone())
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}

/// Maximum number of links a neighborhood search may cross.
///
/// Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Jumps(u32);

impl Jumps {
    pub const ONE: Jumps = Jumps(1);

    pub fn new(jumps: u32) -> Result<Self> {
        if jumps == 0 {
            return Err(TeleportError::InvalidJumps { value: jumps });
        }
        Ok(Jumps(jumps))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Jumps {
    type Error = TeleportError;

    fn try_from(jumps: u32) -> Result<Self> {
        Jumps::new(jumps)
    }
}

impl fmt::Display for Jumps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_location_equality_is_by_name() {
        let a = Location::new("Fortuna");
        let b = Location::from(String::from("Fortuna"));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(set.contains("Fortuna"));
    }

    #[test]
    fn test_link_new_is_order_insensitive() {
        let ab = Link::new("Atlantis".into(), "Fortuna".into());
        let ba = Link::new("Fortuna".into(), "Atlantis".into());
        assert_eq!(ab, ba);
        assert_eq!(ab.from.name(), "Atlantis");
    }

    #[test]
    fn test_link_directed_keeps_orientation() {
        let ba = Link::directed("Fortuna".into(), "Atlantis".into());
        assert_eq!(ba.from.name(), "Fortuna");
        assert_ne!(ba, Link::directed("Atlantis".into(), "Fortuna".into()));
        assert_eq!(ba.canonical(), Link::new("Atlantis".into(), "Fortuna".into()));
        assert_eq!(ba.to_string(), "Fortuna - Atlantis");
    }

    #[test]
    fn test_jumps_rejects_zero() {
        assert!(matches!(
            Jumps::new(0),
            Err(TeleportError::InvalidJumps { value: 0 })
        ));
        assert_eq!(Jumps::new(3).unwrap().value(), 3);
        assert_eq!(Jumps::try_from(1).unwrap(), Jumps::ONE);
    }
}

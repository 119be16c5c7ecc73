//! Graph algorithm implementations
//!
//! - `bfs`: bounded-hop neighborhood search
//! - `reach`: depth-first reachability between two locations
//! - `cycle`: link-tracking walk that decides cycle membership
//!
//! Neighbor iteration order is unspecified everywhere, so which branch a
//! search explores first (and which path it finds) is unspecified too.
//! Only the returned sets and booleans are stable.

pub mod bfs;
pub mod cycle;
pub mod reach;

pub use bfs::neighborhood;
pub use cycle::on_cycle;
pub use reach::can_reach;

//! Teleport Core Library
//!
//! In-memory model of a teleportation network and the queries that run
//! against it, plus the command grammar and session loop used by the CLI.

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod render;
pub mod session;

//! CLI commands for teleport

pub mod check;
pub mod demo;
pub mod dispatch;
pub mod run;

//! CLI commands for netgraph

pub mod check;
pub mod classify;
pub mod connected;
pub mod dispatch;
pub mod euler;
pub mod format;
pub mod path;

//! Ambient functionality shared by the cloud vulnerability database tools.
#![deny(clippy::unwrap_used)]

pub mod cli;
pub mod progress;
pub mod utils;

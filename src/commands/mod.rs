//! CLI commands

pub mod journeys;
pub mod list;
pub mod show;
pub mod tags;

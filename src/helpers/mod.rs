//! Helper functions shared by the store and the CLI

mod date;

pub use date::*;

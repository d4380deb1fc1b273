//! Common test utilities for archsense-core
//!
//! Shared fixtures, builders and assertions for the integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

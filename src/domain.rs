//! Domain logic
//!
//! This module contains the pure, UI-independent parts of the feed:
//! - Seeded hashing and pseudo-random generation
//! - Row visuals derived from a row key
//! - Pages produced by the data source
//! - List virtualization

pub mod color;
pub mod page;
pub mod row;
pub mod seed;
pub mod virtualizer;

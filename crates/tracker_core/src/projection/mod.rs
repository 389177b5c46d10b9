//! Read-only projections rendered by the view layer.
//!
//! # Responsibility
//! - Derive per-project progress, dashboard tiles, board columns and
//!   deadline countdowns from store state.
//!
//! # Invariants
//! - Projections never mutate the store.
//! - Projections are recomputed on demand; nothing is cached.

pub mod board;
pub mod card;
pub mod stats;
pub mod summary;

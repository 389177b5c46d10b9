//! Domain model for projects and their tasks.
//!
//! # Responsibility
//! - Define the canonical records owned by the tracker store.
//! - Keep enumerated workflow values closed so invalid states are unrepresentable.
//!
//! # Invariants
//! - Every record is identified by a store-issued id, never a caller-chosen one.
//! - Every task references exactly one project through `project_id`.

pub mod priority;
pub mod project;
pub mod task;

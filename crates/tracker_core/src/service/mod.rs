//! Use-case services used by the view layer.
//!
//! # Responsibility
//! - Apply form-level required-field checks before touching the store.
//! - Dispatch "new" and "edit" drafts to create or update.
//! - Keep the view decoupled from store internals.

pub mod tracker_service;

//! Core domain logic for the project tracker.
//! The store in this crate is the single authority over projects and tasks.

pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod service;
pub mod store;

pub use config::{ConfigError, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::priority::Priority;
pub use model::project::{Project, ProjectFields, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskFields, TaskId, TaskStatus};
pub use projection::board::{BoardCard, BoardColumn, TaskBoard};
pub use projection::card::{project_cards, DeadlineCountdown, ProjectCard};
pub use projection::stats::{completion_pct, ProjectStats};
pub use projection::summary::TrackerSummary;
pub use service::tracker_service::{
    ProjectDraft, SaveOutcome, SubmitError, TaskDraft, TrackerService,
};
pub use store::TrackerStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

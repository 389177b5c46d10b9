//! Dashboard tiles shown above both views.

use crate::model::project::ProjectStatus;
use crate::store::TrackerStore;
use serde::{Deserialize, Serialize};

/// Four headline counters of the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

impl TrackerSummary {
    pub fn from_store(store: &TrackerStore) -> Self {
        Self {
            total_projects: store.projects().len(),
            active_projects: store
                .projects()
                .iter()
                .filter(|project| project.status() == ProjectStatus::Active)
                .count(),
            total_tasks: store.tasks().len(),
            completed_tasks: store.tasks().iter().filter(|task| task.is_done()).count(),
        }
    }
}

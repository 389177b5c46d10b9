//! Project card projection for the card-grid view.
//!
//! # Responsibility
//! - Combine a project with its progress and deadline countdown.
//!
//! # Invariants
//! - A countdown of zero or fewer days is overdue.
//! - A countdown below seven days is urgent (overdue included).

use crate::model::project::Project;
use crate::projection::stats::ProjectStats;
use crate::store::TrackerStore;
use chrono::NaiveDate;
use serde::Serialize;

const URGENT_WITHIN_DAYS: i64 = 7;
const UNASSIGNED_OWNER: &str = "Unassigned";

/// Whole days between today and a project deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineCountdown {
    pub days_left: i64,
}

impl DeadlineCountdown {
    pub fn until(deadline: NaiveDate, today: NaiveDate) -> Self {
        Self {
            days_left: (deadline - today).num_days(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.days_left <= 0
    }

    pub fn is_urgent(&self) -> bool {
        self.days_left < URGENT_WITHIN_DAYS
    }

    /// `"N days left"` or `"Overdue"`.
    pub fn label(&self) -> String {
        if self.is_overdue() {
            "Overdue".to_string()
        } else {
            format!("{} days left", self.days_left)
        }
    }
}

/// Everything the card grid shows for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub project: Project,
    pub stats: ProjectStats,
    pub countdown: Option<DeadlineCountdown>,
}

impl ProjectCard {
    pub fn build(project: &Project, stats: ProjectStats, today: NaiveDate) -> Self {
        Self {
            project: project.clone(),
            stats,
            countdown: project
                .fields
                .deadline
                .map(|deadline| DeadlineCountdown::until(deadline, today)),
        }
    }

    /// Owner name, or `"Unassigned"` when absent or empty.
    pub fn owner_label(&self) -> &str {
        match self.project.fields.owner.as_deref() {
            Some(owner) if !owner.is_empty() => owner,
            _ => UNASSIGNED_OWNER,
        }
    }
}

/// Cards for the projects matching `term`, in store order.
pub fn project_cards(store: &TrackerStore, term: &str, today: NaiveDate) -> Vec<ProjectCard> {
    store
        .filter_projects_by_name(term)
        .into_iter()
        .map(|project| ProjectCard::build(project, store.project_stats(project.id), today))
        .collect()
}

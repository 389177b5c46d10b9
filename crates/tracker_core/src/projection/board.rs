//! Kanban board projection.
//!
//! # Invariants
//! - Columns always appear in workflow order, including empty ones.
//! - Cards keep store insertion order within a column.

use crate::model::task::{Task, TaskStatus};
use crate::store::TrackerStore;
use serde::Serialize;

/// One task as rendered on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCard {
    pub task: Task,
    /// Owning project name, `None` when the project no longer resolves.
    pub project_name: Option<String>,
}

/// One workflow column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub label: &'static str,
    pub cards: Vec<BoardCard>,
}

impl BoardColumn {
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Tasks grouped into the four workflow columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskBoard {
    pub columns: Vec<BoardColumn>,
}

impl TaskBoard {
    pub fn from_store(store: &TrackerStore) -> Self {
        let columns = TaskStatus::WORKFLOW
            .iter()
            .map(|&status| BoardColumn {
                status,
                label: status.label(),
                cards: store
                    .tasks_with_status(status)
                    .map(|task| BoardCard {
                        task: task.clone(),
                        project_name: store
                            .project(task.project_id())
                            .map(|project| project.name().to_string()),
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }
}

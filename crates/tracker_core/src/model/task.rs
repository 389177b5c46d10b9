//! Task domain model.
//!
//! # Responsibility
//! - Define the unit of work that moves through the board workflow.
//!
//! # Invariants
//! - `TaskId` values are issued by the store and never reused.
//! - `project_id` is not validated here; the form boundary only offers
//!   existing projects.

use crate::model::priority::Priority;
use crate::model::project::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-issued task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board workflow state: todo -> in-progress -> review -> done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started. Default for new tasks.
    #[default]
    Todo,
    InProgress,
    /// Awaiting review.
    Review,
    Done,
}

impl TaskStatus {
    /// Workflow order, which is also the board column order.
    pub const WORKFLOW: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "review" => Some(Self::Review),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Column heading shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Caller-editable task fields.
///
/// Keys serialize as `projectId` and `dueDate` like the external task records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    pub title: String,
    pub project_id: ProjectId,
    pub assignee: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskFields {
    /// Creates fields for `project_id` with form defaults (`todo`, `medium`).
    pub fn new(title: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            title: title.into(),
            project_id,
            assignee: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: None,
        }
    }
}

/// Task record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(flatten)]
    pub fields: TaskFields,
}

impl Task {
    pub fn new(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    pub fn title(&self) -> &str {
        self.fields.title.as_str()
    }

    pub fn project_id(&self) -> ProjectId {
        self.fields.project_id
    }

    pub fn status(&self) -> TaskStatus {
        self.fields.status
    }

    pub fn is_done(&self) -> bool {
        self.fields.status.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;

    #[test]
    fn workflow_order_matches_board_columns() {
        let labels: Vec<_> = TaskStatus::WORKFLOW.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["To Do", "In Progress", "Review", "Done"]);
    }

    #[test]
    fn only_done_counts_as_done() {
        assert!(TaskStatus::Done.is_done());
        assert!(!TaskStatus::Review.is_done());
        assert_eq!(TaskStatus::parse("in_progress"), None);
    }
}

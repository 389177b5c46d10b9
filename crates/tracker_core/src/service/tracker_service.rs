//! Form-submission service over the tracker store.
//!
//! # Responsibility
//! - Validate required fields of project and task drafts.
//! - Route drafts to create (no id) or full-replace update (id present).
//! - Prefill edit drafts from stored records.
//!
//! # Invariants
//! - A rejected draft performs no store operation.
//! - Referential validity of `project_id` is the view's job; the service only
//!   checks that one was selected.

use crate::model::priority::Priority;
use crate::model::project::{ProjectFields, ProjectId};
use crate::model::task::{TaskFields, TaskId, TaskStatus};
use crate::store::TrackerStore;
use chrono::NaiveDate;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a form submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Project name is empty.
    MissingProjectName,
    /// Task title is empty.
    MissingTaskTitle,
    /// No project selected for the task.
    MissingTaskProject,
}

impl SubmitError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingProjectName => "missing_project_name",
            Self::MissingTaskTitle => "missing_task_title",
            Self::MissingTaskProject => "missing_task_project",
        }
    }
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProjectName => write!(f, "project name is required"),
            Self::MissingTaskTitle => write!(f, "task title is required"),
            Self::MissingTaskProject => write!(f, "task must belong to a project"),
        }
    }
}

impl Error for SubmitError {}

/// Result of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome<Id> {
    /// A new record was appended.
    Created(Id),
    /// An existing record was replaced.
    Updated(Id),
    /// Edit target no longer exists; nothing changed.
    Unchanged(Id),
}

impl<Id: Copy> SaveOutcome<Id> {
    pub fn id(&self) -> Id {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Unchanged(id) => *id,
        }
    }
}

/// Project form content in "new" (`id = None`) or "edit" mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub id: Option<ProjectId>,
    pub fields: ProjectFields,
}

impl ProjectDraft {
    pub fn new(fields: ProjectFields) -> Self {
        Self { id: None, fields }
    }
}

/// Task form content. `project_id` stays `None` until a project is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub title: String,
    pub project_id: Option<ProjectId>,
    pub assignee: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, project_id: Option<ProjectId>) -> Self {
        Self {
            title: title.into(),
            project_id,
            ..Self::default()
        }
    }

    fn into_fields(self) -> Result<(Option<TaskId>, TaskFields), SubmitError> {
        if self.title.is_empty() {
            return Err(SubmitError::MissingTaskTitle);
        }
        let project_id = self.project_id.ok_or(SubmitError::MissingTaskProject)?;
        Ok((
            self.id,
            TaskFields {
                title: self.title,
                project_id,
                assignee: self.assignee,
                status: self.status,
                priority: self.priority,
                due_date: self.due_date,
            },
        ))
    }
}

/// Service facade owning the tracker store.
#[derive(Debug, Clone, Default)]
pub struct TrackerService {
    store: TrackerStore,
}

impl TrackerService {
    /// Creates a service around an existing store.
    pub fn new(store: TrackerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TrackerStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TrackerStore {
        &mut self.store
    }

    pub fn into_store(self) -> TrackerStore {
        self.store
    }

    /// Submits a project form.
    ///
    /// # Errors
    /// - `MissingProjectName` when the name is empty; the store is untouched.
    pub fn save_project(
        &mut self,
        draft: ProjectDraft,
    ) -> Result<SaveOutcome<ProjectId>, SubmitError> {
        if draft.fields.name.is_empty() {
            return Err(rejected(SubmitError::MissingProjectName));
        }

        let outcome = match draft.id {
            None => SaveOutcome::Created(self.store.create_project(draft.fields)),
            Some(id) => {
                if self.store.update_project(id, draft.fields) {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Unchanged(id)
                }
            }
        };
        Ok(outcome)
    }

    /// Submits a task form.
    ///
    /// # Errors
    /// - `MissingTaskTitle` when the title is empty.
    /// - `MissingTaskProject` when no project was selected.
    pub fn save_task(&mut self, draft: TaskDraft) -> Result<SaveOutcome<TaskId>, SubmitError> {
        let (id, fields) = draft.into_fields().map_err(rejected)?;

        let outcome = match id {
            None => SaveOutcome::Created(self.store.create_task(fields)),
            Some(id) => {
                if self.store.update_task(id, fields) {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Unchanged(id)
                }
            }
        };
        Ok(outcome)
    }

    /// Deletes a project and its tasks. Unknown ids are ignored.
    pub fn delete_project(&mut self, id: ProjectId) -> Option<usize> {
        self.store.delete_project(id)
    }

    /// Deletes a task. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.delete_task(id)
    }

    /// Prefills an edit draft for project `id`.
    pub fn edit_project_draft(&self, id: ProjectId) -> Option<ProjectDraft> {
        self.store.project(id).map(|project| ProjectDraft {
            id: Some(project.id),
            fields: project.fields.clone(),
        })
    }

    /// Prefills an edit draft for task `id`.
    pub fn edit_task_draft(&self, id: TaskId) -> Option<TaskDraft> {
        self.store.task(id).map(|task| TaskDraft {
            id: Some(task.id),
            title: task.fields.title.clone(),
            project_id: Some(task.fields.project_id),
            assignee: task.fields.assignee.clone(),
            status: task.fields.status,
            priority: task.fields.priority,
            due_date: task.fields.due_date,
        })
    }
}

fn rejected(err: SubmitError) -> SubmitError {
    warn!(
        "event=form_submit module=service status=rejected error_code={}",
        err.code()
    );
    err
}

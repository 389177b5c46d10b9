//! Project domain model.
//!
//! # Responsibility
//! - Define the top-level unit of work tracked by the store.
//! - Separate the store-assigned identity from caller-editable fields.
//!
//! # Invariants
//! - `ProjectId` values are issued by the store and never reused.
//! - `status` and `priority` always hold one of their enumerated values.

use crate::model::priority::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-issued project identifier.
///
/// Serialized as a bare integer to match the external record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Scoped but not started. Default for new projects.
    #[default]
    Planning,
    /// Work is underway.
    Active,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(Self::Planning),
            "active" => Some(Self::Active),
            "on-hold" => Some(Self::OnHold),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

/// Caller-editable project fields.
///
/// Used for both create and full-replace update; the id is never part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub owner: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
}

impl ProjectFields {
    /// Creates fields with a name and form defaults for everything else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Project record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

impl Project {
    pub fn new(id: ProjectId, fields: ProjectFields) -> Self {
        Self { id, fields }
    }

    pub fn name(&self) -> &str {
        self.fields.name.as_str()
    }

    pub fn status(&self) -> ProjectStatus {
        self.fields.status
    }

    pub fn priority(&self) -> Priority {
        self.fields.priority
    }

    /// Case-insensitive substring match on the project name.
    ///
    /// An empty `term` matches every project.
    pub fn name_matches(&self, term: &str) -> bool {
        self.fields
            .name
            .to_lowercase()
            .contains(term.to_lowercase().as_str())
    }
}

//! In-memory project/task store.
//!
//! # Responsibility
//! - Own the project and task collections and be the only place that mutates them.
//! - Issue ids from per-collection monotonic counters.
//! - Answer per-project statistics and name filtering.
//!
//! # Invariants
//! - Ids are unique within a collection and never reissued, even after delete.
//! - Deleting a project removes its tasks in the same call.
//! - Listing order is insertion order; nothing is sorted implicitly.
//! - Update/delete on an unknown id is a silent no-op.

mod seed;

use crate::model::project::{Project, ProjectFields, ProjectId};
use crate::model::task::{Task, TaskFields, TaskId, TaskStatus};
use crate::projection::stats::ProjectStats;
use log::{debug, info};

/// Owner of the project and task collections.
#[derive(Debug, Clone)]
pub struct TrackerStore {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    next_project_id: u64,
    next_task_id: u64,
}

impl Default for TrackerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerStore {
    /// Creates an empty store. The first issued ids are `1`.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            next_project_id: 1,
            next_task_id: 1,
        }
    }

    /// Creates a store seeded with the fixed example projects and tasks.
    ///
    /// Counters continue after the highest seeded id.
    pub fn with_example_data() -> Self {
        let projects = seed::example_projects();
        let tasks = seed::example_tasks();
        let next_project_id = projects.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let next_task_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        info!(
            "event=store_seed module=store status=ok projects={} tasks={}",
            projects.len(),
            tasks.len()
        );
        Self {
            projects,
            tasks,
            next_project_id,
            next_task_id,
        }
    }

    /// All projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a project and returns its freshly issued id.
    pub fn create_project(&mut self, fields: ProjectFields) -> ProjectId {
        let id = ProjectId(self.next_project_id);
        self.next_project_id += 1;
        self.projects.push(Project::new(id, fields));
        info!("event=project_create module=store status=ok project_id={id}");
        id
    }

    /// Replaces the fields of project `id`.
    ///
    /// Returns `false` without touching anything when `id` is unknown.
    /// Tasks are never modified.
    pub fn update_project(&mut self, id: ProjectId, fields: ProjectFields) -> bool {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) => {
                project.fields = fields;
                info!("event=project_update module=store status=ok project_id={id}");
                true
            }
            None => {
                debug!("event=project_update module=store status=noop project_id={id}");
                false
            }
        }
    }

    /// Removes project `id` together with every task that references it.
    ///
    /// Returns the number of cascaded tasks, or `None` when `id` is unknown.
    pub fn delete_project(&mut self, id: ProjectId) -> Option<usize> {
        let Some(position) = self.projects.iter().position(|project| project.id == id) else {
            debug!("event=project_delete module=store status=noop project_id={id}");
            return None;
        };

        self.projects.remove(position);
        let before = self.tasks.len();
        self.tasks.retain(|task| task.project_id() != id);
        let cascaded = before - self.tasks.len();
        info!(
            "event=project_delete module=store status=ok project_id={id} cascaded_tasks={cascaded}"
        );
        Some(cascaded)
    }

    /// Appends a task and returns its freshly issued id.
    ///
    /// `fields.project_id` is stored as given; callers only offer existing projects.
    pub fn create_task(&mut self, fields: TaskFields) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        let project_id = fields.project_id;
        self.tasks.push(Task::new(id, fields));
        info!("event=task_create module=store status=ok task_id={id} project_id={project_id}");
        id
    }

    /// Replaces the fields of task `id`. Returns `false` when `id` is unknown.
    pub fn update_task(&mut self, id: TaskId, fields: TaskFields) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.fields = fields;
                info!("event=task_update module=store status=ok task_id={id}");
                true
            }
            None => {
                debug!("event=task_update module=store status=noop task_id={id}");
                false
            }
        }
    }

    /// Removes task `id`. Returns `false` when `id` is unknown.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!("event=task_delete module=store status=ok task_id={id}");
        } else {
            debug!("event=task_delete module=store status=noop task_id={id}");
        }
        removed
    }

    /// Tasks of one project, in insertion order.
    pub fn tasks_for_project(&self, project_id: ProjectId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.project_id() == project_id)
    }

    /// Tasks currently in one workflow state, in insertion order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Completion statistics for one project. Unknown ids yield all zeros.
    pub fn project_stats(&self, project_id: ProjectId) -> ProjectStats {
        ProjectStats::from_tasks(self.tasks_for_project(project_id))
    }

    /// Projects whose name contains `term`, ignoring case.
    pub fn filter_projects_by_name(&self, term: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.name_matches(term))
            .collect()
    }
}

//! Fixed example records used to seed a fresh store.

use crate::model::priority::Priority;
use crate::model::project::{Project, ProjectFields, ProjectId, ProjectStatus};
use crate::model::task::{Task, TaskFields, TaskId, TaskStatus};
use chrono::NaiveDate;

pub(super) fn example_projects() -> Vec<Project> {
    vec![
        Project::new(
            ProjectId(1),
            ProjectFields {
                name: "Website Redesign".to_string(),
                description: Some("Complete overhaul of company website".to_string()),
                deadline: date(2025, 1, 15),
                owner: Some("Sarah Chen".to_string()),
                status: ProjectStatus::Active,
                priority: Priority::High,
            },
        ),
        Project::new(
            ProjectId(2),
            ProjectFields {
                name: "Mobile App Launch".to_string(),
                description: Some("iOS and Android app development".to_string()),
                deadline: date(2025, 2, 28),
                owner: Some("Mike Johnson".to_string()),
                status: ProjectStatus::Planning,
                priority: Priority::High,
            },
        ),
    ]
}

pub(super) fn example_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Design mockups",
            1,
            "Alex Kim",
            TaskStatus::Done,
            Priority::High,
            (2024, 12, 10),
        ),
        task(
            2,
            "Develop homepage",
            1,
            "Jordan Lee",
            TaskStatus::InProgress,
            Priority::High,
            (2024, 12, 15),
        ),
        task(
            3,
            "User testing",
            1,
            "Sarah Chen",
            TaskStatus::Todo,
            Priority::Medium,
            (2024, 12, 20),
        ),
        task(
            4,
            "API development",
            2,
            "Chris Park",
            TaskStatus::InProgress,
            Priority::High,
            (2025, 1, 5),
        ),
    ]
}

fn task(
    id: u64,
    title: &str,
    project_id: u64,
    assignee: &str,
    status: TaskStatus,
    priority: Priority,
    (year, month, day): (i32, u32, u32),
) -> Task {
    Task::new(
        TaskId(id),
        TaskFields {
            title: title.to_string(),
            project_id: ProjectId(project_id),
            assignee: Some(assignee.to_string()),
            status,
            priority,
            due_date: date(year, month, day),
        },
    )
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

use chrono::NaiveDate;
use tracker_core::{
    Priority, Project, ProjectFields, ProjectId, ProjectStatus, Task, TaskFields, TaskId,
    TaskStatus,
};

#[test]
fn project_serializes_flat_with_kebab_case_enums() {
    let project = Project::new(
        ProjectId(7),
        ProjectFields {
            name: "Launch".to_string(),
            description: None,
            deadline: NaiveDate::from_ymd_opt(2025, 3, 1),
            owner: Some("Dana".to_string()),
            status: ProjectStatus::OnHold,
            priority: Priority::High,
        },
    );

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Launch");
    assert_eq!(json["deadline"], "2025-03-01");
    assert_eq!(json["status"], "on-hold");
    assert_eq!(json["priority"], "high");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn task_deserializes_from_external_record() {
    let value = serde_json::json!({
        "id": 1,
        "title": "Design mockups",
        "projectId": 1,
        "assignee": "Alex Kim",
        "status": "done",
        "priority": "high",
        "dueDate": "2024-12-10"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.id, TaskId(1));
    assert_eq!(task.project_id(), ProjectId(1));
    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.fields.priority, Priority::High);
    assert_eq!(task.fields.due_date, NaiveDate::from_ymd_opt(2024, 12, 10));
}

#[test]
fn task_serializes_with_camel_case_keys() {
    let mut fields = TaskFields::new("API development", ProjectId(2));
    fields.status = TaskStatus::InProgress;
    fields.due_date = NaiveDate::from_ymd_opt(2025, 1, 5);
    let json = serde_json::to_value(Task::new(TaskId(4), fields)).unwrap();

    assert_eq!(json["projectId"], 2);
    assert_eq!(json["dueDate"], "2025-01-05");
    assert_eq!(json["status"], "in-progress");
    assert!(json.get("project_id").is_none());
    assert!(json.get("due_date").is_none());
}

#[test]
fn unknown_status_label_is_rejected() {
    let value = serde_json::json!({
        "id": 1,
        "title": "x",
        "projectId": 1,
        "assignee": null,
        "status": "blocked",
        "priority": "low",
        "dueDate": null
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
    assert_eq!(TaskStatus::parse("blocked"), None);
}

#[test]
fn field_defaults_match_new_forms() {
    let project = ProjectFields::default();
    assert_eq!(project.status, ProjectStatus::Planning);
    assert_eq!(project.priority, Priority::Medium);

    let task = TaskFields::new("t", ProjectId(1));
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
}

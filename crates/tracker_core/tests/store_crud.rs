use std::collections::HashSet;
use tracker_core::{
    Priority, ProjectFields, ProjectId, ProjectStatus, TaskFields, TaskId, TaskStatus,
    TrackerStore,
};

fn launch_fields() -> ProjectFields {
    ProjectFields {
        status: ProjectStatus::Planning,
        priority: Priority::High,
        ..ProjectFields::named("Launch")
    }
}

#[test]
fn example_data_is_seeded_in_order() {
    let store = TrackerStore::with_example_data();

    let names: Vec<_> = store.projects().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Website Redesign", "Mobile App Launch"]);

    let titles: Vec<_> = store.tasks().iter().map(|t| t.title()).collect();
    assert_eq!(
        titles,
        ["Design mockups", "Develop homepage", "User testing", "API development"]
    );
    assert_eq!(store.tasks_for_project(ProjectId(1)).count(), 3);
}

#[test]
fn create_appends_and_returns_lookup_id() {
    let mut store = TrackerStore::new();

    let id = store.create_project(launch_fields());
    let project = store.project(id).unwrap();
    assert_eq!(project.name(), "Launch");
    assert_eq!(project.status(), ProjectStatus::Planning);
    assert_eq!(project.priority(), Priority::High);
    assert_eq!(store.projects().last().unwrap().id, id);
}

#[test]
fn ids_stay_distinct_across_deletes() {
    let mut store = TrackerStore::new();
    let mut project_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for round in 0..5 {
        let project_id = store.create_project(ProjectFields::named(format!("p{round}")));
        assert!(project_ids.insert(project_id));
        for n in 0..3 {
            let task_id = store.create_task(TaskFields::new(format!("t{round}-{n}"), project_id));
            assert!(task_ids.insert(task_id));
        }
        if round % 2 == 0 {
            store.delete_project(project_id);
        } else {
            let last = store.tasks().last().unwrap().id;
            store.delete_task(last);
        }
    }

    // The most recent ids were deleted; fresh ones must still be new.
    let fresh_project = store.create_project(ProjectFields::named("fresh"));
    assert!(project_ids.insert(fresh_project));
    let fresh_task = store.create_task(TaskFields::new("fresh", fresh_project));
    assert!(task_ids.insert(fresh_task));
}

#[test]
fn delete_project_cascades_only_to_its_tasks() {
    let mut store = TrackerStore::with_example_data();
    let untouched: Vec<_> = store.tasks_for_project(ProjectId(2)).cloned().collect();

    let cascaded = store.delete_project(ProjectId(1));
    assert_eq!(cascaded, Some(3));
    assert!(store.project(ProjectId(1)).is_none());
    assert!(store
        .tasks()
        .iter()
        .all(|task| task.project_id() != ProjectId(1)));
    assert_eq!(store.tasks(), untouched.as_slice());
}

#[test]
fn delete_unknown_ids_is_a_noop() {
    let mut store = TrackerStore::with_example_data();
    let before = store.clone();

    assert_eq!(store.delete_project(ProjectId(99)), None);
    assert!(!store.delete_task(TaskId(99)));
    assert_eq!(store.projects(), before.projects());
    assert_eq!(store.tasks(), before.tasks());
}

#[test]
fn update_project_replaces_fields_and_leaves_tasks() {
    let mut store = TrackerStore::with_example_data();
    let tasks_before = store.tasks().to_vec();

    let mut fields = store.project(ProjectId(2)).unwrap().fields.clone();
    fields.status = ProjectStatus::OnHold;
    fields.owner = None;
    assert!(store.update_project(ProjectId(2), fields.clone()));

    let project = store.project(ProjectId(2)).unwrap();
    assert_eq!(project.fields, fields);
    assert_eq!(store.projects()[1].id, ProjectId(2));
    assert_eq!(store.tasks(), tasks_before.as_slice());
}

#[test]
fn update_unknown_project_leaves_collection_unchanged() {
    let mut store = TrackerStore::with_example_data();
    let before = store.projects().to_vec();

    assert!(!store.update_project(ProjectId(42), ProjectFields::named("Ghost")));
    assert_eq!(store.projects(), before.as_slice());
}

#[test]
fn update_and_delete_task_by_id() {
    let mut store = TrackerStore::with_example_data();

    let mut fields = store.task(TaskId(3)).unwrap().fields.clone();
    fields.status = TaskStatus::Review;
    assert!(store.update_task(TaskId(3), fields));
    assert_eq!(store.task(TaskId(3)).unwrap().status(), TaskStatus::Review);
    assert!(!store.update_task(TaskId(77), TaskFields::new("none", ProjectId(1))));

    assert!(store.delete_task(TaskId(3)));
    assert!(store.task(TaskId(3)).is_none());
    assert_eq!(store.tasks().len(), 3);
}

#[test]
fn create_task_does_not_check_project_reference() {
    let mut store = TrackerStore::new();
    let id = store.create_task(TaskFields::new("orphan", ProjectId(500)));
    assert_eq!(store.task(id).unwrap().project_id(), ProjectId(500));
}

#[test]
fn filter_projects_by_name_is_case_insensitive() {
    let store = TrackerStore::with_example_data();

    for term in ["site", "SITE", "Site"] {
        let matches = store.filter_projects_by_name(term);
        assert_eq!(matches.len(), 1, "term `{term}`");
        assert_eq!(matches[0].name(), "Website Redesign");
    }
    assert_eq!(store.filter_projects_by_name("").len(), 2);
    assert!(store.filter_projects_by_name("backend").is_empty());
}

#[test]
fn tasks_with_status_preserves_insertion_order() {
    let store = TrackerStore::with_example_data();
    let in_progress: Vec<_> = store
        .tasks_with_status(TaskStatus::InProgress)
        .map(|task| task.id)
        .collect();
    assert_eq!(in_progress, [TaskId(2), TaskId(4)]);
}

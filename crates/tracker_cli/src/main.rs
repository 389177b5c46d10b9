//! CLI entry point printing the tracker dashboard.
//!
//! # Responsibility
//! - Resolve configuration from the environment and start logging if asked.
//! - Render the summary tiles, project cards and board as plain text.

use chrono::{Local, NaiveDate};
use log::info;
use std::process::ExitCode;
use tracker_core::{project_cards, TaskBoard, TrackerConfig, TrackerStore, TrackerSummary};

fn main() -> ExitCode {
    let config = match TrackerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tracker: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.init_logging() {
        eprintln!("tracker: logging disabled: {err}");
    }

    let store = config.build_store();
    info!(
        "event=cli_render module=cli status=start projects={} tasks={}",
        store.projects().len(),
        store.tasks().len()
    );
    print!("{}", render(&store, Local::now().date_naive()));
    ExitCode::SUCCESS
}

fn render(store: &TrackerStore, today: NaiveDate) -> String {
    let mut out = String::new();
    let summary = TrackerSummary::from_store(store);
    out.push_str(&format!("tracker_core version={}\n\n", tracker_core::core_version()));
    out.push_str(&format!(
        "Projects: {}  Active: {}  Tasks: {}  Completed: {}\n\n",
        summary.total_projects,
        summary.active_projects,
        summary.total_tasks,
        summary.completed_tasks
    ));

    out.push_str("== Projects ==\n");
    for card in project_cards(store, "", today) {
        let deadline = card
            .countdown
            .map(|countdown| countdown.label())
            .unwrap_or_else(|| "no deadline".to_string());
        out.push_str(&format!(
            "[{}] {} ({}, {}) owner={} {} | {} {}%\n",
            card.project.id,
            card.project.name(),
            card.project.status().as_str(),
            card.project.priority().as_str(),
            card.owner_label(),
            deadline,
            card.stats.progress_label(),
            card.stats.pct
        ));
    }

    out.push_str("\n== Board ==\n");
    for column in TaskBoard::from_store(store).columns {
        out.push_str(&format!("{} ({})\n", column.label, column.count()));
        for card in &column.cards {
            out.push_str(&format!(
                "  - [{}] {} ({}) {}\n",
                card.task.id,
                card.task.title(),
                card.task.fields.priority.as_str(),
                card.project_name.as_deref().unwrap_or("")
            ));
        }
    }
    out
}

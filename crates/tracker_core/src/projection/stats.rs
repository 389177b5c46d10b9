//! Per-project completion statistics.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Task completion figures for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    /// Tasks belonging to the project.
    pub total: usize,
    /// Tasks among `total` whose status is done.
    pub done: usize,
    /// Completion percentage in `0..=100`.
    pub pct: u8,
}

impl ProjectStats {
    /// Builds stats from the tasks of a single project.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (total, done) = tasks.into_iter().fold((0, 0), |(total, done), task| {
            (total + 1, done + usize::from(task.is_done()))
        });
        Self {
            total,
            done,
            pct: completion_pct(done, total),
        }
    }

    /// `"done/total tasks"` progress caption.
    pub fn progress_label(&self) -> String {
        format!("{}/{} tasks", self.done, self.total)
    }
}

/// Rounds `done / total * 100` half-up; `0` when `total == 0`.
///
/// Values of `done` above `total` are clamped to 100.
pub fn completion_pct(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u128;
    let total = total as u128;
    // (done * 100 / total) + 0.5, floored, in integer arithmetic.
    let pct = (done * 200 + total) / (total * 2);
    u8::try_from(pct).unwrap_or(100)
}

//! Task display formatting

use chrono::NaiveDate;

use crate::models::{Task, TaskStatus};
use crate::services::TaskProgress;

/// Short badge for a task status
pub fn task_badge(task: &Task, today: NaiveDate) -> &'static str {
    if task.is_overdue(today) {
        return "[!]";
    }
    match task.status {
        TaskStatus::Todo => "[ ]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Done => "[x]",
    }
}

/// Format the task list, overdue tasks flagged against today's date
pub fn format_task_list(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let title_width = tasks
        .iter()
        .map(|t| t.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:<title_width$}  {:<12}  {:<10}  {}\n",
        "", "Title", "Status", "Due", "ID",
    ));
    output.push_str(&format!(
        "{:-<5}  {:-<title_width$}  {:-<12}  {:-<10}  {:-<12}\n",
        "", "", "", "", "",
    ));

    for task in tasks {
        let due = task
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<5}  {:<title_width$}  {:<12}  {:<10}  {}\n",
            task_badge(task, today),
            task.title,
            task.status.to_string(),
            due,
            task.id,
        ));
    }

    output
}

/// Format the task progress line for the summary view
pub fn format_task_progress(progress: &TaskProgress) -> String {
    let mut line = format!(
        "Tasks: {}/{} done, {} in progress",
        progress.done, progress.total, progress.in_progress
    );
    if progress.overdue > 0 {
        line.push_str(&format!(", {} overdue", progress.overdue));
    }
    line.push('\n');
    line
}

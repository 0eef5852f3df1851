//! Task CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::display::task::format_task_list;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{Task, TaskStatus};
use crate::services::TaskService;
use crate::storage::Storage;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a planning task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List tasks
    List {
        /// Only show one status (todo, in_progress, done)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Mark a task as in progress
    Start {
        /// Task title or ID
        task: String,
    },
    /// Mark a task as done
    Done {
        /// Task title or ID
        task: String,
    },
    /// Delete a task
    Delete {
        /// Task title or ID
        task: String,
    },
}

/// Handle a task command
pub fn handle_task_command(storage: &Storage, cmd: TaskCommands) -> RelocateResult<()> {
    let service = TaskService::new(storage);
    let today = Utc::now().date_naive();

    match cmd {
        TaskCommands::Add { title, due, notes } => {
            let task = service.create(title, notes, due)?;
            println!("Added task: {}", task.title);
            if let Some(due) = task.due_date {
                println!("  Due: {}", due);
            }
            println!("  ID: {}", task.id);
        }

        TaskCommands::List { status } => {
            let status = status
                .as_deref()
                .map(|s| s.parse::<TaskStatus>().map_err(RelocateError::Validation))
                .transpose()?;
            let tasks = service.list(status)?;
            print!("{}", format_task_list(&tasks, today));
        }

        TaskCommands::Start { task } => {
            let found = resolve_task(&service, &task)?;
            let updated = service.set_status(found.id, TaskStatus::InProgress)?;
            println!("Started task: {}", updated.title);
        }

        TaskCommands::Done { task } => {
            let found = resolve_task(&service, &task)?;
            let updated = service.set_status(found.id, TaskStatus::Done)?;
            println!("Completed task: {}", updated.title);
        }

        TaskCommands::Delete { task } => {
            let found = resolve_task(&service, &task)?;
            service.delete(found.id)?;
            println!("Deleted task: {}", found.title);
        }
    }

    Ok(())
}

/// Resolve a task by full UUID, short display ID, or title
fn resolve_task(service: &TaskService, input: &str) -> RelocateResult<Task> {
    if let Ok(id) = input.parse() {
        if let Ok(task) = service.get(id) {
            return Ok(task);
        }
    }

    let tasks = service.list(None)?;
    tasks
        .into_iter()
        .find(|t| t.id.to_string() == input || t.title.eq_ignore_ascii_case(input))
        .ok_or_else(|| RelocateError::task_not_found(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_start_and_done_by_title() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        let task = service.create("Book movers", None, None).unwrap();

        handle_task_command(
            &storage,
            TaskCommands::Start {
                task: "book movers".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            service.get(task.id).unwrap().status,
            TaskStatus::InProgress
        );

        handle_task_command(
            &storage,
            TaskCommands::Done {
                task: task.id.to_string(),
            },
        )
        .unwrap();
        assert!(service.get(task.id).unwrap().is_done());
    }

    #[test]
    fn test_delete_missing_task() {
        let (_temp_dir, storage) = create_test_storage();
        let err = handle_task_command(
            &storage,
            TaskCommands::Delete {
                task: "nothing".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}

//! Task service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{Task, TaskId, TaskStatus};
use crate::storage::Storage;

/// Progress counts for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProgress {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

/// Service for task management
pub struct TaskService<'a> {
    storage: &'a Storage,
}

impl<'a> TaskService<'a> {
    /// Create a new task service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new task
    pub fn create(
        &self,
        title: impl Into<String>,
        notes: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> RelocateResult<Task> {
        let mut task = Task::new(title);
        task.notes = notes;
        task.due_date = due_date;

        task.validate().map_err(RelocateError::Validation)?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;
        self.storage.log_create(
            EntityType::Task,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        Ok(task)
    }

    /// List tasks, optionally filtered by status
    pub fn list(&self, status: Option<TaskStatus>) -> RelocateResult<Vec<Task>> {
        match status {
            Some(s) => self.storage.tasks.get_by_status(s),
            None => self.storage.tasks.get_all(),
        }
    }

    /// Get a task by ID
    pub fn get(&self, id: TaskId) -> RelocateResult<Task> {
        self.storage
            .tasks
            .get(id)?
            .ok_or_else(|| RelocateError::task_not_found(id.to_string()))
    }

    /// Move a task to a new status
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> RelocateResult<Task> {
        let mut task = self.get(id)?;
        let before = task.clone();

        task.set_status(status);

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;
        self.storage.log_update(
            EntityType::Task,
            task.id.to_string(),
            Some(task.title.clone()),
            &before,
            &task,
        )?;

        Ok(task)
    }

    /// Delete a task
    pub fn delete(&self, id: TaskId) -> RelocateResult<()> {
        let task = self.get(id)?;

        self.storage.tasks.delete(id)?;
        self.storage.tasks.save()?;
        self.storage.log_delete(
            EntityType::Task,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        Ok(())
    }

    /// Progress counts as of the given date
    pub fn progress(&self, today: NaiveDate) -> RelocateResult<TaskProgress> {
        let tasks = self.storage.tasks.get_all()?;
        Ok(TaskProgress {
            total: tasks.len(),
            done: tasks.iter().filter(|t| t.is_done()).count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
        })
    }
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
    fn test_create_and_transition() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let task = service.create("Book flights", None, None).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);

        let task = service.set_status(task.id, TaskStatus::InProgress).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let task = service.set_status(task.id, TaskStatus::Done).unwrap();
        assert!(task.is_done());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        assert!(service.create("  ", None, None).unwrap_err().is_validation());
    }

    #[test]
    fn test_delete_missing_task_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let err = service.delete(TaskId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let overdue_date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        let done = service.create("Sell car", None, None).unwrap();
        service.set_status(done.id, TaskStatus::Done).unwrap();
        service
            .create("Request visa", None, Some(overdue_date))
            .unwrap();
        service.create("Pack boxes", None, None).unwrap();

        let progress = service.progress(today).unwrap();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.done, 1);
        assert_eq!(progress.overdue, 1);
    }
}

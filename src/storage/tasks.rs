//! Task repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{Task, TaskId, TaskStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable task data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TaskData {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Repository for task persistence
pub struct TaskRepository {
    path: PathBuf,
    data: RwLock<HashMap<TaskId, Task>>,
}

impl TaskRepository {
    /// Create a new task repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load tasks from disk
    pub fn load(&self) -> Result<(), RelocateError> {
        let file_data: TaskData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for task in file_data.tasks {
            data.insert(task.id, task);
        }

        Ok(())
    }

    /// Save tasks to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut tasks: Vec<_> = data.values().cloned().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = TaskData { tasks };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a task by ID
    pub fn get(&self, id: TaskId) -> Result<Option<Task>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all tasks, due-soonest first, undated tasks last
    pub fn get_all(&self) -> Result<Vec<Task>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut tasks: Vec<_> = data.values().cloned().collect();
        tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y).then(a.created_at.cmp(&b.created_at)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.created_at.cmp(&b.created_at),
        });
        Ok(tasks)
    }

    /// Get tasks with a given status
    pub fn get_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, RelocateError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.status == status)
            .collect())
    }

    /// Insert or update a task
    pub fn upsert(&self, task: Task) -> Result<(), RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(task.id, task);
        Ok(())
    }

    /// Delete a task
    pub fn delete(&self, id: TaskId) -> Result<bool, RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count tasks
    pub fn count(&self) -> Result<usize, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TaskRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TaskRepository::new(temp_dir.path().join("tasks.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_get_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let task = Task::new("Book flights");
        let id = task.id;
        repo.upsert(task).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().title, "Book flights");
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_orders_by_due_date() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut late = Task::new("Ship boxes");
        late.due_date = NaiveDate::from_ymd_opt(2025, 8, 1);
        let mut soon = Task::new("Request visa");
        soon.due_date = NaiveDate::from_ymd_opt(2025, 5, 1);
        let undated = Task::new("Sell car");

        repo.upsert(undated).unwrap();
        repo.upsert(late).unwrap();
        repo.upsert(soon).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].title, "Request visa");
        assert_eq!(all[1].title, "Ship boxes");
        assert_eq!(all[2].title, "Sell car");
    }

    #[test]
    fn test_get_by_status() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut done = Task::new("Sell car");
        done.complete();
        repo.upsert(done).unwrap();
        repo.upsert(Task::new("Book flights")).unwrap();

        assert_eq!(repo.get_by_status(TaskStatus::Done).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(TaskStatus::Todo).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let task = Task::new("Book flights");
        let id = task.id;
        repo.upsert(task).unwrap();
        repo.save().unwrap();

        let repo2 = TaskRepository::new(temp_dir.path().join("tasks.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().title, "Book flights");
    }
}

use uuid::Uuid;

use super::task::Task;

/// Ordered, in-memory list of tasks. The single source of truth for the app.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task at the end of the list.
    pub fn add(&mut self, task: Task) {
        log::info!("Adding task '{}' ({} → {})", task.title, task.start, task.end);
        self.tasks.push(task);
    }

    /// Replace the record with the same id. Returns `false` when no task
    /// matched, in which case the update is dropped.
    pub fn replace(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => {
                log::debug!("Dropping update for unknown task {}", updated.id);
                false
            }
        }
    }
}

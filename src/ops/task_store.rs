use std::fmt;

use tracing::debug;

use crate::model::task::{Task, TaskId};

/// A change that was applied to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Deleted(TaskId),
    Toggled(TaskId),
    Updated(TaskId),
}

/// Handle returned by [`TaskStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered, in-memory collection of tasks.
///
/// Owns id assignment: ids come from a counter that only ever grows, so an
/// id is never handed out twice even after deletes. Every operation is total;
/// unknown ids and empty text are silent no-ops. Listeners hear about
/// mutations that actually changed something.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of effective mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new incomplete task. Returns `None` (and changes nothing) when
    /// `text` is empty after trimming.
    pub fn add(&mut self, text: &str, date: &str, priority: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text, date, priority));
        debug!(id, priority, date, "task added");
        self.emit(StoreEvent::Added(id));
        Some(id)
    }

    /// Remove the task with this id. Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        debug!(id, "task deleted");
        self.emit(StoreEvent::Deleted(id));
        true
    }

    /// Flip `completed` on the task with this id
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        self.emit(StoreEvent::Toggled(id));
        true
    }

    /// Replace the task whose id matches `task.id` with `task`, keeping its
    /// position. Every field is overwritten; text is not re-validated.
    pub fn update(&mut self, task: Task) -> bool {
        let Some(index) = self.position(task.id) else {
            return false;
        };
        let id = task.id;
        self.tasks[index] = task;
        debug!(id, "task updated");
        self.emit(StoreEvent::Updated(id));
        true
    }

    /// Register a listener called after each effective mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

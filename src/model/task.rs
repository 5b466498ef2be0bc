/// Identifier assigned by the store when a task is created
pub type TaskId = u64;

/// Priority values offered by the UI, in the order the form cycles through them.
/// The empty string means "no priority".
pub const PRIORITY_CHOICES: [&str; 4] = ["", "High", "Medium", "Low"];

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Description, trimmed at creation
    pub text: String,
    pub completed: bool,
    /// Due date as entered (e.g. `2024-03-01`); may be empty or unparseable
    pub date: String,
    /// `High`, `Medium`, `Low`, or empty. Any other string is accepted but unranked.
    pub priority: String,
}

impl Task {
    /// Create an incomplete task
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        date: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
            date: date.into(),
            priority: priority.into(),
        }
    }

    /// Rank of this task's priority, if it is one of the known values
    pub fn priority_rank(&self) -> Option<u8> {
        priority_rank(&self.priority)
    }
}

/// Fixed priority ranking: `High=3, Medium=2, Low=1`. Anything else is unranked.
pub fn priority_rank(priority: &str) -> Option<u8> {
    match priority {
        "High" => Some(3),
        "Medium" => Some(2),
        "Low" => Some(1),
        _ => None,
    }
}

/// Next entry in [`PRIORITY_CHOICES`], wrapping. Unknown values restart the cycle.
pub fn next_priority(current: &str) -> &'static str {
    match PRIORITY_CHOICES.iter().position(|p| *p == current) {
        Some(i) => PRIORITY_CHOICES[(i + 1) % PRIORITY_CHOICES.len()],
        None => PRIORITY_CHOICES[0],
    }
}

/// Previous entry in [`PRIORITY_CHOICES`], wrapping
pub fn prev_priority(current: &str) -> &'static str {
    let len = PRIORITY_CHOICES.len();
    match PRIORITY_CHOICES.iter().position(|p| *p == current) {
        Some(i) => PRIORITY_CHOICES[(i + len - 1) % len],
        None => PRIORITY_CHOICES[0],
    }
}

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::sort::{SortKey, SortOrder};
use crate::model::task::Task;
use crate::util::unicode::locale_compare;

/// Current sort key and direction for the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        SortState { key, order }
    }

    /// Choosing the active key again flips the direction; a different key
    /// becomes active in ascending order.
    pub fn select(&mut self, key: SortKey) {
        if key == self.key {
            self.order = self.order.reversed();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }

    /// Compare two tasks by the active key and direction
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ord = match self.key {
            SortKey::Name => locale_compare(&a.text, &b.text),
            SortKey::Date => compare_dates(&a.date, &b.date),
            SortKey::Priority => a.priority_rank().cmp(&b.priority_rank()),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Sorted view of the store's tasks plus the completed subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    pub tasks: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl Projection<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Stable sort of `tasks` without touching the source slice
pub fn sort_tasks(tasks: &[Task], sort: SortState) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// Build both derived lists. `completed` keeps the sorted order.
pub fn project(tasks: &[Task], sort: SortState) -> Projection<'_> {
    let sorted = sort_tasks(tasks, sort);
    let completed = sorted.iter().copied().filter(|t| t.completed).collect();
    Projection {
        tasks: sorted,
        completed,
    }
}

/// Parse a due date into milliseconds since the Unix epoch.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339, and `YYYY-MM-DDTHH:MM[:SS]`
/// without an offset (read as UTC). Anything else, including the empty
/// string, is invalid.
pub fn parse_due_date(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Invalid dates are equal to each other and come after every valid date
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_due_date(a), parse_due_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

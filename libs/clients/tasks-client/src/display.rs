//! Orderings used when showing tasks to a person.
//!
//! Both sorts are stable and fall back to `id`, so equal keys keep
//! creation order.

use domain_tasks::Task;
use std::cmp::Ordering;

/// `TODO`, then `IN_PROGRESS`, then `DONE`
pub fn sort_by_status(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then(a.id.cmp(&b.id))
    });
}

/// Earliest due date first; tasks without one go last
pub fn sort_by_due_date(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        let by_date = match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_date.then(a.id.cmp(&b.id))
    });
}

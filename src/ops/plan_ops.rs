//! Mutations on the plan. Every operation leaves the task invariants
//! (`duration >= 1`, `start + duration <= DAYS_TOTAL`) and the selection
//! valid; out-of-range requests are clamped, never rejected.

use crate::model::plan::Plan;
use crate::model::task::{DAYS_TOTAL, Task, TaskColor};

/// Append a new task at the default position and select it.
/// A blank name defaults to `Task N` where N counts the new task.
/// Returns the new task's index.
pub fn add_task(plan: &mut Plan, name: &str, color: TaskColor) -> usize {
    let name = name.trim();
    let name = if name.is_empty() {
        format!("Task {}", plan.len() + 1)
    } else {
        name.to_string()
    };

    plan.push(Task::new(name, color));
    let index = plan.len() - 1;
    plan.select(index as isize);
    index
}

/// Remove the task at `index`, shifting later indices down. The selection
/// is clamped back into range (or cleared when the plan empties).
/// Out-of-range indices are ignored.
pub fn remove_task(plan: &mut Plan, index: usize) -> Option<Task> {
    if index >= plan.len() {
        return None;
    }
    let removed = plan.remove(index);
    plan.clamp_selection();
    Some(removed)
}

/// Rename the task at `index`. A name that trims to empty is discarded and
/// the original name kept. Returns whether the name changed.
pub fn rename_task(plan: &mut Plan, index: usize, new_name: &str) -> bool {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        return false;
    }
    match plan.get_mut(index) {
        Some(task) => {
            task.name = trimmed.to_string();
            true
        }
        None => false,
    }
}

/// Set a task's start day, clamped to `[0, DAYS_TOTAL - duration]`.
pub fn set_start(plan: &mut Plan, index: usize, start: u32) {
    if let Some(task) = plan.get_mut(index) {
        task.start = start.min(DAYS_TOTAL - task.duration);
    }
}

/// Set a task's duration, clamped to `[1, DAYS_TOTAL - start]`.
pub fn set_duration(plan: &mut Plan, index: usize, duration: u32) {
    if let Some(task) = plan.get_mut(index) {
        task.duration = duration.clamp(1, DAYS_TOTAL - task.start);
    }
}

/// Grow or shrink a task's duration by one day (keyboard adjust).
pub fn adjust_duration(plan: &mut Plan, index: usize, delta: i32) {
    if let Some(task) = plan.get(index) {
        let duration = task.duration.saturating_add_signed(delta);
        set_duration(plan, index, duration);
    }
}

/// Bring a loaded task back within the invariants. Used by the store
/// loader, which must accept any blob a previous session (or a hand edit)
/// left behind.
pub fn normalize_task(task: &mut Task) {
    task.duration = task.duration.clamp(1, DAYS_TOTAL);
    task.start = task.start.min(DAYS_TOTAL - task.duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_uses_defaults_and_selects() {
        let mut plan = Plan::default();
        let idx = add_task(&mut plan, "Design", TaskColor::Blue);
        assert_eq!(idx, 0);
        let task = plan.get(0).unwrap();
        assert_eq!(task.name, "Design");
        assert_eq!(task.start, 1);
        assert_eq!(task.duration, 5);
        assert_eq!(task.color, TaskColor::Blue);
        assert_eq!(plan.selected(), Some(0));
    }

    #[test]
    fn add_blank_name_is_numbered() {
        let mut plan = Plan::default();
        add_task(&mut plan, "first", TaskColor::Green);
        add_task(&mut plan, "   ", TaskColor::Green);
        assert_eq!(plan.get(1).unwrap().name, "Task 2");
    }

    #[test]
    fn remove_shifts_and_preserves_order() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        add_task(&mut plan, "b", TaskColor::Green);
        add_task(&mut plan, "c", TaskColor::Green);
        let removed = remove_task(&mut plan, 1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get(0).unwrap().name, "a");
        assert_eq!(plan.get(1).unwrap().name, "c");
    }

    #[test]
    fn remove_clamps_selection() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        add_task(&mut plan, "b", TaskColor::Green);
        // add selects the last task (index 1)
        remove_task(&mut plan, 1);
        assert_eq!(plan.selected(), Some(0));
    }

    #[test]
    fn remove_last_clears_selection() {
        let mut plan = Plan::default();
        add_task(&mut plan, "only", TaskColor::Green);
        remove_task(&mut plan, 0);
        assert!(plan.is_empty());
        assert_eq!(plan.selected(), None);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        assert!(remove_task(&mut plan, 5).is_none());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn rename_trims_and_commits() {
        let mut plan = Plan::default();
        add_task(&mut plan, "old", TaskColor::Green);
        assert!(rename_task(&mut plan, 0, "  Foo  "));
        assert_eq!(plan.get(0).unwrap().name, "Foo");
    }

    #[test]
    fn rename_whitespace_only_is_discarded() {
        let mut plan = Plan::default();
        add_task(&mut plan, "keep", TaskColor::Green);
        assert!(!rename_task(&mut plan, 0, "   "));
        assert_eq!(plan.get(0).unwrap().name, "keep");
    }

    #[test]
    fn set_start_clamps_to_horizon() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        set_start(&mut plan, 0, DAYS_TOTAL + 100);
        let task = plan.get(0).unwrap();
        assert_eq!(task.start, DAYS_TOTAL - task.duration);
        assert!(task.end() <= DAYS_TOTAL);
    }

    #[test]
    fn set_duration_clamps_both_ends() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        set_duration(&mut plan, 0, 0);
        assert_eq!(plan.get(0).unwrap().duration, 1);
        set_duration(&mut plan, 0, DAYS_TOTAL * 2);
        let task = plan.get(0).unwrap();
        assert_eq!(task.duration, DAYS_TOTAL - task.start);
    }

    #[test]
    fn adjust_duration_at_floor_stays_one() {
        let mut plan = Plan::default();
        add_task(&mut plan, "a", TaskColor::Green);
        set_duration(&mut plan, 0, 1);
        adjust_duration(&mut plan, 0, -1);
        assert_eq!(plan.get(0).unwrap().duration, 1);
        adjust_duration(&mut plan, 0, 1);
        assert_eq!(plan.get(0).unwrap().duration, 2);
    }

    #[test]
    fn normalize_repairs_out_of_range_blob_values() {
        let mut task = Task {
            name: "x".into(),
            start: DAYS_TOTAL + 50,
            duration: 0,
            color: TaskColor::Green,
        };
        normalize_task(&mut task);
        assert_eq!(task.duration, 1);
        assert_eq!(task.start, DAYS_TOTAL - 1);
    }
}

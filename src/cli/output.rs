use serde::Serialize;

use crate::model::task::{Task, TaskColor};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    /// 1-based plan position.
    pub index: usize,
    pub name: String,
    /// 1-based start day, as shown on the ruler.
    pub day: u32,
    pub duration: u32,
    pub color: TaskColor,
}

#[derive(Serialize)]
pub struct PlanJson {
    pub tasks: Vec<TaskJson>,
}

pub fn task_to_json(index: usize, task: &Task) -> TaskJson {
    TaskJson {
        index: index + 1,
        name: task.name.clone(),
        day: task.start + 1,
        duration: task.duration,
        color: task.color,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One list row: `  3. Ship it          day 5   10d  blue`
pub fn format_task_line(index: usize, task: &Task) -> String {
    format!(
        "{:>3}. {:<28} day {:<5} {:>4}d  {}",
        index + 1,
        task.name,
        task.start + 1,
        task.duration,
        task.color.name()
    )
}

pub fn print_task_list(tasks: &[Task], json: bool) {
    if json {
        let plan = PlanJson {
            tasks: tasks
                .iter()
                .enumerate()
                .map(|(i, t)| task_to_json(i, t))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&plan).unwrap_or_default());
        return;
    }
    if tasks.is_empty() {
        println!("no tasks");
        return;
    }
    for (i, task) in tasks.iter().enumerate() {
        println!("{}", format_task_line(i, task));
    }
}

pub fn print_task(index: usize, task: &Task, json: bool) {
    if json {
        let out = task_to_json(index, task);
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", format_task_line(index, task));
    }
}

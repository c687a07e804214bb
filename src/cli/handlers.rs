use thiserror::Error;

use crate::cli::commands::*;
use crate::cli::output;
use crate::io::store::{DEFAULT_STORE_FILE, Store, StoreError};
use crate::model::plan::Plan;
use crate::model::task::TaskColor;
use crate::ops::plan_ops;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no task at position {index} (plan has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("unknown color '{0}' (expected green, blue, red, orange, purple or teal)")]
    BadColor(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store = Store::new(cli.file.as_deref().unwrap_or(DEFAULT_STORE_FILE));

    match cli.command {
        None => {
            // No subcommand launches the TUI; main.rs handles that path.
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&store, json),
            Commands::Add(args) => Ok(cmd_add(&store, args, json)?),
            Commands::Remove(args) => Ok(cmd_remove(&store, args, json)?),
            Commands::Rename(args) => Ok(cmd_rename(&store, args, json)?),
            Commands::Move(args) => Ok(cmd_move(&store, args, json)?),
            Commands::Resize(args) => Ok(cmd_resize(&store, args, json)?),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a 1-based CLI position against the plan.
fn resolve_index(plan: &Plan, index: usize) -> Result<usize, CliError> {
    if index == 0 || index > plan.len() {
        return Err(CliError::OutOfRange {
            index,
            len: plan.len(),
        });
    }
    Ok(index - 1)
}

fn parse_color(name: &str) -> Result<TaskColor, CliError> {
    TaskColor::from_name(name).ok_or_else(|| CliError::BadColor(name.to_string()))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = store.load();
    output::print_task_list(&tasks, json);
    Ok(())
}

fn cmd_add(store: &Store, args: AddArgs, json: bool) -> Result<(), CliError> {
    let mut plan = Plan::new(store.load());
    let color = match args.color.as_deref() {
        Some(name) => parse_color(name)?,
        None => TaskColor::default(),
    };
    let index = plan_ops::add_task(&mut plan, args.name.as_deref().unwrap_or(""), color);
    if let Some(start) = args.start {
        plan_ops::set_start(&mut plan, index, start.saturating_sub(1));
    }
    if let Some(duration) = args.duration {
        plan_ops::set_duration(&mut plan, index, duration);
    }
    store.save(plan.tasks())?;
    if let Some(task) = plan.get(index) {
        output::print_task(index, task, json);
    }
    Ok(())
}

fn cmd_remove(store: &Store, args: RemoveArgs, json: bool) -> Result<(), CliError> {
    let mut plan = Plan::new(store.load());
    let index = resolve_index(&plan, args.index)?;
    let removed = plan_ops::remove_task(&mut plan, index);
    store.save(plan.tasks())?;
    if let Some(task) = removed {
        if json {
            output::print_task(index, &task, true);
        } else {
            println!("removed {}", task.name);
        }
    }
    Ok(())
}

fn cmd_rename(store: &Store, args: RenameArgs, json: bool) -> Result<(), CliError> {
    let mut plan = Plan::new(store.load());
    let index = resolve_index(&plan, args.index)?;
    plan_ops::rename_task(&mut plan, index, &args.name);
    store.save(plan.tasks())?;
    if let Some(task) = plan.get(index) {
        output::print_task(index, task, json);
    }
    Ok(())
}

fn cmd_move(store: &Store, args: MoveArgs, json: bool) -> Result<(), CliError> {
    let mut plan = Plan::new(store.load());
    let index = resolve_index(&plan, args.index)?;
    plan_ops::set_start(&mut plan, index, args.start.saturating_sub(1));
    store.save(plan.tasks())?;
    if let Some(task) = plan.get(index) {
        output::print_task(index, task, json);
    }
    Ok(())
}

fn cmd_resize(store: &Store, args: ResizeArgs, json: bool) -> Result<(), CliError> {
    let mut plan = Plan::new(store.load());
    let index = resolve_index(&plan, args.index)?;
    plan_ops::set_duration(&mut plan, index, args.duration);
    store.save(plan.tasks())?;
    if let Some(task) = plan.get(index) {
        output::print_task(index, task, json);
    }
    Ok(())
}

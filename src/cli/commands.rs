use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pln", about = concat!("[#] planner v", env!("CARGO_PKG_VERSION"), " - gantt charts in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Plan file to operate on (default: tasks.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in plan order
    List,
    /// Add a task to the end of the plan
    Add(AddArgs),
    /// Remove a task by position
    Remove(RemoveArgs),
    /// Rename a task
    Rename(RenameArgs),
    /// Move a task to a new start day
    Move(MoveArgs),
    /// Change a task's duration
    Resize(ResizeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name (default: "Task N")
    pub name: Option<String>,
    /// Start day, 1-based (default: day 2)
    #[arg(long)]
    pub start: Option<u32>,
    /// Duration in days (default: 5)
    #[arg(long)]
    pub duration: Option<u32>,
    /// Bar color: green, blue, red, orange, purple, teal
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Task position, 1-based
    pub index: usize,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Task position, 1-based
    pub index: usize,
    /// New name
    pub name: String,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Task position, 1-based
    pub index: usize,
    /// New start day, 1-based
    pub start: u32,
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Task position, 1-based
    pub index: usize,
    /// New duration in days (minimum 1)
    pub duration: u32,
}

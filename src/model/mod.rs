pub mod config;
pub mod plan;
pub mod task;

pub use config::{PlannerConfig, UiConfig};
pub use plan::Plan;
pub use task::{DAYS_TOTAL, DEFAULT_DURATION, DEFAULT_START, Task, TaskColor};

use std::fs;
use std::path::Path;

use crate::model::config::PlannerConfig;

/// File name looked up next to the task blob.
pub const CONFIG_FILE: &str = "planner.toml";

/// Read planner.toml from `dir`. Config is entirely optional: a missing or
/// malformed file yields the defaults rather than an error.
pub fn read_config(dir: &Path) -> PlannerConfig {
    let path = dir.join(CONFIG_FILE);
    let Ok(text) = fs::read_to_string(&path) else {
        return PlannerConfig::default();
    };
    toml::from_str(&text).unwrap_or_default()
}

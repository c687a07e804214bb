use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from planner.toml (all optional; absent file means defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminal cells per day on the chart and ruler.
    #[serde(default = "default_day_width")]
    pub day_width: u16,
    /// Initial width of the task-name panel, in cells.
    #[serde(default = "default_list_width")]
    pub list_width: u16,
    /// Theme color overrides, hex strings keyed by theme field name.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Palette swatch overrides, hex strings keyed by swatch name.
    #[serde(default)]
    pub palette: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            day_width: default_day_width(),
            list_width: default_list_width(),
            colors: HashMap::new(),
            palette: HashMap::new(),
        }
    }
}

fn default_day_width() -> u16 {
    4
}

fn default_list_width() -> u16 {
    24
}

impl UiConfig {
    /// Day width with the zero case normalized away (a 0-cell day would
    /// divide by zero in every drag computation).
    pub fn day_width(&self) -> u16 {
        self.day_width.max(1)
    }
}

use serde::{Deserialize, Serialize};

/// Fixed planning horizon: the highest day index any task may occupy.
pub const DAYS_TOTAL: u32 = 666;

/// Start day assigned to newly created tasks.
pub const DEFAULT_START: u32 = 1;

/// Duration (in days) assigned to newly created tasks.
pub const DEFAULT_DURATION: u32 = 5;

/// Bar color, one of a fixed palette of swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    #[default]
    Green,
    Blue,
    Red,
    Orange,
    Purple,
    Teal,
}

impl TaskColor {
    /// All swatches, in palette display order.
    pub const ALL: [TaskColor; 6] = [
        TaskColor::Green,
        TaskColor::Blue,
        TaskColor::Red,
        TaskColor::Orange,
        TaskColor::Purple,
        TaskColor::Teal,
    ];

    /// The name stored in the persisted blob.
    pub fn name(self) -> &'static str {
        match self {
            TaskColor::Green => "green",
            TaskColor::Blue => "blue",
            TaskColor::Red => "red",
            TaskColor::Orange => "orange",
            TaskColor::Purple => "purple",
            TaskColor::Teal => "teal",
        }
    }

    /// Parse a stored color name. Unknown names map to `None`; callers
    /// default them (older blobs may predate the palette).
    pub fn from_name(name: &str) -> Option<TaskColor> {
        match name {
            "green" => Some(TaskColor::Green),
            "blue" => Some(TaskColor::Blue),
            "red" => Some(TaskColor::Red),
            "orange" => Some(TaskColor::Orange),
            "purple" => Some(TaskColor::Purple),
            "teal" => Some(TaskColor::Teal),
            _ => None,
        }
    }

    /// Index of this swatch in `ALL`.
    pub fn palette_index(self) -> usize {
        TaskColor::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// A single bar on the chart: the only persisted entity.
///
/// Invariants (enforced by `ops::plan_ops`, normalized on load):
/// `start >= 0` (by type), `duration >= 1`, `start + duration <= DAYS_TOTAL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub start: u32,
    pub duration: u32,
    #[serde(default)]
    pub color: TaskColor,
}

impl Task {
    /// Create a task at the default position.
    pub fn new(name: String, color: TaskColor) -> Self {
        Task {
            name,
            start: DEFAULT_START,
            duration: DEFAULT_DURATION,
            color,
        }
    }

    /// Last day index this task occupies (exclusive).
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_default_position() {
        let t = Task::new("Design".into(), TaskColor::Blue);
        assert_eq!(t.start, 1);
        assert_eq!(t.duration, 5);
        assert_eq!(t.end(), 6);
    }

    #[test]
    fn color_name_round_trip() {
        for color in TaskColor::ALL {
            assert_eq!(TaskColor::from_name(color.name()), Some(color));
        }
        assert_eq!(TaskColor::from_name("chartreuse"), None);
    }

    #[test]
    fn palette_index_matches_all_order() {
        for (i, color) in TaskColor::ALL.iter().enumerate() {
            assert_eq!(color.palette_index(), i);
        }
    }

    #[test]
    fn serde_color_defaults_to_green() {
        let t: Task = serde_json::from_str(r#"{"name":"a","start":1,"duration":5}"#).unwrap();
        assert_eq!(t.color, TaskColor::Green);
    }

    #[test]
    fn serde_color_is_lowercase_name() {
        let t = Task::new("a".into(), TaskColor::Purple);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains(r#""color":"purple""#));
    }
}

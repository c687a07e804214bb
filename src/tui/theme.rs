use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::TaskColor;

/// Parsed color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub ruler: Color,
    pub menu_bg: Color,
    /// Bar colors, indexed by `TaskColor::palette_index`.
    pub palette: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            ruler: Color::Rgb(0x7D, 0x78, 0xBF),
            menu_bg: Color::Rgb(0x1E, 0x10, 0x33),
            palette: [
                Color::Rgb(0x44, 0xFF, 0x88), // green
                Color::Rgb(0x44, 0x88, 0xFF), // blue
                Color::Rgb(0xFF, 0x44, 0x44), // red
                Color::Rgb(0xFF, 0x99, 0x44), // orange
                Color::Rgb(0xCC, 0x66, 0xFF), // purple
                Color::Rgb(0x40, 0xE0, 0xD0), // teal
            ],
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "selection_bg" => theme.selection_bg = color,
                    "ruler" => theme.ruler = color,
                    "menu_bg" => theme.menu_bg = color,
                    _ => {}
                }
            }
        }

        for (name, value) in &ui.palette {
            if let (Some(swatch), Some(color)) =
                (TaskColor::from_name(name), parse_hex_color(value))
            {
                theme.palette[swatch.palette_index()] = color;
            }
        }

        theme
    }

    /// Bar color for a swatch.
    pub fn swatch_color(&self, color: TaskColor) -> Color {
        self.palette[color.palette_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::UiConfig;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.palette.insert("green".into(), "#112233".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(
            theme.swatch_color(TaskColor::Green),
            Color::Rgb(0x11, 0x22, 0x33)
        );
        // Unchanged defaults still present
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
        assert_eq!(
            theme.swatch_color(TaskColor::Blue),
            Color::Rgb(0x44, 0x88, 0xFF)
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut ui = UiConfig::default();
        ui.colors.insert("nonsense".into(), "#112233".into());
        ui.palette.insert("mauve".into(), "#112233".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Theme::default().background);
    }
}

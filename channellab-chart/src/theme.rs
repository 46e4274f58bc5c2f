//! Dark chart theme
//!
//! # Color Palette
//! - **Background**: Near-black (base layer)
//! - **Line**: Green (cumulative return curve)
//! - **Accent**: Electric cyan (border, title)
//! - **Negative**: Hot pink (curve ending below zero)
//! - **Grid**: Steel blue (axes, zero baseline)

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub line: Color,
    pub accent: Color,
    pub negative: Color,
    pub grid: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            line: Color::Green,
            accent: Color::Rgb(0, 255, 255),
            negative: Color::Rgb(255, 20, 147),
            grid: Color::Rgb(100, 149, 237),
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Border color for a curve ending at `final_value`.
    pub fn outcome_color(&self, final_value: f64) -> Color {
        if final_value >= 0.0 {
            self.accent
        } else {
            self.negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.line, Color::Green);
    }

    #[test]
    fn test_outcome_color() {
        let theme = Theme::default();
        assert_eq!(theme.outcome_color(0.5), theme.accent);
        assert_eq!(theme.outcome_color(-0.1), theme.negative);
    }
}

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Accent used for the active route, filter and focused field
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,
    pub overlay: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub disabled: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::atelier()
    }
}

impl Theme {
    /// Return the theme with the given name, falling back to the default.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "noir" => Theme::noir(),
            "atelier" => Theme::atelier(),
            other => {
                log::warn!("Unknown theme '{}', using 'atelier'.", other);
                Theme::atelier()
            }
        }
    }

    /// Warm neutral paper with an amber accent.
    ///
    pub fn atelier() -> Self {
        Theme {
            name: "atelier".to_string(),
            primary: rgb(180, 83, 9),
            banner: rgb(23, 23, 23),
            text: rgb(10, 10, 10),
            text_muted: rgb(115, 115, 115),
            background: rgb(250, 250, 250),
            surface: rgb(245, 245, 244),
            overlay: rgb(23, 23, 23),
            success: rgb(180, 83, 9),
            error: rgb(239, 68, 68),
            border_active: rgb(180, 83, 9),
            border_normal: rgb(212, 212, 212),
            disabled: rgb(163, 163, 163),
        }
    }

    /// Footer palette: black ground, light type.
    ///
    pub fn noir() -> Self {
        Theme {
            name: "noir".to_string(),
            primary: rgb(217, 119, 6),
            banner: rgb(250, 250, 250),
            text: rgb(250, 250, 250),
            text_muted: rgb(163, 163, 163),
            background: rgb(0, 0, 0),
            surface: rgb(23, 23, 23),
            overlay: rgb(38, 38, 38),
            success: rgb(217, 119, 6),
            error: rgb(248, 113, 113),
            border_active: rgb(217, 119, 6),
            border_normal: rgb(64, 64, 64),
            disabled: rgb(82, 82, 82),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_falls_back_to_atelier() {
        assert_eq!(Theme::by_name("noir").name, "noir");
        assert_eq!(Theme::by_name("tokyo-night").name, "atelier");
        assert_eq!(Theme::default().name, "atelier");
    }

    #[test]
    fn color_spec_to_rgb() {
        assert_eq!(rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}

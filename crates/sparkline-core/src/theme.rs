// File: crates/sparkline-core/src/theme.rs
// Summary: Light/Dark theming keyed by layer style class ("gridlines", "main line", ...).

use skia_safe as skia;

use crate::scene::StyleClass;

/// Stroke treatment for one style class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self { Self { color, width } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub gridlines: Stroke,
    pub main_line: Stroke,
    pub tick_label: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            gridlines: Stroke::new(skia::Color::from_argb(255, 40, 40, 45), 1.0),
            main_line: Stroke::new(skia::Color::from_argb(255, 64, 160, 255), 1.5),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            gridlines: Stroke::new(skia::Color::from_argb(255, 230, 230, 235), 1.0),
            main_line: Stroke::new(skia::Color::from_argb(255, 32, 120, 200), 1.5),
            tick_label: skia::Color::from_argb(255, 100, 100, 110),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            gridlines: Stroke::new(skia::Color::from_argb(255, 0x44, 0x44, 0x44), 1.0),
            main_line: Stroke::new(skia::Color::from_argb(255, 0x00, 0xff, 0xff), 2.0),
            tick_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }

    /// Stroke for a line/path class. Unknown classes fall back to the main line.
    pub fn stroke_for(&self, class: StyleClass) -> Stroke {
        if class == StyleClass::GRIDLINES { self.gridlines } else { self.main_line }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

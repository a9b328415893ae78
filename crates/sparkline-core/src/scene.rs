// File: crates/sparkline-core/src/scene.rs
// Summary: Flat display list produced by a composed chart for one data set.

use crate::curve::PathCmd;
use crate::geometry::Point;

/// Stable style identifier attached to everything a layer draws. Surfaces and
/// themes key their visual treatment on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleClass(pub &'static str);

impl StyleClass {
    pub const GRIDLINES: StyleClass = StyleClass("gridlines");
    pub const MAIN_LINE: StyleClass = StyleClass("main line");
    pub const TICK_LABEL: StyleClass = StyleClass("tick label");

    pub fn as_str(&self) -> &'static str { self.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Path(Vec<PathCmd>),
    /// `at` is the anchor: horizontally centered, baseline at `at.y`.
    Text { text: String, at: Point, size: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneItem {
    pub class: StyleClass,
    pub shape: Shape,
}

/// Items in draw order: earlier items sit underneath later ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, items: Vec::new() }
    }

    pub fn push(&mut self, class: StyleClass, shape: Shape) {
        self.items.push(SceneItem { class, shape });
    }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn items_with(&self, class: StyleClass) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(move |i| i.class == class)
    }

    /// Index of the first item carrying `class`.
    pub fn first_index_of(&self, class: StyleClass) -> Option<usize> {
        self.items.iter().position(|i| i.class == class)
    }
}

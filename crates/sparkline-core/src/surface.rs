// File: crates/sparkline-core/src/surface.rs
// Summary: Drawing surface seam (the externally owned container) and an in-memory recorder.

use crate::error::Result;
use crate::scene::Scene;

/// A mountable drawing target owned by the caller.
///
/// `present` replaces whatever the surface showed before; it never appends.
/// `clear` leaves the surface blank.
pub trait DrawingSurface {
    /// (width, height) in pixels.
    fn size(&self) -> (i32, i32);
    fn clear(&mut self) -> Result<()>;
    fn present(&mut self, scene: &Scene) -> Result<()>;
}

/// Keeps the last presented scene. Useful headless and in tests.
#[derive(Clone, Debug)]
pub struct SceneRecorder {
    width: i32,
    height: i32,
    current: Option<Scene>,
    presents: usize,
}

impl SceneRecorder {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, current: None, presents: 0 }
    }

    /// What is currently visible; `None` when blank.
    pub fn current(&self) -> Option<&Scene> { self.current.as_ref() }

    /// Number of `present` calls so far.
    pub fn presents(&self) -> usize { self.presents }
}

impl DrawingSurface for SceneRecorder {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self) -> Result<()> {
        self.current = None;
        Ok(())
    }

    fn present(&mut self, scene: &Scene) -> Result<()> {
        self.current = Some(scene.clone());
        self.presents += 1;
        Ok(())
    }
}

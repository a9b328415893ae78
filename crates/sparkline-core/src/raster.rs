// File: crates/sparkline-core/src/raster.rs
// Summary: Skia CPU raster surface; presents scenes with theme strokes, exports PNG/RGBA8.

use std::path::Path;

use skia_safe as skia;

use crate::curve::PathCmd;
use crate::error::{Result, SparklineError};
use crate::scene::{Scene, Shape, StyleClass};
use crate::surface::DrawingSurface;
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RasterSurface {
    surface: skia::Surface,
    theme: Theme,
    text: TextShaper,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32, theme: Theme) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| SparklineError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        let mut s = Self { surface, theme, text: TextShaper::new() };
        s.clear()?;
        Ok(s)
    }

    pub fn theme(&self) -> &Theme { &self.theme }

    /// Encode the current contents as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SparklineError::Surface("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: (buffer, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(SparklineError::Surface("read_pixels failed".into()));
        }
        Ok((px, w, h, stride))
    }

    fn stroke_paint(&self, class: StyleClass) -> skia::Paint {
        let stroke = self.theme.stroke_for(class);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(stroke.color);
        paint
    }
}

fn to_skia_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathCmd::CubicTo(c1, c2, p) => { path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (p.x, p.y)); }
        }
    }
    path
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    fn clear(&mut self) -> Result<()> {
        let bg = self.theme.background;
        self.surface.canvas().clear(bg);
        Ok(())
    }

    fn present(&mut self, scene: &Scene) -> Result<()> {
        let bg = self.theme.background;
        let label_color = self.theme.tick_label;
        let paints: Vec<Option<skia::Paint>> = scene
            .items
            .iter()
            .map(|item| match item.shape {
                Shape::Text { .. } => None,
                _ => Some(self.stroke_paint(item.class)),
            })
            .collect();

        let canvas = self.surface.canvas();
        canvas.clear(bg);
        for (item, paint) in scene.items.iter().zip(&paints) {
            match (&item.shape, paint) {
                (Shape::Line { from, to }, Some(paint)) => {
                    canvas.draw_line((from.x, from.y), (to.x, to.y), paint);
                }
                (Shape::Path(cmds), Some(paint)) => {
                    canvas.draw_path(&to_skia_path(cmds), paint);
                }
                (Shape::Text { text, at, size }, _) => {
                    self.text.draw_centered(canvas, text, at.x, at.y, *size, label_color);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

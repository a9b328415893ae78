// File: crates/sparkline-core/src/svg.rs
// Summary: SVG surface; layers carry their style class so an external stylesheet can theme them.

use std::fmt::{self, Write as _};
use std::path::Path;

use crate::curve::PathCmd;
use crate::error::{Result, SparklineError};
use crate::scene::{Scene, Shape, StyleClass};
use crate::surface::DrawingSurface;

/// Holds the current SVG document. Visual styling is left to CSS targeting
/// `.gridlines`, `.main.line` and `.tick.label`.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: i32,
    height: i32,
    document: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        let mut s = Self { width, height, document: String::new() };
        s.document = s.open_tag() + "</svg>\n";
        s
    }

    pub fn as_str(&self) -> &str { &self.document }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.document)?;
        Ok(())
    }

    fn open_tag(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        )
    }
}

fn path_data(d: &mut String, cmds: &[PathCmd]) -> fmt::Result {
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => write!(d, "M{:.2},{:.2}", p.x, p.y)?,
            PathCmd::LineTo(p) => write!(d, "L{:.2},{:.2}", p.x, p.y)?,
            PathCmd::CubicTo(a, b, p) => {
                write!(d, "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}", a.x, a.y, b.x, b.y, p.x, p.y)?
            }
        }
    }
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl DrawingSurface for SvgSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self) -> Result<()> {
        self.document = self.open_tag() + "</svg>\n";
        Ok(())
    }

    fn present(&mut self, scene: &Scene) -> Result<()> {
        let mut doc = self.open_tag();
        write_items(&mut doc, scene).map_err(|e| SparklineError::Surface(format!("svg write: {e}")))?;
        doc.push_str("</svg>\n");
        self.document = doc;
        Ok(())
    }
}

/// Scene items as SVG elements; consecutive lines of one class share a `<g>`.
fn write_items(doc: &mut String, scene: &Scene) -> fmt::Result {
    let mut group: Option<StyleClass> = None;
    for item in &scene.items {
        let wants_group = matches!(item.shape, Shape::Line { .. }).then_some(item.class);
        if group.is_some() && group != wants_group {
            doc.push_str("  </g>\n");
            group = None;
        }
        let class = item.class.as_str();
        match &item.shape {
            Shape::Line { from, to } => {
                if group.is_none() {
                    writeln!(doc, "  <g class=\"{class}\">")?;
                    group = Some(item.class);
                }
                writeln!(
                    doc,
                    "    <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
                    from.x, from.y, to.x, to.y
                )?;
            }
            Shape::Path(cmds) => {
                write!(doc, "  <path class=\"{class}\" fill=\"none\" d=\"")?;
                path_data(doc, cmds)?;
                writeln!(doc, "\"/>")?;
            }
            Shape::Text { text, at, size } => writeln!(
                doc,
                "  <text class=\"{class}\" x=\"{:.2}\" y=\"{:.2}\" font-size=\"{size}\" text-anchor=\"middle\">{}</text>",
                at.x,
                at.y,
                escape(text)
            )?,
        }
    }
    if group.is_some() {
        doc.push_str("  </g>\n");
    }
    Ok(())
}

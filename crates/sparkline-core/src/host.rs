// File: crates/sparkline-core/src/host.rs
// Summary: Render host; owns a mounted surface and runs the full pipeline on each data update.

use log::{debug, info, warn};

use crate::chart::{compose, ChartConfig};
use crate::domain::{compute_time_domain, compute_value_domain, Domain};
use crate::error::{Result, SparklineError};
use crate::geometry::PlotRect;
use crate::point::{validate_points, ChartPoint, DataProvider, NonMonotonicTime};
use crate::scale::bind_scales;
use crate::surface::DrawingSurface;
use crate::types::RenderOptions;

/// What a successful render pass did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// No points; the surface was left blank.
    Empty,
    Drawn {
        value_domain: Domain<f64>,
        gridlines: usize,
        /// Set when timestamps were not chronological. The line was still
        /// drawn in input order.
        out_of_order: Option<NonMonotonicTime>,
    },
}

enum HostState<'s, S: ?Sized> {
    Unmounted,
    Mounted(&'s mut S),
}

/// `Unmounted -> Mounted -> Unmounted`. While mounted the host has exclusive
/// use of the surface; each `render` replaces what the previous one drew.
pub struct RenderHost<'s, S: DrawingSurface + ?Sized> {
    state: HostState<'s, S>,
    options: RenderOptions,
    passes: u64,
}

impl<'s, S: DrawingSurface + ?Sized> RenderHost<'s, S> {
    pub fn new(options: RenderOptions) -> Self {
        Self { state: HostState::Unmounted, options, passes: 0 }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    pub fn is_mounted(&self) -> bool { matches!(self.state, HostState::Mounted(_)) }

    /// Completed render passes since construction.
    pub fn passes(&self) -> u64 { self.passes }

    pub fn mount(&mut self, surface: &'s mut S) -> Result<()> {
        if self.is_mounted() {
            return Err(SparklineError::AlreadyMounted);
        }
        let (w, h) = surface.size();
        info!("sparkline host mounted on {w}x{h} surface");
        self.state = HostState::Mounted(surface);
        Ok(())
    }

    /// Release the surface. Returns it so the owner can read it back.
    pub fn unmount(&mut self) -> Option<&'s mut S> {
        match std::mem::replace(&mut self.state, HostState::Unmounted) {
            HostState::Mounted(surface) => {
                info!("sparkline host unmounted after {} passes", self.passes);
                Some(surface)
            }
            HostState::Unmounted => None,
        }
    }

    pub fn render_from<P: DataProvider + ?Sized>(&mut self, provider: &P) -> Result<RenderOutcome> {
        let points = provider.points();
        self.render(&points)
    }

    /// Run validate -> domains -> scales -> layers -> compose -> present.
    ///
    /// Invalid input blanks the surface and returns the error; nothing
    /// partial is ever shown.
    pub fn render(&mut self, points: &[ChartPoint]) -> Result<RenderOutcome> {
        let opts = self.options;
        let surface = match &mut self.state {
            HostState::Mounted(s) => &mut **s,
            HostState::Unmounted => return Err(SparklineError::NotMounted),
        };

        let out_of_order = match validate_points(points) {
            Ok(w) => w,
            Err(e) => {
                warn!("rejecting sparkline data: {e}");
                surface.clear()?;
                return Err(e);
            }
        };
        if let Some(NonMonotonicTime { index }) = out_of_order {
            warn!("sparkline timestamps go backwards at index {index}; drawing in input order");
        }

        let value_domain = compute_value_domain(points);
        let Some(time_domain) = compute_time_domain(points) else {
            debug!("empty sparkline data; clearing surface");
            surface.clear()?;
            self.passes += 1;
            return Ok(RenderOutcome::Empty);
        };

        let (w, h) = surface.size();
        let plot = PlotRect::inset(w, h, &opts.insets);
        let (x, y) = bind_scales(time_domain, value_domain, plot);
        let chart = compose(ChartConfig::sparkline(x, y, &opts));
        let scene = chart.scene(points, w, h);
        let gridlines = chart.x_ticks().len();
        debug!(
            "sparkline pass: {} points, values [{}, {}], {} gridlines",
            points.len(),
            value_domain.min,
            value_domain.max,
            gridlines
        );

        surface.present(&scene)?;
        self.passes += 1;
        Ok(RenderOutcome::Drawn { value_domain, gridlines, out_of_order })
    }
}

impl<'s, S: DrawingSurface + ?Sized> Default for RenderHost<'s, S> {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

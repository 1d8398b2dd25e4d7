use log::debug;
use rayon::prelude::*;

use fixbrot_core::Viewport;

use crate::escape::{EscapeIterator, EscapeResult};

/// Renders a full pixel grid against a viewport.
///
/// Output is row-major, top-to-bottom, left-to-right, one entry per
/// pixel.
pub trait Renderer {
    type Data;

    fn render(&self, viewport: &Viewport, canvas_size: (u32, u32)) -> Vec<Self::Data>;
}

/// Escape-time renderer over the fixed-point iterator.
///
/// Pixels are independent, so rows are computed in parallel; the collect
/// preserves row-major order, which is all the output contract requires.
pub struct EscapeTimeRenderer {
    iterator: EscapeIterator,
}

impl EscapeTimeRenderer {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            iterator: EscapeIterator::new(max_iterations),
        }
    }
}

impl Renderer for EscapeTimeRenderer {
    type Data = EscapeResult;

    fn render(&self, viewport: &Viewport, canvas_size: (u32, u32)) -> Vec<EscapeResult> {
        let (width, height) = canvas_size;
        let viewport = *viewport;
        debug!("rendering {}x{} grid at scale {}", width, height, viewport.scale);

        (0..height)
            .into_par_iter()
            .flat_map_iter(move |py| {
                (0..width).map(move |px| self.iterator.iterate(viewport.plane_coordinate(px, py)))
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;
use crate::plane::PlaneCoordinate;

/// Viewport into the complex plane.
///
/// `offset` is the plane coordinate of pixel (0, 0); `scale` is the plane
/// distance between adjacent pixels, both in Q14 fixed point. The mapping
/// is affine per component: `c = scale * pixel + offset`. The imaginary
/// axis grows downward with the pixel row, matching the raster's
/// top-to-bottom row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: Fixed,
    pub offset: PlaneCoordinate,
}

impl Viewport {
    pub fn new(scale: Fixed, offset: PlaneCoordinate) -> Self {
        Self { scale, offset }
    }

    /// Plane coordinate of pixel `(px, py)` (column, row).
    ///
    /// Callers must keep `scale * pixel + offset` within the documented
    /// viewport range; the supported presets stay well below `2^16` in
    /// magnitude.
    pub fn plane_coordinate(&self, px: u32, py: u32) -> PlaneCoordinate {
        PlaneCoordinate {
            re: self.scale * Fixed::from(px) + self.offset.re,
            im: self.scale * Fixed::from(py) + self.offset.im,
        }
    }
}

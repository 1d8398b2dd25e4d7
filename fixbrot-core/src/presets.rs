use crate::fixed::Fixed;
use crate::plane::PlaneCoordinate;
use crate::viewport::Viewport;

/// Width of every output raster, in pixels.
pub const RASTER_WIDTH: u32 = 400;
/// Height of every output raster, in pixels.
pub const RASTER_HEIGHT: u32 = 300;

// Plane coordinate of pixel (0, 0), shared by all presets. The anchor is
// a pair of signed 16-bit constants nudged by a fixed translation; the
// resulting window must be reproduced exactly for visual fidelity.
const ANCHOR_RE: i16 = 0xF3CAu16 as i16;
const ANCHOR_IM: i16 = 0xBC40u16 as i16;
const NUDGE_RE: Fixed = 250;
const NUDGE_IM: Fixed = 200;

/// Viewport origin offset in Q14 units: (-2876, -17144).
pub fn viewport_offset() -> PlaneCoordinate {
    PlaneCoordinate::new(
        Fixed::from(ANCHOR_RE) + NUDGE_RE,
        Fixed::from(ANCHOR_IM) + NUDGE_IM,
    )
}

/// One reference rendering: output name plus the three knobs that vary
/// between outputs. `divisor == 0` selects the logarithmic intensity
/// policy.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub filename: &'static str,
    pub scale: Fixed,
    pub max_iterations: u32,
    pub divisor: u32,
}

impl Preset {
    /// Viewport for this preset: its scale over the shared offset.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scale, viewport_offset())
    }
}

/// The four reference renderings, in output order.
pub static PRESETS: &[Preset] = &[
    Preset {
        filename: "image1.ppm",
        scale: 1,
        max_iterations: 64,
        divisor: 4,
    },
    Preset {
        filename: "image2.ppm",
        scale: 128,
        max_iterations: 64,
        divisor: 4,
    },
    Preset {
        filename: "image3.ppm",
        scale: 128,
        max_iterations: 65536,
        divisor: 4096,
    },
    Preset {
        filename: "image4.ppm",
        scale: 128,
        max_iterations: 65536,
        divisor: 0,
    },
];

pub fn get_preset(filename: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.filename == filename)
}

pub mod fixed;
pub mod intensity;
pub mod plane;
pub mod presets;
pub mod viewport;

pub use fixed::{Fixed, CROSS_SHIFT, ESCAPE_THRESHOLD, FRAC_BITS, SQUARE_SHIFT};
pub use intensity::{bit_length, intensity, MAX_SAMPLE};
pub use plane::PlaneCoordinate;
pub use presets::{get_preset, viewport_offset, Preset, PRESETS, RASTER_HEIGHT, RASTER_WIDTH};
pub use viewport::Viewport;

pub mod escape;
pub mod renderer;

pub use escape::{EscapeIterator, EscapeResult, Termination};
pub use renderer::{EscapeTimeRenderer, Renderer};

// Re-export core types for convenience
pub use fixbrot_core::*;

use fixbrot_core::{PlaneCoordinate, CROSS_SHIFT, ESCAPE_THRESHOLD, SQUARE_SHIFT};

/// Why an iteration run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The squared magnitude of the iterate exceeded the escape bound.
    Escaped,
    /// A component of the update reproduced the stored iterate exactly;
    /// the orbit has collapsed under the finite-precision arithmetic.
    Stagnated,
    /// The iteration budget ran out.
    Exhausted,
}

/// Result of iterating a single plane coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeResult {
    /// Iteration count at loop exit. This is the sole input to the
    /// intensity mapper; the termination cause is diagnostic.
    pub iterations: u32,
    pub termination: Termination,
}

/// Escape-time iterator over Q14 fixed-point arithmetic.
///
/// Runs `z <- z² + c` entirely in scaled integers: the squared and cross
/// terms are Q28 products renormalized with `SQUARE_SHIFT` and
/// `CROSS_SHIFT`. Three stopping conditions, tested in this order each
/// step:
///
/// 1. Escape, on the squared magnitude of the iterate *before* the
///    update. Escape is therefore reported one step earlier than a
///    conventional renderer would; the offset is part of the output
///    contract and must not be "fixed".
/// 2. Stagnation, per component: the candidate `zr'` (then `zi'`) is
///    compared against the stored iterate before committing. An exactly
///    repeated component means the orbit can no longer move that
///    component, so the run stops with one extra count instead of
///    spinning to the budget.
/// 3. Budget exhaustion at `max_iterations - 1`.
pub struct EscapeIterator {
    max_iterations: u32,
}

impl EscapeIterator {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Iterate one point. Infallible; see `fixbrot_core::fixed` for the
    /// overflow headroom argument.
    pub fn iterate(&self, c: PlaneCoordinate) -> EscapeResult {
        let mut zr = 0;
        let mut zi = 0;

        let limit = self.max_iterations.saturating_sub(1);
        let mut n = 0;
        while n < limit {
            let m1 = zr * zr;
            let m2 = zi * zi;
            let m3 = zi * zr;

            if ((m1 + m2) >> SQUARE_SHIFT) > ESCAPE_THRESHOLD {
                return EscapeResult {
                    iterations: n,
                    termination: Termination::Escaped,
                };
            }

            let next_zr = ((m1 - m2) >> SQUARE_SHIFT) + c.re;
            let next_zi = (m3 >> CROSS_SHIFT) + c.im;

            if next_zr == zr {
                return EscapeResult {
                    iterations: n + 1,
                    termination: Termination::Stagnated,
                };
            }
            if next_zi == zi {
                return EscapeResult {
                    iterations: n + 1,
                    termination: Termination::Stagnated,
                };
            }

            zr = next_zr;
            zi = next_zi;
            n += 1;
        }

        EscapeResult {
            iterations: n,
            termination: Termination::Exhausted,
        }
    }
}

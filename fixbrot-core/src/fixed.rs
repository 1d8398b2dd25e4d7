/// Scalar type for Q14 fixed-point values.
///
/// Values carry 14 fractional bits, so 1.0 is `1 << 14`. Products of two
/// Q14 values are Q28 and must be renormalized with the shift constants
/// below. i64 leaves enough headroom that the escape-time recurrence
/// cannot overflow for the supported viewports: with `|c| < 2^16` a
/// not-yet-escaped iterate stays within `2^17`, so every product stays
/// below `2^36`.
pub type Fixed = i64;

/// Number of fractional bits in the fixed-point representation.
pub const FRAC_BITS: u32 = 14;

/// Shift renormalizing the Q28 squared terms (`zr² − zi²`, `zr² + zi²`)
/// back to Q14.
pub const SQUARE_SHIFT: u32 = FRAC_BITS;

/// Shift renormalizing the Q28 cross term `zi·zr`. One bit short of
/// `SQUARE_SHIFT` because the doubling of the cross term in
/// `2·zr·zi` is folded into the shift. Changing either shift changes the
/// apparent scale of the rendered set.
pub const CROSS_SHIFT: u32 = FRAC_BITS - 1;

/// Escape bound: 4.0 in Q14, compared against the renormalized squared
/// magnitude of the iterate.
pub const ESCAPE_THRESHOLD: Fixed = 4 << FRAC_BITS;

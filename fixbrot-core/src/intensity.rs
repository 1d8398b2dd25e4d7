/// Maximum sample value of the 4-bit grayscale raster. This is the
/// header maxval of every output, independent of the mapping policy.
pub const MAX_SAMPLE: u8 = 15;

/// Number of significant bits in `n`, with `bit_length(0) == 0`.
///
/// Integer stand-in for `floor(log2(n)) + 1`. `leading_zeros` is defined
/// for zero, so no special case is needed to keep the function total.
pub fn bit_length(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

/// Map an iteration count to a raster sample.
///
/// - `divisor == 0` selects the logarithmic policy: the bit length of
///   `n`. There is no additional clamp; an exhausted count of 65535 maps
///   to 16, one above `MAX_SAMPLE`, and that is the expected output for
///   the deepest preset.
/// - `divisor > 0` selects the linear policy: truncating division,
///   clamped to `MAX_SAMPLE`.
pub fn intensity(iterations: u32, divisor: u32) -> u8 {
    if divisor == 0 {
        bit_length(iterations) as u8
    } else {
        (iterations / divisor).min(u32::from(MAX_SAMPLE)) as u8
    }
}

//! Clamped random draws shared by all generators.

use rand::Rng;

/// Draw a value in `[0, to)`, raised to `from` when the raw draw falls
/// below it.
///
/// Low draws are clamped, not redrawn, which skews the distribution
/// toward `from`. That bias is part of the generator contract and must
/// not be replaced with rejection sampling. A `to` of zero yields zero,
/// so single-entry collections stay drawable.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, to: usize, from: usize) -> usize {
    if to == 0 {
        return 0;
    }
    rng.random_range(0..to).max(from)
}

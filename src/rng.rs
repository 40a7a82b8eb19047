use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::theme::ThemeId;

/// Deterministic RNG factory for a given (seed, theme, round) triple.
///
/// Implementation detail:
/// - Derives a per-deal 64-bit seed from the catalog seed, the theme id and
///   the round counter.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs
///   are equal.
#[inline]
pub fn rng_for_round(seed: u64, theme: ThemeId, round: u64) -> impl Rng {
    let derived: u64 = seed ^ u64::from(theme.0).rotate_left(32) ^ round;
    Pcg64::seed_from_u64(derived)
}

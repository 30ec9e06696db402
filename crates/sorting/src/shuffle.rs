//! Seeded shuffle support.
//!
//! A shuffle is a sort by `shuffle_hash(id, seed)`: the same ids and seed
//! always give the same order, and a fresh seed gives a fresh order. The
//! hash is 32-bit FNV-1a over UTF-16 code units so orders match the ones
//! the web UI produces for the same seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Seeds are drawn from `[0, SEED_RANGE)`
pub const SEED_RANGE: u32 = 1_000_000;

/// Hash of `id` concatenated with the decimal form of `seed`
pub fn shuffle_hash(id: &str, seed: u32) -> u32 {
    fnv1a_utf16(&format!("{id}{seed}"))
}

fn fnv1a_utf16(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Draw a fresh shuffle seed in `[0, SEED_RANGE)`.
///
/// Uses a generator seeded from the OS entropy source when it is available
/// and the thread-local generator otherwise.
pub fn random_seed() -> u32 {
    match StdRng::try_from_os_rng() {
        Ok(mut rng) => draw_seed(&mut rng),
        Err(e) => {
            warn!("OS random source unavailable ({}), using thread rng", e);
            draw_seed(&mut rand::rng())
        }
    }
}

/// Uniform over `[0, SEED_RANGE)`
fn draw_seed<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(0..SEED_RANGE)
}

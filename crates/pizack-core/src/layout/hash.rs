//! Stable hashing and seeded pseudo-randomness for layouts.
//!
//! Both functions are pure so a layout can be recomputed on every read and
//! land on identical coordinates.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of `bytes`.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Map `seed` to a value in `[0, 1)` using the fractional part of a scaled
/// sine.
pub fn unit_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

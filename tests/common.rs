#![warn(unused)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::mem::size_of;

/// Relative tolerance accepted between two execution paths. Accounts for the
/// rounding difference between fused and unfused multiply-add.
pub const TOLERANCE: f32 = 1e-5;

pub fn assert_close(actual: f32, expected: f32) {
    let magnitude = actual.abs().max(expected.abs()).max(1.0);
    let max_error = TOLERANCE * magnitude;
    assert!(
        (actual - expected).abs() <= max_error,
        "{actual} differs from {expected} by more than {max_error}"
    );
}

pub fn assert_all_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (&actual, &expected) in actual.iter().zip(expected) {
        assert_close(actual, expected);
    }
}

pub fn random_lane(rng: &mut StdRng, length: usize) -> Vec<f32> {
    (0..length).map(|_| rng.gen_range(0f32..255f32)).collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Element offset inside `buffer` at which a slice sees a forced alignment
/// shift of exactly one sample for `lane_count`-wide vectors.
pub fn shift_one_offset(buffer: &[f32], lane_count: usize) -> usize {
    let vector_size = lane_count * size_of::<f32>();
    let base = buffer.as_ptr() as usize;
    (0..lane_count)
        .find(|&offset| (base + size_of::<f32>() * (offset + 1)) % vector_size == 0)
        .unwrap()
}

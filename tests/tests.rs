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
#![allow(clippy::cast_possible_truncation)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

use pcp::{describe_acceleration, forced_alignment_shift, half_value, max_value};
use planar_color_primitives as pcp;

#[test]
fn bootstrap() {
    println!("{}", describe_acceleration());
}

#[test]
fn sample_range_derivation() {
    // max_value is 2^precision - 1 and half_value is ceil(max_value / 2),
    // for every supported bit depth.
    for &precision in &[8_u32, 16, 32] {
        let max = max_value(precision);
        let half = half_value(precision);

        let exact_max = (f64::from(precision).exp2() - 1.0) as f32;
        assert_eq!(max.to_bits(), exact_max.to_bits());
        assert_eq!(half.to_bits(), (max * 0.5).ceil().to_bits());
    }

    assert_eq!(max_value(8).to_bits(), 255f32.to_bits());
    assert_eq!(half_value(8).to_bits(), 128f32.to_bits());
    assert_eq!(max_value(16).to_bits(), 65_535f32.to_bits());
    assert_eq!(half_value(16).to_bits(), 32_768f32.to_bits());
    assert_eq!(half_value(32).to_bits(), 2_147_483_648f32.to_bits());
}

#[test]
fn forced_shift_always_advances_to_a_boundary() {
    let buffer = vec![0f32; 64];

    for &lane_count in &[4_usize, 8] {
        let vector_size = lane_count * std::mem::size_of::<f32>();

        for start in 0..lane_count {
            let plane = &buffer[start..];
            let shift = forced_alignment_shift(plane, lane_count);

            // The shift always advances, lands on a vector boundary and
            // never skips more than one full vector.
            assert!(shift >= 1);
            assert!(shift <= lane_count);

            let rounded = plane.as_ptr() as usize + shift * std::mem::size_of::<f32>();
            assert_eq!(rounded % vector_size, 0);
        }
    }
}

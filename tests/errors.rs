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

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

use pcp::{convert_from_rgb_scalar, convert_scanline, Alignment, ComponentView, ErrorKind};
use planar_color_primitives as pcp;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
type ConvertFn = for<'a, 'b> fn(
    &'a mut ComponentView<'b>,
    &'a [f32],
    &'a [f32],
    &'a [f32],
) -> Result<(), ErrorKind>;

fn check_err<T>(result: Result<T, ErrorKind>, err: ErrorKind) {
    match result {
        Ok(_) => panic!("expected {err:?}"),
        Err(error_kind) => assert_eq!(error_kind as u32, err as u32),
    }
}

#[test]
fn view_construction_rejects_malformed_planes() {
    let mut empty: Vec<f32> = Vec::new();
    let mut c0 = vec![0f32; 8];
    let mut c1 = vec![0f32; 8];
    let mut c2 = vec![0f32; 8];
    let mut short = vec![0f32; 7];

    // Plane 0 is mandatory and non-empty
    check_err(
        ComponentView::grayscale(&mut empty),
        ErrorKind::InvalidValue,
    );

    // Unequal plane lengths
    check_err(
        ComponentView::ycbcr(&mut c0, &mut c1, &mut short),
        ErrorKind::InvalidValue,
    );

    // A plane without its predecessor
    check_err(
        ComponentView::new(&mut c0, None, Some(&mut c2), None),
        ErrorKind::InvalidValue,
    );
    check_err(
        ComponentView::new(&mut c0, Some(&mut c1), None, Some(&mut c2)),
        ErrorKind::InvalidValue,
    );
}

#[test]
fn slice_rejects_out_of_range_requests() {
    let mut luma = vec![0f32; 8];
    let mut view = ComponentView::grayscale(&mut luma).unwrap();

    check_err(view.slice(0, 9), ErrorKind::InvalidValue);
    check_err(view.slice(8, 1), ErrorKind::InvalidValue);
    check_err(view.slice(9, 0), ErrorKind::InvalidValue);
    check_err(view.slice(1, usize::MAX), ErrorKind::InvalidValue);

    assert!(view.slice(0, 8).is_ok());
    assert!(view.slice(8, 0).is_ok());
}

#[test]
fn short_lanes_are_rejected() {
    let r = vec![0f32; 7];
    let g = vec![0f32; 8];
    let b = vec![0f32; 8];

    let mut luma = vec![0f32; 8];
    let mut view = ComponentView::grayscale(&mut luma).unwrap();

    check_err(
        convert_from_rgb_scalar(&mut view, &r, &g, &b),
        ErrorKind::NotEnoughData,
    );
    check_err(
        convert_scanline(&mut view, &r, &g, &b, Alignment::Natural),
        ErrorKind::NotEnoughData,
    );
    check_err(
        convert_scanline(&mut view, &r, &g, &b, Alignment::Forced),
        ErrorKind::NotEnoughData,
    );

    // The luma plane is untouched on failure
    assert!(luma.iter().all(|&x| x.to_bits() == 0f32.to_bits()));
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[test]
fn forced_paths_require_trailing_padding() {
    // A plane length which is an exact vector multiple can never hold the
    // rounded-up window, whatever its base alignment.
    let paths: [(usize, ConvertFn); 2] = [
        (pcp::SSE2_LANE_COUNT, pcp::convert_from_rgb_sse2_aligned),
        (pcp::AVX2_LANE_COUNT, pcp::convert_from_rgb_avx2_aligned),
    ];

    for &(lanes, forced) in &paths {
        let length = 2 * lanes;
        let r = vec![0f32; length];
        let g = vec![0f32; length];
        let b = vec![0f32; length];

        let mut y = vec![0f32; length];
        let mut cb = vec![0f32; length];
        let mut cr = vec![0f32; length];
        let mut view = ComponentView::ycbcr(&mut y, &mut cb, &mut cr).unwrap();

        match forced(&mut view, &r, &g, &b) {
            // The running cpu does not support this path
            Err(ErrorKind::InvalidOperation) => continue,
            result => check_err(result, ErrorKind::NotEnoughData),
        }
    }
}

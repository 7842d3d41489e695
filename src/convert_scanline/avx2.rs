// Copyright 2019 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

// Permission is hereby granted, free of charge, to any person obtaining a copy of this
// software and associated documentation files (the "Software"), to deal in the Software
// without restriction, including without limitation the rights to use, copy, modify,
// merge, publish, distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED,
// INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT
// HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

#![allow(clippy::wildcard_imports)]
use crate::component_view::ComponentView;
use crate::convert_scanline::common::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Number of f32 lanes processed per vector iteration by the wide path.
pub const LANE_COUNT: usize = 8;

/// Returns `m0 * m1 + acc` with a single rounding.
#[cfg(any(target_feature = "fma", probed_fma))]
#[inline(always)]
unsafe fn multiply_add(acc: __m256, m0: __m256, m1: __m256) -> __m256 {
    _mm256_fmadd_ps(m0, m1, acc)
}

/// Returns `m0 * m1 + acc` with two roundings, for targets without fused
/// multiply-add.
#[cfg(not(any(target_feature = "fma", probed_fma)))]
#[inline(always)]
unsafe fn multiply_add(acc: __m256, m0: __m256, m1: __m256) -> __m256 {
    _mm256_add_ps(_mm256_mul_ps(m0, m1), acc)
}

#[inline(always)]
unsafe fn load<const ALIGNED: bool>(src: *const f32) -> __m256 {
    if ALIGNED {
        _mm256_load_ps(src)
    } else {
        _mm256_loadu_ps(src)
    }
}

#[inline(always)]
unsafe fn store<const ALIGNED: bool>(dst: *mut f32, x: __m256) {
    if ALIGNED {
        _mm256_store_ps(dst, x);
    } else {
        _mm256_storeu_ps(dst, x);
    }
}

/// Convert planar rgb to ycbcr colorspace (8-wide)
#[inline(always)]
unsafe fn rgb_to_ycbcr_8x<const ALIGNED: bool>(
    chunks: usize,
    src_r: *const f32,
    src_g: *const f32,
    src_b: *const f32,
    dst_y: *mut f32,
    dst_cb: *mut f32,
    dst_cr: *mut f32,
) {
    let chroma_offset = _mm256_set1_ps(half_value(PRECISION));

    let xr = _mm256_set1_ps(XR);
    let xg = _mm256_set1_ps(XG);
    let xb = _mm256_set1_ps(XB);
    let yr = _mm256_set1_ps(YR);
    let yg = _mm256_set1_ps(YG);
    let yb = _mm256_set1_ps(YB);
    let zr = _mm256_set1_ps(ZR);
    let zg = _mm256_set1_ps(ZG);
    let zb = _mm256_set1_ps(ZB);

    for i in 0..chunks {
        let offset = i * LANE_COUNT;
        let r = load::<ALIGNED>(src_r.add(offset));
        let g = load::<ALIGNED>(src_g.add(offset));
        let b = load::<ALIGNED>(src_b.add(offset));

        // y  =   0 + (0.299 * r) + (0.587 * g) + (0.114 * b)
        // cb = HALF - (0.168736 * r) - (0.331264 * g) + (0.5 * b)
        // cr = HALF + (0.5 * r) - (0.418688 * g) - (0.081312 * b)
        let y = multiply_add(multiply_add(_mm256_mul_ps(xb, b), xg, g), xr, r);
        let cb = _mm256_add_ps(
            chroma_offset,
            multiply_add(multiply_add(_mm256_mul_ps(yb, b), yg, g), yr, r),
        );
        let cr = _mm256_add_ps(
            chroma_offset,
            multiply_add(multiply_add(_mm256_mul_ps(zb, b), zg, g), zr, r),
        );

        // Luma is stored last so aliased chroma planes end up holding luma.
        store::<ALIGNED>(dst_cb.add(offset), cb);
        store::<ALIGNED>(dst_cr.add(offset), cr);
        store::<ALIGNED>(dst_y.add(offset), y);
    }
}

pub fn rgb_to_ycbcr_natural(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    let length = view.len();
    if !lanes_cover(length, r, g, b) {
        return false;
    }

    let chunks = length / LANE_COUNT;
    let (dst_y, dst_cb, dst_cr) = view.luma_chroma_ptrs();
    unsafe {
        rgb_to_ycbcr_8x::<false>(
            chunks,
            r.as_ptr(),
            g.as_ptr(),
            b.as_ptr(),
            dst_y,
            dst_cb,
            dst_cr,
        );
    }

    true
}

pub fn rgb_to_ycbcr_forced(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    convert_forced(view, r, g, b).is_some()
}

fn convert_forced(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> Option<()> {
    let length = view.len();
    if !lanes_cover(length, r, g, b) {
        return None;
    }

    let chunks = length / LANE_COUNT;
    if chunks == 0 {
        return Some(());
    }

    let shift_r = forced_window(r.as_ptr() as usize, r.len(), chunks, LANE_COUNT)?;
    let shift_g = forced_window(g.as_ptr() as usize, g.len(), chunks, LANE_COUNT)?;
    let shift_b = forced_window(b.as_ptr() as usize, b.len(), chunks, LANE_COUNT)?;

    let (dst_y, dst_cb, dst_cr) = view.luma_chroma_ptrs();
    let shift_y = forced_window(dst_y as usize, length, chunks, LANE_COUNT)?;
    let shift_cb = forced_window(dst_cb as usize, length, chunks, LANE_COUNT)?;
    let shift_cr = forced_window(dst_cr as usize, length, chunks, LANE_COUNT)?;

    unsafe {
        rgb_to_ycbcr_8x::<true>(
            chunks,
            r.as_ptr().add(shift_r),
            g.as_ptr().add(shift_g),
            b.as_ptr().add(shift_b),
            dst_y.add(shift_y),
            dst_cb.add(shift_cb),
            dst_cr.add(shift_cr),
        );
    }

    Some(())
}

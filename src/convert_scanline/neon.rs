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

use core::arch::aarch64::*;

/// Number of f32 lanes processed per vector iteration by the neon path.
pub const LANE_COUNT: usize = 4;

/// Returns `m0 * m1 + acc`. Always fused on aarch64.
#[inline(always)]
unsafe fn multiply_add(acc: float32x4_t, m0: float32x4_t, m1: float32x4_t) -> float32x4_t {
    vfmaq_f32(acc, m0, m1)
}

/// Convert planar rgb to ycbcr colorspace (4-wide)
///
/// The aarch64 load and store instructions carry no alignment requirement,
/// so the alignment-forced variant differs only in the window shift.
#[inline(always)]
unsafe fn rgb_to_ycbcr_4x(
    chunks: usize,
    src_r: *const f32,
    src_g: *const f32,
    src_b: *const f32,
    dst_y: *mut f32,
    dst_cb: *mut f32,
    dst_cr: *mut f32,
) {
    let chroma_offset = vdupq_n_f32(half_value(PRECISION));

    let xr = vdupq_n_f32(XR);
    let xg = vdupq_n_f32(XG);
    let xb = vdupq_n_f32(XB);
    let yr = vdupq_n_f32(YR);
    let yg = vdupq_n_f32(YG);
    let yb = vdupq_n_f32(YB);
    let zr = vdupq_n_f32(ZR);
    let zg = vdupq_n_f32(ZG);
    let zb = vdupq_n_f32(ZB);

    for i in 0..chunks {
        let offset = i * LANE_COUNT;
        let r = vld1q_f32(src_r.add(offset));
        let g = vld1q_f32(src_g.add(offset));
        let b = vld1q_f32(src_b.add(offset));

        // y  =   0 + (0.299 * r) + (0.587 * g) + (0.114 * b)
        // cb = HALF - (0.168736 * r) - (0.331264 * g) + (0.5 * b)
        // cr = HALF + (0.5 * r) - (0.418688 * g) - (0.081312 * b)
        let y = multiply_add(multiply_add(vmulq_f32(xb, b), xg, g), xr, r);
        let cb = vaddq_f32(
            chroma_offset,
            multiply_add(multiply_add(vmulq_f32(yb, b), yg, g), yr, r),
        );
        let cr = vaddq_f32(
            chroma_offset,
            multiply_add(multiply_add(vmulq_f32(zb, b), zg, g), zr, r),
        );

        // Luma is stored last so aliased chroma planes end up holding luma.
        vst1q_f32(dst_cb.add(offset), cb);
        vst1q_f32(dst_cr.add(offset), cr);
        vst1q_f32(dst_y.add(offset), y);
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
        rgb_to_ycbcr_4x(
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
        rgb_to_ycbcr_4x(
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

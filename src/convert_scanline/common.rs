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

use core::mem::size_of;

/// Sample bit depth used by every converter.
///
/// Determines the maximum sample value and the chroma offset applied by the
/// transform.
pub const PRECISION: u32 = 32;

/// The largest sample value representable at `precision` bits,
/// `2^precision - 1`.
pub fn max_value(precision: u32) -> f32 {
    ((1_u64 << precision) - 1) as f32
}

/// The chroma offset at `precision` bits, `ceil(max_value * 0.5)`.
pub fn half_value(precision: u32) -> f32 {
    (max_value(precision) * 0.5).ceil()
}

// Coefficient table, ITU-T T.871 (full range):
// y  =   0 + (0.299 * r) + (0.587 * g) + (0.114 * b)
// cb = HALF - (0.168736 * r) - (0.331264 * g) + (0.5 * b)
// cr = HALF + (0.5 * r) - (0.418688 * g) - (0.081312 * b)
pub const XR: f32 = 0.299;
pub const XG: f32 = 0.587;
pub const XB: f32 = 0.114;
pub const YR: f32 = -0.168_736;
pub const YG: f32 = -0.331_264;
pub const YB: f32 = 0.5;
pub const ZR: f32 = 0.5;
pub const ZG: f32 = -0.418_688;
pub const ZB: f32 = -0.081_312;

/// Whether every source lane provides at least `length` samples.
pub fn lanes_cover(length: usize, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    r.len() >= length && g.len() >= length && b.len() >= length
}

/// Distance in bytes from `addr` to the next `vector_size` boundary.
///
/// The result always advances, even when `addr` is already aligned.
/// `vector_size` must be a power of two.
pub const fn forced_alignment_offset(addr: usize, vector_size: usize) -> usize {
    ((addr + vector_size) & !(vector_size - 1)) - addr
}

/// Number of samples the alignment-forced paths skip at the start of
/// `plane` before issuing aligned accesses for `lane_count`-wide vectors.
pub fn forced_alignment_shift(plane: &[f32], lane_count: usize) -> usize {
    forced_alignment_offset(plane.as_ptr() as usize, lane_count * size_of::<f32>())
        / size_of::<f32>()
}

/// Computes the sample shift of the rounded-up window over a plane, or
/// `None` when the plane is too short to hold `chunks` full vectors past the
/// rounded address. The caller provides the missing padding by passing
/// longer planes.
pub fn forced_window(addr: usize, length: usize, chunks: usize, lane_count: usize) -> Option<usize> {
    let shift = forced_alignment_offset(addr, lane_count * size_of::<f32>()) / size_of::<f32>();
    if shift + chunks * lane_count <= length {
        Some(shift)
    } else {
        None
    }
}

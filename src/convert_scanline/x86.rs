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

//! Element-by-element reference path. Defines the ground truth every vector
//! path has to reproduce within floating point rounding tolerance.

#![allow(clippy::wildcard_imports)]
use crate::component_view::ComponentView;
use crate::convert_scanline::common::*;

#[inline(always)]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    (XR * r) + (XG * g) + (XB * b)
}

#[inline(always)]
fn chroma_blue(chroma_offset: f32, r: f32, g: f32, b: f32) -> f32 {
    chroma_offset + (YR * r) + (YG * g) + (YB * b)
}

#[inline(always)]
fn chroma_red(chroma_offset: f32, r: f32, g: f32, b: f32) -> f32 {
    chroma_offset + (ZR * r) + (ZG * g) + (ZB * b)
}

#[inline(always)]
fn rgb_to_ycbcr(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    let length = view.len();
    if !lanes_cover(length, r, g, b) {
        return false;
    }

    let chroma_offset = half_value(PRECISION);
    let (y_plane, cb_plane, cr_plane) = view.planes_mut();
    let samples = r.iter().zip(g).zip(b).take(length);

    match (cb_plane, cr_plane) {
        (Some(cb_plane), Some(cr_plane)) => {
            for (i, ((&r, &g), &b)) in samples.enumerate() {
                y_plane[i] = luma(r, g, b);
                cb_plane[i] = chroma_blue(chroma_offset, r, g, b);
                cr_plane[i] = chroma_red(chroma_offset, r, g, b);
            }
        }
        (Some(cb_plane), None) => {
            // Component 2 aliases the luma plane: its store would be
            // overwritten by the luma one and is skipped.
            for (i, ((&r, &g), &b)) in samples.enumerate() {
                cb_plane[i] = chroma_blue(chroma_offset, r, g, b);
                y_plane[i] = luma(r, g, b);
            }
        }
        _ => {
            // Grayscale: both chroma planes alias the luma plane, which must
            // end up holding luma.
            for (i, ((&r, &g), &b)) in samples.enumerate() {
                y_plane[i] = luma(r, g, b);
            }
        }
    }

    true
}

pub fn rgb_to_ycbcr_natural(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    rgb_to_ycbcr(view, r, g, b)
}

// The scalar path has no vector accesses to align.
pub fn rgb_to_ycbcr_forced(view: &mut ComponentView<'_>, r: &[f32], g: &[f32], b: &[f32]) -> bool {
    rgb_to_ycbcr(view, r, g, b)
}

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
use crate::alignment::Alignment;
use crate::static_assert;

const fn enum_count(lo: u32, hi: u32) -> u32 {
    hi - lo + 1
}

const LO_ALIGNMENT: u32 = Alignment::Natural as u32;
const HI_ALIGNMENT: u32 = Alignment::Forced as u32;
static_assert!(LO_ALIGNMENT == 0);
static_assert!(HI_ALIGNMENT == LO_ALIGNMENT + 1);

pub const TABLE_SIZE: usize = enum_count(LO_ALIGNMENT, HI_ALIGNMENT) as usize;

pub fn get_index(alignment: u32) -> usize {
    (alignment - LO_ALIGNMENT) as usize
}

#[inline(never)]
pub fn is_alignment_valid(alignment: u32) -> bool {
    alignment.wrapping_sub(LO_ALIGNMENT) <= HI_ALIGNMENT.wrapping_sub(LO_ALIGNMENT)
}

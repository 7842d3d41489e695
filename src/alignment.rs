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

/// An enumeration of the supported plane addressing policies.
///
/// The vector paths come in two flavors:
/// * a variant issuing unaligned loads and stores from each plane base
///   address,
/// * a variant that first rounds each plane base address up to the next
///   vector boundary, then issues aligned loads and stores from the rounded
///   address.
///
/// The scalar path accepts both policies and ignores the distinction.
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub enum Alignment {
    /// Loads and stores are issued from each plane base address, using
    /// unaligned vector instructions.
    Natural,
    /// Each plane base address is rounded up to the next vector-sized
    /// boundary before any access is issued, allowing aligned vector
    /// instructions on hardware that penalizes unaligned ones.
    ///
    /// The rounded window shifts into the plane: callers must provide the
    /// trailing padding described in the crate documentation or the
    /// conversion fails fast.
    Forced,
}

#[cfg(not(tarpaulin_include))]
impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Alignment::Natural => write!(f, "natural"),
            Alignment::Forced => write!(f, "forced"),
        }
    }
}

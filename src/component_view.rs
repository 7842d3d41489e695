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
use crate::ErrorKind;

/// Maximum number of sample planes a view can describe.
pub const MAX_NUMBER_OF_PLANES: usize = 4;

/// A zero-copy view over the planar samples of one scanline.
///
/// A view describes up to [`MAX_NUMBER_OF_PLANES`] equal-length planes of
/// 32-bit float samples owned by the caller. Plane 0 is always present and
/// non-empty. In the grayscale case (fewer than two components) the chroma
/// planes alias plane 0: rather than storing aliased pointers, the view keeps
/// the missing planes as an explicit state and routes chroma accessors to the
/// luma storage, so the aliasing is visible to the type system.
///
/// A view never owns or allocates sample storage. Its lifetime is bounded by
/// the caller-owned backing buffers.
pub struct ComponentView<'a> {
    component_count: u32,
    c0: &'a mut [f32],
    // `None` means the plane aliases `c0`
    c1: Option<&'a mut [f32]>,
    // `None` means the plane aliases `c0`
    c2: Option<&'a mut [f32]>,
    // `None` means the plane is empty
    c3: Option<&'a mut [f32]>,
}

impl<'a> ComponentView<'a> {
    /// Creates a view over up to four planes.
    ///
    /// Plane 0 is mandatory and must be non-empty. A plane provided without
    /// its predecessor is rejected. All provided planes must have the same
    /// length as plane 0.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidValue`] if plane 0 is empty, if a plane is
    /// provided without its predecessor, or if the plane lengths differ.
    pub fn new(
        c0: &'a mut [f32],
        c1: Option<&'a mut [f32]>,
        c2: Option<&'a mut [f32]>,
        c3: Option<&'a mut [f32]>,
    ) -> Result<Self, ErrorKind> {
        if c0.is_empty() {
            return Err(ErrorKind::InvalidValue);
        }

        if (c1.is_none() && c2.is_some()) || (c2.is_none() && c3.is_some()) {
            return Err(ErrorKind::InvalidValue);
        }

        let length = c0.len();
        for plane in &[c1.as_deref(), c2.as_deref(), c3.as_deref()] {
            if let Some(plane) = plane {
                if plane.len() != length {
                    return Err(ErrorKind::InvalidValue);
                }
            }
        }

        let component_count =
            1 + u32::from(c1.is_some()) + u32::from(c2.is_some()) + u32::from(c3.is_some());

        Ok(Self {
            component_count,
            c0,
            c1,
            c2,
            c3,
        })
    }

    /// Creates a single-component view. Chroma accessors alias the luma
    /// plane.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidValue`] if the luma plane is empty.
    pub fn grayscale(luma: &'a mut [f32]) -> Result<Self, ErrorKind> {
        Self::new(luma, None, None, None)
    }

    /// Creates a three-component view, one plane per channel.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidValue`] if plane 0 is empty or the plane lengths
    /// differ.
    pub fn ycbcr(
        c0: &'a mut [f32],
        c1: &'a mut [f32],
        c2: &'a mut [f32],
    ) -> Result<Self, ErrorKind> {
        Self::new(c0, Some(c1), Some(c2), None)
    }

    /// The number of components described by this view, in `1..=4`.
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// The number of samples in each plane.
    pub fn len(&self) -> usize {
        self.c0.len()
    }

    /// Whether the view holds zero samples. Only reachable by slicing.
    pub fn is_empty(&self) -> bool {
        self.c0.is_empty()
    }

    /// Whether the chroma planes alias the luma plane.
    pub fn is_grayscale(&self) -> bool {
        self.component_count < 2
    }

    /// The component 0 samples (eg. Y).
    pub fn c0(&self) -> &[f32] {
        self.c0
    }

    /// The component 1 samples (eg. Cb). Aliases component 0 in the
    /// grayscale case.
    pub fn c1(&self) -> &[f32] {
        match &self.c1 {
            Some(plane) => plane,
            None => self.c0,
        }
    }

    /// The component 2 samples (eg. Cr). Aliases component 0 in the
    /// grayscale case.
    pub fn c2(&self) -> &[f32] {
        match &self.c2 {
            Some(plane) => plane,
            None => self.c0,
        }
    }

    /// The component 3 samples (eg. alpha). Empty unless the view was
    /// created with four planes.
    pub fn c3(&self) -> &[f32] {
        match &self.c3 {
            Some(plane) => plane,
            None => &[],
        }
    }

    /// Returns a view over the `[start, start + length)` sub-range of the
    /// same backing storage. Aliased planes stay aliased, the empty plane
    /// stays empty.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidValue`] if the requested range exceeds the source
    /// length. Out-of-range requests are rejected, never clamped.
    pub fn slice(&mut self, start: usize, length: usize) -> Result<ComponentView<'_>, ErrorKind> {
        let end = match start.checked_add(length) {
            Some(end) if end <= self.c0.len() => end,
            _ => return Err(ErrorKind::InvalidValue),
        };

        Ok(ComponentView {
            component_count: self.component_count,
            c0: &mut self.c0[start..end],
            c1: self.c1.as_deref_mut().map(|plane| &mut plane[start..end]),
            c2: self.c2.as_deref_mut().map(|plane| &mut plane[start..end]),
            c3: self.c3.as_deref_mut().map(|plane| &mut plane[start..end]),
        })
    }

    /// Mutable access to the luma plane and the distinct chroma planes.
    /// Aliased chroma planes come back as `None`: writing them would write
    /// the luma storage, which the converters express by skipping the write
    /// and storing luma last.
    pub(crate) fn planes_mut(&mut self) -> (&mut [f32], Option<&mut [f32]>, Option<&mut [f32]>) {
        (
            &mut *self.c0,
            self.c1.as_deref_mut(),
            self.c2.as_deref_mut(),
        )
    }

    /// Raw destination pointers for the vector paths. In the grayscale case
    /// the chroma pointers equal the luma pointer; stores through them target
    /// the same memory and the luma store is issued last.
    pub(crate) fn luma_chroma_ptrs(&mut self) -> (*mut f32, *mut f32, *mut f32) {
        let y = self.c0.as_mut_ptr();
        let cb = match self.c1.as_deref_mut() {
            Some(plane) => plane.as_mut_ptr(),
            None => y,
        };
        let cr = match self.c2.as_deref_mut() {
            Some(plane) => plane.as_mut_ptr(),
            None => y,
        };

        (y, cb, cr)
    }
}

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
#![warn(missing_docs)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![allow(
    clippy::similar_names, // This requires effort to ensure
    // Due to vzeroupper use, compiler does not inline intrinsics
    // but rather creates a function for each one that wraps the operation followed
    // by vzeroupper().
    // This is detrimental to performance
    clippy::inline_always,
    // Sample maxima are powers of two, exact in f32
    clippy::cast_precision_loss,
    // Yield false positives
    clippy::must_use_candidate,
    clippy::doc_markdown,
)]

//! Planar color primitives is a library to convert planar RGB samples into
//! planar YCbCr samples, one scanline at a time.
//!
//! The conversion applies one fixed full-range transform:
//!
//! ```text
//! y  =   0 + (0.299 * r) + (0.587 * g) + (0.114 * b)
//! cb = HALF - (0.168736 * r) - (0.331264 * g) + (0.5 * b)
//! cr = HALF + (0.5 * r) - (0.418688 * g) - (0.081312 * b)
//! ```
//!
//! where `HALF` is derived from the configured sample bit depth
//! ([`PRECISION`], see [`half_value`]).
//!
//! Several interchangeable execution paths implement the transform:
//!
//! | Path     | Lanes | Variants                  |
//! | -------- | ----- | ------------------------- |
//! | scalar   | 1     | reference, whole row      |
//! | sse2     | 4     | natural, alignment-forced |
//! | avx2     | 8     | natural, alignment-forced |
//! | neon     | 4     | natural, alignment-forced |
//!
//! [`convert_scanline()`] resolves the best path for the running cpu once and
//! converts whole rows, finishing any vector-width remainder with the scalar
//! path. The per-path entry points expose each strategy directly for callers
//! that select a path themselves; their natural variants process only
//! `length / lanes` full vectors and leave the remainder untouched, and
//! their alignment-forced variants round every plane address up to the next
//! vector boundary and require the caller to provide the trailing padding
//! the rounded window needs.
//!
//! # Examples
//!
//! Convert one scanline with the best path for the running cpu:
//! ```
//! use planar_color_primitives as pcp;
//! use pcp::{convert_scanline, Alignment, ComponentView, ErrorKind};
//!
//! fn convert() -> Result<(), ErrorKind> {
//!     const WIDTH: usize = 640;
//!
//!     let r = vec![64f32; WIDTH];
//!     let g = vec![128f32; WIDTH];
//!     let b = vec![32f32; WIDTH];
//!
//!     let mut y = vec![0f32; WIDTH];
//!     let mut cb = vec![0f32; WIDTH];
//!     let mut cr = vec![0f32; WIDTH];
//!
//!     let mut view = ComponentView::ycbcr(&mut y, &mut cb, &mut cr)?;
//!     convert_scanline(&mut view, &r, &g, &b, Alignment::Natural)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Convert a grayscale scanline, where the chroma planes alias the luma
//! plane and the luma values win:
//! ```
//! use planar_color_primitives as pcp;
//! use pcp::{convert_from_rgb_scalar, ComponentView, ErrorKind};
//!
//! fn convert() -> Result<(), ErrorKind> {
//!     const WIDTH: usize = 640;
//!
//!     let r = vec![64f32; WIDTH];
//!     let g = vec![128f32; WIDTH];
//!     let b = vec![32f32; WIDTH];
//!
//!     let mut luma = vec![0f32; WIDTH];
//!
//!     let mut view = ComponentView::grayscale(&mut luma)?;
//!     convert_from_rgb_scalar(&mut view, &r, &g, &b)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Convert a sub-range of a scanline through a sliced view:
//! ```
//! use planar_color_primitives as pcp;
//! use pcp::{convert_from_rgb_scalar, ComponentView, ErrorKind};
//!
//! fn convert() -> Result<(), ErrorKind> {
//!     const WIDTH: usize = 640;
//!
//!     let r = vec![64f32; WIDTH];
//!     let g = vec![128f32; WIDTH];
//!     let b = vec![32f32; WIDTH];
//!
//!     let mut y = vec![0f32; WIDTH];
//!     let mut cb = vec![0f32; WIDTH];
//!     let mut cr = vec![0f32; WIDTH];
//!
//!     let mut view = ComponentView::ycbcr(&mut y, &mut cb, &mut cr)?;
//!     let mut right_half = view.slice(WIDTH / 2, WIDTH / 2)?;
//!     convert_from_rgb_scalar(&mut right_half, &r[WIDTH / 2..], &g[WIDTH / 2..], &b[WIDTH / 2..])?;
//!
//!     Ok(())
//! }
//! ```
mod alignment;
mod component_view;
mod convert_scanline;
mod cpu_info;
mod dispatcher;
mod static_assert;

use cpu_info::{CpuManufacturer, InstructionSet};
use paste::paste;
use std::error;
use std::fmt;
#[cfg(feature = "test_instruction_sets")]
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::OnceLock;

pub use alignment::Alignment;
pub use component_view::{ComponentView, MAX_NUMBER_OF_PLANES};
pub use convert_scanline::common::{forced_alignment_shift, half_value, max_value, PRECISION};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use convert_scanline::avx2::LANE_COUNT as AVX2_LANE_COUNT;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use convert_scanline::sse2::LANE_COUNT as SSE2_LANE_COUNT;

#[cfg(target_arch = "aarch64")]
pub use convert_scanline::neon::LANE_COUNT as NEON_LANE_COUNT;

/// An enumeration of errors.
#[derive(Debug)]
#[repr(C)]
pub enum ErrorKind {
    /// One or more parameters have invalid values for the called function
    InvalidValue,
    /// The requested operation is unsupported by the running cpu
    InvalidOperation,
    /// Not enough data was provided to the called function. Typically, provided
    /// lanes or planes are not correctly sized
    NotEnoughData,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::InvalidValue => write!(
                f,
                "One or more parameters have not legal values for the command"
            ),
            ErrorKind::InvalidOperation => {
                write!(f, "The operation is not supported by the running cpu")
            }
            ErrorKind::NotEnoughData => write!(f, "Not enough data provided"),
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl error::Error for ErrorKind {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

type ConvertDispatcher =
    for<'a, 'b> fn(&'a mut ComponentView<'b>, &'a [f32], &'a [f32], &'a [f32]) -> bool;

macro_rules! set_converter {
    ($conv:expr, $set:ident, $alignment:ident) => {
        paste! {
            $conv[dispatcher::get_index(Alignment::$alignment as u32)] =
                Some(convert_scanline::$set::[<rgb_to_ycbcr_ $alignment:lower>])
        }
    };
}

macro_rules! set_dispatch_table {
    ($conv:expr, $set:ident) => {
        set_converter!($conv, $set, Natural);
        set_converter!($conv, $set, Forced);
    };
}

#[cfg(feature = "test_instruction_sets")]
static TEST_SET: AtomicI32 = AtomicI32::new(-1);

type DispatchTable = [Option<ConvertDispatcher>; dispatcher::TABLE_SIZE];

struct Context {
    manufacturer: CpuManufacturer,
    set: InstructionSet,
    lanes: usize,
    converters: DispatchTable,
    #[cfg(feature = "test_instruction_sets")]
    test_converters: [Option<DispatchTable>; 2],
}

impl Context {
    pub fn global() -> &'static Context {
        static INSTANCE: OnceLock<Context> = OnceLock::new();
        INSTANCE.get_or_init(Context::new)
    }

    pub fn new() -> Self {
        let (manufacturer, set) = cpu_info::get();
        let mut context = Context {
            manufacturer,
            set,
            lanes: 1,
            converters: [None; dispatcher::TABLE_SIZE],
            #[cfg(feature = "test_instruction_sets")]
            test_converters: [None; 2],
        };

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        match context.set {
            InstructionSet::X86 => {
                set_dispatch_table!(context.converters, x86);
            }
            InstructionSet::Sse2 => {
                set_dispatch_table!(context.converters, sse2);
                context.lanes = convert_scanline::sse2::LANE_COUNT;

                #[cfg(feature = "test_instruction_sets")]
                {
                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_dispatch_table!(table, x86);
                    context.test_converters[0] = Some(table);
                }
            }
            InstructionSet::Avx2 => {
                set_dispatch_table!(context.converters, avx2);
                context.lanes = convert_scanline::avx2::LANE_COUNT;

                #[cfg(feature = "test_instruction_sets")]
                {
                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_dispatch_table!(table, sse2);
                    context.test_converters[1] = Some(table);

                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_dispatch_table!(table, x86);
                    context.test_converters[0] = Some(table);
                }
            }
        }

        #[cfg(target_arch = "aarch64")]
        match context.set {
            InstructionSet::Neon => {
                set_dispatch_table!(context.converters, neon);
                context.lanes = convert_scanline::neon::LANE_COUNT;
            }
            InstructionSet::X86 => {
                set_dispatch_table!(context.converters, x86);
            }
        }

        // This is the default for wasm32 and every other target
        #[cfg(not(any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "aarch64"
        )))]
        {
            set_dispatch_table!(context.converters, x86);
        }

        context
    }
}

fn resolve_converters() -> (DispatchTable, usize) {
    let state = Context::global();

    #[cfg(feature = "test_instruction_sets")]
    {
        const TEST_LANES: [usize; 2] = [1, 4];

        #[allow(clippy::cast_sign_loss)]
        // Checked: we want the invalid value '-1' to be mapped outside the valid range
        let index = TEST_SET.load(Ordering::SeqCst) as usize;
        if let Some(Some(table)) = state.test_converters.get(index) {
            return (*table, TEST_LANES[index]);
        }
    }

    (state.converters, state.lanes)
}

fn to_result(converted: bool) -> Result<(), ErrorKind> {
    if converted {
        Ok(())
    } else {
        Err(ErrorKind::NotEnoughData)
    }
}

/// Returns a description of the algorithms that are best for the running cpu
/// and available instruction sets
///
/// # Examples
/// ```
/// use planar_color_primitives as pcp;
/// println!("{}", pcp::describe_acceleration());
/// // => {cpu-manufacturer:Intel,instruction-set:Avx2}
/// ```
pub fn describe_acceleration() -> String {
    let state = Context::global();

    format!(
        "{{cpu-manufacturer:{:?},instruction-set:{:?}}}",
        state.manufacturer, state.set
    )
}

/// Converts one scanline of planar RGB samples to YCbCr, using the best
/// converter for the running cpu and the requested plane addressing policy.
///
/// The converted samples are written in place into the view's component
/// planes: luma into component 0, blue-difference chroma into component 1 and
/// red-difference chroma into component 2. In the grayscale case the aliased
/// chroma planes resolve to luma. Component 3, when present, is left
/// untouched.
///
/// With [`Alignment::Natural`], the whole row is converted: the vector body
/// processes full vectors and the scalar path finishes the remainder.
///
/// With [`Alignment::Forced`], the selected vector path rounds every plane
/// address up to the next vector boundary and converts `length / lanes` full
/// vectors from the rounded window; every plane and lane must extend past the
/// window or the conversion fails. No remainder handling is performed.
///
/// # Arguments
/// * `view` - Destination planes for one scanline
/// * `r` - Red source samples, at least `view.len()` of them
/// * `g` - Green source samples, at least `view.len()` of them
/// * `b` - Blue source samples, at least `view.len()` of them
/// * `alignment` - Plane addressing policy
///
/// # Errors
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples
///
/// * [`NotEnoughData`] if the alignment is [`Alignment::Forced`] and a plane
///   or lane does not extend far enough past the rounded window
///
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
pub fn convert_scanline(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
    alignment: Alignment,
) -> Result<(), ErrorKind> {
    let (converters, lanes) = resolve_converters();

    let index = dispatcher::get_index(alignment as u32);
    if index >= converters.len() {
        return Err(ErrorKind::InvalidOperation);
    }

    match converters[index] {
        None => Err(ErrorKind::InvalidOperation),
        Some(converter) => {
            if !converter(view, r, g, b) {
                return Err(ErrorKind::NotEnoughData);
            }

            // The vector converters process full vectors only. Natural rows
            // are completed by the scalar path.
            if matches!(alignment, Alignment::Natural) && lanes > 1 {
                let processed = (view.len() / lanes) * lanes;
                let remainder = view.len() - processed;
                if remainder > 0 {
                    let mut tail = view.slice(processed, remainder)?;
                    if !convert_scanline::x86::rgb_to_ycbcr_natural(
                        &mut tail,
                        &r[processed..],
                        &g[processed..],
                        &b[processed..],
                    ) {
                        return Err(ErrorKind::NotEnoughData);
                    }
                }
            }

            Ok(())
        }
    }
}

/// Converts one scanline of planar RGB samples to YCbCr with the scalar
/// reference path, element by element.
///
/// This path defines the results every vector path reproduces within
/// floating point rounding tolerance, converts whole rows of any length and
/// runs on any cpu.
///
/// # Errors
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples
///
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
pub fn convert_from_rgb_scalar(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    to_result(convert_scanline::x86::rgb_to_ycbcr_natural(view, r, g, b))
}

/// Converts `view.len() / 4` full vectors of one scanline with the narrow
/// vector path, reading and writing from each plane base address.
///
/// The `view.len() % 4` trailing samples are left untouched.
///
/// # Errors
///
/// * [`InvalidOperation`] if the running cpu does not support sse2
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples
///
/// [`InvalidOperation`]: ./enum.ErrorKind.html#variant.InvalidOperation
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn convert_from_rgb_sse2(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    match Context::global().set {
        InstructionSet::X86 => Err(ErrorKind::InvalidOperation),
        _ => to_result(convert_scanline::sse2::rgb_to_ycbcr_natural(view, r, g, b)),
    }
}

/// Converts `view.len() / 4` full vectors of one scanline with the narrow
/// vector path, rounding every plane address up to the next 16-byte boundary
/// and issuing aligned accesses from there.
///
/// The rounded window shifts into each plane by
/// [`forced_alignment_shift`]`(plane, 4)` samples: every plane and lane must
/// extend that far past the processed vectors, or the conversion fails
/// without touching any sample.
///
/// # Errors
///
/// * [`InvalidOperation`] if the running cpu does not support sse2
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples, or if a plane or lane does not extend far enough past the
///   rounded window
///
/// [`InvalidOperation`]: ./enum.ErrorKind.html#variant.InvalidOperation
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn convert_from_rgb_sse2_aligned(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    match Context::global().set {
        InstructionSet::X86 => Err(ErrorKind::InvalidOperation),
        _ => to_result(convert_scanline::sse2::rgb_to_ycbcr_forced(view, r, g, b)),
    }
}

/// Converts `view.len() / 8` full vectors of one scanline with the wide
/// vector path, reading and writing from each plane base address.
///
/// The `view.len() % 8` trailing samples are left untouched.
///
/// # Errors
///
/// * [`InvalidOperation`] if the running cpu does not support avx2
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples
///
/// [`InvalidOperation`]: ./enum.ErrorKind.html#variant.InvalidOperation
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn convert_from_rgb_avx2(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    match Context::global().set {
        InstructionSet::Avx2 => to_result(convert_scanline::avx2::rgb_to_ycbcr_natural(view, r, g, b)),
        _ => Err(ErrorKind::InvalidOperation),
    }
}

/// Converts `view.len() / 8` full vectors of one scanline with the wide
/// vector path, rounding every plane address up to the next 32-byte boundary
/// and issuing aligned accesses from there.
///
/// The rounded window shifts into each plane by
/// [`forced_alignment_shift`]`(plane, 8)` samples: every plane and lane must
/// extend that far past the processed vectors, or the conversion fails
/// without touching any sample.
///
/// # Errors
///
/// * [`InvalidOperation`] if the running cpu does not support avx2
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples, or if a plane or lane does not extend far enough past the
///   rounded window
///
/// [`InvalidOperation`]: ./enum.ErrorKind.html#variant.InvalidOperation
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn convert_from_rgb_avx2_aligned(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    match Context::global().set {
        InstructionSet::Avx2 => to_result(convert_scanline::avx2::rgb_to_ycbcr_forced(view, r, g, b)),
        _ => Err(ErrorKind::InvalidOperation),
    }
}

/// Converts `view.len() / 4` full vectors of one scanline with the neon
/// vector path, reading and writing from each plane base address.
///
/// The `view.len() % 4` trailing samples are left untouched.
///
/// # Errors
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples
///
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(target_arch = "aarch64")]
pub fn convert_from_rgb_neon(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    to_result(convert_scanline::neon::rgb_to_ycbcr_natural(view, r, g, b))
}

/// Converts `view.len() / 4` full vectors of one scanline with the neon
/// vector path, rounding every plane address up to the next 16-byte boundary
/// first.
///
/// The rounded window shifts into each plane by
/// [`forced_alignment_shift`]`(plane, 4)` samples: every plane and lane must
/// extend that far past the processed vectors, or the conversion fails
/// without touching any sample.
///
/// # Errors
///
/// * [`NotEnoughData`] if a source lane provides fewer than `view.len()`
///   samples, or if a plane or lane does not extend far enough past the
///   rounded window
///
/// [`NotEnoughData`]: ./enum.ErrorKind.html#variant.NotEnoughData
#[cfg(target_arch = "aarch64")]
pub fn convert_from_rgb_neon_aligned(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    to_result(convert_scanline::neon::rgb_to_ycbcr_forced(view, r, g, b))
}

/// This is for internal use only
#[cfg(feature = "test_instruction_sets")]
pub fn initialize_with_instruction_set(instruction_set: &str) {
    match instruction_set {
        "x86" => TEST_SET.store(0, Ordering::SeqCst),
        "sse2" => TEST_SET.store(1, Ordering::SeqCst),
        _ => TEST_SET.store(2, Ordering::SeqCst),
    };
}

#[doc(hidden)]
#[cfg(not(tarpaulin_include))]
#[cfg(not(feature = "test_instruction_sets"))]
pub mod c_api {
    #![allow(clippy::wildcard_imports)]
    use super::*; // We are importing everything
    use std::ffi::CString;
    use std::os::raw::c_char;
    use std::ptr;
    use std::slice;

    #[repr(C)]
    pub enum Result {
        Ok,
        Err,
    }

    unsafe fn set_error(error: *mut ErrorKind, value: ErrorKind) -> self::Result {
        if !error.is_null() {
            *error = value;
        }

        self::Result::Err
    }

    #[no_mangle]
    pub extern "C" fn pcp_describe_acceleration() -> *mut c_char {
        let acc = describe_acceleration();
        if let Ok(s) = CString::new(acc) {
            s.into_raw()
        } else {
            let p: *const c_char = ptr::null();
            p as *mut c_char
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn pcp_unref_string(string: *mut c_char) {
        if !string.is_null() {
            let _unused = CString::from_raw(string);
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn pcp_convert_scanline(
        length: usize,
        src_r: *const f32,
        src_g: *const f32,
        src_b: *const f32,
        dst_c0: *mut f32,
        dst_c1: *mut f32,
        dst_c2: *mut f32,
        dst_c3: *mut f32,
        alignment: u32,
        error: *mut ErrorKind,
    ) -> self::Result {
        // Protect from C null pointers
        if src_r.is_null() || src_g.is_null() || src_b.is_null() || dst_c0.is_null() {
            return set_error(error, ErrorKind::InvalidValue);
        }

        // C enums are untrusted in the sense you can cast any value to an enum type
        if !dispatcher::is_alignment_valid(alignment) {
            return set_error(error, ErrorKind::InvalidValue);
        }

        let alignment = if alignment == Alignment::Natural as u32 {
            Alignment::Natural
        } else {
            Alignment::Forced
        };

        // We assume there is enough data in the buffers
        // If the assumption will not hold undefined behaviour occurs (like in C)
        let r = slice::from_raw_parts(src_r, length);
        let g = slice::from_raw_parts(src_g, length);
        let b = slice::from_raw_parts(src_b, length);

        let c0 = slice::from_raw_parts_mut(dst_c0, length);
        let c1 = if dst_c1.is_null() {
            None
        } else {
            Some(slice::from_raw_parts_mut(dst_c1, length))
        };
        let c2 = if dst_c2.is_null() {
            None
        } else {
            Some(slice::from_raw_parts_mut(dst_c2, length))
        };
        let c3 = if dst_c3.is_null() {
            None
        } else {
            Some(slice::from_raw_parts_mut(dst_c3, length))
        };

        let mut view = match ComponentView::new(c0, c1, c2, c3) {
            Ok(view) => view,
            Err(error_kind) => return set_error(error, error_kind),
        };

        match convert_scanline(&mut view, r, g, b, alignment) {
            Ok(_) => self::Result::Ok,
            Err(error_kind) => set_error(error, error_kind),
        }
    }
}

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

#[cfg(target_arch = "x86")]
use core::arch::x86::{__cpuid, _xgetbv};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__cpuid, _xgetbv};

fn cpuid(functionnumber: u32, output: &mut [u32; 4]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        unsafe {
            let result = __cpuid(functionnumber);
            output[0] = result.eax;
            output[1] = result.ebx;
            output[2] = result.ecx;
            output[3] = result.edx;
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        let _unused = functionnumber;
        output.fill(0);
    }
}

#[allow(unreachable_code)]
fn xgetbv0() -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        return unsafe { _xgetbv(0) };
    }

    0
}

fn main() {
    // The cfgs below are emitted under non-builtin `probed_*` names rather than
    // the builtin `target_feature` cfg, which current rustc refuses to let a
    // build script set (`explicit_builtin_cfgs_in_flags`). The source ORs these
    // probe results with the real `target_feature` cfg, so the selected
    // codepath is identical to setting `target_feature` directly.
    println!("cargo:rustc-check-cfg=cfg(probed_sse2)");
    println!("cargo:rustc-check-cfg=cfg(probed_avx)");
    println!("cargo:rustc-check-cfg=cfg(probed_fma)");
    println!("cargo:rustc-check-cfg=cfg(probed_avx2)");

    // The rust flags are set in order to avoid generating illegal instructions
    // on the machine on which the build is triggered.
    let features = &mut [0u32; 4];
    cpuid(0, features);

    if features[0] != 0 {
        cpuid(1, features);
        if (features[3] & (1 << 26)) != 0 {
            println!("cargo:rustc-cfg=probed_sse2");

            // AVX is supported if all the following conditions hold:
            // - OS uses XSAVE/XRSTOR
            // - AVX supported by CPU
            // - AVX registers are restored at context switch
            // See https://software.intel.com/en-us/blogs/2011/04/14/is-avx-enabled/
            let has_fma = (features[2] & (1 << 12)) != 0;
            let xcr_feature_mask =
                if (features[2] & (1 << 27)) != 0 && (features[2] & (1 << 28)) != 0 {
                    xgetbv0()
                } else {
                    0
                };

            if (xcr_feature_mask & 0x6) == 0x6 {
                println!("cargo:rustc-cfg=probed_avx");

                // FMA shares the AVX register state, so it is only usable when
                // the OS restores the full ymm set.
                if has_fma {
                    println!("cargo:rustc-cfg=probed_fma");
                }

                cpuid(7, features);
                if (features[1] & (1 << 5)) != 0 {
                    println!("cargo:rustc-cfg=probed_avx2");
                }
            }
        }
    }
}

//! ARM aarch64 backend with NEON.
//!
//! NEON is mandatory on ARMv8-A, so both arithmetic paths run without a
//! runtime check. The multiply names `v1`/`v2` in inline assembly; the add
//! goes through `vaddq_f32`.
//!
//! The processor identification registers (`MIDR_EL1`) are privileged, so
//! the vendor probe reports [`ProbeError::Unsupported`].

use core::arch::aarch64::{vaddq_f32, vld1q_f32, vst1q_f32};
use core::arch::asm;

use crate::arch::{Backend, LaneAdd, PairwiseMul, VendorProbe};
use crate::error::ProbeError;
use crate::lanes::F32x4;
use crate::vendor::VendorString;

/// NEON backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonBackend;

impl NeonBackend {
    /// Create a new backend.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Multiply with explicit registers (`ld1`, `fmul v1.4s`, `st1`).
#[inline]
#[must_use]
pub fn fmul_asm(a: &F32x4, b: &F32x4) -> F32x4 {
    let mut out = F32x4::ZERO;

    // SAFETY: each pointer covers 16 valid bytes; v1/v2 are clobbered.
    unsafe {
        asm!(
            "ld1 {{v1.4s}}, [{a}]",
            "ld1 {{v2.4s}}, [{b}]",
            "fmul v1.4s, v1.4s, v2.4s",
            "st1 {{v1.4s}}, [{dst}]",
            a = in(reg) a.as_array().as_ptr(),
            b = in(reg) b.as_array().as_ptr(),
            dst = in(reg) out.as_mut_array().as_mut_ptr(),
            out("v1") _,
            out("v2") _,
            options(nostack, preserves_flags)
        );
    }

    out
}

/// Add with `vaddq_f32`.
#[inline]
#[must_use]
pub fn fadd_intrinsic(a: &F32x4, b: &F32x4) -> F32x4 {
    let mut out = F32x4::ZERO;

    // SAFETY: loads and stores of exactly four f32 lanes.
    unsafe {
        let va = vld1q_f32(a.as_array().as_ptr());
        let vb = vld1q_f32(b.as_array().as_ptr());
        vst1q_f32(out.as_mut_array().as_mut_ptr(), vaddq_f32(va, vb));
    }

    out
}

impl VendorProbe for NeonBackend {
    fn vendor(&self) -> Result<VendorString, ProbeError> {
        Err(ProbeError::Unsupported { arch: "aarch64" })
    }
}

impl PairwiseMul for NeonBackend {
    #[inline]
    fn mul(&self, a: F32x4, b: F32x4) -> F32x4 {
        fmul_asm(&a, &b)
    }
}

impl LaneAdd for NeonBackend {
    #[inline]
    fn add(&self, a: F32x4, b: F32x4) -> F32x4 {
        fadd_intrinsic(&a, &b)
    }
}

impl Backend for NeonBackend {
    fn name(&self) -> &'static str {
        "neon"
    }
}

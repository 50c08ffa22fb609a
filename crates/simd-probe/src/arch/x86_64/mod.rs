//! x86_64 backend.
//!
//! # Register Usage
//!
//! ```text
//! cpuid : eax (leaf in, max leaf out), ebx/edx/ecx vendor bytes
//! mulps : xmm1 *= xmm2, both loaded with movups
//! addps : compiler-allocated xmm via _mm_add_ps
//! ```
//!
//! Only the SSE/SSE2 baseline that the x86_64 ABI guarantees is used, so
//! there is no runtime feature check.

mod cpuid;
mod sse;

pub use cpuid::{cpuid_asm, cpuid_intrinsic, LEAF_SIGNATURE, LEAF_VENDOR};
pub use sse::{addps_intrinsic, mulps_asm};

use crate::arch::{Backend, LaneAdd, PairwiseMul, VendorProbe};
use crate::error::ProbeError;
use crate::lanes::F32x4;
use crate::vendor::{ProcessorSignature, VendorString};

/// SSE backend: inline-asm `cpuid` and `mulps`, intrinsic `addps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SseBackend;

impl SseBackend {
    /// Create a new backend.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Processor signature from leaf 1.
    #[must_use]
    pub fn signature(&self) -> ProcessorSignature {
        ProcessorSignature::from_eax(cpuid_asm(LEAF_SIGNATURE).eax)
    }
}

impl VendorProbe for SseBackend {
    fn vendor(&self) -> Result<VendorString, ProbeError> {
        let regs = cpuid_asm(LEAF_VENDOR);
        log::debug!("cpuid leaf 0: max basic leaf {:#x}", regs.eax);
        if regs.eax >= LEAF_SIGNATURE {
            log::debug!("cpuid leaf 1: {}", self.signature());
        }
        Ok(VendorString::from_registers(&regs))
    }
}

impl PairwiseMul for SseBackend {
    #[inline]
    fn mul(&self, a: F32x4, b: F32x4) -> F32x4 {
        mulps_asm(&a, &b)
    }
}

impl LaneAdd for SseBackend {
    #[inline]
    fn add(&self, a: F32x4, b: F32x4) -> F32x4 {
        addps_intrinsic(&a, &b)
    }
}

impl Backend for SseBackend {
    fn name(&self) -> &'static str {
        "sse"
    }
}

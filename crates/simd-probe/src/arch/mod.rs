//! Architecture-specific backends.
//!
//! Each backend answers the three hardware questions the tour asks: who made
//! the processor, what does a 4-lane multiply produce, and what does a 4-lane
//! add produce. The traits are deliberately narrow so that a target without
//! the instructions can still provide the arithmetic through the scalar
//! backend.
//!
//! # Supported Architectures
//!
//! - `x86_64`: SSE (baseline), `cpuid`
//! - `aarch64`: NEON (baseline)
//! - `portable`: Pure Rust scalar implementation (all architectures)

use crate::error::ProbeError;
use crate::lanes::F32x4;
use crate::vendor::VendorString;

// Portable scalar backend (available on all architectures)
pub mod portable;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

pub use portable::ScalarBackend;

/// Backend for the current target.
#[cfg(target_arch = "x86_64")]
pub type NativeBackend = x86_64::SseBackend;

/// Backend for the current target.
#[cfg(target_arch = "aarch64")]
pub type NativeBackend = aarch64::NeonBackend;

/// Backend for the current target.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type NativeBackend = portable::ScalarBackend;

/// Reads the processor vendor identification.
pub trait VendorProbe {
    /// Query the vendor string.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Unsupported`] when the architecture offers no
    /// user-space identification instruction.
    fn vendor(&self) -> Result<VendorString, ProbeError>;
}

/// Element-wise multiply of two 4-lane vectors.
pub trait PairwiseMul {
    /// `out[i] = a[i] * b[i]`
    fn mul(&self, a: F32x4, b: F32x4) -> F32x4;
}

/// Element-wise add of two 4-lane vectors.
pub trait LaneAdd {
    /// `out[i] = a[i] + b[i]`
    fn add(&self, a: F32x4, b: F32x4) -> F32x4;
}

/// A complete backend for the tour.
pub trait Backend: VendorProbe + PairwiseMul + LaneAdd {
    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

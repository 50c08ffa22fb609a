//! Portable scalar backend.
//!
//! Works on any architecture without SIMD support and serves as the
//! reference the vector backends are checked against.

use crate::arch::{Backend, LaneAdd, PairwiseMul, VendorProbe};
use crate::error::ProbeError;
use crate::lanes::F32x4;
use crate::vendor::VendorString;

/// Scalar reference backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    /// Create a new scalar backend.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[inline(always)]
fn zip_lanes(a: F32x4, b: F32x4, f: impl Fn(f32, f32) -> f32) -> F32x4 {
    let (a, b) = (a.to_array(), b.to_array());
    F32x4::from_array(core::array::from_fn(|i| f(a[i], b[i])))
}

impl VendorProbe for ScalarBackend {
    fn vendor(&self) -> Result<VendorString, ProbeError> {
        Err(ProbeError::Unsupported {
            arch: "portable",
        })
    }
}

impl PairwiseMul for ScalarBackend {
    #[inline]
    fn mul(&self, a: F32x4, b: F32x4) -> F32x4 {
        zip_lanes(a, b, |x, y| x * y)
    }
}

impl LaneAdd for ScalarBackend {
    #[inline]
    fn add(&self, a: F32x4, b: F32x4) -> F32x4 {
        zip_lanes(a, b, |x, y| x + y)
    }
}

impl Backend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }
}

//! SSE arithmetic on one 128-bit register.
//!
//! The multiply names its registers (`xmm1`, `xmm2`) in inline assembly;
//! the add leaves register allocation to the compiler through intrinsics.
//! SSE is part of the x86_64 baseline, so neither path needs a runtime check.

use core::arch::asm;
use core::arch::x86_64::{_mm_add_ps, _mm_loadu_ps, _mm_storeu_ps};

use crate::lanes::F32x4;

/// Multiply with explicit registers.
///
/// ```text
/// movups xmm1, [a]
/// movups xmm2, [b]
/// mulps  xmm1, xmm2
/// movups [out], xmm1
/// ```
#[inline]
#[must_use]
pub fn mulps_asm(a: &F32x4, b: &F32x4) -> F32x4 {
    let mut out = F32x4::ZERO;

    // SAFETY: the three pointers cover 16 valid bytes each and movups has
    // no alignment requirement. xmm1/xmm2 are declared clobbered.
    unsafe {
        asm!(
            "movups xmm1, [{a}]",
            "movups xmm2, [{b}]",
            "mulps xmm1, xmm2",
            "movups [{dst}], xmm1",
            a = in(reg) a.as_array().as_ptr(),
            b = in(reg) b.as_array().as_ptr(),
            dst = in(reg) out.as_mut_array().as_mut_ptr(),
            out("xmm1") _,
            out("xmm2") _,
            options(nostack, preserves_flags)
        );
    }

    out
}

/// Add with `_mm_add_ps`.
#[inline]
#[must_use]
pub fn addps_intrinsic(a: &F32x4, b: &F32x4) -> F32x4 {
    let mut out = F32x4::ZERO;

    // SAFETY: unaligned loads and stores of exactly four f32 lanes.
    unsafe {
        let va = _mm_loadu_ps(a.as_array().as_ptr());
        let vb = _mm_loadu_ps(b.as_array().as_ptr());
        _mm_storeu_ps(out.as_mut_array().as_mut_ptr(), _mm_add_ps(va, vb));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::arch::x86_64::_mm_set_ps;

    #[test]
    fn test_mulps_literals() {
        let out = mulps_asm(
            &F32x4::from_array([1.0, 2.0, 3.0, 4.0]),
            &F32x4::from_array([5.0, 4.0, 3.0, 2.0]),
        );
        assert_eq!(out.to_array(), [5.0, 8.0, 9.0, 8.0]);
    }

    #[test]
    fn test_addps_literals() {
        let out = addps_intrinsic(
            &F32x4::set_descending(1.0, 2.0, 3.0, 4.0),
            &F32x4::set_descending(4.0, 3.0, 2.0, 1.0),
        );
        assert_eq!(out.to_array(), [5.0; 4]);
    }

    #[test]
    fn test_set_descending_matches_mm_set_ps() {
        let mut stored = F32x4::ZERO;
        // SAFETY: SSE baseline; store target is 16 bytes.
        unsafe {
            _mm_storeu_ps(
                stored.as_mut_array().as_mut_ptr(),
                _mm_set_ps(1.0, 2.0, 3.0, 4.0),
            );
        }
        assert_eq!(stored, F32x4::set_descending(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mulps_leaves_inputs() {
        let a = F32x4::from_array([1.5, -2.0, 0.0, 1e10]);
        let b = F32x4::from_array([2.0, 3.0, 7.0, 1e10]);
        let out = mulps_asm(&a, &b);
        assert_eq!(a.to_array(), [1.5, -2.0, 0.0, 1e10]);
        assert_eq!(out.to_array(), [3.0, -6.0, 0.0, 1e20]);
    }
}

//! Four-lane single-precision vector.
//!
//! `F32x4` is the in-memory image of one 128-bit register (`xmm` on
//! x86_64, `v` on aarch64). Lane 0 is the lowest address, which is also the
//! lowest lane of the register after an unaligned load.

use core::fmt;

/// Number of `f32` lanes in a 128-bit vector.
pub const LANES: usize = 4;

/// Four `f32` lanes, lane 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct F32x4([f32; LANES]);

impl F32x4 {
    /// All lanes zero.
    pub const ZERO: Self = Self([0.0; LANES]);

    /// Build from an array; lane `i` takes element `i`.
    #[inline]
    #[must_use]
    pub const fn from_array(lanes: [f32; LANES]) -> Self {
        Self(lanes)
    }

    /// Build with the `_mm_set_ps` argument order.
    ///
    /// The first argument lands in the highest lane and the last argument in
    /// lane 0, so `set_descending(1.0, 2.0, 3.0, 4.0)` stores `[4, 3, 2, 1]`.
    #[inline]
    #[must_use]
    pub const fn set_descending(e3: f32, e2: f32, e1: f32, e0: f32) -> Self {
        Self([e0, e1, e2, e3])
    }

    /// Lanes in memory order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; LANES] {
        self.0
    }

    /// Borrow the lanes in memory order.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[f32; LANES] {
        &self.0
    }

    /// Mutable access to the lanes, used as a store target.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; LANES] {
        &mut self.0
    }

    /// Value of lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= LANES`.
    #[inline]
    #[must_use]
    pub const fn lane(&self, i: usize) -> f32 {
        self.0[i]
    }
}

/// Every lane followed by a tab; the caller terminates the line.
impl fmt::Display for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in &self.0 {
            write!(f, "{lane}\t")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_keeps_order() {
        let v = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.lane(0), 1.0);
        assert_eq!(v.lane(3), 4.0);
    }

    #[test]
    fn test_set_descending_reverses() {
        let v = F32x4::set_descending(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(v.lane(0), 4.0);
    }

    #[test]
    fn test_display_tab_separated() {
        let v = F32x4::from_array([5.0, 8.0, 9.0, 8.0]);
        assert_eq!(v.to_string(), "5\t8\t9\t8\t");

        let frac = F32x4::from_array([0.5, 1.25, -2.0, 0.0]);
        assert_eq!(frac.to_string(), "0.5\t1.25\t-2\t0\t");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(core::mem::align_of::<F32x4>(), 16);
        assert_eq!(core::mem::size_of::<F32x4>(), 16);
    }
}

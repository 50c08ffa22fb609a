//! Property-based tests for the arithmetic paths.
//!
//! The native backend and the bulk kernel are checked against the scalar
//! backend and plain `f32` arithmetic, bit for bit.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simd_probe::arch::ScalarBackend;
use simd_probe::bench::multiply_add;
use simd_probe::{F32x4, FmaBuffers, LaneAdd, NativeBackend, PairwiseMul};

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn lanes() -> impl Strategy<Value = [f32; 4]> {
    [finite(), finite(), finite(), finite()]
}

fn bits(v: F32x4) -> [u32; 4] {
    v.to_array().map(f32::to_bits)
}

// =============================================================================
// 4-lane Operations
// =============================================================================

proptest! {
    /// Native multiply agrees with the scalar reference
    #[test]
    fn prop_native_mul_matches_scalar(a in lanes(), b in lanes()) {
        let (a, b) = (F32x4::from_array(a), F32x4::from_array(b));
        prop_assert_eq!(
            bits(NativeBackend::new().mul(a, b)),
            bits(ScalarBackend::new().mul(a, b))
        );
    }

    /// Native add agrees with the scalar reference
    #[test]
    fn prop_native_add_matches_scalar(a in lanes(), b in lanes()) {
        let (a, b) = (F32x4::from_array(a), F32x4::from_array(b));
        prop_assert_eq!(
            bits(NativeBackend::new().add(a, b)),
            bits(ScalarBackend::new().add(a, b))
        );
    }

    /// Descending construction only permutes lanes
    #[test]
    fn prop_set_descending_reverses(e in lanes()) {
        let v = F32x4::set_descending(e[0], e[1], e[2], e[3]);
        let mut rev = e;
        rev.reverse();
        prop_assert_eq!(v.to_array(), rev);
    }
}

// =============================================================================
// Bulk Kernel
// =============================================================================

proptest! {
    /// Slice kernel is plain `a * b + c` per index
    #[test]
    fn prop_multiply_add_matches_reference(
        rows in prop::collection::vec((finite(), finite(), finite()), 0..512)
    ) {
        let a: Vec<f32> = rows.iter().map(|r| r.0).collect();
        let b: Vec<f32> = rows.iter().map(|r| r.1).collect();
        let c: Vec<f32> = rows.iter().map(|r| r.2).collect();
        let mut out = vec![0.0f32; rows.len()];

        multiply_add(&a, &b, &c, &mut out).unwrap();

        for (i, (x, y, z)) in rows.iter().enumerate() {
            prop_assert_eq!(out[i].to_bits(), (x * y + z).to_bits());
        }
    }

    /// Owned buffers agree with the slice kernel for any seed
    #[test]
    fn prop_buffers_match_slice_kernel(seed in any::<u64>(), len in 0usize..2048) {
        let mut buffers = FmaBuffers::random(len, &mut StdRng::seed_from_u64(seed));
        buffers.compute();

        let mut out = vec![0.0f32; len];
        multiply_add(buffers.a(), buffers.b(), buffers.c(), &mut out).unwrap();
        prop_assert_eq!(buffers.result(), &out[..]);
    }
}

#[test]
fn seeded_1024_bit_exact() {
    let mut buffers = FmaBuffers::random(1024, &mut StdRng::seed_from_u64(42));
    buffers.compute();
    for i in 0..1024 {
        let expected = buffers.a()[i] * buffers.b()[i] + buffers.c()[i];
        assert_eq!(buffers.result()[i].to_bits(), expected.to_bits());
    }
}

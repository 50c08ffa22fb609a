//! Bulk multiply-add timing run.
//!
//! Four heap buffers of [`DEFAULT_LEN`] floats, three filled with
//! `Uniform[0, 1)` draws, and one plain scalar loop:
//!
//! ```text
//! result[i] = a[i] * b[i] + c[i]
//! ```
//!
//! The loop is written without intrinsics so the compiler is free to
//! auto-vectorize it. Multiply and add stay separate operations (Rust never
//! contracts them into an FMA), so any vectorization is bit-identical to the
//! scalar reference.
//!
//! Only the loop is timed. Allocation, filling and release are outside the
//! measured region. Allocation failure aborts the process.

use core::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProbeError;

/// Default buffer length: 2^26 floats (256 MiB per buffer).
pub const DEFAULT_LEN: usize = 1 << 26;

/// `out[i] = a[i] * b[i] + c[i]` for every index.
///
/// # Errors
///
/// Returns [`ProbeError::LengthMismatch`] if `b`, `c` or `out` differ in
/// length from `a`.
pub fn multiply_add(a: &[f32], b: &[f32], c: &[f32], out: &mut [f32]) -> Result<(), ProbeError> {
    let expected = a.len();
    for found in [b.len(), c.len(), out.len()] {
        if found != expected {
            return Err(ProbeError::LengthMismatch { expected, found });
        }
    }

    mul_add_into(a, b, c, out);
    Ok(())
}

#[inline]
fn mul_add_into(a: &[f32], b: &[f32], c: &[f32], out: &mut [f32]) {
    for (((r, &x), &y), &z) in out.iter_mut().zip(a).zip(b).zip(c) {
        *r = x * y + z;
    }
}

/// The four benchmark buffers, owned together and released together.
#[derive(Debug, Clone)]
pub struct FmaBuffers {
    a: Vec<f32>,
    b: Vec<f32>,
    c: Vec<f32>,
    result: Vec<f32>,
}

impl FmaBuffers {
    /// Allocate `len` floats per buffer and fill the operands from `rng`.
    ///
    /// `a`, `b` and `c` are drawn in that order from `Uniform[0, 1)`;
    /// `result` starts zeroed.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let dist = Uniform::new(0.0f32, 1.0);
        let fill = |rng: &mut R| -> Vec<f32> { dist.sample_iter(&mut *rng).take(len).collect() };

        let a = fill(&mut *rng);
        let b = fill(&mut *rng);
        let c = fill(&mut *rng);
        Self {
            a,
            b,
            c,
            result: vec![0.0; len],
        }
    }

    /// Elements per buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// True when the buffers hold no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Fill `result` from the operands.
    pub fn compute(&mut self) {
        mul_add_into(&self.a, &self.b, &self.c, &mut self.result);
    }

    /// First operand.
    #[must_use]
    pub fn a(&self) -> &[f32] {
        &self.a
    }

    /// Second operand.
    #[must_use]
    pub fn b(&self) -> &[f32] {
        &self.b
    }

    /// Addend.
    #[must_use]
    pub fn c(&self) -> &[f32] {
        &self.c
    }

    /// Output of the last [`compute`](Self::compute).
    #[must_use]
    pub fn result(&self) -> &[f32] {
        &self.result
    }
}

/// Outcome of one timing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    /// Elements per buffer.
    pub len: usize,
    /// Wall-clock time of the compute loop.
    pub elapsed: Duration,
}

impl BenchReport {
    /// Elapsed whole milliseconds.
    #[must_use]
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "took : {}", self.millis())
    }
}

/// Time `compute()` over buffers seeded from `rng`.
pub fn run_benchmark_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> BenchReport {
    let mut buffers = FmaBuffers::random(len, rng);
    log::debug!(
        "benchmark buffers: 4 x {} floats ({} bytes each)",
        len,
        len * core::mem::size_of::<f32>()
    );

    let start = Instant::now();
    buffers.compute();
    let elapsed = start.elapsed();

    black_box(buffers.result());
    drop(buffers);

    BenchReport { len, elapsed }
}

/// Time `compute()` over `len` floats with an entropy-seeded generator.
pub fn run_benchmark(len: usize) -> BenchReport {
    let mut rng = StdRng::from_entropy();
    run_benchmark_with(len, &mut rng)
}

//! The four-step walkthrough.
//!
//! Steps run strictly in order on the calling thread and share nothing:
//!
//! | Step | Line written |
//! |------|--------------|
//! | vendor | `GenuineIntel` |
//! | multiply | `5\t8\t9\t8\t` |
//! | add | `5\t5\t5\t5\t` |
//! | benchmark (optional) | `took : 123` |
//!
//! The vendor line carries the raw register bytes. A backend that cannot
//! identify the processor leaves it empty and the remaining steps still run.

use std::io::Write;

use crate::arch::Backend;
use crate::bench::{run_benchmark, BenchReport, DEFAULT_LEN};
use crate::error::ProbeError;
use crate::lanes::F32x4;
use crate::vendor::VendorString;

/// Left multiply operand, in memory order.
pub const MUL_LHS: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
/// Right multiply operand.
pub const MUL_RHS: [f32; 4] = [5.0, 4.0, 3.0, 2.0];

/// Left add operand, in `_mm_set_ps` argument order (highest lane first).
pub const ADD_LHS_DESCENDING: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
/// Right add operand, same order.
pub const ADD_RHS_DESCENDING: [f32; 4] = [4.0, 3.0, 2.0, 1.0];

/// Which steps run and how large the benchmark is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourConfig {
    /// Run the bulk multiply-add step.
    pub include_benchmark: bool,
    /// Elements per benchmark buffer.
    pub bench_len: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            include_benchmark: true,
            bench_len: DEFAULT_LEN,
        }
    }
}

/// Values produced by one tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourReport {
    /// Decoded vendor string, `None` when the backend cannot identify the
    /// processor.
    pub vendor: Option<VendorString>,
    /// Multiply result.
    pub product: F32x4,
    /// Add result.
    pub sum: F32x4,
    /// Benchmark timing, when the step ran.
    pub bench: Option<BenchReport>,
}

/// Driver over one backend.
#[derive(Debug, Clone, Default)]
pub struct Tour<B> {
    backend: B,
    config: TourConfig,
}

fn descending(e: [f32; 4]) -> F32x4 {
    F32x4::set_descending(e[0], e[1], e[2], e[3])
}

impl<B: Backend> Tour<B> {
    /// Create a tour.
    #[must_use]
    pub fn new(backend: B, config: TourConfig) -> Self {
        Self { backend, config }
    }

    /// Run every step, writing one line per step to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Io`] if writing fails. Lines already written
    /// stay written. [`ProbeError::Unsupported`] from the vendor probe is
    /// logged and yields an empty vendor line.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<TourReport, ProbeError> {
        log::info!("backend: {}", self.backend.name());

        let vendor = match self.backend.vendor() {
            Ok(vendor) => Some(vendor),
            Err(ProbeError::Unsupported { arch }) => {
                log::warn!("processor identification is not available on {arch}");
                None
            }
            Err(err) => return Err(err),
        };
        if let Some(vendor) = &vendor {
            out.write_all(vendor.as_bytes())?;
        }
        out.write_all(b"\n")?;

        let product = self
            .backend
            .mul(F32x4::from_array(MUL_LHS), F32x4::from_array(MUL_RHS));
        writeln!(out, "{product}")?;

        let sum = self
            .backend
            .add(descending(ADD_LHS_DESCENDING), descending(ADD_RHS_DESCENDING));
        writeln!(out, "{sum}")?;

        let bench = if self.config.include_benchmark {
            log::info!("benchmark: {} elements per buffer", self.config.bench_len);
            let report = run_benchmark(self.config.bench_len);
            writeln!(out, "{report}")?;
            Some(report)
        } else {
            log::debug!("benchmark skipped");
            None
        };

        out.flush()?;
        Ok(TourReport {
            vendor,
            product,
            sum,
            bench,
        })
    }
}

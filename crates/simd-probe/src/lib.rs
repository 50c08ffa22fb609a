//! simd-probe - CPU identification and 128-bit SIMD walkthrough
//!
//! A short, fixed tour of the processor underneath the program:
//!
//! ```text
//! 1. vendor   cpuid leaf 0, ebx:edx:ecx rendered as text
//! 2. mul      {1,2,3,4} * {5,4,3,2} via explicit xmm registers (mulps)
//! 3. add      _mm_set_ps(1,2,3,4) + _mm_set_ps(4,3,2,1) via intrinsics
//! 4. bench    result[i] = a[i] * b[i] + c[i] over 2^26 random floats
//! ```
//!
//! Each step writes one line to the supplied writer. Nothing is shared
//! between steps: where the vendor cannot be read the line is left empty and
//! the arithmetic still runs.
//!
//! # Backends
//!
//! | Target | Backend | Vendor | Multiply | Add |
//! |--------|---------|--------|----------|-----|
//! | x86_64 | [`arch::x86_64::SseBackend`] | `cpuid` (asm) | `mulps` (asm) | `_mm_add_ps` |
//! | aarch64 | [`arch::aarch64::NeonBackend`] | unsupported | `fmul` (asm) | `vaddq_f32` |
//! | any | [`arch::ScalarBackend`] | unsupported | scalar | scalar |
//!
//! # Example: Lane Order
//!
//! ```
//! use simd_probe::F32x4;
//!
//! // `_mm_set_ps` convention: lane 0 receives the last argument.
//! let v = F32x4::set_descending(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.to_array(), [4.0, 3.0, 2.0, 1.0]);
//! ```
//!
//! # Example: Tour
//!
//! ```
//! use simd_probe::arch::ScalarBackend;
//! use simd_probe::{F32x4, LaneAdd, PairwiseMul};
//!
//! let backend = ScalarBackend::new();
//! let product = backend.mul(
//!     F32x4::from_array([1.0, 2.0, 3.0, 4.0]),
//!     F32x4::from_array([5.0, 4.0, 3.0, 2.0]),
//! );
//! assert_eq!(product.to_array(), [5.0, 8.0, 9.0, 8.0]);
//! assert_eq!(product.to_string(), "5\t8\t9\t8\t");
//! ```

pub mod arch;
pub mod bench;
mod error;
mod lanes;
pub mod tour;
mod vendor;

pub use arch::{Backend, LaneAdd, NativeBackend, PairwiseMul, VendorProbe};
pub use bench::{run_benchmark, BenchReport, FmaBuffers, DEFAULT_LEN};
pub use error::ProbeError;
pub use lanes::{F32x4, LANES};
pub use tour::{Tour, TourConfig, TourReport};
pub use vendor::{CpuidRegisters, ProcessorSignature, VendorString, VENDOR_LEN};

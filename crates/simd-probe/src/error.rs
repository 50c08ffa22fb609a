//! Error type shared by the library.

use thiserror::Error;

/// Failures surfaced by the probe.
///
/// Allocation failure in the bulk benchmark is not represented here: it
/// aborts the process through the global allocator.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The backend cannot identify the processor on this architecture.
    #[error("processor identification is not available on {arch}")]
    Unsupported {
        /// Architecture the backend was built for.
        arch: &'static str,
    },

    /// Kernel operands disagree on length.
    #[error("buffer length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Length of the first operand.
        expected: usize,
        /// Length of the offending operand.
        found: usize,
    },

    /// Writing a tour line failed.
    #[error("failed to write probe output")]
    Io(#[from] std::io::Error),
}

//! CPUID register snapshots and their decoded forms.
//!
//! Leaf 0 returns the vendor identification in three registers. The bytes
//! are read in the order `ebx`, `edx`, `ecx`, each little-endian:
//!
//! ```text
//! ebx = 0x756e6547  "Genu"
//! edx = 0x49656e69  "ineI"
//! ecx = 0x6c65746e  "ntel"
//! ```
//!
//! Leaf 1 `eax` carries the processor signature (family, model, stepping).

use core::fmt;

/// Maximum vendor string length: three registers of four bytes.
pub const VENDOR_LEN: usize = 12;

/// Output registers of one `cpuid` execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuidRegisters {
    /// `eax` output.
    pub eax: u32,
    /// `ebx` output.
    pub ebx: u32,
    /// `ecx` output.
    pub ecx: u32,
    /// `edx` output.
    pub edx: u32,
}

impl CpuidRegisters {
    /// Raw vendor bytes in display order (`ebx`, `edx`, `ecx`).
    #[must_use]
    pub fn vendor_bytes(&self) -> [u8; VENDOR_LEN] {
        let mut out = [0u8; VENDOR_LEN];
        for (chunk, reg) in out.chunks_exact_mut(4).zip([self.ebx, self.edx, self.ecx]) {
            chunk.copy_from_slice(&reg.to_le_bytes());
        }
        out
    }
}

/// Processor vendor identification, e.g. `GenuineIntel` or `AuthenticAMD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorString {
    bytes: [u8; VENDOR_LEN],
    len: u8,
}

impl VendorString {
    /// Decode leaf 0 registers. Decoding stops at the first NUL byte.
    #[must_use]
    pub fn from_registers(regs: &CpuidRegisters) -> Self {
        let bytes = regs.vendor_bytes();
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(VENDOR_LEN);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Decoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length in bytes, never more than [`VENDOR_LEN`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True when the first register byte was NUL.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Each byte is rendered as the character with the same code point. Used for
/// log output; the tour writes [`VendorString::as_bytes`] unchanged.
impl fmt::Display for VendorString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.as_bytes() {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

/// Family, model and stepping from leaf 1 `eax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorSignature {
    /// Effective family (base + extended when base is 0xF).
    pub family: u32,
    /// Effective model (extended model prepended for families 0x6 and 0xF).
    pub model: u32,
    /// Stepping id.
    pub stepping: u32,
}

impl ProcessorSignature {
    /// Decode the leaf 1 `eax` signature.
    #[must_use]
    pub const fn from_eax(eax: u32) -> Self {
        let stepping = eax & 0xF;
        let base_model = (eax >> 4) & 0xF;
        let base_family = (eax >> 8) & 0xF;
        let ext_model = (eax >> 16) & 0xF;
        let ext_family = (eax >> 20) & 0xFF;

        let family = if base_family == 0xF {
            base_family + ext_family
        } else {
            base_family
        };
        let model = if base_family == 0x6 || base_family == 0xF {
            (ext_model << 4) | base_model
        } else {
            base_model
        };

        Self {
            family,
            model,
            stepping,
        }
    }
}

impl fmt::Display for ProcessorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "family {:#x} model {:#x} stepping {}",
            self.family, self.model, self.stepping
        )
    }
}

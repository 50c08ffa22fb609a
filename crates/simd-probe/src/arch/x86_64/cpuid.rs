//! `cpuid` via inline assembly and via the compiler intrinsic.
//!
//! `rbx` is reserved by LLVM and cannot be named as an asm operand, so the
//! asm path parks it in a scratch register around the instruction and swaps
//! the result out afterwards.

use core::arch::asm;

use crate::vendor::CpuidRegisters;

/// Leaf 0: highest basic leaf and vendor identification.
pub const LEAF_VENDOR: u32 = 0;

/// Leaf 1: processor signature and feature bits.
pub const LEAF_SIGNATURE: u32 = 1;

/// Execute `cpuid` for `leaf` (subleaf 0) with explicit registers.
#[inline]
#[must_use]
pub fn cpuid_asm(leaf: u32) -> CpuidRegisters {
    let eax: u32;
    let ebx: u64;
    let ecx: u32;
    let edx: u32;

    // SAFETY: cpuid is available on every x86_64 processor, touches no
    // memory and leaves flags alone. rbx is restored by the xchg.
    unsafe {
        asm!(
            "mov {scratch:r}, rbx",
            "cpuid",
            "xchg {scratch:r}, rbx",
            scratch = out(reg) ebx,
            inout("eax") leaf => eax,
            inout("ecx") 0u32 => ecx,
            out("edx") edx,
            options(nomem, nostack, preserves_flags)
        );
    }

    CpuidRegisters {
        eax,
        ebx: ebx as u32,
        ecx,
        edx,
    }
}

/// Execute `cpuid` for `leaf` (subleaf 0) through `__cpuid_count`.
#[inline]
#[must_use]
#[allow(unused_unsafe)]
pub fn cpuid_intrinsic(leaf: u32) -> CpuidRegisters {
    // SAFETY: cpuid is available on every x86_64 processor.
    let r = unsafe { core::arch::x86_64::__cpuid_count(leaf, 0) };
    CpuidRegisters {
        eax: r.eax,
        ebx: r.ebx,
        ecx: r.ecx,
        edx: r.edx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::{ProcessorSignature, VendorString};

    #[test]
    fn test_asm_matches_intrinsic_leaf0() {
        assert_eq!(cpuid_asm(LEAF_VENDOR), cpuid_intrinsic(LEAF_VENDOR));
    }

    #[test]
    fn test_asm_matches_intrinsic_signature() {
        let asm = ProcessorSignature::from_eax(cpuid_asm(LEAF_SIGNATURE).eax);
        let intr = ProcessorSignature::from_eax(cpuid_intrinsic(LEAF_SIGNATURE).eax);
        assert_eq!(asm, intr);
    }

    #[test]
    fn test_leaf0_reports_signature_leaf() {
        // Every processor that runs x86_64 code implements leaf 1.
        assert!(cpuid_asm(LEAF_VENDOR).eax >= LEAF_SIGNATURE);
    }

    #[test]
    fn test_vendor_is_idempotent() {
        let first = VendorString::from_registers(&cpuid_asm(LEAF_VENDOR));
        let second = VendorString::from_registers(&cpuid_asm(LEAF_VENDOR));
        assert_eq!(first, second);
        assert!(first.len() <= crate::vendor::VENDOR_LEN);
    }
}

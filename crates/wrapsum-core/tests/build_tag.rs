//! The summation unit is present on every architecture except 32-bit x86

use wrapsum_core::platform::{require_sum_unit, sum_unit_included, BuildInfo};
use wrapsum_core::{Error, TargetArch, EXCLUDED_ARCH};

#[test]
fn test_excluded_arch_is_32_bit_x86() {
    assert_eq!(EXCLUDED_ARCH, TargetArch::X86);
    assert_eq!(EXCLUDED_ARCH.name(), "x86");
}

#[test]
fn test_inclusion_matches_target() {
    let arch = TargetArch::current();
    assert_eq!(sum_unit_included(), arch != TargetArch::X86);
    assert_eq!(BuildInfo::current().sum_included, sum_unit_included());
}

#[cfg(not(target_arch = "x86"))]
#[test]
fn test_sum_unit_present() {
    assert!(require_sum_unit().is_ok());
    assert_eq!(wrapsum_core::sum::sum(&[1, 2, 3]), 6);
}

#[cfg(target_arch = "x86")]
#[test]
fn test_sum_unit_absent() {
    assert!(matches!(
        require_sum_unit(),
        Err(Error::UnsupportedArchitecture { arch: "x86" })
    ));
}

#[test]
fn test_unsupported_error_message() {
    let err = Error::UnsupportedArchitecture {
        arch: EXCLUDED_ARCH.name(),
    };
    assert!(err.to_string().contains("x86"));
}

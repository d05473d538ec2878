//! Target architecture detection and build-tag introspection
//!
//! The `sum` and `execution` modules carry `#[cfg(not(target_arch = "x86"))]`.
//! This module compiles everywhere, so callers can ask whether those units
//! are present without gating their own code.

use crate::{Error, Result};
use serde::Serialize;

/// Processor architecture the crate was compiled for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(non_camel_case_types)]
pub enum TargetArch {
    /// 32-bit x86
    X86,
    X86_64,
    Arm,
    Aarch64,
    Riscv64,
    Wasm32,
    Other,
}

/// Architecture the summation unit is excluded from
pub const EXCLUDED_ARCH: TargetArch = TargetArch::X86;

impl TargetArch {
    /// Architecture of the current build
    pub const fn current() -> Self {
        if cfg!(target_arch = "x86") {
            Self::X86
        } else if cfg!(target_arch = "x86_64") {
            Self::X86_64
        } else if cfg!(target_arch = "arm") {
            Self::Arm
        } else if cfg!(target_arch = "aarch64") {
            Self::Aarch64
        } else if cfg!(target_arch = "riscv64") {
            Self::Riscv64
        } else if cfg!(target_arch = "wasm32") {
            Self::Wasm32
        } else {
            Self::Other
        }
    }

    /// Name as spelled in `cfg(target_arch = ...)`
    pub const fn name(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Arm => "arm",
            Self::Aarch64 => "aarch64",
            Self::Riscv64 => "riscv64",
            Self::Wasm32 => "wasm32",
            Self::Other => "other",
        }
    }

    /// Whether a build for this architecture contains the summation unit
    pub const fn includes_sum_unit(self) -> bool {
        !matches!(self, EXCLUDED_ARCH)
    }
}

/// Whether this build contains the summation unit
pub const fn sum_unit_included() -> bool {
    cfg!(not(target_arch = "x86"))
}

/// Fail with [`Error::UnsupportedArchitecture`] when the summation unit is absent
pub fn require_sum_unit() -> Result<()> {
    if sum_unit_included() {
        Ok(())
    } else {
        let arch = TargetArch::current().name();
        log::debug!("summation unit excluded for target_arch={arch}");
        Err(Error::UnsupportedArchitecture { arch })
    }
}

/// Summary of what this build contains
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub arch: TargetArch,
    pub sum_included: bool,
    pub parallel: bool,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: crate::VERSION,
            arch: TargetArch::current(),
            sum_included: sum_unit_included(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

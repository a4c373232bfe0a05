//! Benchmark configuration
//!
//! The register address and both iteration counts are calibrated for a
//! particular board and clock. They are plain constants here so a port only
//! has to pick a different preset or override a field.

use core::mem::align_of;

use static_assertions::const_assert;

use crate::core::types::RegisterAddr;
use crate::error::{Error, Result};

/// Debug LED register on the default board
pub const DEFAULT_REGISTER_ADDRESS: RegisterAddr = 0x2000;

/// Debug LED register on the alternate board
pub const ALTERNATE_REGISTER_ADDRESS: RegisterAddr = 0x0800_0000;

/// Spin iterations for the calibration delay
pub const DEFAULT_CALIBRATION_ITERATIONS: u32 = 1_600_000;

/// Iterations of the arithmetic workload
pub const DEFAULT_WORKLOAD_ITERATIONS: u32 = 100_000;

const_assert!(DEFAULT_REGISTER_ADDRESS != 0);
const_assert!(DEFAULT_REGISTER_ADDRESS % align_of::<u32>() == 0);
const_assert!(ALTERNATE_REGISTER_ADDRESS % align_of::<u32>() == 0);

/// Register placement and loop counts for one benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Address of the debug register
    pub register_address: RegisterAddr,
    /// Busy-wait iterations before the workload starts
    pub calibration_iterations: u32,
    /// Arithmetic loop iterations
    pub workload_iterations: u32,
}

impl BenchConfig {
    /// Default board
    pub const DEFAULT: Self = Self {
        register_address: DEFAULT_REGISTER_ADDRESS,
        calibration_iterations: DEFAULT_CALIBRATION_ITERATIONS,
        workload_iterations: DEFAULT_WORKLOAD_ITERATIONS,
    };

    /// Alternate board, register mapped at `0x0800_0000`
    pub const ALTERNATE: Self = Self {
        register_address: ALTERNATE_REGISTER_ADDRESS,
        ..Self::DEFAULT
    };

    /// Preset selected at build time
    pub const fn selected() -> Self {
        if cfg!(feature = "alt-register") {
            Self::ALTERNATE
        } else {
            Self::DEFAULT
        }
    }

    pub const fn with_register_address(mut self, address: RegisterAddr) -> Self {
        self.register_address = address;
        self
    }

    pub const fn with_calibration_iterations(mut self, iterations: u32) -> Self {
        self.calibration_iterations = iterations;
        self
    }

    pub const fn with_workload_iterations(mut self, iterations: u32) -> Self {
        self.workload_iterations = iterations;
        self
    }

    /// Check the register address can back a word-sized volatile store.
    ///
    /// Iteration counts are not checked; zero is a valid (empty) loop.
    pub fn validate(&self) -> Result<()> {
        validate_address(self.register_address)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::selected()
    }
}

/// Reject addresses a `u32` store cannot target
pub fn validate_address(address: RegisterAddr) -> Result<()> {
    if address == 0 || address % align_of::<u32>() != 0 {
        return Err(Error::InvalidAddress(address));
    }
    Ok(())
}

//! ledbench - debug-LED bracketed microbenchmark
//!
//! Marks the start of a run on a memory-mapped debug register, spins for a
//! calibration delay, raises the register to `0xFF`, runs a fixed arithmetic
//! workload and drops the register back to `0x00`. A scope or logic analyzer
//! on the LEDs times the `0xFF` pulse.
//!
//! # Architecture
//!
//! - **MMIO** (`mmio`): volatile register at a fixed address
//! - **Delay** (`delay`): calibrated busy-wait
//! - **Workload** (`workload`): the measured arithmetic loop
//! - **Runner** (`runner`): ties the above together in a fixed order
//! - **Simulation** (`sim`): memory-cell register with a write trace for host runs
//!
//! # Usage
//!
//! ```rust
//! use ledbench::{BenchConfig, BenchmarkRunner, SimRegister};
//!
//! let config = BenchConfig::DEFAULT
//!     .with_calibration_iterations(100)
//!     .with_workload_iterations(10);
//! let mut runner = BenchmarkRunner::new(SimRegister::new(), config);
//! assert_eq!(runner.run().exit_status(), 0);
//! assert!(runner.register().trace().is_bracketed());
//! ```
//!
//! # Features
//!
//! - `baremetal`: builds the binary as a `no_main` image driving the real register
//! - `alt-register`: selects the alternate board's register address

#![cfg_attr(not(test), no_std)]

pub mod delay;
pub mod mmio;
pub mod runner;
pub mod sim;
pub mod workload;

pub use ledbench_api::{
    BenchConfig, BenchPhase, DebugRegister, EXIT_BIND_FAILED, EXIT_SUCCESS, Error, ExitStatus,
    Marker, Result,
};
pub use mmio::VolatileRegister;
pub use runner::{BenchmarkRunner, RunSummary};
pub use sim::{SimRegister, WriteTrace};

/// Run the benchmark on the board's debug register.
///
/// Uses the build-time preset ([`BenchConfig::selected`]). Only meaningful on
/// the target: on a host the preset address is not mapped.
pub fn run() -> ExitStatus {
    // SAFETY: the preset addresses are the boards' debug LED registers.
    unsafe { run_with(BenchConfig::selected()) }
}

/// Run the benchmark on the register at `config.register_address`.
///
/// Returns [`EXIT_BIND_FAILED`] if the register cannot be claimed.
///
/// # Safety
///
/// `config.register_address` must be a writable word register, as required
/// by [`VolatileRegister::new`].
pub unsafe fn run_with(config: BenchConfig) -> ExitStatus {
    // SAFETY: forwarded from the caller.
    let register = match unsafe { VolatileRegister::take(config.register_address) } {
        Ok(register) => register,
        Err(err) => {
            log::error!("cannot bind debug register: {}", err);
            return EXIT_BIND_FAILED;
        }
    };
    log::debug!("debug register bound at {:#x}", register.address());

    let mut runner = BenchmarkRunner::new(register, config);
    let status = runner.run().exit_status();
    runner.into_register().release();
    status
}

/// Run the benchmark on a [`SimRegister`] that calls `hook` on every write.
///
/// Returns the run summary together with the register so its final value
/// and trace can be inspected.
pub fn simulate<H: FnMut(u32)>(config: BenchConfig, hook: H) -> (RunSummary, SimRegister<H>) {
    let mut runner = BenchmarkRunner::new(SimRegister::with_hook(hook), config);
    let summary = runner.run();
    (summary, runner.into_register())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_with_backing_cell() {
        let _serial = mmio::CLAIM_TEST_LOCK.lock();
        let mut cell: u32 = 0xAA;
        let config = BenchConfig::DEFAULT
            .with_register_address((&raw mut cell) as usize)
            .with_calibration_iterations(10)
            .with_workload_iterations(10);
        let status = unsafe { run_with(config) };
        assert_eq!(status, EXIT_SUCCESS);
        assert_eq!(unsafe { core::ptr::read_volatile(&raw const cell) }, 0x00);
    }

    #[test]
    fn run_with_bad_address_fails_cleanly() {
        let _serial = mmio::CLAIM_TEST_LOCK.lock();
        let config = BenchConfig::DEFAULT.with_register_address(0x2001);
        assert_eq!(unsafe { run_with(config) }, EXIT_BIND_FAILED);
    }
}

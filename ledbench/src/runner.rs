//! Benchmark runner
//!
//! Drives one run against any [`DebugRegister`]:
//!
//! 1. write `0x00`, spin for the calibration delay
//! 2. write `0xFF`, run the arithmetic workload
//! 3. write `0x00`
//!
//! The write order never varies. Logging is kept out of the window between
//! the active marker and the end marker so it does not show up in the
//! measurement.

use ledbench_api::{BenchConfig, BenchPhase, DebugRegister, EXIT_SUCCESS, ExitStatus, Marker};

use crate::delay;
use crate::workload::{self, WorkloadReport};

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Calibration loop iterations executed
    pub calibration_spins: u32,
    pub workload: WorkloadReport,
    exit_status: ExitStatus,
}

impl RunSummary {
    /// Status for the entry point to return; always `0`
    pub fn exit_status(&self) -> ExitStatus {
        self.exit_status
    }
}

pub struct BenchmarkRunner<R: DebugRegister> {
    register: R,
    config: BenchConfig,
    phase: BenchPhase,
}

impl<R: DebugRegister> BenchmarkRunner<R> {
    pub fn new(register: R, config: BenchConfig) -> Self {
        Self {
            register,
            config,
            phase: BenchPhase::Idle,
        }
    }

    pub fn phase(&self) -> BenchPhase {
        self.phase
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn register(&self) -> &R {
        &self.register
    }

    pub fn into_register(self) -> R {
        self.register
    }

    /// Run the full marker / delay / workload / marker sequence.
    ///
    /// A runner can be run again; each run starts from [`BenchPhase::Idle`].
    pub fn run(&mut self) -> RunSummary {
        self.phase = BenchPhase::Idle;

        self.enter(BenchPhase::Calibrating);
        let calibration_spins = delay::spin(self.config.calibration_iterations);

        self.enter(BenchPhase::Measuring);
        let workload = workload::run(self.config.workload_iterations);
        self.enter(BenchPhase::Done);

        let summary = RunSummary {
            calibration_spins,
            workload,
            exit_status: EXIT_SUCCESS,
        };
        log::info!(
            "run complete: {} calibration spins, {} workload iterations",
            summary.calibration_spins,
            summary.workload.iterations
        );
        summary
    }

    fn enter(&mut self, phase: BenchPhase) {
        debug_assert_eq!(self.phase.next(), Some(phase));

        // Nothing but the workload may run while the active marker is up.
        let marker = phase.marker().unwrap_or(Marker::Idle);
        if marker == Marker::Active {
            log::debug!("{} -> {}", self.phase, phase);
            self.register.mark(marker);
        } else {
            self.register.mark(marker);
            log::debug!("{} -> {}", self.phase, phase);
        }
        self.phase = phase;
    }
}

//! Core types used throughout ledbench

use core::fmt;

/// Address of a memory-mapped register
pub type RegisterAddr = usize;

/// Status returned by the benchmark entry point
pub type ExitStatus = i32;

/// Exit status of a completed run
pub const EXIT_SUCCESS: ExitStatus = 0;

/// Exit status when the debug register could not be bound
pub const EXIT_BIND_FAILED: ExitStatus = 1;

/// Value written to the debug register to mark a phase boundary.
///
/// External timing equipment sees `Idle -> Active` as the start of the
/// workload and `Active -> Idle` as its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Marker {
    /// LEDs off
    Idle = 0x00,
    /// All LEDs on
    Active = 0xFF,
}

impl Marker {
    /// Raw register value for this marker
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Marker for a raw register value, if it is one
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            0x00 => Some(Marker::Idle),
            0xFF => Some(Marker::Active),
            _ => None,
        }
    }
}

impl From<Marker> for u32 {
    fn from(marker: Marker) -> Self {
        marker.value()
    }
}

/// Where a benchmark run currently is.
///
/// Phases only ever advance: `Idle`, `Calibrating`, `Measuring`, `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BenchPhase {
    /// Nothing written yet
    #[default]
    Idle,
    /// Start marker written, spinning for the calibration delay
    Calibrating,
    /// Active marker written, workload running
    Measuring,
    /// End marker written
    Done,
}

impl BenchPhase {
    /// Phase that follows this one, `None` once the run is done
    pub const fn next(self) -> Option<Self> {
        match self {
            BenchPhase::Idle => Some(BenchPhase::Calibrating),
            BenchPhase::Calibrating => Some(BenchPhase::Measuring),
            BenchPhase::Measuring => Some(BenchPhase::Done),
            BenchPhase::Done => None,
        }
    }

    /// Marker that is on the register while in this phase
    pub const fn marker(self) -> Option<Marker> {
        match self {
            BenchPhase::Idle => None,
            BenchPhase::Calibrating | BenchPhase::Done => Some(Marker::Idle),
            BenchPhase::Measuring => Some(Marker::Active),
        }
    }
}

impl fmt::Display for BenchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BenchPhase::Idle => "idle",
            BenchPhase::Calibrating => "calibrating",
            BenchPhase::Measuring => "measuring",
            BenchPhase::Done => "done",
        };
        f.write_str(name)
    }
}

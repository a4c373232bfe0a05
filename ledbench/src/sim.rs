//! Host simulation of the debug register
//!
//! The register becomes a plain memory cell. Every write is recorded in a
//! fixed-capacity trace and handed to a write hook, so tests and the host
//! binary can check the marker protocol without hardware.

use heapless::Vec;
use ledbench_api::{DebugRegister, Marker};
use static_assertions::const_assert;

/// Writes kept by a [`WriteTrace`]; a run needs three
pub const TRACE_CAPACITY: usize = 16;

const_assert!(TRACE_CAPACITY >= 3);

/// Values written to a simulated register, oldest first
#[derive(Debug, Clone, Default)]
pub struct WriteTrace {
    writes: Vec<u32, TRACE_CAPACITY>,
    dropped: usize,
}

impl WriteTrace {
    pub const fn new() -> Self {
        Self {
            writes: Vec::new(),
            dropped: 0,
        }
    }

    /// Append a write; once full, later writes are only counted
    pub fn record(&mut self, value: u32) {
        if self.writes.push(value).is_err() {
            self.dropped += 1;
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Writes that did not fit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn last(&self) -> Option<u32> {
        self.writes.last().copied()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.dropped = 0;
    }

    /// True for exactly one run's worth of markers: idle, active, idle
    pub fn is_bracketed(&self) -> bool {
        self.dropped == 0
            && self.as_slice()
                == [
                    Marker::Idle.value(),
                    Marker::Active.value(),
                    Marker::Idle.value(),
                ]
    }
}

fn ignore_write(_value: u32) {}

/// Memory-cell stand-in for the hardware register
pub struct SimRegister<H = fn(u32)> {
    cell: u32,
    trace: WriteTrace,
    hook: H,
}

impl SimRegister {
    /// Simulated register without a write hook
    pub fn new() -> Self {
        Self::with_hook(ignore_write)
    }
}

impl Default for SimRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FnMut(u32)> SimRegister<H> {
    /// Simulated register calling `hook` after every write
    pub fn with_hook(hook: H) -> Self {
        Self {
            cell: 0,
            trace: WriteTrace::new(),
            hook,
        }
    }

    /// Last value written, `0` before any write
    pub fn value(&self) -> u32 {
        self.cell
    }

    pub fn trace(&self) -> &WriteTrace {
        &self.trace
    }

    pub fn into_trace(self) -> WriteTrace {
        self.trace
    }
}

impl<H: FnMut(u32)> DebugRegister for SimRegister<H> {
    fn write(&mut self, value: u32) {
        self.cell = value;
        self.trace.record(value);
        (self.hook)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_holds_last_write() {
        let mut reg = SimRegister::new();
        assert_eq!(reg.value(), 0);
        reg.write(0x12);
        reg.write(0x34);
        assert_eq!(reg.value(), 0x34);
        assert_eq!(reg.trace().as_slice(), &[0x12, 0x34]);
    }

    #[test]
    fn hook_sees_every_write() {
        let mut seen = 0u32;
        let mut reg = SimRegister::with_hook(|value| seen = seen.wrapping_add(value));
        reg.mark(Marker::Active);
        reg.mark(Marker::Active);
        drop(reg);
        assert_eq!(seen, 0x1FE);
    }

    #[test]
    fn full_trace_counts_dropped_writes() {
        let mut trace = WriteTrace::new();
        for value in 0..(TRACE_CAPACITY as u32 + 3) {
            trace.record(value);
        }
        assert_eq!(trace.len(), TRACE_CAPACITY);
        assert_eq!(trace.dropped(), 3);
        assert_eq!(trace.last(), Some(TRACE_CAPACITY as u32 - 1));

        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.dropped(), 0);
    }

    #[test]
    fn bracketed_requires_exact_sequence() {
        let mut trace = WriteTrace::new();
        assert!(!trace.is_bracketed());
        for value in [0x00, 0xFF, 0x00] {
            trace.record(value);
        }
        assert!(trace.is_bracketed());
        trace.record(0xFF);
        assert!(!trace.is_bracketed());
    }
}

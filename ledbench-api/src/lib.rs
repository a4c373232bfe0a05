//! ledbench API - Core types and interfaces for the debug-LED microbenchmark
//!
//! This crate provides the types shared between the benchmark runtime, the
//! bare-metal entry point and the host-side tests. It has no dependency on a
//! particular register backend.
//!
//! # Architecture
//!
//! - **Core**: the `DebugRegister` seam, marker values and run phases
//! - **Config**: register address and iteration counts
//! - **Error**: construction-time error type
//!
//! # Usage
//!
//! ```rust
//! use ledbench_api::{BenchConfig, DebugRegister, Marker};
//!
//! struct Cell(u32);
//!
//! impl DebugRegister for Cell {
//!     fn write(&mut self, value: u32) {
//!         self.0 = value;
//!     }
//! }
//!
//! let config = BenchConfig::DEFAULT.with_workload_iterations(10);
//! assert!(config.validate().is_ok());
//!
//! let mut cell = Cell(0);
//! cell.mark(Marker::Active);
//! assert_eq!(cell.0, 0xFF);
//! ```

#![no_std]

pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::config::BenchConfig;
pub use crate::core::traits::DebugRegister;
pub use crate::core::types::*;
pub use crate::error::{Error, Result};

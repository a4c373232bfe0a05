//! Core module containing the register seam and the benchmark's value types

pub mod traits;
pub mod types;

// Re-export commonly used items
pub use traits::*;
pub use types::*;

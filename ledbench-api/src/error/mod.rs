//! Error handling module for ledbench
//!
//! The benchmark itself has no run-time failure path. Errors only arise while
//! binding a register or checking a configuration.

use core::fmt;

/// Common error type used throughout ledbench
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Register address is null or not word aligned
    InvalidAddress(usize),
    /// Register at this address is already owned by another runner
    Busy(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAddress(addr) => write!(f, "Invalid register address: {:#x}", addr),
            Error::Busy(addr) => write!(f, "Register busy: {:#x}", addr),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn display_formats_addresses_as_hex() {
        assert_eq!(
            Error::InvalidAddress(0x2001).to_string(),
            "Invalid register address: 0x2001"
        );
        assert_eq!(Error::Busy(0x2000).to_string(), "Register busy: 0x2000");
    }
}

//! Volatile memory-mapped debug register
//!
//! The only place in the crate that turns an integer address into a pointer.

use core::ptr::{self, NonNull};

use ledbench_api::config::validate_address;
use ledbench_api::{DebugRegister, Error, RegisterAddr, Result};
use spin::Mutex;

/// Address of the register currently claimed through [`VolatileRegister::take`]
static CLAIMED: Mutex<Option<RegisterAddr>> = Mutex::new(None);

/// Serializes tests that go through the global claim
#[cfg(test)]
pub(crate) static CLAIM_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Word-sized register written with volatile stores
#[derive(Debug)]
pub struct VolatileRegister {
    ptr: NonNull<u32>,
    /// Holds the global claim; only then does dropping free it
    claimed: bool,
}

impl VolatileRegister {
    /// Bind a register at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be a writable, word-sized register (or memory cell) for
    /// as long as the returned value is alive, and nothing else may hold a
    /// Rust reference to it.
    pub unsafe fn new(address: RegisterAddr) -> Result<Self> {
        validate_address(address)?;
        let ptr = NonNull::new(address as *mut u32).ok_or(Error::InvalidAddress(address))?;
        Ok(Self {
            ptr,
            claimed: false,
        })
    }

    /// Claim exclusive ownership of the register at `address`.
    ///
    /// Fails with [`Error::Busy`] while another claimed register is alive.
    /// The claim is freed when the returned register is dropped.
    ///
    /// # Safety
    ///
    /// Same contract as [`VolatileRegister::new`].
    pub unsafe fn take(address: RegisterAddr) -> Result<Self> {
        let mut claimed = CLAIMED.lock();
        if let Some(owner) = *claimed {
            return Err(Error::Busy(owner));
        }
        // SAFETY: forwarded from the caller.
        let mut register = unsafe { Self::new(address)? };
        register.claimed = true;
        *claimed = Some(address);
        Ok(register)
    }

    /// Give up the register, and its claim if it holds one
    pub fn release(self) {
        drop(self);
    }

    /// Whether this register holds the claim made by [`VolatileRegister::take`]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn address(&self) -> RegisterAddr {
        self.ptr.as_ptr() as RegisterAddr
    }
}

impl Drop for VolatileRegister {
    fn drop(&mut self) {
        if self.claimed {
            *CLAIMED.lock() = None;
        }
    }
}

impl DebugRegister for VolatileRegister {
    #[inline(always)]
    fn write(&mut self, value: u32) {
        // SAFETY: validity of the address is the constructor's contract.
        unsafe { ptr::write_volatile(self.ptr.as_ptr(), value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledbench_api::Marker;

    #[test]
    fn writes_reach_backing_cell() {
        let mut cell: u32 = 0xDEAD;
        let address = (&raw mut cell) as RegisterAddr;
        let mut reg = unsafe { VolatileRegister::new(address) }.unwrap();
        assert_eq!(reg.address(), address);

        reg.mark(Marker::Active);
        assert_eq!(unsafe { ptr::read_volatile(&raw const cell) }, 0xFF);
        reg.mark(Marker::Idle);
        assert_eq!(unsafe { ptr::read_volatile(&raw const cell) }, 0x00);
    }

    #[test]
    fn rejects_bad_addresses() {
        assert_eq!(
            unsafe { VolatileRegister::new(0) }.unwrap_err(),
            Error::InvalidAddress(0)
        );
        assert_eq!(
            unsafe { VolatileRegister::new(0x2001) }.unwrap_err(),
            Error::InvalidAddress(0x2001)
        );
    }

    #[test]
    fn take_is_exclusive_until_released() {
        let _serial = CLAIM_TEST_LOCK.lock();
        let mut first: u32 = 0;
        let mut second: u32 = 0;
        let first_addr = (&raw mut first) as RegisterAddr;
        let second_addr = (&raw mut second) as RegisterAddr;

        let reg = unsafe { VolatileRegister::take(first_addr) }.unwrap();
        assert_eq!(
            unsafe { VolatileRegister::take(second_addr) }.unwrap_err(),
            Error::Busy(first_addr)
        );

        // A failed bind must not leave a claim behind.
        reg.release();
        assert_eq!(
            unsafe { VolatileRegister::take(0x3) }.unwrap_err(),
            Error::InvalidAddress(0x3)
        );

        let reg = unsafe { VolatileRegister::take(second_addr) }.unwrap();
        assert_eq!(reg.address(), second_addr);
        assert!(reg.is_claimed());
        reg.release();
    }

    #[test]
    fn unclaimed_register_cannot_free_the_claim() {
        let _serial = CLAIM_TEST_LOCK.lock();
        let mut first: u32 = 0;
        let mut second: u32 = 0;
        let first_addr = (&raw mut first) as RegisterAddr;
        let second_addr = (&raw mut second) as RegisterAddr;

        let owner = unsafe { VolatileRegister::take(first_addr) }.unwrap();
        let alias = unsafe { VolatileRegister::new(first_addr) }.unwrap();
        assert!(!alias.is_claimed());
        alias.release();

        assert_eq!(
            unsafe { VolatileRegister::take(second_addr) }.unwrap_err(),
            Error::Busy(first_addr)
        );
        drop(owner);
    }

    #[test]
    fn dropping_claimed_register_frees_the_claim() {
        let _serial = CLAIM_TEST_LOCK.lock();
        let mut cell: u32 = 0;
        let address = (&raw mut cell) as RegisterAddr;

        drop(unsafe { VolatileRegister::take(address) }.unwrap());
        let again = unsafe { VolatileRegister::take(address) }.unwrap();
        assert!(again.is_claimed());
    }
}

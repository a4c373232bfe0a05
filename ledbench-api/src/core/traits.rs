//! Core traits used throughout ledbench

use super::types::Marker;

/// A write-only, word-sized debug register.
///
/// Implementations must make every write visible to whatever is watching the
/// register, in program order. The hardware backend does this with volatile
/// stores; the host simulation records each write.
pub trait DebugRegister {
    /// Store `value` into the register
    fn write(&mut self, value: u32);

    /// Store a phase marker
    #[inline]
    fn mark(&mut self, marker: Marker) {
        self.write(marker.value());
    }
}

impl<R: DebugRegister + ?Sized> DebugRegister for &mut R {
    #[inline]
    fn write(&mut self, value: u32) {
        (**self).write(value);
    }
}

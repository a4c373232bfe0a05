//! Calibration busy-wait

use core::hint::black_box;

/// Spin for exactly `iterations` loop iterations and return how many ran.
///
/// The elapsed time depends on the core and its clock; the count is
/// calibrated per board. Both the bound and the counter pass through
/// `black_box` so the loop survives optimization even though it does nothing.
#[inline(never)]
pub fn spin(iterations: u32) -> u32 {
    let mut executed: u32 = 0;
    for _ in 0..black_box(iterations) {
        executed = black_box(executed + 1);
    }
    executed
}

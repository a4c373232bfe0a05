//! Arithmetic workload measured between the LED markers
//!
//! Each iteration does one integer multiply, one float multiply, one float
//! divide and one float multiply by an immediate. Nothing is carried from one
//! iteration to the next, so every iteration produces the same sample.

use core::hint::black_box;

/// Integer operand
pub const A: i32 = 1062;

/// Float operand
pub const B: f32 = 2653.0;

/// Immediate for the last multiply
pub const IMMEDIATE: f32 = 12.0;

/// Results of one iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadSample {
    /// `A * 2653`, an integer multiply (`B` converted to `i32`)
    pub product: i32,
    /// `product * B`
    pub scaled: f32,
    /// `A / B`
    pub ratio: f32,
    /// `IMMEDIATE * ratio`
    pub ratio_x12: f32,
}

impl WorkloadSample {
    /// Bit-for-bit equality, including the float fields
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.product == other.product
            && self.scaled.to_bits() == other.scaled.to_bits()
            && self.ratio.to_bits() == other.ratio.to_bits()
            && self.ratio_x12.to_bits() == other.ratio_x12.to_bits()
    }
}

/// Outcome of a workload run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadReport {
    pub iterations: u32,
    /// Sample from the final iteration, `None` when no iteration ran
    pub last: Option<WorkloadSample>,
}

/// One iteration of the workload.
///
/// The operands go through `black_box` so none of the four operations can be
/// folded at compile time.
#[inline(always)]
pub fn step() -> WorkloadSample {
    let a = black_box(A);
    let b = black_box(B);

    let product = a.wrapping_mul(b as i32);
    let scaled = product as f32 * b;
    let ratio = a as f32 / b;
    let ratio_x12 = IMMEDIATE * ratio;

    WorkloadSample {
        product,
        scaled,
        ratio,
        ratio_x12,
    }
}

/// Run `iterations` iterations, discarding every sample through `black_box`
#[inline(never)]
pub fn run(iterations: u32) -> WorkloadReport {
    let mut last = None;
    for _ in 0..black_box(iterations) {
        last = Some(black_box(step()));
    }
    WorkloadReport { iterations, last }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_product() {
        assert_eq!(step().product, 2_817_486);
    }

    #[test]
    fn float_results() {
        let sample = step();
        assert!((sample.scaled as f64 - 7_474_790_358.0).abs() < 1024.0);
        assert!((sample.ratio - 1062.0 / 2653.0).abs() < 1e-6);
        assert!((sample.ratio_x12 - 4.803_618).abs() < 1e-5);
    }

    #[test]
    fn iterations_are_identical() {
        let first = step();
        for _ in 0..1_000 {
            assert!(step().bits_eq(&first));
        }
    }

    #[test]
    fn run_reports_last_sample() {
        let report = run(100);
        assert_eq!(report.iterations, 100);
        assert!(report.last.unwrap().bits_eq(&step()));
    }

    #[test]
    fn empty_run_has_no_sample() {
        assert_eq!(run(0).last, None);
    }
}

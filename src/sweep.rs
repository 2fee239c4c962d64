//! The exponent sweep: the ordered list of powers for which one frame
//! each is rendered.  Values are computed as `start + i * step` rather
//! than by repeated addition, so that rounding never drifts the count.

use errors::{Error, Result};

/// First exponent of the default sweep.
pub const START: f64 = 1.0;

/// Increment between successive exponents.
pub const STEP: f64 = 0.02;

/// An iterator over the exponents `start, start + step, ...` that are
/// strictly below `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    start: f64,
    step: f64,
    count: usize,
    next: usize,
}

impl Sweep {
    /// Build a sweep.  An `end` at or below `start` yields an empty
    /// sweep rather than an error.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Sweep> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(Error::Sweep("sweep bounds must be finite".to_string()));
        }
        if step <= 0.0 {
            return Err(Error::Sweep(format!("step must be positive, got {}", step)));
        }
        let span = (end - start) / step;
        let mut count = if span > 0.0 { span.ceil() as usize } else { 0 };
        // The division can round either way by a step; settle the count
        // against the values the iterator will actually produce.  Bounded,
        // since far out a single step no longer moves the float.
        for _ in 0..2 {
            if count > 0 && start + ((count - 1) as f64) * step >= end {
                count -= 1;
            }
        }
        for _ in 0..2 {
            if count < ::std::usize::MAX && start + (count as f64) * step < end {
                count += 1;
            }
        }
        Ok(Sweep {
            start,
            step,
            count,
            next: 0,
        })
    }

    /// The default sweep from 1.0 up to `end`.
    pub fn up_to(end: f64) -> Result<Sweep> {
        Sweep::new(START, end, STEP)
    }
}

impl Iterator for Sweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let power = self.start + (self.next as f64) * self.step;
        self.next += 1;
        Some(power)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Sweep {}

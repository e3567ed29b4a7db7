//! Single color component moving along a linear gradient.

use crate::error::{Error, Result};

/// One RGB component (red, green or blue) advancing by a fixed increment.
///
/// The value at step `s` is `round(value + s * increment)`, clamped to
/// `[min, max]`. What happens at a bound depends on `bounce`:
///
/// - `bounce = false`: the component saturates and keeps returning the
///   bound while the direction stays unchanged.
/// - `bounce = true`: the component re-anchors at the bound and reverses,
///   so `250, +10, max 255` yields `250, 255, 245, 235, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTracker {
    value: u8,
    increment: f64,
    min: u8,
    max: u8,
    bounce: bool,
    step: i64,
    direction: i64,
}

impl ColorTracker {
    /// Create a tracker starting at `value`.
    ///
    /// Fails when `min > max`, `value` lies outside `[min, max]`, or
    /// `increment` is NaN or infinite.
    pub fn new(value: u8, increment: f64, min: u8, max: u8, bounce: bool) -> Result<Self> {
        if !increment.is_finite() {
            return Err(Error::NonFiniteIncrement(increment));
        }
        if min > max {
            return Err(Error::InvalidBounds { min, max });
        }
        if !(min..=max).contains(&value) {
            return Err(Error::ValueOutOfRange { value, min, max });
        }
        Ok(Self {
            value,
            increment,
            min,
            max,
            bounce,
            step: 0,
            direction: 1,
        })
    }

    /// Return the value for the current step, then move one step on.
    pub fn advance(&mut self) -> u8 {
        let raw = f64::from(self.value) + self.step as f64 * self.increment;
        let out = if raw > f64::from(self.max) {
            self.hit(self.max)
        } else if raw < f64::from(self.min) {
            self.hit(self.min)
        } else {
            // raw is within [min, max] so rounding stays in u8 range
            raw.round_ties_even() as u8
        };
        self.step += self.direction;
        out
    }

    /// Start over from `value` at step 0, moving forward.
    pub fn reset_to(&mut self, value: u8) {
        self.value = value.clamp(self.min, self.max);
        self.step = 0;
        self.direction = 1;
    }

    /// The anchor value steps are counted from.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// `+1` while moving forward, `-1` after an odd number of bounces.
    pub fn direction(&self) -> i64 {
        self.direction
    }

    fn hit(&mut self, bound: u8) -> u8 {
        if self.bounce {
            self.value = bound;
            self.step = 0;
            self.direction = -self.direction;
        }
        bound
    }
}

//! The contract shared by every animation.
//!
//! An animation is built once from a strip length, a [`PixelSink`] and its
//! configuration, then driven one tick at a time. Each tick writes every pixel
//! exactly once, in index order, and steps an internal counter that wraps at
//! the animation's period. Output depends only on the construction inputs and
//! the number of ticks so far.
//!
//! Animations hold no locks. A driver must serialize ticks on one instance;
//! separate instances share nothing and can run on separate threads.

use crate::sink::PixelSink;
use crate::types::ConfigError;

/// A tick-driven strip animation.
pub trait Animation {
    /// The sink this animation writes to.
    type Sink: PixelSink;

    /// Writes one frame to the sink and moves to the next iteration.
    ///
    /// Calls `set_pixel` exactly once for each index in `0..pixel_count()`.
    /// Does not call `present`.
    fn advance(&mut self);

    /// Number of pixels written per tick.
    fn pixel_count(&self) -> usize;

    /// Ticks after which the iteration counter returns to 0.
    fn period(&self) -> usize;

    /// Current iteration counter, always below `period()`.
    fn iteration(&self) -> usize;

    fn sink(&self) -> &Self::Sink;

    fn sink_mut(&mut self) -> &mut Self::Sink;

    /// Advances and presents the frame.
    fn tick(&mut self) {
        self.advance();
        self.sink_mut().present();
    }
}

/// Greatest common divisor.
pub const fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of a strip length and a table length.
///
/// This is the number of ticks after which a scrolling table lines up with
/// the strip again.
///
/// # Errors
/// * `ZeroLength` / `ZeroSteps` - Either input is zero
/// * `PeriodOverflow` - The result does not fit in `usize`
pub fn cycle_length(length: usize, steps: usize) -> Result<usize, ConfigError> {
    if length == 0 {
        return Err(ConfigError::ZeroLength);
    }
    if steps == 0 {
        return Err(ConfigError::ZeroSteps);
    }

    (length / gcd(length, steps))
        .checked_mul(steps)
        .ok_or(ConfigError::PeriodOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_coprime_numbers_is_one() {
        assert_eq!(gcd(3, 2), 1);
        assert_eq!(gcd(9, 28), 1);
    }

    #[test]
    fn gcd_handles_zero() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
    }

    #[test]
    fn cycle_length_is_least_common_multiple() {
        assert_eq!(cycle_length(3, 2), Ok(6));
        assert_eq!(cycle_length(4, 6), Ok(12));
        assert_eq!(cycle_length(60, 60), Ok(60));
        assert_eq!(cycle_length(1, 5), Ok(5));
    }

    #[test]
    fn cycle_length_rejects_zero() {
        assert_eq!(cycle_length(0, 4), Err(ConfigError::ZeroLength));
        assert_eq!(cycle_length(4, 0), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn cycle_length_detects_overflow() {
        assert_eq!(
            cycle_length(usize::MAX, usize::MAX - 1),
            Err(ConfigError::PeriodOverflow)
        );
    }
}

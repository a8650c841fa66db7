//! Minimal animation showing one fixed color.

use crate::animation::Animation;
use crate::colors::{PackedColor, pack};
use crate::sink::PixelSink;
use crate::types::ConfigError;

/// Lights every pixel with [`Template::COLOR`] on every tick.
///
/// Ignores all configuration and never changes state. Useful as a starting
/// point for new animations and for checking a sink is wired up.
pub struct Template<S: PixelSink> {
    sink: S,
    length: usize,
}

impl<S: PixelSink> Template<S> {
    /// Magenta.
    pub const COLOR: PackedColor = pack(255, 0, 255);

    /// # Errors
    /// * `ZeroLength` - `length` is 0
    pub fn new(length: usize, sink: S) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(Self { sink, length })
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: PixelSink> Animation for Template<S> {
    type Sink = S;

    fn advance(&mut self) {
        for i in 0..self.length {
            self.sink.set_pixel(i, Self::COLOR);
        }
    }

    fn pixel_count(&self) -> usize {
        self.length
    }

    fn period(&self) -> usize {
        1
    }

    fn iteration(&self) -> usize {
        0
    }

    fn sink(&self) -> &S {
        &self.sink
    }

    fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

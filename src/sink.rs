//! Pixel sink abstraction and an in-memory strip.
//!
//! Animations never own strip memory; they address pixels through a
//! [`PixelSink`]. Implement it for your LED driver (SPI, RMT, PIO, ...) or use
//! [`PixelBuffer`] to render into memory, e.g. for a simulator window or tests.

use crate::colors::PackedColor;

/// Trait for abstracting addressable LED strips.
///
/// Animations call [`set_pixel`](PixelSink::set_pixel) once for every index on
/// every tick. Pushing the frame out is the driver's job and happens in
/// [`present`](PixelSink::present). Handle any hardware errors internally -
/// these methods cannot fail.
pub trait PixelSink {
    /// Sets pixel `index` to `color` in the pending frame.
    fn set_pixel(&mut self, index: usize, color: PackedColor);

    /// Pushes the pending frame to the strip.
    fn present(&mut self) {}
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    #[inline]
    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        (**self).set_pixel(index, color);
    }

    #[inline]
    fn present(&mut self) {
        (**self).present();
    }
}

/// A strip of `N` pixels kept in memory.
///
/// `set_pixel` writes the pending buffer; `present` copies it to the shown
/// frame and counts it. Writes past the end of the strip are dropped.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pending: [PackedColor; N],
    shown: [PackedColor; N],
    frames: u32,
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates a dark strip.
    pub const fn new() -> Self {
        Self {
            pending: [PackedColor::BLACK; N],
            shown: [PackedColor::BLACK; N],
            frames: 0,
        }
    }

    /// Number of pixels on the strip.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Pixels written since the last `present`, not yet shown.
    pub fn pending(&self) -> &[PackedColor] {
        &self.pending
    }

    /// The last presented frame.
    pub fn shown(&self) -> &[PackedColor] {
        &self.shown
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelSink for PixelBuffer<N> {
    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        if let Some(pixel) = self.pending.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) {
        self.shown = self.pending;
        self.frames = self.frames.wrapping_add(1);
    }
}

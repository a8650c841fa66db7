//! Shared test infrastructure for strip-animations integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animations::{Animation, PackedColor, PixelSink};

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every `set_pixel` call
pub struct MockSink {
    calls: Vec<(usize, PackedColor)>,
    presents: usize,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            presents: 0,
        }
    }

    pub fn calls(&self) -> &[(usize, PackedColor)] {
        &self.calls
    }

    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Returns the recorded calls and starts a fresh recording
    pub fn take_calls(&mut self) -> Vec<(usize, PackedColor)> {
        std::mem::take(&mut self.calls)
    }
}

impl PixelSink for MockSink {
    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        self.calls.push((index, color));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_animations::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Advances once and returns the frame, checking that every index was written
/// exactly once and in order
pub fn next_frame<A: Animation<Sink = MockSink>>(animation: &mut A) -> Vec<PackedColor> {
    animation.advance();
    let calls = animation.sink_mut().take_calls();

    assert_eq!(calls.len(), animation.pixel_count());
    for (expected, (index, _)) in calls.iter().enumerate() {
        assert_eq!(*index, expected);
    }

    calls.into_iter().map(|(_, color)| color).collect()
}

/// Collects `count` consecutive frames
pub fn frames<A: Animation<Sink = MockSink>>(animation: &mut A, count: usize) -> Vec<Vec<PackedColor>> {
    (0..count).map(|_| next_frame(animation)).collect()
}

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PackedColor`**: A 24-bit `0xRRGGBB` color, the unit every sink receives
//! - **`PixelSink`**: Trait to implement for your strip hardware or simulator
//! - **`Animation`**: The per-tick contract every animation implements
//! - **`Fade`**: Fades through configured colors, whole strip or scrolling
//! - **`Rainbow`**: Cycles the hue wheel, whole strip or scrolling
//! - **`Template`**: Fixed color, the smallest possible animation
//! - **`AnyAnimation`**: Picks one of the above by name at runtime
//! - **`PixelBuffer`**: An in-memory strip for simulation and tests
//!
//! Color tables are computed once at construction and stored in fixed-capacity
//! `heapless` vectors, so no allocator is needed. After construction the only
//! state that changes is the iteration counter.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod colors;
pub mod fade;
pub mod kind;
pub mod rainbow;
pub mod sink;
pub mod template;
pub mod types;

pub use animation::{Animation, cycle_length, gcd};
pub use colors::{ColorFormatError, PackedColor};
pub use fade::Fade;
pub use kind::{AnimationKind, AnyAnimation};
pub use rainbow::Rainbow;
pub use sink::{PixelBuffer, PixelSink};
pub use template::Template;
pub use types::{AnimationConfig, ConfigError, FadeConfig, RainbowConfig, UpdatePolicy};

pub const BLACK: PackedColor = colors::pack(0, 0, 0);
pub const WHITE: PackedColor = colors::pack(255, 255, 255);
pub const RED: PackedColor = colors::pack(255, 0, 0);
pub const GREEN: PackedColor = colors::pack(0, 255, 0);
pub const BLUE: PackedColor = colors::pack(0, 0, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_constants_match_hex() {
        assert_eq!(colors::from_hex("#000000"), Ok(BLACK));
        assert_eq!(colors::from_hex("#ffffff"), Ok(WHITE));
        assert_eq!(colors::from_hex("#ff0000"), Ok(RED));
        assert_eq!(colors::from_hex("#00ff00"), Ok(GREEN));
        assert_eq!(colors::from_hex("#0000ff"), Ok(BLUE));
    }
}

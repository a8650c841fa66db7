//! Packed color encoding and color space helpers.
//!
//! Pixel sinks consume [`PackedColor`], a 24-bit `0xRRGGBB` value. This module
//! converts between that encoding, hex strings and HSL color wheel positions.
//! HSL conversions go through `palette` and round each channel to the nearest
//! 8-bit value.

use core::fmt;
use core::str::FromStr;

use palette::{FromColor, Hsl, Srgb};

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// The inner value is always below `2^24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(u32);

impl PackedColor {
    /// Black, `#000000`.
    pub const BLACK: Self = Self(0);

    /// Largest valid packed value, `#ffffff`.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Packs three 8-bit channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Wraps a raw value, or `None` if it does not fit in 24 bits.
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    #[inline]
    pub const fn into_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for PackedColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_hex(s)
    }
}

impl From<Srgb<u8>> for PackedColor {
    fn from(color: Srgb<u8>) -> Self {
        Self::from_rgb(color.red, color.green, color.blue)
    }
}

impl From<PackedColor> for Srgb<u8> {
    fn from(color: PackedColor) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

/// Hex color string errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorFormatError {
    /// Not exactly six digits after the optional `#`.
    InvalidLength,

    /// A character outside `0-9`, `a-f`, `A-F`.
    InvalidDigit,
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormatError::InvalidLength => {
                write!(f, "hex color must have exactly 6 digits")
            }
            ColorFormatError::InvalidDigit => {
                write!(f, "hex color contains a non-hex character")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorFormatError {}

/// Packs three 8-bit channels into a [`PackedColor`].
#[inline]
pub const fn pack(red: u8, green: u8, blue: u8) -> PackedColor {
    PackedColor::from_rgb(red, green, blue)
}

/// Packs wider channel values, keeping only the low 8 bits of each.
///
/// `pack_truncating(256, 0, 0)` is black, not red. Clamp first if that is
/// not what you want.
#[inline]
pub const fn pack_truncating(red: u32, green: u32, blue: u32) -> PackedColor {
    PackedColor(((red & 0xFF) << 16) | ((green & 0xFF) << 8) | (blue & 0xFF))
}

/// Splits a packed color into `(red, green, blue)`.
#[inline]
pub const fn unpack(color: PackedColor) -> (u8, u8, u8) {
    (color.red(), color.green(), color.blue())
}

/// Parses `RRGGBB` or `#RRGGBB`, case-insensitive.
pub fn from_hex(hex: &str) -> Result<PackedColor, ColorFormatError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 {
        return Err(ColorFormatError::InvalidLength);
    }

    let nibble = |c: u8| -> Result<u32, ColorFormatError> {
        match c {
            b'0'..=b'9' => Ok(u32::from(c - b'0')),
            b'a'..=b'f' => Ok(u32::from(c - b'a' + 10)),
            b'A'..=b'F' => Ok(u32::from(c - b'A' + 10)),
            _ => Err(ColorFormatError::InvalidDigit),
        }
    };

    let mut value = 0;
    for &c in digits {
        value = (value << 4) | nibble(c)?;
    }

    Ok(PackedColor(value))
}

/// Creates a packed color from HSL components.
///
/// `hue` is in degrees and wraps, `saturation` and `lightness` are 0.0-1.0.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> PackedColor {
    from_hsl(Hsl::new(hue, saturation, lightness))
}

/// Converts an HSL color to the nearest packed color.
pub fn from_hsl(color: Hsl) -> PackedColor {
    let rgb: Srgb<u8> = Srgb::<f32>::from_color(color).into_format();
    PackedColor::from(rgb)
}

/// Converts a packed color to HSL.
///
/// Grays come back with hue 0.
pub fn to_hsl(color: PackedColor) -> Hsl {
    let rgb: Srgb<f32> = Srgb::<u8>::from(color).into_format();
    Hsl::from_color(rgb)
}

/// Color at position `pos` of a wheel with `size` evenly spaced hues.
///
/// Full saturation, half lightness, hue `360 * pos / size` degrees. Position
/// `size` wraps around to the color at position 0. A wheel of size 0 is
/// treated as a single red slot.
pub fn wheel(pos: usize, size: usize) -> PackedColor {
    let hue = if size == 0 {
        0.0
    } else {
        360.0 * pos as f32 / size as f32
    };
    hsl(hue, 1.0, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_land_in_their_bytes() {
        let color = pack(0x12, 0x34, 0x56);
        assert_eq!(color.into_u32(), 0x123456);
        assert_eq!(unpack(color), (0x12, 0x34, 0x56));
    }

    #[test]
    fn truncating_pack_masks_each_channel() {
        assert_eq!(pack_truncating(0x1FF, 0x100, 0x2AB), pack(0xFF, 0x00, 0xAB));
    }

    #[test]
    fn from_u32_rejects_values_above_24_bits() {
        assert_eq!(PackedColor::from_u32(0xFFFFFF), Some(pack(255, 255, 255)));
        assert_eq!(PackedColor::from_u32(0x1000000), None);
    }

    #[test]
    fn wheel_of_size_zero_does_not_produce_nan() {
        assert_eq!(wheel(0, 0), pack(255, 0, 0));
    }
}

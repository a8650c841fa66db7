//! Core types for animation configuration.

use crate::colors::ColorFormatError;

/// How an animation spreads its color table over the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdatePolicy {
    /// Every pixel shows the same table entry each tick.
    WholeZone,

    /// Pixel `i` shows the entry `i` places ahead, so the pattern moves
    /// along the strip.
    Scroll,
}

impl UpdatePolicy {
    #[inline]
    pub(crate) fn from_whole(whole: bool) -> Self {
        if whole {
            UpdatePolicy::WholeZone
        } else {
            UpdatePolicy::Scroll
        }
    }
}

/// Options for any animation, keyed the same way for every variant.
///
/// Each variant reads only the options it understands; the rest are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationConfig<'a> {
    /// Hex color strings, `#RRGGBB` or `RRGGBB`.
    pub colors: Option<&'a [&'a str]>,

    /// Number of interpolation or wheel samples. Defaults to the strip length.
    pub steps: Option<usize>,

    /// Fade: light the whole strip with one color at a time.
    pub combine_zone: Option<bool>,

    /// Rainbow: light the whole strip with one color at a time.
    pub strip_as_whole: Option<bool>,
}

impl<'a> AnimationConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: &'a [&'a str]) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn combine_zone(mut self, combine: bool) -> Self {
        self.combine_zone = Some(combine);
        self
    }

    pub fn strip_as_whole(mut self, whole: bool) -> Self {
        self.strip_as_whole = Some(whole);
        self
    }
}

/// Configuration for the [`Fade`](crate::fade::Fade) animation.
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig<'a> {
    /// Colors to fade through, in order. The last fades back into the first.
    pub colors: &'a [&'a str],

    /// Interpolated colors per pair. `None` uses the strip length.
    pub steps: Option<usize>,

    /// Whole-zone when `true`, scroll otherwise.
    pub combine_zone: bool,
}

impl<'a> FadeConfig<'a> {
    /// Creates a scrolling fade through `colors`.
    pub fn new(colors: &'a [&'a str]) -> Self {
        Self {
            colors,
            steps: None,
            combine_zone: false,
        }
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn combine_zone(mut self, combine: bool) -> Self {
        self.combine_zone = combine;
        self
    }

    /// Reads the fade options out of a generic config.
    ///
    /// # Errors
    /// * `MissingColors` - No `colors` option
    pub fn from_options(options: &AnimationConfig<'a>) -> Result<Self, ConfigError> {
        let colors = options.colors.ok_or(ConfigError::MissingColors)?;
        Ok(Self {
            colors,
            steps: options.steps,
            combine_zone: options.combine_zone.unwrap_or(false),
        })
    }

    #[inline]
    pub fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::from_whole(self.combine_zone)
    }
}

/// Configuration for the [`Rainbow`](crate::rainbow::Rainbow) animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowConfig {
    /// Hues on the wheel. `None` uses the strip length.
    pub steps: Option<usize>,

    /// Whole-zone when `true` (the default), scroll otherwise.
    pub strip_as_whole: bool,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            steps: None,
            strip_as_whole: true,
        }
    }
}

impl RainbowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn strip_as_whole(mut self, whole: bool) -> Self {
        self.strip_as_whole = whole;
        self
    }

    pub fn from_options(options: &AnimationConfig<'_>) -> Self {
        Self {
            steps: options.steps,
            strip_as_whole: options.strip_as_whole.unwrap_or(true),
        }
    }

    #[inline]
    pub fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::from_whole(self.strip_as_whole)
    }
}

/// Resolves the `steps` option against the strip length.
pub(crate) fn resolve_steps(steps: Option<usize>, length: usize) -> Result<usize, ConfigError> {
    match steps.unwrap_or(length) {
        0 => Err(ConfigError::ZeroSteps),
        n => Ok(n),
    }
}

/// Animation construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Strip length of zero.
    ZeroLength,

    /// No colors provided.
    MissingColors,

    /// `steps` resolved to zero.
    ZeroSteps,

    /// A configured color string could not be parsed.
    InvalidColor {
        /// Position in the `colors` list.
        index: usize,
        error: ColorFormatError,
    },

    /// The color table does not fit the engine's capacity.
    CapacityExceeded { required: usize, capacity: usize },

    /// The scroll cycle length does not fit in `usize`.
    PeriodOverflow,

    /// No animation with the requested name.
    UnknownAnimation,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroLength => {
                write!(f, "strip length must be at least 1")
            }
            ConfigError::MissingColors => {
                write!(f, "at least one color is required")
            }
            ConfigError::ZeroSteps => {
                write!(f, "steps must be at least 1")
            }
            ConfigError::InvalidColor { index, error } => {
                write!(f, "color {}: {}", index, error)
            }
            ConfigError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "color table needs {} entries but capacity is {}",
                    required, capacity
                )
            }
            ConfigError::PeriodOverflow => {
                write!(f, "scroll period overflows usize")
            }
            ConfigError::UnknownAnimation => {
                write!(f, "unknown animation name")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

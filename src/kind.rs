//! Selecting an animation by name.

use core::str::FromStr;

use crate::animation::Animation;
use crate::fade::Fade;
use crate::rainbow::Rainbow;
use crate::sink::PixelSink;
use crate::template::Template;
use crate::types::{AnimationConfig, ConfigError, FadeConfig, RainbowConfig};

/// The available animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    Fade,
    Rainbow,
    Template,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 3] = [
        AnimationKind::Fade,
        AnimationKind::Rainbow,
        AnimationKind::Template,
    ];

    /// Lowercase name, as accepted by `from_str`.
    pub const fn name(self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::Rainbow => "rainbow",
            AnimationKind::Template => "template",
        }
    }
}

impl FromStr for AnimationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::UnknownAnimation)
    }
}

impl core::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Any animation, chosen at runtime.
///
/// # Type Parameters
/// * `S` - Pixel sink
/// * `N` - Maximum color table length
pub enum AnyAnimation<S: PixelSink, const N: usize> {
    Fade(Fade<S, N>),
    Rainbow(Rainbow<S, N>),
    Template(Template<S>),
}

impl<S: PixelSink, const N: usize> AnyAnimation<S, N> {
    /// Builds the animation `kind` from generic options.
    ///
    /// # Errors
    /// Whatever the chosen animation's constructor rejects.
    pub fn new(
        kind: AnimationKind,
        length: usize,
        sink: S,
        options: &AnimationConfig<'_>,
    ) -> Result<Self, ConfigError> {
        match kind {
            AnimationKind::Fade => {
                let config = FadeConfig::from_options(options)?;
                Fade::new(length, sink, &config).map(AnyAnimation::Fade)
            }
            AnimationKind::Rainbow => {
                let config = RainbowConfig::from_options(options);
                Rainbow::new(length, sink, &config).map(AnyAnimation::Rainbow)
            }
            AnimationKind::Template => Template::new(length, sink).map(AnyAnimation::Template),
        }
    }

    pub fn kind(&self) -> AnimationKind {
        match self {
            AnyAnimation::Fade(_) => AnimationKind::Fade,
            AnyAnimation::Rainbow(_) => AnimationKind::Rainbow,
            AnyAnimation::Template(_) => AnimationKind::Template,
        }
    }

    pub fn into_sink(self) -> S {
        match self {
            AnyAnimation::Fade(a) => a.into_sink(),
            AnyAnimation::Rainbow(a) => a.into_sink(),
            AnyAnimation::Template(a) => a.into_sink(),
        }
    }
}

impl<S: PixelSink, const N: usize> Animation for AnyAnimation<S, N> {
    type Sink = S;

    fn advance(&mut self) {
        match self {
            AnyAnimation::Fade(a) => a.advance(),
            AnyAnimation::Rainbow(a) => a.advance(),
            AnyAnimation::Template(a) => a.advance(),
        }
    }

    fn pixel_count(&self) -> usize {
        match self {
            AnyAnimation::Fade(a) => a.pixel_count(),
            AnyAnimation::Rainbow(a) => a.pixel_count(),
            AnyAnimation::Template(a) => a.pixel_count(),
        }
    }

    fn period(&self) -> usize {
        match self {
            AnyAnimation::Fade(a) => a.period(),
            AnyAnimation::Rainbow(a) => a.period(),
            AnyAnimation::Template(a) => a.period(),
        }
    }

    fn iteration(&self) -> usize {
        match self {
            AnyAnimation::Fade(a) => a.iteration(),
            AnyAnimation::Rainbow(a) => a.iteration(),
            AnyAnimation::Template(a) => a.iteration(),
        }
    }

    fn sink(&self) -> &S {
        match self {
            AnyAnimation::Fade(a) => a.sink(),
            AnyAnimation::Rainbow(a) => a.sink(),
            AnyAnimation::Template(a) => a.sink(),
        }
    }

    fn sink_mut(&mut self) -> &mut S {
        match self {
            AnyAnimation::Fade(a) => a.sink_mut(),
            AnyAnimation::Rainbow(a) => a.sink_mut(),
            AnyAnimation::Template(a) => a.sink_mut(),
        }
    }
}

//! Fade through a list of colors.

use heapless::Vec;
use palette::Hsl;

use crate::animation::Animation;
use crate::colors::{self, PackedColor};
use crate::sink::PixelSink;
use crate::types::{ConfigError, FadeConfig, UpdatePolicy, resolve_steps};

/// Fades through several colors, either over the whole strip at once or
/// scrolling down the strip.
///
/// The configured colors form a closed loop. Each neighbouring pair is
/// interpolated in HSL over `steps` samples (start included, end excluded),
/// so the table holds `steps * colors.len()` entries.
///
/// # Type Parameters
/// * `S` - Pixel sink
/// * `N` - Maximum color table length
pub struct Fade<S: PixelSink, const N: usize> {
    sink: S,
    length: usize,
    policy: UpdatePolicy,
    table: Vec<PackedColor, N>,
    iteration: usize,
}

impl<S: PixelSink, const N: usize> Fade<S, N> {
    /// Builds the fade table for a strip of `length` pixels.
    ///
    /// # Errors
    /// * `ZeroLength` - `length` is 0
    /// * `MissingColors` - `colors` is empty
    /// * `ZeroSteps` - `steps` is `Some(0)`
    /// * `InvalidColor` - A color string is not valid hex
    /// * `CapacityExceeded` - The table would exceed `N` entries
    pub fn new(length: usize, sink: S, config: &FadeConfig<'_>) -> Result<Self, ConfigError> {
        let table = build_table::<N>(length, config).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("fade rejected: {}", _err);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "fade: {} pixels, {} colors, table {}, {}",
            length,
            config.colors.len(),
            table.len(),
            config.policy()
        );

        Ok(Self {
            sink,
            length,
            policy: config.policy(),
            table,
            iteration: 0,
        })
    }

    /// The precomputed color table.
    pub fn table(&self) -> &[PackedColor] {
        &self.table
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Gives the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: PixelSink, const N: usize> Animation for Fade<S, N> {
    type Sink = S;

    fn advance(&mut self) {
        let len = self.table.len();
        match self.policy {
            UpdatePolicy::WholeZone => {
                let color = self.table[self.iteration];
                for i in 0..self.length {
                    self.sink.set_pixel(i, color);
                }
            }
            UpdatePolicy::Scroll => {
                for i in 0..self.length {
                    self.sink.set_pixel(i, self.table[(i + self.iteration) % len]);
                }
            }
        }
        self.iteration = (self.iteration + 1) % len;
    }

    fn pixel_count(&self) -> usize {
        self.length
    }

    fn period(&self) -> usize {
        self.table.len()
    }

    fn iteration(&self) -> usize {
        self.iteration
    }

    fn sink(&self) -> &S {
        &self.sink
    }

    fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

fn build_table<const N: usize>(
    length: usize,
    config: &FadeConfig<'_>,
) -> Result<Vec<PackedColor, N>, ConfigError> {
    if length == 0 {
        return Err(ConfigError::ZeroLength);
    }
    if config.colors.is_empty() {
        return Err(ConfigError::MissingColors);
    }
    let steps = resolve_steps(config.steps, length)?;

    let required = steps
        .checked_mul(config.colors.len())
        .ok_or(ConfigError::CapacityExceeded {
            required: usize::MAX,
            capacity: N,
        })?;
    if required > N {
        return Err(ConfigError::CapacityExceeded {
            required,
            capacity: N,
        });
    }

    // Fewer colors than table entries, so N bounds the stops too.
    let mut stops: Vec<Hsl, N> = Vec::new();
    for (index, hex) in config.colors.iter().enumerate() {
        let color = colors::from_hex(hex).map_err(|error| ConfigError::InvalidColor { index, error })?;
        stops
            .push(colors::to_hsl(color))
            .map_err(|_| ConfigError::CapacityExceeded {
                required,
                capacity: N,
            })?;
    }

    let mut table = Vec::new();
    for (index, &start) in stops.iter().enumerate() {
        let end = stops[(index + 1) % stops.len()];
        for step in 0..steps {
            let color = if step == 0 {
                colors::from_hsl(start)
            } else {
                colors::from_hsl(interpolate(start, end, step as f32 / steps as f32))
            };
            table.push(color).map_err(|_| ConfigError::CapacityExceeded {
                required,
                capacity: N,
            })?;
        }
    }

    Ok(table)
}

/// Straight-line HSL blend. Hue moves from `start` to `end` without taking
/// the short way round, so red to blue passes through green.
fn interpolate(start: Hsl, end: Hsl, factor: f32) -> Hsl {
    let h0 = start.hue.into_positive_degrees();
    let h1 = end.hue.into_positive_degrees();
    Hsl::new(
        h0 + (h1 - h0) * factor,
        start.saturation + (end.saturation - start.saturation) * factor,
        start.lightness + (end.lightness - start.lightness) * factor,
    )
}

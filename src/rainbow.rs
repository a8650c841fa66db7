//! Rainbow cycling through the hue wheel.

use heapless::Vec;

use crate::animation::{Animation, cycle_length};
use crate::colors::{self, PackedColor};
use crate::sink::PixelSink;
use crate::types::{ConfigError, RainbowConfig, UpdatePolicy, resolve_steps};

/// Cycles through `steps` evenly spaced, fully saturated hues.
///
/// In whole-zone mode (the default) the strip shows one hue at a time and the
/// counter wraps after `steps` ticks. In scroll mode pixel `i` shows the hue
/// `i` places ahead and the counter wraps after `lcm(length, steps)` ticks.
///
/// # Type Parameters
/// * `S` - Pixel sink
/// * `N` - Maximum number of hues
pub struct Rainbow<S: PixelSink, const N: usize> {
    sink: S,
    length: usize,
    policy: UpdatePolicy,
    table: Vec<PackedColor, N>,
    period: usize,
    iteration: usize,
}

impl<S: PixelSink, const N: usize> Rainbow<S, N> {
    /// Samples the hue wheel for a strip of `length` pixels.
    ///
    /// # Errors
    /// * `ZeroLength` - `length` is 0
    /// * `ZeroSteps` - `steps` is `Some(0)`
    /// * `CapacityExceeded` - `steps` exceeds `N`
    /// * `PeriodOverflow` - `lcm(length, steps)` does not fit in `usize`
    pub fn new(length: usize, sink: S, config: &RainbowConfig) -> Result<Self, ConfigError> {
        let (table, period) = build_wheel::<N>(length, config).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rainbow rejected: {}", _err);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "rainbow: {} pixels, {} hues, period {}, {}",
            length,
            table.len(),
            period,
            config.policy()
        );

        Ok(Self {
            sink,
            length,
            policy: config.policy(),
            table,
            period,
            iteration: 0,
        })
    }

    /// The sampled hue wheel.
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

impl<S: PixelSink, const N: usize> Animation for Rainbow<S, N> {
    type Sink = S;

    fn advance(&mut self) {
        let steps = self.table.len();
        match self.policy {
            UpdatePolicy::WholeZone => {
                let color = self.table[self.iteration];
                for pos in 0..self.length {
                    self.sink.set_pixel(pos, color);
                }
            }
            UpdatePolicy::Scroll => {
                for pos in 0..self.length {
                    self.sink.set_pixel(pos, self.table[(pos + self.iteration) % steps]);
                }
            }
        }
        self.iteration = (self.iteration + 1) % self.period;
    }

    fn pixel_count(&self) -> usize {
        self.length
    }

    fn period(&self) -> usize {
        self.period
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

fn build_wheel<const N: usize>(
    length: usize,
    config: &RainbowConfig,
) -> Result<(Vec<PackedColor, N>, usize), ConfigError> {
    if length == 0 {
        return Err(ConfigError::ZeroLength);
    }
    let steps = resolve_steps(config.steps, length)?;
    if steps > N {
        return Err(ConfigError::CapacityExceeded {
            required: steps,
            capacity: N,
        });
    }

    let period = match config.policy() {
        UpdatePolicy::WholeZone => steps,
        UpdatePolicy::Scroll => cycle_length(length, steps)?,
    };

    let mut table = Vec::new();
    for pos in 0..steps {
        table.push(colors::wheel(pos, steps)).map_err(|_| ConfigError::CapacityExceeded {
            required: steps,
            capacity: N,
        })?;
    }

    Ok((table, period))
}

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::params::{OptionKind, OptionParameters};

/// Number of points in a sweep unless the caller asks otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 20;

/// The single input varied by a sensitivity sweep.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ParameterChoice {
    #[default]
    Volatility,
    Strike,
    Maturity,
    Spot,
}

impl ParameterChoice {
    /// All choices in the order a front end lists them.
    pub const ALL: [ParameterChoice; 4] = [
        ParameterChoice::Volatility,
        ParameterChoice::Strike,
        ParameterChoice::Maturity,
        ParameterChoice::Spot,
    ];

    /// Short lowercase key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            ParameterChoice::Volatility => "volatility",
            ParameterChoice::Strike => "strike",
            ParameterChoice::Maturity => "maturity",
            ParameterChoice::Spot => "spot",
        }
    }

    /// Human-readable name, used in chart titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            ParameterChoice::Volatility => "Volatility",
            ParameterChoice::Strike => "Strike Price",
            ParameterChoice::Maturity => "Time to Maturity",
            ParameterChoice::Spot => "Initial Stock Price",
        }
    }

    /// X-axis label for a chart of this sweep.
    pub fn axis_label(&self) -> &'static str {
        match self {
            ParameterChoice::Maturity => "Time to Maturity (Years)",
            other => other.display_name(),
        }
    }

    /// Reads the varied field from `params`.
    pub fn get(&self, params: &OptionParameters) -> f64 {
        match self {
            ParameterChoice::Volatility => params.volatility,
            ParameterChoice::Strike => params.strike,
            ParameterChoice::Maturity => params.maturity,
            ParameterChoice::Spot => params.spot,
        }
    }

    /// Copy of `params` with the varied field replaced by `value`.
    pub fn substitute(&self, params: &OptionParameters, value: f64) -> OptionParameters {
        let mut out = *params;
        match self {
            ParameterChoice::Volatility => out.volatility = value,
            ParameterChoice::Strike => out.strike = value,
            ParameterChoice::Maturity => out.maturity = value,
            ParameterChoice::Spot => out.spot = value,
        }
        out
    }
}

impl fmt::Display for ParameterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ParameterChoice {
    type Err = Error;

    /// Accepts either the lowercase key or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ParameterChoice::ALL
            .into_iter()
            .find(|c| {
                c.key().eq_ignore_ascii_case(needle) || c.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| anyhow!("Unknown sensitivity parameter: {}", needle))
    }
}

/// How the sweep range is placed around the current value of the varied input.
///
/// The range runs from `max(floor, current - half_width)` to `current + half_width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePolicy {
    /// Lowest value the range may start at
    pub floor: f64,
    /// Distance from the current value to either end (before clamping)
    pub half_width: f64,
}

impl RangePolicy {
    pub const fn new(floor: f64, half_width: f64) -> Self {
        Self { floor, half_width }
    }

    /// Inclusive `(lo, hi)` bounds around `current`.
    pub fn bounds(&self, current: f64) -> (f64, f64) {
        (
            self.floor.max(current - self.half_width),
            current + self.half_width,
        )
    }
}

/// One point of a sweep: the substituted input value and the resulting price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySample {
    pub value: f64,
    pub price: f64,
}

/// Output of a sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    /// Which input was varied
    pub varied: ParameterChoice,
    /// Option kind that was priced
    pub kind: OptionKind,
    /// Samples ordered by increasing input value
    pub samples: Vec<SensitivitySample>,
    /// Price at the unmodified inputs, computed by its own pricing call
    pub current_price: f64,
}

impl SensitivityResult {
    /// Input values along the x-axis.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Prices along the y-axis.
    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }

    /// `(min, max)` of the sampled prices, or `None` for an empty sweep.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        let (lo, hi) = self
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.price), hi.max(s.price))
            });
        Some((lo, hi))
    }
}

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::bs::BlackScholes;
use crate::params::OptionParameters;
use crate::sensitivity::{
    sweep_with_policy, ParameterChoice, RangePolicy, SensitivityResult, DEFAULT_SAMPLE_COUNT,
};

/// Minimum input values a front end enforces on its widgets.
///
/// These are presentation constraints, not pricing invariants: the pricer
/// itself only requires strictly positive spot, strike, maturity and
/// volatility. Front ends call [`InputConstraints::check`] before pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConstraints {
    pub min_spot: f64,
    pub min_strike: f64,
    pub min_maturity: f64,
    pub min_rate: f64,
    pub min_volatility: f64,
    /// Only accept maturities that are a whole number of years
    pub whole_year_maturity: bool,
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self {
            min_spot: 1.0,
            min_strike: 1.0,
            min_maturity: 1.0,
            min_rate: 0.0,
            min_volatility: 0.01,
            whole_year_maturity: true,
        }
    }
}

impl InputConstraints {
    /// Returns an error naming the first input below its minimum.
    pub fn check(&self, params: &OptionParameters) -> Result<()> {
        let limits = [
            ("spot", params.spot, self.min_spot),
            ("strike", params.strike, self.min_strike),
            ("maturity", params.maturity, self.min_maturity),
            ("rate", params.rate, self.min_rate),
            ("volatility", params.volatility, self.min_volatility),
        ];
        for (name, value, min) in limits {
            if !value.is_finite() || value < min {
                return Err(anyhow!(
                    "Input validation: {} ({}={}) must be >= {} and finite",
                    name,
                    name,
                    value,
                    min
                ));
            }
        }
        if self.whole_year_maturity && params.maturity.fract() != 0.0 {
            return Err(anyhow!(
                "Input validation: maturity (maturity={}) must be a whole number of years",
                params.maturity
            ));
        }
        Ok(())
    }
}

/// Settings for one interactive pricing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Inputs shown when the session starts
    #[serde(default)]
    pub parameters: OptionParameters,

    /// Input varied by the sensitivity chart
    #[serde(default)]
    pub varied: ParameterChoice,

    /// Number of points per sweep
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Per-input overrides of the default range policy, keyed by
    /// `volatility`, `strike`, `maturity` or `spot`
    #[serde(default)]
    pub range_overrides: BTreeMap<String, RangePolicy>,

    /// Widget minimums
    #[serde(default)]
    pub constraints: InputConstraints,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            parameters: OptionParameters::default(),
            varied: ParameterChoice::default(),
            sample_count: default_sample_count(),
            range_overrides: BTreeMap::new(),
            constraints: InputConstraints::default(),
        }
    }
}

impl SessionConfig {
    /// Twenty-point sweeps with the standard range table
    pub fn reference() -> Self {
        Self::default()
    }

    /// Dense sweeps for smooth publication charts
    pub fn fine() -> Self {
        Self {
            sample_count: 200,
            ..Self::default()
        }
    }

    /// Few points for quick checks and tests
    pub fn coarse() -> Self {
        Self {
            sample_count: 5,
            ..Self::default()
        }
    }

    /// Parses a TOML document; missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SessionConfig =
            toml::from_str(source).context("failed to parse session config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML session config from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
    }

    /// Range policy for `choice`, honouring any override.
    pub fn range_policy(&self, choice: ParameterChoice) -> RangePolicy {
        self.range_overrides
            .iter()
            .find(|(key, _)| key.parse::<ParameterChoice>().ok() == Some(choice))
            .map(|(_, policy)| *policy)
            .unwrap_or_else(|| choice.range_policy())
    }

    /// Sweeps the configured input around the configured parameters.
    pub fn sweep(&self) -> std::result::Result<SensitivityResult, DomainError> {
        sweep_with_policy(
            &BlackScholes,
            &self.parameters,
            self.varied,
            self.range_policy(self.varied),
            self.sample_count,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen: BTreeMap<ParameterChoice, &str> = BTreeMap::new();
        for (key, policy) in &self.range_overrides {
            let choice: ParameterChoice = key
                .parse()
                .with_context(|| format!("invalid key in range_overrides: {}", key))?;
            if let Some(previous) = seen.insert(choice, key.as_str()) {
                return Err(anyhow!(
                    "Config validation: range_overrides keys '{}' and '{}' both name {}",
                    previous,
                    key,
                    choice.key()
                ));
            }
            if !(policy.half_width > 0.0) || !policy.half_width.is_finite() {
                return Err(anyhow!(
                    "Config validation: half_width for {} (half_width={}) must be > 0 and finite",
                    choice.key(),
                    policy.half_width
                ));
            }
        }
        Ok(())
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

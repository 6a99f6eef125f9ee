//! Input value objects for a single pricing evaluation.
//!
//! [`OptionParameters`] bundles the five Black-Scholes inputs with the option
//! kind. It is a plain `Copy` value: the sweeper builds modified copies rather
//! than mutating the caller's instance.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, DomainError};

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    #[default]
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Inputs to the Black-Scholes formula for one European option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years (continuous; fractional years are valid)
    pub maturity: f64,
    /// Annualised continuously-compounded risk-free rate (may be zero or negative)
    pub rate: f64,
    /// Annualised volatility of log-returns (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
    /// Call or put
    #[serde(default)]
    pub kind: OptionKind,
}

impl Default for OptionParameters {
    /// Starting values of the interactive tool: an at-the-money one-year call.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            kind: OptionKind::Call,
        }
    }
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        }
    }

    /// Same inputs with a different option kind.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Checks the pricing domain: spot, strike, maturity and volatility strictly positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("maturity", self.maturity)?;
        ensure_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Strike discounted to today: `K * exp(-r * T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.maturity).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_kind_parsing() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" PUT ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let base = OptionParameters::default();
        assert!(base.validate().is_ok());

        let cases = [
            ("spot", OptionParameters { spot: 0.0, ..base }),
            ("strike", OptionParameters { strike: -1.0, ..base }),
            ("maturity", OptionParameters { maturity: 0.0, ..base }),
            ("volatility", OptionParameters { volatility: 0.0, ..base }),
        ];
        for (name, params) in cases {
            let err = params.validate().unwrap_err();
            assert_eq!(err.parameter(), name);
        }
    }

    #[test]
    fn test_negative_rate_is_valid() {
        let params = OptionParameters {
            rate: -0.01,
            ..OptionParameters::default()
        };
        assert!(params.validate().is_ok());
        assert!(params.discounted_strike() > params.strike);
    }
}

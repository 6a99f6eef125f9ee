use thiserror::Error;

/// Raised when a pricing input lies outside the domain of the Black-Scholes formula.
///
/// Spot, strike, maturity and volatility must all be strictly positive: the
/// closed form divides by `volatility * sqrt(maturity)` and takes `ln(spot / strike)`,
/// so anything else would silently produce `NaN` or infinities. Infinite
/// inputs are rejected for the same reason.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("{parameter} must be > 0 and finite (got {value})")]
    NonPositive { parameter: &'static str, value: f64 },
}

impl DomainError {
    /// Name of the offending input.
    pub fn parameter(&self) -> &'static str {
        match self {
            DomainError::NonPositive { parameter, .. } => parameter,
        }
    }
}

/// Checks that `value` is strictly positive and finite. `NaN` and `inf` fail the check.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositive { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("spot", 1e-12).is_ok());
        assert!(ensure_positive("spot", 0.0).is_err());
        assert!(ensure_positive("spot", -5.0).is_err());
        assert!(ensure_positive("spot", f64::NAN).is_err());
        assert!(ensure_positive("spot", f64::INFINITY).is_err());
        assert!(ensure_positive("spot", f64::NEG_INFINITY).is_err());
        assert!(ensure_positive("spot", f64::MAX).is_ok());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ensure_positive("volatility", -0.1).unwrap_err();
        assert_eq!(err.parameter(), "volatility");
        assert_eq!(err.to_string(), "volatility must be > 0 and finite (got -0.1)");
    }
}

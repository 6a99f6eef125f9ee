// src/sensitivity/sweep.rs

//! Single-parameter sensitivity sweeps.
//!
//! A sweep holds every input fixed except one, evaluates the pricer on an
//! evenly spaced grid of values for that input, and pairs each value with the
//! resulting price. The grid is placed around the current value by a
//! [`RangePolicy`]; the default table is
//!
//! | input      | lower bound              | upper bound |
//! |------------|--------------------------|-------------|
//! | volatility | `max(0.05, σ - 0.2)`     | `σ + 0.2`   |
//! | strike     | `max(1, K - 50)`         | `K + 50`    |
//! | maturity   | `max(0.1, T - 2)`        | `T + 2`     |
//! | spot       | `max(1, S - 50)`         | `S + 50`    |
//!
//! Because of the clamping the current value need not be a grid point, so the
//! current price is always obtained from a separate pricing call.

use tracing::{debug, warn};

use super::types::*;
use crate::error::DomainError;
use crate::models::bs::BlackScholes;
use crate::models::traits::OptionPricer;
use crate::params::OptionParameters;

impl ParameterChoice {
    /// Default range policy for this input.
    pub fn range_policy(&self) -> RangePolicy {
        match self {
            ParameterChoice::Volatility => RangePolicy::new(0.05, 0.2),
            ParameterChoice::Strike => RangePolicy::new(1.0, 50.0),
            ParameterChoice::Maturity => RangePolicy::new(0.1, 2.0),
            ParameterChoice::Spot => RangePolicy::new(1.0, 50.0),
        }
    }
}

/// `n` evenly spaced values from `lo` to `hi`, both endpoints included.
///
/// The last value is exactly `hi`. `n == 1` yields `[lo]` and `n == 0` an empty vector.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Sweeps `varied` with the default policy and [`DEFAULT_SAMPLE_COUNT`] points.
pub fn sweep(
    params: &OptionParameters,
    varied: ParameterChoice,
) -> Result<SensitivityResult, DomainError> {
    sweep_with_count(params, varied, DEFAULT_SAMPLE_COUNT)
}

/// Sweeps `varied` with the default policy and `sample_count` points.
pub fn sweep_with_count(
    params: &OptionParameters,
    varied: ParameterChoice,
    sample_count: usize,
) -> Result<SensitivityResult, DomainError> {
    sweep_with_policy(
        &BlackScholes,
        params,
        varied,
        varied.range_policy(),
        sample_count,
    )
}

/// Sweeps every input in [`ParameterChoice::ALL`] order.
pub fn sweep_all(
    params: &OptionParameters,
    sample_count: usize,
) -> Result<Vec<SensitivityResult>, DomainError> {
    ParameterChoice::ALL
        .iter()
        .map(|&varied| sweep_with_count(params, varied, sample_count))
        .collect()
}

/// Core sweep routine shared by every input.
///
/// Calls `pricer` once per grid point and once more on the unmodified
/// `params`. The first failing call aborts the sweep and its error is returned.
pub fn sweep_with_policy<P: OptionPricer + ?Sized>(
    pricer: &P,
    params: &OptionParameters,
    varied: ParameterChoice,
    policy: RangePolicy,
    sample_count: usize,
) -> Result<SensitivityResult, DomainError> {
    let current = varied.get(params);
    let (lo, hi) = policy.bounds(current);
    debug!(
        parameter = varied.key(),
        current, lo, hi, sample_count, "building sensitivity sweep"
    );

    let samples = linspace(lo, hi, sample_count)
        .into_iter()
        .map(|value| -> Result<SensitivitySample, DomainError> {
            let price = pricer.price(&varied.substitute(params, value))?;
            Ok(SensitivitySample { value, price })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            warn!(parameter = varied.key(), error = %err, "sensitivity sweep aborted");
            err
        })?;

    let current_price = pricer.price(params)?;

    Ok(SensitivityResult {
        varied,
        kind: params.kind,
        samples,
        current_price,
    })
}

// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. Implied volatility and Greeks are out of scope.

use std::f64::consts::SQRT_2;

use crate::error::DomainError;
use crate::models::traits::OptionPricer;
use crate::params::{OptionKind, OptionParameters};

/// Standard normal cumulative distribution function.
///
/// Evaluated through `erfc` rather than `1 + erf` so that the far left tail
/// keeps full relative precision instead of cancelling to zero.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Inputs are not validated; use [`price`] for the checked entry point.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Inputs are not validated; use [`price`] for the checked entry point.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Black-Scholes price of the option described by `params`.
///
/// # Errors
///
/// [`DomainError::NonPositive`] when spot, strike, maturity or volatility is
/// not strictly positive.
pub fn price(params: &OptionParameters) -> Result<f64, DomainError> {
    params.validate()?;
    let p = params;
    let value = match p.kind {
        OptionKind::Call => bs_call_price(p.spot, p.strike, p.rate, p.maturity, p.volatility),
        OptionKind::Put => bs_put_price(p.spot, p.strike, p.rate, p.maturity, p.volatility),
    };
    Ok(value)
}

/// Analytic Black-Scholes pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricer for BlackScholes {
    fn price(&self, params: &OptionParameters) -> Result<f64, DomainError> {
        price(params)
    }
}

//! # Option-Sensitivity: Black-Scholes Pricing and Parameter Sweeps
//!
//! `option-sensitivity` prices European calls and puts with the closed-form
//! Black-Scholes formula and shows how the price responds when a single input
//! (volatility, strike, time to maturity or spot) moves while the others stay
//! fixed.
//!
//! ## Core Features
//!
//! - **Pricer**: checked Black-Scholes pricing that rejects non-positive inputs
//!   instead of returning `NaN`
//! - **Sensitivity sweeps**: evenly spaced grids around the current input,
//!   clamped to sensible floors, with the current price computed separately
//! - **Reporting**: SVG line charts, CSV export and currency formatting
//! - **Configuration**: TOML session files with presets
//!
//! ## Quick Start
//!
//! ```rust
//! use option_sensitivity::{price, sweep, OptionKind, OptionParameters, ParameterChoice};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
//! let call = price(&params)?;
//! assert!((call - 10.4506).abs() < 1e-3);
//!
//! let result = sweep(&params, ParameterChoice::Volatility)?;
//! assert_eq!(result.samples.len(), 20);
//! assert_eq!(result.current_price, call);
//! # Ok::<(), option_sensitivity::DomainError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod report;
pub mod sensitivity;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Inputs and errors
pub use error::DomainError;
pub use params::{OptionKind, OptionParameters};

// Pricing
pub use models::bs::{bs_call_price, bs_put_price, norm_cdf, price, BlackScholes};
pub use models::traits::OptionPricer;

// Sweeps
pub use sensitivity::{
    linspace, sweep, sweep_all, sweep_with_count, sweep_with_policy, ParameterChoice,
    RangePolicy, SensitivityResult, SensitivitySample, DEFAULT_SAMPLE_COUNT,
};

// Configuration and reporting
pub use config::{InputConstraints, SessionConfig};
pub use report::{
    chart::{render_svg, write_svg, ChartStyle},
    export::{to_csv_string, write_csv},
    format_currency, price_summary,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured session settings.
///
/// - [`reference()`]: 20-point sweeps, the standard interactive view
/// - [`fine()`]: 200-point sweeps for smooth charts
/// - [`coarse()`]: 5-point sweeps for quick checks
pub mod default_configs {
    use crate::config::SessionConfig;

    /// Standard interactive session.
    ///
    /// ```rust
    /// use option_sensitivity::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.sample_count, 20);
    /// ```
    pub fn reference() -> SessionConfig {
        SessionConfig::reference()
    }

    /// Dense sweeps for publication-quality curves.
    pub fn fine() -> SessionConfig {
        SessionConfig::fine()
    }

    /// Sparse sweeps for smoke tests and debugging.
    pub fn coarse() -> SessionConfig {
        SessionConfig::coarse()
    }
}

// ================================================================================================
// SESSION EVALUATION
// ================================================================================================

/// Everything a front end needs to redraw after an input change.
#[derive(Debug, Clone)]
pub struct SessionView {
    /// The sweep behind the chart
    pub result: SensitivityResult,
    /// Chart caption
    pub title: String,
    /// Text shown beneath the chart, e.g. `Current call option price: $10.45`
    pub summary: String,
}

/// Recomputes the sweep and the display strings for one user interaction.
///
/// Each call is independent: nothing is cached between interactions.
///
/// # Example
///
/// ```rust
/// use option_sensitivity::{evaluate_session, default_configs};
///
/// let view = evaluate_session(&default_configs::reference())?;
/// assert_eq!(view.title, "Sensitivity to Volatility");
/// assert_eq!(view.summary, "Current call option price: $10.45");
/// # Ok::<(), option_sensitivity::DomainError>(())
/// ```
pub fn evaluate_session(config: &SessionConfig) -> Result<SessionView, DomainError> {
    let result = config.sweep()?;
    let title = report::chart::chart_title(&result);
    let summary = price_summary(result.kind, result.current_price);
    Ok(SessionView {
        result,
        title,
        summary,
    })
}

//! Presentation helpers for sweep results: chart rendering, CSV export and
//! price formatting.

pub mod chart;
pub mod export;

use crate::params::OptionKind;

/// Formats a price as dollars with two decimals, e.g. `$10.45` or `-$0.50`.
pub fn format_currency(price: f64) -> String {
    let cents = (price * 100.0).round() / 100.0;
    if cents < 0.0 {
        format!("-${:.2}", -cents)
    } else {
        // `abs` folds -0.0 into 0.0
        format!("${:.2}", cents.abs())
    }
}

/// One-line description of the current price, as shown beneath the chart.
pub fn price_summary(kind: OptionKind, price: f64) -> String {
    format!("Current {} option price: {}", kind, format_currency(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.450583572185565), "$10.45");
        assert_eq!(format_currency(5.573526022256971), "$5.57");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(-0.5), "-$0.50");
        assert_eq!(format_currency(1234.5), "$1234.50");
    }

    #[test]
    fn test_price_summary() {
        assert_eq!(
            price_summary(OptionKind::Put, 5.5735),
            "Current put option price: $5.57"
        );
    }
}

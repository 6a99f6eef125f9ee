
use option_sensitivity::{price, DomainError, OptionKind, OptionParameters};
use proptest::prelude::*;
use test_utils::{assert_close, parameter_grid, textbook_params};

/// Standard textbook values for the at-the-money one-year option.
#[test]
fn test_textbook_call_and_put() {
    let call = price(&textbook_params(OptionKind::Call)).expect("call pricing failed");
    let put = price(&textbook_params(OptionKind::Put)).expect("put pricing failed");

    assert_close(call, 10.4506, 1e-3, "ATM call");
    assert_close(put, 5.5735, 1e-3, "ATM put");
}

/// C - P = S - K e^{-rT} on a grid of inputs.
#[test]
fn test_put_call_parity_grid() {
    for params in parameter_grid() {
        let call = price(&params.with_kind(OptionKind::Call)).unwrap();
        let put = price(&params.with_kind(OptionKind::Put)).unwrap();
        let forward_value = params.spot - params.discounted_strike();
        assert_close(call - put, forward_value, 1e-6, &format!("parity at {:?}", params));
    }
}

/// As volatility goes to zero the price collapses to discounted intrinsic value.
#[test]
fn test_zero_volatility_limit() {
    let cases = [(110.0, 100.0), (90.0, 100.0), (100.0, 120.0)];
    for (spot, strike) in cases {
        let params = OptionParameters::new(spot, strike, 1.0, 0.05, 1e-9, OptionKind::Call);
        let intrinsic_call = (spot - params.discounted_strike()).max(0.0);
        let intrinsic_put = (params.discounted_strike() - spot).max(0.0);

        let call = price(&params).unwrap();
        let put = price(&params.with_kind(OptionKind::Put)).unwrap();
        assert_close(call, intrinsic_call, 1e-6, "call at sigma -> 0");
        assert_close(put, intrinsic_put, 1e-6, "put at sigma -> 0");
    }
}

/// Each of spot, strike, maturity and volatility independently raises DomainError,
/// whether non-positive or non-finite.
#[test]
fn test_boundary_inputs_rejected() {
    let base = textbook_params(OptionKind::Call);
    let invalid = [
        ("spot", OptionParameters { spot: 0.0, ..base }),
        ("spot", OptionParameters { spot: -10.0, ..base }),
        ("strike", OptionParameters { strike: 0.0, ..base }),
        ("maturity", OptionParameters { maturity: 0.0, ..base }),
        ("maturity", OptionParameters { maturity: -1.0, ..base }),
        ("volatility", OptionParameters { volatility: 0.0, ..base }),
        ("volatility", OptionParameters { volatility: -0.2, ..base }),
        ("spot", OptionParameters { spot: f64::INFINITY, ..base }),
        ("strike", OptionParameters { strike: f64::INFINITY, ..base }),
        ("maturity", OptionParameters { maturity: f64::INFINITY, ..base }),
        ("volatility", OptionParameters { volatility: f64::INFINITY, ..base }),
        ("spot", OptionParameters { spot: f64::NAN, ..base }),
    ];

    for (expected, params) in invalid {
        for kind in [OptionKind::Call, OptionKind::Put] {
            match price(&params.with_kind(kind)) {
                Err(DomainError::NonPositive { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                Ok(p) => panic!("invalid {} should be rejected, priced at {}", expected, p),
            }
        }
    }
}

/// Zero rate is allowed and must not be confused with an invalid input.
#[test]
fn test_zero_rate_is_valid() {
    let params = OptionParameters {
        rate: 0.0,
        ..textbook_params(OptionKind::Call)
    };
    let call = price(&params).unwrap();
    let put = price(&params.with_kind(OptionKind::Put)).unwrap();
    assert!(call.is_finite() && call > 0.0);
    // With r = 0 and S = K, ATM call and put are worth the same
    assert_close(call, put, 1e-12, "ATM call vs put at r = 0");
}

/// Prices stay within no-arbitrage bounds.
#[test]
fn test_price_bounds() {
    for params in parameter_grid() {
        let call = price(&params).unwrap();
        let put = price(&params.with_kind(OptionKind::Put)).unwrap();
        let lower_call = (params.spot - params.discounted_strike()).max(0.0);
        let lower_put = (params.discounted_strike() - params.spot).max(0.0);

        assert!(call >= lower_call - 1e-9 && call <= params.spot + 1e-9);
        assert!(put >= lower_put - 1e-9 && put <= params.discounted_strike() + 1e-9);
    }
}

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        maturity in 0.05f64..10.0,
        rate in 0.0f64..0.2,
        volatility in 0.01f64..1.5,
    ) {
        let params = OptionParameters::new(spot, strike, maturity, rate, volatility, OptionKind::Call);
        let call = price(&params).unwrap();
        let put = price(&params.with_kind(OptionKind::Put)).unwrap();
        let expected = spot - params.discounted_strike();
        prop_assert!((call - put - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_call_increases_with_spot(
        spot in 1.0f64..300.0,
        bump in 0.5f64..20.0,
        strike in 1.0f64..300.0,
        volatility in 0.05f64..1.0,
    ) {
        let lower = OptionParameters::new(spot, strike, 1.0, 0.03, volatility, OptionKind::Call);
        let higher = OptionParameters { spot: spot + bump, ..lower };
        prop_assert!(price(&higher).unwrap() >= price(&lower).unwrap() - 1e-12);
    }
}

//! Property-based tests for transforms, rolling statistics and ARIMA.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated price series.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use quant_econometrics::core::{FrameBuilder, TimeSeries};
use quant_econometrics::models::arima::{Arima, ArimaConfig};
use quant_econometrics::risk::{beta, correlation, max_drawdown};
use quant_econometrics::transform::{change, index, prices, returns, ReturnKind, Window};

/// Create a daily TimeSeries from a vector of values.
fn make_ts(values: &[f64]) -> TimeSeries {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..values.len())
        .map(|i| base + Duration::days(i as i64))
        .collect();
    TimeSeries::new(timestamps, values.to_vec()).unwrap()
}

/// Strictly positive prices with some variation.
fn price_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        prop::collection::vec(10.0..1000.0_f64, len).prop_map(|mut v| {
            for (i, val) in v.iter_mut().enumerate() {
                *val += (i as f64) * 0.001;
            }
            v
        })
    })
}

fn window_strategy() -> impl Strategy<Value = Window> {
    prop_oneof![
        Just(Window::default()),
        (2usize..6, 0usize..3).prop_map(|(size, ramp)| Window::new(size, ramp)),
    ]
}

fn return_kind_strategy() -> impl Strategy<Value = ReturnKind> {
    prop_oneof![Just(ReturnKind::Simple), Just(ReturnKind::Logarithmic)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prices_of_returns_recover_input(values in price_strategy(2, 40), kind in return_kind_strategy()) {
        let x = make_ts(&values);
        let r = returns(&x, 1, kind).unwrap();
        let rebuilt = prices(&r, values[0], kind).unwrap();

        prop_assert!(rebuilt.has_same_index(&x));
        for (a, e) in rebuilt.values().iter().zip(values.iter()) {
            prop_assert!((a - e).abs() <= 1e-8 * e.abs());
        }
    }

    #[test]
    fn index_and_change_start_at_identity(values in price_strategy(1, 30)) {
        let x = make_ts(&values);
        prop_assert_eq!(index(&x).values()[0], 1.0);
        prop_assert_eq!(change(&x).values()[0], 0.0);
        prop_assert_eq!(index(&x).len(), x.len());
    }

    #[test]
    fn rolling_output_is_aligned_and_ramped(values in price_strategy(3, 30), window in window_strategy()) {
        let x = make_ts(&values);
        let c = correlation(&x, &x, window, true).unwrap();
        prop_assert!(c.has_same_index(&x));
        for v in &c.values()[..window.ramp().min(c.len())] {
            prop_assert!(v.is_nan());
        }
    }

    #[test]
    fn self_correlation_and_self_beta_are_one(values in price_strategy(4, 30)) {
        let x = make_ts(&values);
        let c = correlation(&x, &x, Window::default(), true).unwrap();
        let b = beta(&x, &x, Window::default(), true).unwrap();

        for t in 3..x.len() {
            prop_assert!((c.values()[t] - 1.0).abs() < 1e-9);
            prop_assert!((b.values()[t] - 1.0).abs() < 1e-9);
        }
        prop_assert!(b.values()[..3].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn drawdown_is_never_positive(values in price_strategy(1, 40), window in window_strategy()) {
        let x = make_ts(&values);
        let dd = max_drawdown(&x, window).unwrap();
        for v in dd.values().iter().filter(|v| !v.is_nan()) {
            prop_assert!(*v <= 0.0 && *v > -1.0);
        }
    }

    #[test]
    fn arima_leading_missing_equals_p_plus_d(values in price_strategy(12, 40)) {
        let n = values.len();
        let frame = FrameBuilder::new()
            .timestamps(make_ts(&values).timestamps().to_vec())
            .column("x", values)
            .build()
            .unwrap();

        let mut arima = Arima::new();
        arima.fit(&frame).unwrap();
        let order = arima.best_params().unwrap().get("x").unwrap().order();
        let out = arima.transform(&frame).unwrap();
        let fitted = out.values("x").unwrap();

        prop_assert_eq!(fitted.len(), n);
        let leading = fitted.iter().take_while(|v| v.is_nan()).count();
        prop_assert_eq!(leading, order.p + order.d);
    }

    #[test]
    fn arima_selection_is_deterministic(values in price_strategy(12, 40)) {
        let frame = FrameBuilder::new()
            .timestamps(make_ts(&values).timestamps().to_vec())
            .column("x", values)
            .build()
            .unwrap();

        let mut parallel = Arima::new();
        let mut sequential = Arima::with_config(ArimaConfig::default().sequential());
        let a = parallel.fit(&frame).unwrap().clone();
        let b = sequential.fit(&frame).unwrap().clone();
        prop_assert_eq!(a, b);
    }
}

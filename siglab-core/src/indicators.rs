//! Rolling mean over a value series.
//!
//! Lookback: window - 1 (first valid value at index window-1).

/// Rolling arithmetic mean of `values` over a trailing window.
///
/// Output has the same length as the input. Positions before `window - 1`
/// are `NAN` — not enough values for a full window yet. A NaN inside the
/// current window yields a NaN mean for that position.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "window must be >= 1");

    let n = values.len();
    let mut out = vec![f64::NAN; n];
    if n < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = sum / window as f64;

    // Roll the window forward
    for i in window..n {
        let entering = values[i];
        let leaving = values[i - window];
        sum = sum - leaving + entering;

        // A NaN entering or leaving poisons the running sum permanently;
        // rebuild it from the current window.
        if entering.is_nan() || leaving.is_nan() || sum.is_nan() {
            sum = values[(i + 1 - window)..=i].iter().sum();
        }

        out[i] = sum / window as f64;
    }

    out
}

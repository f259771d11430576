//! Windows defined by a closed-form, piecewise shape over the sample index.

use std::f64::consts::PI;

use super::cosine_sum::hann;
use super::guards::{WindowLength, extend, len_guards, linspace, truncate};
use crate::window::error::{WindowError, WindowResult};

/// Offsets `n - (m - 1) / 2` for `n = 0..m`.
fn centered(m: usize) -> impl Iterator<Item = f64> {
    let mid = (m as f64 - 1.0) / 2.0;
    (0..m).map(move |n| n as f64 - mid)
}

/// Bartlett window: triangle whose endpoints are zero.
pub fn bartlett<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let denom = m as f64 - 1.0;
    let w = (0..m)
        .map(|n| {
            let n = n as f64;
            if n <= denom / 2.0 {
                2.0 * n / denom
            } else {
                2.0 - 2.0 * n / denom
            }
        })
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Triangular window with non-zero endpoints.
pub fn triang<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let half = (m + 1) / 2;
    let mf = m as f64;
    let mut w: Vec<f64> = if m % 2 == 0 {
        (1..=half).map(|n| (2.0 * n as f64 - 1.0) / mf).collect()
    } else {
        (1..=half).map(|n| 2.0 * n as f64 / (mf + 1.0)).collect()
    };
    // Odd lengths share the center sample.
    let mirrored = if m % 2 == 0 { half } else { half - 1 };
    let tail: Vec<f64> = w[..mirrored].iter().rev().copied().collect();
    w.extend(tail);

    Ok(truncate(w, needs_trunc))
}

/// Gaussian window with standard deviation `std` (in samples).
pub fn gaussian<L: WindowLength>(m: L, std: f64, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let sig2 = 2.0 * std * std;
    let w = centered(m).map(|n| (-(n * n) / sig2).exp()).collect();

    Ok(truncate(w, needs_trunc))
}

/// Generalized Gaussian window: `exp(-0.5 * |n / sig|^(2p))`.
///
/// `p = 1` is the Gaussian window; `p = 0.5` has the shape of the Laplace
/// distribution.
pub fn general_gaussian<L: WindowLength>(
    m: L,
    p: f64,
    sig: f64,
    sym: bool,
) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let w = centered(m)
        .map(|n| (-0.5 * (n / sig).abs().powf(2.0 * p)).exp())
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Exponential (Poisson) window.
///
/// `center` defaults to the middle of the (possibly extended) window. An
/// explicit `center` only makes sense for periodic windows, so combining it
/// with `sym = true` is rejected.
pub fn exponential<L: WindowLength>(
    m: L,
    center: Option<f64>,
    tau: f64,
    sym: bool,
) -> WindowResult<Vec<f64>> {
    if let (true, Some(center)) = (sym, center) {
        return Err(WindowError::ConflictingParameters {
            window: "exponential",
            reason: format!("center = {center} was given for a symmetric window"),
        });
    }
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let center = center.unwrap_or((m as f64 - 1.0) / 2.0);
    let w = (0..m)
        .map(|n| (-(n as f64 - center).abs() / tau).exp())
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Tukey (tapered cosine) window.
///
/// `alpha` is the fraction of the window inside the cosine tapers.
/// `alpha <= 0` is rectangular and `alpha >= 1` is a Hann window.
pub fn tukey<L: WindowLength>(m: L, alpha: f64, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if alpha.is_nan() {
        return Err(WindowError::InvalidParameter {
            window: "tukey".to_string(),
            parameter: "alpha",
            value: alpha,
            reason: "must be a number".to_string(),
        });
    }
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    if alpha <= 0.0 {
        return Ok(vec![1.0; m]);
    } else if alpha >= 1.0 {
        return hann(m, sym);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let denom = m as f64 - 1.0;
    let width = (alpha * denom / 2.0).floor() as usize;
    let w = (0..m)
        .map(|n| {
            let nf = n as f64;
            if n <= width {
                0.5 * (1.0 + (PI * (-1.0 + 2.0 * nf / alpha / denom)).cos())
            } else if n < m - width - 1 {
                1.0
            } else {
                0.5 * (1.0 + (PI * (-2.0 / alpha + 1.0 + 2.0 * nf / alpha / denom)).cos())
            }
        })
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Bohman window: the autocorrelation of a cosine window.
pub fn bohman<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let fac = linspace(-1.0, 1.0, m);
    let mut w = Vec::with_capacity(m);
    w.push(0.0);
    w.extend(fac[1..m - 1].iter().map(|x| {
        let x = x.abs();
        (1.0 - x) * (PI * x).cos() + 1.0 / PI * (PI * x).sin()
    }));
    w.push(0.0);

    Ok(truncate(w, needs_trunc))
}

/// Simple cosine (sine) window: `sin(pi / M * (n + 0.5))`.
pub fn cosine<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let step = PI / m as f64;
    let w = (0..m).map(|n| (step * (n as f64 + 0.5)).sin()).collect();

    Ok(truncate(w, needs_trunc))
}

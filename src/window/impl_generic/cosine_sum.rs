//! Weighted cosine-sum windows.
//!
//! Hamming and Hann are generalized Hamming windows (`[alpha, 1 - alpha]`);
//! Blackman and Nuttall use fixed coefficient lists. All of them reduce to
//! [`general_cosine`]:
//!
//! ```text
//! w[n] = sum_k a[k] * cos(k * phase[n]),   phase = linspace(-pi, pi, M)
//! ```

use std::f64::consts::PI;

use super::guards::{WindowLength, extend, len_guards, linspace, truncate};
use crate::window::error::{WindowError, WindowResult};

pub(crate) const BLACKMAN_COEFFS: [f64; 3] = [0.42, 0.50, 0.08];
pub(crate) const NUTTALL_COEFFS: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];

/// Generic weighted sum of cosine terms.
///
/// `a` must hold at least one coefficient.
pub fn general_cosine<L: WindowLength>(m: L, a: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    if a.is_empty() {
        return Err(WindowError::InvalidParameter {
            window: "general_cosine".to_string(),
            parameter: "a",
            value: 0.0,
            reason: "at least one coefficient is required".to_string(),
        });
    }
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let w: Vec<f64> = linspace(-PI, PI, m)
        .into_iter()
        .map(|phase| {
            a.iter()
                .enumerate()
                .map(|(k, &ak)| ak * (k as f64 * phase).cos())
                .sum::<f64>()
        })
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Generalized Hamming window, coefficients `[alpha, 1 - alpha]`.
pub fn general_hamming<L: WindowLength>(m: L, alpha: f64, sym: bool) -> WindowResult<Vec<f64>> {
    general_cosine(m, &[alpha, 1.0 - alpha], sym)
}

/// Hamming window: raised cosine with non-zero endpoints, optimized to
/// minimize the nearest side lobe.
pub fn hamming<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    general_hamming(m, 0.54, sym)
}

/// Hann window: raised cosine whose ends touch zero.
pub fn hann<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    general_hamming(m, 0.5, sym)
}

/// Blackman window: first three terms of a cosine summation.
pub fn blackman<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    general_cosine(m, &BLACKMAN_COEFFS, sym)
}

/// Minimum 4-term Blackman-Harris window according to Nuttall.
pub fn nuttall<L: WindowLength>(m: L, sym: bool) -> WindowResult<Vec<f64>> {
    general_cosine(m, &NUTTALL_COEFFS, sym)
}

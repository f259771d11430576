//! Kaiser and Taylor windows.

use std::f64::consts::PI;

use super::guards::{WindowLength, extend, len_guards, truncate};
use crate::window::error::{WindowError, WindowResult};

/// Kaiser window.
///
/// ```text
/// w[n] = I0(beta * sqrt(1 - ((n - alpha) / alpha)^2)) / I0(beta),  alpha = (M - 1) / 2
/// ```
///
/// `beta = 0` is rectangular; larger values narrow the window and lower the
/// sidelobes (5 ~ Hamming, 6 ~ Hann, 8.6 ~ Blackman).
pub fn kaiser<L: WindowLength>(m: L, beta: f64, sym: bool) -> WindowResult<Vec<f64>> {
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let alpha = (m as f64 - 1.0) / 2.0;
    let i0_beta = bessel_i0(beta);
    let w = (0..m)
        .map(|n| {
            let x = (n as f64 - alpha) / alpha;
            bessel_i0(beta * (1.0 - x.powi(2)).sqrt()) / i0_beta
        })
        .collect();

    Ok(truncate(w, needs_trunc))
}

/// Modified Bessel function of the first kind, order 0.
///
/// Sums the power series `sum_k ((x/2)^k / k!)^2`. Every term is positive, so
/// the sum keeps full double precision until it overflows near `|x| = 713`.
pub fn bessel_i0(x: f64) -> f64 {
    let q = x * x / 4.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;
    while k < 10_000.0 {
        term *= q / (k * k);
        sum += term;
        if term <= sum * f64::EPSILON {
            break;
        }
        k += 1.0;
    }
    sum
}

/// Scalar inverse hyperbolic cosine, `ln(x + sqrt(x^2 - 1))`.
fn acosh(x: f64) -> f64 {
    (x + (x.powi(2) - 1.0).sqrt()).ln()
}

/// Taylor coefficients `F[m]` for `m = 1..nbar`.
///
/// `sll` is the sidelobe suppression in dB as a positive magnitude. The
/// denominator excludes `k = m`, so it is the product of the factors below
/// and above `m`; either half is empty at the ends of the range.
pub fn taylor_coefficients(nbar: usize, sll: f64) -> Vec<f64> {
    let b = 10f64.powf(sll / 20.0);
    let a = acosh(b) / PI;
    let a2 = a.powi(2);
    let nb = nbar as f64;
    let s2 = nb.powi(2) / (a2 + (nb - 0.5).powi(2));

    let ma: Vec<f64> = (1..nbar).map(|m| m as f64).collect();
    let m2: Vec<f64> = ma.iter().map(|m| m * m).collect();

    (0..ma.len())
        .map(|mi| {
            let sign = if mi % 2 == 0 { 1.0 } else { -1.0 };
            let numer = sign
                * ma.iter()
                    .map(|k| 1.0 - m2[mi] / s2 / (a2 + (k - 0.5).powi(2)))
                    .product::<f64>();
            let below: f64 = m2[..mi].iter().map(|k2| 1.0 - m2[mi] / k2).product();
            let above: f64 = m2[mi + 1..].iter().map(|k2| 1.0 - m2[mi] / k2).product();
            numer / (2.0 * below * above)
        })
        .collect()
}

/// Taylor window.
///
/// Approximates the Dolph-Chebyshev window's constant sidelobe level for
/// `nbar` near-in sidelobes, `sll` dB below the main lobe. With `norm` the
/// window is scaled so the sample at `(M - 1) / 2` is exactly 1.
pub fn taylor<L: WindowLength>(
    m: L,
    nbar: usize,
    sll: f64,
    norm: bool,
    sym: bool,
) -> WindowResult<Vec<f64>> {
    if nbar == 0 {
        return Err(WindowError::InvalidParameter {
            window: "taylor".to_string(),
            parameter: "nbar",
            value: 0.0,
            reason: "at least one sidelobe is required".to_string(),
        });
    }
    if !sll.is_finite() || sll < 0.0 {
        return Err(WindowError::InvalidParameter {
            window: "taylor".to_string(),
            parameter: "sll",
            value: sll,
            reason: "must be a finite, non-negative attenuation in dB".to_string(),
        });
    }
    let (m, degenerate) = len_guards(m)?;
    if degenerate {
        return Ok(vec![1.0; m]);
    }
    let (m, needs_trunc) = extend(m, sym)?;

    let fm = taylor_coefficients(nbar, sll);
    let mf = m as f64;
    let eval = |t: f64| {
        1.0 + 2.0
            * fm.iter()
                .enumerate()
                .map(|(i, f)| {
                    let order = (i + 1) as f64;
                    f * (2.0 * PI * order * (t - mf / 2.0 + 0.5) / mf).cos()
                })
                .sum::<f64>()
    };

    let mut w: Vec<f64> = (0..m).map(|t| eval(t as f64)).collect();
    if norm {
        let peak = eval((mf - 1.0) / 2.0);
        for v in w.iter_mut() {
            *v /= peak;
        }
    }

    Ok(truncate(w, needs_trunc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < tol, "index {i}: {a} vs {e}");
        }
    }

    #[test]
    fn test_bessel_i0_reference() {
        assert_eq!(bessel_i0(0.0), 1.0);
        for (x, expected) in [
            (1.0, 1.2660658777520082),
            (5.0, 27.239871823604442),
            (8.6, 750.4611595631661),
        ] {
            let got = bessel_i0(x);
            assert!(((got - expected) / expected).abs() < 1e-14, "I0({x}) = {got}");
        }
        assert_eq!(bessel_i0(-3.0), bessel_i0(3.0));
    }

    #[test]
    fn test_kaiser_reference() {
        assert_close(
            &kaiser(7, 8.6, true).unwrap(),
            &[
                0.0013325139979024193,
                0.13040194654166432,
                0.6304119273359401,
                1.0,
                0.6304119273359401,
                0.13040194654166432,
                0.0013325139979024193,
            ],
            1e-12,
        );
        assert_close(
            &kaiser(6, 5.0, false).unwrap(),
            &[
                0.03671089227128667,
                0.32820195737232105,
                0.7753221044454067,
                1.0,
                0.7753221044454067,
                0.32820195737232105,
            ],
            1e-12,
        );
    }

    #[test]
    fn test_kaiser_beta_zero_is_rectangular() {
        for m in [2usize, 3, 10, 65] {
            assert_eq!(kaiser(m, 0.0, true).unwrap(), vec![1.0; m]);
            assert_eq!(kaiser(m, 0.0, false).unwrap(), vec![1.0; m]);
        }
    }

    #[test]
    fn test_taylor_coefficients_default() {
        let fm = taylor_coefficients(4, 30.0);
        assert_close(
            &fm,
            &[0.2926560110171551, -0.01578375064105314, 0.0021810393128200286],
            1e-12,
        );
    }

    #[test]
    fn test_taylor_coefficients_boundaries() {
        assert!(taylor_coefficients(1, 30.0).is_empty());
        // Single coefficient: both denominator halves are empty.
        assert_close(&taylor_coefficients(2, 20.0), &[0.15906863407927385], 1e-12);
    }

    #[test]
    fn test_taylor_reference() {
        assert_close(
            &taylor(10, 4, 30.0, true, true).unwrap(),
            &[
                0.2664981825065832,
                0.42992289705585945,
                0.6620647789400378,
                0.8662077974284865,
                0.984329399357107,
                0.984329399357107,
                0.8662077974284865,
                0.6620647789400378,
                0.42992289705585945,
                0.2664981825065832,
            ],
            1e-12,
        );
        assert_close(
            &taylor(6, 2, 20.0, true, true).unwrap(),
            &[
                0.5496279191743279,
                0.7586463292984736,
                0.9676647394226194,
                0.9676647394226194,
                0.7586463292984736,
                0.5496279191743279,
            ],
            1e-12,
        );
    }

    #[test]
    fn test_taylor_normalized_center_is_one() {
        let w = taylor(9, 4, 30.0, true, true).unwrap();
        assert_eq!(w[4], 1.0);
        let w = taylor(8, 4, 30.0, true, false).unwrap();
        assert_eq!(w[4], 1.0);
        assert_close(
            &w,
            &[
                0.2718834924087382,
                0.46690631985001974,
                0.7246751121792886,
                0.92465582532122,
                1.0,
                0.92465582532122,
                0.7246751121792886,
                0.46690631985001974,
            ],
            1e-12,
        );
    }

    #[test]
    fn test_taylor_without_norm_and_single_sidelobe() {
        let normed = taylor(16, 4, 35.0, true, true).unwrap();
        let raw = taylor(16, 4, 35.0, false, true).unwrap();
        let ratio = raw[0] / normed[0];
        for (r, n) in raw.iter().zip(&normed) {
            assert!((r / n - ratio).abs() < 1e-12);
        }
        assert_eq!(taylor(7, 1, 30.0, true, true).unwrap(), vec![1.0; 7]);
    }

    #[test]
    fn test_taylor_rejects_zero_nbar() {
        assert!(matches!(
            taylor(8, 0, 30.0, true, true),
            Err(WindowError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_taylor_rejects_negative_sll() {
        for sll in [-10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                taylor(8, 4, sll, true, false),
                Err(WindowError::InvalidParameter { parameter: "sll", .. })
            ));
        }
        assert!(taylor(8, 4, 0.0, true, false).is_ok());
    }
}

//! Name-to-family registry and the `get_window` dispatcher.

use super::cosine_sum::{blackman, general_cosine, general_hamming, hamming, hann, nuttall};
use super::guards::WindowLength;
use super::shapes::{
    bartlett, bohman, cosine, exponential, gaussian, general_gaussian, triang, tukey,
};
use super::special::{kaiser, taylor};
use super::types::{WindowKind, WindowSpec};
use crate::window::error::{WindowError, WindowResult};

/// A registered window family: `(length, positional params, symmetric)`.
pub type WindowFamily = fn(usize, &[f64], bool) -> WindowResult<Vec<f64>>;

static REGISTRY: [(WindowKind, WindowFamily); 16] = [
    (WindowKind::Bartlett, bartlett_family),
    (WindowKind::Kaiser, kaiser_family),
    (WindowKind::Nuttall, nuttall_family),
    (WindowKind::GeneralGaussian, general_gaussian_family),
    (WindowKind::GeneralCosine, general_cosine_family),
    (WindowKind::GeneralHamming, general_hamming_family),
    (WindowKind::Taylor, taylor_family),
    (WindowKind::Hamming, hamming_family),
    (WindowKind::Hann, hann_family),
    (WindowKind::Tukey, tukey_family),
    (WindowKind::Gaussian, gaussian_family),
    (WindowKind::Exponential, exponential_family),
    (WindowKind::Triang, triang_family),
    (WindowKind::Bohman, bohman_family),
    (WindowKind::Blackman, blackman_family),
    (WindowKind::Cosine, cosine_family),
];

/// Registered family function for `kind`.
pub fn lookup(kind: WindowKind) -> Option<WindowFamily> {
    REGISTRY
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|&(_, family)| family)
}

/// Return a window of a given length and type.
///
/// `fftbins = true` produces a periodic (DFT-even) window for spectral
/// analysis; `false` produces a symmetric window for filter design.
///
/// `gaussian`, `exponential` and `kaiser` must be requested with parameters.
/// See [`WindowSpec`] for the positional parameter order of each family.
///
/// ```
/// use specwin::{WindowSpec, get_window};
///
/// let w = get_window(&WindowSpec::from("hann"), 5, false).unwrap();
/// assert!((w[2] - 1.0).abs() < 1e-12);
///
/// let gauss = get_window(&WindowSpec::from(("gaussian", 7.0)), 512, true).unwrap();
/// assert_eq!(gauss.len(), 512);
/// ```
pub fn get_window<L: WindowLength>(
    window: &WindowSpec,
    win_length: L,
    fftbins: bool,
) -> WindowResult<Vec<f64>> {
    let sym = !fftbins;
    let name = window.name();

    if let WindowSpec::Bare(_) = window {
        if let Some(parameter) = WindowKind::from_name(name).and_then(WindowKind::required_parameter)
        {
            return Err(WindowError::MissingRequiredParameter {
                window: name.to_string(),
                parameter,
            });
        }
    }

    let family = WindowKind::from_name(name)
        .and_then(lookup)
        .ok_or_else(|| WindowError::UnknownWindowType {
            name: name.to_string(),
        })?;
    let m = win_length.to_window_length()?;

    log::debug!("generating {} window: length={}, symmetric={}", window, m, sym);
    family(m, window.params(), sym)
}

fn check_arity(window: &str, params: &[f64], max: usize) -> WindowResult<()> {
    if params.len() > max {
        return Err(WindowError::TooManyParameters {
            window: window.to_string(),
            expected: max,
            got: params.len(),
        });
    }
    Ok(())
}

fn required(
    window: &str,
    params: &[f64],
    index: usize,
    parameter: &'static str,
) -> WindowResult<f64> {
    params
        .get(index)
        .copied()
        .ok_or_else(|| WindowError::MissingRequiredParameter {
            window: window.to_string(),
            parameter,
        })
}

fn optional(params: &[f64], index: usize, default: f64) -> f64 {
    params.get(index).copied().unwrap_or(default)
}

fn bartlett_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("bartlett", params, 0)?;
    bartlett(m, sym)
}

fn kaiser_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("kaiser", params, 1)?;
    let beta = required("kaiser", params, 0, "beta")?;
    kaiser(m, beta, sym)
}

fn nuttall_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("nuttall", params, 0)?;
    nuttall(m, sym)
}

fn general_gaussian_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("general_gaussian", params, 2)?;
    let p = required("general_gaussian", params, 0, "p")?;
    let sig = required("general_gaussian", params, 1, "sig")?;
    general_gaussian(m, p, sig, sym)
}

fn general_cosine_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    required("general_cosine", params, 0, "a")?;
    general_cosine(m, params, sym)
}

fn general_hamming_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("general_hamming", params, 1)?;
    let alpha = required("general_hamming", params, 0, "alpha")?;
    general_hamming(m, alpha, sym)
}

fn taylor_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("taylor", params, 3)?;
    let nbar = optional(params, 0, 4.0);
    if !nbar.is_finite() || nbar < 1.0 || nbar.fract() != 0.0 {
        return Err(WindowError::InvalidParameter {
            window: "taylor".to_string(),
            parameter: "nbar",
            value: nbar,
            reason: "must be a positive integer".to_string(),
        });
    }
    let sll = optional(params, 1, 30.0);
    let norm = optional(params, 2, 1.0) != 0.0;
    taylor(m, nbar as usize, sll, norm, sym)
}

fn hamming_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("hamming", params, 0)?;
    hamming(m, sym)
}

fn hann_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("hann", params, 0)?;
    hann(m, sym)
}

fn tukey_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("tukey", params, 1)?;
    tukey(m, optional(params, 0, 0.5), sym)
}

fn gaussian_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("gaussian", params, 1)?;
    let std = required("gaussian", params, 0, "std")?;
    gaussian(m, std, sym)
}

/// `center` is unspecified when absent or NaN.
fn exponential_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("exponential", params, 2)?;
    let center = params.first().copied().filter(|c| !c.is_nan());
    let tau = optional(params, 1, 1.0);
    exponential(m, center, tau, sym)
}

fn triang_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("triang", params, 0)?;
    triang(m, sym)
}

fn bohman_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("bohman", params, 0)?;
    bohman(m, sym)
}

fn blackman_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("blackman", params, 0)?;
    blackman(m, sym)
}

fn cosine_family(m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
    check_arity("cosine", params, 0)?;
    cosine(m, sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A valid request for every family.
    fn all_specs() -> Vec<WindowSpec> {
        WindowKind::ALL
            .into_iter()
            .map(|kind| match kind {
                WindowKind::Kaiser => WindowSpec::from(("kaiser", 8.6)),
                WindowKind::Gaussian => WindowSpec::from(("gaussian", 2.0)),
                WindowKind::Exponential => WindowSpec::from(("exponential", vec![f64::NAN, 3.0])),
                WindowKind::GeneralGaussian => WindowSpec::from(("general_gaussian", vec![1.5, 3.0])),
                WindowKind::GeneralHamming => WindowSpec::from(("general_hamming", 0.6)),
                WindowKind::GeneralCosine => {
                    WindowSpec::from(("general_cosine", vec![0.4, 0.5, 0.1]))
                }
                other => WindowSpec::from(other),
            })
            .collect()
    }

    #[test]
    fn test_every_kind_is_registered() {
        for kind in WindowKind::ALL {
            assert!(lookup(kind).is_some(), "{kind} is not registered");
        }
    }

    #[test]
    fn test_output_length_matches_request() {
        for spec in all_specs() {
            for m in [2usize, 3, 8, 17, 128] {
                for fftbins in [true, false] {
                    let w = get_window(&spec, m, fftbins).unwrap();
                    assert_eq!(w.len(), m, "{spec} m={m} fftbins={fftbins}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_lengths_are_ones() {
        for spec in all_specs() {
            for fftbins in [true, false] {
                assert!(get_window(&spec, 0, fftbins).unwrap().is_empty());
                assert_eq!(get_window(&spec, 1, fftbins).unwrap(), vec![1.0]);
            }
        }
    }

    #[test]
    fn test_invalid_length_rejected_for_every_family() {
        for spec in all_specs() {
            assert!(matches!(
                get_window(&spec, -1, true),
                Err(WindowError::InvalidLength { .. })
            ));
            assert!(matches!(
                get_window(&spec, 4.5, false),
                Err(WindowError::InvalidLength { .. })
            ));
        }
    }

    #[test]
    fn test_hann_symmetric_five() {
        let w = get_window(&WindowSpec::from("hann"), 5, false).unwrap();
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, e) in w.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hamming_length_one() {
        assert_eq!(get_window(&WindowSpec::from("hamming"), 1, true).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_gaussian_peak() {
        let w = get_window(&WindowSpec::from(("gaussian", 1.0)), 5, false).unwrap();
        assert_eq!(w[2], 1.0);
        assert_eq!(w[0], w[4]);
        assert_eq!(w[1], w[3]);
    }

    #[test]
    fn test_bare_name_for_parameterized_family() {
        for name in ["kaiser", "gaussian", "exponential"] {
            let err = get_window(&WindowSpec::from(name), 5, true).unwrap_err();
            assert!(matches!(err, WindowError::MissingRequiredParameter { .. }), "{name}");
        }
        // An empty parameter list is fine where every parameter has a default.
        let w = get_window(&WindowSpec::with_params("exponential", []), 5, true).unwrap();
        assert_eq!(w.len(), 5);
        assert!(matches!(
            get_window(&WindowSpec::with_params("kaiser", []), 5, true),
            Err(WindowError::MissingRequiredParameter { parameter: "beta", .. })
        ));
    }

    #[test]
    fn test_unknown_window_type() {
        for name in ["rectangular", "Hann", "_hann", ""] {
            assert!(matches!(
                get_window(&WindowSpec::from(name), 8, true),
                Err(WindowError::UnknownWindowType { .. })
            ));
        }
    }

    #[test]
    fn test_too_many_parameters() {
        assert!(matches!(
            get_window(&WindowSpec::from(("hann", 0.5)), 8, true),
            Err(WindowError::TooManyParameters { expected: 0, got: 1, .. })
        ));
        assert!(matches!(
            get_window(&WindowSpec::from(("taylor", vec![4.0, 30.0, 1.0, 2.0])), 8, true),
            Err(WindowError::TooManyParameters { expected: 3, got: 4, .. })
        ));
    }

    #[test]
    fn test_exponential_center_conflicts_with_symmetric() {
        let spec = WindowSpec::from(("exponential", vec![2.0, 1.0]));
        assert!(matches!(
            get_window(&spec, 8, false),
            Err(WindowError::ConflictingParameters { .. })
        ));
        assert_eq!(get_window(&spec, 8, true).unwrap().len(), 8);
    }

    #[test]
    fn test_taylor_parameters() {
        let default = get_window(&WindowSpec::from("taylor"), 9, false).unwrap();
        assert_eq!(default[4], 1.0);
        let explicit =
            get_window(&WindowSpec::from(("taylor", vec![4.0, 30.0, 1.0])), 9, false).unwrap();
        assert_eq!(default, explicit);
        assert!(matches!(
            get_window(&WindowSpec::from(("taylor", 2.5)), 9, false),
            Err(WindowError::InvalidParameter { parameter: "nbar", .. })
        ));
        assert!(matches!(
            get_window(&WindowSpec::from(("taylor", vec![4.0, -10.0])), 8, false),
            Err(WindowError::InvalidParameter { parameter: "sll", .. })
        ));
    }

    #[test]
    fn test_tukey_nan_alpha_rejected() {
        assert!(matches!(
            get_window(&WindowSpec::from(("tukey", f64::NAN)), 6, true),
            Err(WindowError::InvalidParameter { parameter: "alpha", .. })
        ));
    }

    #[test]
    fn test_periodic_length_overflow_rejected() {
        for spec in [WindowSpec::from("hann"), WindowSpec::from(("kaiser", 5.0))] {
            assert!(matches!(
                get_window(&spec, usize::MAX, true),
                Err(WindowError::InvalidLength { .. })
            ));
        }
        assert!(matches!(
            get_window(&WindowSpec::from("hann"), 1e300, true),
            Err(WindowError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        assert_eq!(
            get_window(&WindowSpec::from(("kaiser", 5.0)), 16, true).unwrap(),
            kaiser(16, 5.0, false).unwrap()
        );
        assert_eq!(
            get_window(&WindowSpec::from(("tukey", 0.25)), 16, false).unwrap(),
            tukey(16, 0.25, true).unwrap()
        );
        assert_eq!(
            get_window(&WindowSpec::from("tukey"), 16, false).unwrap(),
            tukey(16, 0.5, true).unwrap()
        );
        assert_eq!(
            get_window(&"general_cosine,0.5,0.5".parse().unwrap(), 16, true).unwrap(),
            hann(16, false).unwrap()
        );
    }

    #[test]
    fn test_registry_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    get_window(&WindowSpec::from("blackman"), 64 + i, true).map(|w| w.len())
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), 64 + i);
        }
    }
}

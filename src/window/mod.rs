//! Window function algorithms for signal processing
//!
//! This module generates the tapering windows applied to a signal segment
//! before frequency-domain analysis. Every family supports both the symmetric
//! formulation (filter design) and the periodic, DFT-even formulation
//! (spectral analysis), and matches `scipy.signal.windows` for the same inputs.
//!
//! # Supported Windows
//!
//! | Name               | Parameters                 | First Sidelobe | Notes |
//! |--------------------|----------------------------|----------------|-------|
//! | `bartlett`         | -                          | -26 dB         | Zero endpoints |
//! | `triang`           | -                          | -26 dB         | Non-zero endpoints |
//! | `hann`             | -                          | -31.5 dB       | General purpose |
//! | `hamming`          | -                          | -42.7 dB       | Audio processing |
//! | `blackman`         | -                          | -58 dB         | High dynamic range |
//! | `nuttall`          | -                          | -93 dB         | 4-term Blackman-Harris |
//! | `general_hamming`  | alpha                      | -              | `[alpha, 1 - alpha]` |
//! | `general_cosine`   | a0, a1, ...                | -              | Weighted cosine sum |
//! | `bohman`           | -                          | -46 dB         | Autocorrelated cosine |
//! | `cosine`           | -                          | -23 dB         | Sine window |
//! | `tukey`            | [alpha = 0.5]              | -              | Flat top, cosine tapers |
//! | `gaussian`         | std                        | -              | |
//! | `general_gaussian` | p, sig                     | -              | `p = 1` is Gaussian |
//! | `exponential`      | [center], [tau = 1]        | -              | Poisson window |
//! | `kaiser`           | beta                       | Adjustable     | Bessel I0 ratio |
//! | `taylor`           | [nbar = 4], [sll = 30], [norm = 1] | -sll dB | Dolph-Chebyshev approximation |
//!
//! ## Kaiser Beta Guidelines
//!
//! | Beta | Approximate Sidelobe | Equivalent Window |
//! |------|---------------------|-------------------|
//! | 0    | -13 dB              | Rectangular       |
//! | 5    | -50 dB              | Hamming           |
//! | 6    | -60 dB              | Hann              |
//! | 8.6  | -90 dB              | Blackman          |
//! | 14   | -120 dB             | (very narrow)     |
//!
//! # Symmetric vs Periodic
//!
//! A periodic window of length `M` is the symmetric window of length `M + 1`
//! with its last sample dropped, so that it tiles as one period of a periodic
//! extension. [`get_window`] produces periodic windows when `fftbins = true`.
//!
//! ```text
//! symmetric Hann, M = 5:   [0, 0.5, 1, 0.5, 0]
//! periodic  Hann, M = 4:   [0, 0.5, 1, 0.5]
//! ```
//!
//! Lengths 0 and 1 always give that many ones.
//!
//! # Implementation Notes
//!
//! Window functions are computed in f64 on the host. [`WindowFunctions`]
//! copies the samples into a tensor of the requested dtype on the target
//! device.

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod traits;

pub use error::{WindowError, WindowResult};
pub use impl_generic::{
    WindowFamily, WindowKind, WindowLength, WindowSpec, bartlett, bessel_i0, blackman, bohman,
    cosine, exponential, extend, gaussian, general_cosine, general_gaussian, general_hamming,
    get_window, hamming, hann, kaiser, len_guards, lookup, nuttall, taylor, taylor_coefficients,
    triang, truncate, tukey,
};
pub use traits::{WindowFunctions, validate_window_dtype};

//! Window generation algorithms.
//!
//! Pure Rust implementations of every window family as f64 vectors, the
//! registry that maps names to families, and the `get_window` dispatcher.

mod cosine_sum;
mod guards;
mod registry;
mod shapes;
mod special;
mod types;

pub use cosine_sum::{blackman, general_cosine, general_hamming, hamming, hann, nuttall};
pub use guards::{WindowLength, extend, len_guards, truncate};
pub use registry::{WindowFamily, get_window, lookup};
pub use shapes::{bartlett, bohman, cosine, exponential, gaussian, general_gaussian, triang, tukey};
pub use special::{bessel_i0, kaiser, taylor, taylor_coefficients};
pub use types::{WindowKind, WindowSpec};

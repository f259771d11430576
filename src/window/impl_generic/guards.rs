//! Length validation and DFT-even extension shared by every window family.

use crate::window::error::{WindowError, WindowResult};

/// A requested window length.
///
/// Lengths arrive from callers as whatever numeric type their pipeline uses.
/// Conversion rejects negative, non-finite and fractional values, so every
/// family validates its length the same way before doing any math.
pub trait WindowLength: Copy {
    /// Convert to a sample count, or fail with [`WindowError::InvalidLength`].
    fn to_window_length(self) -> WindowResult<usize>;
}

macro_rules! impl_window_length_int {
    ($($t:ty),*) => {
        $(
            impl WindowLength for $t {
                fn to_window_length(self) -> WindowResult<usize> {
                    usize::try_from(self).map_err(|_| WindowError::InvalidLength {
                        length: self.to_string(),
                    })
                }
            }
        )*
    };
}

impl_window_length_int!(usize, u32, u64, i32, i64);

macro_rules! impl_window_length_float {
    ($($t:ty),*) => {
        $(
            impl WindowLength for $t {
                fn to_window_length(self) -> WindowResult<usize> {
                    if !self.is_finite() || self < 0.0 || self.fract() != 0.0 {
                        return Err(WindowError::InvalidLength {
                            length: self.to_string(),
                        });
                    }
                    Ok(self as usize)
                }
            }
        )*
    };
}

impl_window_length_float!(f32, f64);

/// Handle small or incorrect window lengths.
///
/// Returns the validated length and whether it is degenerate (`m <= 1`).
/// Degenerate windows are all ones and skip every formula, several of which
/// divide by `m - 1`.
pub fn len_guards<L: WindowLength>(m: L) -> WindowResult<(usize, bool)> {
    let m = m.to_window_length()?;
    Ok((m, m <= 1))
}

/// Extend window by 1 sample if needed for DFT-even symmetry.
///
/// Fails with [`WindowError::InvalidLength`] when the periodic extension of
/// `m` does not fit in a `usize`.
pub fn extend(m: usize, sym: bool) -> WindowResult<(usize, bool)> {
    if sym {
        return Ok((m, false));
    }
    let extended = m.checked_add(1).ok_or_else(|| WindowError::InvalidLength {
        length: m.to_string(),
    })?;
    Ok((extended, true))
}

/// Truncate window by 1 sample if it was extended.
pub fn truncate(mut w: Vec<f64>, needed: bool) -> Vec<f64> {
    if needed {
        w.pop();
    }
    w
}

/// `num` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// The first half is stepped forward from `start` and the second half
/// backward from `stop`, so a range symmetric about zero produces samples
/// that are exact negatives of each other.
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let half = num / 2;
            (0..num)
                .map(|i| {
                    if i < half {
                        start + step * i as f64
                    } else {
                        stop - step * (num - 1 - i) as f64
                    }
                })
                .collect()
        }
    }
}

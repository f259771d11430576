use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::window::error::{WindowError, WindowResult};
use crate::window::impl_generic::{WindowKind, WindowLength, WindowSpec};

/// Trait for generating window functions as tensors.
///
/// Window functions are multiplied with a signal before FFT analysis to reduce
/// spectral leakage. Different windows offer different tradeoffs between
/// frequency resolution and sidelobe suppression.
///
/// # Backend Implementation
///
/// Backends only provide [`get_window`](WindowFunctions::get_window). Samples
/// are generated on the host in f64 and copied into a tensor of the requested
/// dtype; the named shortcuts are defined in terms of it.
///
/// # Example
///
/// ```ignore
/// use specwin::window::{WindowFunctions, WindowSpec};
/// use numr::runtime::cpu::{CpuClient, CpuDevice};
/// use numr::dtype::DType;
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
/// let window = client.get_window(&WindowSpec::from(("kaiser", 8.6)), 1024, true, DType::F32, &device)?;
/// ```
pub trait WindowFunctions<R: Runtime> {
    /// Generate the window described by `window` as a 1-D tensor of
    /// `win_length` samples.
    ///
    /// `fftbins = true` gives a periodic window, `false` a symmetric one.
    /// `dtype` must be `F32` or `F64`.
    fn get_window<L: WindowLength>(
        &self,
        window: &WindowSpec,
        win_length: L,
        fftbins: bool,
        dtype: DType,
        device: &R::Device,
    ) -> WindowResult<Tensor<R>>;

    /// Generate a periodic Hann (Hanning) window.
    ///
    /// General-purpose window with good frequency resolution and moderate
    /// sidelobe suppression (-31.5 dB first sidelobe).
    ///
    /// # Formula (periodic)
    ///
    /// ```text
    /// w[n] = 0.5 - 0.5 * cos(2*pi*n / N)
    /// ```
    fn hann_window(&self, size: usize, dtype: DType, device: &R::Device) -> WindowResult<Tensor<R>> {
        self.get_window(&WindowSpec::from(WindowKind::Hann), size, true, dtype, device)
    }

    /// Generate a periodic Hamming window.
    ///
    /// Better sidelobe suppression than Hann (-42.7 dB first sidelobe) but
    /// doesn't go to zero at the edges.
    ///
    /// # Formula (periodic)
    ///
    /// ```text
    /// w[n] = 0.54 - 0.46 * cos(2*pi*n / N)
    /// ```
    fn hamming_window(
        &self,
        size: usize,
        dtype: DType,
        device: &R::Device,
    ) -> WindowResult<Tensor<R>> {
        self.get_window(&WindowSpec::from(WindowKind::Hamming), size, true, dtype, device)
    }

    /// Generate a periodic Blackman window.
    ///
    /// Excellent sidelobe suppression (-58 dB first sidelobe) at the cost of a
    /// wider main lobe than Hann/Hamming.
    ///
    /// # Formula (periodic)
    ///
    /// ```text
    /// w[n] = 0.42 - 0.5 * cos(2*pi*n / N) + 0.08 * cos(4*pi*n / N)
    /// ```
    fn blackman_window(
        &self,
        size: usize,
        dtype: DType,
        device: &R::Device,
    ) -> WindowResult<Tensor<R>> {
        self.get_window(&WindowSpec::from(WindowKind::Blackman), size, true, dtype, device)
    }

    /// Generate a periodic Kaiser window.
    ///
    /// # Beta Parameter Guidelines
    ///
    /// | Beta  | Sidelobe Attenuation | Approximate Equivalent |
    /// |-------|---------------------|------------------------|
    /// | 0     | -13 dB             | Rectangular            |
    /// | 5     | -50 dB             | Hamming                |
    /// | 6     | -60 dB             | Hann                   |
    /// | 8.6   | -90 dB             | Blackman               |
    fn kaiser_window(
        &self,
        size: usize,
        beta: f64,
        dtype: DType,
        device: &R::Device,
    ) -> WindowResult<Tensor<R>> {
        self.get_window(&WindowSpec::from(("kaiser", beta)), size, true, dtype, device)
    }
}

/// Validate window dtype (must be F32 or F64).
pub fn validate_window_dtype(dtype: DType) -> WindowResult<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(WindowError::UnsupportedDType { dtype }),
    }
}

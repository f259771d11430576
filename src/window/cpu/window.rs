//! CPU backend implementation for window functions.

use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use crate::window::error::{WindowError, WindowResult};
use crate::window::impl_generic::{WindowLength, WindowSpec, get_window};
use crate::window::traits::{WindowFunctions, validate_window_dtype};

impl WindowFunctions<CpuRuntime> for CpuClient {
    fn get_window<L: WindowLength>(
        &self,
        window: &WindowSpec,
        win_length: L,
        fftbins: bool,
        dtype: DType,
        device: &<CpuRuntime as Runtime>::Device,
    ) -> WindowResult<Tensor<CpuRuntime>> {
        validate_window_dtype(dtype)?;
        let values = get_window(window, win_length, fftbins)?;
        create_window_tensor(values, dtype, device)
    }
}

fn create_window_tensor(
    values: Vec<f64>,
    dtype: DType,
    device: &<CpuRuntime as Runtime>::Device,
) -> WindowResult<Tensor<CpuRuntime>> {
    let size = values.len();
    log::trace!("materializing window tensor: size={}, dtype={:?}", size, dtype);
    match dtype {
        DType::F32 => {
            let values_f32: Vec<f32> = values.iter().map(|&v| v as f32).collect();
            Ok(Tensor::<CpuRuntime>::from_slice(
                &values_f32,
                &[size],
                device,
            )?)
        }
        DType::F64 => Ok(Tensor::<CpuRuntime>::from_slice(&values, &[size], device)?),
        _ => Err(WindowError::UnsupportedDType { dtype }),
    }
}

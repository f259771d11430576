//! specwin - Spectral window functions
//!
//! specwin generates the tapering windows used before frequency-domain
//! analysis (STFT, spectrograms, Welch PSD, FIR design). Built on numr's
//! tensor runtime, windows are computed in f64 and handed out either as plain
//! vectors or as numr tensors of dtype F32/F64.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      specwin                             │
//! │   WindowSpec ─► registry ─► family ─► Vec<f64>/Tensor   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │            (tensors, dtypes, runtimes)                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`window`] - Window families, the name registry and `get_window`
//!
//! # Example
//!
//! ```ignore
//! use specwin::{WindowFunctions, WindowSpec, get_window};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//! use numr::dtype::DType;
//!
//! // Plain f64 samples
//! let hann = get_window(&WindowSpec::from("hann"), 512, true)?;
//!
//! // As a tensor
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let taylor = client.get_window(&"taylor,5,40".parse()?, 512, true, DType::F32, &device)?;
//! ```

pub mod window;

pub use window::{
    WindowError, WindowFunctions, WindowKind, WindowLength, WindowResult, WindowSpec, get_window,
};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;

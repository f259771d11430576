mod window;

pub use window::{WindowFunctions, validate_window_dtype};

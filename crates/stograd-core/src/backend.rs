use burn::backend::ndarray::NdArrayDevice;

/// Default compute backend for the library.
///
/// The operators are generic over any `burn` backend; this alias is the
/// CPU target used by the tests and examples. Swap it for a GPU backend
/// type alias when embedding the operators in an accelerated pipeline.
pub type CpuBackend = burn::backend::NdArray;

pub fn init_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

//! Shared helpers for the stograd examples.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Read a one-element tensor back as an f32.
pub fn scalar_of<B: Backend>(tensor: Tensor<B, 1>) -> f32 {
    let data: Vec<f32> = tensor.into_data().to_vec().expect("read scalar");
    data[0]
}

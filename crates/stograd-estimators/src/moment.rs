//! Running-moment accumulation over repeated draws.
//!
//! The estimators are only meaningful in expectation, so their tests and
//! demonstrations average samples and surrogate weights over many keyed
//! invocations and compare against closed-form moments. This accumulator
//! keeps the running sum without scaling; the mean is taken at the end.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Accumulates a running sum of same-shaped tensors.
pub struct MomentAccumulator<B: Backend, const D: usize> {
    sum: Option<Tensor<B, D>>,
    count: usize,
}

impl<B: Backend, const D: usize> MomentAccumulator<B, D> {
    pub fn new() -> Self {
        Self {
            sum: None,
            count: 0,
        }
    }

    /// Add one observation to the running sum.
    pub fn accumulate(&mut self, value: Tensor<B, D>) {
        self.sum = Some(match self.sum.take() {
            Some(sum) => sum + value,
            None => value,
        });
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The elementwise mean of everything accumulated so far, or `None` if
    /// nothing was.
    pub fn mean(&self) -> Option<Tensor<B, D>> {
        self.sum
            .as_ref()
            .map(|sum| sum.clone() / self.count as f32)
    }
}

impl<B: Backend, const D: usize> Default for MomentAccumulator<B, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stograd_core::backend::{init_device, CpuBackend};

    #[test]
    fn test_empty_accumulator_has_no_mean() {
        let acc = MomentAccumulator::<CpuBackend, 1>::new();
        assert_eq!(acc.count(), 0);
        assert!(acc.mean().is_none());
    }

    #[test]
    fn test_mean_of_observations() {
        let device = init_device();
        let mut acc = MomentAccumulator::<CpuBackend, 1>::new();

        acc.accumulate(Tensor::from_floats([1.0, 2.0].as_slice(), &device));
        acc.accumulate(Tensor::from_floats([3.0, 6.0].as_slice(), &device));

        assert_eq!(acc.count(), 2);
        let mean: Vec<f32> = acc
            .mean()
            .expect("accumulated")
            .into_data()
            .to_vec()
            .expect("read mean");
        assert_eq!(mean, vec![2.0, 4.0]);
    }
}

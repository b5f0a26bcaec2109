//! Geometric sampling with a weighted-jump gradient.
//!
//! The geometric distribution here counts trials until the first success,
//! supported on {1, 2, ...}. Sampling uses the inverse-CDF transform
//! `ceil(log(1 - u) / log(1 - p))`.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use stograd_core::config::GEOMETRIC_CLAMP;

use crate::rng::{uniform_open, DrawKey};
use crate::sampler::AbstractSurrogateSampler;

/// State threaded from a Geometric `sample` to its `estimate_gradient`.
pub struct GeometricContext<B: Backend, const D: usize> {
    /// Realized stopping times, positive integers stored as floats.
    pub sample: Tensor<B, D>,
    /// Success probabilities AFTER clamping; the backward pass divides by
    /// these and by their complement.
    pub probs: Tensor<B, D>,
}

/// Geometric operator with the weighted-jump gradient.
///
/// Treats the draw as a sequence of Bernoulli trials; the surrogate weight
/// reflects how the stopping time responds to the trial probability. The
/// probability is clamped into [`GEOMETRIC_CLAMP`] before sampling, and the
/// clamped value is what the context saves.
pub struct GeometricJump<B: Backend, const D: usize> {
    pub probs: Tensor<B, D>,
}

impl<B: Backend, const D: usize> GeometricJump<B, D> {
    pub fn new(probs: Tensor<B, D>) -> Self {
        Self { probs }
    }
}

impl<B: Backend, const D: usize> AbstractSurrogateSampler<B, D> for GeometricJump<B, D> {
    type Context = GeometricContext<B, D>;

    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, D>, Self::Context) {
        let probs = self
            .probs
            .clone()
            .clamp(GEOMETRIC_CLAMP.lo, GEOMETRIC_CLAMP.hi);

        let uniform = uniform_open::<B, D>(key, probs.dims(), device);

        // Inverse CDF; u interior to (0, 1) keeps the ratio positive, so
        // the ceiling lands on {1, 2, ...}.
        let sample = ((uniform.neg() + 1.0).log() / (probs.clone().neg() + 1.0).log()).ceil();

        let context = GeometricContext {
            sample: sample.clone(),
            probs,
        };
        (sample, context)
    }

    fn estimate_gradient(
        &self,
        context: Self::Context,
        grad_output: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let GeometricContext { sample, probs } = context;

        let up = probs.clone().recip();
        let down = (sample.clone() - 1.0) / (probs.neg() + 1.0);

        // A stopping time of 1 has no shorter neighbour to jump down to.
        let up = up.mask_fill(sample.clone().lower_equal_elem(0.0), 0.0);
        let down = down.mask_fill(sample.lower_equal_elem(1.0), 0.0);

        grad_output * ((up + down) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stograd_core::backend::{init_device, CpuBackend};

    fn tensor_1d(data: &[f32]) -> Tensor<CpuBackend, 1> {
        Tensor::from_floats(data, &init_device())
    }

    #[test]
    fn test_forward_outputs_are_positive_integers() {
        let device = init_device();
        let op = GeometricJump::new(tensor_1d(&[0.3; 64]));

        let (sample, _context) = op.sample(DrawKey::new(17), &device);
        let data: Vec<f32> = sample.into_data().to_vec().expect("read sample");

        for &s in &data {
            assert!(s >= 1.0, "Stopping time {} should be at least 1", s);
            assert_eq!(s.fract(), 0.0, "Stopping time {} should be integral", s);
        }
    }

    #[test]
    fn test_clamp_keeps_backward_finite() {
        // p = 0 and p = 1 are clamped before the context is saved, so the
        // backward pass divides by interior values only.
        let device = init_device();
        let op = GeometricJump::new(tensor_1d(&[0.0, 1.0]));

        let (sample, context) = op.sample(DrawKey::new(17), &device);
        let grad = op.estimate_gradient(context, sample.ones_like());
        let data: Vec<f32> = grad.into_data().to_vec().expect("read grad");

        for &g in &data {
            assert!(g.is_finite(), "Gradient {} should be finite", g);
        }
    }

    #[test]
    fn test_clamped_probs_are_saved() {
        let device = init_device();
        let op = GeometricJump::new(tensor_1d(&[0.0, 0.5, 1.0]));

        let (_sample, context) = op.sample(DrawKey::new(3), &device);
        let saved: Vec<f32> = context.probs.into_data().to_vec().expect("read probs");

        assert_eq!(saved[0], GEOMETRIC_CLAMP.lo);
        assert_eq!(saved[1], 0.5);
        assert_eq!(saved[2], GEOMETRIC_CLAMP.hi);
    }

    #[test]
    fn test_jump_weight_interior_sample() {
        // p = 0.2, forced sample = 3: (1/0.2)/2 + (2/0.8)/2 = 2.5 + 1.25
        let op = GeometricJump::new(tensor_1d(&[0.2]));
        let context = GeometricContext {
            sample: tensor_1d(&[3.0]),
            probs: tensor_1d(&[0.2]),
        };

        let grad = op.estimate_gradient(context, tensor_1d(&[1.0]));
        let data: Vec<f32> = grad.into_data().to_vec().expect("read grad");

        assert!(
            (data[0] - 3.75).abs() < 1e-5,
            "Expected 3.75, got {}",
            data[0]
        );
    }

    #[test]
    fn test_jump_weight_at_minimum_sample() {
        // sample = 1 excludes the downward term: only (1/p)/2 remains.
        let op = GeometricJump::new(tensor_1d(&[0.2]));
        let context = GeometricContext {
            sample: tensor_1d(&[1.0]),
            probs: tensor_1d(&[0.2]),
        };

        let grad = op.estimate_gradient(context, tensor_1d(&[1.0]));
        let data: Vec<f32> = grad.into_data().to_vec().expect("read grad");

        assert!(
            (data[0] - 2.5).abs() < 1e-5,
            "Expected (1/0.2)/2 = 2.5, got {}",
            data[0]
        );
    }
}

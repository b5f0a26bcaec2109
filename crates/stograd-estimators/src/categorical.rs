//! Single-sample categorical sampling with a downward-jump gradient.
//!
//! The operator processes exactly one probability vector per call: drawing
//! an index requires comparing a scalar uniform against the cumulative
//! probabilities, which does not vectorize across a batch. The inverse-CDF
//! search itself is factored out as [`draw_index`] so batched callers can
//! loop it over rows and feed each sampled index to its own gradient
//! computation.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use stograd_core::error::StogradError;

use crate::rng::{uniform_scalar, DrawKey};
use crate::sampler::AbstractSurrogateSampler;

/// State threaded from a Categorical `sample` to its `estimate_gradient`.
pub struct CategoricalContext<B: Backend> {
    /// The probability vector the index was drawn from.
    pub probs: Tensor<B, 1>,
    /// The sampled index.
    pub index: usize,
}

/// Inverse-CDF draw: the first index whose cumulative probability reaches
/// `u`.
///
/// Float roundoff can leave the final cumulative sum slightly below 1, so a
/// `u` above it falls back to the last index instead of biasing the draw.
pub fn draw_index(probs: &[f32], u: f32) -> usize {
    let mut cum = 0.0f32;
    for (idx, &p) in probs.iter().enumerate() {
        cum += p;
        if u <= cum {
            return idx;
        }
    }
    probs.len() - 1
}

/// Categorical operator over a single probability vector, with a
/// downward-jump gradient.
///
/// The sample is the drawn index, returned as a one-element float tensor so
/// it can participate in downstream arithmetic. The backward rule only
/// considers the jump from index `i` to `i - 1`: gradient mass lands on
/// position `i` alone, and a draw of index 0 yields the zero vector. The
/// estimator never considers upward jumps; that asymmetry is deliberate and
/// documented rather than corrected.
pub struct CategoricalJump<B: Backend> {
    probs: Tensor<B, 1>,
}

impl<B: Backend> CategoricalJump<B> {
    /// The vector must be non-empty; that it sums to 1 is the caller's
    /// responsibility and is not validated.
    pub fn new(probs: Tensor<B, 1>) -> Result<Self, StogradError> {
        if probs.dims()[0] == 0 {
            return Err(StogradError::EmptyProbabilityVector);
        }
        Ok(Self { probs })
    }
}

impl<B: Backend> AbstractSurrogateSampler<B, 1> for CategoricalJump<B> {
    type Context = CategoricalContext<B>;

    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, 1>, Self::Context) {
        let probs_data: Vec<f32> = self
            .probs
            .clone()
            .into_data()
            .to_vec()
            .expect("read probabilities");

        let index = draw_index(&probs_data, uniform_scalar(key));

        let sample = Tensor::<B, 1>::from_floats([index as f32].as_slice(), device);
        let context = CategoricalContext {
            probs: self.probs.clone(),
            index,
        };
        (sample, context)
    }

    fn estimate_gradient(
        &self,
        context: Self::Context,
        grad_output: Tensor<B, 1>,
    ) -> Tensor<B, 1> {
        let CategoricalContext { probs, index } = context;

        // The sample is a single index, so the upstream gradient must be a
        // one-element tensor. The elementwise operators get this check from
        // the tensor engine; the scalar path has to assert it itself.
        debug_assert_eq!(
            grad_output.dims(),
            [1],
            "grad_output must have the shape of the sample"
        );

        // Index 0 has no lower neighbour to jump to.
        if index == 0 {
            return probs.zeros_like();
        }

        let device = probs.device();
        let probs_data: Vec<f32> = probs.into_data().to_vec().expect("read probabilities");
        let upstream: Vec<f32> = grad_output
            .into_data()
            .to_vec()
            .expect("read upstream gradient");

        // Total mass strictly below the sampled category; the candidate
        // alternative outcome is index - 1, a unit jump down, so the
        // derivative contribution is -w.
        let f_lower: f32 = probs_data[..index].iter().sum();
        let w = f_lower / probs_data[index];

        let mut grad = vec![0.0f32; probs_data.len()];
        grad[index] = upstream[0] * -w;

        Tensor::<B, 1>::from_floats(grad.as_slice(), &device)
    }
}

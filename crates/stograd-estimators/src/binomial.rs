//! Binomial sampling with a weighted-jump gradient.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::rng::{uniform_open, DrawKey};
use crate::sampler::AbstractSurrogateSampler;

/// State threaded from a Binomial `sample` to its `estimate_gradient`.
pub struct BinomialContext<B: Backend, const D: usize> {
    /// Realized success counts, in `{0, ..., n}` per element.
    pub sample: Tensor<B, D>,
    /// The per-trial success probabilities.
    pub probs: Tensor<B, D>,
    /// The trial count the counts were drawn with.
    pub n_trials: u32,
}

/// Binomial operator with the weighted-jump gradient.
///
/// The trial count `n` is a plain integer and is not differentiable; the
/// gradient returned by `estimate_gradient` is with respect to `p` only.
pub struct BinomialJump<B: Backend, const D: usize> {
    pub n_trials: u32,
    pub probs: Tensor<B, D>,
}

impl<B: Backend, const D: usize> BinomialJump<B, D> {
    /// `probs` must lie strictly inside `(0, 1)`; this is not validated.
    pub fn new(n_trials: u32, probs: Tensor<B, D>) -> Self {
        Self { n_trials, probs }
    }
}

impl<B: Backend, const D: usize> AbstractSurrogateSampler<B, D> for BinomialJump<B, D> {
    type Context = BinomialContext<B, D>;

    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, D>, Self::Context) {
        // Sum of n independent Bernoulli trials, one subkey per trial.
        let mut counts = self.probs.zeros_like();
        for trial_key in key.children(self.n_trials as usize) {
            let uniform = uniform_open::<B, D>(trial_key, self.probs.dims(), device);
            counts = counts + uniform.lower_equal(self.probs.clone()).float();
        }

        let context = BinomialContext {
            sample: counts.clone(),
            probs: self.probs.clone(),
            n_trials: self.n_trials,
        };
        (counts, context)
    }

    fn estimate_gradient(
        &self,
        context: Self::Context,
        grad_output: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let BinomialContext {
            sample,
            probs,
            n_trials,
        } = context;
        let n = n_trials as f32;

        // sample/p is the rate at which one fewer success would have
        // occurred under a small decrease in p; (n - sample)/(1 - p) is the
        // symmetric upward rate. Boundary counts have only one neighbour.
        let down = sample.clone() / probs.clone();
        let up = (sample.clone().neg() + n) / (probs.neg() + 1.0);

        let down = down.mask_fill(sample.clone().lower_equal_elem(0.0), 0.0);
        let up = up.mask_fill(sample.greater_equal_elem(n), 0.0);

        grad_output * ((down + up) * 0.5)
    }
}

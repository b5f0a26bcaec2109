//! Bernoulli sampling with straight-through and weighted-jump gradients.
//!
//! Both operators share the same forward rule (elementwise `u <= p`); they
//! differ only in the surrogate weight the backward rule produces.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::rng::{uniform_open, DrawKey};
use crate::sampler::AbstractSurrogateSampler;

/// State threaded from a Bernoulli `sample` to its `estimate_gradient`.
pub struct BernoulliContext<B: Backend, const D: usize> {
    /// The realized draw, 0.0 or 1.0 per element.
    pub sample: Tensor<B, D>,
    /// The success probabilities the draw was taken from.
    pub probs: Tensor<B, D>,
}

fn draw_bernoulli<B: Backend, const D: usize>(
    probs: &Tensor<B, D>,
    key: DrawKey,
    device: &B::Device,
) -> Tensor<B, D> {
    let uniform = uniform_open::<B, D>(key, probs.dims(), device);
    uniform.lower_equal(probs.clone()).float()
}

/// Bernoulli operator with the straight-through gradient.
///
/// The surrogate weight is the constant 1: the upstream gradient passes
/// through the sampling step unchanged. Biased but zero-variance; kept as
/// the baseline the jump estimator is compared against.
pub struct BernoulliStraightThrough<B: Backend, const D: usize> {
    pub probs: Tensor<B, D>,
}

impl<B: Backend, const D: usize> BernoulliStraightThrough<B, D> {
    /// `probs` must lie in `[0, 1]`; this is not validated.
    pub fn new(probs: Tensor<B, D>) -> Self {
        Self { probs }
    }
}

impl<B: Backend, const D: usize> AbstractSurrogateSampler<B, D>
    for BernoulliStraightThrough<B, D>
{
    type Context = BernoulliContext<B, D>;

    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, D>, Self::Context) {
        let sample = draw_bernoulli(&self.probs, key, device);
        let context = BernoulliContext {
            sample: sample.clone(),
            probs: self.probs.clone(),
        };
        (sample, context)
    }

    fn estimate_gradient(
        &self,
        _context: Self::Context,
        grad_output: Tensor<B, D>,
    ) -> Tensor<B, D> {
        grad_output
    }
}

/// Bernoulli operator with the weighted-jump gradient.
///
/// Where the draw came up 1 the weight is `1/(2p)` (the outcome could have
/// jumped down to 0 under a parameter nudge); where it came up 0 the weight
/// is `1/(2(1-p))` (it could have jumped up to 1). The halving averages the
/// two perturbation directions, which keeps the estimator unbiased for
/// either sign of nudge.
///
/// The weights diverge as `p` approaches 0 or 1; keeping `p` interior is
/// the caller's responsibility.
pub struct BernoulliJump<B: Backend, const D: usize> {
    pub probs: Tensor<B, D>,
}

impl<B: Backend, const D: usize> BernoulliJump<B, D> {
    /// `probs` must lie strictly inside `(0, 1)`; this is not validated.
    pub fn new(probs: Tensor<B, D>) -> Self {
        Self { probs }
    }
}

impl<B: Backend, const D: usize> AbstractSurrogateSampler<B, D> for BernoulliJump<B, D> {
    type Context = BernoulliContext<B, D>;

    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, D>, Self::Context) {
        let sample = draw_bernoulli(&self.probs, key, device);
        let context = BernoulliContext {
            sample: sample.clone(),
            probs: self.probs.clone(),
        };
        (sample, context)
    }

    fn estimate_gradient(
        &self,
        context: Self::Context,
        grad_output: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let BernoulliContext { sample, probs } = context;

        let w_down = probs.clone().recip() * 0.5;
        let w_up = (probs.neg() + 1.0).recip() * 0.5;

        let ws = w_up.mask_where(sample.equal_elem(1.0), w_down);
        grad_output * ws
    }
}

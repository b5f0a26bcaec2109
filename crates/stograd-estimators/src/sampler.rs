use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::rng::DrawKey;

/// Trait for discrete sampling operators that carry a surrogate gradient.
///
/// An operator pairs a forward sampling rule with a backward rule. `sample`
/// draws one realization per element from the distribution the operator was
/// constructed around and returns it together with a context value holding
/// whatever the backward rule needs (the realization, the parameters, the
/// sampled index). `estimate_gradient` consumes that context and the
/// upstream gradient and returns `grad_output * w`, where `w` is the
/// operator's surrogate weight: an estimate of how the expected downstream
/// quantity moves with the parameter, not the (degenerate) pathwise
/// derivative of the draw itself.
///
/// Contexts are taken by value: each `sample` produces exactly one context
/// and each context backs exactly one `estimate_gradient` call. Reuse does
/// not compile.
///
/// Operators are stateless; a caller may construct one per invocation and
/// evaluate many invocations concurrently.
pub trait AbstractSurrogateSampler<B: Backend, const D: usize> {
    /// Values saved by `sample` for the matching `estimate_gradient` call.
    type Context;

    /// Draw one realization per element, deterministically from `key`.
    fn sample(&self, key: DrawKey, device: &B::Device) -> (Tensor<B, D>, Self::Context);

    /// Consume the saved context and upstream gradient, returning the
    /// gradient to propagate to the operator's differentiable parameter.
    ///
    /// `grad_output` must have the shape of the sample returned by the
    /// matching `sample` call; a mismatch surfaces as a runtime shape error
    /// from the tensor backend.
    fn estimate_gradient(&self, context: Self::Context, grad_output: Tensor<B, D>)
        -> Tensor<B, D>;
}

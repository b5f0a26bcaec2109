//! # stograd-estimators
//!
//! Surrogate-gradient operators for sampling from discrete distributions.
//!
//! A plain draw from a discrete distribution is piecewise constant in the
//! distribution's parameters, so its true derivative is zero almost
//! everywhere. Each operator here pairs a forward sampling rule with a
//! backward rule that substitutes a perturbation-analysis estimate: the
//! rate at which a parameter nudge makes the outcome jump to a neighboring
//! value, times the size of that jump.
//!
//! Available operators:
//!
//! - [`BernoulliStraightThrough`]: biased, zero-variance identity gradient
//!   (baseline/ablation)
//! - [`BernoulliJump`]: unbiased two-direction jump weights
//! - [`BinomialJump`]: jump weights for a fixed trial count
//! - [`GeometricJump`]: jump weights for the trial-until-success stopping time
//! - [`CategoricalJump`]: downward-jump weight for a single sampled index
//!
//! All five implement [`AbstractSurrogateSampler`]: `sample` draws a
//! realization and returns it with a context value, `estimate_gradient`
//! consumes that context together with the upstream gradient. Contexts move
//! by value, so a context cannot back two gradient calls.
//!
//! ## Draw Keys
//!
//! Draws are deterministic functions of a [`DrawKey`] (JAX-style
//! derivation; subordinate keys are hashed from the parent and an index):
//!
//! ```rust
//! use stograd_estimators::DrawKey;
//!
//! let key = DrawKey::new(42);
//! let first_trial = key.child(0);
//! ```
//!
//! ## Example
//!
//! ```rust
//! use burn::tensor::Tensor;
//! use stograd_core::backend::{init_device, CpuBackend};
//! use stograd_estimators::{AbstractSurrogateSampler, BernoulliJump, DrawKey};
//!
//! let device = init_device();
//! let probs = Tensor::<CpuBackend, 1>::from_floats([0.3, 0.7].as_slice(), &device);
//! let op = BernoulliJump::new(probs);
//! let (sample, context) = op.sample(DrawKey::new(42), &device);
//! let grad = op.estimate_gradient(context, sample.ones_like());
//! ```

pub mod bernoulli;
pub mod binomial;
pub mod categorical;
pub mod geometric;
pub mod moment;
pub mod rng;
pub mod sampler;

pub use bernoulli::*;
pub use binomial::*;
pub use categorical::*;
pub use geometric::*;
pub use moment::*;
pub use rng::*;
pub use sampler::*;

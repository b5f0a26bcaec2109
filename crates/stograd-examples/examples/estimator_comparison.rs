//! # Estimator Comparison Example
//!
//! Compares the straight-through and weighted-jump Bernoulli estimators on
//! the same stream of keys: mean surrogate weight (bias against the true
//! sensitivity d/dp E[sample] = 1) and weight variance.
//!
//! The straight-through weight is identically 1 (zero variance, and here
//! coincidentally unbiased); the jump weight is unbiased by construction
//! but its variance grows as p leaves the middle of the interval.

use anyhow::Result;
use burn::tensor::Tensor;
use stograd_core::backend::{init_device, CpuBackend};
use stograd_estimators::{
    AbstractSurrogateSampler, BernoulliJump, BernoulliStraightThrough, DrawKey, MomentAccumulator,
};
use stograd_examples::scalar_of;

const N_ROUNDS: usize = 2000;
const WIDTH: usize = 32;

fn main() -> Result<()> {
    println!("=== stograd estimator comparison ===\n");
    println!("{:>5}  {:>8}  {:>8}  {:>8}", "p", "st mean", "wj mean", "wj var");

    let device = init_device();

    for &p in &[0.1f32, 0.3, 0.5, 0.7, 0.9] {
        let probs = Tensor::<CpuBackend, 1>::full([WIDTH], p, &device);

        let mut st_weights = MomentAccumulator::new();
        let mut wj_weights = MomentAccumulator::new();
        let mut wj_squares = MomentAccumulator::new();

        for key in DrawKey::new(1234).children(N_ROUNDS) {
            let st = BernoulliStraightThrough::new(probs.clone());
            let (sample, context) = st.sample(key, &device);
            st_weights.accumulate(st.estimate_gradient(context, sample.ones_like()));

            let wj = BernoulliJump::new(probs.clone());
            let (sample, context) = wj.sample(key, &device);
            let weight = wj.estimate_gradient(context, sample.ones_like());
            wj_squares.accumulate(weight.clone() * weight.clone());
            wj_weights.accumulate(weight);
        }

        let st_mean = scalar_of(st_weights.mean().expect("accumulated").mean());
        let wj_mean = scalar_of(wj_weights.mean().expect("accumulated").mean());
        let wj_second = scalar_of(wj_squares.mean().expect("accumulated").mean());
        let wj_var = wj_second - wj_mean * wj_mean;

        println!("{p:>5.1}  {st_mean:>8.4}  {wj_mean:>8.4}  {wj_var:>8.4}");
    }

    println!("\nBoth estimators target d/dp E[sample] = 1.");
    Ok(())
}

//! # Infection-Rate Calibration Example
//!
//! Recovers a per-agent infection probability by gradient descent through
//! a discrete sampling step:
//!
//! - Each step draws an infection outcome for every agent from
//!   Bernoulli(p)
//! - The loss is the squared gap between the realized infection rate and
//!   a target rate
//! - The weighted-jump estimator supplies the gradient the true sampling
//!   derivative cannot
//!
//! This is the calibration loop an agent-based simulation would run with
//! the sampling step embedded in a larger model.

use anyhow::Result;
use burn::tensor::Tensor;
use stograd_core::backend::{init_device, CpuBackend};
use stograd_estimators::{AbstractSurrogateSampler, BernoulliJump, DrawKey};
use stograd_examples::scalar_of;

const N_AGENTS: usize = 512;
const TARGET_RATE: f32 = 0.35;
const LEARNING_RATE: f32 = 0.05;
const N_STEPS: usize = 200;

fn main() -> Result<()> {
    println!("=== stograd infection-rate calibration ===\n");

    let device = init_device();
    let mut p = 0.05f32;

    println!("target rate {TARGET_RATE}, initial p {p}\n");

    for (step, key) in DrawKey::new(7).children(N_STEPS).enumerate() {
        let probs = Tensor::<CpuBackend, 1>::full([N_AGENTS], p, &device);
        let op = BernoulliJump::new(probs);

        let (sample, context) = op.sample(key, &device);
        let infected_rate = scalar_of(sample.mean());

        // d/d(sample_i) of (rate - target)^2, with rate = mean(sample)
        let upstream = Tensor::<CpuBackend, 1>::full(
            [N_AGENTS],
            2.0 * (infected_rate - TARGET_RATE) / N_AGENTS as f32,
            &device,
        );

        let grad = op.estimate_gradient(context, upstream);
        let dp = scalar_of(grad.sum());

        p = (p - LEARNING_RATE * dp).clamp(1e-3, 1.0 - 1e-3);

        if step % 20 == 0 {
            println!("step {step:>3}: infected rate {infected_rate:.3}, p {p:.3}");
        }
    }

    println!("\nrecovered p = {p:.3} (expected about {TARGET_RATE})");
    Ok(())
}

//! Deterministic uniform draws and the splittable keys that index them.
//!
//! Every draw in this crate is a pure function of a [`DrawKey`]. A key is a
//! u64 seed; subordinate keys are derived by hashing the (seed, index) pair
//! through ChaCha8, so any child is reachable directly without walking the
//! ones before it. The same generator produces the uniform variates the
//! operators consume, which is what makes the Monte Carlo tests
//! reproducible.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stograd_core::config::{UNIFORM_HIGH, UNIFORM_LOW};

/// Identifies one deterministic stream of uniform variates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawKey {
    seed: u64,
}

impl DrawKey {
    pub fn new(seed: u64) -> Self {
        DrawKey { seed }
    }

    /// Derive the subordinate key at `index`.
    ///
    /// The parent seed and the index are hashed together, so children are
    /// random access (child 7 does not require deriving children 0 through
    /// 6) and nested derivations stay independent.
    pub fn child(self, index: u64) -> DrawKey {
        let mut material = [0u8; 32];
        material[..8].copy_from_slice(&self.seed.to_le_bytes());
        material[8..16].copy_from_slice(&index.to_le_bytes());
        DrawKey::new(ChaCha8Rng::from_seed(material).next_u64())
    }

    /// The first `n` subordinate keys, in index order.
    pub fn children(self, n: usize) -> impl Iterator<Item = DrawKey> {
        (0..n as u64).map(move |index| self.child(index))
    }

    pub fn seed(self) -> u64 {
        self.seed
    }
}

fn draw_variates(key: DrawKey, n: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(key.seed());
    (0..n)
        .map(|_| UNIFORM_LOW + rng.random::<f32>() * (UNIFORM_HIGH - UNIFORM_LOW))
        .collect()
}

/// Draw a tensor of uniform variates in the open interval
/// (`UNIFORM_LOW`, `UNIFORM_HIGH`), deterministically from `key`.
///
/// The endpoints are excluded so inverse-CDF transforms downstream never
/// evaluate `log(0)`. Variates are generated on the CPU and uploaded, which
/// keeps every draw a pure function of the key regardless of backend.
pub fn uniform_open<B: Backend, const D: usize>(
    key: DrawKey,
    shape: [usize; D],
    device: &B::Device,
) -> Tensor<B, D> {
    let n: usize = shape.iter().product();
    let variates = draw_variates(key, n);
    Tensor::<B, 1>::from_floats(variates.as_slice(), device).reshape(shape)
}

/// Draw a single uniform variate in the same open interval as
/// [`uniform_open`].
pub fn uniform_scalar(key: DrawKey) -> f32 {
    draw_variates(key, 1)[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use stograd_core::backend::{init_device, CpuBackend};

    #[test]
    fn test_children_are_distinct() {
        let keys: Vec<DrawKey> = DrawKey::new(42).children(5).collect();

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "Children should be distinct");
            }
        }
    }

    #[test]
    fn test_child_is_random_access() {
        let key = DrawKey::new(42);
        let walked: Vec<DrawKey> = key.children(10).collect();

        assert_eq!(walked[7], key.child(7), "child(i) should not depend on the walk");
        assert_ne!(key.child(0), key, "A child should differ from its parent");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a: Vec<DrawKey> = DrawKey::new(42).children(10).collect();
        let b: Vec<DrawKey> = DrawKey::new(42).children(10).collect();

        assert_eq!(a, b, "Same seed should derive the same children");
    }

    #[test]
    fn test_uniform_open_deterministic() {
        let device = init_device();

        let a: Vec<f32> = uniform_open::<CpuBackend, 1>(DrawKey::new(3), [16], &device)
            .into_data()
            .to_vec()
            .expect("read variates");
        let b: Vec<f32> = uniform_open::<CpuBackend, 1>(DrawKey::new(3), [16], &device)
            .into_data()
            .to_vec()
            .expect("read variates");

        assert_eq!(a, b, "Same key should produce the same variates");
    }

    #[test]
    fn test_uniform_open_stays_interior() {
        let device = init_device();

        let variates: Vec<f32> = uniform_open::<CpuBackend, 2>(DrawKey::new(11), [8, 8], &device)
            .into_data()
            .to_vec()
            .expect("read variates");

        assert_eq!(variates.len(), 64);
        for &u in &variates {
            assert!(u > 0.0 && u < 1.0, "Variate {} should be interior", u);
        }
    }
}

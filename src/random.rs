//! Random tensor construction.
//!
//! The contraction engine itself never touches an RNG; these constructors
//! exist for callers (and the benchmark harness) that need random inputs.
//! Seeded `_with_rng` variants give reproducible tensors.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::element::Element;
use crate::tensor::Tensor;

/// Element types that can be sampled from the uniform distribution [0, 1).
pub trait RandomUniform: Element {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

/// Element types that can be sampled from the standard normal distribution.
pub trait RandomNormal: Element {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl<E: Element + RandomUniform> Tensor<E> {
    /// Creates a tensor with uniform random values in [0, 1).
    pub fn random_uniform(shape: &[usize]) -> Self {
        Self::random_uniform_with_rng(shape, &mut rand::rng())
    }

    /// Creates a uniform random tensor using a caller-provided RNG.
    pub fn random_uniform_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<E> = (0..len).map(|_| E::sample_uniform(rng)).collect();
        Self::from_vec(data, shape).expect("length matches shape by construction")
    }
}

impl<E: Element + RandomNormal> Tensor<E> {
    /// Creates a tensor with independent standard-normal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_einsum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::random_normal(&[30, 30]);
    /// assert_eq!(t.shape(), &[30, 30]);
    /// ```
    pub fn random_normal(shape: &[usize]) -> Self {
        Self::random_normal_with_rng(shape, &mut rand::rng())
    }

    /// Creates a standard-normal random tensor using a caller-provided RNG.
    pub fn random_normal_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<E> = (0..len).map(|_| E::sample_normal(rng)).collect();
        Self::from_vec(data, shape).expect("length matches shape by construction")
    }
}

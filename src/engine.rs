//! High-level contraction API.
//!
//! Wires the pipeline together: parse → bind → plan → execute.

use crate::element::Element;
use crate::error::{EinsumError, EinsumResult};
use crate::execute::execute;
use crate::notation::parse;
use crate::planning::{PathStrategy, plan};
use crate::tensor::Tensor;

/// Configuration options for a contraction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EinsumConfig {
    /// Strategy for choosing the contraction path.
    pub strategy: PathStrategy,
}

impl EinsumConfig {
    /// Creates a config with default settings (fused path).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path strategy.
    pub fn with_strategy(mut self, strategy: PathStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Config for reference-parity evaluation: one fused N-way loop, the
    /// same reduction order as NumPy's default einsum.
    pub fn reference() -> Self {
        Self {
            strategy: PathStrategy::Fused,
        }
    }

    /// Config for the greedy pairwise performance mode. Results may differ
    /// from the fused path in the last floating-point bits.
    pub fn greedy() -> Self {
        Self {
            strategy: PathStrategy::Greedy,
        }
    }
}

/// Contracts the input tensors according to an einsum subscript expression.
///
/// Uses the default fused evaluation. The inputs are borrowed read-only;
/// the returned tensor is freshly allocated and owned by the caller.
///
/// # Examples
///
/// ```
/// use dense_einsum::{Tensor, contract};
///
/// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// let b = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
///
/// let c = contract("ij,jk->ik", &[a, b]).unwrap();
/// assert_eq!(c.shape(), &[2, 2]);
/// assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
///
/// # Errors
///
/// Fails fast with one of the [`EinsumError`] validation variants before
/// any numeric work; no partial output is ever produced.
pub fn contract<E: Element>(spec: &str, tensors: &[Tensor<E>]) -> EinsumResult<Tensor<E>> {
    contract_with(spec, tensors, &EinsumConfig::default())
}

/// Contracts with an explicit [`EinsumConfig`].
pub fn contract_with<E: Element>(
    spec: &str,
    tensors: &[Tensor<E>],
    config: &EinsumConfig,
) -> EinsumResult<Tensor<E>> {
    if tensors.is_empty() {
        return Err(EinsumError::EmptyInputList);
    }

    let ranks: Vec<usize> = tensors.iter().map(|t| t.rank()).collect();
    let expression = parse(spec, &ranks)?;

    let shapes: Vec<&[usize]> = tensors.iter().map(|t| t.shape()).collect();
    let index_plan = expression.bind(&shapes)?;

    let path = plan(&index_plan, config.strategy)?;

    let refs: Vec<&Tensor<E>> = tensors.iter().collect();
    execute(&refs, &index_plan, &path)
}

//! # dense-einsum
//!
//! Dense Einstein summation (einsum) contraction engine for CPU tensors.
//!
//! ## Features
//!
//! - Full subscript parsing with NumPy-compatible implicit output
//! - Fused N-way evaluation by default, matching NumPy's un-optimized
//!   reference behavior
//! - Optional greedy pairwise reduction ordering for many operands
//! - Optional multi-threaded accumulation (`parallel` cargo feature)
//!
//! ## Example
//!
//! ```
//! use dense_einsum::{Tensor, contract};
//!
//! // Matrix multiplication
//! let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let b = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
//! let c = contract("ij,jk->ik", &[a, b]).unwrap();
//! assert_eq!(c.shape(), &[2, 2]);
//! ```
//!
//! The pipeline is parse → plan → execute; each stage is usable on its
//! own through the [`notation`], [`planning`], and [`execute`] modules.

mod engine;
pub mod element;
pub mod error;
pub mod execute;
pub mod notation;
pub mod planning;
pub mod random;
pub mod tensor;

pub use element::Element;
pub use engine::{EinsumConfig, contract, contract_with};
pub use error::{EinsumError, EinsumResult};
pub use execute::execute;
pub use notation::{Expression, IndexPlan, Subscript, parse};
pub use planning::{ContractionPath, ContractionStep, PathStrategy, plan};
pub use random::{RandomNormal, RandomUniform};
pub use tensor::Tensor;

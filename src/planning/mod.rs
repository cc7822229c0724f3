//! Contraction path planning.
//!
//! Decides how the operands are reduced:
//! - [`PathStrategy::Fused`] (default): one N-way loop over every index at
//!   once, matching NumPy's un-optimized reference evaluation.
//! - [`PathStrategy::Greedy`]: pairwise reduction ordered by smallest
//!   intermediate result, a labeled performance mode for many operands.
//!
//! The two strategies are mathematically equivalent but not guaranteed
//! bit-identical, since floating-point accumulation order differs.

mod greedy;
mod path;

pub use greedy::greedy_path;
pub use path::{ContractionPath, ContractionStep, OperandState};

use crate::error::{EinsumError, EinsumResult};
use crate::notation::IndexPlan;

/// Strategy for choosing a contraction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStrategy {
    /// Single fused N-way loop. Reference behavior.
    #[default]
    Fused,
    /// Greedy pairwise reduction, contracting the pair with the smallest
    /// intermediate result first. Bounds intermediate memory without a
    /// full dynamic-programming path search.
    Greedy,
}

/// Plans a contraction path for the given index plan.
///
/// One or two operands always collapse to the single fused step; with two
/// operands a fused pairwise contraction already covers all summed indices
/// at once, so there is nothing to order.
///
/// # Errors
///
/// Returns [`EinsumError::EmptyInputList`] for zero operands.
pub fn plan(index_plan: &IndexPlan, strategy: PathStrategy) -> EinsumResult<ContractionPath> {
    let n = index_plan.num_inputs();

    if n == 0 {
        return Err(EinsumError::EmptyInputList);
    }

    let path = match strategy {
        PathStrategy::Greedy if n >= 3 => greedy_path(index_plan),
        _ => ContractionPath::fused(index_plan.summed().to_vec()),
    };

    log::debug!(
        "planned {} step(s) for {} operand(s) with {:?}",
        path.len(),
        n,
        strategy
    );

    Ok(path)
}

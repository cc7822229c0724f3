//! Numeric execution of a planned contraction.
//!
//! Both path kinds funnel into the same multiply-accumulate kernel: the
//! fused path runs it once over every operand, the pairwise path runs it
//! per step, materializing an owned intermediate that the next step
//! consumes.

mod kernel;

use kernel::contract_operands;

use crate::element::Element;
use crate::error::{EinsumError, EinsumResult};
use crate::notation::IndexPlan;
use crate::planning::{ContractionPath, ContractionStep};
use crate::tensor::Tensor;

/// An operand in the pairwise pipeline: the caller's tensors are borrowed,
/// intermediates are owned and dropped once consumed.
enum Operand<'a, E: Element> {
    Borrowed(&'a Tensor<E>),
    Owned(Tensor<E>),
}

impl<E: Element> Operand<'_, E> {
    fn tensor(&self) -> &Tensor<E> {
        match self {
            Operand::Borrowed(t) => t,
            Operand::Owned(t) => t,
        }
    }

    fn into_tensor(self) -> Tensor<E> {
        match self {
            Operand::Borrowed(t) => t.clone(),
            Operand::Owned(t) => t,
        }
    }
}

/// Executes a contraction path over the input tensors.
///
/// The output tensor is freshly allocated with the plan's output shape;
/// inputs are only read. Shapes are re-checked against the plan's extents
/// before any numeric work, so a caller handing in tensors that do not
/// match the plan fails with [`EinsumError::DimensionMismatch`] rather
/// than corrupting the output.
pub fn execute<E: Element>(
    tensors: &[&Tensor<E>],
    plan: &IndexPlan,
    path: &ContractionPath,
) -> EinsumResult<Tensor<E>> {
    if tensors.is_empty() {
        return Err(EinsumError::EmptyInputList);
    }
    verify_shapes(tensors, plan)?;

    log::debug!(
        "executing {} step(s) over {} operand(s)",
        path.len(),
        tensors.len()
    );

    let mut operands: Vec<(Operand<'_, E>, Vec<char>)> = tensors
        .iter()
        .zip(plan.inputs().iter())
        .map(|(&t, s)| (Operand::Borrowed(t), s.iter().collect()))
        .collect();

    for step in path.steps() {
        match step {
            ContractionStep::Fused { summed } => {
                let refs: Vec<&Tensor<E>> = operands.iter().map(|(o, _)| o.tensor()).collect();
                let labels: Vec<&[char]> = operands.iter().map(|(_, l)| l.as_slice()).collect();
                let out_labels: Vec<char> = plan.output().iter().collect();

                let result = contract_operands(&refs, &labels, &out_labels, summed, plan.extents());
                operands = vec![(Operand::Owned(result), out_labels)];
            }
            ContractionStep::Pair {
                operands: (i, j),
                summed,
                result,
                ..
            } => {
                let (i, j) = (*i, *j);
                debug_assert!(i < j && j < operands.len());

                let intermediate = {
                    let (left, left_labels) = &operands[i];
                    let (right, right_labels) = &operands[j];
                    contract_operands(
                        &[left.tensor(), right.tensor()],
                        &[left_labels.as_slice(), right_labels.as_slice()],
                        result,
                        summed,
                        plan.extents(),
                    )
                };

                // Same bookkeeping as the planner: drop both, append result.
                operands.remove(j);
                operands.remove(i);
                operands.push((Operand::Owned(intermediate), result.clone()));
            }
        }
    }

    debug_assert_eq!(operands.len(), 1);
    let (last, _) = operands.pop().expect("path leaves exactly one operand");
    Ok(last.into_tensor())
}

/// Re-validates every tensor axis against the plan's extents.
fn verify_shapes<E: Element>(tensors: &[&Tensor<E>], plan: &IndexPlan) -> EinsumResult<()> {
    if tensors.len() != plan.num_inputs() {
        return Err(EinsumError::malformed(format!(
            "plan covers {} tensors, {} were supplied",
            plan.num_inputs(),
            tensors.len()
        )));
    }
    for (tensor, subscript) in tensors.iter().zip(plan.inputs().iter()) {
        if tensor.rank() != subscript.len() {
            return Err(EinsumError::RankMismatch {
                subscript: subscript.to_string(),
                expected: subscript.len(),
                got: tensor.rank(),
            });
        }
        for (c, &dim) in subscript.iter().zip(tensor.shape().iter()) {
            match plan.extent(c) {
                Some(expected) if expected != dim => {
                    return Err(EinsumError::DimensionMismatch {
                        index: c,
                        expected,
                        got: dim,
                    });
                }
                _ => {}
            }
        }
    }
    Ok(())
}

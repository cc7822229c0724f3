//! Index plan: letters bound to extents, classified free or summed.

use std::collections::BTreeSet;

use hashbrown::HashMap;

use super::expression::Expression;
use super::subscript::Subscript;
use crate::error::{EinsumError, EinsumResult};
use crate::tensor::Shape;

/// An [`Expression`] bound against concrete tensor shapes.
///
/// Maps every letter to its extent (consistent across all tensors sharing
/// it) and records which letters are free (kept in the output) versus
/// summed (reduced). Built fresh per contraction call and discarded after.
#[derive(Debug, Clone)]
pub struct IndexPlan {
    inputs: Vec<Subscript>,
    output: Subscript,
    extents: HashMap<char, usize>,
    summed: Vec<char>,
}

impl IndexPlan {
    /// Binds an expression against tensor shapes.
    ///
    /// # Errors
    ///
    /// - [`EinsumError::MalformedSpec`] if the shape count differs from the
    ///   expression's input count.
    /// - [`EinsumError::RankMismatch`] if a shape's rank differs from its
    ///   subscript (already caught at parse time; kept as defense in depth).
    /// - [`EinsumError::DimensionMismatch`] if two tensors disagree on a
    ///   shared letter's extent.
    pub fn bind(expression: &Expression, shapes: &[&[usize]]) -> EinsumResult<Self> {
        if shapes.len() != expression.num_inputs() {
            return Err(EinsumError::malformed(format!(
                "expected {} input shapes, got {}",
                expression.num_inputs(),
                shapes.len()
            )));
        }

        let mut extents: HashMap<char, usize> = HashMap::new();

        for (subscript, shape) in expression.inputs().iter().zip(shapes.iter()) {
            if subscript.len() != shape.len() {
                return Err(EinsumError::RankMismatch {
                    subscript: subscript.to_string(),
                    expected: subscript.len(),
                    got: shape.len(),
                });
            }

            for (c, &dim) in subscript.iter().zip(shape.iter()) {
                match extents.get(&c) {
                    Some(&existing) if existing != dim => {
                        return Err(EinsumError::DimensionMismatch {
                            index: c,
                            expected: existing,
                            got: dim,
                        });
                    }
                    Some(_) => {}
                    None => {
                        extents.insert(c, dim);
                    }
                }
            }
        }

        // Letters absent from the output are summed. BTreeSet keeps the
        // reduction order deterministic.
        let output_set: BTreeSet<char> = expression.output().iter().collect();
        let summed: Vec<char> = extents
            .keys()
            .copied()
            .collect::<BTreeSet<char>>()
            .difference(&output_set)
            .copied()
            .collect();

        Ok(Self {
            inputs: expression.inputs().to_vec(),
            output: expression.output().clone(),
            extents,
            summed,
        })
    }

    /// Returns the per-input subscripts.
    #[inline]
    pub fn inputs(&self) -> &[Subscript] {
        &self.inputs
    }

    /// Returns the output subscript.
    #[inline]
    pub fn output(&self) -> &Subscript {
        &self.output
    }

    /// Returns the number of input tensors.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Returns the extent bound to a letter.
    pub fn extent(&self, c: char) -> Option<usize> {
        self.extents.get(&c).copied()
    }

    /// Returns the letter-to-extent map.
    #[inline]
    pub fn extents(&self) -> &HashMap<char, usize> {
        &self.extents
    }

    /// Returns the summed letters in sorted order.
    #[inline]
    pub fn summed(&self) -> &[char] {
        &self.summed
    }

    /// Returns true if a letter is reduced rather than kept.
    pub fn is_summed(&self, c: char) -> bool {
        self.summed.binary_search(&c).is_ok()
    }

    /// Returns the output shape in output-subscript order.
    pub fn output_shape(&self) -> Shape {
        self.output
            .iter()
            .map(|c| self.extents[&c])
            .collect()
    }

    /// Returns the total number of output elements.
    pub fn output_len(&self) -> usize {
        self.output_shape().iter().product()
    }
}

//! Parsed subscript expression.

use core::fmt;

use super::plan::IndexPlan;
use super::subscript::Subscript;
use crate::error::EinsumResult;

/// A parsed einsum expression: one subscript per input plus the output
/// subscript (explicit or inferred).
///
/// An `Expression` is purely structural; binding it against concrete
/// tensor shapes produces an [`IndexPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    inputs: Vec<Subscript>,
    output: Subscript,
}

impl Expression {
    pub(crate) fn new(inputs: Vec<Subscript>, output: Subscript) -> Self {
        Self { inputs, output }
    }

    /// Returns the input subscripts.
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

    /// Returns true for a single-input expression.
    #[inline]
    pub fn is_unary(&self) -> bool {
        self.inputs.len() == 1
    }

    /// Returns true if the output is a scalar (empty subscript).
    #[inline]
    pub fn is_scalar_output(&self) -> bool {
        self.output.is_empty()
    }

    /// Returns which inputs contain a given letter.
    pub fn inputs_containing(&self, c: char) -> Vec<usize> {
        self.inputs
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.contains(c).then_some(i))
            .collect()
    }

    /// Binds the expression against concrete tensor shapes, producing an
    /// [`IndexPlan`] with every letter's extent resolved.
    pub fn bind(&self, shapes: &[&[usize]]) -> EinsumResult<IndexPlan> {
        IndexPlan::bind(self, shapes)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", input)?;
        }
        write!(f, "->{}", self.output)
    }
}

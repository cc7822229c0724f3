//! Einsum notation parser.
//!
//! Parses strings like "ij,jk->ik" into a structured [`Expression`].

use super::expression::Expression;
use super::subscript::Subscript;
use crate::error::{EinsumError, EinsumResult};

/// Parses an einsum notation string against the input tensors' ranks.
///
/// # Grammar
///
/// ```text
/// einsum      ::= inputs '->' output | inputs
/// inputs      ::= subscript (',' subscript)*
/// output      ::= subscript
/// subscript   ::= index*
/// index       ::= [a-zA-Z]
/// ```
///
/// ASCII whitespace inside subscripts is ignored. With no `->`, the output
/// is inferred by the NumPy rule: letters occurring exactly once across all
/// inputs, sorted alphabetically.
///
/// # Errors
///
/// - [`EinsumError::MalformedSpec`] for invalid characters, a group count
///   that differs from the number of tensors, or a repeated output letter.
/// - [`EinsumError::RankMismatch`] if a subscript's length differs from its
///   tensor's rank.
/// - [`EinsumError::RepeatedIndexUnsupported`] if a letter repeats within a
///   single input subscript.
/// - [`EinsumError::UnknownOutputIndex`] if an output letter appears in no
///   input.
pub fn parse(spec: &str, ranks: &[usize]) -> EinsumResult<Expression> {
    let spec = spec.trim();

    if spec.is_empty() {
        return Err(EinsumError::malformed("empty expression"));
    }

    let (inputs_str, output_str) = match spec.find("->") {
        Some(arrow) => (&spec[..arrow], Some(&spec[arrow + 2..])),
        None => (spec, None),
    };

    let input_strs: Vec<&str> = inputs_str.split(',').collect();
    if input_strs.len() != ranks.len() {
        return Err(EinsumError::malformed(format!(
            "expression has {} comma-separated subscripts, {} tensors were supplied",
            input_strs.len(),
            ranks.len()
        )));
    }

    let mut inputs = Vec::with_capacity(input_strs.len());
    for (input_str, &rank) in input_strs.iter().zip(ranks.iter()) {
        let subscript = parse_subscript(input_str)?;
        if subscript.len() != rank {
            return Err(EinsumError::RankMismatch {
                subscript: subscript.to_string(),
                expected: subscript.len(),
                got: rank,
            });
        }
        if let Some(index) = subscript.first_repeated() {
            return Err(EinsumError::RepeatedIndexUnsupported { index });
        }
        inputs.push(subscript);
    }

    let output = match output_str {
        Some(out_str) => {
            let output = parse_subscript(out_str)?;
            if let Some(index) = output.first_repeated() {
                return Err(EinsumError::malformed(format!(
                    "output index '{}' is repeated",
                    index
                )));
            }
            for c in output.iter() {
                if !inputs.iter().any(|input| input.contains(c)) {
                    return Err(EinsumError::UnknownOutputIndex { index: c });
                }
            }
            output
        }
        None => infer_output(&inputs),
    };

    Ok(Expression::new(inputs, output))
}

/// Parses a single subscript group into a [`Subscript`].
fn parse_subscript(s: &str) -> EinsumResult<Subscript> {
    let mut subscript = Subscript::new();

    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' => subscript.push(c),
            c if c.is_ascii_whitespace() => continue,
            _ => {
                return Err(EinsumError::malformed(format!(
                    "invalid character '{}' in subscript",
                    c
                )));
            }
        }
    }

    Ok(subscript)
}

/// Infers the output subscript when no `->` is present.
///
/// NumPy convention: letters appearing exactly once across all inputs are
/// kept, sorted alphabetically.
fn infer_output(inputs: &[Subscript]) -> Subscript {
    use hashbrown::HashMap;

    let mut counts: HashMap<char, usize> = HashMap::new();
    for input in inputs {
        for c in input.iter() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    let mut kept: Vec<char> = counts
        .iter()
        .filter(|&(_, count)| *count == 1)
        .map(|(&c, _)| c)
        .collect();
    kept.sort_unstable();

    Subscript::from_chars(kept)
}

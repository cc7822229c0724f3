//! Multiply-accumulate kernel shared by fused and pairwise execution.
//!
//! Iterates every combination of free and summed index values with a pair
//! of row-major odometers (free indices outer, summed indices inner) and
//! accumulates the product of the selected per-operand elements into the
//! output cell addressed by the free indices. Offsets are updated
//! incrementally on each digit step, so no multi-index is re-decoded in
//! the hot loop.

use hashbrown::HashMap;

use crate::element::Element;
use crate::tensor::{Shape, Tensor, linear_to_multi, multi_to_linear};

/// Minimum output cells before the free-index space is split across
/// worker threads.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_CELLS: usize = 1 << 12;

/// Per-call iteration state: operand storage plus the stride each loop
/// letter induces in each operand.
struct Frame<'a, E: Element> {
    data: Vec<&'a [E]>,
    out_dims: Shape,
    sum_dims: Shape,
    /// `out_strides[t][axis]`: offset step in operand `t` when output
    /// axis `axis` advances. Zero when the operand lacks that letter.
    out_strides: Vec<Shape>,
    sum_strides: Vec<Shape>,
}

/// Contracts `operands` down to a tensor shaped by `out_labels`.
///
/// Every summed letter in `summed` is reduced over its extent; every
/// output letter keeps its extent, ordered as given. Each operand's
/// labels must name its axes in order. Accumulation order is fixed by the
/// loop nesting (summed letters innermost, last letter fastest), so the
/// result is deterministic for a given label layout.
pub(crate) fn contract_operands<E: Element>(
    operands: &[&Tensor<E>],
    labels: &[&[char]],
    out_labels: &[char],
    summed: &[char],
    extents: &HashMap<char, usize>,
) -> Tensor<E> {
    debug_assert_eq!(operands.len(), labels.len());

    let out_dims: Shape = out_labels.iter().map(|c| extents[c]).collect();
    let sum_dims: Shape = summed.iter().map(|c| extents[c]).collect();

    let out_strides: Vec<Shape> = operands
        .iter()
        .zip(labels.iter())
        .map(|(t, l)| letter_strides(t, l, out_labels))
        .collect();
    let sum_strides: Vec<Shape> = operands
        .iter()
        .zip(labels.iter())
        .map(|(t, l)| letter_strides(t, l, summed))
        .collect();

    let frame = Frame {
        data: operands.iter().map(|t| t.data()).collect(),
        out_dims,
        sum_dims,
        out_strides,
        sum_strides,
    };

    let mut out = Tensor::zeros(frame.out_dims.as_slice());
    if out.is_empty() {
        return out;
    }

    #[cfg(feature = "parallel")]
    {
        let total = out.len();
        if total >= PARALLEL_MIN_CELLS {
            use rayon::prelude::*;

            let chunk = total.div_ceil(rayon::current_num_threads().max(1));
            out.data_mut()
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(index, cells)| accumulate_cells(&frame, cells, index * chunk));
            return out;
        }
    }

    accumulate_cells(&frame, out.data_mut(), 0);
    out
}

/// Strides each `letters` entry induces in one operand: the operand's own
/// stride where it carries the letter, zero where it does not.
fn letter_strides<E: Element>(tensor: &Tensor<E>, labels: &[char], letters: &[char]) -> Shape {
    letters
        .iter()
        .map(|&c| {
            labels
                .iter()
                .position(|&l| l == c)
                .map_or(0, |axis| tensor.strides()[axis])
        })
        .collect()
}

/// Accumulates the contiguous output cells starting at `start`.
///
/// Each cell is owned by exactly one call, so disjoint ranges can run on
/// separate threads without synchronization.
fn accumulate_cells<E: Element>(frame: &Frame<'_, E>, cells: &mut [E], start: usize) {
    let operands = frame.data.len();
    let inner: usize = frame.sum_dims.iter().product();

    let mut out_multi = linear_to_multi(start, &frame.out_dims);
    let mut base: Vec<usize> = frame
        .out_strides
        .iter()
        .map(|strides| multi_to_linear(&out_multi, strides))
        .collect();

    let mut offsets = vec![0usize; operands];
    let mut sum_multi: Shape = frame.sum_dims.iter().map(|_| 0).collect();

    for cell in cells.iter_mut() {
        let mut acc = E::zero();

        if inner > 0 {
            offsets.copy_from_slice(&base);
            sum_multi.iter_mut().for_each(|d| *d = 0);
            let mut remaining = inner;

            loop {
                let mut term = E::one();
                for t in 0..operands {
                    term = term * frame.data[t][offsets[t]];
                }
                acc += term;

                remaining -= 1;
                if remaining == 0 {
                    break;
                }

                // Advance the summed odometer, last letter fastest.
                let mut axis = frame.sum_dims.len();
                while axis > 0 {
                    axis -= 1;
                    sum_multi[axis] += 1;
                    for t in 0..operands {
                        offsets[t] += frame.sum_strides[t][axis];
                    }
                    if sum_multi[axis] < frame.sum_dims[axis] {
                        break;
                    }
                    for t in 0..operands {
                        offsets[t] -= frame.sum_strides[t][axis] * frame.sum_dims[axis];
                    }
                    sum_multi[axis] = 0;
                }
            }
        }

        *cell += acc;

        // Advance the free-index odometer and the per-operand bases.
        let mut axis = frame.out_dims.len();
        while axis > 0 {
            axis -= 1;
            out_multi[axis] += 1;
            for t in 0..operands {
                base[t] += frame.out_strides[t][axis];
            }
            if out_multi[axis] < frame.out_dims[axis] {
                break;
            }
            for t in 0..operands {
                base[t] -= frame.out_strides[t][axis] * frame.out_dims[axis];
            }
            out_multi[axis] = 0;
        }
    }
}

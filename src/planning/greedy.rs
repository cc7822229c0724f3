//! Greedy pairwise contraction ordering.
//!
//! At each step, contracts the pair of remaining operands whose
//! intermediate result is smallest. O(n³) in the number of operands.

use std::collections::BTreeSet;

use super::path::{ContractionPath, ContractionStep, OperandState};
use crate::notation::IndexPlan;

/// Finds a pairwise contraction path for three or more operands.
///
/// The ordering criterion is the element count of each candidate
/// intermediate (the product of the extents of the letters that must
/// survive the step), which bounds intermediate memory growth. Ties keep
/// the first pair in scan order, so the path is deterministic.
///
/// A letter is summed by a step only once no other remaining operand and
/// no output position still needs it. The final step produces its result
/// directly in output-subscript order.
pub fn greedy_path(plan: &IndexPlan) -> ContractionPath {
    let n = plan.num_inputs();
    debug_assert!(n >= 3, "one or two operands use the fused path");

    let mut state = OperandState::new(
        plan.inputs()
            .iter()
            .map(|s| s.iter().collect())
            .collect(),
    );
    let output_set: BTreeSet<char> = plan.output().iter().collect();
    let mut path = ContractionPath::with_capacity(n - 1);

    while state.len() > 1 {
        let (i, j, step) = if state.len() == 2 {
            // Last pair: write straight into the output's axis order.
            final_step(&state, plan)
        } else {
            find_best_pair(&state, &output_set, plan)
        };

        state = match &step {
            ContractionStep::Pair { result, .. } => state.contract(i, j, result),
            ContractionStep::Fused { .. } => unreachable!("greedy emits pair steps only"),
        };
        path.push(step);
    }

    path
}

/// Scans all pairs and returns the one with the smallest intermediate.
fn find_best_pair(
    state: &OperandState,
    output_set: &BTreeSet<char>,
    plan: &IndexPlan,
) -> (usize, usize, ContractionStep) {
    let n = state.len();
    let mut best: Option<(usize, usize, ContractionStep, u64)> = None;

    for i in 0..n {
        for j in (i + 1)..n {
            let (summed, result, size) = evaluate_pair(state, i, j, output_set, plan);

            if best.as_ref().is_none_or(|(_, _, _, best_size)| size < *best_size) {
                best = Some((
                    i,
                    j,
                    ContractionStep::Pair {
                        operands: (i, j),
                        summed,
                        result,
                        size,
                    },
                    size,
                ));
            }
        }
    }

    let (i, j, step, _) = best.expect("at least one pair exists");
    (i, j, step)
}

/// Evaluates contracting positions `i` and `j`: which letters get summed,
/// which survive, and how large the intermediate is.
fn evaluate_pair(
    state: &OperandState,
    i: usize,
    j: usize,
    output_set: &BTreeSet<char>,
    plan: &IndexPlan,
) -> (Vec<char>, Vec<char>, u64) {
    // Letters still needed by the output or by any other operand.
    let mut needed = output_set.clone();
    for (k, labels) in state.all().iter().enumerate() {
        if k != i && k != j {
            needed.extend(labels.iter().copied());
        }
    }

    let mut summed = Vec::new();
    let mut result = Vec::new();
    let mut seen: BTreeSet<char> = BTreeSet::new();

    // Result keeps i's axis order first, then j's new letters.
    for &c in state.labels(i).iter().chain(state.labels(j)) {
        if !seen.insert(c) {
            continue;
        }
        if needed.contains(&c) {
            result.push(c);
        } else {
            summed.push(c);
        }
    }
    summed.sort_unstable();

    let size = result
        .iter()
        .map(|&c| plan.extent(c).unwrap_or(1) as u64)
        .product();

    (summed, result, size)
}

/// Builds the final step for the last remaining pair: everything not in
/// the output is summed, and the result axes follow the output subscript.
fn final_step(state: &OperandState, plan: &IndexPlan) -> (usize, usize, ContractionStep) {
    let output_set: BTreeSet<char> = plan.output().iter().collect();

    let mut summed: Vec<char> = state
        .labels(0)
        .iter()
        .chain(state.labels(1))
        .copied()
        .collect::<BTreeSet<char>>()
        .difference(&output_set)
        .copied()
        .collect();
    summed.sort_unstable();

    let result: Vec<char> = plan.output().iter().collect();
    let size = result
        .iter()
        .map(|&c| plan.extent(c).unwrap_or(1) as u64)
        .product();

    (
        0,
        1,
        ContractionStep::Pair {
            operands: (0, 1),
            summed,
            result,
            size,
        },
    )
}

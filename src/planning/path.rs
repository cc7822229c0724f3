//! Contraction path representation.

/// A single step in a contraction path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractionStep {
    /// Contract every operand in one fused loop, summing the given
    /// letters. Always the sole step of its path.
    Fused { summed: Vec<char> },
    /// Contract two operands into an intermediate.
    ///
    /// `operands` are positions in the current operand list; executing the
    /// step removes both and appends the result at the end. `result` lists
    /// the surviving letters in the intermediate's axis order.
    Pair {
        operands: (usize, usize),
        summed: Vec<char>,
        result: Vec<char>,
        /// Number of elements in the intermediate, the greedy ordering
        /// criterion.
        size: u64,
    },
}

/// An ordered sequence of contraction steps. Transient: recomputed per
/// call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractionPath {
    steps: Vec<ContractionStep>,
}

impl ContractionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Creates the single-step fused path.
    pub fn fused(summed: Vec<char>) -> Self {
        Self {
            steps: vec![ContractionStep::Fused { summed }],
        }
    }

    pub fn push(&mut self, step: ContractionStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ContractionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns true if this path is the single fused step.
    pub fn is_fused(&self) -> bool {
        matches!(self.steps.as_slice(), [ContractionStep::Fused { .. }])
    }
}

/// Operand labels tracked while a pairwise path is searched or executed.
///
/// Mirrors the executor's bookkeeping: contracting positions `i` and `j`
/// removes both and appends the result labels at the end, so step indices
/// recorded by the planner stay valid during execution.
#[derive(Debug, Clone)]
pub struct OperandState {
    labels: Vec<Vec<char>>,
}

impl OperandState {
    pub fn new(labels: Vec<Vec<char>>) -> Self {
        Self { labels }
    }

    /// Number of operands remaining.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the labels of the operand at a position.
    pub fn labels(&self, position: usize) -> &[char] {
        &self.labels[position]
    }

    /// Returns all operand labels.
    pub fn all(&self) -> &[Vec<char>] {
        &self.labels
    }

    /// Contracts operands at positions `i < j`, appending the result.
    pub fn contract(&self, i: usize, j: usize, result: &[char]) -> OperandState {
        assert!(i < j && j < self.len());

        let mut labels = Vec::with_capacity(self.len() - 1);
        for (k, l) in self.labels.iter().enumerate() {
            if k != i && k != j {
                labels.push(l.clone());
            }
        }
        labels.push(result.to_vec());

        OperandState { labels }
    }
}

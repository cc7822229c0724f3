//! Element trait for tensor entry types.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul};

/// Trait for floating-point types the engine can accumulate over.
///
/// The bounds are exactly what the multiply-accumulate kernel needs:
/// copyable values with addition, multiplication, and the two identities.
/// `Send + Sync` lets the executor hand disjoint output ranges to worker
/// threads.
pub trait Element:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + AddAssign
    + Mul<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Element for f32 {
    fn one() -> Self {
        1.0
    }
}

impl Element for f64 {
    fn one() -> Self {
        1.0
    }
}

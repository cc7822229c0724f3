//! Dense n-dimensional tensor with contiguous row-major storage.

use smallvec::{SmallVec, smallvec};

use crate::element::Element;
use crate::error::{EinsumError, EinsumResult};

/// Inline dimension list. Contractions rarely exceed rank 8, so shapes,
/// strides, and index tuples stay on the stack.
pub type Shape = SmallVec<[usize; 8]>;

/// Computes row-major strides for a shape.
///
/// For shape `[d0, d1, d2]` the strides are `[d1*d2, d2, 1]`.
///
/// # Examples
///
/// ```
/// use dense_einsum::tensor::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]).as_slice(), &[20, 5, 1]);
/// assert_eq!(compute_strides(&[5]).as_slice(), &[1]);
/// assert!(compute_strides(&[]).is_empty());
/// ```
pub fn compute_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = smallvec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Converts a multi-index to a linear offset given strides.
#[inline]
pub fn multi_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Converts a linear offset to a multi-index for a row-major shape.
pub fn linear_to_multi(mut linear: usize, shape: &[usize]) -> Shape {
    let mut indices: Shape = smallvec![0; shape.len()];
    for (axis, &dim) in shape.iter().enumerate().rev() {
        indices[axis] = linear % dim;
        linear /= dim;
    }
    indices
}

/// An owned dense n-dimensional array.
///
/// Storage is a single contiguous `Vec` in row-major order. A rank-0
/// tensor (empty shape) holds exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<E: Element> {
    data: Vec<E>,
    shape: Shape,
    strides: Shape,
}

impl<E: Element> Tensor<E> {
    /// Creates a zero-initialized tensor with the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_einsum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            data: vec![E::zero(); len],
            shape: Shape::from_slice(shape),
            strides: compute_strides(shape),
        }
    }

    /// Creates a tensor from row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns [`EinsumError::ShapeError`] if the data length does not
    /// match the shape's element count.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_einsum::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[0, 2]), Some(&3.0));
    /// assert_eq!(t.get(&[1, 0]), Some(&4.0));
    /// ```
    pub fn from_vec(data: Vec<E>, shape: &[usize]) -> EinsumResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(EinsumError::shape(format!(
                "shape {:?} holds {} elements, data has {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            data,
            shape: Shape::from_slice(shape),
            strides: compute_strides(shape),
        })
    }

    /// Creates a rank-0 tensor holding a single value.
    pub fn scalar(value: E) -> Self {
        Self {
            data: vec![value],
            shape: Shape::new(),
            strides: Shape::new(),
        }
    }

    /// Returns the shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tensor holds no elements (some axis has size 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the underlying storage.
    #[inline]
    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Returns the underlying storage mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Returns the element at a multi-index, or `None` out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<&E> {
        if indices.len() != self.shape.len() {
            return None;
        }
        if indices.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d) {
            return None;
        }
        self.data.get(multi_to_linear(indices, &self.strides))
    }

    /// Returns the element at a linear offset.
    #[inline]
    pub fn get_linear(&self, linear: usize) -> Option<&E> {
        self.data.get(linear)
    }

    /// Sets the element at a multi-index.
    ///
    /// # Errors
    ///
    /// Returns [`EinsumError::ShapeError`] if the index is out of bounds.
    pub fn set(&mut self, indices: &[usize], value: E) -> EinsumResult<()> {
        if indices.len() != self.shape.len()
            || indices.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d)
        {
            return Err(EinsumError::shape(format!(
                "index {:?} out of bounds for shape {:?}",
                indices, self.shape
            )));
        }
        let linear = multi_to_linear(indices, &self.strides);
        self.data[linear] = value;
        Ok(())
    }
}

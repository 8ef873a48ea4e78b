use crate::error::GemvError;
use crate::scalar::Scalar;
use crate::traits::{Vector, VectorMut};

fn check_geometry(len: usize, n: usize, stride: usize) -> Result<(), GemvError> {
    if n == 0 {
        return Ok(());
    }
    if n > 1 && stride == 0 {
        return Err(GemvError::InvalidDimensions(
            "Stride must be non-zero for a vector with more than one element".to_string(),
        ));
    }
    let span = (n - 1) * stride + 1;
    if len < span {
        return Err(GemvError::InvalidDimensions(format!(
            "Storage length ({}) does not cover {} elements with stride {}",
            len, n, stride
        )));
    }
    Ok(())
}

/// Read-only 1-D view over externally owned storage, possibly with a
/// non-unit stride (e.g. one column extracted from a wider block).
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T: Scalar> {
    data: &'a [T],
    len: usize,
    stride: usize,
}

impl<'a, T: Scalar> VectorView<'a, T> {
    /// Creates a view of `len` elements spaced `stride` apart. Fails if the
    /// strided span does not fit in `data`.
    pub fn new(data: &'a [T], len: usize, stride: usize) -> Result<Self, GemvError> {
        check_geometry(data.len(), len, stride)?;
        Ok(Self { data, len, stride })
    }

    /// Creates a contiguous view over the whole slice.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            stride: 1,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Collects the logical elements into an owned `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len).map(|i| self.data[i * self.stride]).collect()
    }
}

impl<T: Scalar> Vector for VectorView<'_, T> {
    type Value = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "vector index ({}) out of bounds for length {}",
            index,
            self.len
        );
        self.data[index * self.stride]
    }
}

/// Mutable 1-D view over externally owned storage.
#[derive(Debug)]
pub struct VectorViewMut<'a, T: Scalar> {
    data: &'a mut [T],
    len: usize,
    stride: usize,
}

impl<'a, T: Scalar> VectorViewMut<'a, T> {
    /// Creates a mutable view of `len` elements spaced `stride` apart.
    pub fn new(data: &'a mut [T], len: usize, stride: usize) -> Result<Self, GemvError> {
        check_geometry(data.len(), len, stride)?;
        Ok(Self { data, len, stride })
    }

    /// Creates a contiguous mutable view over the whole slice.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            len,
            stride: 1,
        }
    }

    /// Returns a read-only view aliasing the same storage, without copying.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &*self.data,
            len: self.len,
            stride: self.stride,
        }
    }

    /// Overwrites the logical elements with the contents of `source`.
    /// Lengths must match.
    pub fn clone_from_slice(&mut self, source: &[T]) -> Result<(), GemvError> {
        if source.len() != self.len {
            return Err(GemvError::InvalidDimensions(format!(
                "Source length ({}) does not match vector length ({})",
                source.len(),
                self.len
            )));
        }
        for (i, &value) in source.iter().enumerate() {
            self.data[i * self.stride] = value;
        }
        Ok(())
    }
}

impl<T: Scalar> Vector for VectorViewMut<'_, T> {
    type Value = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "vector index ({}) out of bounds for length {}",
            index,
            self.len
        );
        self.data[index * self.stride]
    }
}

impl<T: Scalar> VectorMut for VectorViewMut<'_, T> {
    fn set(&mut self, index: usize, value: T) {
        assert!(
            index < self.len,
            "vector index ({}) out of bounds for length {}",
            index,
            self.len
        );
        self.data[index * self.stride] = value;
    }
}

//! Array - bounds-checked storage for Fax `T[]` values.
//!
//! [`Array`] wraps a `Vec<T>` and intercepts every positional access. Bulk
//! operations (push, resize, iteration, clear) pass straight through; there
//! is no `Deref` to the inner vector, so generated code cannot reach an
//! unchecked access path.
//!
//! # Example
//!
//! ```
//! use faxc_runtime::{array, Array};
//!
//! let mut xs: Array<i64> = array![1, 2, 3];
//! xs[1] = 20;
//! assert_eq!(xs[1], 20);
//! assert!(xs.get(3).is_err());
//! assert!(xs.get(-1).is_err());
//! ```

use crate::error::{RuntimeError, RuntimeResult};
use crate::violation::check;
use std::ops::{Index, IndexMut};

/// Integer types generated code may index an [`Array`] with
///
/// Signed types are accepted because Fax integers are signed; a negative
/// index is always out of range.
pub trait ArrayIndex: Copy {
    /// Position in the array, or `None` if it cannot be one
    fn to_offset(self) -> Option<usize>;

    /// The index as written, for diagnostics
    fn to_wide(self) -> i128;
}

macro_rules! impl_array_index {
    ($($ty:ty),*) => {
        $(
            impl ArrayIndex for $ty {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_array_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

/// An ordered, resizable sequence with checked indexed access
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    items: Vec<T>,
}

impl<T> Array<T> {
    /// Create an empty array
    #[inline]
    pub const fn new() -> Self {
        Array { items: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create an array of `len` default values
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    /// Create an array of `len` copies of `value`
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Array {
            items: vec![value; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional)
    }

    /// Append an element
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value)
    }

    /// Remove the last element
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Shorten to `len` elements; no-op when already shorter
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len)
    }

    /// Grow with copies of `value` or shrink to `len`
    #[inline]
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.items.resize(len, value)
    }

    #[inline]
    pub fn resize_with<F>(&mut self, len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        self.items.resize_with(len, f)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Unwrap into the underlying vector
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Resolve `index` to a position inside the array
    #[inline]
    fn locate<I: ArrayIndex>(&self, index: I) -> RuntimeResult<usize> {
        match index.to_offset() {
            Some(offset) if offset < self.items.len() => Ok(offset),
            _ => Err(RuntimeError::out_of_range(index.to_wide(), self.items.len())),
        }
    }

    /// Checked read
    ///
    /// # Errors
    ///
    /// [`RuntimeError::IndexOutOfRange`] unless `0 <= index < len`.
    #[inline]
    pub fn get<I: ArrayIndex>(&self, index: I) -> RuntimeResult<&T> {
        let offset = self.locate(index)?;
        Ok(&self.items[offset])
    }

    /// Checked write access
    ///
    /// # Errors
    ///
    /// [`RuntimeError::IndexOutOfRange`] unless `0 <= index < len`.
    #[inline]
    pub fn get_mut<I: ArrayIndex>(&mut self, index: I) -> RuntimeResult<&mut T> {
        let offset = self.locate(index)?;
        Ok(&mut self.items[offset])
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) -> RuntimeResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Insert at `index`, shifting later elements; `index == len` appends
    pub fn insert<I: ArrayIndex>(&mut self, index: I, value: T) -> RuntimeResult<()> {
        match index.to_offset() {
            Some(offset) if offset <= self.items.len() => {
                self.items.insert(offset, value);
                Ok(())
            },
            _ => Err(RuntimeError::out_of_range(index.to_wide(), self.items.len())),
        }
    }

    /// Remove the element at `index`, shifting later elements
    pub fn remove<I: ArrayIndex>(&mut self, index: I) -> RuntimeResult<T> {
        let offset = self.locate(index)?;
        Ok(self.items.remove(offset))
    }

    /// Copy out `start..end`, the Fax slice expression `a[start:end]`
    ///
    /// # Errors
    ///
    /// [`RuntimeError::IndexOutOfRange`] unless `0 <= start <= end <= len`.
    /// The offending bound is reported.
    pub fn slice<I: ArrayIndex>(&self, start: I, end: I) -> RuntimeResult<Array<T>>
    where
        T: Clone,
    {
        let len = self.items.len();
        let end_offset = match end.to_offset() {
            Some(offset) if offset <= len => offset,
            _ => return Err(RuntimeError::out_of_range(end.to_wide(), len)),
        };
        let start_offset = match start.to_offset() {
            Some(offset) if offset <= end_offset => offset,
            _ => return Err(RuntimeError::out_of_range(start.to_wide(), len)),
        };
        Ok(Array::from(&self.items[start_offset..end_offset]))
    }
}

impl<T> Default for Array<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I: ArrayIndex> Index<I> for Array<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &T {
        check(self.get(index))
    }
}

impl<T, I: ArrayIndex> IndexMut<I> for Array<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut T {
        check(self.get_mut(index))
    }
}

impl<T> From<Vec<T>> for Array<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Array { items }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Array {
            items: items.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Array {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Array<T>> for Vec<T> {
    #[inline]
    fn from(array: Array<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Array {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.items.extend(iter)
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// Build an [`Array`] from a Fax array literal
///
/// # Examples
///
/// ```
/// use faxc_runtime::array;
///
/// let xs = array![1, 2, 3];
/// assert_eq!(xs.len(), 3);
///
/// let zeros = array![0u8; 4];
/// assert_eq!(zeros[3], 0);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Array::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Array::from([$($x),+])
    };
}

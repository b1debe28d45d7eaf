use std::ops::{Index, IndexMut};

use crate::scalar::{Integer, Ordinal};

/// Convert an ordinal index to a slice offset.
///
/// # Panics
/// If the index is negative or not below `len`.
fn checked_offset(index: impl Ordinal, len: usize) -> usize {
    let raw = index.ordinal();
    match usize::try_from(raw) {
        Ok(i) if i < len => i,
        _ => panic!("array index {raw} out of range 0..{len}"),
    }
}

/// Dynamic array (`array of T`).
///
/// `Low` is always 0 and `High` is `Length - 1` (so `-1` when empty).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Length(a)`.
    #[inline]
    pub fn length(&self) -> Integer {
        Integer::truncate_from(self.items.len())
    }

    /// `Low(a)`: always 0.
    #[inline]
    pub fn low(&self) -> Integer {
        Integer::ZERO
    }

    /// `High(a)`: `Length - 1`.
    #[inline]
    pub fn high(&self) -> Integer {
        self.length() - Integer::ONE
    }

    pub fn get(&self, index: impl Ordinal) -> Option<&T> {
        usize::try_from(index.ordinal())
            .ok()
            .and_then(|i| self.items.get(i))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> DynArray<T> {
    /// An array of `len` copies of `value`.
    pub fn with_value(len: impl Ordinal, value: T) -> Self {
        let len = usize::try_from(len.ordinal()).unwrap_or(0);
        Self {
            items: vec![value; len],
        }
    }

    /// `SetLength(a, n)` filling new slots with `value`.
    pub fn set_length_with(&mut self, new_len: impl Ordinal, value: T) {
        let new_len = usize::try_from(new_len.ordinal()).unwrap_or(0);
        self.items.resize(new_len, value);
    }

    /// `Copy(a, index, count)`.
    ///
    /// An `index` outside `0..Length` yields an empty array; `count` is
    /// clamped to what remains, and a negative `count` yields an empty array.
    pub fn copy(&self, index: impl Ordinal, count: impl Ordinal) -> Self {
        let len = self.items.len() as i64;
        let index = index.ordinal();
        if index < 0 || index >= len {
            return Self::new();
        }
        let count = count.ordinal().clamp(0, len - index);
        let from = index as usize;
        Self {
            items: self.items[from..from + count as usize].to_vec(),
        }
    }
}

impl<T: Default> DynArray<T> {
    /// An array of `len` default values.
    pub fn with_length(len: impl Ordinal) -> Self {
        let mut array = Self::new();
        array.set_length(len);
        array
    }

    /// `SetLength(a, n)`: keeps existing elements, default-fills growth,
    /// drops the tail on shrink.
    pub fn set_length(&mut self, new_len: impl Ordinal) {
        let new_len = usize::try_from(new_len.ordinal()).unwrap_or(0);
        self.items.resize_with(new_len, T::default);
    }
}

impl<T, I: Ordinal> Index<I> for DynArray<T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        &self.items[checked_offset(index, self.items.len())]
    }
}

impl<T, I: Ordinal> IndexMut<I> for DynArray<T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        let offset = checked_offset(index, self.items.len());
        &mut self.items[offset]
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Static array (`array[0..N-1] of T`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    pub const fn new(items: [T; N]) -> Self {
        Self { items }
    }

    /// `Length(a)`: always `N`.
    #[inline]
    pub fn length(&self) -> Integer {
        Integer::truncate_from(N)
    }

    #[inline]
    pub fn low(&self) -> Integer {
        Integer::ZERO
    }

    /// `High(a)`: always `N - 1`.
    #[inline]
    pub fn high(&self) -> Integer {
        Integer::truncate_from(N) - Integer::ONE
    }

    pub fn get(&self, index: impl Ordinal) -> Option<&T> {
        usize::try_from(index.ordinal())
            .ok()
            .and_then(|i| self.items.get(i))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self {
            items: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T, const N: usize, I: Ordinal> Index<I> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        &self.items[checked_offset(index, N)]
    }
}

impl<T, const N: usize, I: Ordinal> IndexMut<I> for FixedArray<T, N> {
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.items[checked_offset(index, N)]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;

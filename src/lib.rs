//! # seq_list
//!
//! `seq_list` implements a growable, **array-backed** ordered list: elements
//! live in a single contiguous block of slots, giving `O(1)` indexed reads and
//! writes at the cost of `O(n)` insertions and removals in the middle.
//!
//! ## Features
//! - Ordered sequence with index based elements access.
//! - Fallible positional operations: every out-of-range index, removal from
//!   an empty list and negative capacity request is reported as an [`Error`]
//!   instead of a panic, and is detected before the list is touched.
//! - Transparent, amortized growth: a list never rejects an insertion because
//!   its backing block is full.
//! - A [`Collection`] trait describing the bulk operations (`add_all`,
//!   `remove_all`, `retain_all`, ...) in terms of the positional primitives.
//!
//! ## Example
//! ```rust
//! use seq_list::{ArrayList, Error};
//!
//! let mut list: ArrayList<i64> = ArrayList::new();
//! list.push_back(2);
//! list.push_front(0);
//! list.insert(1, 1)?;
//!
//! assert_eq!(list.get(0), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.get(2), Ok(&2));
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
//! # Ok::<(), Error>(())
//! ```

mod collection;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod storage;

pub use collection::Collection;
pub use error::Error;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::storage::Storage;

/// A growable list backed by one contiguous block of slots.
///
/// # Features
/// - **Contiguous Storage**: elements occupy the first `len` slots of a block
///   of `capacity` slots; indexed access never walks the list.
/// - **Amortized Growth**: when an insertion needs more room the block is
///   replaced by one at least twice as large.
/// - **Fallible Operations**: positional operations return
///   [`Result`]s carrying an [`Error`] that tells the failure kinds apart.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
///
/// # Example
/// ```rust
/// use seq_list::ArrayList;
///
/// let mut list: ArrayList<i64> = ArrayList::with_capacity(0);
/// list.push_back(3);
/// list.push_front(1);
/// list.insert(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.pop_front(), Ok(2));
/// assert_eq!(list.pop_front(), Ok(3));
/// ```
pub struct ArrayList<T> {
    storage: Storage<T>,
    len: usize,
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            len: values.len(),
            storage: Storage::from_vec(values),
        }
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|value| self.push_back(value));
    }
}

impl<'a, T> Extend<&'a T> for ArrayList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Capacity of a list created by [`ArrayList::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates a new, empty `ArrayList` with room for
    /// [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) elements.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `ArrayList` with exactly `capacity` slots.
    ///
    /// A capacity of zero is valid: nothing is allocated until the first
    /// insertion.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::with_capacity(0);
    /// assert_eq!(list.capacity(), 0);
    ///
    /// list.push_back(5);
    /// assert_eq!(list.get(0), Ok(&5));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::with_capacity(capacity),
            len: 0,
        }
    }

    /// Creates a new, empty `ArrayList` from a signed capacity request.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `requested` is negative;
    /// nothing is allocated in that case.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::<i64>::try_with_capacity(4).unwrap();
    /// assert_eq!(list.capacity(), 4);
    ///
    /// assert_eq!(
    ///     ArrayList::<i64>::try_with_capacity(-1).err(),
    ///     Some(Error::InvalidCapacity { requested: -1 })
    /// );
    /// ```
    pub fn try_with_capacity(requested: isize) -> Result<Self, Error> {
        match usize::try_from(requested) {
            Ok(capacity) => Ok(Self::with_capacity(capacity)),
            Err(_) => {
                trace!(target: "seq_list", requested, "rejected negative capacity");
                Err(Error::InvalidCapacity { requested })
            }
        }
    }

    /// Adds an element to the front of the `ArrayList`, shifting every
    /// existing element one slot to the right.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push_front(10);
    /// list.push_front(20);
    ///
    /// assert_eq!(list.len(), 2);
    ///
    /// assert_eq!(list.pop_front(), Ok(20));
    /// assert_eq!(list.pop_front(), Ok(10));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.raw_insert(0, value);
    }

    /// Adds an element to the back of the `ArrayList`.
    ///
    /// If every slot is occupied the backing block grows first.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::with_capacity(1);
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.len(), 2);
    ///
    /// assert_eq!(list.pop_back(), Ok(20));
    /// assert_eq!(list.pop_back(), Ok(10));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.raw_insert(self.len, value);
    }

    /// Inserts an element at the specified index, shifting subsequent
    /// elements to the right.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index > len`; the list is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push_back(10);
    /// list.push_back(30);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(
    ///     list.insert(5, 40),
    ///     Err(Error::IndexOutOfRange { index: 5, len: 3 })
    /// );
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        self.raw_insert(index, value);
        Ok(())
    }

    fn raw_insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);

        self.storage.ensure_capacity(self.len, self.len + 1);
        self.storage.shift_right(index, self.len);
        self.storage.put(index, value);
        self.len += 1;
    }

    /// Moves all elements from the `other` list to the end of this one.
    ///
    /// After this operation `other` is empty but keeps its capacity.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list1 = ArrayList::from([1, 2]);
    /// let mut list2 = ArrayList::from([3, 4]);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, [1, 2, 3, 4]);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.reserve(other.len);

        let moved = other.storage.occupied_mut(other.len).iter_mut();
        for value in moved.flat_map(Option::take) {
            self.storage.put(self.len, value);
            self.len += 1;
        }

        other.len = 0;
    }

    /// Removes and returns the first element of the `ArrayList`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.pop_front(), Ok(10));
    /// assert_eq!(list.pop_front(), Ok(20));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        self.remove(0)
    }

    /// Removes and returns the last element of the `ArrayList`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.pop_back(), Ok(20));
    /// assert_eq!(list.pop_back(), Ok(10));
    /// assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        self.remove(self.len - 1)
    }

    /// Removes and returns the element at the specified index, shifting
    /// subsequent elements left.
    ///
    /// # Errors
    /// Returns [`Error::IndexNotFound`] if `index >= len`; the list is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list.get(1), Ok(&30));
    /// assert_eq!(list.len(), 4);
    ///
    /// assert_eq!(list.remove(10), Err(Error::IndexNotFound { index: 10, len: 4 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let not_found = Error::IndexNotFound {
            index,
            len: self.len,
        };

        if index >= self.len {
            return Err(not_found);
        }

        let value = self.storage.shift_left(index, self.len).ok_or(not_found)?;
        self.len -= 1;
        Ok(value)
    }

    /// Retains only the elements for which `keep` returns `true`, preserving
    /// their order.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3, 4, 5, 6]);
    /// list.retain(|value| value % 3 != 0);
    ///
    /// assert_eq!(list, [1, 2, 4, 5]);
    /// ```
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.len = self.storage.retain(self.len, keep);
    }

    /// Removes all elements from the `ArrayList`, keeping its capacity.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 3);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        self.storage.clear(self.len);
        self.len = 0;
    }

    /// Returns a reference to the first element of the `ArrayList`, if any.
    ///
    /// # Examples
    /// ```
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    /// assert_eq!(list.front(), Some(&10));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns a mutable reference to the first element of the `ArrayList`, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0).ok()
    }

    /// Returns a reference to the last element of the `ArrayList`, if any.
    ///
    /// # Examples
    /// ```
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    /// assert_eq!(list.back(), Some(&20));
    ///
    /// list.clear();
    /// assert_eq!(list.back(), None);
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Returns a mutable reference to the last element of the `ArrayList`, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let index = self.len.checked_sub(1)?;
        self.get_mut(index).ok()
    }

    /// Returns a reference to the element at the specified index.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        self.storage.slot(index).ok_or(self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at the specified index.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// if let Ok(value) = list.get_mut(1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(list, [10, 21]);
    /// assert!(list.get_mut(2).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let out_of_range = self.out_of_range(index);
        if index >= self.len {
            return Err(out_of_range);
        }

        self.storage.slot_mut(index).ok_or(out_of_range)
    }

    /// Overwrites the element at the specified index, returning the previous
    /// one. No element moves and the length is unchanged.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from(["a", "b"]);
    ///
    /// assert_eq!(list.set(1, "c"), Ok("b"));
    /// assert_eq!(list, ["a", "c"]);
    /// assert_eq!(list.set(2, "d"), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let out_of_range = self.out_of_range(index);
        if index >= self.len {
            return Err(out_of_range);
        }

        self.storage.put(index, value).ok_or(out_of_range)
    }

    /// Returns the number of elements currently stored in the `ArrayList`.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `ArrayList` is empty.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Makes room for at least `additional` more elements without further
    /// reallocation.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1]);
    /// list.reserve(10);
    ///
    /// assert!(list.capacity() >= 11);
    /// assert_eq!(list, [1]);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.storage
            .ensure_capacity(self.len, self.len.saturating_add(additional));
    }

    /// Shrinks the backing block to exactly `len` slots.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push_back(1);
    /// list.shrink_to_fit();
    ///
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to(self.len, 0);
    }

    /// Returns `true` if the list holds an element equal to `value`.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let list = ArrayList::from([String::from("a"), String::from("b")]);
    ///
    /// assert!(list.contains(&String::from("b")));
    /// assert!(!list.contains(&String::from("c")));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Copies the elements into a newly allocated `Vec`, in order.
    ///
    /// The result shares nothing with the list.
    ///
    /// # Example
    /// ```rust
    /// use seq_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2, 3]);
    /// let mut copy = list.to_vec();
    /// copy[0] = 9;
    ///
    /// assert_eq!(copy, [9, 2, 3]);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Converts the list into a `Vec` holding its elements, in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use seq_list::ArrayList;
    ///
    /// let list = ArrayList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use seq_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([0, 1, 2]);
    ///
    /// for value in list.iter_mut() {
    ///     *value *= 2;
    /// }
    /// assert_eq!(list, [0, 2, 4]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<Vec<T>> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

impl<T> PartialOrd for ArrayList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ArrayList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for ArrayList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> fmt::Debug for ArrayList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[a, b, c]`, or `[]` when empty.
impl<T> fmt::Display for ArrayList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}

//! Backing store and capacity management for [`ArrayList`](crate::ArrayList).
//!
//! A `Storage<T>` is a fixed-size block of slots. The owning list tracks how
//! many of them are occupied; the store itself only guarantees that the
//! occupied prefix is moved intact whenever the block is replaced.

use tracing::trace;

/// Smallest block allocated when growing a zero-capacity store.
pub(crate) const MIN_NON_ZERO_CAPACITY: usize = 4;

/// A contiguous, exclusively owned block of element slots.
///
/// Callers keep the invariant that slots `[0, len)` are `Some` and every
/// slot from `len` onwards is `None`, where `len` is the owning list's length.
pub(crate) struct Storage<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Storage<T> {
    /// Allocates exactly `capacity` vacant slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vacant_slots(capacity),
        }
    }

    /// Builds a store holding `values` in order, with no spare slots.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Makes sure at least `required` slots exist, reallocating if needed.
    ///
    /// The new capacity is at least double the old one, which keeps a run of
    /// `n` appends at `O(n)` total copying.
    pub fn ensure_capacity(&mut self, len: usize, required: usize) {
        if required <= self.capacity() {
            return;
        }

        let new_capacity = self
            .capacity()
            .saturating_mul(2)
            .max(required)
            .max(MIN_NON_ZERO_CAPACITY);

        self.reallocate(len, new_capacity);
    }

    /// Releases spare slots, keeping at least `max(len, min_capacity)`.
    pub fn shrink_to(&mut self, len: usize, min_capacity: usize) {
        let target = len.max(min_capacity);
        if target < self.capacity() {
            self.reallocate(len, target);
        }
    }

    fn reallocate(&mut self, len: usize, new_capacity: usize) {
        debug_assert!(len <= new_capacity);
        debug_assert!(len <= self.capacity());

        let mut slots = vacant_slots(new_capacity);
        slots
            .iter_mut()
            .zip(self.slots[..len].iter_mut())
            .for_each(|(dst, src)| *dst = src.take());

        trace!(
            target: "seq_list::storage",
            old_capacity = self.capacity(),
            new_capacity,
            len,
            "reallocated backing store"
        );

        self.slots = slots;
    }

    /// Opens a vacant slot at `index` by moving `[index, len)` one slot up.
    ///
    /// Requires `index <= len < capacity`.
    pub fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len);
        debug_assert!(len < self.capacity());

        // Slot `len` is vacant: each swap walks the hole one step down,
        // moving the highest unshifted element first.
        for position in (index..len).rev() {
            self.slots.swap(position, position + 1);
        }
    }

    /// Takes the element at `index` and closes the gap by moving
    /// `(index, len)` one slot down. Slot `len - 1` is vacant afterwards.
    ///
    /// Requires `index < len <= capacity`.
    pub fn shift_left(&mut self, index: usize, len: usize) -> Option<T> {
        debug_assert!(index < len);
        debug_assert!(len <= self.capacity());

        let value = self.slots[index].take();
        for position in index + 1..len {
            self.slots.swap(position - 1, position);
        }

        value
    }

    /// Keeps the elements of `[0, len)` accepted by `keep`, compacted to the
    /// front in their original order. Returns the new length.
    pub fn retain<F>(&mut self, len: usize, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = 0;

        // Rejected elements are only swapped towards the back here, so a
        // panicking predicate leaves `[0, len)` fully occupied.
        for position in 0..len {
            if self.slots[position].as_ref().is_some_and(&mut keep) {
                self.slots.swap(kept, position);
                kept += 1;
            }
        }

        self.slots[kept..len].iter_mut().for_each(|slot| *slot = None);
        kept
    }

    /// Vacates every slot in `[0, len)`.
    pub fn clear(&mut self, len: usize) {
        self.slots[..len].iter_mut().for_each(|slot| *slot = None);
    }

    #[inline]
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Writes `value` into slot `index`, returning what was there.
    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    #[inline]
    pub fn occupied(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }

    #[inline]
    pub fn occupied_mut(&mut self, len: usize) -> &mut [Option<T>] {
        &mut self.slots[..len]
    }

    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

use std::iter::FusedIterator;
use std::slice;

use crate::ArrayList;

/// A mutable iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::iter_mut().
pub struct IterMut<'a, T> {
    delegate: slice::IterMut<'a, Option<T>>,
}

const _: [(); core::mem::size_of::<usize>() * 2] = [(); core::mem::size_of::<IterMut<usize>>()];

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            delegate: slice::IterMut::default(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ArrayList<T>) -> Self {
        Self {
            delegate: list.storage.occupied_mut(list.len).iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.delegate.len()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n).and_then(Option::as_mut)
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().and_then(Option::as_mut)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

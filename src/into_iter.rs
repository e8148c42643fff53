use std::iter::FusedIterator;
use std::vec;

use crate::ArrayList;

/// An owning iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::into_iter().
#[derive(Clone)]
pub struct IntoIter<T> {
    delegate: vec::IntoIter<Option<T>>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: vec::IntoIter::default(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ArrayList<T>) -> Self {
        let len = list.len;
        let mut slots = list.storage.into_slots();
        slots.truncate(len);

        Self {
            delegate: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().flatten()
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
        self.delegate.nth(n).flatten()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.flatten().fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().flatten()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).flatten()
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.flatten().rfold(init, f)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::ArrayList;

    use super::IntoIter;

    #[test]
    fn default_iterator_yields_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn into_iter_forward() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_backward() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn into_iter_drops_spare_capacity() {
        let mut list = ArrayList::with_capacity(32);
        list.push_back(String::from("a"));
        list.push_back(String::from("b"));

        let sut = list.into_iter();
        assert_eq!(sut.len(), 2);
        assert_eq!(sut.collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3]);

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.len(), 2);
        assert_eq!(sut.nth(1), Some(2));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn fold_visits_in_order() {
        let list = ArrayList::<usize>::from([1, 2, 3]);
        let digits = list.into_iter().fold(0, |acc, value| acc * 10 + value);
        assert_eq!(digits, 123);

        let list = ArrayList::<usize>::from([1, 2, 3]);
        let digits = list.into_iter().rfold(0, |acc, value| acc * 10 + value);
        assert_eq!(digits, 321);
    }

    #[test]
    fn clone_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2]);
        let mut base = list.into_iter();
        base.next();

        let sut = base.clone();
        assert_eq!(sut.collect::<Vec<_>>(), [1, 2]);
        assert_eq!(base.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn debug_works_correctly() {
        let list = ArrayList::<usize>::from([1, 2]);
        let sut = list.into_iter();
        assert_eq!(format!("{sut:?}"), "IntoIter([Some(1), Some(2)])");
    }
}

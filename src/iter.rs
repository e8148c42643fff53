use std::iter::FusedIterator;
use std::slice;

use crate::ArrayList;

/// An iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::iter().
pub struct Iter<'a, T> {
    delegate: slice::Iter<'a, Option<T>>,
}

const _: [(); core::mem::size_of::<usize>() * 2] = [(); core::mem::size_of::<Iter<usize>>()];

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            delegate: slice::Iter::default(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ArrayList<T>) -> Self {
        Self {
            delegate: list.storage.occupied(list.len).iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().and_then(Option::as_ref)
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
        self.delegate.nth(n).and_then(Option::as_ref)
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().and_then(Option::as_ref)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::ArrayList;

    use super::Iter;

    #[test]
    fn default_iterator_yields_nothing() {
        let mut sut: Iter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn iter_forward() {
        let mut list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        list.clear();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn iter_backward() {
        let mut list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[4, 3, 2, 1, 0]);

        list.clear();
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn iter_skips_spare_capacity() {
        let mut list = ArrayList::with_capacity(16);
        list.push_back(1);
        list.push_back(2);

        let sut = list.iter();
        assert_eq!(sut.len(), 2);
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 5);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.len(), 4);

        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.len(), 2);

        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.len(), 1);

        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn nth_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.nth(1), Some(&1));
        assert_eq!(sut.nth_back(1), Some(&3));
        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.nth(0), None);
    }

    #[test]
    fn last_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(sut.last(), Some(&4));
    }

    #[test]
    fn clone_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);

        let mut base = list.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = ArrayList::<usize>::from(array);
        let sut = list.iter();
        assert_eq!(
            format!("{sut:?}"),
            format!("Iter({:?}, {})", array, array.len())
        );
    }
}

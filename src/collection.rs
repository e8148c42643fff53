use crate::ArrayList;

/// A group of elements that can be added to, removed from, searched and
/// walked in order.
///
/// Implementors provide the handful of required primitives; the bulk
/// operations are derived from them.
///
/// # Example
/// ```rust
/// use seq_list::{ArrayList, Collection};
///
/// fn total<C: Collection<i32>>(collection: &C) -> i32 {
///     collection.iter().sum()
/// }
///
/// let mut list = ArrayList::from([1, 2, 3]);
/// list.add_all(&ArrayList::from([4, 5]));
///
/// assert_eq!(total(&list), 15);
/// assert!(list.contains_all(&ArrayList::from([5, 1])));
/// ```
pub trait Collection<T> {
    /// Iterator over shared references to the elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Adds `value`, returning `true` if the collection changed.
    fn add(&mut self, value: T) -> bool;

    /// Removes the first element equal to `value`, returning `true` if one
    /// was found.
    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element.
    fn clear(&mut self);

    /// Iterates over the elements.
    fn iter(&self) -> Self::Iter<'_>;

    /// Keeps only the elements accepted by `keep`.
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns `true` if every element of `other` is present in `self`.
    fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<T>,
        T: PartialEq,
    {
        other.iter().all(|value| self.contains(value))
    }

    /// Adds a clone of every element of `other`, returning `true` if the
    /// collection changed.
    fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T>,
        T: Clone,
    {
        other
            .iter()
            .fold(false, |changed, value| self.add(value.clone()) || changed)
    }

    /// Removes every element that also appears in `other`, returning `true`
    /// if the collection changed.
    fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T>,
        T: PartialEq,
    {
        let before = self.len();
        self.retain(|value| !other.contains(value));
        self.len() != before
    }

    /// Removes every element that does not appear in `other`, returning
    /// `true` if the collection changed.
    fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T>,
        T: PartialEq,
    {
        let before = self.len();
        self.retain(|value| other.contains(value));
        self.len() != before
    }

    /// Copies the elements into a newly allocated `Vec`, in iteration order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Collection<T> for ArrayList<T> {
    type Iter<'a>
        = crate::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn add(&mut self, value: T) -> bool {
        self.push_back(value);
        true
    }

    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match ArrayList::iter(self).position(|element| element == value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    fn clear(&mut self) {
        ArrayList::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        ArrayList::iter(self)
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        ArrayList::retain(self, keep);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::contains(self, value)
    }

    fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T>,
        T: Clone,
    {
        let before = ArrayList::len(self);
        self.extend(other.iter());
        ArrayList::len(self) != before
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        ArrayList::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayList, Collection};

    /// Minimal second implementor, so the bulk operations are exercised
    /// across different collection types.
    #[derive(Debug, Default)]
    struct Bag(Vec<i32>);

    impl Collection<i32> for Bag {
        type Iter<'a> = std::slice::Iter<'a, i32>;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn add(&mut self, value: i32) -> bool {
            self.0.push(value);
            true
        }

        fn remove_item(&mut self, value: &i32) -> bool {
            match self.0.iter().position(|element| element == value) {
                Some(index) => {
                    self.0.remove(index);
                    true
                }
                None => false,
            }
        }

        fn clear(&mut self) {
            self.0.clear();
        }

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }

        fn retain<F>(&mut self, keep: F)
        where
            F: FnMut(&i32) -> bool,
        {
            self.0.retain(keep);
        }
    }

    #[test]
    fn test_add_appends() {
        let mut sut: ArrayList<i32> = ArrayList::with_capacity(0);
        assert!(Collection::add(&mut sut, 1));
        assert!(Collection::add(&mut sut, 2));
        assert_eq!(sut, [1, 2]);
        assert_eq!(Collection::len(&sut), 2);
        assert!(!Collection::is_empty(&sut));
    }

    #[test]
    fn test_remove_item_removes_first_occurrence_only() {
        let mut sut = ArrayList::from([1, 2, 1, 3]);

        assert!(sut.remove_item(&1));
        assert_eq!(sut, [2, 1, 3]);

        assert!(sut.remove_item(&1));
        assert_eq!(sut, [2, 3]);

        assert!(!sut.remove_item(&1));
        assert_eq!(sut, [2, 3]);
    }

    #[test]
    fn test_contains_all() {
        let sut = ArrayList::from([1, 2, 3]);

        assert!(sut.contains_all(&Bag(vec![3, 1])));
        assert!(sut.contains_all(&Bag::default()));
        assert!(!sut.contains_all(&Bag(vec![1, 4])));
        assert!(Bag(vec![2, 3, 1]).contains_all(&sut));
    }

    #[test]
    fn test_add_all_appends_in_iteration_order() {
        let mut sut = ArrayList::from([1]);

        assert!(sut.add_all(&Bag(vec![2, 3])));
        assert_eq!(sut, [1, 2, 3]);

        assert!(!sut.add_all(&Bag::default()));
        assert_eq!(sut, [1, 2, 3]);

        let mut bag = Bag::default();
        assert!(bag.add_all(&sut));
        assert_eq!(bag.0, [1, 2, 3]);
    }

    #[test]
    fn test_remove_all_removes_every_occurrence() {
        let mut sut = ArrayList::from([1, 2, 1, 3, 2]);

        assert!(sut.remove_all(&Bag(vec![1, 2])));
        assert_eq!(sut, [3]);

        assert!(!sut.remove_all(&Bag(vec![7])));
        assert_eq!(sut, [3]);
    }

    #[test]
    fn test_retain_all_keeps_common_elements() {
        let mut sut = ArrayList::from([1, 2, 3, 4, 2]);

        assert!(sut.retain_all(&ArrayList::from([2, 4])));
        assert_eq!(sut, [2, 4, 2]);

        assert!(!sut.retain_all(&Bag(vec![2, 4])));
        assert_eq!(sut, [2, 4, 2]);

        let mut bag = Bag(vec![5, 4, 3]);
        assert!(bag.retain_all(&sut));
        assert_eq!(bag.0, [4]);
    }

    #[test]
    fn test_clear_empties_the_collection() {
        let mut sut = ArrayList::from([1, 2]);
        Collection::clear(&mut sut);
        assert!(Collection::is_empty(&sut));
    }

    #[test]
    fn test_iter_and_to_vec_follow_storage_order() {
        let sut = ArrayList::from([3, 1, 2]);

        assert_eq!(
            Collection::iter(&sut).copied().collect::<Vec<_>>(),
            [3, 1, 2]
        );
        assert_eq!(Collection::to_vec(&sut), [3, 1, 2]);
        assert_eq!(Bag(vec![9, 8]).to_vec(), [9, 8]);
    }

    #[test]
    fn test_provided_contains_uses_value_equality() {
        let bag = Bag(vec![1, 2]);
        assert!(bag.contains(&2));
        assert!(!bag.contains(&3));
    }

    #[test]
    fn test_generic_callers_see_the_same_elements() {
        fn collect<C: Collection<i32>>(collection: &C) -> Vec<i32> {
            collection.iter().copied().collect()
        }

        let list = ArrayList::from([1, 2, 3]);
        let bag = Bag(vec![1, 2, 3]);
        assert_eq!(collect(&list), collect(&bag));
    }
}

use crate::avl_tree::Avl;
use crate::bst::map::{TreeMap, TreeMapIntoIter, TreeMapIter};
use crate::bst::Balance;
use crate::error::Result;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a self-balancing binary search tree.
///
/// The set is a `TreeMap` with unit values and shares its balancing strategies.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct TreeSet<T, B = Avl>
where
    B: Balance,
{
    map: TreeMap<T, (), B>,
}

impl<T, B> TreeSet<T, B>
where
    B: Balance,
{
    /// Constructs a new, empty `TreeSet<T, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        TreeSet {
            map: TreeMap::new(),
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.map.insert(key, ()).1
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Checks the invariants of the underlying tree.
    pub fn verify(&self) -> Result<()>
    where
        T: Ord,
    {
        self.map.verify()
    }

    /// Returns an iterator over the set. The iterator will yield keys in ascending order, or in
    /// descending order when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeSetIter<T, B> {
        TreeSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T, B> IntoIterator for TreeSet<T, B>
where
    B: Balance,
{
    type IntoIter = TreeSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        TreeSetIntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, B> IntoIterator for &'a TreeSet<T, B>
where
    T: 'a,
    B: Balance,
{
    type IntoIter = TreeSetIter<'a, T, B>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct TreeSetIntoIter<T> {
    map_iter: TreeMapIntoIter<T, ()>,
}

impl<T> Iterator for TreeSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T> DoubleEndedIterator for TreeSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

/// An iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreeSetIter<'a, T, B>
where
    T: 'a,
    B: Balance,
{
    map_iter: TreeMapIter<'a, T, (), B>,
}

impl<'a, T, B> Iterator for TreeSetIter<'a, T, B>
where
    T: 'a,
    B: Balance,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<'a, T, B> DoubleEndedIterator for TreeSetIter<'a, T, B>
where
    T: 'a,
    B: Balance,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

impl<T, B> Default for TreeSet<T, B>
where
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Clone for TreeSet<T, B>
where
    T: Clone,
    B: Balance,
{
    fn clone(&self) -> Self {
        TreeSet {
            map: self.map.clone(),
        }
    }
}

impl<T, B> fmt::Debug for TreeSet<T, B>
where
    T: fmt::Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B> Extend<T> for TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.map.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<T, B> FromIterator<T> for TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

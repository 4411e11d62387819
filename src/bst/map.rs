use crate::avl_tree::Avl;
use crate::bst::cursor::Cursor;
use crate::bst::node::NodeId;
use crate::bst::tree::Tree;
use crate::bst::Balance;
use crate::entry::Entry;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::vec;

/// An ordered map implemented using a self-balancing binary search tree.
///
/// The balancing strategy is chosen through the type parameter `B`: `Avl` keeps the heights of
/// sibling subtrees within one of each other, `RedBlack` keeps every path's count of black nodes
/// equal. Both keep the height of the tree logarithmic in the number of entries. The aliases
/// `AvlMap` and `RedBlackMap` name the two variants.
///
/// Keys are unique. Inserting a key that is already present leaves the map unchanged.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct TreeMap<T, U, B = Avl>
where
    B: Balance,
{
    tree: Tree<T, U, B>,
}

impl<T, U, B> TreeMap<T, U, B>
where
    B: Balance,
{
    /// Constructs a new, empty `TreeMap<T, U, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        TreeMap { tree: Tree::new() }
    }

    fn resolve(&self, cursor: Cursor) -> Option<NodeId> {
        cursor.node().filter(|node| self.tree.contains(*node))
    }

    /// Inserts a key-value pair into the map. Returns a cursor to the entry with the key and
    /// `true` if the pair was inserted. If the key already exists, the map is left unchanged,
    /// `value` is dropped and the returned flag is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let (cursor, inserted) = map.insert(1, 1);
    /// assert!(inserted);
    ///
    /// assert_eq!(map.insert(1, 2), (cursor, false));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> (Cursor, bool)
    where
        T: Ord,
    {
        let (node, inserted) = self.tree.insert_with(key, || value);
        (Cursor::new(Some(node)), inserted)
    }

    /// Returns a cursor to the entry with a particular key, or the end cursor if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 2);
    /// assert_eq!(map.entry_at(map.find(&1)), Some((&1, &2)));
    /// assert_eq!(map.find(&0), map.end());
    /// ```
    pub fn find<V>(&self, key: &V) -> Cursor
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Cursor::new(self.tree.find(key))
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .map(|node| self.tree.remove(node).into_pair())
    }

    /// Removes the entry with a particular key. Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    /// use balanced_collections::error::Error;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.erase(&1), Err(Error::EmptyContainer));
    ///
    /// map.insert(1, 1);
    /// assert_eq!(map.erase(&2), Ok(false));
    /// assert_eq!(map.erase(&1), Ok(true));
    /// ```
    pub fn erase<V>(&mut self, key: &V) -> Result<bool>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.remove(key).is_some())
    }

    /// Removes the entry a cursor refers to and returns a cursor to the next entry in ascending
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the map is empty and `Error::InvalidArgument` if the
    /// cursor is the end cursor or its entry was already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let next = map.erase_at(map.begin()).unwrap();
    /// assert_eq!(map.entry_at(next), Some((&2, &2)));
    /// assert!(map.erase_at(map.end()).is_err());
    /// ```
    pub fn erase_at(&mut self, cursor: Cursor) -> Result<Cursor> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let node = self
            .resolve(cursor)
            .ok_or(Error::InvalidArgument("cursor does not refer to an entry"))?;
        let next = self.tree.succ(node);
        self.tree.remove(node);
        Ok(Cursor::new(next))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .map(|node| &self.tree.entry(node).value)
    }

    /// Returns the value associated with a particular key without ever inserting.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    /// use balanced_collections::error::Error;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.try_get(&1), Ok(&1));
    /// assert_eq!(map.try_get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get<V>(&self, key: &V) -> Result<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.tree.find(key) {
            Some(node) => Some(&mut self.tree.entry_mut(node).value),
            None => None,
        }
    }

    /// Returns a mutable reference to the value associated with a key, inserting the default
    /// value first if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map: AvlMap<&str, u32> = AvlMap::new();
    /// *map.get_or_default("a") += 1;
    /// *map.get_or_default("a") += 1;
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn get_or_default(&mut self, key: T) -> &mut U
    where
        T: Ord,
        U: Default,
    {
        let (node, _) = self.tree.insert_with(key, U::default);
        &mut self.tree.entry_mut(node).value
    }

    /// Returns a copy of the value associated with a key. If the key does not exist, `default`
    /// is inserted and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.set_default(1, 5), 5);
    /// assert_eq!(map.set_default(1, 6), 5);
    /// assert_eq!(map[&1], 5);
    /// ```
    pub fn set_default(&mut self, key: T, default: U) -> U
    where
        T: Ord,
        U: Clone,
    {
        let (node, _) = self.tree.insert_with(key, || default);
        self.tree.entry(node).value.clone()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key).map(|node| self.tree.key(node))
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key).map(|node| self.tree.key(node))
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.first().map(|node| self.tree.key(node))
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.last().map(|node| self.tree.key(node))
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or `None` if the
    /// map is empty.
    pub fn height(&self) -> Option<usize> {
        self.tree.height()
    }

    /// Checks the ordering, the parent links and the balancing strategy's invariant of the
    /// underlying tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` describing the first violation found.
    pub fn verify(&self) -> Result<()>
    where
        T: Ord,
    {
        self.tree.verify()
    }

    /// Returns a cursor to the entry with the minimum key, or the end cursor if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut keys = Vec::new();
    /// let mut cursor = map.begin();
    /// while cursor != map.end() {
    ///     keys.push(*map.entry_at(cursor).unwrap().0);
    ///     cursor = map.next_cursor(cursor);
    /// }
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.tree.first())
    }

    /// Returns the past-the-end cursor.
    pub fn end(&self) -> Cursor {
        Cursor::end()
    }

    /// Returns a cursor to the entry with the maximum key, the first position of a descending
    /// walk that advances with `prev_cursor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut keys = Vec::new();
    /// let mut cursor = map.rbegin();
    /// while cursor != map.rend() {
    ///     keys.push(*map.entry_at(cursor).unwrap().0);
    ///     cursor = map.prev_cursor(cursor);
    /// }
    /// assert_eq!(keys, vec![2, 1]);
    /// ```
    pub fn rbegin(&self) -> Cursor {
        Cursor::new(self.tree.last())
    }

    /// Returns the position a descending walk ends at, which is the past-the-end cursor.
    pub fn rend(&self) -> Cursor {
        Cursor::end()
    }

    /// Returns the cursor following `cursor` in ascending order. The end cursor and cursors to
    /// removed entries advance to the end cursor.
    pub fn next_cursor(&self, cursor: Cursor) -> Cursor {
        Cursor::new(self.resolve(cursor).and_then(|node| self.tree.succ(node)))
    }

    /// Returns the cursor preceding `cursor` in ascending order. The end cursor moves back to the
    /// maximum entry; the minimum entry and cursors to removed entries move to the end cursor.
    pub fn prev_cursor(&self, cursor: Cursor) -> Cursor {
        if cursor.is_end() {
            return self.rbegin();
        }
        Cursor::new(self.resolve(cursor).and_then(|node| self.tree.pred(node)))
    }

    /// Returns the key-value pair a cursor refers to, or `None` for the end cursor and cursors to
    /// removed entries.
    pub fn entry_at(&self, cursor: Cursor) -> Option<(&T, &U)> {
        self.resolve(cursor).map(|node| {
            let Entry { key, value } = self.tree.entry(node);
            (key, value)
        })
    }

    /// Returns a mutable reference to the value a cursor refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let (cursor, _) = map.insert(1, 1);
    /// *map.value_at_mut(cursor).unwrap() = 3;
    /// assert_eq!(map[&1], 3);
    /// ```
    pub fn value_at_mut(&mut self, cursor: Cursor) -> Option<&mut U> {
        match self.resolve(cursor) {
            Some(node) => Some(&mut self.tree.entry_mut(node).value),
            None => None,
        }
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in ascending key
    /// order, or in descending order when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    ///
    /// assert_eq!(map.iter().rev().next(), Some((&2, &2)));
    /// ```
    pub fn iter(&self) -> TreeMapIter<T, U, B> {
        TreeMapIter {
            tree: &self.tree,
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.tree.len(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs in
    /// ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> TreeMapIterMut<T, U> {
        TreeMapIterMut {
            entries: self.tree.entries_mut().into_iter(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &U> {
        self.iter().map(|(_, value)| value)
    }
}

impl<T, U, B> IntoIterator for TreeMap<T, U, B>
where
    B: Balance,
{
    type IntoIter = TreeMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        TreeMapIntoIter {
            entries: self.tree.into_entries().into_iter(),
        }
    }
}

impl<'a, T, U, B> IntoIterator for &'a TreeMap<T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type IntoIter = TreeMapIter<'a, T, U, B>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U, B> IntoIterator for &'a mut TreeMap<T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type IntoIter = TreeMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `TreeMap<T, U, B>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct TreeMapIntoIter<T, U> {
    entries: vec::IntoIter<Entry<T, U>>,
}

impl<T, U> Iterator for TreeMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, U> DoubleEndedIterator for TreeMapIntoIter<T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(Entry::into_pair)
    }
}

impl<T, U> ExactSizeIterator for TreeMapIntoIter<T, U> {}

/// An iterator for `TreeMap<T, U, B>`.
///
/// This iterator steps with the tree's successor and predecessor links. It yields immutable
/// references in ascending key order from the front and descending key order from the back.
pub struct TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    tree: &'a Tree<T, U, B>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, U, B> Iterator for TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = self.tree.succ(node);
        self.remaining -= 1;
        let Entry { key, value } = self.tree.entry(node);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U, B> DoubleEndedIterator for TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = self.tree.pred(node);
        self.remaining -= 1;
        let Entry { key, value } = self.tree.entry(node);
        Some((key, value))
    }
}

impl<'a, T, U, B> ExactSizeIterator for TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
}

/// A mutable iterator for `TreeMap<T, U, B>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references to the
/// values.
pub struct TreeMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    entries: vec::IntoIter<(&'a T, &'a mut U)>,
}

impl<'a, T, U> Iterator for TreeMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, T, U> DoubleEndedIterator for TreeMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<'a, T, U> ExactSizeIterator for TreeMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
}

impl<T, U, B> Default for TreeMap<T, U, B>
where
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, B> Clone for TreeMap<T, U, B>
where
    T: Clone,
    U: Clone,
    B: Balance,
{
    fn clone(&self) -> Self {
        TreeMap {
            tree: self.tree.clone(),
        }
    }
}

impl<T, U, B> fmt::Debug for TreeMap<T, U, B>
where
    T: fmt::Debug,
    U: fmt::Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, B, C> PartialEq<TreeMap<T, U, C>> for TreeMap<T, U, B>
where
    T: PartialEq,
    U: PartialEq,
    B: Balance,
    C: Balance,
{
    fn eq(&self, other: &TreeMap<T, U, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, B> Eq for TreeMap<T, U, B>
where
    T: Eq,
    U: Eq,
    B: Balance,
{
}

impl<T, U, B> Extend<(T, U)> for TreeMap<T, U, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U, B> FromIterator<(T, U)> for TreeMap<T, U, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U, B, const N: usize> From<[(T, U); N]> for TreeMap<T, U, B>
where
    T: Ord,
    B: Balance,
{
    fn from(entries: [(T, U); N]) -> Self {
        IntoIterator::into_iter(entries).collect()
    }
}

impl<'a, T, U, B, V> Index<&'a V> for TreeMap<T, U, B>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    B: Balance,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

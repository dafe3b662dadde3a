//! An ordered map backed by a skiplist whose nodes live in an arena.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where we see that a node `[x]` will have `n` links to other nodes, where `n` represents
//! which level that node reaches.  The idea is that when a node needs to be found (say for
//! insertion), then you start at the highest level and move down.  This allows for many of the
//! lower-level nodes to be skipped thus making it faster.
//!
//! Links are indices into the list's own `NodeArena` rather than pointers, so splicing a node in
//! or out of several levels at once never aliases or leaks.  The head is not stored in the arena:
//! it is the list's own vector of links, and its length is the number of active levels.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::default;
use std::fmt;
use std::iter;
use std::mem;

use logger::{log, Logger};

use crate::error::SkipListError;
use crate::level_generator::{GeometricalLevelGenerator, LevelGenerator};
use crate::skipnode::{Link, NodeArena, SkipNode};

/// Number of levels above the base level used by `Default` and `FromIterator`.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Largest `max_level` a list honours.  Larger bounds are clamped to it: with a fair coin, a
/// height above it is never drawn in practice.
pub const MAX_LEVEL_LIMIT: usize = 64;

/// Probability that a node reaching level `n` also reaches level `n + 1`.
const LEVEL_PROBABILITY: f64 = 0.5;

// /////////////////////////////////////////////////////////////////////////////////////////////////
// KvPair
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// A key and its value as returned by `range`, `ceil` and `floor`.
///
/// The pair only borrows from the list; it does not keep the node alive and cannot modify it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct KvPair<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

impl<'a, K, V> KvPair<'a, K, V> {
    #[inline]
    pub fn key(&self) -> &'a K {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &'a V {
        self.value
    }

    #[inline]
    pub fn into_tuple(self) -> (&'a K, &'a V) {
        (self.key, self.value)
    }
}

impl<'a, K, V> Clone for KvPair<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for KvPair<'a, K, V> {}

// /////////////////////////////////////////////////////////////////////////////////////////////////
// SkipList
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// A position reached while walking the list: either the head or a stored node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Head,
    Node(usize),
}

/// The skiplist provides a way of storing key-value pairs such that the keys are always sorted
/// whilst at the same time providing efficient way to access, insert and remove nodes.
///
/// Every operation runs in `O(log(n))` expected time.  The list is not synchronised: share it
/// between threads only behind a lock.
///
/// Note that mutable references to keys are not available at all as this could result in a node
/// being left out of the proper ordering.
pub struct SkipList<K, V, G = GeometricalLevelGenerator> {
    nodes: NodeArena<K, V>,
    // The head's links.  Its length is the number of active levels and never ends with `None`.
    head: Vec<Link>,
    max_level: usize,
    level_generator: G,
    logger: Option<Logger>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<K, V> SkipList<K, V>
where
    K: Ord,
{
    /// Create a new skiplist whose nodes reach at most `max_level` levels above the base level.
    /// Levels are drawn with a generator seeded from the current time.
    ///
    /// A `max_level` of zero is rejected; one above `MAX_LEVEL_LIMIT` is clamped to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::{SkipList, SkipListError};
    ///
    /// let skiplist: SkipList<i64, String> = SkipList::new(8).unwrap();
    /// assert_eq!(skiplist.level(), 0);
    /// assert_eq!(SkipList::<i64, String>::new(0).unwrap_err(), SkipListError::InvalidMaxLevel);
    /// assert_eq!(SkipList::<i64, String>::new(usize::MAX).unwrap().max_level(), 64);
    /// ```
    pub fn new(max_level: usize) -> Result<Self, SkipListError> {
        if max_level == 0 {
            return Err(SkipListError::InvalidMaxLevel);
        }
        let max_level = cmp::min(max_level, MAX_LEVEL_LIMIT);
        let lg = GeometricalLevelGenerator::new(max_level + 1, LEVEL_PROBABILITY);
        Ok(SkipList::build(max_level, lg))
    }
}

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    /// Create a new skiplist drawing node levels from `level_generator`.  Drawn levels above
    /// `max_level` are capped at `max_level`, which is itself clamped to `MAX_LEVEL_LIMIT`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::{GeometricalLevelGenerator, SkipList};
    ///
    /// let lg = GeometricalLevelGenerator::with_seed(5, 0.5, 42);
    /// let mut skiplist = SkipList::with_level_generator(4, lg).unwrap();
    /// skiplist.insert(1, "one");
    /// assert!(skiplist.level() >= 1 && skiplist.level() <= 5);
    /// ```
    pub fn with_level_generator(max_level: usize, level_generator: G) -> Result<Self, SkipListError> {
        if max_level == 0 {
            return Err(SkipListError::InvalidMaxLevel);
        }
        Ok(SkipList::build(cmp::min(max_level, MAX_LEVEL_LIMIT), level_generator))
    }

    /// Insert the key-value pair into the skiplist.
    ///
    /// If the key was already present, only its value is replaced and the old value is returned;
    /// the node keeps its level.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    ///
    /// assert_eq!(skiplist.insert(1, "Hello"), None);
    /// assert_eq!(skiplist.insert(2, "World"), None);
    /// assert_eq!(skiplist.insert(1, "Bye"), Some("Hello"));
    /// assert_eq!(skiplist.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut update = vec![Cursor::Head; self.head.len()];
        let prev = self.descend(&key, |lvl, cursor| update[lvl] = cursor);

        if let Some(idx) = self.successor(prev) {
            let node = self.nodes.get_mut(idx);
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
        }

        let level = cmp::min(self.level_generator.random(), self.max_level);
        if self.head.len() <= level {
            self.head.resize(level + 1, None);
            update.resize(level + 1, Cursor::Head);
            if let Some(ref logger) = self.logger {
                log!(logger, Debug, "skiplist grew to {} levels", level + 1);
            }
        }

        let idx = self.nodes.insert(SkipNode::new(key, value, level));
        for (lvl, &prev) in update.iter().enumerate().take(level + 1) {
            let next = self.next(prev, lvl);
            self.nodes.get_mut(idx).links[lvl] = next;
            self.set_next(prev, lvl, Some(idx));
        }
        None
    }
}

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
{
    /// Removes the key from the skiplist, returning its value if it was present.  Removing an
    /// absent key changes nothing.
    ///
    /// Levels left empty at the top are dropped, so `level()` always matches the tallest
    /// remaining node.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend((0..10).map(|x| (x, x)));
    /// assert_eq!(skiplist.remove(&4), Some(4));
    /// assert_eq!(skiplist.remove(&4), None);
    /// assert_eq!(skiplist.len(), 9);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut update = vec![Cursor::Head; self.head.len()];
        let prev = self.descend(key, |lvl, cursor| update[lvl] = cursor);

        let idx = self.successor(prev)?;
        if self.nodes.get(idx).key.borrow() != key {
            return None;
        }

        let node = self.nodes.remove(idx);
        for (lvl, &next) in node.links.iter().enumerate() {
            debug_assert_eq!(self.next(update[lvl], lvl), Some(idx));
            self.set_next(update[lvl], lvl, next);
        }

        let levels = self.head.len();
        while let Some(&None) = self.head.last() {
            self.head.pop();
        }
        if self.head.len() != levels {
            if let Some(ref logger) = self.logger {
                log!(logger, Debug, "skiplist trimmed to {} levels", self.head.len());
            }
        }
        Some(node.value)
    }

    /// Provides a reference to the value stored under the key, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// assert_eq!(skiplist.get(&0), None);
    /// skiplist.extend((0..10).map(|x| (x, x * 10)));
    /// assert_eq!(skiplist.get(&3), Some(&30));
    /// assert_eq!(skiplist.get(&10), None);
    /// ```
    #[inline]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).map(|idx| &self.nodes.get(idx).value)
    }

    /// Provides a mutable reference to the value stored under the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.insert("a", 1);
    /// if let Some(x) = skiplist.get_mut("a") {
    ///     *x = 100;
    /// }
    /// assert_eq!(skiplist.get("a"), Some(&100));
    /// ```
    #[inline]
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        match self.find(key) {
            Some(idx) => Some(&mut self.nodes.get_mut(idx).value),
            None => None,
        }
    }

    /// Returns `true` if the key is stored in the skiplist.
    #[inline]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).is_some()
    }

    /// Returns every pair whose key lies in `[start, end]`, in ascending key order.  Both bounds
    /// are inclusive; `start > end` gives an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend((0..10).map(|x| (x * 10, x)));
    /// let keys: Vec<_> = skiplist.range(&15, &40).iter().map(|p| *p.key()).collect();
    /// assert_eq!(keys, vec![20, 30, 40]);
    /// assert!(skiplist.range(&91, &100).is_empty());
    /// ```
    pub fn range<Q: ?Sized>(&self, start: &Q, end: &Q) -> Vec<KvPair<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut pairs = Vec::new();
        let mut link = self.successor(self.descend(start, |_, _| ()));
        while let Some(idx) = link {
            let node = self.nodes.get(idx);
            if node.key.borrow() > end {
                break;
            }
            pairs.push(KvPair {
                key: &node.key,
                value: &node.value,
            });
            link = node.links[0];
        }
        pairs
    }

    /// Returns the pair with the smallest key greater than or equal to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend(vec![(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(skiplist.ceil(&15).map(|p| p.into_tuple()), Some((&20, &'b')));
    /// assert_eq!(skiplist.ceil(&20).map(|p| p.into_tuple()), Some((&20, &'b')));
    /// assert!(skiplist.ceil(&31).is_none());
    /// ```
    pub fn ceil<Q: ?Sized>(&self, target: &Q) -> Option<KvPair<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.successor(self.descend(target, |_, _| ()))
            .map(|idx| self.pair(idx))
    }

    /// Returns the pair with the largest key less than or equal to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend(vec![(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(skiplist.floor(&15).map(|p| p.into_tuple()), Some((&10, &'a')));
    /// assert_eq!(skiplist.floor(&10).map(|p| p.into_tuple()), Some((&10, &'a')));
    /// assert!(skiplist.floor(&9).is_none());
    /// ```
    pub fn floor<Q: ?Sized>(&self, target: &Q) -> Option<KvPair<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let prev = self.descend(target, |_, _| ());
        if let Some(idx) = self.successor(prev) {
            if self.nodes.get(idx).key.borrow() == target {
                return Some(self.pair(idx));
            }
        }
        // the walk never left the head: every key is greater than the target
        match prev {
            Cursor::Head => None,
            Cursor::Node(idx) => Some(self.pair(idx)),
        }
    }
}

impl<K, V, G> SkipList<K, V, G> {
    /// Attaches a logger.  Level growth and trimming are reported at `Debug`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logger::{Level, Logger};
    /// use skiplist::SkipList;
    /// use std::sync::mpsc::channel;
    ///
    /// let (tx, rx) = channel();
    /// let mut skiplist: SkipList<u8, u8> = SkipList::new(4).unwrap();
    /// skiplist.set_logger(Logger::channel(Level::Verbose, tx));
    /// assert_eq!(rx.recv().unwrap(), b"skiplist logging attached: max level 4, 0 levels, 0 keys\n".to_vec());
    /// ```
    pub fn set_logger(&mut self, logger: Logger) {
        log!(
            logger,
            Verbose,
            "skiplist logging attached: max level {}, {} levels, {} keys",
            self.max_level,
            self.head.len(),
            self.len()
        );
        self.logger = Some(logger);
    }

    /// Clears the skiplist, removing all values.  The level generator keeps its state.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend((0..10).map(|x| (x, x)));
    /// skiplist.clear();
    /// assert!(skiplist.is_empty());
    /// assert_eq!(skiplist.level(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.clear();
    }

    /// Returns the number of elements in the skiplist.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the skiplist contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of levels currently in use, i.e. one more than the level reached by the
    /// tallest stored node, or zero when nothing is stored.
    #[inline]
    pub fn level(&self) -> usize {
        self.head.len()
    }

    /// The highest level a node may reach.  `level()` never exceeds `max_level() + 1`.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Provides the pair with the smallest key, or `None` if the skiplist is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// assert!(skiplist.first().is_none());
    /// skiplist.insert(2, "World");
    /// skiplist.insert(1, "Hello");
    /// assert_eq!(skiplist.first().map(|p| p.into_tuple()), Some((&1, &"Hello")));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<KvPair<'_, K, V>> {
        self.successor(Cursor::Head).map(|idx| self.pair(idx))
    }

    /// Provides the pair with the largest key, or `None` if the skiplist is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// assert!(skiplist.last().is_none());
    /// skiplist.insert(2, "World");
    /// skiplist.insert(1, "Hello");
    /// assert_eq!(skiplist.last().map(|p| p.into_tuple()), Some((&2, &"World")));
    /// ```
    pub fn last(&self) -> Option<KvPair<'_, K, V>> {
        let mut cursor = Cursor::Head;
        for lvl in (0..self.head.len()).rev() {
            while let Some(next) = self.next(cursor, lvl) {
                cursor = Cursor::Node(next);
            }
        }
        match cursor {
            Cursor::Head => None,
            Cursor::Node(idx) => Some(self.pair(idx)),
        }
    }

    /// Creates an iterator over the entries of the skiplist, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend((0..10).rev().map(|x| (x, x)));
    /// let keys: Vec<_> = skiplist.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, (0..10).collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            next: self.head.first().cloned().unwrap_or(None),
            remaining: self.len(),
        }
    }

    /// Creates an iterator over the keys reachable at level `lvl`, in ascending order.  Levels
    /// at or above `level()` are empty.
    ///
    /// Every level's keys are a subsequence of the keys of the level below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new(8).unwrap();
    /// skiplist.extend((0..100).map(|x| (x, ())));
    /// assert_eq!(skiplist.level_keys(0).count(), 100);
    /// assert!(skiplist.level_keys(1).count() <= 100);
    /// assert_eq!(skiplist.level_keys(skiplist.level()).count(), 0);
    /// ```
    pub fn level_keys(&self, lvl: usize) -> LevelKeys<'_, K, V> {
        LevelKeys {
            nodes: &self.nodes,
            lvl,
            next: self.head.get(lvl).cloned().unwrap_or(None),
        }
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<K, V, G> SkipList<K, V, G> {
    fn build(max_level: usize, level_generator: G) -> Self {
        SkipList {
            nodes: NodeArena::new(),
            head: Vec::new(),
            max_level,
            level_generator,
            logger: None,
        }
    }

    /// The link leaving `at` on level `lvl`.
    #[inline]
    fn next(&self, at: Cursor, lvl: usize) -> Link {
        match at {
            Cursor::Head => self.head[lvl],
            Cursor::Node(idx) => self.nodes.get(idx).links[lvl],
        }
    }

    #[inline]
    fn set_next(&mut self, at: Cursor, lvl: usize, link: Link) {
        match at {
            Cursor::Head => self.head[lvl] = link,
            Cursor::Node(idx) => self.nodes.get_mut(idx).links[lvl] = link,
        }
    }

    /// The node following `at` on the base level.
    #[inline]
    fn successor(&self, at: Cursor) -> Link {
        if self.head.is_empty() {
            None
        } else {
            self.next(at, 0)
        }
    }

    #[inline]
    fn pair(&self, idx: usize) -> KvPair<'_, K, V> {
        let node = self.nodes.get(idx);
        KvPair {
            key: &node.key,
            value: &node.value,
        }
    }

    /// Walks from the highest active level down to the base level, moving right while the next
    /// key is strictly less than `key`.  `visit` is given the last position reached on every
    /// level, and the position reached on the base level is returned: the node right before
    /// where `key` is or would be.
    fn descend<Q: ?Sized, F>(&self, key: &Q, mut visit: F) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
        F: FnMut(usize, Cursor),
    {
        let mut cursor = Cursor::Head;
        for lvl in (0..self.head.len()).rev() {
            while let Some(next) = self.next(cursor, lvl) {
                if self.nodes.get(next).key.borrow() < key {
                    cursor = Cursor::Node(next);
                } else {
                    break;
                }
            }
            visit(lvl, cursor);
        }
        cursor
    }

    /// Same walk as `descend`, stopping as soon as `key` shows up on any level.
    fn find<Q: ?Sized>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut cursor = Cursor::Head;
        for lvl in (0..self.head.len()).rev() {
            while let Some(next) = self.next(cursor, lvl) {
                match self.nodes.get(next).key.borrow().cmp(key) {
                    Ordering::Less => cursor = Cursor::Node(next),
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    /// Checks the integrity of the skiplist.
    #[cfg(test)]
    pub(crate) fn check(&self)
    where
        K: Ord,
    {
        assert!(self.head.len() <= self.max_level + 1);
        assert!(self.head.last().map_or(true, |l| l.is_some()));

        let mut below: Vec<&K> = Vec::new();
        for lvl in 0..self.head.len() {
            let mut keys: Vec<&K> = Vec::new();
            let mut link = self.head[lvl];
            while let Some(idx) = link {
                let node = self.nodes.get(idx);
                assert!(node.level() >= lvl);
                assert!(node.level() <= self.max_level);
                if let Some(prev) = keys.last() {
                    assert!(*prev < &node.key);
                }
                keys.push(&node.key);
                link = node.links[lvl];
            }

            if lvl == 0 {
                assert_eq!(keys.len(), self.len());
            } else {
                let mut lower = below.iter();
                for key in keys.iter() {
                    assert!(lower.any(|k| k == key), "level {} is not a subsequence", lvl);
                }
            }
            below = keys;
        }
        if self.head.is_empty() {
            assert!(self.is_empty());
        }
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<K: Ord, V> default::Default for SkipList<K, V> {
    fn default() -> SkipList<K, V> {
        let lg = GeometricalLevelGenerator::new(DEFAULT_MAX_LEVEL + 1, LEVEL_PROBABILITY);
        SkipList::build(DEFAULT_MAX_LEVEL, lg)
    }
}

impl<K, V, G> Extend<(K, V)> for SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    #[inline]
    fn extend<I: iter::IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (k, v) in iterable {
            self.insert(k, v);
        }
    }
}

impl<K, V> iter::FromIterator<(K, V)> for SkipList<K, V>
where
    K: Ord,
{
    #[inline]
    fn from_iter<I>(iter: I) -> SkipList<K, V>
    where
        I: iter::IntoIterator<Item = (K, V)>,
    {
        let mut skiplist = SkipList::default();
        skiplist.extend(iter);
        skiplist
    }
}

impl<'a, K, V, G> iter::IntoIterator for &'a SkipList<K, V, G> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, G> fmt::Debug for SkipList<K, V, G>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;

        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:?}, {:?})", k, v)?;
        }
        write!(f, "]")
    }
}

impl<K, V, G> fmt::Display for SkipList<K, V, G>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;

        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", k, v)?;
        }
        write!(f, "]")
    }
}

// ///////////////////////////////////////////////
// Extra structs
// ///////////////////////////////////////////////

/// Ascending iterator over the entries of a `SkipList`.
pub struct Iter<'a, K, V> {
    nodes: &'a NodeArena<K, V>,
    next: Link,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.nodes.get(self.next?);
        self.next = node.links[0];
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Iterator over the keys linked on one level of a `SkipList`.
pub struct LevelKeys<'a, K, V> {
    nodes: &'a NodeArena<K, V>,
    lvl: usize,
    next: Link,
}

impl<'a, K, V> Iterator for LevelKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.nodes.get(self.next?);
        self.next = node.links[self.lvl];
        Some(&node.key)
    }
}

// /////////////////////////////////////////////////////////////////////////////////////////////////
// Tests
// /////////////////////////////////////////////////////////////////////////////////////////////////

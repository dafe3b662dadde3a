//! A skiplist is a way of storing elements in such a way that elements can be efficiently
//! accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! This crate provides [`SkipList`], an ordered map supporting point lookups, insertion,
//! removal, inclusive range queries and nearest-key (`ceil`/`floor`) lookups.  Node heights are
//! drawn by a [`LevelGenerator`], which can be swapped out to make the structure reproducible.
//!
//! The keys must be totally ordered through `Ord`, and that ordering **must** be well-behaved:
//! consistent, anti-symmetric and transitive.  A misbehaving ordering leaves lookups returning
//! wrong answers, although it can never corrupt memory.

extern crate logger;
extern crate rand;
extern crate util;

mod error;
mod level_generator;
pub mod skiplist;
mod skipnode;

pub use crate::error::SkipListError;
pub use crate::level_generator::{GeometricalLevelGenerator, LevelGenerator};
pub use crate::skiplist::{Iter, KvPair, LevelKeys, SkipList, DEFAULT_MAX_LEVEL, MAX_LEVEL_LIMIT};

//! Core Sequence implementation over the slot arena.
//!
//! This module provides the main `Sequence` struct: a doubly linked list of
//! text values with positional access. Lookup walks the chain from the head,
//! so reads cost O(position); relinking around a located node is O(1).

use std::fmt;

use crate::error::{SequenceError, SequenceResult};

use super::model::{Node, NodeArena};

/// A doubly linked sequence of text values.
///
/// Nodes live in a slot arena and link to their neighbors by slot index, so
/// backward links never own anything and the chain cannot cycle. The
/// container tracks the head slot, the tail slot, and the element count.
///
/// Positional operations (`get`, `set`, `insert`, `erase`) address elements
/// by zero-based logical position in the current order, not by slot.
#[derive(Debug)]
pub struct Sequence {
    arena: NodeArena,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Sequence {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a sequence of `sz` nodes, each holding empty text.
    ///
    /// `sz == 0` yields an empty sequence.
    pub fn with_len(sz: usize) -> Self {
        let mut seq = Self::new();
        for _ in 0..sz {
            seq.push_back("");
        }
        seq
    }

    // =========================================================================
    // POSITIONAL ACCESS
    // =========================================================================

    /// Returns the value at `position`.
    ///
    /// Fails with [`SequenceError::IndexOutOfBounds`] when
    /// `position >= len()`. Cost is O(position).
    pub fn get(&self, position: usize) -> SequenceResult<&str> {
        let index = self.locate(position)?;
        Ok(self.arena.node(index).value.as_str())
    }

    /// Returns a mutable handle to the value at `position`.
    ///
    /// Same bounds contract as [`get`](Self::get).
    pub fn get_mut(&mut self, position: usize) -> SequenceResult<&mut String> {
        let index = self.locate(position)?;
        Ok(&mut self.arena.node_mut(index).value)
    }

    /// Replaces the value at `position`.
    ///
    /// Same bounds contract as [`get`](Self::get).
    pub fn set(&mut self, position: usize, value: impl Into<String>) -> SequenceResult<()> {
        let index = self.locate(position)?;
        self.arena.node_mut(index).value = value.into();
        Ok(())
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends `item` after the current tail. O(1), always succeeds.
    pub fn push_back(&mut self, item: impl Into<String>) {
        let index = self.arena.insert(Node::new(item.into()));
        match self.tail {
            Some(tail) => {
                self.arena.node_mut(tail).next = Some(index);
                self.arena.node_mut(index).prev = Some(tail);
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes the current tail and returns its value.
    ///
    /// Fails with [`SequenceError::EmptyContainer`] when the sequence is
    /// empty. O(1).
    pub fn pop_back(&mut self) -> SequenceResult<String> {
        let tail = self.tail.ok_or_else(SequenceError::empty_container)?;
        let node = self.arena.remove(tail);
        match node.prev {
            Some(prev) => {
                self.arena.node_mut(prev).next = None;
                self.tail = Some(prev);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Inserts `item` before the node currently at `position`.
    ///
    /// `position == len()` appends, exactly like [`push_back`](Self::push_back).
    /// Fails with [`SequenceError::IndexOutOfBounds`] when `position > len()`.
    /// O(position).
    pub fn insert(&mut self, position: usize, item: impl Into<String>) -> SequenceResult<()> {
        if position > self.len {
            return Err(SequenceError::index_out_of_bounds(position, self.len));
        }
        if position == self.len {
            self.push_back(item);
            return Ok(());
        }

        let at = self.locate(position)?;
        let prev = self.arena.node(at).prev;
        let index = self.arena.insert(Node {
            value: item.into(),
            prev,
            next: Some(at),
        });
        self.arena.node_mut(at).prev = Some(index);
        match prev {
            Some(p) => self.arena.node_mut(p).next = Some(index),
            None => self.head = Some(index),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `position`.
    ///
    /// Equivalent to [`erase_range(position, 1)`](Self::erase_range).
    pub fn erase(&mut self, position: usize) -> SequenceResult<()> {
        self.erase_range(position, 1)
    }

    /// Removes `count` contiguous elements starting at `position`.
    ///
    /// `count == 0` is a no-op for any `position`. Otherwise fails with
    /// [`SequenceError::IndexOutOfBounds`] when `position >= len()` or the
    /// window `position + count` overruns the end; the sequence is unchanged
    /// on failure. Single traversal, O(position + count).
    pub fn erase_range(&mut self, position: usize, count: usize) -> SequenceResult<()> {
        if count == 0 {
            return Ok(());
        }
        if position >= self.len {
            return Err(SequenceError::index_out_of_bounds(position, self.len));
        }
        if count > self.len - position {
            return Err(SequenceError::index_out_of_bounds(
                position.saturating_add(count),
                self.len,
            ));
        }

        let first = self.locate(position)?;
        let before = self.arena.node(first).prev;
        let mut cursor = Some(first);
        for _ in 0..count {
            let index = cursor.expect("erase window stays within the chain");
            let node = self.arena.remove(index);
            cursor = node.next;
        }
        let after = cursor;

        match before {
            Some(b) => self.arena.node_mut(b).next = after,
            None => self.head = after,
        }
        match after {
            Some(a) => self.arena.node_mut(a).prev = before,
            None => self.tail = before,
        }
        self.len -= count;
        debug_assert_eq!(self.arena.len(), self.len);
        Ok(())
    }

    /// Removes every element. The sequence stays usable afterwards.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // =========================================================================
    // READ-ONLY ACCESSORS
    // =========================================================================

    /// Returns the first value.
    ///
    /// Fails with [`SequenceError::EmptyContainer`] when empty.
    pub fn front(&self) -> SequenceResult<&str> {
        let head = self.head.ok_or_else(SequenceError::empty_container)?;
        Ok(self.arena.node(head).value.as_str())
    }

    /// Returns the last value.
    ///
    /// Fails with [`SequenceError::EmptyContainer`] when empty.
    pub fn back(&self) -> SequenceResult<&str> {
        let tail = self.tail.ok_or_else(SequenceError::empty_container)?;
        Ok(self.arena.node(tail).value.as_str())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // =========================================================================
    // MAINTENANCE
    // =========================================================================

    /// Relinks the chain so traversal order matches storage-slot order.
    ///
    /// Slot order matches insertion order until removals recycle slots, after
    /// which the two can diverge. Values stay in place; only links move.
    /// O(capacity).
    pub fn sort_by_slot(&mut self, ascending: bool) {
        let mut live: Vec<usize> = (0..self.arena.slot_count())
            .filter(|&index| self.arena.get(index).is_some())
            .collect();
        if !ascending {
            live.reverse();
        }

        self.head = live.first().copied();
        self.tail = live.last().copied();
        for (i, &index) in live.iter().enumerate() {
            let node = self.arena.node_mut(index);
            node.prev = if i > 0 { Some(live[i - 1]) } else { None };
            node.next = live.get(i + 1).copied();
        }
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    /// Walks the chain from the head to the slot holding `position`.
    fn locate(&self, position: usize) -> SequenceResult<usize> {
        if position >= self.len {
            return Err(SequenceError::index_out_of_bounds(position, self.len));
        }
        let mut current = self.head.expect("non-empty sequence has a head");
        for _ in 0..position {
            current = self
                .arena
                .node(current)
                .next
                .expect("chain ends before counted length");
        }
        Ok(current)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Sequence {
    /// Walks the source chain front-to-back, appending equal-valued nodes to
    /// a fresh sequence. The copy shares no storage with the source.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.extend_from(self);
        copy
    }

    /// Assignment form: clears the target, then appends the source's values.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from(source);
    }
}

impl Sequence {
    fn extend_from(&mut self, source: &Self) {
        let mut cursor = source.head;
        while let Some(index) = cursor {
            let node = source.arena.node(index);
            self.push_back(node.value.clone());
            cursor = node.next;
        }
    }
}

/// Logical equality: same length and equal values in order, independent of
/// slot layout.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let (mut a, mut b) = (self.head, other.head);
        while let (Some(x), Some(y)) = (a, b) {
            let (na, nb) = (self.arena.node(x), other.arena.node(y));
            if na.value != nb.value {
                return false;
            }
            a = na.next;
            b = nb.next;
        }
        a.is_none() && b.is_none()
    }
}

impl Eq for Sequence {}

/// Renders `<v1, v2, ..., vn>` with empty-valued elements silently skipped.
///
/// Skipping empties is the container's documented policy, not an accident:
/// an all-empty or truly empty sequence renders as `<>`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        let mut first = true;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.arena.node(index);
            if !node.value.is_empty() {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(&node.value)?;
                first = false;
            }
            cursor = node.next;
        }
        f.write_str(">")
    }
}

// =============================================================================
// TESTS
// =============================================================================

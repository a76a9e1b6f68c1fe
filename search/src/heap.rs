//! Fibonacci heap keyed by [`Cost`], with FIFO tie-breaking.
//!
//! The open set needs amortized O(1) insert and decrease-key, which
//! `std::collections::BinaryHeap` cannot provide, so the heap is built from
//! scratch: a pool of slots addressed by index, circular doubly-linked
//! root and child rings, lazy consolidation on extract-min, and cut /
//! cascading-cut with mark bits on decrease-key.
//!
//! Every entry carries the insertion sequence number it was created with;
//! keys compare as `(cost, seq)`, so equal-cost entries leave the heap in
//! insertion order. That makes extraction order — and therefore the whole
//! search — deterministic and reproducible.

use crate::error::SearchError;
use crate::node::Cost;

/// Handle to a live heap entry, returned by [`FibonacciHeap::insert`].
///
/// Valid until the entry is extracted. Re-inserting an item after
/// extraction yields a fresh handle; the old one must not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapHandle(usize);

/// One pool slot. Ring membership is encoded by `left`/`right`; a detached
/// slot points at itself. Slots are never reused: an extracted slot keeps
/// its storage but is marked dead via `live`.
#[derive(Debug)]
struct Slot<T> {
    item: T,
    key: Cost,
    seq: u64,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
    live: bool,
}

/// A Fibonacci heap over `Copy` payloads (the engine stores arena ids).
#[derive(Debug)]
pub struct FibonacciHeap<T> {
    slots: Vec<Slot<T>>,
    min: Option<usize>,
    len: usize,
    next_seq: u64,
}

impl<T: Copy> FibonacciHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            min: None,
            len: 0,
            next_seq: 0,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(T, Cost)> {
        self.min.map(|m| (self.slots[m].item, self.slots[m].key))
    }

    /// Drop all entries and reset the insertion sequence.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.min = None;
        self.len = 0;
        self.next_seq = 0;
    }

    /// Insert an item with the given key. Amortized O(1).
    pub fn insert(&mut self, item: T, key: Cost) -> HeapHandle {
        let idx = self.slots.len();
        self.slots.push(Slot {
            item,
            key,
            seq: self.next_seq,
            parent: None,
            child: None,
            left: idx,
            right: idx,
            degree: 0,
            marked: false,
            live: true,
        });
        self.next_seq += 1;
        self.root_insert(idx);
        self.len += 1;
        HeapHandle(idx)
    }

    /// Remove and return the minimum entry. Amortized O(log n).
    ///
    /// # Errors
    ///
    /// [`SearchError::EmptyQueue`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<(T, Cost), SearchError> {
        let z = self.min.ok_or(SearchError::EmptyQueue)?;

        // Promote z's children to the root ring.
        if let Some(first) = self.slots[z].child {
            let mut kids = Vec::with_capacity(self.slots[z].degree);
            let mut cur = first;
            loop {
                kids.push(cur);
                cur = self.slots[cur].right;
                if cur == first {
                    break;
                }
            }
            for k in kids {
                self.slots[k].parent = None;
                self.slots[k].marked = false;
                self.detach(k);
                self.root_insert(k);
            }
            self.slots[z].child = None;
            self.slots[z].degree = 0;
        }

        let z_right = self.slots[z].right;
        self.unlink(z);
        self.slots[z].live = false;
        self.len -= 1;

        if self.len == 0 {
            self.min = None;
        } else {
            // Any live root works as a starting point; consolidate
            // re-derives the true minimum.
            self.min = Some(z_right);
            self.consolidate();
        }

        Ok((self.slots[z].item, self.slots[z].key))
    }

    /// Lower the key of a live entry. Amortized O(1).
    ///
    /// The entry keeps its original insertion sequence, so its FIFO position
    /// among equal keys is preserved.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidKey`] if `new_key` is greater than the current
    /// key; [`SearchError::StaleHandle`] if the handle refers to an
    /// already-extracted entry. The heap is left unchanged either way.
    pub fn decrease_key(&mut self, handle: HeapHandle, new_key: Cost) -> Result<(), SearchError> {
        let x = handle.0;
        if !self.slots[x].live {
            return Err(SearchError::StaleHandle);
        }
        let current = self.slots[x].key;
        if new_key > current {
            return Err(SearchError::InvalidKey {
                current,
                requested: new_key,
            });
        }
        self.slots[x].key = new_key;

        if let Some(p) = self.slots[x].parent {
            if self.key_lt(x, p) {
                self.cut(x, p);
                self.cascading_cut(p);
            }
        }
        if let Some(m) = self.min {
            if self.key_lt(x, m) {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    /// Strict `(cost, seq)` order between two slots.
    fn key_lt(&self, a: usize, b: usize) -> bool {
        let (sa, sb) = (&self.slots[a], &self.slots[b]);
        (sa.key, sa.seq) < (sb.key, sb.seq)
    }

    /// Splice detached slot `a` into the ring holding `b`, after `b`.
    fn splice(&mut self, a: usize, b: usize) {
        let b_right = self.slots[b].right;
        self.slots[a].left = b;
        self.slots[a].right = b_right;
        self.slots[b].right = a;
        self.slots[b_right].left = a;
    }

    /// Remove `x` from its ring, leaving it detached (self-linked).
    fn unlink(&mut self, x: usize) {
        let l = self.slots[x].left;
        let r = self.slots[x].right;
        self.slots[l].right = r;
        self.slots[r].left = l;
        self.detach(x);
    }

    fn detach(&mut self, x: usize) {
        self.slots[x].left = x;
        self.slots[x].right = x;
    }

    /// Add a detached slot to the root ring, tracking the minimum.
    fn root_insert(&mut self, x: usize) {
        match self.min {
            None => {
                self.detach(x);
                self.min = Some(x);
            }
            Some(m) => {
                self.splice(x, m);
                if self.key_lt(x, m) {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Merge equal-degree roots until all root degrees are distinct, then
    /// rebuild the root ring and locate the minimum.
    fn consolidate(&mut self) {
        let Some(start) = self.min else { return };
        let mut roots = Vec::new();
        let mut cur = start;
        loop {
            roots.push(cur);
            cur = self.slots[cur].right;
            if cur == start {
                break;
            }
        }

        let mut by_degree: Vec<Option<usize>> = Vec::new();
        for root in roots {
            let mut x = root;
            loop {
                let d = self.slots[x].degree;
                if d >= by_degree.len() {
                    by_degree.resize(d + 1, None);
                }
                match by_degree[d].take() {
                    None => {
                        by_degree[d] = Some(x);
                        break;
                    }
                    Some(y) => {
                        let (winner, loser) = if self.key_lt(y, x) { (y, x) } else { (x, y) };
                        self.link(loser, winner);
                        x = winner;
                    }
                }
            }
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.root_insert(root);
        }
    }

    /// Make `y` a child of `x`. Both are roots collected by `consolidate`,
    /// so ring pointers can be rewritten freely.
    fn link(&mut self, y: usize, x: usize) {
        self.detach(y);
        self.slots[y].parent = Some(x);
        self.slots[y].marked = false;
        match self.slots[x].child {
            None => self.slots[x].child = Some(y),
            Some(c) => self.splice(y, c),
        }
        self.slots[x].degree += 1;
    }

    /// Move `x` from `p`'s child ring to the root ring.
    fn cut(&mut self, x: usize, p: usize) {
        if self.slots[p].child == Some(x) {
            let r = self.slots[x].right;
            self.slots[p].child = if r == x { None } else { Some(r) };
        }
        self.unlink(x);
        self.slots[p].degree -= 1;
        self.slots[x].parent = None;
        self.slots[x].marked = false;
        self.root_insert(x);
    }

    /// Walk up from `y`, cutting marked ancestors and marking the first
    /// unmarked one. Bounds the amortized cost of decrease-key.
    fn cascading_cut(&mut self, y: usize) {
        let mut y = y;
        while let Some(p) = self.slots[y].parent {
            if !self.slots[y].marked {
                self.slots[y].marked = true;
                break;
            }
            self.cut(y, p);
            y = p;
        }
    }
}

impl<T: Copy> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Arena-backed circular recency list
//!
//! Slots live in a `Vec` that grows up to the capacity and link to each
//! other by index. The list is a single cycle: `head` is the most recently
//! used slot and `head.prev` the least recently used one. Slots are never
//! freed; once the arena is full the LRU slot is rewritten in place.

use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

use ahash::RandomState;

/// Upper bound on slots reserved at construction; larger rings grow on insert
const PREALLOC_LIMIT: usize = 4096;

/// Slot in the circular list
struct Slot<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Single-threaded LRU core: hash index over an arena of linked slots
pub(crate) struct Ring<K, V> {
    index: HashMap<K, usize, RandomState>,
    slots: Vec<Slot<K, V>>,
    head: Option<usize>,
    capacity: usize,
}

impl<K, V> Ring<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty ring holding at most `capacity` slots
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity must be validated by the caller");

        let reserve = capacity.min(PREALLOC_LIMIT);
        Self {
            index: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            slots: Vec::with_capacity(reserve),
            head: None,
            capacity,
        }
    }

    /// Number of live slots
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the ring has no head
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Maximum number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if every slot is in use
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Slot currently holding `key`
    pub fn lookup(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Check if `key` is indexed
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Value stored in slot `idx`
    pub fn value(&self, idx: usize) -> &V {
        &self.slots[idx].value
    }

    /// Mutable value stored in slot `idx`
    pub fn value_mut(&mut self, idx: usize) -> &mut V {
        &mut self.slots[idx].value
    }

    /// Least recently used slot (the eviction candidate)
    pub fn lru(&self) -> Option<usize> {
        self.head.map(|head| self.slots[head].prev)
    }

    /// Move `idx` to the head of the list
    pub fn promote(&mut self, idx: usize) {
        let head = match self.head {
            Some(head) if head != idx => head,
            _ => return, // already most recent
        };

        self.unlink(idx);
        self.link_before(idx, head);
        self.head = Some(idx);
    }

    /// Append a new slot as the most recently used entry
    ///
    /// The caller guarantees the ring is not full and `key` is absent.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        debug_assert!(!self.is_full());
        debug_assert!(!self.contains(&key));

        let idx = self.slots.len();
        self.slots.push(Slot {
            key: key.clone(),
            value,
            prev: idx,
            next: idx,
        });

        if let Some(head) = self.head {
            self.link_before(idx, head);
        }

        self.head = Some(idx);
        self.index.insert(key, idx);
        idx
    }

    /// Reuse slot `idx` for a new entry and make it the head
    ///
    /// Returns the displaced key and value. The caller guarantees `key` is
    /// absent from the index.
    pub fn repurpose(&mut self, idx: usize, key: K, value: V) -> (K, V) {
        debug_assert!(!self.contains(&key));

        let slot = &mut self.slots[idx];
        let old_key = mem::replace(&mut slot.key, key.clone());
        let old_value = mem::replace(&mut slot.value, value);

        self.index.remove(&old_key);
        self.index.insert(key, idx);
        self.promote(idx);

        (old_key, old_value)
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            cur: self.head.unwrap_or(0),
            remaining: self.len(),
        }
    }

    fn unlink(&mut self, idx: usize) {
        let Slot { prev, next, .. } = self.slots[idx];
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    fn link_before(&mut self, idx: usize, at: usize) {
        let tail = self.slots[at].prev;
        self.slots[idx].prev = tail;
        self.slots[idx].next = at;
        self.slots[tail].next = idx;
        self.slots[at].prev = idx;
    }

    /// Walk the cycle both ways and check every structural invariant
    #[cfg(test)]
    pub fn assert_consistent(&self) {
        assert!(self.len() <= self.capacity);
        assert_eq!(self.len(), self.slots.len());

        for (key, &idx) in &self.index {
            assert!(self.slots[idx].key == *key, "index points at wrong slot");
        }

        let head = match self.head {
            Some(head) => head,
            None => {
                assert!(self.slots.is_empty());
                return;
            }
        };

        let mut seen = vec![false; self.slots.len()];
        let mut cur = head;
        for _ in 0..self.len() {
            assert!(!seen[cur], "cycle revisits slot {}", cur);
            seen[cur] = true;
            let next = self.slots[cur].next;
            assert_eq!(self.slots[next].prev, cur, "broken back link at {}", next);
            cur = next;
        }
        assert_eq!(cur, head, "forward walk did not return to head");

        let mut cur = head;
        for _ in 0..self.len() {
            cur = self.slots[cur].prev;
        }
        assert_eq!(cur, head, "backward walk did not return to head");
    }
}

/// Iterator over `(key, value)` pairs in recency order
pub(crate) struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    cur: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = &self.slots[self.cur];
        self.cur = slot.next;
        self.remaining -= 1;
        Some((&slot.key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

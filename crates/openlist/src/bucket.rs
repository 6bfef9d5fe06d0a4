//! The bucketed open list.

use crate::heap::MinHeap;
use crate::traits::Bucketed;

// ---------------------------------------------------------------------------
// QueueStats
// ---------------------------------------------------------------------------

/// Counters for a [`BucketQueue`]'s rare structural events.
///
/// Counters are cumulative for the lifetime of the queue and survive
/// [`clear`](BucketQueue::clear). Maintaining them costs one integer
/// increment on events that happen at most once per distinct minimum
/// distance visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Times a pending bucket was drained into the heap (lazy heapify).
    pub heapifies: u64,
    /// Times the sorted active bucket was flushed back into unsorted
    /// storage because a new, smaller minimum appeared.
    pub flushes: u64,
}

// ---------------------------------------------------------------------------
// BucketQueue
// ---------------------------------------------------------------------------

/// A priority queue over items with bounded integer distance keys.
///
/// Pending items are partitioned into one unsorted bucket per distance
/// value. Only the *active* bucket (the one holding the current minimum)
/// lives in sorted form, inside an embedded [`MinHeap`]. Pushing an item
/// above the minimum appends to its bucket in O(1); the cost of ordering a
/// bucket is paid at most once, when it becomes the minimum and the next
/// operation actually touches it.
///
/// The queue owns its items: dropping or [`clear`](Self::clear)ing it drops
/// everything still queued. It is single-threaded by design; concurrent
/// searches each use their own instance.
#[derive(Debug)]
pub struct BucketQueue<T> {
    /// One unsorted bucket per distance value.
    buckets: Vec<Vec<T>>,
    /// Sorted contents of the active bucket, `buckets[top]`.
    heap: MinHeap<T>,
    /// Lowest distance with queued items; `== buckets.len()` when empty.
    top: usize,
    /// `buckets[top]` still holds unsorted items that must be drained into
    /// the heap before the next pop, peek, or same-distance push.
    needs_sort: bool,
    /// Items living in buckets, i.e. everything outside the heap.
    bucket_len: usize,
    stats: QueueStats,
}

impl<T: Bucketed> BucketQueue<T> {
    /// Create an empty queue accepting distance keys in
    /// `[0, bucket_count)`.
    pub fn new(bucket_count: usize) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            heap: MinHeap::new(),
            top: bucket_count,
            needs_sort: false,
            bucket_len: 0,
            stats: QueueStats::default(),
        }
    }

    /// The number of distance buckets, fixed at construction.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of queued items. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.bucket_len + self.heap.len()
    }

    /// Whether the queue holds no items. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == self.buckets.len()
    }

    /// Structural-event counters, for tests and performance investigation.
    #[inline]
    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Insert an item under its [`distance`](Bucketed::distance) key.
    ///
    /// O(1) when the key is above the current minimum; O(log n) amortized
    /// otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `item.distance() >= bucket_count`: the key bound was
    /// miscalculated by the caller, and filing the item anyway would
    /// corrupt the ordering invariant.
    pub fn push(&mut self, item: T) {
        let d = item.distance();
        assert!(
            d < self.buckets.len(),
            "distance {d} out of range for {} buckets",
            self.buckets.len()
        );
        if d < self.top {
            // New global minimum. The active bucket, if any, goes back to
            // unsorted storage and the heap restarts with the one new item.
            // No item below `top` can already be queued, so its bucket is
            // free.
            debug_assert!(self.buckets[d].is_empty());
            if !self.heap.is_empty() {
                log::trace!(
                    "flushing bucket {} ({} items); new top {d}",
                    self.top,
                    self.heap.len()
                );
                self.bucket_len += self.heap.len();
                self.buckets[self.top].extend(self.heap.drain());
                self.stats.flushes += 1;
            }
            self.top = d;
            self.needs_sort = false;
            self.heap.push(item);
        } else if d > self.top {
            self.buckets[d].push(item);
            self.bucket_len += 1;
        } else {
            if self.needs_sort {
                self.resort();
            }
            self.heap.push(item);
        }
    }

    /// Remove and return the minimum item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty; check [`is_empty`](Self::is_empty)
    /// first.
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop from an empty open list");
        if self.needs_sort {
            self.resort();
        }
        let item = self.heap.pop();
        if self.heap.is_empty() {
            // Walk forward to the next non-empty bucket. It is only
            // marked; heapifying waits until an operation touches it.
            self.top += 1;
            while self.top < self.buckets.len() && self.buckets[self.top].is_empty() {
                self.top += 1;
            }
            self.needs_sort = self.top < self.buckets.len();
        }
        item
    }

    /// The minimum item, without removing it.
    ///
    /// Takes `&mut self` because a pending bucket may need to be heapified
    /// to know its minimum.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty; check [`is_empty`](Self::is_empty)
    /// first.
    pub fn peek(&mut self) -> &T {
        assert!(!self.is_empty(), "peek on an empty open list");
        if self.needs_sort {
            self.resort();
        }
        self.heap.peek()
    }

    /// Drop all queued items and reset to empty. Backing storage of every
    /// bucket and of the heap is retained, so a queue can be reused across
    /// search episodes without reallocating.
    pub fn clear(&mut self) {
        debug_assert_eq!(
            self.bucket_len,
            self.buckets.iter().map(Vec::len).sum::<usize>()
        );
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.heap.clear();
        self.top = self.buckets.len();
        self.needs_sort = false;
        self.bucket_len = 0;
        debug_assert_eq!(self.len(), 0);
    }

    /// Drain `buckets[top]` into the heap, resolving a pending resort.
    fn resort(&mut self) {
        let bucket = &mut self.buckets[self.top];
        log::trace!("heapifying bucket {} ({} items)", self.top, bucket.len());
        self.bucket_len -= bucket.len();
        self.heap.append(bucket);
        self.needs_sort = false;
        self.stats.heapifies += 1;
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "diagnostics"))]
impl<T: Bucketed> BucketQueue<T> {
    /// Brute-force membership scan. O(n); diagnostics only, never part of
    /// the search hot path. Items with an out-of-range key are reported
    /// absent.
    pub fn contains(&self, item: &T) -> bool {
        let d = item.distance();
        if d >= self.buckets.len() {
            return false;
        }
        if d == self.top && !self.needs_sort {
            return self.heap.iter().any(|queued| queued == item);
        }
        self.buckets[d].iter().any(|queued| queued == item)
    }

    /// Recount every bucket plus the heap. O(bucket_count + n); must
    /// always agree with [`len`](Self::len).
    pub fn recount(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum::<usize>() + self.heap.len()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for BucketQueue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Queue contents are transient search state; only the
        // configuration round-trips.
        self.buckets.len().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Bucketed> serde::Deserialize<'de> for BucketQueue<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bucket_count = usize::deserialize(deserializer)?;
        Ok(BucketQueue::new(bucket_count))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Item(usize);

    impl Bucketed for Item {
        fn distance(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn config_round_trip() {
        let mut q: BucketQueue<Item> = BucketQueue::new(64);
        q.push(Item(12));
        q.push(Item(3));

        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "64");

        // Contents are transient; only the configuration survives.
        let back: BucketQueue<Item> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bucket_count(), 64);
        assert!(back.is_empty());
        assert_eq!(back.len(), 0);
    }
}

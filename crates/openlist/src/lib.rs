//! Distance-bucketed open list for bounded-key grid searches.
//!
//! Shortest-path searches on a grid (Dijkstra, A*) pop frontier nodes in
//! non-decreasing distance order, and on a grid of bounded extent every
//! distance key falls in a small known range `[0, bucket_count)`. This
//! crate provides an open list specialised for that shape:
//!
//! - [`MinHeap`] - a plain array-backed binary min-heap.
//! - [`BucketQueue`] - one unsorted bucket per distance value, with only
//!   the current minimum bucket kept ordered inside an embedded
//!   [`MinHeap`].
//!
//! Search frontiers cluster around the current frontier distance, so most
//! pushes land in a non-minimal bucket and cost O(1); the cost of ordering
//! a bucket is deferred until it becomes the minimum and is actually
//! touched again (lazy heapify). Total ordering work stays O(n log n) over
//! a whole search.
//!
//! | Operation | [`BucketQueue`] cost |
//! |---|---|
//! | [`push`](BucketQueue::push) above the minimum | O(1) |
//! | [`push`](BucketQueue::push) at / below the minimum | O(log n) amortized |
//! | [`pop`](BucketQueue::pop) | O(log n) amortized |
//! | [`len`](BucketQueue::len), [`is_empty`](BucketQueue::is_empty) | O(1) |
//!
//! Items implement [`Bucketed`]: a total order plus a bounded integer
//! distance key. Both structures are single-threaded by design; a search
//! episode owns its queue exclusively and may [`clear`](BucketQueue::clear)
//! it for reuse without releasing backing storage.

mod bucket;
mod heap;
mod traits;

pub use bucket::{BucketQueue, QueueStats};
pub use heap::MinHeap;
pub use traits::Bucketed;

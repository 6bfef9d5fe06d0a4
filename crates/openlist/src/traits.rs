/// Interface for items stored in a [`BucketQueue`](crate::BucketQueue).
///
/// `Ord` is the full priority order: smaller compares first and is popped
/// first. [`distance`](Self::distance) is the coarse integer key that picks
/// the item's bucket; it must stay constant while the item is queued (an
/// item whose key changes must be removed and re-pushed by the caller) and
/// must lie in `[0, bucket_count)` of the queue it is pushed into.
///
/// Only items of equal distance are ever compared against each other inside
/// the queue, so the order needs to be meaningful within a bucket; searches
/// typically order distance-major with whatever tie-break they want.
pub trait Bucketed: Ord {
    /// The item's distance key.
    fn distance(&self) -> usize;
}

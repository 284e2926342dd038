/// Slots allocated when a list is created.
pub const INITIAL_CAPACITY: usize = 10;

/// Capacity after growing from `current`.
///
/// Grows by a factor of 1.5, truncating, with a floor of `current + 1`:
/// 1.5x of a small capacity can truncate back to the same value
/// (capacity 1 gives 1), and growth must always strictly increase.
/// Saturates instead of overflowing; a saturated request that cannot be
/// allocated fails downstream as `AllocFailed`.
#[inline]
pub(crate) fn next_capacity(current: usize) -> usize {
    current.saturating_add((current / 2).max(1))
}

//! Index tracking for a single focus-managed container.

use std::fmt;

/// Reports how many focusable items a container currently holds.
///
/// Queried fresh on every move, since items can mount and unmount between
/// key presses. Any `Fn() -> usize` closure is an `ItemCount`.
pub trait ItemCount {
    /// Return the current number of focusable items.
    fn item_count(&self) -> usize;
}

impl<F> ItemCount for F
where
    F: Fn() -> usize,
{
    fn item_count(&self) -> usize {
        self()
    }
}

/// Moves real input focus to the item at a given index.
///
/// Any `FnMut(usize)` closure is a `FocusMover`.
pub trait FocusMover {
    /// Transfer focus to the item at `index`.
    fn move_focus(&mut self, index: usize);
}

impl<F> FocusMover for F
where
    F: FnMut(usize),
{
    fn move_focus(&mut self, index: usize) {
        self(index)
    }
}

/// Tracks which item in an ordered collection has keyboard focus.
///
/// The tracker owns nothing but a cursor. The size of the collection comes
/// from an [`ItemCount`] provider, and every successful move is reported to a
/// [`FocusMover`] so the caller can move focus for real.
///
/// Moves clamp at both ends and never wrap. When the provider reports zero
/// items, every move is a no-op and the mover is not called. A move that
/// lands on the index already focused still calls the mover, re-asserting
/// focus on the boundary item.
///
/// # Example
///
/// ```
/// use roam_core::FocusIndexTracker;
///
/// let mut moved = Vec::new();
/// let mut tracker = FocusIndexTracker::new(|| 5usize, |i: usize| moved.push(i));
///
/// tracker.sync_focused_index(4);
/// tracker.move_next(); // already last, re-asserts 4
/// tracker.move_previous();
/// assert_eq!(tracker.focused_index(), 3);
///
/// drop(tracker);
/// assert_eq!(moved, vec![4, 3]);
/// ```
pub struct FocusIndexTracker<C, M> {
    focused: usize,
    count: C,
    mover: M,
}

impl<C, M> FocusIndexTracker<C, M>
where
    C: ItemCount,
    M: FocusMover,
{
    /// Create a tracker focused on index 0.
    pub fn new(count: C, mover: M) -> Self {
        Self {
            focused: 0,
            count,
            mover,
        }
    }

    /// Return the currently tracked index.
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Query the item-count provider once.
    pub fn item_count(&self) -> usize {
        self.count.item_count()
    }

    /// Overwrite the tracked index without moving focus.
    ///
    /// Used when focus already moved through another path (a mouse click,
    /// say) and the tracker only needs to catch up. The index is stored as
    /// given, with no bounds check.
    pub fn sync_focused_index(&mut self, index: usize) {
        tracing::trace!(from = self.focused, to = index, "syncing focused index");
        self.focused = index;
    }

    /// Move focus one item back, stopping at the first item.
    pub fn move_previous(&mut self) {
        self.move_to(|current, count| current.saturating_sub(1).min(count - 1));
    }

    /// Move focus one item forward, stopping at the last item.
    pub fn move_next(&mut self) {
        self.move_to(|current, count| current.saturating_add(1).min(count - 1));
    }

    /// Move focus to the first item.
    pub fn move_first(&mut self) {
        self.move_to(|_, _| 0);
    }

    /// Move focus to the last item.
    pub fn move_last(&mut self) {
        self.move_to(|_, count| count - 1);
    }

    /// Move focus to the tracked item again, pulling a stale index back into
    /// range first.
    pub fn refocus(&mut self) {
        self.move_to(|current, count| current.min(count - 1));
    }

    // `target` is only called with a non-zero count.
    fn move_to(&mut self, target: impl FnOnce(usize, usize) -> usize) {
        let count = self.count.item_count();
        if count == 0 {
            tracing::trace!(index = self.focused, "no focusable items, move skipped");
            return;
        }

        let to = target(self.focused, count);
        tracing::trace!(from = self.focused, to, count, "moving focus");
        self.focused = to;
        self.mover.move_focus(to);
    }
}

impl<C, M> fmt::Debug for FocusIndexTracker<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusIndexTracker")
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

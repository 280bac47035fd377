use crate::tracker::FocusMover;
use std::cell::RefCell;
use std::rc::Rc;

/// A [`FocusMover`] that records every index it is asked to focus.
///
/// Clones share the same log, so a test can hand one clone to a tracker and
/// keep another for assertions.
///
/// # Example
///
/// ```
/// use roam_core::testing::FocusRecorder;
/// use roam_core::FocusIndexTracker;
///
/// let recorder = FocusRecorder::new();
/// let mut tracker = FocusIndexTracker::new(|| 3usize, recorder.clone());
///
/// tracker.move_last();
/// tracker.move_next();
/// assert_eq!(recorder.calls(), vec![2, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FocusRecorder {
    calls: Rc<RefCell<Vec<usize>>>,
}

impl FocusRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every index passed to the mover, oldest first.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }

    /// The most recent index, if the mover was called at all.
    pub fn last_call(&self) -> Option<usize> {
        self.calls.borrow().last().copied()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn was_called(&self) -> bool {
        !self.calls.borrow().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl FocusMover for FocusRecorder {
    fn move_focus(&mut self, index: usize) {
        self.calls.borrow_mut().push(index);
    }
}

//! Presentation state: the current frame, the history ring, and the scrub
//! selection, owned in one place and mutated only by discrete events
//! (frame installed, pointer moved, pointer left).

use crate::history::FrameHistory;

/// Single owner of everything the redraw path needs.
///
/// Generic over the frame type so the install/scrub semantics stay
/// independent of the toolkit; the UI instantiates it with its
/// texture-backed frame.
#[derive(Debug)]
pub struct ViewerState<F> {
    current: Option<F>,
    history: FrameHistory<F>,
    scrub: Option<usize>,
}

impl<F> ViewerState<F> {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            current: None,
            history: FrameHistory::new(history_capacity),
            scrub: None,
        }
    }

    /// Make `frame` current. The previously current frame, if any, moves
    /// into the history ring; the current frame itself is never in history
    /// until superseded.
    pub fn install(&mut self, frame: F) {
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        self.current = Some(frame);
    }

    /// The frame the redraw path should present: the scrub selection when it
    /// resolves to a held history slot, otherwise the current frame.
    pub fn shown(&self) -> Option<&F> {
        match self.scrub {
            Some(index) => self.history.get(index).or(self.current.as_ref()),
            None => self.current.as_ref(),
        }
    }

    /// Update the scrub selection, returning whether it actually changed
    /// (callers redraw only on change). A selection is dropped outright
    /// while the history ring is empty.
    pub fn set_scrub(&mut self, selection: Option<usize>) -> bool {
        let selection = if self.history.is_empty() {
            None
        } else {
            selection
        };
        if selection == self.scrub {
            return false;
        }
        self.scrub = selection;
        true
    }

    pub fn scrub(&self) -> Option<usize> {
        self.scrub
    }

    pub fn current(&self) -> Option<&F> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &FrameHistory<F> {
        &self.history
    }
}

impl<F> Default for ViewerState<F> {
    fn default() -> Self {
        Self::new(0)
    }
}

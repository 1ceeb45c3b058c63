//! Result types for the search and replace operations.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use eventsheet_model::Event;

/// Location of a matched (or modified) event.
///
/// Holds a weak back-reference: the result never keeps the event alive, and
/// resolving it after the event was removed from its list yields `None`
/// rather than a stale read.
#[derive(Debug, Clone, Default)]
pub struct EventsSearchResult {
    event: Weak<RefCell<Event>>,
    position_in_list: usize,
}

impl EventsSearchResult {
    /// Result pointing at the event stored at `position_in_list` of its
    /// owning list at the time of the match.
    pub fn new(event: Weak<RefCell<Event>>, position_in_list: usize) -> Self {
        Self {
            event,
            position_in_list,
        }
    }

    /// The matched event, or `None` once it has been dropped.
    pub fn event(&self) -> Option<Rc<RefCell<Event>>> {
        self.event.upgrade()
    }

    /// Position the event had in its owning list when the result was built.
    pub fn position_in_list(&self) -> usize {
        self.position_in_list
    }
}

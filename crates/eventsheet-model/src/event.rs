//! Events and event lists.
//!
//! Events form the top layer of the tree: an event exposes one or more
//! parallel condition and action vectors (distinct branches of the same
//! event), free-form searchable strings for UI display, directly-held
//! expression parameters, and optionally sub-events.
//!
//! [`EventsList`] stores events behind `Rc<RefCell<_>>` so search results
//! can keep weak back-references that fail closed once an event is removed.
//! The whole model is single-threaded by design, hence `Rc`, not `Arc`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::instruction::{Instruction, Parameter};
use crate::metadata::ParameterMetadata;

/// One node of the event tree.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Event kind identifier.
    pub event_type: String,
    /// Parallel condition vectors exposed by this event.
    pub conditions: Vec<Vec<Instruction>>,
    /// Parallel action vectors exposed by this event.
    pub actions: Vec<Vec<Instruction>>,
    /// Free-form strings used for UI display, independent of structured
    /// parameters. Written back through
    /// [`replace_all_searchable_strings`](Event::replace_all_searchable_strings).
    pub searchable_strings: Vec<String>,
    /// Expression parameters held by the event itself, outside any
    /// instruction, with their metadata.
    pub parameters: Vec<(Parameter, ParameterMetadata)>,
    /// Whether this event kind supports sub-events at all.
    pub can_have_sub_events: bool,
    /// Sub-events; only traversed when `can_have_sub_events` is set.
    pub sub_events: EventsList,
}

impl Event {
    /// Standard event of the given kind, supporting sub-events.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            can_have_sub_events: true,
            ..Self::default()
        }
    }

    /// Same event with a condition vector appended.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Vec<Instruction>) -> Self {
        self.conditions.push(conditions);
        self
    }

    /// Same event with an action vector appended.
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<Instruction>) -> Self {
        self.actions.push(actions);
        self
    }

    /// Replace the whole searchable-strings set.
    ///
    /// A no-op returning `false` when the replacement set's shape does not
    /// correspond to the current one (count mismatch). Otherwise writes the
    /// strings and reports whether any of them actually changed.
    pub fn replace_all_searchable_strings(&mut self, new_strings: Vec<String>) -> bool {
        if new_strings.len() != self.searchable_strings.len() {
            return false;
        }

        let mut changed = false;
        for (current, new_string) in self.searchable_strings.iter_mut().zip(new_strings) {
            if *current != new_string {
                *current = new_string;
                changed = true;
            }
        }
        changed
    }
}

/// Ordered list of events.
///
/// Cloning is shallow: the clone shares the same underlying events.
#[derive(Debug, Clone, Default)]
pub struct EventsList {
    events: Vec<Rc<RefCell<Event>>>,
}

impl EventsList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, returning its shared handle.
    pub fn push(&mut self, event: Event) -> Rc<RefCell<Event>> {
        let event = Rc::new(RefCell::new(event));
        self.events.push(Rc::clone(&event));
        event
    }

    /// Number of events at this level.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list holds no event.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Shared handle of the event at `index`.
    pub fn get(&self, index: usize) -> Option<&Rc<RefCell<Event>>> {
        self.events.get(index)
    }

    /// Remove and return the event at `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of range, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Rc<RefCell<Event>> {
        self.events.remove(index)
    }

    /// Iterate over the event handles at this level.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<RefCell<Event>>> {
        self.events.iter()
    }
}

impl FromIterator<Event> for EventsList {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut list = Self::new();
        for event in iter {
            list.push(event);
        }
        list
    }
}

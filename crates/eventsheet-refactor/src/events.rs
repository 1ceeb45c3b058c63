//! The four operation families over the event tree.
//!
//! Each operation walks the events depth-first, applies the matching
//! instruction-level operation to every condition and action vector an
//! event exposes, handles the event-owned extras (expression parameters for
//! rename, searchable strings for replace/search), and recurses into
//! sub-events when the event kind supports them.

use std::rc::Rc;

use eventsheet_model::{Event, EventsList, ObjectsContainer, Platform};

use crate::instructions::{
    remove_object_in_actions, remove_object_in_conditions, rename_object_in_actions,
    rename_object_in_conditions, rename_object_in_event_parameter,
    replace_string_in_instructions, search_string_in_actions, search_string_in_conditions,
};
use crate::strings::{
    contains, normalize_search_query, replace_all, replace_all_case_insensitive,
};
use crate::types::EventsSearchResult;

/// Rename every reference to `old_name` into `new_name`, in every
/// condition, action and event-owned expression parameter of the tree.
///
/// Object-reference parameters are compared for exact text equality;
/// expression parameters are rewritten through the AST so an unrelated
/// literal containing `old_name` as a substring is never altered.
pub fn rename_object_in_events(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    events: &EventsList,
    old_name: &str,
    new_name: &str,
) {
    log::debug!(
        "renaming object '{}' to '{}' in {} event(s)",
        old_name,
        new_name,
        events.len()
    );
    for event in events.iter() {
        let mut guard = event.borrow_mut();
        let event = &mut *guard;

        for conditions in &mut event.conditions {
            rename_object_in_conditions(platform, globals, objects, conditions, old_name, new_name);
        }
        for actions in &mut event.actions {
            rename_object_in_actions(platform, globals, objects, actions, old_name, new_name);
        }
        for (parameter, metadata) in &mut event.parameters {
            rename_object_in_event_parameter(
                platform, globals, objects, parameter, metadata, old_name, new_name,
            );
        }

        if event.can_have_sub_events {
            rename_object_in_events(
                platform,
                globals,
                objects,
                &event.sub_events,
                old_name,
                new_name,
            );
        }
    }
}

/// Remove every instruction referencing the object `name`, everywhere in
/// the tree. Removed instructions take their sub-instructions with them.
///
/// Event-owned parameters are never mutated by this operation; usage
/// inside them can be queried through
/// [`event_parameter_references_object`](crate::event_parameter_references_object).
pub fn remove_object_in_events(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    events: &EventsList,
    name: &str,
) {
    log::debug!("removing object '{}' from {} event(s)", name, events.len());
    for event in events.iter() {
        let mut guard = event.borrow_mut();
        let event = &mut *guard;

        for conditions in &mut event.conditions {
            remove_object_in_conditions(platform, globals, objects, conditions, name);
        }
        for actions in &mut event.actions {
            remove_object_in_actions(platform, globals, objects, actions, name);
        }

        if event.can_have_sub_events {
            remove_object_in_events(platform, globals, objects, &event.sub_events, name);
        }
    }
}

/// Replace a substring in every parameter (and optionally the searchable
/// strings) of the tree, treating all parameter text as opaque. Because no
/// expression is ever parsed or type-checked, this operation takes no
/// platform or object scopes.
///
/// Returns one result per modified event (at most one entry per event per
/// level), with sub-event results appended in pre-order.
#[expect(clippy::fn_params_excessive_bools, reason = "caller-facing participation toggles")]
pub fn replace_string_in_events(
    events: &EventsList,
    to_replace: &str,
    new_string: &str,
    match_case: bool,
    in_conditions: bool,
    in_actions: bool,
    in_event_strings: bool,
) -> Vec<EventsSearchResult> {
    let mut modified_events = Vec::new();
    if to_replace.is_empty() {
        return modified_events;
    }

    for (position, event_handle) in events.iter().enumerate() {
        let mut event_modified = false;
        let mut guard = event_handle.borrow_mut();
        let event = &mut *guard;

        if in_conditions {
            for conditions in &mut event.conditions {
                let changed = replace_string_in_instructions(
                    conditions, to_replace, new_string, match_case,
                );
                if changed && !event_modified {
                    modified_events
                        .push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
                    event_modified = true;
                }
            }
        }

        if in_actions {
            for actions in &mut event.actions {
                let changed =
                    replace_string_in_instructions(actions, to_replace, new_string, match_case);
                if changed && !event_modified {
                    modified_events
                        .push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
                    event_modified = true;
                }
            }
        }

        if in_event_strings {
            let changed =
                replace_string_in_searchable_strings(event, to_replace, new_string, match_case);
            if changed && !event_modified {
                modified_events
                    .push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
            }
        }

        if event.can_have_sub_events {
            modified_events.extend(replace_string_in_events(
                &event.sub_events,
                to_replace,
                new_string,
                match_case,
                in_conditions,
                in_actions,
                in_event_strings,
            ));
        }
    }

    modified_events
}

/// Replace a substring in the event's searchable strings, writing the
/// result back through the shape-gated setter.
fn replace_string_in_searchable_strings(
    event: &mut Event,
    to_replace: &str,
    new_string: &str,
    match_case: bool,
) -> bool {
    let new_strings: Vec<String> = event
        .searchable_strings
        .iter()
        .map(|text| {
            if match_case {
                replace_all(text, to_replace, new_string)
            } else {
                replace_all_case_insensitive(text, to_replace, new_string)
            }
        })
        .collect();

    event.replace_all_searchable_strings(new_strings)
}

/// Search the tree for a substring.
///
/// The conditions, actions and event-string checks share one per-event
/// "already added" gate, so an event contributes at most one result per
/// call; sub-event results are independent entries appended after their
/// parent (pre-order). With `in_event_sentences` set, the query is
/// normalized once up front and instructions whose parameters did not match
/// are retested against their normalized rendered sentence.
#[expect(clippy::fn_params_excessive_bools, reason = "caller-facing participation toggles")]
pub fn search_in_events(
    platform: &dyn Platform,
    events: &EventsList,
    search: &str,
    match_case: bool,
    in_conditions: bool,
    in_actions: bool,
    in_event_strings: bool,
    in_event_sentences: bool,
) -> Vec<EventsSearchResult> {
    let normalized;
    let search = if in_event_sentences {
        normalized = normalize_search_query(search);
        normalized.as_str()
    } else {
        search
    };

    search_in_events_inner(
        platform,
        events,
        search,
        match_case,
        in_conditions,
        in_actions,
        in_event_strings,
        in_event_sentences,
    )
}

#[expect(clippy::fn_params_excessive_bools, reason = "caller-facing participation toggles")]
fn search_in_events_inner(
    platform: &dyn Platform,
    events: &EventsList,
    search: &str,
    match_case: bool,
    in_conditions: bool,
    in_actions: bool,
    in_event_strings: bool,
    in_event_sentences: bool,
) -> Vec<EventsSearchResult> {
    let mut results = Vec::new();

    for (position, event_handle) in events.iter().enumerate() {
        let mut event_added = false;
        let event = event_handle.borrow();

        if in_conditions {
            for conditions in &event.conditions {
                if !event_added
                    && search_string_in_conditions(
                        platform,
                        conditions,
                        search,
                        match_case,
                        in_event_sentences,
                    )
                {
                    results.push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
                    event_added = true;
                }
            }
        }

        if in_actions {
            for actions in &event.actions {
                if !event_added
                    && search_string_in_actions(
                        platform,
                        actions,
                        search,
                        match_case,
                        in_event_sentences,
                    )
                {
                    results.push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
                    event_added = true;
                }
            }
        }

        if in_event_strings
            && !event_added
            && search_string_in_event_strings(&event, search, match_case)
        {
            results.push(EventsSearchResult::new(Rc::downgrade(event_handle), position));
        }

        if event.can_have_sub_events {
            results.extend(search_in_events_inner(
                platform,
                &event.sub_events,
                search,
                match_case,
                in_conditions,
                in_actions,
                in_event_strings,
                in_event_sentences,
            ));
        }
    }

    results
}

/// Whether one of the event's searchable strings contains the search text.
fn search_string_in_event_strings(event: &Event, search: &str, match_case: bool) -> bool {
    event
        .searchable_strings
        .iter()
        .any(|text| contains(text, search, match_case))
}

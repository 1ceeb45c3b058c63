//! eventsheet-refactor - Refactoring and Search for Event Sheets
//!
//! Four operation families over an event-sheet tree, built on the
//! `eventsheet-model` data layer:
//!
//! - **Rename**: rewrite every reference to an object, AST-aware inside
//!   expression parameters
//! - **Remove**: delete every instruction referencing an object, cascading
//!   to its sub-instructions
//! - **Replace**: opaque-text substring replacement over all parameters and
//!   event strings
//! - **Search**: substring search, optionally against rendered
//!   natural-language instruction sentences
//!
//! All operations are total over well-formed trees: expressions the
//! platform's validator rejects (or that fail to parse) are silently
//! skipped, never reported.
//!
//! # Architecture
//!
//! ```text
//! eventsheet-refactor/src/
//! ├── lib.rs              # Re-exports (this file)
//! ├── types.rs            # EventsSearchResult (weak back-reference)
//! ├── strings.rs          # Substring primitives, search normalization
//! ├── object_visitors.rs  # Expression-level rename / usage detection
//! ├── instructions.rs     # Instruction-list walkers for all four families
//! └── events.rs           # Event-tree entry points
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use eventsheet_refactor::rename_object_in_events;
//!
//! rename_object_in_events(&platform, &globals, &objects, &events, "Player", "Hero");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod events;
mod instructions;
mod object_visitors;
mod strings;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use events::{
    remove_object_in_events, rename_object_in_events, replace_string_in_events, search_in_events,
};
pub use instructions::{
    InstructionScope, event_parameter_references_object, remove_object_in_actions,
    remove_object_in_conditions,
    remove_object_in_instructions, rename_object_in_actions, rename_object_in_conditions,
    rename_object_in_event_parameter, rename_object_in_instructions,
    replace_string_in_instructions, search_string_in_actions, search_string_in_conditions,
    search_string_in_instructions,
};
pub use object_visitors::{expression_references_object, rename_object_in_expression};
pub use types::EventsSearchResult;

// Substring utilities, re-exported for callers implementing their own
// search surfaces.
pub use strings::{
    SEARCH_IGNORED_CHARACTERS, contains, find_case_insensitive, normalize_search_query,
    normalize_sentence, replace_all, replace_all_case_insensitive,
};

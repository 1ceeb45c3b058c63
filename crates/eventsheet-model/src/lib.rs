//! eventsheet-model - Event-Sheet Data Model
//!
//! The data layer of the event-sheet refactoring engine: events and their
//! instruction lists, opaque text parameters, the expression AST with its
//! generic visitor framework, instruction metadata, and the `Platform` seam
//! through which all external expression services are consumed.
//!
//! ## Architecture
//!
//! ```text
//! eventsheet-model/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # ExpressionError (thiserror)
//! ├── expression.rs   # ExpressionNode, ExpressionNodeVisitor, walk_expression
//! ├── instruction.rs  # Instruction, Parameter
//! ├── event.rs        # Event, EventsList (Rc/RefCell storage)
//! ├── metadata.rs     # ParameterKind, metadata types, classify_parameter
//! └── platform.rs     # Platform trait, ObjectsContainer
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod event;
mod expression;
mod instruction;
mod metadata;
mod platform;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::ExpressionError;
pub use event::{Event, EventsList};
pub use expression::{ExpressionNode, ExpressionNodeVisitor, walk_expression};
pub use instruction::{Instruction, Parameter};
pub use metadata::{
    InstructionMetadata, ParameterKind, ParameterMetadata, classify_parameter, is_object_type,
};
pub use platform::{ObjectsContainer, Platform};

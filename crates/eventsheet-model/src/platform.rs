//! The platform seam: metadata registries and expression services.
//!
//! The refactoring engine never parses, prints, validates or type-checks
//! expressions itself, and never owns the instruction metadata. All of that
//! is supplied by an implementation of [`Platform`], consumed as
//! `&dyn Platform`.

use std::collections::BTreeSet;

use crate::error::ExpressionError;
use crate::expression::ExpressionNode;
use crate::instruction::Instruction;
use crate::metadata::InstructionMetadata;

/// A named set of project-defined objects.
///
/// Operations receive two of these (a global and a local scope); the core
/// only hands them through to the validator and type finder.
#[derive(Debug, Clone, Default)]
pub struct ObjectsContainer {
    objects: BTreeSet<String>,
}

impl ObjectsContainer {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container holding the given object names.
    pub fn with_objects<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            objects: names.into_iter().map(str::to_string).collect(),
        }
    }

    /// Register an object name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.objects.insert(name.into());
    }

    /// Whether an object of that name exists in this scope.
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains(name)
    }
}

/// External capabilities consumed by the refactoring operations.
///
/// Implementations must be deterministic and side-effect-free: the engine
/// may call any of these any number of times during one traversal.
pub trait Platform {
    /// Metadata for a condition type, or `None` when unknown.
    fn condition_metadata(&self, instruction_type: &str) -> Option<&InstructionMetadata>;

    /// Metadata for an action type, or `None` when unknown.
    fn action_metadata(&self, instruction_type: &str) -> Option<&InstructionMetadata>;

    /// Parse parameter text into an expression tree.
    fn parse_expression(&self, source: &str) -> Result<ExpressionNode, ExpressionError>;

    /// Serialize an expression tree back to canonical text.
    fn print_expression(&self, node: &ExpressionNode) -> String;

    /// Whether the expression, interpreted under `root_type`, type-checks
    /// with zero errors in the given scopes.
    fn expression_has_no_errors(
        &self,
        globals: &ObjectsContainer,
        objects: &ObjectsContainer,
        root_type: &str,
        node: &ExpressionNode,
    ) -> bool;

    /// Static type inferred for a node in the given scopes, as a type name
    /// (for example `"object"`, `"number"`, `"string"`).
    fn expression_type(
        &self,
        globals: &ObjectsContainer,
        objects: &ObjectsContainer,
        root_type: &str,
        node: &ExpressionNode,
    ) -> String;

    /// Render an instruction to its full natural-language sentence.
    fn instruction_sentence(
        &self,
        instruction: &Instruction,
        metadata: &InstructionMetadata,
    ) -> String;
}

//! Instruction and parameter metadata, and the parameter classifier.

use serde::{Deserialize, Serialize};

/// What an instruction parameter denotes, as declared by metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    /// The parameter text names a project-defined object.
    ObjectReference,
    /// The parameter text is a serialized number expression.
    NumberExpression,
    /// The parameter text is a serialized string expression.
    StringExpression,
    /// Opaque text; no expression or object semantics.
    #[default]
    Other,
}

impl ParameterKind {
    /// Root type under which an expression parameter of this kind is
    /// validated and traversed, or `None` for non-expression kinds.
    pub fn expression_root_type(self) -> Option<&'static str> {
        match self {
            Self::NumberExpression => Some("number"),
            Self::StringExpression => Some("string"),
            Self::ObjectReference | Self::Other => None,
        }
    }
}

/// Whether an inferred expression type denotes an object-reference kind.
pub fn is_object_type(type_name: &str) -> bool {
    matches!(type_name, "object" | "objectPtr" | "objectList")
}

/// Metadata for one instruction parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// Declared parameter kind.
    pub kind: ParameterKind,
}

impl ParameterMetadata {
    /// Metadata of the given kind.
    pub fn new(kind: ParameterKind) -> Self {
        Self { kind }
    }
}

/// Metadata for one instruction type: its ordered parameter descriptors and
/// the sentence template used by sentence formatters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionMetadata {
    /// Ordered parameter descriptors.
    pub parameters: Vec<ParameterMetadata>,
    /// Natural-language sentence template; `{0}`, `{1}`, ... are replaced
    /// with parameter texts by the platform's sentence formatter.
    pub sentence: String,
}

impl InstructionMetadata {
    /// Metadata with the given parameter kinds and an empty sentence.
    pub fn new(kinds: impl IntoIterator<Item = ParameterKind>) -> Self {
        Self {
            parameters: kinds.into_iter().map(ParameterMetadata::new).collect(),
            sentence: String::new(),
        }
    }

    /// Same metadata with a sentence template attached.
    #[must_use]
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = sentence.into();
        self
    }
}

/// Classify one instruction parameter from registered metadata.
///
/// Pure and deterministic. Unknown instruction types (`None` metadata) and
/// out-of-range indices classify as [`ParameterKind::Other`], which every
/// operation treats as opaque text.
pub fn classify_parameter(metadata: Option<&InstructionMetadata>, index: usize) -> ParameterKind {
    metadata
        .and_then(|metadata| metadata.parameters.get(index))
        .map_or(ParameterKind::Other, |parameter| parameter.kind)
}

//! Instructions (conditions and actions) and their parameters.

use serde::{Deserialize, Serialize};

/// One instruction parameter: an opaque text value.
///
/// Depending on its metadata the text may be a literal, an object name, or
/// serialized expression source. Conversion to and from an AST always goes
/// through the [`Platform`](crate::Platform) seam.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw parameter text.
    pub value: String,
}

impl Parameter {
    /// Parameter holding the given text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single condition or action call.
///
/// Instructions form a tree: an instruction may own a nested list of
/// sub-instructions of the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Type identifier, resolved against the platform metadata registries.
    pub instruction_type: String,
    /// Ordered parameter list.
    pub parameters: Vec<Parameter>,
    /// Nested sub-instructions, possibly empty.
    pub sub_instructions: Vec<Instruction>,
}

impl Instruction {
    /// Instruction of the given type with the given parameter texts.
    pub fn new<'a>(
        instruction_type: impl Into<String>,
        parameters: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            instruction_type: instruction_type.into(),
            parameters: parameters.into_iter().map(Parameter::new).collect(),
            sub_instructions: Vec::new(),
        }
    }

    /// Same instruction with the given sub-instructions attached.
    #[must_use]
    pub fn with_sub_instructions(mut self, sub_instructions: Vec<Instruction>) -> Self {
        self.sub_instructions = sub_instructions;
        self
    }
}

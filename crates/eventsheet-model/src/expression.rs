//! Expression AST and the generic visitor framework.
//!
//! A parameter whose metadata declares it an expression can be parsed (through
//! the [`Platform`](crate::Platform) seam) into an [`ExpressionNode`] tree.
//! The tree is a plain variant enum with exclusive ownership of children:
//! no sharing, no cycles, traversal depth bounded by authored content.
//!
//! [`walk_expression`] is the single recursive walker; behavior is injected
//! through [`ExpressionNodeVisitor`] so mutating and read-only passes share
//! one traversal skeleton.

use serde::{Deserialize, Serialize};

/// A node of a parsed expression.
///
/// `Text`, `Number` and `Empty` are leaves. Every composite variant owns its
/// children exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionNode {
    /// Binary operator applied to two sub-expressions.
    Operator {
        /// Operator character (`+`, `-`, `*`, `/`).
        op: char,
        /// Left-hand side.
        left: Box<ExpressionNode>,
        /// Right-hand side.
        right: Box<ExpressionNode>,
    },
    /// Unary operator applied to a factor.
    UnaryOperator {
        /// Operator character (`-`, `+`, `!`).
        op: char,
        /// Operand.
        factor: Box<ExpressionNode>,
    },
    /// Parenthesized sub-expression.
    SubExpression {
        /// Inner expression.
        expression: Box<ExpressionNode>,
    },
    /// Variable reference, optionally followed by an accessor chain.
    Variable {
        /// Variable name.
        name: String,
        /// Optional child accessor.
        child: Option<Box<ExpressionNode>>,
    },
    /// Named child access on a variable (`.child`).
    VariableAccessor {
        /// Accessed child name.
        name: String,
        /// Optional child accessor.
        child: Option<Box<ExpressionNode>>,
    },
    /// Bracket access on a variable (`["index expression"]`).
    VariableBracketAccessor {
        /// Expression computing the index.
        expression: Box<ExpressionNode>,
        /// Optional child accessor.
        child: Option<Box<ExpressionNode>>,
    },
    /// Bare identifier; may denote an object depending on inferred type.
    Identifier {
        /// Identifier text.
        name: String,
    },
    /// Partially written object function (`Object.Function` without a call).
    ObjectFunctionName {
        /// Object the function is qualified with.
        object_name: String,
        /// Function (or behavior) name.
        function_name: String,
    },
    /// Function call, optionally qualified by an object.
    FunctionCall {
        /// Object qualifier; empty for free functions.
        object_name: String,
        /// Called function name.
        function_name: String,
        /// Ordered argument expressions.
        parameters: Vec<ExpressionNode>,
    },
    /// String literal.
    Text(String),
    /// Number literal, kept as written.
    Number(String),
    /// Empty node (hole in a partially written expression).
    Empty,
}

impl ExpressionNode {
    /// Bare identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Number literal node.
    pub fn number(value: impl Into<String>) -> Self {
        Self::Number(value.into())
    }

    /// String literal node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Function call node.
    pub fn function_call(
        object_name: impl Into<String>,
        function_name: impl Into<String>,
        parameters: Vec<ExpressionNode>,
    ) -> Self {
        Self::FunctionCall {
            object_name: object_name.into(),
            function_name: function_name.into(),
            parameters,
        }
    }

    /// Binary operator node.
    pub fn operator(op: char, left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Per-node hooks injected into [`walk_expression`].
///
/// Only the node kinds that can carry an object reference have hooks; the
/// walker handles all structural recursion itself.
pub trait ExpressionNodeVisitor {
    /// Called for every `Identifier` node. The whole node is passed so the
    /// visitor can run type inference on it before deciding to act.
    fn visit_identifier(&mut self, node: &mut ExpressionNode) {
        let _ = node;
    }

    /// Called with the object qualifier of `ObjectFunctionName` and
    /// `FunctionCall` nodes (possibly empty for free function calls).
    fn visit_object_name(&mut self, object_name: &mut String) {
        let _ = object_name;
    }
}

/// Depth-first walk of an expression tree.
///
/// Composite nodes recurse into every owned child unconditionally; in
/// particular a `FunctionCall` still walks all of its arguments after its
/// own qualifier was visited, so references nested inside call arguments
/// are reached.
pub fn walk_expression<V: ExpressionNodeVisitor>(node: &mut ExpressionNode, visitor: &mut V) {
    match node {
        ExpressionNode::Operator { left, right, .. } => {
            walk_expression(left, visitor);
            walk_expression(right, visitor);
        }
        ExpressionNode::UnaryOperator { factor, .. } => walk_expression(factor, visitor),
        ExpressionNode::SubExpression { expression } => walk_expression(expression, visitor),
        ExpressionNode::Variable { child, .. } | ExpressionNode::VariableAccessor { child, .. } => {
            if let Some(child) = child {
                walk_expression(child, visitor);
            }
        }
        ExpressionNode::VariableBracketAccessor { expression, child } => {
            walk_expression(expression, visitor);
            if let Some(child) = child {
                walk_expression(child, visitor);
            }
        }
        ExpressionNode::Identifier { .. } => visitor.visit_identifier(node),
        ExpressionNode::ObjectFunctionName { object_name, .. } => {
            visitor.visit_object_name(object_name);
        }
        ExpressionNode::FunctionCall {
            object_name,
            parameters,
            ..
        } => {
            visitor.visit_object_name(object_name);
            for parameter in parameters {
                walk_expression(parameter, visitor);
            }
        }
        ExpressionNode::Text(_) | ExpressionNode::Number(_) | ExpressionNode::Empty => {}
    }
}

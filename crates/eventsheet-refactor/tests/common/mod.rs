//! Shared test fixture: a stub platform with a small expression grammar,
//! metadata registries, and event/instruction builders.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use eventsheet_model::{
    Event, EventsList, ExpressionError, ExpressionNode, Instruction, InstructionMetadata,
    ObjectsContainer, ParameterKind, Platform,
};

/// Platform stub backed by registered metadata and a toy expression grammar
/// (numbers, string literals, identifiers, `Object.Function(args)` calls,
/// `+ - * /` operators, parentheses).
#[derive(Default)]
pub struct StubPlatform {
    conditions: HashMap<String, InstructionMetadata>,
    actions: HashMap<String, InstructionMetadata>,
    /// Canonical source texts the validator rejects.
    invalid_expressions: HashSet<String>,
}

impl StubPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(
        mut self,
        instruction_type: &str,
        kinds: impl IntoIterator<Item = ParameterKind>,
    ) -> Self {
        self.actions
            .insert(instruction_type.to_string(), InstructionMetadata::new(kinds));
        self
    }

    pub fn with_condition(
        mut self,
        instruction_type: &str,
        kinds: impl IntoIterator<Item = ParameterKind>,
    ) -> Self {
        self.conditions
            .insert(instruction_type.to_string(), InstructionMetadata::new(kinds));
        self
    }

    pub fn with_action_sentence(mut self, instruction_type: &str, sentence: &str) -> Self {
        if let Some(metadata) = self.actions.get_mut(instruction_type) {
            metadata.sentence = sentence.to_string();
        }
        self
    }

    pub fn with_condition_sentence(mut self, instruction_type: &str, sentence: &str) -> Self {
        if let Some(metadata) = self.conditions.get_mut(instruction_type) {
            metadata.sentence = sentence.to_string();
        }
        self
    }

    /// Make the validator reject the expression whose canonical printed
    /// form equals `source`.
    pub fn with_invalid_expression(mut self, source: &str) -> Self {
        self.invalid_expressions.insert(source.to_string());
        self
    }
}

impl Platform for StubPlatform {
    fn condition_metadata(&self, instruction_type: &str) -> Option<&InstructionMetadata> {
        self.conditions.get(instruction_type)
    }

    fn action_metadata(&self, instruction_type: &str) -> Option<&InstructionMetadata> {
        self.actions.get(instruction_type)
    }

    fn parse_expression(&self, source: &str) -> Result<ExpressionNode, ExpressionError> {
        Parser::new(source).parse()
    }

    fn print_expression(&self, node: &ExpressionNode) -> String {
        print_node(node)
    }

    fn expression_has_no_errors(
        &self,
        _globals: &ObjectsContainer,
        _objects: &ObjectsContainer,
        _root_type: &str,
        node: &ExpressionNode,
    ) -> bool {
        !self.invalid_expressions.contains(&print_node(node))
    }

    fn expression_type(
        &self,
        globals: &ObjectsContainer,
        objects: &ObjectsContainer,
        root_type: &str,
        node: &ExpressionNode,
    ) -> String {
        if let ExpressionNode::Identifier { name } = node
            && (globals.has_object(name) || objects.has_object(name))
        {
            return "object".to_string();
        }
        root_type.to_string()
    }

    fn instruction_sentence(
        &self,
        instruction: &Instruction,
        metadata: &InstructionMetadata,
    ) -> String {
        let mut sentence = metadata.sentence.clone();
        for (index, parameter) in instruction.parameters.iter().enumerate() {
            sentence = sentence.replace(&format!("{{{index}}}"), &parameter.value);
        }
        sentence
    }
}

// ---------------------------------------------------------------------------
// Toy expression parser / printer
// ---------------------------------------------------------------------------

struct Parser<'a> {
    chars: Vec<char>,
    position: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            source,
        }
    }

    fn parse(mut self) -> Result<ExpressionNode, ExpressionError> {
        self.skip_spaces();
        if self.at_end() {
            return Ok(ExpressionNode::Empty);
        }
        let node = self.expression()?;
        self.skip_spaces();
        if self.at_end() {
            Ok(node)
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }

    fn expression(&mut self) -> Result<ExpressionNode, ExpressionError> {
        let mut node = self.term()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(op @ ('+' | '-')) => {
                    self.position += 1;
                    let right = self.term()?;
                    node = ExpressionNode::operator(op, node, right);
                }
                _ => return Ok(node),
            }
        }
    }

    fn term(&mut self) -> Result<ExpressionNode, ExpressionError> {
        let mut node = self.factor()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(op @ ('*' | '/')) => {
                    self.position += 1;
                    let right = self.factor()?;
                    node = ExpressionNode::operator(op, node, right);
                }
                _ => return Ok(node),
            }
        }
    }

    fn factor(&mut self) -> Result<ExpressionNode, ExpressionError> {
        self.skip_spaces();
        match self.peek() {
            Some('-') => {
                self.position += 1;
                let factor = self.factor()?;
                Ok(ExpressionNode::UnaryOperator {
                    op: '-',
                    factor: Box::new(factor),
                })
            }
            Some('(') => {
                self.position += 1;
                let inner = self.expression()?;
                self.expect(')')?;
                Ok(ExpressionNode::SubExpression {
                    expression: Box::new(inner),
                })
            }
            Some('"') => self.string_literal(),
            Some(c) if c.is_ascii_digit() => Ok(self.number()),
            Some(c) if c.is_alphabetic() || c == '_' => self.identifier_or_call(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn string_literal(&mut self) -> Result<ExpressionNode, ExpressionError> {
        self.position += 1; // opening quote
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.position += 1;
                    return Ok(ExpressionNode::Text(text));
                }
                Some(c) => {
                    text.push(c);
                    self.position += 1;
                }
                None => return Err(self.error("unterminated string literal")),
            }
        }
    }

    fn number(&mut self) -> ExpressionNode {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                digits.push(c);
                self.position += 1;
            } else {
                break;
            }
        }
        ExpressionNode::Number(digits)
    }

    fn identifier_or_call(&mut self) -> Result<ExpressionNode, ExpressionError> {
        let first = self.identifier_text();

        if self.peek() == Some('.') {
            self.position += 1;
            let second = self.identifier_text();
            if second.is_empty() {
                return Err(self.error("expected a function name after '.'"));
            }
            if self.peek() == Some('(') {
                let parameters = self.arguments()?;
                return Ok(ExpressionNode::function_call(first, second, parameters));
            }
            return Ok(ExpressionNode::ObjectFunctionName {
                object_name: first,
                function_name: second,
            });
        }

        if self.peek() == Some('(') {
            let parameters = self.arguments()?;
            return Ok(ExpressionNode::function_call("", first, parameters));
        }

        Ok(ExpressionNode::identifier(first))
    }

    fn identifier_text(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                text.push(c);
                self.position += 1;
            } else {
                break;
            }
        }
        text
    }

    fn arguments(&mut self) -> Result<Vec<ExpressionNode>, ExpressionError> {
        self.position += 1; // opening parenthesis
        let mut parameters = Vec::new();
        self.skip_spaces();
        if self.peek() == Some(')') {
            self.position += 1;
            return Ok(parameters);
        }
        loop {
            parameters.push(self.expression()?);
            self.skip_spaces();
            match self.peek() {
                Some(',') => self.position += 1,
                Some(')') => {
                    self.position += 1;
                    return Ok(parameters);
                }
                _ => return Err(self.error("expected ',' or ')' in argument list")),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ExpressionError> {
        self.skip_spaces();
        if self.peek() == Some(expected) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.error("unexpected character"))
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn error(&self, message: &str) -> ExpressionError {
        let offset = self
            .source
            .char_indices()
            .nth(self.position)
            .map_or(self.source.len(), |(offset, _)| offset);
        ExpressionError::Syntax {
            offset,
            message: message.to_string(),
        }
    }
}

fn print_node(node: &ExpressionNode) -> String {
    match node {
        ExpressionNode::Operator { op, left, right } => {
            format!("{} {} {}", print_node(left), op, print_node(right))
        }
        ExpressionNode::UnaryOperator { op, factor } => format!("{}{}", op, print_node(factor)),
        ExpressionNode::SubExpression { expression } => format!("({})", print_node(expression)),
        ExpressionNode::Variable { name, child } | ExpressionNode::VariableAccessor { name, child } => {
            let child = child.as_deref().map(print_node).unwrap_or_default();
            format!("{name}{child}")
        }
        ExpressionNode::VariableBracketAccessor { expression, child } => {
            let child = child.as_deref().map(print_node).unwrap_or_default();
            format!("[{}]{child}", print_node(expression))
        }
        ExpressionNode::Identifier { name } => name.clone(),
        ExpressionNode::ObjectFunctionName {
            object_name,
            function_name,
        } => format!("{object_name}.{function_name}"),
        ExpressionNode::FunctionCall {
            object_name,
            function_name,
            parameters,
        } => {
            let parameters = parameters
                .iter()
                .map(print_node)
                .collect::<Vec<_>>()
                .join(", ");
            if object_name.is_empty() {
                format!("{function_name}({parameters})")
            } else {
                format!("{object_name}.{function_name}({parameters})")
            }
        }
        ExpressionNode::Text(text) => format!("\"{text}\""),
        ExpressionNode::Number(number) => number.clone(),
        ExpressionNode::Empty => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tree builders
// ---------------------------------------------------------------------------

/// Standard event with one condition vector and one action vector.
pub fn standard_event(conditions: Vec<Instruction>, actions: Vec<Instruction>) -> Event {
    Event::new("standard")
        .with_conditions(conditions)
        .with_actions(actions)
}

/// Events list holding the given events.
pub fn events_list(events: impl IntoIterator<Item = Event>) -> EventsList {
    events.into_iter().collect()
}

/// Scopes with the given object names registered locally.
pub fn scopes<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> (ObjectsContainer, ObjectsContainer) {
    (ObjectsContainer::new(), ObjectsContainer::with_objects(names))
}

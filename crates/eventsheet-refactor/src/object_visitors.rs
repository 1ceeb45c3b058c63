//! Expression-level object reference rewriting and detection.
//!
//! Both passes share the generic walker from `eventsheet-model`; only the
//! leaf behavior differs (mutate vs. set a flag). Both refuse to examine an
//! expression the validator rejects: invalid expressions are left untouched
//! and never report a match (fail-open).

use eventsheet_model::{
    ExpressionNode, ExpressionNodeVisitor, ObjectsContainer, Platform, is_object_type,
    walk_expression,
};

/// Rename every reference to `old_name` inside the expression.
///
/// Identifier nodes are renamed only when their statically inferred type
/// denotes an object kind; object qualifiers on `ObjectFunctionName` and
/// `FunctionCall` nodes are compared directly. Returns whether at least one
/// rename occurred. A no-op returning `false` when the expression does not
/// type-check under `root_type`.
pub fn rename_object_in_expression(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    root_type: &str,
    node: &mut ExpressionNode,
    old_name: &str,
    new_name: &str,
) -> bool {
    if !platform.expression_has_no_errors(globals, objects, root_type, node) {
        return false;
    }

    let mut renamer = ObjectRenamer {
        platform,
        globals,
        objects,
        root_type,
        old_name,
        new_name,
        renamed: false,
    };
    walk_expression(node, &mut renamer);
    renamer.renamed
}

/// Whether the expression references the object `name`.
///
/// Read-only twin of [`rename_object_in_expression`], with the same
/// validation precondition: an invalid expression is treated as not
/// referencing the object.
pub fn expression_references_object(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    root_type: &str,
    node: &mut ExpressionNode,
    name: &str,
) -> bool {
    if !platform.expression_has_no_errors(globals, objects, root_type, node) {
        return false;
    }

    let mut finder = ObjectFinder {
        platform,
        globals,
        objects,
        root_type,
        name,
        found: false,
    };
    walk_expression(node, &mut finder);
    finder.found
}

struct ObjectRenamer<'a> {
    platform: &'a dyn Platform,
    globals: &'a ObjectsContainer,
    objects: &'a ObjectsContainer,
    root_type: &'a str,
    old_name: &'a str,
    new_name: &'a str,
    renamed: bool,
}

impl ExpressionNodeVisitor for ObjectRenamer<'_> {
    fn visit_identifier(&mut self, node: &mut ExpressionNode) {
        let inferred =
            self.platform
                .expression_type(self.globals, self.objects, self.root_type, node);
        if !is_object_type(&inferred) {
            return;
        }
        if let ExpressionNode::Identifier { name } = node
            && name == self.old_name
        {
            *name = self.new_name.to_string();
            self.renamed = true;
        }
    }

    fn visit_object_name(&mut self, object_name: &mut String) {
        if object_name == self.old_name {
            *object_name = self.new_name.to_string();
            self.renamed = true;
        }
    }
}

struct ObjectFinder<'a> {
    platform: &'a dyn Platform,
    globals: &'a ObjectsContainer,
    objects: &'a ObjectsContainer,
    root_type: &'a str,
    name: &'a str,
    found: bool,
}

impl ExpressionNodeVisitor for ObjectFinder<'_> {
    fn visit_identifier(&mut self, node: &mut ExpressionNode) {
        if self.found {
            return;
        }
        let inferred =
            self.platform
                .expression_type(self.globals, self.objects, self.root_type, node);
        if !is_object_type(&inferred) {
            return;
        }
        if let ExpressionNode::Identifier { name } = node
            && name == self.name
        {
            self.found = true;
        }
    }

    fn visit_object_name(&mut self, object_name: &mut String) {
        if object_name == self.name {
            self.found = true;
        }
    }
}

//! Depth-first operations over instruction lists.
//!
//! All four operation families share the same two-level recursion shape
//! (instructions, then sub-instructions). Conditions and actions only differ
//! in which metadata registry resolves their types, so each operation is
//! implemented once against [`InstructionScope`] and exposed through thin
//! per-scope wrappers.

use eventsheet_model::{
    Instruction, InstructionMetadata, ObjectsContainer, Parameter, ParameterKind,
    ParameterMetadata, Platform, classify_parameter,
};

use crate::object_visitors::{expression_references_object, rename_object_in_expression};
use crate::strings::{contains, normalize_sentence, replace_all, replace_all_case_insensitive};

/// Which instruction list an operation walks. Conditions and actions
/// resolve their metadata through different registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionScope {
    /// Condition instructions.
    Condition,
    /// Action instructions.
    Action,
}

fn instruction_metadata<'p>(
    platform: &'p dyn Platform,
    scope: InstructionScope,
    instruction_type: &str,
) -> Option<&'p InstructionMetadata> {
    match scope {
        InstructionScope::Condition => platform.condition_metadata(instruction_type),
        InstructionScope::Action => platform.action_metadata(instruction_type),
    }
}

// ---------------------------------------------------------------------------
// Rename
// ---------------------------------------------------------------------------

/// Rename an object in a list of actions. See [`rename_object_in_instructions`].
pub fn rename_object_in_actions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    actions: &mut Vec<Instruction>,
    old_name: &str,
    new_name: &str,
) -> bool {
    rename_object_in_instructions(
        platform,
        globals,
        objects,
        InstructionScope::Action,
        actions,
        old_name,
        new_name,
    )
}

/// Rename an object in a list of conditions. See [`rename_object_in_instructions`].
pub fn rename_object_in_conditions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    conditions: &mut Vec<Instruction>,
    old_name: &str,
    new_name: &str,
) -> bool {
    rename_object_in_instructions(
        platform,
        globals,
        objects,
        InstructionScope::Condition,
        conditions,
        old_name,
        new_name,
    )
}

/// Rename every reference to `old_name` in the instruction list.
///
/// Object-reference parameters equal to `old_name` are replaced with
/// `new_name`; expression parameters are parsed, rewritten through the
/// expression renamer under their root type, and printed back when a rename
/// occurred. Sub-instructions are always visited. Returns the OR of all
/// changes at this level and below.
pub fn rename_object_in_instructions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    scope: InstructionScope,
    instructions: &mut Vec<Instruction>,
    old_name: &str,
    new_name: &str,
) -> bool {
    let mut modified = false;

    for instruction in instructions.iter_mut() {
        let metadata = instruction_metadata(platform, scope, &instruction.instruction_type);

        for (index, parameter) in instruction.parameters.iter_mut().enumerate() {
            let kind = classify_parameter(metadata, index);
            modified |= rename_object_in_parameter(
                platform, globals, objects, parameter, kind, old_name, new_name,
            );
        }

        if !instruction.sub_instructions.is_empty() {
            modified |= rename_object_in_instructions(
                platform,
                globals,
                objects,
                scope,
                &mut instruction.sub_instructions,
                old_name,
                new_name,
            );
        }
    }

    modified
}

/// Rename an object in a single event-owned parameter, driven by its
/// metadata rather than an instruction registry.
pub fn rename_object_in_event_parameter(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    parameter: &mut Parameter,
    metadata: &ParameterMetadata,
    old_name: &str,
    new_name: &str,
) -> bool {
    rename_object_in_parameter(
        platform,
        globals,
        objects,
        parameter,
        metadata.kind,
        old_name,
        new_name,
    )
}

fn rename_object_in_parameter(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    parameter: &mut Parameter,
    kind: ParameterKind,
    old_name: &str,
    new_name: &str,
) -> bool {
    match kind {
        ParameterKind::ObjectReference => {
            if parameter.value == old_name {
                parameter.value = new_name.to_string();
                return true;
            }
            false
        }
        ParameterKind::NumberExpression | ParameterKind::StringExpression => {
            // Root type is present for expression kinds by construction.
            let Some(root_type) = kind.expression_root_type() else {
                return false;
            };
            let Ok(mut node) = platform.parse_expression(&parameter.value) else {
                return false;
            };
            if rename_object_in_expression(
                platform, globals, objects, root_type, &mut node, old_name, new_name,
            ) {
                parameter.value = platform.print_expression(&node);
                return true;
            }
            false
        }
        ParameterKind::Other => false,
    }
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// Remove actions referencing an object. See [`remove_object_in_instructions`].
pub fn remove_object_in_actions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    actions: &mut Vec<Instruction>,
    name: &str,
) -> bool {
    remove_object_in_instructions(
        platform,
        globals,
        objects,
        InstructionScope::Action,
        actions,
        name,
    )
}

/// Remove conditions referencing an object. See [`remove_object_in_instructions`].
pub fn remove_object_in_conditions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    conditions: &mut Vec<Instruction>,
    name: &str,
) -> bool {
    remove_object_in_instructions(
        platform,
        globals,
        objects,
        InstructionScope::Condition,
        conditions,
        name,
    )
}

/// Remove every instruction referencing the object `name`.
///
/// An instruction is removed whole, together with all of its
/// sub-instructions, as soon as one parameter references the object either
/// directly (object-reference parameter) or through its expression AST.
/// Surviving instructions have their sub-instructions visited in turn.
/// Returns whether anything was removed at this level or below.
pub fn remove_object_in_instructions(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    scope: InstructionScope,
    instructions: &mut Vec<Instruction>,
    name: &str,
) -> bool {
    let mut modified = false;
    let mut index = 0;

    while index < instructions.len() {
        let metadata = instruction_metadata(
            platform,
            scope,
            &instructions[index].instruction_type,
        );

        if instruction_references_object(
            platform,
            globals,
            objects,
            metadata,
            &instructions[index],
            name,
        ) {
            instructions.remove(index);
            modified = true;
            // Do not advance: the next instruction shifted into this slot.
        } else {
            if !instructions[index].sub_instructions.is_empty() {
                modified |= remove_object_in_instructions(
                    platform,
                    globals,
                    objects,
                    scope,
                    &mut instructions[index].sub_instructions,
                    name,
                );
            }
            index += 1;
        }
    }

    modified
}

/// Whether one of the instruction's classified parameters references the
/// object. Stops at the first referencing parameter.
fn instruction_references_object(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    metadata: Option<&InstructionMetadata>,
    instruction: &Instruction,
    name: &str,
) -> bool {
    for (index, parameter) in instruction.parameters.iter().enumerate() {
        let kind = classify_parameter(metadata, index);
        match kind {
            ParameterKind::ObjectReference => {
                if parameter.value == name {
                    return true;
                }
            }
            ParameterKind::NumberExpression | ParameterKind::StringExpression => {
                let Some(root_type) = kind.expression_root_type() else {
                    continue;
                };
                let Ok(mut node) = platform.parse_expression(&parameter.value) else {
                    continue;
                };
                if expression_references_object(
                    platform, globals, objects, root_type, &mut node, name,
                ) {
                    return true;
                }
            }
            ParameterKind::Other => {}
        }
    }
    false
}

/// Whether a single event-owned parameter references the object.
pub fn event_parameter_references_object(
    platform: &dyn Platform,
    globals: &ObjectsContainer,
    objects: &ObjectsContainer,
    parameter: &Parameter,
    metadata: &ParameterMetadata,
    name: &str,
) -> bool {
    match metadata.kind {
        ParameterKind::ObjectReference => parameter.value == name,
        ParameterKind::NumberExpression | ParameterKind::StringExpression => {
            let Some(root_type) = metadata.kind.expression_root_type() else {
                return false;
            };
            let Ok(mut node) = platform.parse_expression(&parameter.value) else {
                return false;
            };
            expression_references_object(platform, globals, objects, root_type, &mut node, name)
        }
        ParameterKind::Other => false,
    }
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

/// Replace a substring in every parameter of the instruction list.
///
/// Parameters are treated as opaque text regardless of their classified
/// kind. Sub-instructions are always visited; their changes participate in
/// the returned modification signal.
pub fn replace_string_in_instructions(
    instructions: &mut Vec<Instruction>,
    to_replace: &str,
    new_string: &str,
    match_case: bool,
) -> bool {
    let mut modified = false;

    for instruction in instructions.iter_mut() {
        for parameter in &mut instruction.parameters {
            let replaced = if match_case {
                replace_all(&parameter.value, to_replace, new_string)
            } else {
                replace_all_case_insensitive(&parameter.value, to_replace, new_string)
            };
            if replaced != parameter.value {
                parameter.value = replaced;
                modified = true;
            }
        }

        if !instruction.sub_instructions.is_empty() {
            modified |= replace_string_in_instructions(
                &mut instruction.sub_instructions,
                to_replace,
                new_string,
                match_case,
            );
        }
    }

    modified
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search a list of actions. See [`search_string_in_instructions`].
pub fn search_string_in_actions(
    platform: &dyn Platform,
    actions: &[Instruction],
    search: &str,
    match_case: bool,
    in_sentences: bool,
) -> bool {
    search_string_in_instructions(
        platform,
        InstructionScope::Action,
        actions,
        search,
        match_case,
        in_sentences,
    )
}

/// Search a list of conditions. See [`search_string_in_instructions`].
pub fn search_string_in_conditions(
    platform: &dyn Platform,
    conditions: &[Instruction],
    search: &str,
    match_case: bool,
    in_sentences: bool,
) -> bool {
    search_string_in_instructions(
        platform,
        InstructionScope::Condition,
        conditions,
        search,
        match_case,
        in_sentences,
    )
}

/// Whether the search text occurs in any parameter of the instruction list.
///
/// Short-circuits on the first hit. When `in_sentences` is set and no
/// parameter of an instruction matched, the instruction is additionally
/// rendered to its normalized natural-language sentence and retested.
/// Sub-instructions are only visited when their parent found nothing.
pub fn search_string_in_instructions(
    platform: &dyn Platform,
    scope: InstructionScope,
    instructions: &[Instruction],
    search: &str,
    match_case: bool,
    in_sentences: bool,
) -> bool {
    for instruction in instructions {
        for parameter in &instruction.parameters {
            if contains(&parameter.value, search, match_case) {
                return true;
            }
        }

        if in_sentences
            && search_string_in_sentence(platform, scope, instruction, search, match_case)
        {
            return true;
        }

        if !instruction.sub_instructions.is_empty()
            && search_string_in_instructions(
                platform,
                scope,
                &instruction.sub_instructions,
                search,
                match_case,
                in_sentences,
            )
        {
            return true;
        }
    }

    false
}

fn search_string_in_sentence(
    platform: &dyn Platform,
    scope: InstructionScope,
    instruction: &Instruction,
    search: &str,
    match_case: bool,
) -> bool {
    let Some(metadata) = instruction_metadata(platform, scope, &instruction.instruction_type)
    else {
        return false;
    };

    let sentence = platform.instruction_sentence(instruction, metadata);
    contains(&normalize_sentence(&sentence), search, match_case)
}

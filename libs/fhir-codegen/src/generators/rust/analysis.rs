//! Whole-model passes over the generated structs
//!
//! Direct containment cycles must be broken with `Box`, which needs every
//! struct at once. `Default` is derived only on structs whose members are
//! all optional, so a default value is always a valid one.

use super::types::{Member, StructItem};
use crate::ir::TypeRegistry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Box direct containment edges that close a cycle.
///
/// Structs are visited in name order and fields in declaration order; an
/// edge is boxed when its target can reach the owner through edges that are
/// still unboxed. `Vec` fields never count as direct containment.
pub fn box_cycles(items: &mut [StructItem<'_>], registry: &TypeRegistry) {
    items.sort_by(|a, b| a.name.cmp(b.name));
    let index: HashMap<String, usize> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.name.to_string(), i))
        .collect();

    for owner in 0..items.len() {
        for member in 0..items[owner].members.len() {
            let targets = match &items[owner].members[member] {
                Member::Field(field) if !field.boxed && !field.property.cardinality.is_array() => {
                    vec![(None, field.rust_type.clone())]
                }
                Member::Choice(choice) => choice
                    .variant_types
                    .iter()
                    .enumerate()
                    .filter(|(_, ty)| !ty.starts_with("Box<"))
                    .map(|(i, ty)| (Some(i), ty.clone()))
                    .collect(),
                _ => Vec::new(),
            };

            for (variant, target) in targets {
                let target = registry.resolve_alias(&target);
                let Some(&target_index) = index.get(target) else {
                    continue;
                };
                if !reaches(items, &index, target_index, owner, registry) {
                    continue;
                }

                debug!(owner = items[owner].name, target, "boxing recursive field");
                match (&mut items[owner].members[member], variant) {
                    (Member::Field(field), _) => field.boxed = true,
                    (Member::Choice(choice), Some(i)) => {
                        choice.variant_types[i] = format!("Box<{}>", choice.variant_types[i]);
                    }
                    (Member::Choice(_), None) => {}
                }
            }
        }
    }
}

/// Whether `from` contains `to` through unboxed, non-list edges
fn reaches(
    items: &[StructItem<'_>],
    index: &HashMap<String, usize>,
    from: usize,
    to: usize,
    registry: &TypeRegistry,
) -> bool {
    let mut stack = vec![from];
    let mut seen = HashSet::new();

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        for target in direct_targets(&items[current]) {
            if let Some(&next) = index.get(registry.resolve_alias(target)) {
                stack.push(next);
            }
        }
    }

    false
}

fn direct_targets<'s>(item: &'s StructItem<'_>) -> Vec<&'s str> {
    let mut targets = Vec::new();
    for member in &item.members {
        match member {
            Member::Field(field) if !field.boxed && !field.property.cardinality.is_array() => {
                targets.push(field.rust_type.as_str());
            }
            Member::Choice(choice) => targets.extend(
                choice
                    .variant_types
                    .iter()
                    .filter(|ty| !ty.starts_with("Box<"))
                    .map(String::as_str),
            ),
            _ => {}
        }
    }
    targets
}

/// Decide which structs can derive `Default`: those without a mandatory
/// field, list or choice group
pub fn mark_defaults(items: &mut [StructItem<'_>]) {
    for item in items.iter_mut() {
        item.derive_default = item.members.iter().all(|member| match member {
            Member::Choice(choice) => !choice.group.required,
            Member::Field(field) => field.property.cardinality.is_optional(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::rust::types::{Base, FieldSpec};
    use crate::ir::{Cardinality, Property, PropertyType};

    fn property(name: &str, min: u32, max: Option<u32>) -> Property {
        Property {
            name: name.to_string(),
            path: name.to_string(),
            description: None,
            types: vec![PropertyType::new("x")],
            cardinality: Cardinality::new(min, max),
            is_modifier: false,
            binding: None,
        }
    }

    fn item<'a>(name: &'a str, fields: Vec<(&'a Property, &str)>) -> StructItem<'a> {
        StructItem {
            name,
            description: None,
            base: Base::Element,
            members: fields
                .into_iter()
                .map(|(property, ty)| {
                    Member::Field(FieldSpec {
                        property,
                        rust_type: ty.to_string(),
                        boxed: false,
                    })
                })
                .collect(),
            derive_default: false,
        }
    }

    fn boxed(item: &StructItem<'_>) -> Vec<bool> {
        item.members
            .iter()
            .map(|m| matches!(m, Member::Field(f) if f.boxed))
            .collect()
    }

    #[test]
    fn mutual_containment_boxes_the_first_edge_by_name() {
        let registry = TypeRegistry::new();
        let assigner = property("assigner", 0, Some(1));
        let identifier = property("identifier", 0, Some(1));
        let mut items = vec![
            item("Reference", vec![(&identifier, "Identifier")]),
            item("Identifier", vec![(&assigner, "Reference")]),
        ];

        box_cycles(&mut items, &registry);

        assert_eq!(items[0].name, "Identifier");
        assert_eq!(boxed(&items[0]), [true]);
        assert_eq!(boxed(&items[1]), [false]);
    }

    #[test]
    fn lists_do_not_need_boxing() {
        let registry = TypeRegistry::new();
        let item_list = property("item", 0, None);
        let mut items = vec![item("QuestionnaireItem", vec![(&item_list, "QuestionnaireItem")])];

        box_cycles(&mut items, &registry);
        assert_eq!(boxed(&items[0]), [false]);
    }

    #[test]
    fn defaults_need_every_member_optional() {
        let required_text = property("text", 1, Some(1));
        let required_list = property("content", 1, None);
        let optional_status = property("status", 0, Some(1));
        let optional_list = property("note", 0, None);
        let mut items = vec![
            item("Plain", vec![(&required_text, "String"), (&optional_status, "Status")]),
            item("Listed", vec![(&required_list, "Content")]),
            item("Loose", vec![(&optional_status, "Status"), (&optional_list, "Annotation")]),
            item("Empty", vec![]),
        ];

        mark_defaults(&mut items);

        let flags: Vec<_> = items.iter().map(|i| (i.name, i.derive_default)).collect();
        assert_eq!(
            flags,
            [("Plain", false), ("Listed", false), ("Loose", true), ("Empty", true)]
        );
    }
}

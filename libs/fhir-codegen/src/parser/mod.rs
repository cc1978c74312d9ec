//! Parser for FHIR STU3 conformance resources
//!
//! Extracts type information from StructureDefinitions, and the code lists
//! behind required bindings from CodeSystems and ValueSets, and builds an
//! intermediate representation (IR) suitable for code generation.

use crate::ir::{
    capitalize_first, BackboneElement, Binding, BindingStrength, Cardinality, CodeConcept,
    CodeSystemDefinition, Property, PropertyType, TypeAlias, TypeDefinition, TypeKind,
    TypeRegistry, OPEN_TYPES,
};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const BINDING_NAME_EXTENSION: &str =
    "http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName";
const CORE_PREFIX: &str = "http://hl7.org/fhir/StructureDefinition/";

/// Load every resource found at `path`.
///
/// `path` may be a Bundle (such as `profiles-resources.json`), a single
/// resource, or a directory holding any mix of both.
pub fn load_resources(path: &Path) -> Result<Vec<Value>> {
    if path.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(path)
            .with_context(|| format!("reading directory {}", path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        entries.sort();

        let mut resources = Vec::new();
        for entry in entries {
            resources.extend(load_resources(&entry)?);
        }
        return Ok(resources);
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(unbundle(value))
}

fn unbundle(value: Value) -> Vec<Value> {
    if value.get("resourceType").and_then(|v| v.as_str()) != Some("Bundle") {
        return vec![value];
    }

    value
        .get("entry")
        .and_then(|v| v.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("resource").cloned())
                .collect()
        })
        .unwrap_or_default()
}

/// Build a registry from already-loaded conformance resources
pub fn parse_resources(resources: &[Value]) -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();

    for resource in resources {
        match resource.get("resourceType").and_then(|v| v.as_str()) {
            Some("StructureDefinition") => match parse_structure_definition(resource)? {
                Parsed::Type(type_def) => {
                    let id = type_def
                        .url
                        .clone()
                        .unwrap_or_else(|| type_def.name.clone());
                    registry.add_type(id, type_def);
                }
                Parsed::Alias(alias) => registry.add_alias(alias),
                Parsed::Skipped { name, reason } => {
                    warn!(name = %name, reason, "skipping StructureDefinition");
                }
            },
            Some("CodeSystem") => {
                if let Some(code_system) = parse_code_system(resource) {
                    registry.add_code_system(code_system);
                }
            }
            Some("ValueSet") => {
                if let Some((value_set, system)) = parse_value_set(resource) {
                    registry.add_value_set(value_set, system);
                }
            }
            _ => {}
        }
    }

    Ok(registry)
}

/// Load and parse every resource found at `path`
pub fn parse_path(path: &Path) -> Result<TypeRegistry> {
    let resources = load_resources(path)?;
    debug!(count = resources.len(), path = %path.display(), "loaded resources");
    parse_resources(&resources)
}

/// Outcome of reading one StructureDefinition
#[derive(Debug)]
pub enum Parsed {
    Type(TypeDefinition),
    Alias(TypeAlias),
    Skipped { name: String, reason: &'static str },
}

/// Parse a single StructureDefinition
pub fn parse_structure_definition(sd: &Value) -> Result<Parsed> {
    let name = str_field(sd, "name")
        .ok_or_else(|| anyhow!("StructureDefinition missing 'name'"))?
        .to_string();
    let url = str_field(sd, "url").map(String::from);
    let base_type = str_field(sd, "baseDefinition").map(extract_type_name_from_url);

    let kind = match str_field(sd, "kind") {
        Some("resource") => TypeKind::Resource,
        Some("complex-type") => TypeKind::ComplexType,
        Some("primitive-type") => TypeKind::PrimitiveType,
        Some("logical") => return Ok(skipped(&name, "logical model")),
        _ => return Ok(skipped(&name, "unknown kind")),
    };

    if str_field(sd, "derivation") == Some("constraint") {
        let constrained = str_field(sd, "type").unwrap_or_default();
        let is_core = url.as_deref() == Some(format!("{}{}", CORE_PREFIX, name).as_str());
        if kind == TypeKind::ComplexType && is_core && constrained != "Extension" {
            return Ok(Parsed::Alias(TypeAlias {
                target: constrained.to_string(),
                description: str_field(sd, "description").map(normalize_text),
                name,
            }));
        }
        return Ok(skipped(&name, "constraint profile"));
    }

    if sd.get("abstract").and_then(|v| v.as_bool()).unwrap_or(false) {
        return Ok(skipped(&name, "abstract type"));
    }

    let elements = sd
        .get("snapshot")
        .or_else(|| sd.get("differential"))
        .and_then(|v| v.get("element"))
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    let description = elements
        .first()
        .and_then(|root| str_field(root, "definition").or_else(|| str_field(root, "short")))
        .or_else(|| str_field(sd, "description"))
        .map(normalize_text);

    let (properties, backbone_elements) = if kind == TypeKind::PrimitiveType {
        (Vec::new(), Vec::new())
    } else {
        parse_elements(elements, &name, kind)?
    };

    Ok(Parsed::Type(TypeDefinition {
        name,
        url,
        description,
        kind,
        base_type,
        properties,
        is_abstract: false,
        backbone_elements,
    }))
}

fn skipped(name: &str, reason: &'static str) -> Parsed {
    Parsed::Skipped {
        name: name.to_string(),
        reason,
    }
}

/// Split element definitions into direct properties and backbone elements
fn parse_elements(
    elements: &[Value],
    type_name: &str,
    kind: TypeKind,
) -> Result<(Vec<Property>, Vec<BackboneElement>)> {
    let expected_prefix = format!("{}.", type_name);

    let mut properties = Vec::new();
    // Backbone elements in definition order, looked up by path
    let mut backbone_elements: Vec<BackboneElement> = Vec::new();
    let mut backbone_index: HashMap<String, usize> = HashMap::new();

    for element in elements.iter().skip(1) {
        let path = str_field(element, "path").unwrap_or_default();

        if !path.starts_with(&expected_prefix) || element.get("sliceName").is_some() {
            continue;
        }

        let (parent, segment) = match path.rsplit_once('.') {
            Some(split) => split,
            None => continue,
        };
        let at_root = parent == type_name;

        if is_inherited(element, segment, at_root, kind) {
            continue;
        }

        let property = match parse_element(element)? {
            Some(property) => property,
            None => {
                debug!(path, "element has no type, skipping");
                continue;
            }
        };

        if let Some(base) = backbone_base(element) {
            backbone_index.insert(path.to_string(), backbone_elements.len());
            backbone_elements.push(BackboneElement {
                name: BackboneElement::name_for_path(path),
                path: path.to_string(),
                description: str_field(element, "definition")
                    .or_else(|| str_field(element, "short"))
                    .map(normalize_text),
                base_type: base.to_string(),
                properties: Vec::new(),
            });
        }

        if at_root {
            properties.push(property);
        } else if let Some(&index) = backbone_index.get(parent) {
            backbone_elements[index].properties.push(property);
        } else {
            return Err(anyhow!("element {} appears before its parent", path));
        }
    }

    Ok((properties, backbone_elements))
}

/// Whether an element is one of the base fields every struct carries inline
fn is_inherited(element: &Value, segment: &str, at_root: bool, kind: TypeKind) -> bool {
    if let Some(base_path) = element
        .get("base")
        .and_then(|b| str_field(b, "path"))
    {
        let origin = base_path.split('.').next().unwrap_or_default();
        return matches!(
            origin,
            "Resource" | "DomainResource" | "Element" | "BackboneElement"
        );
    }

    // Differentials carry no `base`, fall back on names
    match segment {
        "id" | "extension" | "modifierExtension" => true,
        "meta" | "implicitRules" | "language" | "text" | "contained" => {
            at_root && kind == TypeKind::Resource
        }
        _ => false,
    }
}

/// `Some(base)` when the element opens a nested structure
fn backbone_base(element: &Value) -> Option<&'static str> {
    if element.get("contentReference").is_some() {
        return None;
    }
    let types = element.get("type").and_then(|v| v.as_array())?;
    match types.as_slice() {
        [single] => match str_field(single, "code") {
            Some("BackboneElement") => Some("BackboneElement"),
            Some("Element") => Some("Element"),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a single element into a Property
fn parse_element(element: &Value) -> Result<Option<Property>> {
    let path = str_field(element, "path").ok_or_else(|| anyhow!("Element missing 'path'"))?;

    // Extract property name from path (e.g., "Patient.name" -> "name")
    let name = path
        .rsplit('.')
        .next()
        .ok_or_else(|| anyhow!("Invalid path: {}", path))?
        .trim_end_matches("[x]")
        .to_string();

    let description = str_field(element, "short")
        .or_else(|| str_field(element, "definition"))
        .map(normalize_text);

    // Parse cardinality
    let min = element.get("min").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
    let max = match str_field(element, "max") {
        Some("*") => None,
        Some(n) => n.parse().ok(),
        None => Some(1),
    };
    let cardinality = Cardinality::new(min, max);

    let types = if let Some(reference) = str_field(element, "contentReference") {
        let target = reference.trim_start_matches('#');
        vec![PropertyType::new(BackboneElement::name_for_path(target))]
    } else if backbone_base(element).is_some() {
        vec![PropertyType::new(BackboneElement::name_for_path(path))]
    } else {
        parse_element_types(element)
    };

    if types.is_empty() {
        return Ok(None);
    }

    let is_modifier = element
        .get("isModifier")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    Ok(Some(Property {
        name,
        path: path.to_string(),
        description,
        types,
        cardinality,
        is_modifier,
        binding: element.get("binding").and_then(parse_binding),
    }))
}

/// Parse the type list of an element, expanding `*` and profiled datatypes
fn parse_element_types(element: &Value) -> Vec<PropertyType> {
    let mut types: Vec<PropertyType> = Vec::new();

    let specs = element
        .get("type")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    for spec in specs {
        let code = match str_field(spec, "code") {
            Some(code) => code,
            None => continue,
        };

        if code == "*" {
            types.extend(OPEN_TYPES.iter().map(|code| PropertyType::new(*code)));
            continue;
        }

        // A core datatype profile (SimpleQuantity, Age, ...) names the type
        let profiled = uris(spec, "profile")
            .into_iter()
            .find_map(|profile| profile.strip_prefix(CORE_PREFIX))
            .filter(|profiled| !profiled.contains('/') && *profiled != code);
        let (code, profile_of) = match profiled {
            Some(profiled) => (profiled, Some(code.to_string())),
            None => (code, None),
        };

        let target_profiles = uris(spec, "targetProfile")
            .into_iter()
            .map(extract_type_name_from_url)
            .collect::<Vec<_>>();

        match types.iter_mut().find(|t| t.code == code) {
            // STU3 repeats `Reference` once per target
            Some(existing) => existing.target_profiles.extend(target_profiles),
            None => types.push(PropertyType {
                code: code.to_string(),
                target_profiles,
                profile_of,
            }),
        }
    }

    types
}

/// STU3 writes `profile`/`targetProfile` as a single uri, later versions as a list
fn uris<'a>(spec: &'a Value, key: &str) -> Vec<&'a str> {
    match spec.get(key) {
        Some(Value::String(uri)) => vec![uri.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(|v| v.as_str()).collect(),
        _ => Vec::new(),
    }
}

fn parse_binding(binding: &Value) -> Option<Binding> {
    let strength = match str_field(binding, "strength")? {
        "required" => BindingStrength::Required,
        "extensible" => BindingStrength::Extensible,
        "preferred" => BindingStrength::Preferred,
        _ => BindingStrength::Example,
    };

    let value_set = binding
        .get("valueSetReference")
        .and_then(|r| str_field(r, "reference"))
        .or_else(|| str_field(binding, "valueSetUri"))
        .or_else(|| str_field(binding, "valueSet"))?;

    let name = binding
        .get("extension")
        .and_then(|v| v.as_array())?
        .iter()
        .find(|ext| str_field(ext, "url") == Some(BINDING_NAME_EXTENSION))
        .and_then(|ext| str_field(ext, "valueString"))?;

    Some(Binding {
        name: name.to_string(),
        strength,
        value_set: strip_version(value_set).to_string(),
    })
}

/// Parse a CodeSystem, flattening nested concepts
pub fn parse_code_system(resource: &Value) -> Option<CodeSystemDefinition> {
    let url = str_field(resource, "url")?;
    let name = str_field(resource, "name")
        .map(capitalize_first)
        .unwrap_or_else(|| extract_type_name_from_url(url));

    let mut concepts = Vec::new();
    if let Some(list) = resource.get("concept").and_then(|v| v.as_array()) {
        collect_concepts(list, &mut concepts);
    }

    Some(CodeSystemDefinition {
        url: url.to_string(),
        name,
        description: str_field(resource, "description").map(normalize_text),
        concepts,
    })
}

fn collect_concepts(list: &[Value], out: &mut Vec<CodeConcept>) {
    for concept in list {
        if let Some(code) = str_field(concept, "code") {
            out.push(CodeConcept {
                code: code.to_string(),
                display: str_field(concept, "display").map(String::from),
                definition: str_field(concept, "definition").map(normalize_text),
            });
        }
        if let Some(nested) = concept.get("concept").and_then(|v| v.as_array()) {
            collect_concepts(nested, out);
        }
    }
}

/// Map a ValueSet to its code system when it includes exactly one whole system
pub fn parse_value_set(resource: &Value) -> Option<(String, String)> {
    let url = str_field(resource, "url")?;
    let includes = resource
        .get("compose")
        .and_then(|c| c.get("include"))
        .and_then(|v| v.as_array())?;

    match includes.as_slice() {
        [include] if include.get("concept").is_none() && include.get("filter").is_none() => {
            let system = str_field(include, "system")?;
            Some((url.to_string(), system.to_string()))
        }
        _ => None,
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(|v| v.as_str())
}

fn strip_version(url: &str) -> &str {
    url.split('|').next().unwrap_or(url)
}

fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the type name from a canonical URL
/// E.g., "http://hl7.org/fhir/StructureDefinition/Patient" -> "Patient"
fn extract_type_name_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn condition_like() -> Value {
        json!({
            "resourceType": "StructureDefinition",
            "name": "Sample",
            "url": "http://hl7.org/fhir/StructureDefinition/Sample",
            "kind": "resource",
            "abstract": false,
            "type": "Sample",
            "baseDefinition": "http://hl7.org/fhir/StructureDefinition/DomainResource",
            "derivation": "specialization",
            "snapshot": {"element": [
                {"path": "Sample", "definition": "A sample resource.", "min": 0, "max": "*"},
                {"path": "Sample.id", "base": {"path": "Resource.id"}, "min": 0, "max": "1", "type": [{"code": "id"}]},
                {"path": "Sample.status", "short": "active | inactive", "min": 1, "max": "1",
                 "base": {"path": "Sample.status"},
                 "type": [{"code": "code"}],
                 "binding": {
                    "extension": [{"url": BINDING_NAME_EXTENSION, "valueString": "SampleStatus"}],
                    "strength": "required",
                    "valueSetReference": {"reference": "http://hl7.org/fhir/ValueSet/sample-status|3.0.1"}
                 }},
                {"path": "Sample.onset[x]", "short": "When it started", "min": 0, "max": "1",
                 "base": {"path": "Sample.onset[x]"},
                 "type": [
                    {"code": "dateTime"},
                    {"code": "Quantity", "profile": "http://hl7.org/fhir/StructureDefinition/Age"}
                 ]},
                {"path": "Sample.performer", "min": 0, "max": "*", "base": {"path": "Sample.performer"},
                 "type": [
                    {"code": "Reference", "targetProfile": "http://hl7.org/fhir/StructureDefinition/Patient"},
                    {"code": "Reference", "targetProfile": "http://hl7.org/fhir/StructureDefinition/Practitioner"}
                 ]},
                {"path": "Sample.item", "definition": "An item.", "min": 0, "max": "*",
                 "base": {"path": "Sample.item"}, "type": [{"code": "BackboneElement"}]},
                {"path": "Sample.item.modifierExtension", "base": {"path": "BackboneElement.modifierExtension"},
                 "min": 0, "max": "*", "type": [{"code": "Extension"}]},
                {"path": "Sample.item.detail", "min": 0, "max": "*", "base": {"path": "Sample.item.detail"},
                 "type": [{"code": "BackboneElement"}]},
                {"path": "Sample.item.detail.note", "min": 1, "max": "1", "base": {"path": "Sample.item.detail.note"},
                 "type": [{"code": "string"}]},
                {"path": "Sample.item.part", "min": 0, "max": "*", "base": {"path": "Sample.item.part"},
                 "contentReference": "#Sample.item"}
            ]}
        })
    }

    fn parse_type(sd: &Value) -> TypeDefinition {
        match parse_structure_definition(sd).unwrap() {
            Parsed::Type(type_def) => type_def,
            other => panic!("expected a type, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_type_name_from_url() {
        assert_eq!(
            extract_type_name_from_url("http://hl7.org/fhir/StructureDefinition/Patient"),
            "Patient"
        );
        assert_eq!(extract_type_name_from_url("Patient"), "Patient");
    }

    #[test]
    fn inherited_elements_are_skipped() {
        let sample = parse_type(&condition_like());
        let names: Vec<_> = sample.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["status", "onset", "performer", "item"]);
        assert_eq!(sample.base_type.as_deref(), Some("DomainResource"));
        assert_eq!(sample.description.as_deref(), Some("A sample resource."));
    }

    #[test]
    fn choice_types_use_profiled_datatypes() {
        let sample = parse_type(&condition_like());
        let onset = &sample.properties[1];
        assert!(onset.is_choice());
        let codes: Vec<_> = onset.types.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["dateTime", "Age"]);
        assert_eq!(onset.types[0].profile_of, None);
        assert_eq!(onset.types[1].profile_of.as_deref(), Some("Quantity"));

        let group = onset.choice_group("Sample").unwrap();
        assert_eq!(group.variants[1].key, "onsetQuantity");
    }

    #[test]
    fn reference_targets_are_merged() {
        let sample = parse_type(&condition_like());
        let performer = &sample.properties[2];
        assert_eq!(performer.types.len(), 1);
        assert_eq!(performer.types[0].target_profiles, ["Patient", "Practitioner"]);
    }

    #[test]
    fn backbones_are_named_after_their_path() {
        let sample = parse_type(&condition_like());
        let names: Vec<_> = sample
            .backbone_elements
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, ["SampleItem", "SampleItemDetail"]);

        let item = &sample.backbone_elements[0];
        assert_eq!(item.base_type, "BackboneElement");
        let fields: Vec<_> = item
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.types[0].code.as_str()))
            .collect();
        assert_eq!(fields, [("detail", "SampleItemDetail"), ("part", "SampleItem")]);
        assert_eq!(sample.properties[3].types[0].code, "SampleItem");
    }

    #[test]
    fn bindings_keep_name_and_unversioned_value_set() {
        let sample = parse_type(&condition_like());
        let binding = sample.properties[0].binding.as_ref().unwrap();
        assert_eq!(binding.name, "SampleStatus");
        assert_eq!(binding.strength, BindingStrength::Required);
        assert_eq!(binding.value_set, "http://hl7.org/fhir/ValueSet/sample-status");
    }

    #[test]
    fn core_constraints_become_aliases() {
        let age = json!({
            "resourceType": "StructureDefinition",
            "name": "Age",
            "url": "http://hl7.org/fhir/StructureDefinition/Age",
            "kind": "complex-type",
            "type": "Quantity",
            "derivation": "constraint",
            "description": "A duration of time during which an organism has existed"
        });
        match parse_structure_definition(&age).unwrap() {
            Parsed::Alias(alias) => {
                assert_eq!(alias.name, "Age");
                assert_eq!(alias.target, "Quantity");
            }
            other => panic!("expected an alias, got {:?}", other),
        }

        let profile = json!({
            "resourceType": "StructureDefinition",
            "name": "vitalsigns",
            "url": "http://hl7.org/fhir/StructureDefinition/vitalsigns",
            "kind": "resource",
            "type": "Observation",
            "derivation": "constraint"
        });
        assert!(matches!(
            parse_structure_definition(&profile).unwrap(),
            Parsed::Skipped { .. }
        ));
    }

    #[test]
    fn bundles_are_unpacked_and_code_lists_registered() {
        let bundle = json!({
            "resourceType": "Bundle",
            "entry": [
                {"resource": condition_like()},
                {"resource": {
                    "resourceType": "CodeSystem",
                    "url": "http://hl7.org/fhir/sample-status",
                    "name": "SampleStatus",
                    "concept": [
                        {"code": "active", "concept": [{"code": "on-hold"}]},
                        {"code": "inactive"}
                    ]
                }},
                {"resource": {
                    "resourceType": "ValueSet",
                    "url": "http://hl7.org/fhir/ValueSet/sample-status",
                    "compose": {"include": [{"system": "http://hl7.org/fhir/sample-status"}]}
                }}
            ]
        });

        let registry = parse_resources(&unbundle(bundle)).unwrap();
        let sample = registry.get_type_by_name("Sample").unwrap();
        let binding = sample.properties[0].binding.as_ref().unwrap();
        let codes: Vec<_> = registry
            .resolve_binding(binding)
            .unwrap()
            .concepts
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, ["active", "on-hold", "inactive"]);
    }
}

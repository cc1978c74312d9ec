use std::collections::HashMap;

use ferrum_stu3_codegen::generators::rust::RustGenerator;
use ferrum_stu3_codegen::generators::GeneratorConfig;
use ferrum_stu3_codegen::CodeGenerator;
use serde_json::{json, Value};

const BINDING_NAME: &str = "http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName";

fn element(path: &str, min: u32, max: &str, types: Value) -> Value {
    json!({
        "path": path,
        "short": format!("{} element", path),
        "min": min,
        "max": max,
        "base": {"path": path},
        "type": types
    })
}

fn datatype(name: &str, elements: Vec<Value>) -> Value {
    let mut snapshot = vec![json!({"path": name, "definition": format!("The {} datatype.", name)})];
    snapshot.push(json!({
        "path": format!("{}.id", name),
        "base": {"path": "Element.id"},
        "min": 0, "max": "1",
        "type": [{"code": "string"}]
    }));
    snapshot.extend(elements);
    json!({
        "resourceType": "StructureDefinition",
        "name": name,
        "url": format!("http://hl7.org/fhir/StructureDefinition/{}", name),
        "kind": "complex-type",
        "abstract": false,
        "type": name,
        "baseDefinition": "http://hl7.org/fhir/StructureDefinition/Element",
        "derivation": "specialization",
        "snapshot": {"element": snapshot}
    })
}

fn definitions() -> Vec<Value> {
    let mut status = element("Sample.status", 1, "1", json!([{"code": "code"}]));
    status["binding"] = json!({
        "extension": [{"url": BINDING_NAME, "valueString": "SampleStatus"}],
        "strength": "required",
        "valueSetReference": {"reference": "http://hl7.org/fhir/ValueSet/sample-status"}
    });

    vec![
        datatype(
            "Quantity",
            vec![
                element("Quantity.value", 0, "1", json!([{"code": "decimal"}])),
                element("Quantity.unit", 0, "1", json!([{"code": "string"}])),
            ],
        ),
        json!({
            "resourceType": "StructureDefinition",
            "name": "Age",
            "url": "http://hl7.org/fhir/StructureDefinition/Age",
            "kind": "complex-type",
            "type": "Quantity",
            "derivation": "constraint",
            "description": "A duration of time during which an organism has existed"
        }),
        datatype(
            "Identifier",
            vec![
                element("Identifier.value", 0, "1", json!([{"code": "string"}])),
                element("Identifier.assigner", 0, "1", json!([{"code": "Reference"}])),
            ],
        ),
        datatype(
            "Reference",
            vec![
                element("Reference.reference", 0, "1", json!([{"code": "string"}])),
                element("Reference.identifier", 0, "1", json!([{"code": "Identifier"}])),
            ],
        ),
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
                {"path": "Sample", "definition": "A sample resource."},
                {"path": "Sample.meta", "base": {"path": "Resource.meta"}, "min": 0, "max": "1",
                 "type": [{"code": "Meta"}]},
                status,
                element("Sample.type", 0, "1", json!([{"code": "string"}])),
                element("Sample.onset[x]", 0, "1", json!([
                    {"code": "dateTime"},
                    {"code": "Age"}
                ])),
                element("Sample.subject", 1, "1", json!([{"code": "Reference"}])),
                element("Sample.item", 0, "*", json!([{"code": "BackboneElement"}])),
                {"path": "Sample.item.modifierExtension", "base": {"path": "BackboneElement.modifierExtension"},
                 "min": 0, "max": "*", "type": [{"code": "Extension"}]},
                element("Sample.item.detail", 0, "1", json!([{"code": "BackboneElement"}])),
                element("Sample.item.detail.note", 1, "1", json!([{"code": "string"}])),
                element("Sample.item.flag", 0, "*", json!([{"code": "boolean"}])),
                element("Sample.item.reading", 1, "*", json!([{"code": "decimal"}]))
            ]}
        }),
        json!({
            "resourceType": "CodeSystem",
            "url": "http://hl7.org/fhir/sample-status",
            "name": "SampleStatus",
            "description": "Status of a sample. Used in tests.",
            "concept": [{"code": "active"}, {"code": "entered-in-error"}]
        }),
        json!({
            "resourceType": "ValueSet",
            "url": "http://hl7.org/fhir/ValueSet/sample-status",
            "compose": {"include": [{"system": "http://hl7.org/fhir/sample-status"}]}
        }),
    ]
}

fn generate(config: GeneratorConfig) -> HashMap<String, String> {
    let codegen = CodeGenerator::from_resources(&definitions()).expect("registry");
    codegen
        .generate(RustGenerator::new(config))
        .expect("generation")
        .modules
}

fn assert_contains(code: &str, expected: &str) {
    assert!(
        code.contains(expected),
        "expected to find\n{}\nin\n{}",
        expected,
        code
    );
}

#[test]
fn generates_the_module_layout() {
    let modules = generate(GeneratorConfig::default());
    let mut names: Vec<_> = modules.keys().map(String::as_str).collect();
    names.sort_unstable();

    assert_eq!(
        names,
        [
            "codes.rs",
            "datatypes/identifier.rs",
            "datatypes/mod.rs",
            "datatypes/quantity.rs",
            "resources/mod.rs",
            "resources/sample.rs",
        ]
    );

    let resources = &modules["resources/mod.rs"];
    assert_contains(resources, "mod dispatch;\nmod sample;\n");
    assert_contains(resources, "pub use dispatch::ResourceVariant;\npub use sample::*;\n");
    assert_contains(
        resources,
        "resource_union! {\n    domain: [\n        Sample,\n    ],\n    plain: [\n    ],\n}\n",
    );

    let datatypes = &modules["datatypes/mod.rs"];
    assert_contains(datatypes, "mod identifier;\nmod quantity;\n\npub use identifier::*;\n");
}

#[test]
fn resource_struct_carries_base_fields_and_tag() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert!(sample.starts_with(
        "//! Sample resource definition\n//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Sample\n"
    ));
    assert_contains(
        sample,
        "/// A sample resource.\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n\
         #[serde(rename_all = \"camelCase\")]\npub struct Sample {\n",
    );
    assert_contains(
        sample,
        "    /// Resource type - always \"Sample\"\n    #[serde(default)]\n    pub resource_type: ResourceTag<Sample>,\n",
    );
    assert_contains(
        sample,
        "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub implicit_rules: Option<String>,\n",
    );
    assert_contains(sample, "    pub contained: Option<Vec<Resource>>,\n");
    // Inherited `meta` appears once, from the base block
    assert_eq!(sample.matches("pub meta: Option<Meta>,").count(), 1);
}

#[test]
fn keywords_and_wrapping() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(
        sample,
        "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    #[serde(rename = \"type\")]\n    pub r#type: Option<String>,\n",
    );
    assert_contains(sample, "    pub subject: Reference,\n");
    assert_contains(sample, "    pub item: Option<Vec<SampleItem>>,\n");
    assert_contains(sample, "    pub flag: Option<Vec<bool>>,\n");
    assert_contains(sample, "    pub note: String,\n");
}

#[test]
fn choice_groups_become_choice_enums() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(
        sample,
        "    #[serde(flatten, with = \"crate::choice::optional\")]\n    pub onset: Option<SampleOnset>,\n",
    );
    assert_contains(
        sample,
        "choice_type! {\n    /// Sample.onset[x] element\n    pub enum SampleOnset(\"onset[x]\") {\n        \
         DateTime(DateTime) = \"onsetDateTime\",\n        Age(Age) = \"onsetAge\",\n    }\n}\n",
    );
}

#[test]
fn backbones_are_named_after_their_path() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(sample, "pub struct SampleItem {\n");
    assert_contains(sample, "    pub detail: Option<SampleItemDetail>,\n");
    assert_contains(sample, "    pub modifier_extension: Option<Vec<Extension>>,\n");
    assert_contains(sample, "impl_domain_resource!(Sample);\n");
    assert_contains(sample, "impl_backbone_element!(SampleItem, SampleItemDetail);\n");
}

#[test]
fn default_is_derived_only_without_mandatory_members() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    // `note` is 1..1, `reading` is 1..*
    for name in ["SampleItemDetail", "SampleItem"] {
        assert_contains(
            sample,
            &format!(
                "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n\
                 #[serde(rename_all = \"camelCase\")]\npub struct {} {{\n",
                name
            ),
        );
    }
    assert!(!sample.contains("Default"), "{}", sample);

    assert_contains(
        &modules["datatypes/quantity.rs"],
        "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n\
         #[serde(rename_all = \"camelCase\")]\npub struct Quantity {\n",
    );
}

#[test]
fn mandatory_lists_are_checked_for_emptiness() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(
        sample,
        "    #[serde(deserialize_with = \"non_empty::reading\")]\n    pub reading: Vec<Decimal>,\n",
    );
    assert_contains(
        sample,
        "non_empty_lists! {\n    reading = \"reading\",\n}\n\nimpl_domain_resource!(Sample);\n",
    );
    assert!(!modules["datatypes/quantity.rs"].contains("non_empty"));
}

#[test]
fn required_bindings_become_local_code_enums() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(sample, "    pub status: SampleStatus,\n");
    assert_contains(
        sample,
        "/// Status of a sample.\n#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]\n\
         #[serde(rename_all = \"kebab-case\")]\npub enum SampleStatus {\n    Active,\n    EnteredInError,\n}\n",
    );
    assert!(!modules["codes.rs"].contains("SampleStatus"));
}

#[test]
fn imports_follow_item_homes() {
    let modules = generate(GeneratorConfig::default());
    let sample = &modules["resources/sample.rs"];

    assert_contains(
        sample,
        "use serde::{Deserialize, Serialize};\n\nuse crate::base::ResourceTag;\n\
         use crate::datatypes::{Age, Reference};\nuse crate::primitives::{DateTime, Decimal};\n\
         use crate::resources::Resource;\n",
    );

    let prefixed = generate(GeneratorConfig {
        module_prefix: Some("ferrum_stu3".to_string()),
        ..GeneratorConfig::default()
    });
    assert_contains(
        &prefixed["resources/sample.rs"],
        "use ferrum_stu3::datatypes::{Age, Reference};\n",
    );
}

#[test]
fn recursive_datatypes_are_boxed() {
    let modules = generate(GeneratorConfig::default());
    let identifier = &modules["datatypes/identifier.rs"];

    assert!(identifier.starts_with("//! Identifiers and references\n"));
    assert_contains(identifier, "    pub assigner: Option<Box<Reference>>,\n");
    assert_contains(identifier, "    pub identifier: Option<Identifier>,\n");
    assert_contains(identifier, "impl_element!(Identifier, Reference);\n");
}

#[test]
fn constraint_profiles_become_aliases() {
    let modules = generate(GeneratorConfig::default());
    let quantity = &modules["datatypes/quantity.rs"];

    assert_contains(
        quantity,
        "/// A duration of time during which an organism has existed\npub type Age = Quantity;\n",
    );
    assert_contains(quantity, "use crate::primitives::Decimal;\n");
    assert_contains(quantity, "    pub value: Option<Decimal>,\n");
}

#[test]
fn docs_can_be_turned_off() {
    let modules = generate(GeneratorConfig {
        generate_docs: false,
        ..GeneratorConfig::default()
    });
    assert!(modules["resources/sample.rs"]
        .lines()
        .all(|line| !line.trim_start().starts_with("///")));
}

#[test]
fn registry_dependencies_include_choices_and_aliases() {
    let codegen = CodeGenerator::from_resources(&definitions()).unwrap();
    let registry = codegen.registry();

    let sample = registry.get_type_by_name("Sample").unwrap();
    assert_eq!(registry.get_dependencies(sample), ["Age", "Reference"]);

    let identifier = registry.get_type_by_name("Identifier").unwrap();
    assert_eq!(registry.get_dependencies(identifier), ["Reference"]);

    assert_eq!(registry.resource_types().len(), 1);
    assert_eq!(registry.complex_types().len(), 3);
}

//! Intermediate Representation (IR)
//!
//! Language-agnostic representation of FHIR STU3 types extracted from
//! StructureDefinitions, CodeSystems and ValueSets. This IR is the bridge
//! between the FHIR definitions and the Rust generator.

use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Types admitted by an open `*` element, in the order the generated enum
/// lists them
pub const OPEN_TYPES: &[&str] = &[
    "base64Binary",
    "boolean",
    "code",
    "date",
    "dateTime",
    "decimal",
    "id",
    "instant",
    "integer",
    "markdown",
    "oid",
    "positiveInt",
    "string",
    "time",
    "unsignedInt",
    "uri",
    "Address",
    "Age",
    "Annotation",
    "Attachment",
    "CodeableConcept",
    "Coding",
    "ContactPoint",
    "Count",
    "Distance",
    "Duration",
    "HumanName",
    "Identifier",
    "Money",
    "Period",
    "Quantity",
    "Range",
    "Ratio",
    "Reference",
    "SampledData",
    "Signature",
    "Timing",
    "Meta",
];

/// Registry of all types extracted from the input definitions
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// All types indexed by their canonical URL or name
    types: HashMap<String, TypeDefinition>,
    /// Mapping from type name to canonical identifier
    name_index: HashMap<String, String>,
    /// Datatype profiles that only constrain another type (`Age` -> `Quantity`)
    aliases: BTreeMap<String, TypeAlias>,
    /// Code systems indexed by canonical URL
    code_systems: HashMap<String, CodeSystemDefinition>,
    /// ValueSet URL -> URL of the single code system it draws from
    value_sets: HashMap<String, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type to the registry
    pub fn add_type(&mut self, id: String, type_def: TypeDefinition) {
        self.name_index.insert(type_def.name.clone(), id.clone());
        self.types.insert(id, type_def);
    }

    /// Get a type by its canonical identifier
    pub fn get_type(&self, id: &str) -> Option<&TypeDefinition> {
        self.types.get(id)
    }

    /// Get a type by its name
    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeDefinition> {
        self.name_index.get(name).and_then(|id| self.types.get(id))
    }

    /// Iterate over all types
    pub fn types(&self) -> impl Iterator<Item = (&String, &TypeDefinition)> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Concrete resource types, sorted by name
    pub fn resource_types(&self) -> Vec<&TypeDefinition> {
        self.sorted(|t| t.kind == TypeKind::Resource && !t.is_abstract)
    }

    /// Concrete complex datatypes, sorted by name
    pub fn complex_types(&self) -> Vec<&TypeDefinition> {
        self.sorted(|t| t.kind == TypeKind::ComplexType && !t.is_abstract)
    }

    /// Primitive types, sorted by name
    pub fn primitive_types(&self) -> Vec<&TypeDefinition> {
        self.sorted(|t| t.kind == TypeKind::PrimitiveType)
    }

    fn sorted(&self, keep: impl Fn(&TypeDefinition) -> bool) -> Vec<&TypeDefinition> {
        let mut types: Vec<_> = self.types.values().filter(|t| keep(t)).collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        types
    }

    pub fn add_alias(&mut self, alias: TypeAlias) {
        self.aliases.insert(alias.name.clone(), alias);
    }

    /// Aliases sorted by name
    pub fn aliases(&self) -> impl Iterator<Item = &TypeAlias> {
        self.aliases.values()
    }

    pub fn get_alias(&self, name: &str) -> Option<&TypeAlias> {
        self.aliases.get(name)
    }

    /// Follows aliases down to the struct they stand for
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        match self.aliases.get(name) {
            Some(alias) => self.resolve_alias(&alias.target),
            None => name,
        }
    }

    pub fn add_code_system(&mut self, code_system: CodeSystemDefinition) {
        self.code_systems.insert(code_system.url.clone(), code_system);
    }

    pub fn code_systems(&self) -> impl Iterator<Item = &CodeSystemDefinition> {
        self.code_systems.values()
    }

    /// Records that `value_set` draws all of its codes from `system`
    pub fn add_value_set(&mut self, value_set: String, system: String) {
        self.value_sets.insert(value_set, system);
    }

    /// Resolves a binding to the code system that enumerates its codes.
    ///
    /// Only required bindings to a ValueSet drawn from a single, known,
    /// non-empty code system resolve.
    pub fn resolve_binding(&self, binding: &Binding) -> Option<&CodeSystemDefinition> {
        if binding.strength != BindingStrength::Required {
            return None;
        }
        let system = self.value_sets.get(&binding.value_set)?;
        self.code_systems
            .get(system)
            .filter(|code_system| !code_system.concepts.is_empty())
    }

    /// Get dependencies for a given type (other registered types it references)
    pub fn get_dependencies(&self, type_def: &TypeDefinition) -> Vec<String> {
        let mut deps = Vec::new();

        let properties = type_def
            .properties
            .iter()
            .chain(type_def.backbone_elements.iter().flat_map(|b| &b.properties));

        for property in properties {
            for prop_type in &property.types {
                let type_name = &prop_type.code;

                if !is_primitive_type(type_name)
                    && type_name != "Resource"
                    && type_name != "Element"
                    && type_name != &type_def.name
                    && (self.get_type_by_name(type_name).is_some()
                        || self.aliases.contains_key(type_name))
                    && !deps.contains(type_name)
                {
                    deps.push(type_name.clone());
                }
            }
        }

        deps
    }
}

/// Check if a type is a FHIR primitive
pub fn is_primitive_type(type_name: &str) -> bool {
    matches!(
        type_name,
        "boolean"
            | "integer"
            | "unsignedInt"
            | "positiveInt"
            | "decimal"
            | "string"
            | "code"
            | "id"
            | "markdown"
            | "uri"
            | "oid"
            | "uuid"
            | "date"
            | "dateTime"
            | "instant"
            | "time"
            | "base64Binary"
            | "xhtml"
    )
}

/// A single type definition extracted from a StructureDefinition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// The type name (e.g., "Patient", "HumanName", "string")
    pub name: String,
    /// Canonical URL if available
    pub url: Option<String>,
    /// Human-readable description
    pub description: Option<String>,
    /// Kind of type (resource, complex-type, primitive)
    pub kind: TypeKind,
    /// Base type this extends (if any)
    pub base_type: Option<String>,
    /// Properties/elements declared by this type, in definition order
    pub properties: Vec<Property>,
    /// Whether this is an abstract type
    pub is_abstract: bool,
    /// Backbone elements defined within this type, in definition order
    pub backbone_elements: Vec<BackboneElement>,
}

impl TypeDefinition {
    /// Whether this resource derives from `DomainResource`
    pub fn is_domain_resource(&self) -> bool {
        self.kind == TypeKind::Resource && self.base_type.as_deref() == Some("DomainResource")
    }
}

/// Kind of FHIR type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// FHIR Resource (e.g., Patient, Observation)
    Resource,
    /// Complex datatype (e.g., HumanName, Address, Coding)
    ComplexType,
    /// Primitive type (e.g., string, integer, boolean)
    PrimitiveType,
    /// Backbone element (nested complex element within a resource)
    BackboneElement,
}

/// A property/field within a type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Wire name, without the `[x]` suffix (e.g., "name", "onset")
    pub name: String,
    /// Path in the FHIR element tree (e.g., "Condition.onset[x]")
    pub path: String,
    /// Human-readable description
    pub description: Option<String>,
    /// The type(s) this property can have; more than one for choices
    pub types: Vec<PropertyType>,
    /// Cardinality
    pub cardinality: Cardinality,
    /// Whether this property is a modifier element
    pub is_modifier: bool,
    /// Terminology binding for coded properties
    pub binding: Option<Binding>,
}

impl Property {
    /// Whether this is a `[x]` choice element
    pub fn is_choice(&self) -> bool {
        self.path.ends_with("[x]")
    }

    /// Builds the choice group for this property as declared on `owner`
    pub fn choice_group(&self, owner: &str) -> Option<ChoiceGroup> {
        if !self.is_choice() {
            return None;
        }

        let variants = self
            .types
            .iter()
            .map(|prop_type| {
                ChoiceVariant {
                    key: format!("{}{}", self.name, prop_type.key_suffix()),
                    name: capitalize_first(&prop_type.code),
                    type_code: prop_type.code.clone(),
                }
            })
            .collect();

        Some(ChoiceGroup {
            enum_name: format!("{}{}", owner, capitalize_first(&self.name)),
            label: format!("{}[x]", self.name),
            required: self.cardinality.is_required(),
            variants,
        })
    }
}

/// Type reference for a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyType {
    /// Type code (e.g., "string", "CodeableConcept", "Reference")
    pub code: String,
    /// Target resource types (for Reference properties)
    pub target_profiles: Vec<String>,
    /// Declared type code when `code` names a core profile of it
    /// (`Quantity` for `SimpleQuantity`); choice keys are spelled with it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_of: Option<String>,
}

impl PropertyType {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_profiles: Vec::new(),
            profile_of: None,
        }
    }

    fn key_suffix(&self) -> String {
        capitalize_first(self.profile_of.as_deref().unwrap_or(&self.code))
    }
}

/// Cardinality of a property (min..max)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cardinality {
    /// Minimum occurrences
    pub min: u32,
    /// Maximum occurrences (None means unbounded/*)
    pub max: Option<u32>,
}

impl Cardinality {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Check if this property is a list/array
    pub fn is_array(&self) -> bool {
        self.max.map(|m| m > 1).unwrap_or(true)
    }

    /// Check if this property is optional
    pub fn is_optional(&self) -> bool {
        self.min == 0
    }

    /// Check if this property is required
    pub fn is_required(&self) -> bool {
        self.min > 0
    }
}

/// Terminology binding of a coded element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    /// Name from the `elementdefinition-bindingName` extension
    pub name: String,
    pub strength: BindingStrength,
    /// Canonical URL of the bound ValueSet
    pub value_set: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

/// A `[x]` element seen as a closed set of typed members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceGroup {
    /// Rust enum name (owner + capitalized element name)
    pub enum_name: String,
    /// Element name as written in definitions (e.g., "onset[x]")
    pub label: String,
    /// Whether exactly one member must be present
    pub required: bool,
    pub variants: Vec<ChoiceVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceVariant {
    /// Variant name (e.g., "DateTime")
    pub name: String,
    /// FHIR type code (e.g., "dateTime")
    pub type_code: String,
    /// JSON key (e.g., "onsetDateTime")
    pub key: String,
}

/// A backbone element (inline complex type) within a resource or datatype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackboneElement {
    /// Struct name built from the full path (e.g., "ClaimItemDetail")
    pub name: String,
    /// Full path (e.g., "Claim.item.detail")
    pub path: String,
    /// Description
    pub description: Option<String>,
    /// `BackboneElement` (carries `modifierExtension`) or `Element`
    pub base_type: String,
    /// Properties of this backbone element
    pub properties: Vec<Property>,
}

impl BackboneElement {
    /// Struct name for the backbone element at `path`
    pub fn name_for_path(path: &str) -> String {
        path.split('.')
            .map(|segment| capitalize_first(segment.trim_end_matches("[x]")))
            .collect()
    }
}

/// A datatype profile that only constrains another datatype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    pub target: String,
    pub description: Option<String>,
}

/// A code system whose concepts become a closed Rust enum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSystemDefinition {
    /// Canonical URL
    pub url: String,
    /// Code system name as declared by the resource
    pub name: String,
    pub description: Option<String>,
    /// Concepts in definition order, nested concepts flattened
    pub concepts: Vec<CodeConcept>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeConcept {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
}

/// Capitalize the first letter of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Rust enum name for a binding name (e.g., "condition-clinical" -> "ConditionClinical")
pub fn enum_name_for_binding(name: &str) -> String {
    if name.chars().any(|c| !c.is_ascii_alphanumeric()) {
        name.to_upper_camel_case()
    } else {
        capitalize_first(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, path: &str, codes: &[&str], min: u32) -> Property {
        Property {
            name: name.to_string(),
            path: path.to_string(),
            description: None,
            types: codes.iter().map(|code| PropertyType::new(*code)).collect(),
            cardinality: Cardinality::new(min, Some(1)),
            is_modifier: false,
            binding: None,
        }
    }

    #[test]
    fn choice_group_keys_follow_type_codes() {
        let onset = property("onset", "Condition.onset[x]", &["dateTime", "Age"], 0);
        let group = onset.choice_group("Condition").unwrap();

        assert_eq!(group.enum_name, "ConditionOnset");
        assert_eq!(group.label, "onset[x]");
        assert!(!group.required);
        let keys: Vec<_> = group.variants.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["onsetDateTime", "onsetAge"]);
        assert_eq!(group.variants[0].name, "DateTime");
    }

    #[test]
    fn profiled_choice_members_keep_the_declared_key() {
        let mut dose = property("dose", "Dosage.dose[x]", &["Range", "SimpleQuantity"], 0);
        dose.types[1].profile_of = Some("Quantity".to_string());
        let group = dose.choice_group("Dosage").unwrap();

        let keys: Vec<_> = group.variants.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["doseRange", "doseQuantity"]);
        assert_eq!(group.variants[1].name, "SimpleQuantity");
        assert_eq!(group.variants[1].type_code, "SimpleQuantity");
    }

    #[test]
    fn plain_properties_have_no_choice_group() {
        let subject = property("subject", "Condition.subject", &["Reference"], 1);
        assert!(subject.choice_group("Condition").is_none());
    }

    #[test]
    fn backbone_names_camel_case_the_path() {
        assert_eq!(BackboneElement::name_for_path("Claim.item.detail"), "ClaimItemDetail");
        assert_eq!(BackboneElement::name_for_path("Timing.repeat"), "TimingRepeat");
    }

    #[test]
    fn binding_names_become_enum_names() {
        assert_eq!(enum_name_for_binding("AdministrativeGender"), "AdministrativeGender");
        assert_eq!(enum_name_for_binding("condition-clinical"), "ConditionClinical");
    }

    #[test]
    fn aliases_resolve_transitively() {
        let mut registry = TypeRegistry::new();
        registry.add_alias(TypeAlias {
            name: "SimpleQuantity".into(),
            target: "Quantity".into(),
            description: None,
        });
        registry.add_alias(TypeAlias {
            name: "Duration".into(),
            target: "SimpleQuantity".into(),
            description: None,
        });
        assert_eq!(registry.resolve_alias("Duration"), "Quantity");
        assert_eq!(registry.resolve_alias("Coding"), "Coding");
    }

    #[test]
    fn only_required_bindings_resolve() {
        let mut registry = TypeRegistry::new();
        registry.add_code_system(CodeSystemDefinition {
            url: "http://hl7.org/fhir/administrative-gender".into(),
            name: "AdministrativeGender".into(),
            description: None,
            concepts: vec![CodeConcept {
                code: "male".into(),
                display: None,
                definition: None,
            }],
        });
        registry.add_value_set(
            "http://hl7.org/fhir/ValueSet/administrative-gender".into(),
            "http://hl7.org/fhir/administrative-gender".into(),
        );

        let mut binding = Binding {
            name: "AdministrativeGender".into(),
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/administrative-gender".into(),
        };
        assert!(registry.resolve_binding(&binding).is_some());

        binding.strength = BindingStrength::Extensible;
        assert!(registry.resolve_binding(&binding).is_none());
    }
}

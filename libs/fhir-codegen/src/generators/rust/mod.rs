//! Rust code generator for FHIR STU3 types
//!
//! Output layout, relative to the model crate's `src/`:
//!
//! - `resources/<resource>.rs`: a resource, its backbone elements, its
//!   choice enums and the code enums only it uses
//! - `datatypes/<module>.rs`: complex datatypes, grouped by theme
//! - `codes.rs`: code enums shared by more than one module
//! - `resources/mod.rs`, `datatypes/mod.rs`: declarations, re-exports and
//!   the `resource_union!` invocation

mod analysis;
mod types;

pub use types::{is_rust_keyword, map_primitive, sanitize_field_name};

use crate::generators::{Generator, GeneratorConfig};
use crate::ir::{
    enum_name_for_binding, CodeSystemDefinition, Property, TypeAlias, TypeDefinition, TypeKind,
    TypeRegistry,
};
use anyhow::Result;
use heck::ToSnakeCase;
use phf::phf_map;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{info, warn};
use types::{Base, ChoiceSpec, FieldSpec, Member, StructItem};

/// Datatypes that share a module with related types
static DATATYPE_MODULES: phf::Map<&'static str, &'static str> = phf_map! {
    "Attachment" => "attachment",
    "Annotation" => "attachment",
    "Signature" => "attachment",
    "Coding" => "coding",
    "CodeableConcept" => "coding",
    "HumanName" => "contact",
    "Address" => "contact",
    "ContactPoint" => "contact",
    "ContactDetail" => "contact",
    "Contributor" => "contact",
    "Identifier" => "identifier",
    "Reference" => "identifier",
    "UsageContext" => "metadata",
    "RelatedArtifact" => "metadata",
    "DataRequirement" => "metadata",
    "ParameterDefinition" => "metadata",
    "TriggerDefinition" => "metadata",
    "Narrative" => "narrative",
    "Meta" => "narrative",
    "Quantity" => "quantity",
    "Range" => "quantity",
    "Ratio" => "quantity",
    "SampledData" => "quantity",
    "Period" => "timing",
    "Timing" => "timing",
};

static MODULE_DOCS: phf::Map<&'static str, &'static str> = phf_map! {
    "attachment" => "Attached content, notes and signatures",
    "coding" => "Coded values",
    "contact" => "Names, addresses and contact details",
    "dosage" => "Medication dosage instructions",
    "identifier" => "Identifiers and references",
    "metadata" => "Metadata types used by knowledge artifacts",
    "narrative" => "Narrative and resource metadata",
    "quantity" => "Measured amounts",
    "timing" => "Time periods and schedules",
};

const PRIMITIVES: &[&str] = &["Date", "DateTime", "Decimal", "Instant", "Time"];
const BUILTIN: &[&str] = &["String", "bool", "i32", "u32"];
const MAX_WIDTH: usize = 100;

/// Output of the Rust generator
#[derive(Debug)]
pub struct RustOutput {
    /// Generated files indexed by path relative to the crate's `src/`
    pub modules: HashMap<String, String>,
}

/// Rust code generator
pub struct RustGenerator {
    config: GeneratorConfig,
}

impl RustGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// A generated module
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum ModuleRef {
    Codes,
    Datatypes(String),
    Resources(String),
}

impl ModuleRef {
    fn file_name(&self) -> String {
        match self {
            ModuleRef::Codes => "codes.rs".to_string(),
            ModuleRef::Datatypes(name) => format!("datatypes/{}.rs", name),
            ModuleRef::Resources(name) => format!("resources/{}.rs", name),
        }
    }

    /// Top-level module the item is imported from
    fn parent(&self) -> &'static str {
        match self {
            ModuleRef::Codes => "codes",
            ModuleRef::Datatypes(_) => "datatypes",
            ModuleRef::Resources(_) => "resources",
        }
    }
}

/// A resource or datatype together with the module it lands in
struct Owner<'a> {
    type_def: &'a TypeDefinition,
    module: ModuleRef,
}

/// Where every generated item lives
struct Plan<'a> {
    registry: &'a TypeRegistry,
    owners: Vec<Owner<'a>>,
    homes: HashMap<String, ModuleRef>,
    aliases: Vec<&'a TypeAlias>,
    code_enums: BTreeMap<String, &'a CodeSystemDefinition>,
}

impl Generator for RustGenerator {
    type Output = RustOutput;

    fn name(&self) -> &'static str {
        "rust"
    }

    fn generate(&self, registry: &TypeRegistry) -> Result<Self::Output> {
        let plan = self.plan(registry);

        let mut items = self.build_items(&plan);
        analysis::box_cycles(&mut items, registry);
        analysis::mark_defaults(&mut items);
        let items: HashMap<&str, StructItem<'_>> =
            items.into_iter().map(|item| (item.name, item)).collect();

        let mut modules = HashMap::new();

        let mut by_module: BTreeMap<&ModuleRef, Vec<&Owner<'_>>> = BTreeMap::new();
        for owner in &plan.owners {
            by_module.entry(&owner.module).or_default().push(owner);
        }
        for (module, owners) in &by_module {
            let code = self.generate_type_module(&plan, module, owners, &items);
            info!(module = %module.file_name(), types = owners.len(), "generated module");
            modules.insert(module.file_name(), code);
        }

        modules.insert("codes.rs".to_string(), self.generate_codes_module(&plan));
        modules.insert("datatypes/mod.rs".to_string(), self.generate_datatypes_mod_rs(&plan));
        modules.insert("resources/mod.rs".to_string(), self.generate_resources_mod_rs(&plan));

        Ok(RustOutput { modules })
    }
}

impl RustGenerator {
    /// Assign every struct, choice enum, alias and code enum to a module
    fn plan<'a>(&self, registry: &'a TypeRegistry) -> Plan<'a> {
        let mut owners = Vec::new();
        for type_def in registry.resource_types() {
            owners.push(Owner {
                type_def,
                module: ModuleRef::Resources(type_def.name.to_snake_case()),
            });
        }
        for type_def in registry.complex_types() {
            let module = DATATYPE_MODULES
                .get(type_def.name.as_str())
                .map(|module| module.to_string())
                .unwrap_or_else(|| type_def.name.to_snake_case());
            owners.push(Owner {
                type_def,
                module: ModuleRef::Datatypes(module),
            });
        }

        let mut homes = HashMap::new();
        for owner in &owners {
            for (struct_name, properties) in struct_shapes(owner.type_def) {
                homes.insert(struct_name.to_string(), owner.module.clone());
                for property in properties {
                    if let Some(group) = property.choice_group(struct_name) {
                        homes.insert(group.enum_name, owner.module.clone());
                    }
                }
            }
        }

        let mut aliases = Vec::new();
        for alias in registry.aliases() {
            match homes.get(registry.resolve_alias(&alias.name)).cloned() {
                Some(module) => {
                    homes.insert(alias.name.clone(), module);
                    aliases.push(alias);
                }
                None => warn!(alias = %alias.name, target = %alias.target, "alias target is not generated"),
            }
        }

        // A code enum used by a single module lives there, otherwise in `codes`
        let mut users: BTreeMap<String, (&CodeSystemDefinition, BTreeSet<ModuleRef>)> =
            BTreeMap::new();
        for owner in &owners {
            for (_, properties) in struct_shapes(owner.type_def) {
                for property in properties {
                    let Some((name, code_system)) = code_binding(registry, property) else {
                        continue;
                    };
                    if homes.contains_key(&name) {
                        warn!(code_enum = %name, "code enum name clashes with a type, using String");
                        continue;
                    }
                    let entry = users
                        .entry(name.clone())
                        .or_insert_with(|| (code_system, BTreeSet::new()));
                    if entry.0.url != code_system.url {
                        warn!(code_enum = %name, kept = %entry.0.url, "binding name reused by another code system");
                    }
                    entry.1.insert(owner.module.clone());
                }
            }
        }

        let mut code_enums = BTreeMap::new();
        for (name, (code_system, modules)) in users {
            let home = if modules.len() == 1 {
                modules.into_iter().next().unwrap_or(ModuleRef::Codes)
            } else {
                ModuleRef::Codes
            };
            homes.insert(name.clone(), home);
            code_enums.insert(name, code_system);
        }

        Plan {
            registry,
            owners,
            homes,
            aliases,
            code_enums,
        }
    }

    fn build_items<'a>(&self, plan: &Plan<'a>) -> Vec<StructItem<'a>> {
        let mut items = Vec::new();

        for owner in &plan.owners {
            let type_def = owner.type_def;
            let base = Base::from_type_name(
                type_def.base_type.as_deref(),
                type_def.kind == TypeKind::Resource,
            );
            items.push(self.struct_item(
                plan,
                &type_def.name,
                type_def.description.as_deref(),
                base,
                &type_def.properties,
            ));

            for backbone in &type_def.backbone_elements {
                items.push(self.struct_item(
                    plan,
                    &backbone.name,
                    backbone.description.as_deref(),
                    Base::from_type_name(Some(&backbone.base_type), false),
                    &backbone.properties,
                ));
            }
        }

        items
    }

    fn struct_item<'a>(
        &self,
        plan: &Plan<'a>,
        name: &'a str,
        description: Option<&'a str>,
        base: Base,
        properties: &'a [Property],
    ) -> StructItem<'a> {
        let members = properties
            .iter()
            .map(|property| match property.choice_group(name) {
                Some(group) => Member::Choice(ChoiceSpec {
                    variant_types: group
                        .variants
                        .iter()
                        .map(|variant| resolve_type(plan, property, &variant.type_code))
                        .collect(),
                    group,
                    property,
                }),
                None => Member::Field(FieldSpec {
                    property,
                    rust_type: property
                        .types
                        .first()
                        .map(|t| resolve_type(plan, property, &t.code))
                        .unwrap_or_else(|| "serde_json::Value".to_string()),
                    boxed: false,
                }),
            })
            .collect();

        StructItem {
            name,
            description,
            base,
            members,
            derive_default: false,
        }
    }

    /// Generate a complete module for the types placed in `module`
    fn generate_type_module(
        &self,
        plan: &Plan<'_>,
        module: &ModuleRef,
        owners: &[&Owner<'_>],
        items: &HashMap<&str, StructItem<'_>>,
    ) -> String {
        let mut code = String::new();

        // Header comment
        match (module, owners) {
            (ModuleRef::Resources(_), [owner, ..]) => {
                code.push_str(&format!("//! {} resource definition\n", owner.type_def.name));
                if let Some(url) = &owner.type_def.url {
                    code.push_str(&format!("//! Canonical URL: {}\n", url));
                }
            }
            (ModuleRef::Datatypes(name), [owner, ..]) => match MODULE_DOCS.get(name.as_str()) {
                Some(doc) => code.push_str(&format!("//! {}\n", doc)),
                None => {
                    code.push_str(&format!("//! {} type definition\n", owner.type_def.name));
                    if let Some(url) = &owner.type_def.url {
                        code.push_str(&format!("//! Canonical URL: {}\n", url));
                    }
                }
            },
            _ => {}
        }

        let module_items: Vec<&StructItem<'_>> = owners
            .iter()
            .flat_map(|owner| struct_shapes(owner.type_def))
            .filter_map(|(name, _)| items.get(name))
            .collect();

        code.push('\n');
        code.push_str(&self.generate_imports(plan, module, &module_items));

        for item in &module_items {
            code.push('\n');
            code.push_str(&types::generate_struct(item, &self.config));
        }

        for alias in plan
            .aliases
            .iter()
            .filter(|alias| plan.homes.get(&alias.name) == Some(module))
        {
            code.push('\n');
            if self.config.generate_docs {
                let doc = alias.description.as_deref().unwrap_or(&alias.name);
                code.push_str(&types::doc_comment(doc, ""));
            }
            code.push_str(&format!(
                "pub type {} = {};\n",
                alias.name,
                plan.registry.resolve_alias(&alias.target)
            ));
        }

        for (name, code_system) in &plan.code_enums {
            if plan.homes.get(name) == Some(module) {
                code.push('\n');
                code.push_str(&types::generate_code_enum(name, code_system, &self.config));
            }
        }

        code.push('\n');
        if self.config.generate_serde {
            code.push_str(&non_empty_lists(&module_items));
        }
        for base in [
            Base::DomainResource,
            Base::Resource,
            Base::BackboneElement,
            Base::Element,
        ] {
            let names: Vec<&str> = module_items
                .iter()
                .filter(|item| item.base == base)
                .map(|item| item.name)
                .collect();
            if !names.is_empty() {
                code.push_str(&macro_call(base.impl_macro(), &names));
            }
        }

        code
    }

    /// Generate imports for a module based on the types its items use
    fn generate_imports(
        &self,
        plan: &Plan<'_>,
        module: &ModuleRef,
        items: &[&StructItem<'_>],
    ) -> String {
        let mut used: BTreeSet<&str> = BTreeSet::new();
        for item in items {
            used.extend(item.base.field_types());
            for member in &item.members {
                match member {
                    Member::Field(field) => {
                        used.insert(&field.rust_type);
                    }
                    Member::Choice(choice) => used.extend(choice.variant_types.iter().map(|ty| {
                        let ty = ty.as_str();
                        ty.strip_prefix("Box<")
                            .and_then(|inner| inner.strip_suffix('>'))
                            .unwrap_or(ty)
                    })),
                }
            }
        }

        let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for name in used {
            if BUILTIN.contains(&name) || name.contains("::") {
                continue;
            }
            let parent = match name {
                "ResourceTag" => "base",
                "Resource" => "resources",
                _ if PRIMITIVES.contains(&name) => "primitives",
                _ => match plan.homes.get(name) {
                    Some(home) if home == module => continue,
                    Some(home) => home.parent(),
                    None => continue,
                },
            };
            groups.entry(parent).or_default().insert(name);
        }

        let mut code = String::new();
        if self.config.generate_serde {
            code.push_str("use serde::{Deserialize, Serialize};\n");
        }
        if !groups.is_empty() {
            code.push('\n');
        }
        for (parent, names) in groups {
            let path = format!("{}::{}", self.config.crate_root(), parent);
            code.push_str(&use_statement(&path, &names.into_iter().collect::<Vec<_>>()));
        }
        code
    }

    fn generate_codes_module(&self, plan: &Plan<'_>) -> String {
        let mut code = String::from(
            "//! Code systems shared across resource families\n\
             //!\n\
             //! Codes used by a single family live next to that family's resource.\n\
             //! Decoding is strict: a code outside the enumeration is an error.\n",
        );
        if self.config.generate_serde {
            code.push_str("\nuse serde::{Deserialize, Serialize};\n");
        }
        for (name, code_system) in &plan.code_enums {
            if plan.homes.get(name) == Some(&ModuleRef::Codes) {
                code.push('\n');
                code.push_str(&types::generate_code_enum(name, code_system, &self.config));
            }
        }
        code
    }

    fn generate_datatypes_mod_rs(&self, plan: &Plan<'_>) -> String {
        let modules: BTreeSet<&str> = plan
            .owners
            .iter()
            .filter_map(|owner| match &owner.module {
                ModuleRef::Datatypes(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();

        let mut code = String::from(
            "//! FHIR STU3 complex datatypes\n\
             //!\n\
             //! General-purpose structures reused across resources: codings, identifiers,\n\
             //! quantities, timing, contact details and the `Extension` and\n\
             //! `ElementDefinition` elements.\n\n",
        );
        for module in &modules {
            code.push_str(&format!("mod {};\n", module));
        }
        code.push('\n');
        for module in &modules {
            code.push_str(&format!("pub use {}::*;\n", module));
        }
        code
    }

    fn generate_resources_mod_rs(&self, plan: &Plan<'_>) -> String {
        let mut modules = Vec::new();
        let mut domain = Vec::new();
        let mut plain = Vec::new();
        for owner in &plan.owners {
            if let ModuleRef::Resources(module) = &owner.module {
                modules.push(module.as_str());
                if owner.type_def.is_domain_resource() {
                    domain.push(owner.type_def.name.as_str());
                } else {
                    plain.push(owner.type_def.name.as_str());
                }
            }
        }
        modules.sort_unstable();

        let mut code = String::from(
            "//! FHIR STU3 resources\n\
             //!\n\
             //! One module per resource family: the resource itself, its backbone\n\
             //! elements, its `[x]` choice enums and the code systems only it uses.\n\
             //! [`Resource`] is the closed union over every resource type, dispatched on\n\
             //! the `resourceType` member.\n\n",
        );
        code.push_str("mod dispatch;\n");
        for module in &modules {
            code.push_str(&format!("mod {};\n", module));
        }
        code.push_str("\npub use dispatch::ResourceVariant;\n");
        for module in &modules {
            code.push_str(&format!("pub use {}::*;\n", module));
        }

        code.push_str("\nresource_union! {\n    domain: [\n");
        code.push_str(&wrapped_list(&domain, "        "));
        code.push_str("    ],\n    plain: [\n");
        code.push_str(&wrapped_list(&plain, "        "));
        code.push_str("    ],\n}\n");
        code
    }
}

/// The struct names a type owns, paired with their properties
fn struct_shapes(type_def: &TypeDefinition) -> Vec<(&str, &[Property])> {
    let mut shapes = vec![(type_def.name.as_str(), type_def.properties.as_slice())];
    shapes.extend(
        type_def
            .backbone_elements
            .iter()
            .map(|backbone| (backbone.name.as_str(), backbone.properties.as_slice())),
    );
    shapes
}

/// Enum name and code system for a `code` element under a resolvable binding
fn code_binding<'a>(
    registry: &'a TypeRegistry,
    property: &Property,
) -> Option<(String, &'a CodeSystemDefinition)> {
    if property.is_choice() {
        return None;
    }
    match property.types.as_slice() {
        [only] if only.code == "code" => {}
        _ => return None,
    }
    let binding = property.binding.as_ref()?;
    let code_system = registry.resolve_binding(binding)?;
    Some((enum_name_for_binding(&binding.name), code_system))
}

/// Rust type for one FHIR type code of `property`
fn resolve_type(plan: &Plan<'_>, property: &Property, code: &str) -> String {
    if code == "code" {
        if let Some((name, _)) = code_binding(plan.registry, property) {
            if plan.code_enums.contains_key(&name) {
                return name;
            }
        }
    }
    if let Some(primitive) = map_primitive(code) {
        return primitive.to_string();
    }
    if code == "Resource" || plan.homes.contains_key(code) {
        return code.to_string();
    }

    warn!(path = %property.path, code, "unknown type, falling back to serde_json::Value");
    "serde_json::Value".to_string()
}

fn use_statement(path: &str, names: &[&str]) -> String {
    if let [single] = names {
        return format!("use {}::{};\n", path, single);
    }
    let line = format!("use {}::{{{}}};", path, names.join(", "));
    if line.len() <= MAX_WIDTH {
        return line + "\n";
    }
    format!("use {}::{{\n{}}};\n", path, wrapped_list(names, "    "))
}

/// `non_empty_lists!` invocation covering every `1..*` field of the module
fn non_empty_lists(items: &[&StructItem<'_>]) -> String {
    let mut entries: Vec<(String, &str)> = Vec::new();
    for item in items {
        for member in &item.members {
            let Member::Field(field) = member else {
                continue;
            };
            let cardinality = &field.property.cardinality;
            if cardinality.is_optional() || !cardinality.is_array() {
                continue;
            }
            let function = types::non_empty_function(&sanitize_field_name(&field.property.name));
            let entry = (function, field.property.name.as_str());
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
    }

    if entries.is_empty() {
        return String::new();
    }
    let mut code = String::from("non_empty_lists! {\n");
    for (function, key) in entries {
        code.push_str(&format!("    {} = \"{}\",\n", function, key));
    }
    code.push_str("}\n\n");
    code
}

fn macro_call(name: &str, types: &[&str]) -> String {
    let line = format!("{}!({});", name, types.join(", "));
    if line.len() <= MAX_WIDTH {
        return line + "\n";
    }
    let mut code = format!("{}!(\n", name);
    for ty in types {
        code.push_str(&format!("    {},\n", ty));
    }
    code.push_str(");\n");
    code
}

/// Comma-terminated names packed into lines of at most `MAX_WIDTH` columns
fn wrapped_list(names: &[&str], indent: &str) -> String {
    let mut code = String::new();
    let mut line = String::from(indent);
    for name in names {
        let piece = format!("{},", name);
        if line.len() > indent.len() && line.len() + 1 + piece.len() > MAX_WIDTH {
            code.push_str(&line);
            code.push('\n');
            line = String::from(indent);
        }
        if line.len() > indent.len() {
            line.push(' ');
        }
        line.push_str(&piece);
    }
    if line.len() > indent.len() {
        code.push_str(&line);
        code.push('\n');
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_imports_wrap() {
        let names = [
            "Age", "Annotation", "CodeableConcept", "Extension", "Identifier", "Meta", "Narrative",
            "Period", "Range", "Reference",
        ];
        let code = use_statement("crate::datatypes", &names);
        assert_eq!(
            code,
            "use crate::datatypes::{\n    Age, Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Range,\n    Reference,\n};\n"
        );
        assert_eq!(
            use_statement("crate::base", &["ResourceTag"]),
            "use crate::base::ResourceTag;\n"
        );
    }

    #[test]
    fn impl_macros_wrap_one_type_per_line() {
        assert_eq!(macro_call("impl_element", &["Coding"]), "impl_element!(Coding);\n");
        let many: Vec<String> = (0..12).map(|i| format!("ClaimItemDetail{}", i)).collect();
        let names: Vec<&str> = many.iter().map(String::as_str).collect();
        let code = macro_call("impl_backbone_element", &names);
        assert!(code.starts_with("impl_backbone_element!(\n    ClaimItemDetail0,\n"));
        assert!(code.ends_with("    ClaimItemDetail11,\n);\n"));
    }
}

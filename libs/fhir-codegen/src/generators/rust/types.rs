//! Item generation for Rust structs, choice enums and code enums

use crate::generators::GeneratorConfig;
use crate::ir::{capitalize_first, ChoiceGroup, CodeSystemDefinition, Property};
use heck::ToSnakeCase;
use phf::phf_set;

/// Rust keywords, strict and reserved
static KEYWORDS: phf::Set<&'static str> = phf_set! {
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
};

const MAX_WIDTH: usize = 100;

/// Which inherited field block a struct carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Resource,
    DomainResource,
    Element,
    BackboneElement,
}

impl Base {
    pub fn from_type_name(name: Option<&str>, is_resource: bool) -> Self {
        match (is_resource, name) {
            (true, Some("DomainResource")) => Base::DomainResource,
            (true, _) => Base::Resource,
            (false, Some("BackboneElement")) => Base::BackboneElement,
            (false, _) => Base::Element,
        }
    }

    /// Name of the macro wiring a struct of this base to the capability traits
    pub fn impl_macro(self) -> &'static str {
        match self {
            Base::Resource => "impl_resource",
            Base::DomainResource => "impl_domain_resource",
            Base::Element => "impl_element",
            Base::BackboneElement => "impl_backbone_element",
        }
    }

    /// Types referenced by the inherited fields
    pub fn field_types(self) -> &'static [&'static str] {
        match self {
            Base::Resource => &["ResourceTag", "Meta"],
            Base::DomainResource => &["ResourceTag", "Meta", "Narrative", "Resource", "Extension"],
            Base::Element => &["Extension"],
            Base::BackboneElement => &["Extension"],
        }
    }
}

/// A field after type resolution, ready to print
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    pub property: &'a Property,
    /// Element type without `Option`/`Vec` wrapping
    pub rust_type: String,
    pub boxed: bool,
}

/// A choice field with its resolved member types
#[derive(Debug, Clone)]
pub struct ChoiceSpec<'a> {
    pub property: &'a Property,
    pub group: ChoiceGroup,
    /// One resolved type per variant, boxed where needed
    pub variant_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Member<'a> {
    Field(FieldSpec<'a>),
    Choice(ChoiceSpec<'a>),
}

/// Everything needed to print one struct
#[derive(Debug, Clone)]
pub struct StructItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub base: Base,
    pub members: Vec<Member<'a>>,
    pub derive_default: bool,
}

/// Generate a Rust struct followed by its choice enums
pub fn generate_struct(item: &StructItem<'_>, config: &GeneratorConfig) -> String {
    let mut code = String::new();

    if config.generate_docs {
        let description = item.description.unwrap_or(item.name);
        code.push_str(&doc_comment(description, ""));
    }

    code.push_str("#[derive(Debug, Clone, ");
    if item.derive_default {
        code.push_str("Default, ");
    }
    code.push_str("PartialEq");
    if config.generate_serde {
        code.push_str(", Serialize, Deserialize)]\n");
        code.push_str("#[serde(rename_all = \"camelCase\")]\n");
    } else {
        code.push_str(")]\n");
    }

    code.push_str(&format!("pub struct {} {{\n", item.name));

    let mut blocks = base_fields(item.name, item.base, config);
    for member in &item.members {
        blocks.push(match member {
            Member::Field(field) => generate_field(field, config),
            Member::Choice(choice) => generate_choice_field(choice, config),
        });
    }
    code.push_str(&blocks.join("\n"));
    code.push_str("}\n");

    for member in &item.members {
        if let Member::Choice(choice) = member {
            code.push('\n');
            code.push_str(&generate_choice_enum(choice, config));
        }
    }

    code
}

/// Inherited fields, carried inline
fn base_fields(owner: &str, base: Base, config: &GeneratorConfig) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut add = |doc: &str, field: String| {
        let mut block = String::new();
        if config.generate_docs {
            block.push_str(&format!("    /// {}\n", doc));
        }
        block.push_str(&field);
        blocks.push(block);
    };

    let optional = |key: &str, ty: &str, list: bool| {
        field_declaration(key, ty, true, list, false, config)
    };

    match base {
        Base::Resource | Base::DomainResource => {
            let tag = if config.generate_serde {
                format!("    #[serde(default)]\n    pub resource_type: ResourceTag<{}>,\n", owner)
            } else {
                format!("    pub resource_type: ResourceTag<{}>,\n", owner)
            };
            add(&format!("Resource type - always \"{}\"", owner), tag);
            add("Logical id of this artifact", optional("id", "String", false));
            add("Metadata about the resource", optional("meta", "Meta", false));
            add(
                "A set of rules under which this content was created",
                optional("implicitRules", "String", false),
            );
            add("Language of the resource content", optional("language", "String", false));
            if base == Base::DomainResource {
                add(
                    "Text summary of the resource, for human interpretation",
                    optional("text", "Narrative", false),
                );
                add("Contained, inline Resources", optional("contained", "Resource", true));
                add(
                    "Additional content defined by implementations",
                    optional("extension", "Extension", true),
                );
                add(
                    "Extensions that cannot be ignored",
                    optional("modifierExtension", "Extension", true),
                );
            }
        }
        Base::Element | Base::BackboneElement => {
            add("Unique id for inter-element referencing", optional("id", "String", false));
            add(
                "Additional content defined by implementations",
                optional("extension", "Extension", true),
            );
            if base == Base::BackboneElement {
                add(
                    "Extensions that cannot be ignored",
                    optional("modifierExtension", "Extension", true),
                );
            }
        }
    }

    blocks
}

/// Generate a field for a resolved property
fn generate_field(field: &FieldSpec<'_>, config: &GeneratorConfig) -> String {
    let mut code = String::new();
    let property = field.property;

    if config.generate_docs {
        if let Some(desc) = &property.description {
            code.push_str(&doc_comment(desc, "    "));
        }
    }

    code.push_str(&field_declaration(
        &property.name,
        &field.rust_type,
        property.cardinality.is_optional(),
        property.cardinality.is_array(),
        field.boxed,
        config,
    ));
    code
}

fn field_declaration(
    key: &str,
    rust_type: &str,
    optional: bool,
    list: bool,
    boxed: bool,
    config: &GeneratorConfig,
) -> String {
    let mut code = String::new();
    let field_name = sanitize_field_name(key);

    if config.generate_serde {
        if optional {
            code.push_str("    #[serde(skip_serializing_if = \"Option::is_none\")]\n");
        } else if list {
            code.push_str(&format!(
                "    #[serde(deserialize_with = \"non_empty::{}\")]\n",
                non_empty_function(&field_name)
            ));
        }
        // Raw identifiers always carry an explicit rename
        if field_name.starts_with("r#") || serde_camel_case(&field_name) != key {
            code.push_str(&format!("    #[serde(rename = \"{}\")]\n", key));
        }
    }

    let mut ty = rust_type.to_string();
    if boxed {
        ty = format!("Box<{}>", ty);
    }
    if list {
        ty = format!("Vec<{}>", ty);
    }
    if optional {
        ty = format!("Option<{}>", ty);
    }

    code.push_str(&format!("    pub {}: {},\n", field_name, ty));
    code
}

fn generate_choice_field(choice: &ChoiceSpec<'_>, config: &GeneratorConfig) -> String {
    let mut code = String::new();
    if config.generate_docs {
        if let Some(desc) = &choice.property.description {
            code.push_str(&doc_comment(desc, "    "));
        }
    }

    let field_name = sanitize_field_name(&choice.property.name);
    let (adapter, ty) = if choice.group.required {
        ("required", choice.group.enum_name.clone())
    } else {
        ("optional", format!("Option<{}>", choice.group.enum_name))
    };
    if config.generate_serde {
        code.push_str(&format!(
            "    #[serde(flatten, with = \"{}::choice::{}\")]\n",
            config.crate_root(),
            adapter
        ));
    }
    code.push_str(&format!("    pub {}: {},\n", field_name, ty));
    code
}

/// Generate the `choice_type!` block for a choice field
pub fn generate_choice_enum(choice: &ChoiceSpec<'_>, config: &GeneratorConfig) -> String {
    let mut code = String::from("choice_type! {\n");
    if config.generate_docs {
        if let Some(desc) = &choice.property.description {
            code.push_str(&doc_comment(desc, "    "));
        }
    }
    code.push_str(&format!(
        "    pub enum {}(\"{}\") {{\n",
        choice.group.enum_name, choice.group.label
    ));
    for (variant, ty) in choice.group.variants.iter().zip(&choice.variant_types) {
        code.push_str(&format!(
            "        {}({}) = \"{}\",\n",
            variant.name, ty, variant.key
        ));
    }
    code.push_str("    }\n}\n");
    code
}

/// serde `rename_all` rules tried for code enums, most specific first
const RENAME_RULES: &[(Option<&str>, fn(&str) -> String)] = &[
    (Some("kebab-case"), kebab_case),
    (Some("lowercase"), str::to_lowercase),
    (Some("UPPERCASE"), str::to_uppercase),
    (Some("camelCase"), lower_first),
    (None, str::to_string),
];

/// Generate a closed enum for a code system
pub fn generate_code_enum(
    name: &str,
    code_system: &CodeSystemDefinition,
    config: &GeneratorConfig,
) -> String {
    let variants = variant_names(code_system);

    // The rule that leaves the fewest explicit renames; ties keep the earlier rule
    let mut best = RENAME_RULES[0];
    let mut best_hits = 0;
    for rule in RENAME_RULES {
        let hits = variants
            .iter()
            .zip(&code_system.concepts)
            .filter(|(variant, concept)| (rule.1)(variant) == concept.code)
            .count();
        if hits > best_hits {
            best = *rule;
            best_hits = hits;
        }
    }

    let mut code = String::new();
    if config.generate_docs {
        let description = code_system.description.as_deref().unwrap_or(name);
        code.push_str(&doc_comment(first_sentence(description), ""));
    }
    code.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash");
    if config.generate_serde {
        code.push_str(", Serialize, Deserialize)]\n");
        if let Some(rule) = best.0 {
            code.push_str(&format!("#[serde(rename_all = \"{}\")]\n", rule));
        }
    } else {
        code.push_str(")]\n");
    }
    code.push_str(&format!("pub enum {} {{\n", name));
    for (variant, concept) in variants.iter().zip(&code_system.concepts) {
        if config.generate_docs {
            if let Some(definition) = &concept.definition {
                code.push_str(&doc_comment(first_sentence(definition), "    "));
            }
        }
        if config.generate_serde && (best.1)(variant) != concept.code {
            code.push_str(&format!("    #[serde(rename = \"{}\")]\n", concept.code));
        }
        code.push_str(&format!("    {},\n", variant));
    }
    code.push_str("}\n");
    code
}

/// Unique UpperCamelCase variant names, one per concept
pub fn variant_names(code_system: &CodeSystemDefinition) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(code_system.concepts.len());

    for (index, concept) in code_system.concepts.iter().enumerate() {
        let mut name = variant_name(&concept.code);
        if name.is_empty() {
            name = concept
                .display
                .as_deref()
                .map(variant_name)
                .unwrap_or_default();
        }
        if name.is_empty() {
            name = format!("Code{}", index);
        }
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name = format!("V{}", name);
        }
        if names.contains(&name) {
            name = format!("{}{}", name, index);
        }
        names.push(name);
    }

    names
}

fn variant_name(code: &str) -> String {
    let all_upper = code.len() > 1 && !code.chars().any(|c| c.is_ascii_lowercase());
    let code = if all_upper { code.to_lowercase() } else { code.to_string() };
    code.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect()
}

/// serde's `kebab-case` rule applied to a variant name
fn kebab_case(variant: &str) -> String {
    let mut out = String::new();
    for (i, ch) in variant.char_indices() {
        if i > 0 && ch.is_uppercase() {
            out.push('-');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

fn lower_first(variant: &str) -> String {
    let mut chars = variant.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// serde's `camelCase` rule applied to a snake_case field name
fn serde_camel_case(field: &str) -> String {
    let mut out = String::new();
    let mut capitalize = false;
    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Name of the `non_empty` deserializer for a `1..*` field
pub fn non_empty_function(field_name: &str) -> String {
    match field_name.strip_prefix("r#") {
        Some(keyword) => format!("{}_", keyword),
        None => field_name.to_string(),
    }
}

/// Sanitize a field name to be a valid Rust identifier
pub fn sanitize_field_name(name: &str) -> String {
    let snake = name.to_snake_case();

    if is_rust_keyword(&snake) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Check if a string is a Rust keyword
pub fn is_rust_keyword(s: &str) -> bool {
    KEYWORDS.contains(s)
}

/// Rust type for a FHIR primitive type code
pub fn map_primitive(code: &str) -> Option<&'static str> {
    Some(match code {
        "boolean" => "bool",
        "integer" => "i32",
        "unsignedInt" | "positiveInt" => "u32",
        "decimal" => "Decimal",
        "date" => "Date",
        "dateTime" => "DateTime",
        "instant" => "Instant",
        "time" => "Time",
        "string" | "code" | "id" | "markdown" | "uri" | "oid" | "uuid" | "base64Binary"
        | "xhtml" => "String",
        _ => return None,
    })
}

fn first_sentence(text: &str) -> &str {
    match text.find(". ") {
        Some(end) => &text[..=end],
        None => text,
    }
}

/// `///` lines for `text`, wrapped to the line width
pub fn doc_comment(text: &str, indent: &str) -> String {
    let width = MAX_WIDTH.saturating_sub(indent.len() + 4);
    let mut code = String::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            code.push_str(&format!("{}/// {}\n", indent, line));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        code.push_str(&format!("{}/// {}\n", indent, line));
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::CodeConcept;

    fn code_system(codes: &[&str]) -> CodeSystemDefinition {
        CodeSystemDefinition {
            url: "http://example.org/codes".into(),
            name: "Example".into(),
            description: Some("Example codes. Used in tests.".into()),
            concepts: codes
                .iter()
                .map(|code| CodeConcept {
                    code: code.to_string(),
                    display: None,
                    definition: None,
                })
                .collect(),
        }
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(sanitize_field_name("type"), "r#type");
        assert_eq!(sanitize_field_name("use"), "r#use");
        assert_eq!(sanitize_field_name("class"), "class");
        assert_eq!(sanitize_field_name("birthDate"), "birth_date");
    }

    #[test]
    fn keyword_fields_keep_their_wire_name() {
        let config = GeneratorConfig::default();
        let code = field_declaration("type", "CodeableConcept", false, false, false, &config);
        assert_eq!(
            code,
            "    #[serde(rename = \"type\")]\n    pub r#type: CodeableConcept,\n"
        );
    }

    #[test]
    fn optional_lists_wrap_vec_in_option() {
        let config = GeneratorConfig::default();
        let code = field_declaration("bodySite", "CodeableConcept", true, true, false, &config);
        assert!(code.contains("skip_serializing_if"));
        assert!(code.ends_with("pub body_site: Option<Vec<CodeableConcept>>,\n"));

        let boxed = field_declaration("assigner", "Reference", true, false, true, &config);
        assert!(boxed.ends_with("pub assigner: Option<Box<Reference>>,\n"));
    }

    #[test]
    fn mandatory_lists_reject_empty_arrays() {
        let config = GeneratorConfig::default();
        let code = field_declaration("content", "Content", false, true, false, &config);
        assert_eq!(
            code,
            "    #[serde(deserialize_with = \"non_empty::content\")]\n    pub content: Vec<Content>,\n"
        );

        let keyword = field_declaration("type", "Coding", false, true, false, &config);
        assert!(keyword.contains("deserialize_with = \"non_empty::type_\""), "{keyword}");
        assert!(keyword.contains("rename = \"type\""), "{keyword}");

        let optional = field_declaration("note", "Annotation", true, true, false, &config);
        assert!(!optional.contains("non_empty"), "{optional}");
    }

    #[test]
    fn code_enums_pick_the_closest_rename_rule() {
        let config = GeneratorConfig::default();
        let code = generate_code_enum(
            "SampleStatus",
            &code_system(&["entered-in-error", "active", "<="]),
            &config,
        );
        assert!(code.starts_with("/// Example codes.\n"));
        assert!(code.contains("#[serde(rename_all = \"kebab-case\")]"));
        assert!(code.contains("    EnteredInError,\n"));
        assert!(code.contains("    #[serde(rename = \"<=\")]\n    Code2,\n"));

        let verbs = generate_code_enum("Verb", &code_system(&["GET", "POST"]), &config);
        assert!(verbs.contains("#[serde(rename_all = \"UPPERCASE\")]"));
        assert!(verbs.contains("    Get,\n    Post,\n"));
    }

    #[test]
    fn variant_names_stay_unique() {
        let names = variant_names(&code_system(&["a-b", "a_b", "1"]));
        assert_eq!(names, ["AB", "AB1", "V1"]);
    }

    #[test]
    fn doc_comments_wrap() {
        let text = "word ".repeat(40);
        let doc = doc_comment(&text, "    ");
        assert!(doc.lines().count() > 1);
        assert!(doc.lines().all(|line| line.len() <= MAX_WIDTH));
    }
}

//! Group resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Group

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity, Range, Reference,
};
use crate::resources::Resource;

/// Represents a defined collection of entities that may be discussed or acted upon collectively but
/// which are not expected to act collectively and are not formally or legally recognized; i.e. a
/// collection of entities that isn't an Organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Resource type - always "Group"
    #[serde(default)]
    pub resource_type: ResourceTag<Group>,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Unique id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this group's record is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Identifies the broad classification of the kind of resources the group includes.
    #[serde(rename = "type")]
    pub r#type: GroupType,

    /// Descriptive or actual.
    pub actual: bool,

    /// Kind of Group members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Label for Group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Trait of group members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristic: Option<Vec<GroupCharacteristic>>,

    /// Who or what is in group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Vec<GroupMember>>,
}

/// Identifies the traits shared by members of the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCharacteristic {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Kind of characteristic.
    pub code: CodeableConcept,

    /// Value held by characteristic.
    #[serde(flatten, with = "crate::choice::required")]
    pub value: GroupCharacteristicValue,

    /// Group includes or excludes.
    pub exclude: bool,

    /// Period over which characteristic is tested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

choice_type! {
    /// Value held by characteristic.
    pub enum GroupCharacteristicValue("value[x]") {
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        Boolean(bool) = "valueBoolean",
        Quantity(Quantity) = "valueQuantity",
        Range(Range) = "valueRange",
    }
}

/// Identifies the resource instances that are members of the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to the group member.
    pub entity: Reference,

    /// Period member belonged to the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// If member is no longer in group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
}

/// Types of resources that are part of group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupType {
    Person,
    Animal,
    Practitioner,
    Device,
    Medication,
    Substance,
}

impl_domain_resource!(Group);
impl_backbone_element!(GroupCharacteristic, GroupMember);

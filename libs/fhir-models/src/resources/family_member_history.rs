//! FamilyMemberHistory resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/FamilyMemberHistory

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::AdministrativeGender;
use crate::datatypes::{
    Age, Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Range,
    Reference,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// Significant health events and conditions for a person related to the patient relevant in the
/// context of care for the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberHistory {
    /// Resource type - always "FamilyMemberHistory"
    #[serde(default)]
    pub resource_type: ResourceTag<FamilyMemberHistory>,

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

    /// External Id(s) for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// A code specifying the status of the record of the family history of a specific family
    /// member.
    pub status: FamilyHistoryStatus,

    /// The taking of a family member's history did not occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done: Option<bool>,

    /// subject-unknown | withheld | unable-to-obtain | deferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done_reason: Option<CodeableConcept>,

    /// Patient history is about.
    pub patient: Reference,

    /// When history was captured/updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// The family member described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Relationship to the subject.
    pub relationship: CodeableConcept,

    /// Administrative Gender - the gender that the relative is considered to have for
    /// administration and record keeping purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// (approximate) date of birth.
    #[serde(flatten, with = "crate::choice::optional")]
    pub born: Option<FamilyMemberHistoryBorn>,

    /// (approximate) age.
    #[serde(flatten, with = "crate::choice::optional")]
    pub age: Option<FamilyMemberHistoryAge>,

    /// Age is estimated?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_age: Option<bool>,

    /// Dead? How old/when?.
    #[serde(flatten, with = "crate::choice::optional")]
    pub deceased: Option<FamilyMemberHistoryDeceased>,

    /// Why was family member history performed?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Why was family member history performed?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// General note about related person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Condition that the related person had.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<FamilyMemberHistoryCondition>>,
}

choice_type! {
    /// (approximate) date of birth.
    pub enum FamilyMemberHistoryBorn("born[x]") {
        Period(Period) = "bornPeriod",
        Date(Date) = "bornDate",
        String(String) = "bornString",
    }
}

choice_type! {
    /// (approximate) age.
    pub enum FamilyMemberHistoryAge("age[x]") {
        Age(Age) = "ageAge",
        Range(Range) = "ageRange",
        String(String) = "ageString",
    }
}

choice_type! {
    /// Dead? How old/when?.
    pub enum FamilyMemberHistoryDeceased("deceased[x]") {
        Boolean(bool) = "deceasedBoolean",
        Age(Age) = "deceasedAge",
        Range(Range) = "deceasedRange",
        Date(Date) = "deceasedDate",
        String(String) = "deceasedString",
    }
}

/// The significant Conditions (or condition) that the family member had. This is a repeating
/// section to allow a system to represent more than one condition per resource, though there is
/// nothing stopping multiple resources - one per condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberHistoryCondition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Condition suffered by relation.
    pub code: CodeableConcept,

    /// deceased | permanent disability | etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// When condition first manifested.
    #[serde(flatten, with = "crate::choice::optional")]
    pub onset: Option<FamilyMemberHistoryConditionOnset>,

    /// Extra information about condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

choice_type! {
    /// When condition first manifested.
    pub enum FamilyMemberHistoryConditionOnset("onset[x]") {
        Age(Age) = "onsetAge",
        Range(Range) = "onsetRange",
        Period(Period) = "onsetPeriod",
        String(String) = "onsetString",
    }
}

/// A code that identifies the status of the family history record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyHistoryStatus {
    Partial,
    Completed,
    EnteredInError,
    HealthUnknown,
}

impl_domain_resource!(FamilyMemberHistory);
impl_backbone_element!(FamilyMemberHistoryCondition);

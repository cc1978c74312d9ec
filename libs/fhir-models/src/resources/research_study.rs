//! ResearchStudy resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ResearchStudy

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, ContactDetail, Extension, Identifier, Meta, Narrative, Period,
    Reference, RelatedArtifact,
};
use crate::resources::Resource;

/// A process where a researcher or organization plans and then executes a series of steps intended
/// to increase the field of healthcare-related knowledge. This includes studies of safety,
/// efficacy, comparative effectiveness and other information about medications, devices, therapies
/// and other interventional and investigative techniques. A ResearchStudy involves the gathering of
/// information about human or animal subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStudy {
    /// Resource type - always "ResearchStudy"
    #[serde(default)]
    pub resource_type: ResourceTag<ResearchStudy>,

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

    /// Business Identifier for study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Name for this study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Steps followed in executing study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Vec<Reference>>,

    /// Part of larger study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// The current state of the study.
    pub status: ResearchStudyStatus,

    /// Classifications for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Drugs, devices, conditions, etc. under study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Vec<CodeableConcept>>,

    /// Contact details for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// References and dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,

    /// Used to search for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Vec<CodeableConcept>>,

    /// Geographic region(s) for study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// What this is study doing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inclusion & exclusion criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Vec<Reference>>,

    /// When the study began and ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization responsible for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<Reference>,

    /// The individual responsible for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_investigator: Option<Reference>,

    /// Location involved in study execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Vec<Reference>>,

    /// Reason for terminating study early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_stopped: Option<CodeableConcept>,

    /// Comments made about the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Defined path through the study for a subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm: Option<Vec<ResearchStudyArm>>,
}

/// Describes an expected sequence of events for one of the participants of a study. E.g. Exposure
/// to drug A, wash-out, exposure to drug B, wash-out, follow-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStudyArm {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Label for study arm.
    pub name: String,

    /// Categorization of study arm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Short explanation of study path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Codes that convey the current status of the research study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchStudyStatus {
    Draft,
    InProgress,
    Suspended,
    Stopped,
    Completed,
    EnteredInError,
}

impl_domain_resource!(ResearchStudy);
impl_backbone_element!(ResearchStudyArm);

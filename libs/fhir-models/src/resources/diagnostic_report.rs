//! DiagnosticReport resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/DiagnosticReport

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// The findings and interpretation of diagnostic tests performed on patients, groups of patients,
/// devices, and locations, and/or specimens derived from these. The report includes clinical
/// context such as requesting and provider information, and some mix of atomic results, images,
/// textual and coded interpretations, and formatted representation of diagnostic reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    /// Resource type - always "DiagnosticReport"
    #[serde(default)]
    pub resource_type: ResourceTag<DiagnosticReport>,

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

    /// Business identifier for report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// What was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// The status of the diagnostic report as a whole.
    pub status: DiagnosticReportStatus,

    /// Service category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Name/Code for this diagnostic report.
    pub code: CodeableConcept,

    /// The subject of the report - usually, but not always, the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Health care event when test ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Clinically relevant time/time-period for report.
    #[serde(flatten, with = "crate::choice::optional")]
    pub effective: Option<DiagnosticReportEffective>,

    /// DateTime this version was released.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,

    /// Participants in producing the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<DiagnosticReportPerformer>>,

    /// Specimens this report is based on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Vec<Reference>>,

    /// Observations - simple, or complex nested groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Reference>>,

    /// Reference to full details of imaging associated with the diagnostic report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imaging_study: Option<Vec<Reference>>,

    /// Key images associated with this report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<DiagnosticReportImage>>,

    /// Clinical Interpretation of test results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,

    /// Codes for the conclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coded_diagnosis: Option<Vec<CodeableConcept>>,

    /// Entire report as issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presented_form: Option<Vec<Attachment>>,
}

choice_type! {
    /// Clinically relevant time/time-period for report.
    pub enum DiagnosticReportEffective("effective[x]") {
        DateTime(DateTime) = "effectiveDateTime",
        Period(Period) = "effectivePeriod",
    }
}

/// A list of key images associated with this report. The images are generally created during the
/// diagnostic process, and may be directly of the patient, or of treated specimens (i.e. slides of
/// interest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReportImage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Comment about the image (e.g. explanation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Reference to the image source.
    pub link: Reference,
}

/// Indicates who or what participated in producing the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReportPerformer {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of performer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Practitioner or Organization participant.
    pub actor: Reference,
}

/// The status of the diagnostic report as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticReportStatus {
    Registered,
    Partial,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Appended,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(DiagnosticReport);
impl_backbone_element!(DiagnosticReportImage, DiagnosticReportPerformer);

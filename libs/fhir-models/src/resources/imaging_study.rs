//! ImagingStudy resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ImagingStudy

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Representation of the content produced in a DICOM imaging study. A study comprises a set of
/// series, each of which includes a set of Service-Object Pair Instances (SOP Instances - images or
/// other data) acquired or produced in a common context. A series is of only one modality (e.g.
/// X-ray, CT, MR, ultrasound), but a study may have multiple series of different modalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudy {
    /// Resource type - always "ImagingStudy"
    #[serde(default)]
    pub resource_type: ResourceTag<ImagingStudy>,

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

    /// Formal DICOM identifier for the study.
    pub uid: String,

    /// Related workflow identifier ("Accession Number").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accession: Option<Identifier>,

    /// Other identifiers for the study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// ONLINE | OFFLINE | NEARLINE | UNAVAILABLE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// All series modality if actual acquisition modalities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality_list: Option<Vec<Coding>>,

    /// Who the images are of.
    pub patient: Reference,

    /// Originating context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When the study was started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime>,

    /// Request fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Referring physician.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<Reference>,

    /// Who interpreted images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<Reference>>,

    /// Study access endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// Number of Study Related Series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_series: Option<u32>,

    /// Number of Study Related Instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_instances: Option<u32>,

    /// The performed Procedure reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_reference: Option<Vec<Reference>>,

    /// The performed procedure code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_code: Option<Vec<CodeableConcept>>,

    /// Why the study was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,

    /// Institution-generated description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Each study has one or more series of instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ImagingStudySeries>>,
}

/// Each study has one or more series of images or other content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudySeries {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Formal DICOM identifier for this series.
    pub uid: String,

    /// Numeric identifier of this series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// The modality of the instances in the series.
    pub modality: Coding,

    /// A short human readable summary of the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of Series Related Instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_instances: Option<u32>,

    /// ONLINE | OFFLINE | NEARLINE | UNAVAILABLE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Series access endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// Body part examined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Coding>,

    /// Body part laterality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laterality: Option<Coding>,

    /// When the series started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime>,

    /// Who performed the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<Reference>>,

    /// A single SOP instance from the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Vec<ImagingStudySeriesInstance>>,
}

/// A single SOP instance within the series, e.g. an image, or presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudySeriesInstance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Formal DICOM identifier for this instance.
    pub uid: String,

    /// The number of this instance in the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// DICOM class type.
    pub sop_class: String,

    /// Description of instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl_domain_resource!(ImagingStudy);
impl_backbone_element!(ImagingStudySeries, ImagingStudySeriesInstance);

//! ImagingManifest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ImagingManifest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A text description of the DICOM SOP instances selected in the ImagingManifest; or the reason
/// for, or significance of, the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingManifest {
    /// Resource type - always "ImagingManifest"
    #[serde(default)]
    pub resource_type: ResourceTag<ImagingManifest>,

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

    /// SOP Instance UID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Patient of the selected objects.
    pub patient: Reference,

    /// Time when the selection of instances was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoring_time: Option<DateTime>,

    /// Author (human or machine).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,

    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Study identity of the selected instances.
    #[serde(deserialize_with = "non_empty::study")]
    pub study: Vec<ImagingManifestStudy>,
}

/// Study identity and locating information of the DICOM SOP instances in the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingManifestStudy {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Study instance UID.
    pub uid: String,

    /// Reference to ImagingStudy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imaging_study: Option<Reference>,

    /// Study access service endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// Series identity of the selected instances.
    #[serde(deserialize_with = "non_empty::series")]
    pub series: Vec<ImagingManifestStudySeries>,
}

/// Series identity and locating information of the DICOM SOP instances in the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingManifestStudySeries {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Series instance UID.
    pub uid: String,

    /// Series access endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// The selected instance.
    #[serde(deserialize_with = "non_empty::instance")]
    pub instance: Vec<ImagingManifestStudySeriesInstance>,
}

/// Identity and locating information of the selected DICOM SOP instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingManifestStudySeriesInstance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// SOP class UID of instance.
    pub sop_class: String,

    /// Selected instance UID.
    pub uid: String,
}

non_empty_lists! {
    study = "study",
    series = "series",
    instance = "instance",
}

impl_domain_resource!(ImagingManifest);
impl_backbone_element!(
    ImagingManifestStudy,
    ImagingManifestStudySeries,
    ImagingManifestStudySeriesInstance,
);

//! Specimen resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Specimen

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A sample to be used for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    /// Resource type - always "Specimen"
    #[serde(default)]
    pub resource_type: ResourceTag<Specimen>,

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

    /// External Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Identifier assigned by the lab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accession_identifier: Option<Identifier>,

    /// The availability of the specimen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SpecimenStatus>,

    /// Kind of material that forms the specimen.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Where the specimen came from. This may be from the patient(s) or from the environment or a
    /// device.
    pub subject: Reference,

    /// The time when specimen was received for processing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_time: Option<DateTime>,

    /// Specimen from which this specimen originated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<Reference>>,

    /// Why the specimen was collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Vec<Reference>>,

    /// Collection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<SpecimenCollection>,

    /// Processing and processing step details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<Vec<SpecimenProcessing>>,

    /// Direct container of specimen (tube/slide, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Vec<SpecimenContainer>>,

    /// Comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

/// Details concerning the specimen collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenCollection {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Who collected the specimen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector: Option<Reference>,

    /// Collection time.
    #[serde(flatten, with = "crate::choice::optional")]
    pub collected: Option<SpecimenCollectionCollected>,

    /// The quantity of specimen collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Technique used to perform collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Anatomical collection site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,
}

choice_type! {
    /// Collection time.
    pub enum SpecimenCollectionCollected("collected[x]") {
        DateTime(DateTime) = "collectedDateTime",
        Period(Period) = "collectedPeriod",
    }
}

/// The container holding the specimen. The recursive nature of containers; i.e. blood in tube in
/// tray in rack is not addressed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenContainer {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Textual description of the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Kind of container directly associated with specimen.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Container volume or size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Quantity>,

    /// Quantity of specimen within container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen_quantity: Option<Quantity>,

    /// Additive associated with container.
    #[serde(flatten, with = "crate::choice::optional")]
    pub additive: Option<SpecimenContainerAdditive>,
}

choice_type! {
    /// Additive associated with container.
    pub enum SpecimenContainerAdditive("additive[x]") {
        CodeableConcept(CodeableConcept) = "additiveCodeableConcept",
        Reference(Reference) = "additiveReference",
    }
}

/// Details concerning processing and processing steps for the specimen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenProcessing {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Textual description of procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Indicates the treatment step applied to the specimen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<CodeableConcept>,

    /// Material used in the processing step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive: Option<Vec<Reference>>,

    /// Date and time of specimen processing.
    #[serde(flatten, with = "crate::choice::optional")]
    pub time: Option<SpecimenProcessingTime>,
}

choice_type! {
    /// Date and time of specimen processing.
    pub enum SpecimenProcessingTime("time[x]") {
        DateTime(DateTime) = "timeDateTime",
        Period(Period) = "timePeriod",
    }
}

/// Codes providing the status/availability of a specimen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecimenStatus {
    Available,
    Unavailable,
    Unsatisfactory,
    EnteredInError,
}

impl_domain_resource!(Specimen);
impl_backbone_element!(SpecimenCollection, SpecimenContainer, SpecimenProcessing);

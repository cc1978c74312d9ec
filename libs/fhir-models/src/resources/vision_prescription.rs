//! VisionPrescription resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/VisionPrescription

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Quantity, Reference,
};
use crate::primitives::{DateTime, Decimal};
use crate::resources::Resource;

/// An authorization for the supply of glasses and/or contact lenses to a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionPrescription {
    /// Resource type - always "VisionPrescription"
    #[serde(default)]
    pub resource_type: ResourceTag<VisionPrescription>,

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

    /// Business identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Who prescription is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// Created during encounter / admission / stay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// When prescription was authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_written: Option<DateTime>,

    /// Who authorizes the vision product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescriber: Option<Reference>,

    /// Reason or indication for writing the prescription.
    #[serde(flatten, with = "crate::choice::optional")]
    pub reason: Option<VisionPrescriptionReason>,

    /// Vision supply authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispense: Option<Vec<VisionPrescriptionDispense>>,
}

choice_type! {
    /// Reason or indication for writing the prescription.
    pub enum VisionPrescriptionReason("reason[x]") {
        CodeableConcept(CodeableConcept) = "reasonCodeableConcept",
        Reference(Reference) = "reasonReference",
    }
}

/// Deals with details of the dispense part of the supply specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionPrescriptionDispense {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Product to be supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<CodeableConcept>,

    /// The eye for which the lens applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye: Option<VisionEyes>,

    /// Lens sphere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<Decimal>,

    /// Lens cylinder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder: Option<Decimal>,

    /// Lens axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<i32>,

    /// Lens prism.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prism: Option<Decimal>,

    /// The relative base, or reference lens edge, for the prism.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<VisionBase>,

    /// Lens add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<Decimal>,

    /// Contact lens power.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Decimal>,

    /// Contact lens back curvature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_curve: Option<Decimal>,

    /// Contact lens diameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<Decimal>,

    /// Lens wear duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Quantity>,

    /// Color required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Brand required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Notes for coatings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

/// A coded concept listing the base codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisionBase {
    Up,
    Down,
    In,
    Out,
}

/// A coded concept listing the eye codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisionEyes {
    Right,
    Left,
}

impl_domain_resource!(VisionPrescription);
impl_backbone_element!(VisionPrescriptionDispense);

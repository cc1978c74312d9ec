//! Patient resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Patient

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::AdministrativeGender;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// Demographics and other administrative information about an individual or animal receiving care
/// or other health-related services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Resource type - always "Patient"
    #[serde(default)]
    pub resource_type: ResourceTag<Patient>,

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

    /// An identifier for this patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this patient's record is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// A name associated with the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// A contact detail for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Administrative Gender - the gender that the patient is considered to have for administration
    /// and record keeping purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// The date of birth for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,

    /// Indicates if the individual is deceased or not.
    #[serde(flatten, with = "crate::choice::optional")]
    pub deceased: Option<PatientDeceased>,

    /// Addresses for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Vec<Address>>,

    /// Marital (civil) status of a patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,

    /// Whether patient is part of a multiple birth.
    #[serde(flatten, with = "crate::choice::optional")]
    pub multiple_birth: Option<PatientMultipleBirth>,

    /// Image of the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<Attachment>>,

    /// A contact party (e.g. guardian, partner, friend) for the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<PatientContact>>,

    /// This patient is known to be an animal (non-human).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal: Option<PatientAnimal>,

    /// A list of Languages which may be used to communicate with the patient about his or her
    /// health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<Vec<PatientCommunication>>,

    /// Patient's nominated primary care provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_practitioner: Option<Vec<Reference>>,

    /// Organization that is the custodian of the patient record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Link to another patient resource that concerns the same actual person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<PatientLink>>,
}

choice_type! {
    /// Indicates if the individual is deceased or not.
    pub enum PatientDeceased("deceased[x]") {
        Boolean(bool) = "deceasedBoolean",
        DateTime(DateTime) = "deceasedDateTime",
    }
}

choice_type! {
    /// Whether patient is part of a multiple birth.
    pub enum PatientMultipleBirth("multipleBirth[x]") {
        Boolean(bool) = "multipleBirthBoolean",
        Integer(i32) = "multipleBirthInteger",
    }
}

/// This patient is known to be an animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAnimal {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// E.g. Dog, Cow.
    pub species: CodeableConcept,

    /// E.g. Poodle, Angus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<CodeableConcept>,

    /// E.g. Neutered, Intact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_status: Option<CodeableConcept>,
}

/// Languages which may be used to communicate with the patient about his or her health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCommunication {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The language which can be used to communicate with the patient about his or her health.
    pub language: CodeableConcept,

    /// Language preference indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContact {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The kind of relationship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,

    /// A name associated with the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// A contact detail for the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Address for the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Administrative Gender - the gender that the contact person is considered to have for
    /// administration and record keeping purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// Organization that is associated with the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// The period during which this contact person or organization is valid to be contacted
    /// relating to this patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Link to another patient resource that concerns the same actual patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLink {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The other patient or related person resource that the link refers to.
    pub other: Reference,

    /// The type of link between this patient resource and another patient resource.
    #[serde(rename = "type")]
    pub r#type: LinkType,
}

/// The type of link between this patient resource and another patient resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    ReplacedBy,
    Replaces,
    Refer,
    Seealso,
}

impl_domain_resource!(Patient);
impl_backbone_element!(PatientAnimal, PatientCommunication, PatientContact, PatientLink);

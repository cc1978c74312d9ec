//! Medication resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Medication

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, CodeableConcept, Extension, Meta, Narrative, Quantity, Ratio, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// This resource is primarily used for the identification and definition of a medication. It covers
/// the ingredients and the packaging for a medication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Resource type - always "Medication"
    #[serde(default)]
    pub resource_type: ResourceTag<Medication>,

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

    /// Codes that identify this medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// A code to indicate if the medication is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationStatus>,

    /// True if a brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_brand: Option<bool>,

    /// True if medication does not require a prescription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_over_the_counter: Option<bool>,

    /// Manufacturer of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Reference>,

    /// powder | tablets | capsule +.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Active or inactive ingredient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Vec<MedicationIngredient>>,

    /// Details about packaged medications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<MedicationPackage>,

    /// Picture of the medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<Attachment>>,
}

/// Identifies a particular constituent of interest in the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationIngredient {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The product contained.
    #[serde(flatten, with = "crate::choice::required")]
    pub item: MedicationIngredientItem,

    /// Active ingredient indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Quantity of ingredient present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Ratio>,
}

choice_type! {
    /// The product contained.
    pub enum MedicationIngredientItem("item[x]") {
        CodeableConcept(CodeableConcept) = "itemCodeableConcept",
        Reference(Reference) = "itemReference",
    }
}

/// Information that only applies to packages (not products).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationPackage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// E.g. box, vial, blister-pack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<CodeableConcept>,

    /// What is in the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<MedicationPackageContent>>,

    /// Identifies a single production run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Vec<MedicationPackageBatch>>,
}

/// Information about a group of medication produced or packaged from one production run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationPackageBatch {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifier assigned to batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,

    /// When batch will expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime>,
}

/// A set of components that go to make up the described item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationPackageContent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The item in the package.
    #[serde(flatten, with = "crate::choice::required")]
    pub item: MedicationPackageContentItem,

    /// Quantity present in the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Quantity>,
}

choice_type! {
    /// The item in the package.
    pub enum MedicationPackageContentItem("item[x]") {
        CodeableConcept(CodeableConcept) = "itemCodeableConcept",
        Reference(Reference) = "itemReference",
    }
}

/// A coded concept defining if the medication is in active use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatus {
    Active,
    Inactive,
    EnteredInError,
}

impl_domain_resource!(Medication);
impl_backbone_element!(
    MedicationIngredient,
    MedicationPackage,
    MedicationPackageBatch,
    MedicationPackageContent,
);

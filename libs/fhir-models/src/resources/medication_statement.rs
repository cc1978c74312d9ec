//! MedicationStatement resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MedicationStatement

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Dosage, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A record of a medication that is being consumed by a patient. A MedicationStatement may indicate
/// that the patient may be taking the medication now, or has taken the medication in the past or
/// will be taking the medication in the future. The source of this information can be the patient,
/// significant other (such as a family member or spouse), or a clinician. A common scenario where
/// this information is captured is during the history taking process during a patient visit or
/// stay. The medication information may come from sources such as the patient's memory, from a
/// prescription bottle, or from a list of medications the patient, clinician or other party
/// maintains The primary difference between a medication statement and a medication administration
/// is that the medication administration has complete administration information and is based on
/// actual administration information from the person who administered the medication. A medication
/// statement is often, if not always, less specific. There is no required date/time when the
/// medication was administered, in fact we only know that a source has reported the patient is
/// taking this medication, where details such as time, quantity, or rate or even medication product
/// may be incomplete or missing or less precise. As stated earlier, the medication statement
/// information may come from the patient's memory, from a prescription bottle or from a list of
/// medications the patient, clinician or other party maintains. Medication administration is more
/// formal and is not missing detailed information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationStatement {
    /// Resource type - always "MedicationStatement"
    #[serde(default)]
    pub resource_type: ResourceTag<MedicationStatement>,

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

    /// External identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Fulfils plan, proposal or order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Part of referenced event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// Encounter / Episode associated with MedicationStatement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// A code representing the patient or other source's judgment about the state of the medication
    /// used that this statement is about. Generally this will be active or completed.
    pub status: MedicationStatementStatus,

    /// Type of medication usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// What medication was taken.
    #[serde(flatten, with = "crate::choice::required")]
    pub medication: MedicationStatementMedication,

    /// The date/time or interval when the medication was taken.
    #[serde(flatten, with = "crate::choice::optional")]
    pub effective: Option<MedicationStatementEffective>,

    /// When the statement was asserted?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_asserted: Option<DateTime>,

    /// Person or organization that provided the information about the taking of this medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_source: Option<Reference>,

    /// Who is/was taking the medication.
    pub subject: Reference,

    /// Additional supporting information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Vec<Reference>>,

    /// Indicator of the certainty of whether the medication was taken by the patient.
    pub taken: MedicationStatementTaken,

    /// True if asserting medication was not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_not_taken: Option<Vec<CodeableConcept>>,

    /// Reason for why the medication is being/was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition or observation that supports why the medication is being/was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Further information about the statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Details of how medication is/was taken or should be taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Vec<Dosage>>,
}

choice_type! {
    /// What medication was taken.
    pub enum MedicationStatementMedication("medication[x]") {
        CodeableConcept(CodeableConcept) = "medicationCodeableConcept",
        Reference(Reference) = "medicationReference",
    }
}

choice_type! {
    /// The date/time or interval when the medication was taken.
    pub enum MedicationStatementEffective("effective[x]") {
        DateTime(DateTime) = "effectiveDateTime",
        Period(Period) = "effectivePeriod",
    }
}

/// A coded concept indicating the current status of a MedicationStatement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatementStatus {
    Active,
    Completed,
    EnteredInError,
    Intended,
    Stopped,
    OnHold,
}

/// A coded concept identifying level of certainty if patient has taken or has not taken the medication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatementTaken {
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
    #[serde(rename = "unk")]
    Unknown,
    #[serde(rename = "na")]
    NotApplicable,
}

impl_domain_resource!(MedicationStatement);

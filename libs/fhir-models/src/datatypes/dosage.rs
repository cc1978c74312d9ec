//! Medication dosage instructions

use serde::{Deserialize, Serialize};

use crate::datatypes::{CodeableConcept, Extension, Quantity, Range, Ratio, SimpleQuantity, Timing};

/// Indicates how the medication is/was taken or should be taken by the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The order of the dosage instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,

    /// Free text dosage instructions e.g. SIG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Supplemental instruction - e.g. "with meals"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_instruction: Option<Vec<CodeableConcept>>,

    /// Patient or consumer oriented instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<String>,

    /// When medication should be administered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,

    /// Take "as needed" (for x)
    #[serde(flatten, with = "crate::choice::optional")]
    pub as_needed: Option<DosageAsNeeded>,

    /// Body site to administer to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// How drug should enter body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// Technique for administering medication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Amount of medication per dose
    #[serde(flatten, with = "crate::choice::optional")]
    pub dose: Option<DosageDose>,

    /// Upper limit on medication per unit of time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_period: Option<Ratio>,

    /// Upper limit on medication per administration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_administration: Option<Quantity>,

    /// Upper limit on medication per lifetime of the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_lifetime: Option<Quantity>,

    /// Amount of medication per unit of time
    #[serde(flatten, with = "crate::choice::optional")]
    pub rate: Option<DosageRate>,
}

choice_type! {
    /// Take "as needed" (for x)
    pub enum DosageAsNeeded("asNeeded[x]") {
        Boolean(bool) = "asNeededBoolean",
        CodeableConcept(CodeableConcept) = "asNeededCodeableConcept",
    }
}

choice_type! {
    /// Amount of medication per dose
    pub enum DosageDose("dose[x]") {
        Range(Range) = "doseRange",
        SimpleQuantity(SimpleQuantity) = "doseQuantity",
    }
}

choice_type! {
    /// Amount of medication per unit of time
    pub enum DosageRate("rate[x]") {
        Ratio(Ratio) = "rateRatio",
        Range(Range) = "rateRange",
        SimpleQuantity(SimpleQuantity) = "rateQuantity",
    }
}

impl_element!(Dosage);

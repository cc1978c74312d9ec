//! NutritionOrder resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/NutritionOrder

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Quantity, Ratio, Reference, Timing,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A request to supply a diet, formula feeding (enteral) or oral nutritional supplement to a
/// patient/resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrder {
    /// Resource type - always "NutritionOrder"
    #[serde(default)]
    pub resource_type: ResourceTag<NutritionOrder>,

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

    /// Identifiers assigned to this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The workflow status of the nutrition order/request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NutritionOrderStatus>,

    /// The person who requires the diet, formula or nutritional supplement.
    pub patient: Reference,

    /// The encounter associated with this nutrition order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Date and time the nutrition order was requested.
    pub date_time: DateTime,

    /// Who ordered the diet, formula or nutritional supplement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<Reference>,

    /// List of the patient's food and nutrition-related allergies and intolerances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy_intolerance: Option<Vec<Reference>>,

    /// Order-specific modifier about the type of food that should be given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_preference_modifier: Option<Vec<CodeableConcept>>,

    /// Order-specific modifier about the type of food that should not be given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_food_modifier: Option<Vec<CodeableConcept>>,

    /// Oral diet components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oral_diet: Option<NutritionOrderOralDiet>,

    /// Supplement components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplement: Option<Vec<NutritionOrderSupplement>>,

    /// Enteral formula components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enteral_formula: Option<NutritionOrderEnteralFormula>,
}

/// Feeding provided through the gastrointestinal tract via a tube, catheter, or stoma that delivers
/// nutrition distal to the oral cavity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderEnteralFormula {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of enteral or infant formula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_formula_type: Option<CodeableConcept>,

    /// Product or brand name of the enteral or infant formula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_formula_product_name: Option<String>,

    /// Type of modular component to add to the feeding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive_type: Option<CodeableConcept>,

    /// Product or brand name of the modular additive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive_product_name: Option<String>,

    /// Amount of energy per specified volume that is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_density: Option<Quantity>,

    /// How the formula should enter the patient's gastrointestinal tract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routeof_administration: Option<CodeableConcept>,

    /// Formula feeding instruction as structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administration: Option<Vec<NutritionOrderEnteralFormulaAdministration>>,

    /// Upper limit on formula volume per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_volume_to_deliver: Option<Quantity>,

    /// Formula feeding instructions expressed as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administration_instruction: Option<String>,
}

/// Formula administration instructions as structured data. This repeating structure allows for
/// changing the administration rate or volume over time for both bolus and continuous feeding. An
/// example of this would be an instruction to increase the rate of continuous feeding every 2
/// hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderEnteralFormulaAdministration {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Scheduled frequency of enteral feeding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Timing>,

    /// The volume of formula to provide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Speed with which the formula is provided per period of time.
    #[serde(flatten, with = "crate::choice::optional")]
    pub rate: Option<NutritionOrderEnteralFormulaAdministrationRate>,
}

choice_type! {
    /// Speed with which the formula is provided per period of time.
    pub enum NutritionOrderEnteralFormulaAdministrationRate("rate[x]") {
        Quantity(Quantity) = "rateQuantity",
        Ratio(Ratio) = "rateRatio",
    }
}

/// Diet given orally in contrast to enteral (tube) feeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderOralDiet {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of oral diet or diet restrictions that describe what can be consumed orally.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Scheduled frequency of diet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Timing>>,

    /// Required nutrient modifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient: Option<Vec<NutritionOrderOralDietNutrient>>,

    /// Required texture modifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<Vec<NutritionOrderOralDietTexture>>,

    /// The required consistency of fluids and liquids provided to the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_consistency_type: Option<Vec<CodeableConcept>>,

    /// Instructions or additional information about the oral diet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Class that defines the quantity and type of nutrient modifications (for example carbohydrate,
/// fiber or sodium) required for the oral diet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderOralDietNutrient {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of nutrient that is being modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<CodeableConcept>,

    /// Quantity of the specified nutrient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Quantity>,
}

/// Class that describes any texture modifications required for the patient to safely consume
/// various types of solid foods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderOralDietTexture {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code to indicate how to alter the texture of the foods, e.g. pureed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<CodeableConcept>,

    /// Concepts that are used to identify an entity that is ingested for nutritional purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_type: Option<CodeableConcept>,
}

/// Oral nutritional products given in order to add further nutritional value to the patient's diet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderSupplement {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of supplement product requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Product or brand name of the nutritional supplement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Scheduled frequency of supplement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Timing>>,

    /// Amount of the nutritional supplement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Instructions or additional information about the oral supplement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Codes specifying the state of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutritionOrderStatus {
    Proposed,
    Draft,
    Planned,
    Requested,
    Active,
    OnHold,
    Completed,
    Cancelled,
    EnteredInError,
}

impl_domain_resource!(NutritionOrder);
impl_backbone_element!(
    NutritionOrderEnteralFormula,
    NutritionOrderEnteralFormulaAdministration,
    NutritionOrderOralDiet,
    NutritionOrderOralDietNutrient,
    NutritionOrderOralDietTexture,
    NutritionOrderSupplement,
);

//! Coverage resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Coverage

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference};
use crate::resources::Resource;

/// Financial instrument which may be used to reimburse or pay for health care products and
/// services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    /// Resource type - always "Coverage"
    #[serde(default)]
    pub resource_type: ResourceTag<Coverage>,

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

    /// The primary coverage ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Type of coverage such as medical or accident.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Owner of the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_holder: Option<Reference>,

    /// Subscriber to the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Reference>,

    /// ID assigned to the Subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,

    /// Plan Beneficiary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Reference>,

    /// Beneficiary relationship to the Subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,

    /// Coverage start and end dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Identifier for the plan or agreement issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payor: Option<Vec<Reference>>,

    /// Additional coverage classifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<CoverageGrouping>,

    /// Dependent number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent: Option<String>,

    /// The plan instance or sequence counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,

    /// Relative order of the coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Insurer network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Contract details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Vec<Reference>>,
}

/// A suite of underwrite specific classifiers, for example may be used to identify a class of
/// coverage or employer group, Policy, Plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGrouping {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// An identifier for the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Display text for an identifier for the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_display: Option<String>,

    /// An identifier for the subsection of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,

    /// Display text for the subsection of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group_display: Option<String>,

    /// An identifier for the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Display text for the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_display: Option<String>,

    /// An identifier for the subsection of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_plan: Option<String>,

    /// Display text for the subsection of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_plan_display: Option<String>,

    /// An identifier for the class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Display text for the class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_display: Option<String>,

    /// An identifier for the subsection of the class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_class: Option<String>,

    /// Display text for the subsection of the subclass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_class_display: Option<String>,
}

impl_domain_resource!(Coverage);
impl_backbone_element!(CoverageGrouping);

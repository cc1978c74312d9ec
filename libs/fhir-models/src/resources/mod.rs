//! FHIR STU3 resources
//!
//! One module per resource family: the resource itself, its backbone
//! elements, its `[x]` choice enums and the code systems only it uses.
//! [`Resource`] is the closed union over every resource type, dispatched on
//! the `resourceType` member.

mod dispatch;
mod account;
mod activity_definition;
mod adverse_event;
mod allergy_intolerance;
mod appointment;
mod bundle;
mod capability_statement;
mod care_plan;
mod charge_item;
mod claim;
mod claim_response;
mod clinical_impression;
mod code_system;
mod communication;
mod communication_request;
mod composition;
mod concept_map;
mod condition;
mod consent;
mod contract;
mod coverage;
mod data_element;
mod device;
mod device_request;
mod diagnostic_report;
mod document_manifest;
mod document_reference;
mod eligibility_response;
mod encounter;
mod episode_of_care;
mod expansion_profile;
mod explanation_of_benefit;
mod family_member_history;
mod goal;
mod graph_definition;
mod group;
mod healthcare_service;
mod imaging_manifest;
mod imaging_study;
mod immunization;
mod immunization_recommendation;
mod implementation_guide;
mod library;
mod location;
mod measure;
mod measure_report;
mod medication;
mod medication_administration;
mod medication_dispense;
mod medication_request;
mod medication_statement;
mod message_definition;
mod message_header;
mod naming_system;
mod nutrition_order;
mod observation;
mod operation_definition;
mod operation_outcome;
mod organization;
mod parameters;
mod patient;
mod payment_reconciliation;
mod plan_definition;
mod practitioner;
mod practitioner_role;
mod procedure;
mod procedure_request;
mod provenance;
mod questionnaire;
mod questionnaire_response;
mod referral_request;
mod request_group;
mod research_study;
mod search_parameter;
mod sequence;
mod service_definition;
mod specimen;
mod supply_request;
mod task;
mod test_report;
mod test_script;
mod value_set;
mod vision_prescription;

pub use dispatch::ResourceVariant;
pub use account::*;
pub use activity_definition::*;
pub use adverse_event::*;
pub use allergy_intolerance::*;
pub use appointment::*;
pub use bundle::*;
pub use capability_statement::*;
pub use care_plan::*;
pub use charge_item::*;
pub use claim::*;
pub use claim_response::*;
pub use clinical_impression::*;
pub use code_system::*;
pub use communication::*;
pub use communication_request::*;
pub use composition::*;
pub use concept_map::*;
pub use condition::*;
pub use consent::*;
pub use contract::*;
pub use coverage::*;
pub use data_element::*;
pub use device::*;
pub use device_request::*;
pub use diagnostic_report::*;
pub use document_manifest::*;
pub use document_reference::*;
pub use eligibility_response::*;
pub use encounter::*;
pub use episode_of_care::*;
pub use expansion_profile::*;
pub use explanation_of_benefit::*;
pub use family_member_history::*;
pub use goal::*;
pub use graph_definition::*;
pub use group::*;
pub use healthcare_service::*;
pub use imaging_manifest::*;
pub use imaging_study::*;
pub use immunization::*;
pub use immunization_recommendation::*;
pub use implementation_guide::*;
pub use library::*;
pub use location::*;
pub use measure::*;
pub use measure_report::*;
pub use medication::*;
pub use medication_administration::*;
pub use medication_dispense::*;
pub use medication_request::*;
pub use medication_statement::*;
pub use message_definition::*;
pub use message_header::*;
pub use naming_system::*;
pub use nutrition_order::*;
pub use observation::*;
pub use operation_definition::*;
pub use operation_outcome::*;
pub use organization::*;
pub use parameters::*;
pub use patient::*;
pub use payment_reconciliation::*;
pub use plan_definition::*;
pub use practitioner::*;
pub use practitioner_role::*;
pub use procedure::*;
pub use procedure_request::*;
pub use provenance::*;
pub use questionnaire::*;
pub use questionnaire_response::*;
pub use referral_request::*;
pub use request_group::*;
pub use research_study::*;
pub use search_parameter::*;
pub use sequence::*;
pub use service_definition::*;
pub use specimen::*;
pub use supply_request::*;
pub use task::*;
pub use test_report::*;
pub use test_script::*;
pub use value_set::*;
pub use vision_prescription::*;

resource_union! {
    domain: [
        Account, ActivityDefinition, AdverseEvent, AllergyIntolerance, Appointment,
        CapabilityStatement, CarePlan, ChargeItem, Claim, ClaimResponse, ClinicalImpression,
        CodeSystem, Communication, CommunicationRequest, Composition, ConceptMap, Condition,
        Consent, Contract, Coverage, DataElement, Device, DeviceRequest, DiagnosticReport,
        DocumentManifest, DocumentReference, EligibilityResponse, Encounter, EpisodeOfCare,
        ExpansionProfile, ExplanationOfBenefit, FamilyMemberHistory, Goal, GraphDefinition, Group,
        HealthcareService, ImagingManifest, ImagingStudy, Immunization, ImmunizationRecommendation,
        ImplementationGuide, Library, Location, Measure, MeasureReport, Medication,
        MedicationAdministration, MedicationDispense, MedicationRequest, MedicationStatement,
        MessageDefinition, MessageHeader, NamingSystem, NutritionOrder, Observation,
        OperationDefinition, OperationOutcome, Organization, Patient, PaymentReconciliation,
        PlanDefinition, Practitioner, PractitionerRole, Procedure, ProcedureRequest, Provenance,
        Questionnaire, QuestionnaireResponse, ReferralRequest, RequestGroup, ResearchStudy,
        SearchParameter, Sequence, ServiceDefinition, Specimen, SupplyRequest, Task, TestReport,
        TestScript, ValueSet, VisionPrescription,
    ],
    plain: [
        Bundle, Parameters,
    ],
}

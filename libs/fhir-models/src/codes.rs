//! Code systems shared across resource families
//!
//! Codes used by a single family live next to that family's resource.
//! Decoding is strict: a code outside the enumeration is an error.

use serde::{Deserialize, Serialize};

/// Defines behavior for an action or a group for how many times that item may be repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCardinalityBehavior {
    Single,
    Multiple,
}

/// Defines the kinds of conditions that can appear on actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionConditionKind {
    Applicability,
    Start,
    Stop,
}

/// Defines organization behavior of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionGroupingBehavior {
    VisualGroup,
    LogicalGroup,
    SentenceGroup,
}

/// The type of participant for the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionParticipantType {
    Patient,
    Practitioner,
    RelatedPerson,
}

/// Defines selection frequency behavior for an action or group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionPrecheckBehavior {
    Yes,
    No,
}

/// Defines the types of relationships between actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRelationshipType {
    BeforeStart,
    Before,
    BeforeEnd,
    ConcurrentWithStart,
    Concurrent,
    ConcurrentWithEnd,
    AfterStart,
    After,
    AfterEnd,
}

/// Defines requiredness behavior for selecting an action or an action group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRequiredBehavior {
    Must,
    Could,
    MustUnlessDocumented,
}

/// Defines selection behavior of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionSelectionBehavior {
    Any,
    All,
    AllOrNone,
    ExactlyOne,
    AtMostOne,
    OneOrMore,
}

/// The gender of a person used for administrative purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdministrativeGender {
    Male,
    Female,
    Other,
    Unknown,
}

/// Indication of the degree of conformance expectations associated with a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

/// The workflow/clinical status of the composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionStatus {
    Preliminary,
    Final,
    Amended,
    EnteredInError,
}

/// The days of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DaysOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// The status of the document reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentReferenceStatus {
    Current,
    Superseded,
    EnteredInError,
}

/// The type of relationship between documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentRelationshipType {
    Replaces,
    Transforms,
    Signs,
    Appends,
}

/// The current state of the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Preparation,
    InProgress,
    Suspended,
    Aborted,
    Completed,
    EnteredInError,
    Unknown,
}

/// The kind of operation to perform as a part of a property based filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Equal,
    IsA,
    DescendentOf,
    IsNotA,
    Regex,
    In,
    NotIn,
    Generalizes,
    Exists,
}

/// A set of codes indicating the current status of an administration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationAdministrationStatus {
    InProgress,
    OnHold,
    Completed,
    EnteredInError,
    Stopped,
    Unknown,
}

/// The impact of the content of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageSignificanceCategory {
    Consequence,
    Currency,
    Notification,
}

/// Whether an operation parameter is an input or an output parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationParameterUse {
    In,
    Out,
}

/// The lifecycle status of a Value Set or Concept Map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

/// Codes indicating the degree of authority/intentionality associated with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestIntent {
    Proposal,
    Plan,
    Order,
    OriginalOrder,
    ReflexOrder,
    FillerOrder,
    InstanceOrder,
    Option,
}

/// Identifies the level of importance to be assigned to actioning the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestPriority {
    Routine,
    Urgent,
    Asap,
    Stat,
}

/// Codes identifying the stage lifecycle stage of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Draft,
    Active,
    Suspended,
    Cancelled,
    Completed,
    EnteredInError,
    Unknown,
}

/// One of the resource types defined as part of FHIR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// A financial tool for tracking value accrued for a particular purpose.
    Account,
    /// This resource allows for the definition of some activity to be performed, independent of a
    /// particular patient, practitioner, or other performance context.
    ActivityDefinition,
    /// Actual or potential/avoided event causing unintended physical injury resulting from or
    /// contributed to by medical care, a research study or other healthcare setting factors that
    /// requires additional monitoring, treatment, or hospitalization, or that results in death.
    AdverseEvent,
    /// Risk of harmful or undesirable, physiological response which is unique to an individual and
    /// associated with exposure to a substance.
    AllergyIntolerance,
    /// A booking of a healthcare event among patient(s), practitioner(s), related person(s) and/or
    /// device(s) for a specific date/time.
    Appointment,
    /// A reply to an appointment request for a patient and/or practitioner(s), such as a
    /// confirmation or rejection.
    AppointmentResponse,
    /// A record of an event made for purposes of maintaining a security log.
    AuditEvent,
    /// Basic is used for handling concepts not yet defined in FHIR, narrative-only resources that
    /// don't map to an existing resource, and custom resources not appropriate for inclusion in the
    /// FHIR specification.
    Basic,
    /// A binary resource can contain any content, whether text, image, pdf, zip archive, etc.
    Binary,
    /// Record details about the anatomical location of a specimen or body part.
    BodySite,
    /// A container for a collection of resources.
    Bundle,
    /// A Capability Statement documents a set of capabilities (behaviors) of a FHIR Server that may
    /// be used as a statement of actual server functionality or a statement of required or desired
    /// server implementation.
    CapabilityStatement,
    /// Describes the intention of how one or more practitioners intend to deliver care for a
    /// particular patient, group or community for a period of time, possibly limited to care for a
    /// specific condition or set of conditions.
    CarePlan,
    /// The Care Team includes all the people and organizations who plan to participate in the
    /// coordination and delivery of care for a patient.
    CareTeam,
    /// The resource ChargeItem describes the provision of healthcare provider products for a
    /// certain patient, therefore referring not only to the product, but containing in addition
    /// details of the provision, like date, time, amounts and participating organizations and
    /// persons.
    ChargeItem,
    /// A provider issued list of services and products provided, or to be provided, to a patient
    /// which is provided to an insurer for payment recovery.
    Claim,
    /// This resource provides the adjudication details from the processing of a Claim resource.
    ClaimResponse,
    /// A record of a clinical assessment performed to determine what problem(s) may affect the
    /// patient and before planning the treatments or management strategies that are best to manage
    /// a patient's condition.
    ClinicalImpression,
    /// A code system resource specifies a set of codes drawn from one or more code systems.
    CodeSystem,
    /// An occurrence of information being transmitted; e.g.
    Communication,
    /// A request to convey information; e.g.
    CommunicationRequest,
    /// A compartment definition that defines how resources are accessed on a server.
    CompartmentDefinition,
    /// A set of healthcare-related information that is assembled together into a single logical
    /// document that provides a single coherent statement of meaning, establishes its own context
    /// and that has clinical attestation with regard to who is making the statement.
    Composition,
    /// A statement of relationships from one set of concepts to one or more other concepts - either
    /// code systems or data elements, or classes in class models.
    ConceptMap,
    /// A clinical condition, problem, diagnosis, or other event, situation, issue, or clinical
    /// concept that has risen to a level of concern.
    Condition,
    /// A record of a healthcare consumer’s policy choices, which permits or denies identified
    /// recipient(s) or recipient role(s) to perform one or more actions within a given policy
    /// context, for specific purposes and periods of time.
    Consent,
    /// A formal agreement between parties regarding the conduct of business, exchange of
    /// information or other matters.
    Contract,
    /// Financial instrument which may be used to reimburse or pay for health care products and
    /// services.
    Coverage,
    /// The formal description of a single piece of information that can be gathered and reported.
    DataElement,
    /// Indicates an actual or potential clinical issue with or between one or more active or
    /// proposed clinical actions for a patient; e.g.
    DetectedIssue,
    /// This resource identifies an instance or a type of a manufactured item that is used in the
    /// provision of healthcare without being substantially changed through that activity.
    Device,
    /// The characteristics, operational status and capabilities of a medical-related component of a
    /// medical device.
    DeviceComponent,
    /// Describes a measurement, calculation or setting capability of a medical device.
    DeviceMetric,
    /// Represents a request for a patient to employ a medical device.
    DeviceRequest,
    /// A record of a device being used by a patient where the record is the result of a report from
    /// the patient or another clinician.
    DeviceUseStatement,
    /// The findings and interpretation of diagnostic tests performed on patients, groups of
    /// patients, devices, and locations, and/or specimens derived from these.
    DiagnosticReport,
    /// A collection of documents compiled for a purpose together with metadata that applies to the
    /// collection.
    DocumentManifest,
    /// A reference to a document.
    DocumentReference,
    /// A resource that includes narrative, extensions, and contained resources.
    DomainResource,
    /// The EligibilityRequest provides patient and insurance coverage information to an insurer for
    /// them to respond, in the form of an EligibilityResponse, with information regarding whether
    /// the stated coverage is valid and in-force and optionally to provide the insurance details of
    /// the policy.
    EligibilityRequest,
    /// This resource provides eligibility and plan details from the processing of an Eligibility
    /// resource.
    EligibilityResponse,
    /// An interaction between a patient and healthcare provider(s) for the purpose of providing
    /// healthcare service(s) or assessing the health status of a patient.
    Encounter,
    /// The technical details of an endpoint that can be used for electronic services, such as for
    /// web services providing XDS.b or a REST endpoint for another FHIR server.
    Endpoint,
    /// This resource provides the insurance enrollment details to the insurer regarding a specified
    /// coverage.
    EnrollmentRequest,
    /// This resource provides enrollment and plan details from the processing of an Enrollment
    /// resource.
    EnrollmentResponse,
    /// An association between a patient and an organization / healthcare provider(s) during which
    /// time encounters may occur.
    EpisodeOfCare,
    /// Resource to define constraints on the Expansion of a FHIR ValueSet.
    ExpansionProfile,
    /// This resource provides: the claim details; adjudication details from the processing of a
    /// Claim; and optionally account balance information, for informing the subscriber of the
    /// benefits provided.
    ExplanationOfBenefit,
    /// Significant health events and conditions for a person related to the patient relevant in the
    /// context of care for the patient.
    FamilyMemberHistory,
    /// Prospective warnings of potential issues when providing care to the patient.
    Flag,
    /// Describes the intended objective(s) for a patient, group or organization care, for example,
    /// weight loss, restoring an activity of daily living, obtaining herd immunity via
    /// immunization, meeting a process improvement objective, etc.
    Goal,
    /// A formal computable definition of a graph of resources - that is, a coherent set of
    /// resources that form a graph by following references.
    GraphDefinition,
    /// Represents a defined collection of entities that may be discussed or acted upon collectively
    /// but which are not expected to act collectively and are not formally or legally recognized;
    /// i.e.
    Group,
    /// A guidance response is the formal response to a guidance request, including any output
    /// parameters returned by the evaluation, as well as the description of any proposed actions to
    /// be taken.
    GuidanceResponse,
    /// The details of a healthcare service available at a location.
    HealthcareService,
    /// A text description of the DICOM SOP instances selected in the ImagingManifest; or the reason
    /// for, or significance of, the selection.
    ImagingManifest,
    /// Representation of the content produced in a DICOM imaging study.
    ImagingStudy,
    /// Describes the event of a patient being administered a vaccination or a record of a
    /// vaccination as reported by a patient, a clinician or another party and may include vaccine
    /// reaction information and what vaccination protocol was followed.
    Immunization,
    /// A patient's point-in-time immunization and recommendation (i.e.
    ImmunizationRecommendation,
    /// A set of rules of how FHIR is used to solve a particular problem.
    ImplementationGuide,
    /// The Library resource is a general-purpose container for knowledge asset definitions.
    Library,
    /// Identifies two or more records (resource instances) that are referring to the same
    /// real-world "occurrence".
    Linkage,
    /// A set of information summarized from a list of other resources.
    List,
    /// Details and position information for a physical place where services are provided and
    /// resources and participants may be stored, found, contained or accommodated.
    Location,
    /// The Measure resource provides the definition of a quality measure.
    Measure,
    /// The MeasureReport resource contains the results of evaluating a measure.
    MeasureReport,
    /// A photo, video, or audio recording acquired or used in healthcare.
    Media,
    /// This resource is primarily used for the identification and definition of a medication.
    Medication,
    /// Describes the event of a patient consuming or otherwise being administered a medication.
    MedicationAdministration,
    /// Indicates that a medication product is to be or has been dispensed for a named
    /// person/patient.
    MedicationDispense,
    /// An order or request for both supply of the medication and the instructions for
    /// administration of the medication to a patient.
    MedicationRequest,
    /// A record of a medication that is being consumed by a patient.
    MedicationStatement,
    /// Defines the characteristics of a message that can be shared between systems, including the
    /// type of event that initiates the message, the content to be transmitted and what
    /// response(s), if any, are permitted.
    MessageDefinition,
    /// The header for a message exchange that is either requesting or responding to an action.
    MessageHeader,
    /// A curated namespace that issues unique symbols within that namespace for the identification
    /// of concepts, people, devices, etc.
    NamingSystem,
    /// A request to supply a diet, formula feeding (enteral) or oral nutritional supplement to a
    /// patient/resident.
    NutritionOrder,
    /// Measurements and simple assertions made about a patient, device or other subject.
    Observation,
    /// A formal computable definition of an operation (on the RESTful interface) or a named query
    /// (using the search interaction).
    OperationDefinition,
    /// A collection of error, warning or information messages that result from a system action.
    OperationOutcome,
    /// A formally or informally recognized grouping of people or organizations formed for the
    /// purpose of achieving some form of collective action.
    Organization,
    /// This special resource type is used to represent an operation request and response
    /// (operations.html).
    Parameters,
    /// Demographics and other administrative information about an individual or animal receiving
    /// care or other health-related services.
    Patient,
    /// This resource provides the status of the payment for goods and services rendered, and the
    /// request and response resource references.
    PaymentNotice,
    /// This resource provides payment details and claim references supporting a bulk payment.
    PaymentReconciliation,
    /// Demographics and administrative information about a person independent of a specific
    /// health-related context.
    Person,
    /// This resource allows for the definition of various types of plans as a sharable, consumable,
    /// and executable artifact.
    PlanDefinition,
    /// A person who is directly or indirectly involved in the provisioning of healthcare.
    Practitioner,
    /// A specific set of Roles/Locations/specialties/services that a practitioner may perform at an
    /// organization for a period of time.
    PractitionerRole,
    /// An action that is or was performed on a patient.
    Procedure,
    /// A record of a request for diagnostic investigations, treatments, or operations to be
    /// performed.
    ProcedureRequest,
    /// This resource provides the target, request and response, and action details for an action to
    /// be performed by the target on or about existing resources.
    ProcessRequest,
    /// This resource provides processing status, errors and notes from the processing of a
    /// resource.
    ProcessResponse,
    /// Provenance of a resource is a record that describes entities and processes involved in
    /// producing and delivering or otherwise influencing that resource.
    Provenance,
    /// A structured set of questions intended to guide the collection of answers from end-users.
    Questionnaire,
    /// A structured set of questions and their answers.
    QuestionnaireResponse,
    /// Used to record and send details about a request for referral service or transfer of a
    /// patient to the care of another provider or provider organization.
    ReferralRequest,
    /// Information about a person that is involved in the care for a patient, but who is not the
    /// target of healthcare, nor has a formal responsibility in the care process.
    RelatedPerson,
    /// A group of related requests that can be used to capture intended activities that have
    /// inter-dependencies such as "give this medication after that one".
    RequestGroup,
    /// A process where a researcher or organization plans and then executes a series of steps
    /// intended to increase the field of healthcare-related knowledge.
    ResearchStudy,
    /// A process where a researcher or organization plans and then executes a series of steps
    /// intended to increase the field of healthcare-related knowledge.
    ResearchSubject,
    /// This is the base resource type for everything.
    Resource,
    /// An assessment of the likely outcome(s) for a patient or other subject as well as the
    /// likelihood of each outcome.
    RiskAssessment,
    /// A container for slots of time that may be available for booking appointments.
    Schedule,
    /// A search parameter that defines a named search item that can be used to search/filter on a
    /// resource.
    SearchParameter,
    /// Raw data describing a biological sequence.
    Sequence,
    /// The ServiceDefinition describes a unit of decision support functionality that is made
    /// available as a service, such as immunization modules or drug-drug interaction checking.
    ServiceDefinition,
    /// A slot of time on a schedule that may be available for booking appointments.
    Slot,
    /// A sample to be used for analysis.
    Specimen,
    /// A definition of a FHIR structure.
    StructureDefinition,
    /// A Map of relationships between 2 structures that can be used to transform data.
    StructureMap,
    /// The subscription resource is used to define a push based subscription from a server to
    /// another system.
    Subscription,
    /// A homogeneous material with a definite composition.
    Substance,
    /// Record of delivery of what is supplied.
    SupplyDelivery,
    /// A record of a request for a medication, substance or device used in the healthcare setting.
    SupplyRequest,
    /// A task to be performed.
    Task,
    /// A summary of information based on the results of executing a TestScript.
    TestReport,
    /// A structured set of tests against a FHIR server implementation to determine compliance
    /// against the FHIR specification.
    TestScript,
    /// A value set specifies a set of codes drawn from one or more code systems.
    ValueSet,
    /// An authorization for the supply of glasses and/or contact lenses to a patient.
    VisionPrescription,
}

/// Data types allowed to be used for search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchParamType {
    Number,
    Date,
    String,
    Token,
    Reference,
    Composite,
    Quantity,
    Uri,
}

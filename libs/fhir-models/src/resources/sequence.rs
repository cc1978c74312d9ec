//! Sequence resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Sequence

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Quantity, Reference,
};
use crate::primitives::Decimal;
use crate::resources::Resource;

/// Raw data describing a biological sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    /// Resource type - always "Sequence"
    #[serde(default)]
    pub resource_type: ResourceTag<Sequence>,

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

    /// Unique ID for this particular sequence. This is a FHIR-defined id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// aa | dna | rna.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// Base number of coordinate system (0 for 0-based numbering or coordinates, inclusive start,
    /// exclusive end, 1 for 1-based numbering, inclusive start, inclusive end).
    pub coordinate_system: i32,

    /// Who and/or what this is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// Specimen used for sequencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,

    /// The method for sequencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    /// Who should be responsible for test result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,

    /// The number of copies of the seqeunce of interest. (RNASeq).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// A sequence used as reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq: Option<SequenceReferenceSeq>,

    /// Variant in sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Vec<SequenceVariant>>,

    /// Sequence that was observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_seq: Option<String>,

    /// An set of value as quality of sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Vec<SequenceQuality>>,

    /// Average number of reads representing a given nucleotide in the reconstructed sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_coverage: Option<i32>,

    /// External repository which contains detailed report related with observedSeq in this
    /// resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Vec<SequenceRepository>>,

    /// Pointer to next atomic sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<Vec<Reference>>,
}

/// An experimental feature attribute that defines the quality of the feature in a quantitative way,
/// such as a phred quality score
/// ([SO:0001686](http://www.sequenceontology.org/browser/current_svn/term/SO:0001686)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceQuality {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// INDEL / SNP / Undefined variant.
    #[serde(rename = "type")]
    pub r#type: QualityType,

    /// Standard sequence for comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_sequence: Option<CodeableConcept>,

    /// Start position of the sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,

    /// End position of the sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i32>,

    /// Quality score for the comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Quantity>,

    /// Method to get quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// True positives from the perspective of the truth data.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "truthTP")]
    pub truth_tp: Option<Decimal>,

    /// True positives from the perspective of the query data.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "queryTP")]
    pub query_tp: Option<Decimal>,

    /// False negatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "truthFN")]
    pub truth_fn: Option<Decimal>,

    /// False positives.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "queryFP")]
    pub query_fp: Option<Decimal>,

    /// False positives where the non-REF alleles in the Truth and Query Call Sets match.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "gtFP")]
    pub gt_fp: Option<Decimal>,

    /// Precision of comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<Decimal>,

    /// Recall of comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<Decimal>,

    /// F-score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_score: Option<Decimal>,
}

/// A sequence that is used as a reference to describe variants that are present in a sequence
/// analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceReferenceSeq {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Chromosome containing genetic finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<CodeableConcept>,

    /// The Genome Build used for reference, following GRCh build versions e.g. 'GRCh 37'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genome_build: Option<String>,

    /// Reference identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_id: Option<CodeableConcept>,

    /// A Pointer to another Sequence entity as reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_pointer: Option<Reference>,

    /// A string to represent reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_string: Option<String>,

    /// Directionality of DNA ( +1/-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strand: Option<i32>,

    /// Start position of the window on the reference sequence.
    pub window_start: i32,

    /// End position of the window on the reference sequence.
    pub window_end: i32,
}

/// Configurations of the external repository. The repository shall store target's observedSeq or
/// records related with target's observedSeq.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRepository {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Click and see / RESTful API / Need login to see / RESTful API with authentication / Other
    /// ways to see resource.
    #[serde(rename = "type")]
    pub r#type: RepositoryType,

    /// URI of the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Repository's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Id of the dataset that used to call for dataset in repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,

    /// Id of the variantset that used to call for variantset in repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variantset_id: Option<String>,

    /// Id of the read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readset_id: Option<String>,
}

/// The definition of variant here originates from Sequence ontology
/// ([variant_of](http://www.sequenceontology.org/browser/current_svn/term/variant_of)). This
/// element can represent amino acid or nucleic sequence change(including
/// insertion,deletion,SNP,etc.) It can represent some complex mutation or segment variation with
/// the assist of CIGAR string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceVariant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Start position of the variant on the reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,

    /// End position of the variant on the reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i32>,

    /// Allele that was observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_allele: Option<String>,

    /// Allele in the reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,

    /// Extended CIGAR string for aligning the sequence with reference bases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cigar: Option<String>,

    /// Pointer to observed variant information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_pointer: Option<Reference>,
}

/// Type for quality report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityType {
    Indel,
    Snp,
    Unknown,
}

/// Type for access of external URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryType {
    Directlink,
    Openapi,
    Login,
    Oauth,
    Other,
}

impl_domain_resource!(Sequence);
impl_backbone_element!(SequenceQuality, SequenceReferenceSeq, SequenceRepository, SequenceVariant);

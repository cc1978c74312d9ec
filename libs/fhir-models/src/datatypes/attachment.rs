//! Attached content, notes and signatures

use serde::{Deserialize, Serialize};

use crate::datatypes::{Coding, Extension, Reference};
use crate::primitives::{DateTime, Instant};

/// For referring to data content defined in other formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Mime type of the content, with charset etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Human language of the content (BCP-47)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Data inline, base64ed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Uri where the data can be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of bytes of content (if url provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Hash of the data (sha-1, base64ed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Label to display in place of the data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Date attachment was first created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime>,
}

/// A text note which also contains information about who made the statement and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Individual responsible for the annotation
    #[serde(flatten, with = "crate::choice::optional")]
    pub author: Option<AnnotationAuthor>,

    /// When the annotation was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime>,

    /// The annotation - text content
    pub text: String,
}

choice_type! {
    /// Individual responsible for the annotation
    pub enum AnnotationAuthor("author[x]") {
        Reference(Reference) = "authorReference",
        String(String) = "authorString",
    }
}

/// A digital signature along with supporting context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Indication of the reason the entity signed the object(s)
    #[serde(deserialize_with = "non_empty::type_")]
    #[serde(rename = "type")]
    pub r#type: Vec<Coding>,

    /// When the signature was created
    pub when: Instant,

    /// Who signed
    #[serde(flatten, with = "crate::choice::required")]
    pub who: SignatureWho,

    /// The party represented
    #[serde(flatten, with = "crate::choice::optional")]
    pub on_behalf_of: Option<SignatureOnBehalfOf>,

    /// The technical format of the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The actual signature content (XML DigSig. JWT, picture, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

choice_type! {
    /// Who signed
    pub enum SignatureWho("who[x]") {
        Uri(String) = "whoUri",
        Reference(Reference) = "whoReference",
    }
}

choice_type! {
    /// The party represented
    pub enum SignatureOnBehalfOf("onBehalfOf[x]") {
        Uri(String) = "onBehalfOfUri",
        Reference(Reference) = "onBehalfOfReference",
    }
}

non_empty_lists! {
    type_ = "type",
}

impl_element!(Attachment, Annotation, Signature);

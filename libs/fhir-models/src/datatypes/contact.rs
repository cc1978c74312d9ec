//! Names, addresses and contact details

use serde::{Deserialize, Serialize};

use crate::datatypes::{Extension, Period};

/// A human's name with the ability to identify parts and usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// usual | official | temp | nickname | anonymous | old | maiden
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<NameUse>,

    /// Text representation of the full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Family name (often called 'Surname')
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (not always 'first'). Includes middle names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,

    /// Parts that come before the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,

    /// Parts that come after the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,

    /// Time period when name was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// An address expressed using postal conventions (as opposed to GPS or other location definition
/// formats).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// home | work | temp | old - purpose of this address
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<AddressUse>,

    /// postal | physical | both
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<AddressType>,

    /// Text representation of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Street name, number, direction & P.O. Box etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,

    /// Name of city, town etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// District name (aka county)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Sub-unit of country (abbreviations ok)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code for area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country (e.g. can be ISO 3166 2 or 3 letter code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Time period when address was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Details for all kinds of technology mediated contact points for a person or organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// phone | fax | email | pager | url | sms | other
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,

    /// The actual contact point details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// home | work | temp | old | mobile - purpose of this contact point
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<ContactPointUse>,

    /// Specify preferred order of use (1 = highest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Time period when the contact point was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Specifies contact information for a person or organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Name of an individual to contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact details for individual or organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,
}

/// A contributor to the content of a knowledge asset, including authors, editors, reviewers, and
/// endorsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// author | editor | reviewer | endorser
    #[serde(rename = "type")]
    pub r#type: ContributorType,

    /// Who contributed the content
    pub name: String,

    /// Contact details of the contributor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,
}

/// The type of an address (physical / postal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressType {
    Postal,
    Physical,
    Both,
}

/// The use of an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressUse {
    Home,
    Work,
    Temp,
    Old,
}

/// Telecommunications form for contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

/// Use of contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

/// The type of contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributorType {
    Author,
    Editor,
    Reviewer,
    Endorser,
}

/// The use of a human name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

impl_element!(HumanName, Address, ContactPoint, ContactDetail, Contributor);

//! Core domain types for performance review templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a performance review template.
///
/// Server-assigned and opaque to clients. Unique within a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    /// Creates a template ID from a string.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of review a template drives.
///
/// The wire tag is an open set; tags this client does not recognize are
/// carried verbatim rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateType {
    /// 360-degree feedback collected from peers, reports, and managers.
    ThreeSixty,
    /// Self assessment written by the reviewee.
    SelfReview,
    /// Review written by the reviewee's manager.
    Manager,
    /// A tag this client does not recognize.
    Other(String),
}

impl From<String> for TemplateType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "360" => Self::ThreeSixty,
            "self" => Self::SelfReview,
            "manager" => Self::Manager,
            _ => Self::Other(tag),
        }
    }
}

impl From<TemplateType> for String {
    fn from(template_type: TemplateType) -> Self {
        template_type.to_string()
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreeSixty => write!(f, "360"),
            Self::SelfReview => write!(f, "self"),
            Self::Manager => write!(f, "manager"),
            Self::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// How reviewers score a template.
///
/// Listings only display the scale's type tag; the full descriptor lives
/// with the template detail, outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    /// Scale category identifier (e.g. "numeric", "descriptive").
    #[serde(default, rename = "type")]
    pub scale_type: Option<String>,
}

/// Summary of a template as returned by the listing endpoint.
///
/// The wire form is camelCase JSON with the identifier under `_id`. Every
/// display field tolerates absence so partially filled templates still
/// render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: TemplateId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Review category tag.
    #[serde(default)]
    pub template_type: Option<TemplateType>,
    /// Scoring descriptor; only its type tag is shown in listings.
    #[serde(default)]
    pub rating_scale: Option<RatingScale>,
    /// Whether the template is live. Absent counts as active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TemplateSummary {
    /// Whether this template is visible to roles restricted to active
    /// templates. Only an explicit `false` hides it.
    pub fn is_effectively_active(&self) -> bool {
        self.is_active != Some(false)
    }

    /// The rating-scale type tag, blank when absent.
    pub fn scale_type(&self) -> &str {
        self.rating_scale
            .as_ref()
            .and_then(|scale| scale.scale_type.as_deref())
            .unwrap_or("")
    }
}

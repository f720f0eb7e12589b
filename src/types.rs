//! Shared types for the content repository.
//!
//! [`ContentItem`] is the validated, in-memory form of one document and is
//! what every query returns. It is serialized with camelCase keys so the
//! JSON output matches the metadata key names authors write in frontmatter
//! (`publishedDate`, `imageUrl`, `seoTitle`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named content collection. Closed set, known at build time.
///
/// The label doubles as the directory name under the content root:
/// `content/blog/`, `content/case-studies/`, and so on. It is supplied by
/// the caller and never inferred from document contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Blog,
    Portfolio,
    CaseStudies,
    Videos,
    Podcasts,
}

impl ContentType {
    /// Every known content type, in display order.
    pub const ALL: &'static [ContentType] = &[
        ContentType::Blog,
        ContentType::Portfolio,
        ContentType::CaseStudies,
        ContentType::Videos,
        ContentType::Podcasts,
    ];

    /// Directory name under the content root.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Portfolio => "portfolio",
            ContentType::CaseStudies => "case-studies",
            ContentType::Videos => "videos",
            ContentType::Podcasts => "podcasts",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ContentType::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown content type '{s}' (known: {})", known.join(", "))
            })
    }
}

/// One entry of a document's image gallery.
///
/// `url` and `alt` are both required; an entry missing either is dropped
/// during validation rather than invalidating the whole gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// The validated, typed representation of one content document.
///
/// Construction rules (see [`crate::validate`]):
/// - `slug` comes from filesystem naming, never from metadata.
/// - `title` falls back to the slug when metadata omits it.
/// - `date` reads `date` then `publishedDate`; empty string if neither.
/// - Optional scalars are present only when the raw value has exactly the
///   expected type; malformed values degrade to absent, never to an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Sortable calendar date string. Empty when the document has none.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Raw body text, everything after the frontmatter block. Not rendered.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// `None` both when the field is absent and when no entry survived
    /// validation, so presence works as a boolean gate for callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub seo_keywords: Vec<String>,
}

//! Metadata validation and normalization.
//!
//! Frontmatter is author-controlled free text, so every field is treated
//! as potentially malformed. The rule is parse-or-absent, applied per
//! field: a scalar of the wrong type degrades to "field absent", a
//! list-shaped field drops bad elements individually, and nothing in here
//! ever returns an error. One broken field in one document must never
//! keep the rest of the site from rendering; the cost is silent data loss
//! on bad input, which a separate lint step surfaces to authors.
//!
//! Scalars get no type coercion: `featured: 1` is not a boolean and
//! `date: 2024` (a YAML integer) is not a date string. The only coercion
//! anywhere is the gallery caption, which accepts any YAML scalar.

use crate::types::{ContentItem, ContentType, GalleryItem};
use serde_yaml::Value;
use tracing::warn;

/// Build a [`ContentItem`] from parsed metadata and body text.
///
/// `slug` and `content_type` come from the filesystem and the caller, never
/// from metadata. `meta` of `None` behaves like an empty mapping.
pub fn normalize(
    content_type: ContentType,
    slug: &str,
    meta: Option<&Value>,
    body: &str,
) -> ContentItem {
    let date = first_non_empty(meta, &["date", "publishedDate"]);
    let excerpt = first_non_empty(meta, &["excerpt", "description"]);

    ContentItem {
        slug: slug.to_string(),
        title: string(meta, "title")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| slug.to_string()),
        content_type,
        date,
        published_date: string(meta, "publishedDate"),
        excerpt,
        tags: string_list(meta, "tags"),
        content: body.to_string(),
        author: string(meta, "author"),
        image_url: string(meta, "imageUrl"),
        image_alt: string(meta, "imageAlt"),
        category: string(meta, "category"),
        featured: boolean(meta, "featured"),
        featured_image: string(meta, "featuredImage"),
        gallery: gallery(meta, slug),
        seo_title: string(meta, "seoTitle"),
        seo_description: string(meta, "seoDescription"),
        seo_keywords: string_list(meta, "seoKeywords"),
    }
}

fn get<'a>(meta: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    meta?.get(key)
}

/// Optional scalar: present only when the raw value is a string.
fn string(meta: Option<&Value>, key: &str) -> Option<String> {
    match get(meta, key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Optional flag: present only when the raw value is strictly boolean.
fn boolean(meta: Option<&Value>, key: &str) -> Option<bool> {
    match get(meta, key) {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    }
}

/// First key whose value is a non-empty string; empty string when none is.
fn first_non_empty(meta: Option<&Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| string(meta, key).filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Lenient string list: non-list input is an empty list, and each element
/// is kept only when it is a non-empty string. Order preserved, no dedup.
fn string_list(meta: Option<&Value>, key: &str) -> Vec<String> {
    get(meta, key)
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Gallery caption: any YAML scalar stringifies, everything else is absent.
fn caption(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Validate the gallery list element by element.
///
/// An entry without a non-empty `url` and `alt` is dropped with a warning.
/// Zero surviving entries (or no list at all) is "no gallery", not an
/// empty list, so presence works as a boolean gate downstream.
fn gallery(meta: Option<&Value>, slug: &str) -> Option<Vec<GalleryItem>> {
    let entries = get(meta, "gallery").and_then(Value::as_sequence)?;

    let mut items = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let url = entry.get("url").and_then(Value::as_str).unwrap_or("");
        let alt = entry.get("alt").and_then(Value::as_str).unwrap_or("");
        if url.is_empty() || alt.is_empty() {
            warn!("{slug}: dropping gallery entry {i} (missing url or alt)");
            continue;
        }
        items.push(GalleryItem {
            url: url.to_string(),
            alt: alt.to_string(),
            caption: caption(entry.get("caption")),
        });
    }

    if items.is_empty() { None } else { Some(items) }
}

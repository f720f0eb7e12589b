//! Public query API: list a collection, fetch one document.
//!
//! Both operations compose the same pipeline — resolve the path, split
//! frontmatter from body, normalize metadata — and re-read the filesystem
//! on every call. There is no cache and no shared state: call volume is
//! bounded to "once per generated page", and cache-free reads mean the
//! result always reflects the current tree. Callers wanting caching must
//! wrap this layer externally; folding one in here would break that
//! contract.
//!
//! "Not found" and "malformed" are never errors: a missing collection
//! lists as empty, a missing slug fetches as `None`, and malformed
//! metadata degrades field by field. Only genuine I/O failures
//! (permissions, disk errors) surface as [`StoreError`].

use crate::frontmatter;
use crate::resolve;
use crate::types::{ContentItem, ContentType};
use crate::validate;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// All items of a content type, newest first.
///
/// Sorting compares `date` strings lexicographically (descending), which
/// is correct only for zero-padded ISO-like dates — a deliberate policy,
/// not a calendar parse. Items without a date sort last; equal dates keep
/// slug order.
pub fn list_content(root: &Path, ty: ContentType) -> Result<Vec<ContentItem>, StoreError> {
    let mut items = Vec::new();
    for located in resolve::resolve_all(root, ty)? {
        if let Some(item) = load(ty, &located.slug, &located.path)? {
            items.push(item);
        }
    }
    // resolve_all yields slugs sorted; the stable sort preserves that for
    // equal dates.
    items.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(items)
}

/// Fetch a single item, or `None` when no generation holds the slug.
pub fn get_content(
    root: &Path,
    ty: ContentType,
    slug: &str,
) -> Result<Option<ContentItem>, StoreError> {
    match resolve::resolve_one(root, ty, slug) {
        Some(path) => load(ty, slug, &path),
        None => Ok(None),
    }
}

/// Read, parse, and normalize one resolved document.
///
/// A file that vanished between resolution and read counts as "no item",
/// same as a resolver miss.
fn load(ty: ContentType, slug: &str, path: &Path) -> Result<Option<ContentItem>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let doc = frontmatter::parse(&raw);
    Ok(Some(validate::normalize(ty, slug, doc.meta.as_ref(), doc.body)))
}

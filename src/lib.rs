//! # Copydesk
//!
//! The content repository behind a personal marketing site (blog,
//! portfolio, case studies, videos, podcasts). Your filesystem is the
//! database: each content type is a directory of markdown documents with
//! YAML frontmatter, and every page render queries this layer for "all
//! items of a type" or "one item by slug".
//!
//! # Architecture: Three-Stage Read Pipeline
//!
//! Every query runs the same pipeline, with each stage a leaf the next
//! composes:
//!
//! ```text
//! 1. Resolve    (type, slug)  →  file path       (across layout generations)
//! 2. Parse      raw text      →  metadata + body (frontmatter split)
//! 3. Validate   metadata      →  ContentItem     (field-by-field, lenient)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | Locates documents across three on-disk layout generations, newest preferred |
//! | [`frontmatter`] | Splits raw document text into a YAML metadata block and a verbatim body |
//! | [`validate`] | Normalizes untyped metadata into the strict [`types::ContentItem`] schema |
//! | [`store`] | Public query API — `list_content` and `get_content` compose the pipeline |
//! | [`types`] | Shared types: `ContentType`, `ContentItem`, `GalleryItem` |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — information-first inventory display |
//!
//! # Design Decisions
//!
//! ## Layout Generations as Strategies
//!
//! The content tree has been migrated twice and collections may hold a mix
//! of generations indefinitely. Each generation is one [`resolve::Layout`]
//! strategy tried in fixed priority order; migrating incrementally needs
//! no flag day, and a future generation is one appended strategy.
//!
//! ## Parse-or-Absent Validation
//!
//! Frontmatter is author-written free text, so validation is per-field,
//! never per-document: a malformed scalar degrades to "field absent", a
//! malformed list element is dropped individually, and only a missing
//! backing file yields "no item". One typo in one document must never
//! blank out a listing page. The flip side — silent data loss on bad
//! input — is acceptable for a low-stakes authoring workflow and is left
//! to a separate lint step to surface.
//!
//! ## Cache-Free Reads
//!
//! Queries re-read the filesystem every call. Call volume is bounded to
//! "once per generated page at build time", and cache-free reads mean the
//! result always reflects the tree as it is on disk. Any caching belongs
//! in an explicit layer wrapped around this one, never folded into it.
//!
//! ## String-Sorted Dates
//!
//! Listing order compares `date` strings lexicographically, which is
//! correct only for zero-padded ISO-like dates. This is a policy the
//! content authoring convention upholds, not a calendar parse; undated
//! documents sort last.

pub mod config;
pub mod frontmatter;
pub mod output;
pub mod resolve;
pub mod store;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary line
//! for every document is its semantic identity — positional index and
//! title — with filesystem paths shown as secondary context via indented
//! `Source:` lines. The inventory stays readable while users can still
//! trace an item back to its backing file and layout generation.
//!
//! ```text
//! blog (3 items)
//!     001 Shipping the Redesign
//!         Date: 2024-03-01
//!         Tags: design, launch
//!     002 Hello World
//!         Date: 2024-01-01
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::resolve::Layout;
use crate::types::{ContentItem, ContentType};

/// One document in a check inventory: the validated item plus where its
/// backing file lives and which layout generation holds it.
pub struct CheckEntry {
    pub item: ContentItem,
    pub source: String,
    pub layout: Layout,
}

/// Check results for one content type.
pub struct CheckSection {
    pub ty: ContentType,
    pub entries: Vec<CheckEntry>,
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Context lines shared by list and single-item display.
fn item_context(item: &ContentItem, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if !item.date.is_empty() {
        lines.push(format!("{indent}Date: {}", item.date));
    }
    if !item.tags.is_empty() {
        lines.push(format!("{indent}Tags: {}", item.tags.join(", ")));
    }
    if !item.excerpt.is_empty() {
        lines.push(format!("{indent}Excerpt: {}", truncate(&item.excerpt, 60)));
    }
    if let Some(gallery) = &item.gallery {
        lines.push(format!("{indent}Gallery: {} images", gallery.len()));
    }
    lines
}

// ============================================================================
// list
// ============================================================================

/// Format a listing of one content type, newest first.
pub fn format_list_output(ty: ContentType, items: &[ContentItem]) -> Vec<String> {
    let mut lines = vec![format!("{ty} ({} items)", items.len())];
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), item.title));
        lines.extend(item_context(item, "        "));
    }
    lines
}

/// Print a listing to stdout.
pub fn print_list_output(ty: ContentType, items: &[ContentItem]) {
    for line in format_list_output(ty, items) {
        println!("{line}");
    }
}

// ============================================================================
// get
// ============================================================================

/// Format a single fetched item.
pub fn format_item_output(item: &ContentItem) -> Vec<String> {
    let mut lines = vec![item.title.clone()];
    lines.push(format!("    Slug: {}", item.slug));
    lines.push(format!("    Type: {}", item.content_type));
    lines.extend(item_context(item, "    "));
    if let Some(author) = &item.author {
        lines.push(format!("    Author: {author}"));
    }
    lines.push(format!("    Body: {} chars", item.content.len()));
    lines
}

/// Print a single item to stdout.
pub fn print_item_output(item: &ContentItem) {
    for line in format_item_output(item) {
        println!("{line}");
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the full-site inventory, one section per content type.
///
/// Every document shows its source path and layout generation, and the
/// trailing summary counts documents still on legacy layouts — the signal
/// a half-finished migration leaves behind.
pub fn format_check_output(sections: &[CheckSection]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total = 0;
    let mut legacy = 0;

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({} documents)", section.ty, section.entries.len()));
        for (j, entry) in section.entries.iter().enumerate() {
            total += 1;
            if entry.layout != Layout::Current {
                legacy += 1;
            }
            lines.push(format!("    {} {}", format_index(j + 1), entry.item.title));
            lines.push(format!(
                "        Source: {} ({})",
                entry.source,
                entry.layout.label()
            ));
            if !entry.item.date.is_empty() {
                lines.push(format!("        Date: {}", entry.item.date));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("{total} documents across {} types", sections.len()));
    if legacy > 0 {
        lines.push(format!("{legacy} documents still on legacy layouts"));
    }
    lines
}

/// Print the inventory to stdout.
pub fn print_check_output(sections: &[CheckSection]) {
    for line in format_check_output(sections) {
        println!("{line}");
    }
}

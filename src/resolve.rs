//! Document location across on-disk layout generations.
//!
//! The content tree has been migrated twice, and collections are allowed to
//! hold a mix of generations at once. For a content type `T` and slug `S`,
//! a document may live at any of:
//!
//! ```text
//! <root>/T/S/markdown/post.<ext>   (current)
//! <root>/T/S.<ext>                 (legacy: flat)
//! <root>/T/S/post.<ext>            (legacy: nested)
//! ```
//!
//! with `<ext>` being `md` or `mdx`. Each generation is one [`Layout`]
//! strategy; lookups try them in fixed priority order and the first hit
//! wins. Adding a future generation means appending one strategy, not
//! touching the existing ones.
//!
//! A missing file or type directory is the expected case for a
//! half-populated site and is reported as `None` / an empty list. Only
//! I/O errors other than "not found" propagate.

use crate::types::ContentType;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recognized markup extensions, in preference order.
pub const EXTENSIONS: &[&str] = &["md", "mdx"];

/// One on-disk layout generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `T/S/markdown/post.<ext>` — the layout new content is written in.
    Current,
    /// `T/S.<ext>` — original flat files, one per document.
    FlatLegacy,
    /// `T/S/post.<ext>` — the intermediate per-document directory.
    NestedLegacy,
}

/// All layouts in lookup priority order. First match wins.
pub const LAYOUTS: &[Layout] = &[Layout::Current, Layout::FlatLegacy, Layout::NestedLegacy];

impl Layout {
    /// Short label for CLI display.
    pub fn label(&self) -> &'static str {
        match self {
            Layout::Current => "current",
            Layout::FlatLegacy => "flat-legacy",
            Layout::NestedLegacy => "nested-legacy",
        }
    }

    /// Position in [`LAYOUTS`]; lower is preferred.
    fn priority(&self) -> usize {
        LAYOUTS.iter().position(|l| l == self).unwrap_or(usize::MAX)
    }

    /// The path this layout would use for `(type, slug)` with `ext`.
    fn candidate(&self, root: &Path, ty: ContentType, slug: &str, ext: &str) -> PathBuf {
        let type_dir = root.join(ty.as_str());
        match self {
            Layout::Current => type_dir.join(slug).join("markdown").join(format!("post.{ext}")),
            Layout::FlatLegacy => type_dir.join(format!("{slug}.{ext}")),
            Layout::NestedLegacy => type_dir.join(slug).join(format!("post.{ext}")),
        }
    }

    /// Locate an existing document in this layout, trying each extension.
    pub fn locate(&self, root: &Path, ty: ContentType, slug: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.candidate(root, ty, slug, ext))
            .find(|p| p.is_file())
    }
}

/// A slug resolved to its backing file and the generation that holds it.
#[derive(Debug, Clone)]
pub struct Located {
    pub slug: String,
    pub path: PathBuf,
    pub layout: Layout,
}

/// Resolve one `(type, slug)` pair to an existing file path.
///
/// Tries every layout generation in priority order and short-circuits on
/// the first hit. `None` means "content not found", not an error.
pub fn resolve_one(root: &Path, ty: ContentType, slug: &str) -> Option<PathBuf> {
    LAYOUTS.iter().find_map(|layout| layout.locate(root, ty, slug))
}

/// Enumerate every slug present under a content type, across generations.
///
/// Direct children of `<root>/T/` are inspected once each:
/// - a file with a recognized extension contributes its stem as a
///   flat-legacy slug;
/// - a directory contributes its name if the current layout (or, failing
///   that, the nested legacy layout) holds a document inside it;
/// - anything else contributes nothing.
///
/// Each slug maps to exactly one path; when generations coexist the
/// higher-priority one wins. Results are sorted by slug so enumeration is
/// deterministic regardless of `read_dir` order. A missing type directory
/// yields an empty list.
pub fn resolve_all(root: &Path, ty: ContentType) -> io::Result<Vec<Located>> {
    let type_dir = root.join(ty.as_str());
    let entries = match fs::read_dir(&type_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    // slug → (extension preference, located doc); BTreeMap keeps slugs sorted
    let mut found: BTreeMap<String, (usize, Located)> = BTreeMap::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            for layout in [Layout::Current, Layout::NestedLegacy] {
                if let Some(doc_path) = layout.locate(root, ty, &name) {
                    insert_preferred(&mut found, &name, doc_path, layout, 0);
                    break;
                }
            }
        } else if path.is_file() {
            let Some(ext_rank) = recognized_extension(&path) else {
                continue;
            };
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let slug = stem.to_string_lossy().into_owned();
            insert_preferred(&mut found, &slug, path, Layout::FlatLegacy, ext_rank);
        }
    }

    Ok(found.into_values().map(|(_, located)| located).collect())
}

/// Rank of a file's extension in [`EXTENSIONS`], or `None` if unrecognized.
///
/// The match is exact: per-slug lookup only probes the literal `.md` and
/// `.mdx` candidates, and enumeration must never surface a slug that
/// lookup cannot find again.
fn recognized_extension(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    EXTENSIONS.iter().position(|e| *e == ext)
}

/// Record a slug, keeping the highest-priority (layout, extension) match.
fn insert_preferred(
    found: &mut BTreeMap<String, (usize, Located)>,
    slug: &str,
    path: PathBuf,
    layout: Layout,
    ext_rank: usize,
) {
    let rank = (layout.priority(), ext_rank);
    let keep_existing = found
        .get(slug)
        .is_some_and(|(old_ext, old)| (old.layout.priority(), *old_ext) <= rank);
    if !keep_existing {
        found.insert(
            slug.to_string(),
            (
                ext_rank,
                Located {
                    slug: slug.to_string(),
                    path,
                    layout,
                },
            ),
        );
    }
}

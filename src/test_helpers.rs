//! Shared test utilities for the copydesk test suite.
//!
//! Fixture writers that lay documents out in each of the three on-disk
//! generations, so resolver and store tests can build mixed-generation
//! trees in a tempdir without repeating path arithmetic.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_current(tmp.path(), "blog", "hello", "md", "---\ntitle: Hi\n---\nBody");
//! write_flat(tmp.path(), "blog", "old-post", "md", "legacy body");
//! ```

use std::fs;
use std::path::Path;

/// Write a document in the current layout: `T/S/markdown/post.<ext>`.
pub fn write_current(root: &Path, ty: &str, slug: &str, ext: &str, contents: &str) {
    let dir = root.join(ty).join(slug).join("markdown");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("post.{ext}")), contents).unwrap();
}

/// Write a document in the flat legacy layout: `T/S.<ext>`.
pub fn write_flat(root: &Path, ty: &str, slug: &str, ext: &str, contents: &str) {
    let dir = root.join(ty);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{slug}.{ext}")), contents).unwrap();
}

/// Write a document in the nested legacy layout: `T/S/post.<ext>`.
pub fn write_nested(root: &Path, ty: &str, slug: &str, ext: &str, contents: &str) {
    let dir = root.join(ty).join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("post.{ext}")), contents).unwrap();
}

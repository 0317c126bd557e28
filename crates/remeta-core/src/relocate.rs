//! Marker scanning and the in-place rewrite
//!
//! Help books come out of the generator with the real page description in
//! an uppercase `<META NAME="DESCRIPTION" ...>` line and a lowercase
//! placeholder `<meta name="description" content="...">` line elsewhere in
//! the head. The rewrite copies the uppercase line over the placeholder,
//! blanks the uppercase line's content, and normalizes the content-type
//! line to a canonical UTF-8 declaration.

use crate::document::Document;
use crate::error::RemetaResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of the relocation target: the lowercase placeholder line
pub const DESCRIPTION_TARGET_PREFIX: &str = "<meta name=\"description\" content=\"";

/// Prefix of the relocation source: the uppercase line holding the real
/// description
pub const DESCRIPTION_SOURCE_PREFIX: &str = "<META NAME=\"DESCRIPTION\"";

/// Prefix of the content-type line to normalize
pub const CONTENT_TYPE_PREFIX: &str = "<meta http-equiv=\"Content-Type\"";

/// Canonical replacement for any matched content-type line
pub const CONTENT_TYPE_CANONICAL: &str =
    "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n";

/// Knobs for one rewrite run
#[derive(Debug, Clone, Copy)]
pub struct RewriteOptions {
    /// Replace the first content-type line with [`CONTENT_TYPE_CANONICAL`]
    pub normalize_charset: bool,
    /// Rewrite files byte-for-byte even when no edit applied. When false,
    /// an untouched file is never opened for writing.
    pub rewrite_unchanged: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            normalize_charset: true,
            rewrite_unchanged: true,
        }
    }
}

impl RewriteOptions {
    /// Only relocate the description; leave charset lines alone and skip
    /// rewriting files that needed no edit
    pub fn description_only() -> Self {
        Self {
            normalize_charset: false,
            rewrite_unchanged: false,
        }
    }
}

/// What happened to one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// The uppercase description was copied over the lowercase placeholder
    pub relocated: bool,
    /// The content-type line was replaced with the canonical declaration
    pub charset_normalized: bool,
    /// The file was written back (possibly byte-identical)
    pub rewritten: bool,
}

/// First-match line indices for the three marker prefixes
#[derive(Debug, Default, Clone, Copy)]
struct MarkerIndices {
    target: Option<usize>,
    source: Option<usize>,
    content_type: Option<usize>,
}

/// Single forward scan capturing, per prefix, the index of the first
/// matching line
fn scan(lines: &[String]) -> MarkerIndices {
    let mut markers = MarkerIndices::default();
    for (index, line) in lines.iter().enumerate() {
        if markers.target.is_none() && line.starts_with(DESCRIPTION_TARGET_PREFIX) {
            markers.target = Some(index);
        }
        if markers.source.is_none() && line.starts_with(DESCRIPTION_SOURCE_PREFIX) {
            markers.source = Some(index);
        }
        if markers.content_type.is_none() && line.starts_with(CONTENT_TYPE_PREFIX) {
            markers.content_type = Some(index);
        }
    }
    markers
}

/// Filter an index down to one the legacy decision logic will act on. The
/// original tool conflated "not found" with "found on the first line", so
/// a marker on line 0 is deliberately not usable (see DESIGN.md).
fn usable(index: Option<usize>) -> Option<usize> {
    index.filter(|&i| i > 0)
}

/// Rewrite a single file in place per `options`
pub fn process_file(path: &Path, options: RewriteOptions) -> RemetaResult<FileReport> {
    let mut doc = Document::load(path)?;
    let markers = scan(doc.lines());
    debug!(
        path = %path.display(),
        target_index = ?markers.target,
        source_index = ?markers.source,
        content_type_index = ?markers.content_type,
        "Scanned marker lines"
    );

    let mut relocated = false;
    if let (Some(target), Some(source)) = (usable(markers.target), usable(markers.source)) {
        let description = doc.lines()[source].clone();
        doc.replace_line(target, description);
        doc.blank_line(source);
        relocated = true;
    }

    let mut charset_normalized = false;
    if options.normalize_charset {
        if let Some(index) = usable(markers.content_type) {
            doc.replace_line(index, CONTENT_TYPE_CANONICAL.to_owned());
            charset_normalized = true;
        }
    }

    let rewritten = relocated || charset_normalized || options.rewrite_unchanged;
    if rewritten {
        doc.write_back()?;
    }

    info!(
        path = %path.display(),
        relocated,
        charset_normalized,
        rewritten,
        "Processed file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        relocated,
        charset_normalized,
        rewritten,
    })
}

/// Rewrite each file in `paths` in order. Fail-fast: the first error
/// aborts the batch and later paths are not touched.
pub fn process(paths: &[PathBuf], options: RewriteOptions) -> RemetaResult<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        reports.push(process_file(path, options)?);
    }
    Ok(reports)
}

//! remeta-core: relocation engine for generated HTML help files
//!
//! Rewrites help pages in place: copies the description out of the
//! generator's uppercase `<META NAME="DESCRIPTION" ...>` line into the
//! lowercase placeholder line, and normalizes the content-type line to a
//! canonical UTF-8 declaration. Strictly line-oriented; no HTML parsing
//! beyond literal prefix matching.

pub mod document;
pub mod error;
pub mod relocate;

pub use document::Document;
pub use error::{RemetaError, RemetaResult};
pub use relocate::{
    process, process_file, FileReport, RewriteOptions, CONTENT_TYPE_CANONICAL,
    CONTENT_TYPE_PREFIX, DESCRIPTION_SOURCE_PREFIX, DESCRIPTION_TARGET_PREFIX,
};

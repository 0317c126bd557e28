//! Line-oriented document model with terminator preservation
//!
//! A [`Document`] is the ordered sequence of lines of one file, each line
//! keeping its original terminator (`\n` or `\r\n`). A final unterminated
//! line is kept without one. Writing the document back truncates the file
//! and emits the lines verbatim, so an untouched document round-trips
//! byte-for-byte.

use crate::error::{RemetaError, RemetaResult};
use std::fs;
use std::path::{Path, PathBuf};

/// One file held in memory as lines with their terminators
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Read a file into a document. The file must be valid UTF-8.
    pub fn load(path: &Path) -> RemetaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| RemetaError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: split_lines(&content),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the line at `index` wholesale, terminator included
    pub fn replace_line(&mut self, index: usize, line: String) {
        self.lines[index] = line;
    }

    /// Empty the line at `index` while keeping its terminator, so the
    /// line's slot survives and the document's line count is unchanged.
    pub fn blank_line(&mut self, index: usize) {
        let terminator = line_terminator(&self.lines[index]).to_owned();
        self.lines[index] = terminator;
    }

    /// Write the document back to its path, truncating prior contents
    pub fn write_back(&self) -> RemetaResult<()> {
        fs::write(&self.path, self.lines.concat()).map_err(|e| RemetaError::io(&self.path, e))
    }
}

/// Split file content into lines, each retaining its terminator
fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// The terminator of a line: `"\r\n"`, `"\n"`, or `""` for a final
/// unterminated line
fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

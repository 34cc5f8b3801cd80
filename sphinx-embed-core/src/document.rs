//! Line-oriented view of an HTML page.

use crate::error::{Result, RewriteError};
use crate::frontmatter::Frontmatter;
use std::fs;
use std::path::Path;

/// An ordered sequence of lines read from a single file
///
/// Lines are split on `\n` only. A trailing `\r` stays part of the line, so a
/// line no rule touches is written back byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self::default();
        }

        let trailing_newline = content.ends_with('\n');
        let body = if trailing_newline {
            &content[..content.len() - 1]
        } else {
            content
        };

        Self {
            lines: body.split('\n').map(str::to_string).collect(),
            trailing_newline,
        }
    }

    /// Render the header followed by every line
    pub fn render_with_header(&self, header: &Frontmatter) -> String {
        let mut out = header.to_string();
        out.push_str(&self.lines.join("\n"));
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

/// Replace the contents of `path` with `content`
///
/// The file is opened, truncated, written and closed in one call, after the
/// caller has finished computing `content`.
pub fn write_page(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

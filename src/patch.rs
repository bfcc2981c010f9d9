use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::file::{self, FileError};
use crate::pattern::Pattern;
use crate::position::{Position, Span, span_to_positions};

/// One removed occurrence, located in the original content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSite {
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

/// Result of stripping a pattern from some text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Text with every occurrence removed
    pub content: String,
    /// Removed occurrences in file order
    pub sites: Vec<MatchSite>,
}

impl Removal {
    pub fn match_count(&self) -> usize {
        self.sites.len()
    }

    /// Bytes removed, as a non-positive shift
    pub fn byte_shift(&self) -> i64 {
        -(self.sites.iter().map(|s| s.span.len()).sum::<usize>() as i64)
    }
}

/// Options for [`patch_file`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Report matches without writing the file
    pub dry_run: bool,
}

/// What a patch run did to the target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: String,
    pub sites: Vec<MatchSite>,
    pub checksum_before: String,
    pub checksum_after: String,
    pub byte_shift: i64,
    /// False only for dry runs
    pub written: bool,
}

impl PatchOutcome {
    pub fn match_count(&self) -> usize {
        self.sites.len()
    }
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error(transparent)]
    File(#[from] FileError),
}

/// Remove every occurrence of `pattern` from `content`
///
/// Matching is global and non-overlapping, scanning left to right. When
/// nothing matches the returned content equals the input.
pub fn strip(content: &str, pattern: &Pattern) -> Removal {
    let ranges = pattern.find_all(content);

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut sites = Vec::with_capacity(ranges.len());

    for range in ranges {
        out.push_str(&content[cursor..range.start]);
        cursor = range.end;
        let span = Span::from(range);
        let (start, end) = span_to_positions(content, span);
        sites.push(MatchSite { span, start, end });
    }
    out.push_str(&content[cursor..]);

    Removal {
        content: out,
        sites,
    }
}

/// Read `path`, strip `pattern` from it and write the result back
///
/// Zero matches is not an error: the file is rewritten with identical
/// content. A missing or undecodable file fails before anything is written.
pub fn patch_file<P: AsRef<Path>>(
    path: P,
    pattern: &Pattern,
    options: PatchOptions,
) -> Result<PatchOutcome, PatchError> {
    let original = file::read_file(&path)?;

    let removal = strip(&original.content, pattern);
    let byte_shift = removal.byte_shift();

    for site in &removal.sites {
        tracing::info!(
            path = %original.path,
            line = site.start.line,
            bytes = site.span.len(),
            "removing match"
        );
    }
    if removal.sites.is_empty() {
        tracing::warn!(
            path = %original.path,
            kind = pattern.kind(),
            "pattern not found, content unchanged"
        );
    }

    let checksum_after = file::checksum(&removal.content);

    if options.dry_run {
        tracing::debug!(path = %original.path, "dry run, skipping write");
    } else {
        file::write_file(&path, &removal.content)?;
    }

    Ok(PatchOutcome {
        path: original.path,
        sites: removal.sites,
        checksum_before: original.checksum,
        checksum_after,
        byte_shift,
        written: !options.dry_run,
    })
}

//! Statistics file line format
//!
//! Each line of a `.txt` statistics file holds whitespace-separated tokens.
//! Digit-only tokens are counts; anything else (labels, separators) is
//! ignored. The first four counts are, in order:
//!
//! ```text
//! true_negative  false_positive  true_positive  false_negative  [reference_size]
//! ```
//!
//! The optional fifth count is the reference set size; it is carried but
//! not used by the metrics. Further counts are ignored.

use crate::metrics::{self, MetricError};
use serde::Serialize;
use thiserror::Error;

/// Minimum number of counts a line must carry
pub const REQUIRED_FIELDS: usize = 4;

/// Errors raised while parsing a statistics line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 4 counts (tn fp tp fn), found {found}")]
    TooFewFields { found: usize },

    #[error("count out of range: {token}")]
    InvalidCount { token: String },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// One confusion-matrix record from a statistics file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    pub true_negative: u64,
    pub false_positive: u64,
    pub true_positive: u64,
    pub false_negative: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_size: Option<u64>,
}

fn is_count(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl StatRecord {
    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let counts = line
            .split_whitespace()
            .filter(|t| is_count(t))
            .take(REQUIRED_FIELDS + 1)
            .map(|t| {
                t.parse::<u64>().map_err(|_| ParseError::InvalidCount {
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if counts.len() < REQUIRED_FIELDS {
            return Err(ParseError::TooFewFields {
                found: counts.len(),
            });
        }

        Ok(Some(Self {
            true_negative: counts[0],
            false_positive: counts[1],
            true_positive: counts[2],
            false_negative: counts[3],
            reference_size: counts.get(REQUIRED_FIELDS).copied(),
        }))
    }

    pub fn specificity(&self) -> Result<f64, MetricError> {
        metrics::specificity(self.true_negative, self.false_positive)
    }

    pub fn sensitivity(&self) -> Result<f64, MetricError> {
        metrics::sensitivity(self.true_positive, self.false_negative)
    }
}

/// Records of a statistics file paired with their 1-based line numbers.
///
/// Blank lines are skipped; a malformed line yields `ParseError::AtLine`.
pub fn numbered_records(
    contents: &str,
) -> impl Iterator<Item = Result<(usize, StatRecord), ParseError>> + '_ {
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match StatRecord::parse_line(line) {
            Ok(Some(record)) => Some(Ok((idx + 1, record))),
            Ok(None) => None,
            Err(e) => Some(Err(ParseError::AtLine {
                line: idx + 1,
                source: Box::new(e),
            })),
        })
}

/// Parse the full contents of a statistics file.
pub fn parse_stats(contents: &str) -> Result<Vec<StatRecord>, ParseError> {
    numbered_records(contents)
        .map(|r| r.map(|(_, record)| record))
        .collect()
}

//! Dotted version numbers.
//!
//! A version string such as `2.10.3` is a period-separated list of
//! non-negative integer segments. Comparison is numeric and segment-wise,
//! with absent trailing segments treated as zero, so `1.2` and `1.2.0`
//! compare equal even though the ledger keeps them as distinct strings.
//!
//! Segments are held as decimal digit strings with leading zeros stripped,
//! so arbitrarily long segments compare correctly. Only the patch segment
//! is converted to an integer, and only when incrementing.

use crate::error::{Error, Result};
use crate::schema::INCREMENT_COMPONENTS;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed dotted version.
#[derive(Debug, Clone)]
pub struct VersionNumber {
    segments: Vec<String>,
}

impl VersionNumber {
    /// Parse a dotted version string.
    pub fn parse(s: &str) -> Result<Self> {
        let segments = s
            .split('.')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::invalid_version(
                        s,
                        format!("segment '{segment}' is not a number"),
                    ));
                }
                Ok(normalize(segment))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// The numeric segments, in order, without leading zeros.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segment at `index`, `"0"` when the version is shorter.
    fn segment_or_zero(&self, index: usize) -> &str {
        self.segments.get(index).map(String::as_str).unwrap_or("0")
    }

    /// Next patch release: `major.minor.(patch + 1)`.
    ///
    /// The patch never carries into minor or major. The result always has
    /// exactly three segments; anything past the patch is dropped.
    pub fn next_patch(&self) -> Result<Self> {
        if self.segments.len() < INCREMENT_COMPONENTS {
            return Err(Error::invalid_version(
                &self.to_string(),
                format!("expected at least {INCREMENT_COMPONENTS} segments to increment"),
            ));
        }

        let overflow = || Error::invalid_version(&self.to_string(), "patch segment overflow");
        let patch = self.segments[2]
            .parse::<u64>()
            .ok()
            .and_then(|patch| patch.checked_add(1))
            .ok_or_else(overflow)?;

        Ok(Self {
            segments: vec![
                self.segments[0].clone(),
                self.segments[1].clone(),
                patch.to_string(),
            ],
        })
    }
}

/// Strip leading zeros, keeping a single `0` for an all-zero segment.
fn normalize(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Order two normalized digit strings numerically.
fn compare_digits(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

impl FromStr for VersionNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| compare_digits(self.segment_or_zero(i), other.segment_or_zero(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the numeric order: `1.2 == 1.2.0`.
impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionNumber {}

/// Compare two version strings numerically, segment by segment.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering> {
    let left = VersionNumber::parse(left)?;
    let right = VersionNumber::parse(right)?;
    Ok(left.cmp(&right))
}

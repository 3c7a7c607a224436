//! Attribute paths and raw field references.
//!
//! [`Fields`] is what callers hand to a leaf: it may be blank or contain
//! blank segments, in which case the guard simply rejects it. [`AttributePath`]
//! is the validated form: non-empty, every segment non-blank. Converting a
//! `Fields` that fails validation into an `AttributePath` is an error.

use std::fmt;
use std::str::FromStr;

use crate::error::{SpecError, SpecResult};

/// A validated, non-empty path of attribute names (`"comments.author.email"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    /// Parse a dotted path. Blank input or a blank segment is an error.
    pub fn parse(dotted: &str) -> SpecResult<Self> {
        Self::from_segments(dotted.split('.'))
            .map_err(|_| SpecError::InvalidAttributePath(dotted.to_string()))
    }

    /// Build from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> SpecResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(|s| is_blank(s)) {
            return Err(SpecError::InvalidAttributePath(segments.join(".")));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The association segments traversed before the final attribute.
    pub fn associations(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The final attribute name.
    pub fn attribute(&self) -> &str {
        // segments is non-empty by construction
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for AttributePath {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An unvalidated field reference, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    segments: Vec<String>,
}

impl Fields {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when there is at least one segment and none is blank.
    pub fn is_well_formed(&self) -> bool {
        !self.segments.is_empty() && self.segments.iter().all(|s| !is_blank(s))
    }

    /// Validate into an [`AttributePath`].
    pub fn to_path(&self) -> SpecResult<AttributePath> {
        AttributePath::from_segments(self.segments.iter().cloned())
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for Fields {
    fn from(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::default();
        }
        Self {
            segments: dotted.split('.').map(String::from).collect(),
        }
    }
}

impl From<String> for Fields {
    fn from(dotted: String) -> Self {
        Fields::from(dotted.as_str())
    }
}

impl From<&String> for Fields {
    fn from(dotted: &String) -> Self {
        Fields::from(dotted.as_str())
    }
}

impl From<Vec<String>> for Fields {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<Vec<&str>> for Fields {
    fn from(segments: Vec<&str>) -> Self {
        Self {
            segments: segments.into_iter().map(String::from).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(segments: [&str; N]) -> Self {
        Self {
            segments: segments.into_iter().map(String::from).collect(),
        }
    }
}

impl From<&[&str]> for Fields {
    fn from(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<AttributePath> for Fields {
    fn from(path: AttributePath) -> Self {
        Self {
            segments: path.segments,
        }
    }
}

impl From<&AttributePath> for Fields {
    fn from(path: &AttributePath) -> Self {
        Self {
            segments: path.segments.clone(),
        }
    }
}

fn is_blank(segment: &str) -> bool {
    segment.trim().is_empty()
}

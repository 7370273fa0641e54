//! Locations inside a decoded document
//!
//! A [`Path`] is the chain of record field names and array indices leading
//! from the root of an input to the sub-value an error talks about.
//! Paths are built inside-out: a record that sees a failing field prepends
//! the field name, an array prepends the element index.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// One step in a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named record field.
    Field(Cow<'static, str>),
    /// A zero-based array position.
    Index(usize),
}

impl PathSegment {
    /// Creates a field segment.
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Field(name.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&'static str> for PathSegment {
    fn from(name: &'static str) -> Self {
        Self::Field(Cow::Borrowed(name))
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        Self::Field(Cow::Owned(name))
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Ordered location of a sub-value, rendered as `/`-joined segments.
///
/// Most paths are shallow, so segments live inline until the fifth level.
///
/// ```
/// use pomoshtnik_validator::foundation::{Path, PathSegment};
///
/// let path = Path::root()
///     .prepended(PathSegment::index(1))
///     .prepended("results".into());
/// assert_eq!(path.to_string(), "results/[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[PathSegment; 4]>,
}

impl Path {
    /// The empty path, pointing at the input itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from outermost to innermost.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Inserts `segment` as the new outermost step.
    pub fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Builder form of [`Path::prepend`].
    #[must_use = "builder methods must be chained or built"]
    pub fn prepended(mut self, segment: PathSegment) -> Self {
        self.prepend(segment);
        self
    }

    /// Appends `segment` as the new innermost step.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns true if any segment is the field `name`.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PathSegment::Field(field) if field == name))
    }

    /// Returns true if any segment is the index `index`.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.segments.contains(&PathSegment::Index(index))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert!(Path::root().is_root());
    }

    #[test]
    fn prepend_builds_outermost_first() {
        let mut path = Path::root();
        path.prepend("title".into());
        path.prepend(PathSegment::index(2));
        path.prepend("results".into());

        assert_eq!(path.to_string(), "results/[2]/title");
        assert_eq!(path.len(), 3);
        assert!(path.contains_field("title"));
        assert!(path.contains_index(2));
        assert!(!path.contains_index(1));
    }

    #[test]
    fn collects_from_segments() {
        let path: Path = vec![PathSegment::field("data"), PathSegment::index(0)]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "data/[0]");
    }
}

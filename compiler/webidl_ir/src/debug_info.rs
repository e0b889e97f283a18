//! Source locations attached to definitions for diagnostics.
//!
//! A fragment carries one location; a merged definition accumulates the
//! locations of every fragment that contributed to it, in fragment order.

use smallvec::SmallVec;
use std::fmt;

/// Error when creating a line range whose end precedes its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRangeError {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for LineRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line range end {} precedes start {}",
            self.end, self.start
        )
    }
}

impl std::error::Error for LineRangeError {}

/// Inclusive, 1-based range of source lines.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    /// Try to create a line range.
    pub fn try_new(start: u32, end: u32) -> Result<Self, LineRangeError> {
        if end < start {
            return Err(LineRangeError { start, end });
        }
        Ok(LineRange { start, end })
    }

    /// A range covering a single line.
    #[inline]
    pub const fn line(line: u32) -> Self {
        LineRange {
            start: line,
            end: line,
        }
    }

    /// Number of lines covered.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Check if a line is within this range.
    #[inline]
    pub fn contains(&self, line: u32) -> bool {
        (self.start..=self.end).contains(&line)
    }

    /// Merge two ranges to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: LineRange) -> LineRange {
        LineRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A file path plus the lines a definition occupies in it.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SourceLocation {
    pub file: String,
    pub lines: LineRange,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, lines: LineRange) -> Self {
        SourceLocation {
            file: file.into(),
            lines,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.lines)
    }
}

/// One or more source locations.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DebugInfo {
    locations: SmallVec<[SourceLocation; 1]>,
}

impl DebugInfo {
    /// Debug info with a single location.
    pub fn new(location: SourceLocation) -> Self {
        let mut locations = SmallVec::new();
        locations.push(location);
        DebugInfo { locations }
    }

    /// Shorthand for a single location spanning `start..=end` in `file`.
    ///
    /// A reversed range is normalized rather than rejected; use
    /// [`LineRange::try_new`] when the input needs validating.
    pub fn at(file: impl Into<String>, start: u32, end: u32) -> Self {
        let lines = LineRange::try_new(start, end).unwrap_or(LineRange {
            start: end,
            end: start,
        });
        Self::new(SourceLocation::new(file, lines))
    }

    /// All locations, in the order they were accumulated.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    /// The first location, used as the primary location in diagnostics.
    pub fn primary(&self) -> Option<&SourceLocation> {
        self.locations.first()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Append every location of `other` that is not already present.
    pub fn absorb(&mut self, other: &DebugInfo) {
        for location in &other.locations {
            if !self.locations.contains(location) {
                self.locations.push(location.clone());
            }
        }
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locations.as_slice() {
            [] => f.write_str("<unknown location>"),
            [first, rest @ ..] => {
                write!(f, "{first}")?;
                for location in rest {
                    write!(f, ", {location}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<SourceLocation> for DebugInfo {
    fn from(location: SourceLocation) -> Self {
        DebugInfo::new(location)
    }
}

#[cfg(test)]
mod tests;

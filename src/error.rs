use std::fmt;

use crate::model::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

/// The record type a malformed line claimed to be.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Vertex,
    Face,
    /// The line could not be split into a tag and fields.
    Unknown,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vertex => f.write_str("vertex"),
            RecordKind::Face => f.write_str("face"),
            RecordKind::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: malformed {kind} record, {found}: {content:?}")]
    MalformedRecord {
        line: usize,
        kind: RecordKind,
        found: Malformation,
        content: String,
    },
    #[error("line {line}: face index {index} out of range, {available} vertices read so far")]
    OutOfRangeIndex {
        line: usize,
        index: usize,
        available: usize,
    },
    #[error("vertex ({0}) is not in the canonical table")]
    UnknownVertex(Vertex),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What exactly was wrong with a malformed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// Fewer than three fields after the tag.
    TooFewFields(usize),
    /// More than three face indices while truncation is disabled.
    TooManyFields(usize),
    /// A face index that is not a plain decimal integer.
    BadIndex(String),
    /// The line did not tokenize.
    Unparseable,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformation::TooFewFields(n) => write!(f, "expected 3 fields, found {}", n),
            Malformation::TooManyFields(n) => write!(f, "expected 3 fields, found {}", n),
            Malformation::BadIndex(token) => write!(f, "invalid index {:?}", token),
            Malformation::Unparseable => f.write_str("unreadable line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = Error::MalformedRecord {
            line: 4,
            kind: RecordKind::Face,
            found: Malformation::TooFewFields(2),
            content: "f 1 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 4: malformed face record, expected 3 fields, found 2: \"f 1 2\""
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRangeIndex {
            line: 2,
            index: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "line 2: face index 2 out of range, 1 vertices read so far"
        );

        let err = Error::OutOfRangeIndex {
            line: 1,
            index: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "line 1: face index 1 out of range, 0 vertices read so far"
        );
    }
}

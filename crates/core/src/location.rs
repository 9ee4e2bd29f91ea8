use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

/// Zero based line and column pair.
///
/// The derived ordering compares lines first and columns second, which is
/// exactly the document order navigation needs.
#[derive(
    Clone, Debug, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Position {
        Position { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Opaque identity of an open document.
///
/// Identifiers are compared as plain strings. Two markers in different
/// documents are ordered by identifier alone, so the relative order of
/// documents is stable but otherwise arbitrary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: &str) -> DocumentId {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> DocumentId {
        DocumentId(id.into())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> DocumentId {
        DocumentId(id)
    }
}

/// Position qualified with the document it belongs to.
///
/// The document is optional. Single document navigation leaves it out
/// because every location lives in the same place anyway.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub document: Option<DocumentId>,
    pub position: Position,
}

impl Location {
    pub fn new(document: Option<DocumentId>, position: Position) -> Location {
        Location { document, position }
    }

    /// Total order over locations.
    ///
    /// When both sides name a document and the documents differ, the
    /// identifiers decide. In every other case, including one or both
    /// documents missing, the positions decide.
    pub fn compare(&self, other: &Location) -> Ordering {
        match (&self.document, &other.document) {
            (Some(a), Some(b)) if a != b => a.cmp(b),
            _ => self.position.cmp(&other.position),
        }
    }
}

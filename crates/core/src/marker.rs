use serde::{Deserialize, Serialize};

use crate::{DocumentId, Location, Position, Severity};

/// Region of a document a marker covers, end exclusive.
#[derive(
    Clone, Debug, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct MarkerRange {
    pub start: Position,
    pub end: Position,
}

impl MarkerRange {
    pub fn new(start: Position, end: Position) -> MarkerRange {
        MarkerRange { start, end }
    }
}

/// A single diagnostic marker attached to a document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Marker {
    document: DocumentId,
    range: MarkerRange,
    severity: Severity,
    source: Option<String>,
    message: String,
}

impl Marker {
    pub fn new(
        document: DocumentId,
        range: MarkerRange,
        severity: Severity,
        source: Option<&str>,
        message: &str,
    ) -> Marker {
        Marker {
            document,
            range,
            severity,
            source: source.map(String::from),
            message: message.into(),
        }
    }

    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn range(&self) -> MarkerRange {
        self.range
    }

    /// Start of the covered region, the point navigation jumps to.
    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Tool that produced the marker, if it said so.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The marker start qualified with its document.
    pub fn location(&self) -> Location {
        Location::new(Some(self.document.clone()), self.range.start)
    }
}

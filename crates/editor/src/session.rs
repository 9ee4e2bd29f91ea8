use std::cmp::Ordering;

use marknav_core::{DocumentId, Location};

/// Remembers where the previous navigation landed.
///
/// The landing spot is skipped on the following call, so repeated
/// invocations walk the marker list instead of picking the marker under
/// the cursor again. Focusing another document forgets it.
#[derive(Debug, Default)]
pub struct Session {
    last: Option<Location>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn last(&self) -> Option<&Location> {
        self.last.as_ref()
    }

    pub fn remember(&mut self, location: Location) {
        self.last = Some(location);
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Forget the landing spot if it was in some other document.
    pub fn observe_document(&mut self, active: &DocumentId) {
        let moved = self
            .last
            .as_ref()
            .and_then(|last| last.document.as_ref())
            .map(|document| document != active)
            .unwrap_or(false);
        if moved {
            self.last = None;
        }
    }

    /// Whether `location` is the remembered landing spot.
    pub fn is_last(&self, location: &Location) -> bool {
        self.last
            .as_ref()
            .map(|last| last.compare(location) == Ordering::Equal)
            .unwrap_or(false)
    }
}

use marknav_core::{DocumentId, Marker, Position};

/// Editor state the navigator reads.
///
/// Every call answers from whatever the host shows right now, nothing is
/// cached in between.
pub trait EditorSurface {
    /// Document the cursor currently lives in.
    fn active_document(&self) -> Option<DocumentId>;

    /// Primary selection position in the active document.
    fn selection(&self) -> Option<Position>;

    /// Every open document, in the host's own order.
    fn open_documents(&self) -> Vec<DocumentId>;

    /// Markers currently attached to a document.
    fn markers(&self, document: &DocumentId) -> Vec<Marker>;
}

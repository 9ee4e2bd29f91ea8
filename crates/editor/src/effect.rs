use std::time::Duration;

use marknav_core::{Direction, DocumentId, MarkerRange, Position, Severity};
use serde::{Deserialize, Serialize};

/// How long to let the viewport settle before anything pops up.
pub const SETTLE_DELAY: Duration = Duration::from_millis(250);

/// How far a navigation request looks for markers.
#[derive(Clone, Debug, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Document,
    Workspace,
}

/// Text shown in the marker popup.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct PopupMessage {
    pub severity: Severity,
    pub text: String,
}

/// One step of carrying out a jump.
///
/// The host runs these strictly in order, each finished before the next
/// one starts.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub enum Effect {
    /// Take down a popup left over from an earlier jump.
    ClosePopup,
    /// Switch to the document holding the target. Only issued when the
    /// target lives outside the active document.
    FocusDocument(DocumentId),
    MoveCursor {
        document: DocumentId,
        position: Position,
    },
    /// Scroll until the target range is visible.
    Reveal {
        document: DocumentId,
        range: MarkerRange,
    },
    /// Wait out viewport movement before showing anything on top of it.
    Settle(Duration),
    ShowPopup {
        document: DocumentId,
        position: Position,
        message: PopupMessage,
    },
    /// Hand the whole move over to the host's own error navigation,
    /// which renders error jumps better than the popup does.
    BuiltinJump { direction: Direction, scope: Scope },
}

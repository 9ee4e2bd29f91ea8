use std::cmp::Ordering;

use marknav_core::{filter, Direction, DocumentId, Location, Marker};

use crate::{
    config::NavigationOptions,
    effect::{Effect, PopupMessage, Scope, SETTLE_DELAY},
    session::Session,
    surface::EditorSurface,
};

/// A decided jump. The effects carry it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jump {
    pub marker: Marker,
    pub effects: Vec<Effect>,
}

/// What a navigation request amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A marker was picked, run the effects.
    Jumped(Jump),
    /// The only marker in scope is the one already under the cursor.
    AtTarget,
    /// Nothing to move to. Also covers having no document focused.
    NoMarker,
}

/// Marker navigation over an editor surface.
///
/// Owns the session state, so one navigator per editor view. A request
/// reads the surface, decides the whole jump synchronously and returns
/// the effects for the host to run.
pub struct Navigator {
    surface: Box<dyn EditorSurface>,
    session: Session,
}

impl Navigator {
    pub fn new(surface: Box<dyn EditorSurface>) -> Navigator {
        Navigator {
            surface,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Move to the closest marker in the active document.
    pub fn goto_in_file(&mut self, direction: Direction, options: &NavigationOptions) -> Outcome {
        let Some(active) = self.surface.active_document() else {
            log::debug!("No document focused, nowhere to navigate");
            return Outcome::NoMarker;
        };
        self.session.observe_document(&active);

        let markers = self.surface.markers(&active);
        let position = self.surface.selection().unwrap_or_default();
        let cursor = Location::new(None, position);
        self.navigate(
            direction,
            Scope::Document,
            Some(&active),
            &markers,
            cursor,
            options,
        )
    }

    /// Move to the closest marker across every open document.
    pub fn goto_in_files(&mut self, direction: Direction, options: &NavigationOptions) -> Outcome {
        let active = self.surface.active_document();
        let mut markers = vec![];
        for document in self.surface.open_documents() {
            markers.extend(self.surface.markers(&document));
        }
        let position = self.surface.selection().unwrap_or_default();
        let cursor = Location::new(active.clone(), position);
        self.navigate(
            direction,
            Scope::Workspace,
            active.as_ref(),
            &markers,
            cursor,
            options,
        )
    }

    fn navigate(
        &mut self,
        direction: Direction,
        scope: Scope,
        active: Option<&DocumentId>,
        markers: &[Marker],
        cursor: Location,
        options: &NavigationOptions,
    ) -> Outcome {
        let filter_options = options.filter();
        let candidates = filter(markers, &filter_options);
        if candidates.is_empty() {
            log::debug!("No marker passes the filter");
            return Outcome::NoMarker;
        }

        // Cross document jumps order by document identity, inside one
        // document positions alone decide.
        let qualify = scope == Scope::Workspace;
        let locate = |marker: &Marker| {
            let document = qualify.then(|| marker.document().clone());
            Location::new(document, marker.start())
        };

        let mut best: Option<(Location, &Marker)> = None;
        for marker in candidates.iter().copied() {
            let location = locate(marker);
            if self.session.is_last(&location) {
                continue;
            }
            let current = best.as_ref().map(|(location, _)| location);
            let Some(winner) = direction.pick(&cursor, &location, current) else {
                continue;
            };
            let improved = current
                .map(|current| winner.compare(current) != Ordering::Equal)
                .unwrap_or(true);
            if improved {
                best = Some((winner, marker));
            }
        }

        if best.is_none() && options.wrap {
            // Wrap over the filtered set, not the deduplicated one, so
            // looping lands back on the marker just visited.
            let mut sorted: Vec<(Location, &Marker)> = candidates
                .iter()
                .map(|&marker| (locate(marker), marker))
                .collect();
            sorted.sort_by(|(a, _), (b, _)| a.compare(b));
            let wrapped = match direction {
                Direction::Next => sorted.first(),
                Direction::Prev => sorted.last(),
            };
            if let Some((location, marker)) = wrapped {
                let alone = sorted.len() == 1;
                if alone
                    && self.session.is_last(location)
                    && cursor.compare(location) == Ordering::Equal
                {
                    log::debug!("Already at the only marker in scope");
                    return Outcome::AtTarget;
                }
                best = Some((location.clone(), *marker));
            }
        }

        let Some((_, marker)) = best else {
            return Outcome::NoMarker;
        };

        self.session.remember(marker.location());
        let effects = build_effects(
            active,
            marker,
            direction,
            scope,
            filter_options.is_error_only(),
        );
        Outcome::Jumped(Jump {
            marker: marker.clone(),
            effects,
        })
    }
}

fn build_effects(
    active: Option<&DocumentId>,
    marker: &Marker,
    direction: Direction,
    scope: Scope,
    error_only: bool,
) -> Vec<Effect> {
    let document = marker.document().clone();
    let mut effects = vec![Effect::ClosePopup];

    let refocus = active.map(|doc| doc != &document).unwrap_or(true);
    if refocus {
        effects.push(Effect::FocusDocument(document.clone()));
    }

    effects.push(Effect::MoveCursor {
        document: document.clone(),
        position: marker.start(),
    });
    effects.push(Effect::Reveal {
        document: document.clone(),
        range: marker.range(),
    });
    effects.push(Effect::Settle(SETTLE_DELAY));

    if error_only {
        effects.push(Effect::BuiltinJump { direction, scope });
    } else {
        effects.push(Effect::ShowPopup {
            document,
            position: marker.start(),
            message: PopupMessage {
                severity: marker.severity(),
                text: marker.message().into(),
            },
        });
    }

    effects
}

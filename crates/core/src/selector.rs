use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Location;

/// Which way to look from the cursor.
#[derive(Clone, Debug, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Fold step that keeps the candidate closest to the cursor.
    ///
    /// A candidate sitting exactly at the cursor counts for both
    /// directions. Candidates on the wrong side leave the running best
    /// untouched, and a tie between candidate and best keeps the best, so
    /// folding a list picks its earliest closest entry.
    pub fn pick(
        &self,
        cursor: &Location,
        candidate: &Location,
        best: Option<&Location>,
    ) -> Option<Location> {
        let towards = match self {
            Direction::Next => candidate.compare(cursor) != Ordering::Less,
            Direction::Prev => candidate.compare(cursor) != Ordering::Greater,
        };
        if !towards {
            return best.cloned();
        }

        let Some(best) = best else {
            return Some(candidate.clone());
        };

        let closer = match self {
            Direction::Next => candidate.compare(best) == Ordering::Less,
            Direction::Prev => candidate.compare(best) == Ordering::Greater,
        };
        if closer {
            Some(candidate.clone())
        } else {
            Some(best.clone())
        }
    }
}

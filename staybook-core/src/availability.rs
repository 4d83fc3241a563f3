//! Detection of conflicts between a requested booking period
//! and the existing bookings of a spot.
//!
//! The check happens in two stages. The repository first loads all
//! bookings of the spot that touch the requested period, including
//! boundary dates (see [`is_candidate`]). Then each candidate is
//! compared precisely with [`check_conflict`], excluding boundary
//! dates. This allows back-to-back bookings where the departure
//! day of one booking is the arrival day of the next one.

use crate::entities::*;

/// Which boundaries of a requested period collide with
/// existing bookings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingConflict {
    pub start_date: bool,
    pub end_date: bool,
}

impl BookingConflict {
    pub const fn is_empty(&self) -> bool {
        !self.start_date && !self.end_date
    }

    fn merge(self, other: Self) -> Self {
        Self {
            start_date: self.start_date || other.start_date,
            end_date: self.end_date || other.end_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResult {
    NoConflict,
    Conflict(BookingConflict),
}

impl ConflictResult {
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

/// Coarse, inclusive filter for selecting the candidates
/// that need to be checked.
pub fn is_candidate(existing: &DateRange, requested: &DateRange) -> bool {
    existing.touches(requested)
}

fn conflict_with(existing: &DateRange, requested: &DateRange) -> BookingConflict {
    if requested.covers(existing) {
        // An existing booking that lies within (or is identical to)
        // the requested period blocks both boundaries.
        return BookingConflict {
            start_date: true,
            end_date: true,
        };
    }
    BookingConflict {
        start_date: existing.contains_strictly(requested.start()),
        end_date: existing.contains_strictly(requested.end()),
    }
}

/// Precise, exclusive test of the requested period against
/// all candidates.
pub fn check_conflict<'a>(
    candidates: impl IntoIterator<Item = &'a DateRange>,
    requested: &DateRange,
) -> ConflictResult {
    let conflict = candidates
        .into_iter()
        .map(|existing| conflict_with(existing, requested))
        .fold(BookingConflict::default(), BookingConflict::merge);
    if conflict.is_empty() {
        ConflictResult::NoConflict
    } else {
        ConflictResult::Conflict(conflict)
    }
}

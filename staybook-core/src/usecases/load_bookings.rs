use std::collections::HashMap;

use super::{get_spot, prelude::*, summarize_spots, SpotSummary};

/// The bookings of a spot as visible to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpotBookings {
    /// The owner sees all details including the booker.
    Owner(Vec<(Booking, User)>),
    /// Everyone else only sees the booked periods.
    Public(Vec<Booking>),
}

impl SpotBookings {
    pub fn len(&self) -> usize {
        match self {
            Self::Owner(bookings) => bookings.len(),
            Self::Public(bookings) => bookings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_bookings_of_spot<R>(
    repo: &R,
    viewer: Option<&User>,
    spot_id: Id,
) -> Result<SpotBookings>
where
    R: SpotRepo + BookingRepo + UserRepo,
{
    let spot = get_spot(repo, spot_id)?;
    let bookings = repo.load_bookings_of_spot(spot.id)?;
    if !viewer.map(|v| spot.is_owned_by(v.id)).unwrap_or(false) {
        return Ok(SpotBookings::Public(bookings));
    }
    let mut user_ids: Vec<_> = bookings.iter().map(|b| b.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    let users: HashMap<_, _> = repo
        .get_users(&user_ids)?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    let bookings = bookings
        .into_iter()
        .filter_map(|booking| {
            let Some(user) = users.get(&booking.user_id) else {
                // This should never happen
                log::warn!(
                    "Referential integrity violation: User with id = {} of booking {} not found",
                    booking.user_id,
                    booking.id
                );
                return None;
            };
            Some((booking, user.clone()))
        })
        .collect();
    Ok(SpotBookings::Owner(bookings))
}

pub fn load_bookings_of_user<R>(repo: &R, user: &User) -> Result<Vec<(Booking, SpotSummary)>>
where
    R: SpotRepo + BookingRepo + ReviewRepo + SpotImageRepo,
{
    let bookings = repo.load_bookings_of_user(user.id)?;
    let mut spot_ids: Vec<_> = bookings.iter().map(|b| b.spot_id).collect();
    spot_ids.sort_unstable();
    spot_ids.dedup();
    let spots = repo.get_spots(&spot_ids)?;
    let spots: HashMap<_, _> = summarize_spots(repo, spots)?
        .into_iter()
        .map(|s| (s.spot.id, s))
        .collect();
    Ok(bookings
        .into_iter()
        .filter_map(|booking| {
            let spot = spots.get(&booking.spot_id)?.clone();
            Some((booking, spot))
        })
        .collect())
}

use time::Date;

use super::{get_spot, prelude::*};
use crate::availability::{check_conflict, ConflictResult};

#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn parse_date(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    required_msg: &str,
    invalid_msg: &str,
) -> Option<Date> {
    let value = value.map(str::trim).filter(|s| !s.is_empty());
    let Some(value) = value else {
        errors.add(field, required_msg);
        return None;
    };
    parse_iso_date(value)
        .map_err(|_| errors.add(field, invalid_msg))
        .ok()
}

/// Checks the requested dates relative to `today`.
pub fn validate_booking_request(
    request: &BookingRequest,
    today: Date,
) -> std::result::Result<DateRange, FieldErrors> {
    let mut errors = FieldErrors::new();
    let start = parse_date(
        &mut errors,
        "startDate",
        request.start_date.as_deref(),
        "Start date is required",
        "Start date must be a valid date",
    );
    let end = parse_date(
        &mut errors,
        "endDate",
        request.end_date.as_deref(),
        "End date is required",
        "End date must be a valid date",
    );
    if let Some(start) = start {
        if start < today {
            errors.add("startDate", "Start date cannot be in the past");
        }
    }
    let (Some(start), Some(end)) = (start, end) else {
        return Err(errors);
    };
    match DateRange::try_new(start, end) {
        Ok(period) => errors.into_result(period),
        Err(_) => {
            errors.add("endDate", "End date must be after the start date");
            Err(errors)
        }
    }
}

/// Books a spot for the requested period if it is still
/// available.
///
/// Checking for conflicts and storing the new booking must
/// happen within a single exclusive transaction to prevent
/// double bookings.
pub fn create_booking<R>(
    repo: &R,
    booker: &User,
    spot_id: Id,
    request: BookingRequest,
    today: Date,
) -> Result<Booking>
where
    R: SpotRepo + BookingRepo,
{
    let period = validate_booking_request(&request, today)?;
    let spot = get_spot(repo, spot_id)?;
    if spot.is_owned_by(booker.id) {
        log::debug!("Owner {} tried to book own spot {}", booker.id, spot.id);
        return Err(Error::OwnSpotBooking);
    }
    let candidates = repo.load_bookings_of_spot_in_range(spot.id, &period)?;
    if let ConflictResult::Conflict(conflict) =
        check_conflict(candidates.iter().map(|b| &b.period), &period)
    {
        log::debug!(
            "Requested period {period} conflicts with {} existing booking(s) of spot {}",
            candidates.len(),
            spot.id
        );
        return Err(Error::BookingConflict(conflict));
    }
    let booking = repo.create_booking(NewBooking {
        spot_id: spot.id,
        user_id: booker.id,
        period,
        created_at: Timestamp::now(),
    })?;
    log::info!(
        "User {} booked spot {} for {}",
        booker.id,
        spot.id,
        booking.period
    );
    Ok(booking)
}

use time::Date;

use super::*;

/// Books a spot if the requested period is still available.
///
/// The availability check and the insert are executed within
/// a single exclusive transaction. Concurrent requests for
/// overlapping periods are thereby serialized and only the
/// first one succeeds.
pub fn create_booking(
    connections: &sqlite::Connections,
    user: &User,
    spot_id: Id,
    request: usecases::BookingRequest,
    today: Date,
) -> Result<Booking> {
    let booking = connections.exclusive()?.transaction(|conn| {
        usecases::create_booking(conn, user, spot_id, request, today)
    })?;
    Ok(booking)
}

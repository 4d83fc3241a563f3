use time::OffsetDateTime;

use super::*;

#[get("/spots/<id>/bookings")]
pub fn get_bookings_of_spot(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
) -> Result<json::Bookings<json::SpotBooking>> {
    let bookings = usecases::load_bookings_of_spot(&connections.shared()?, auth.user(), id.into())?;
    Ok(Json(json::Bookings {
        bookings: to_json::spot_bookings(bookings),
    }))
}

#[post("/spots/<id>/bookings", format = "application/json", data = "<booking>")]
pub fn post_booking(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    booking: JsonResult<json::NewBooking>,
) -> CreatedResult<json::Booking> {
    let booker = auth.required_user()?;
    let request = from_json::booking_request(booking?.into_inner());
    let today = OffsetDateTime::now_utc().date();
    let booking = flows::create_booking(&connections, booker, id.into(), request, today)?;
    Ok(created(booking.into()))
}

#[get("/bookings/current")]
pub fn get_bookings_of_current_user(
    connections: sqlite::Connections,
    auth: Auth,
) -> Result<json::Bookings<json::UserBooking>> {
    let user = auth.required_user()?;
    let bookings = usecases::load_bookings_of_user(&connections.shared()?, user)?;
    Ok(Json(json::Bookings {
        bookings: bookings
            .into_iter()
            .map(|(booking, spot)| to_json::user_booking(booking, spot))
            .collect(),
    }))
}

use super::*;

impl BookingRepo for DbReadOnly<'_> {
    fn create_booking(&self, _booking: NewBooking) -> Result<Booking> {
        unreachable!();
    }

    fn load_bookings_of_spot(&self, spot_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_spot(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_bookings_of_user(&self, user_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_bookings_of_spot_in_range(
        &self,
        spot_id: Id,
        period: &DateRange,
    ) -> Result<Vec<Booking>> {
        load_bookings_of_spot_in_range(&mut self.conn.borrow_mut(), spot_id, period)
    }
}

impl BookingRepo for DbReadWrite<'_> {
    fn create_booking(&self, booking: NewBooking) -> Result<Booking> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }

    fn load_bookings_of_spot(&self, spot_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_spot(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_bookings_of_user(&self, user_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_bookings_of_spot_in_range(
        &self,
        spot_id: Id,
        period: &DateRange,
    ) -> Result<Vec<Booking>> {
        load_bookings_of_spot_in_range(&mut self.conn.borrow_mut(), spot_id, period)
    }
}

impl BookingRepo for DbConnection<'_> {
    fn create_booking(&self, booking: NewBooking) -> Result<Booking> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }

    fn load_bookings_of_spot(&self, spot_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_spot(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_bookings_of_user(&self, user_id: Id) -> Result<Vec<Booking>> {
        load_bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_bookings_of_spot_in_range(
        &self,
        spot_id: Id,
        period: &DateRange,
    ) -> Result<Vec<Booking>> {
        load_bookings_of_spot_in_range(&mut self.conn.borrow_mut(), spot_id, period)
    }
}

fn create_booking(conn: &mut SqliteConnection, b: NewBooking) -> Result<Booking> {
    let new_booking = models::NewBooking {
        spot_id: b.spot_id.as_i64(),
        user_id: b.user_id.as_i64(),
        start_date: format_iso_date(b.period.start()),
        end_date: format_iso_date(b.period.end()),
        created_at: b.created_at.as_millis(),
        updated_at: b.created_at.as_millis(),
    };
    diesel::insert_into(schema::bookings::table)
        .values(&new_booking)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewBooking {
        spot_id,
        user_id,
        period,
        created_at,
    } = b;
    Ok(Booking {
        id,
        spot_id,
        user_id,
        period,
        created_at,
        updated_at: created_at,
    })
}

fn load_bookings_of_spot(conn: &mut SqliteConnection, spot_id: Id) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::spot_id.eq(spot_id.as_i64()))
        .order_by((dsl::start_date, dsl::id))
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

fn load_bookings_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::user_id.eq(user_id.as_i64()))
        .order_by((dsl::start_date, dsl::id))
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

fn load_bookings_of_spot_in_range(
    conn: &mut SqliteConnection,
    spot_id: Id,
    period: &DateRange,
) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    // ISO dates are compared lexicographically
    let start = format_iso_date(period.start());
    let end = format_iso_date(period.end());
    dsl::bookings
        .filter(dsl::spot_id.eq(spot_id.as_i64()))
        .filter(dsl::start_date.le(end))
        .filter(dsl::end_date.ge(start))
        .order_by((dsl::start_date, dsl::id))
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

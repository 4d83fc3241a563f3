use super::*;

impl SpotRepo for DbReadOnly<'_> {
    fn create_spot(&self, _spot: NewSpot) -> Result<Spot> {
        unreachable!();
    }
    fn update_spot(&self, _spot: &Spot) -> Result<()> {
        unreachable!();
    }
    fn delete_spot(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_spot(&self, id: Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn get_spots(&self, ids: &[Id]) -> Result<Vec<Spot>> {
        get_spots(&mut self.conn.borrow_mut(), ids)
    }
    fn query_spots(&self, filter: &SpotFilter, pagination: &Pagination) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn load_spots_of_owner(&self, owner_id: Id) -> Result<Vec<Spot>> {
        load_spots_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }
}

impl SpotRepo for DbReadWrite<'_> {
    fn create_spot(&self, spot: NewSpot) -> Result<Spot> {
        create_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn update_spot(&self, spot: &Spot) -> Result<()> {
        update_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn delete_spot(&self, id: Id) -> Result<()> {
        delete_spot(&mut self.conn.borrow_mut(), id)
    }

    fn get_spot(&self, id: Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn get_spots(&self, ids: &[Id]) -> Result<Vec<Spot>> {
        get_spots(&mut self.conn.borrow_mut(), ids)
    }
    fn query_spots(&self, filter: &SpotFilter, pagination: &Pagination) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn load_spots_of_owner(&self, owner_id: Id) -> Result<Vec<Spot>> {
        load_spots_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }
}

impl SpotRepo for DbConnection<'_> {
    fn create_spot(&self, spot: NewSpot) -> Result<Spot> {
        create_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn update_spot(&self, spot: &Spot) -> Result<()> {
        update_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn delete_spot(&self, id: Id) -> Result<()> {
        delete_spot(&mut self.conn.borrow_mut(), id)
    }

    fn get_spot(&self, id: Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn get_spots(&self, ids: &[Id]) -> Result<Vec<Spot>> {
        get_spots(&mut self.conn.borrow_mut(), ids)
    }
    fn query_spots(&self, filter: &SpotFilter, pagination: &Pagination) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn load_spots_of_owner(&self, owner_id: Id) -> Result<Vec<Spot>> {
        load_spots_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }
}

fn create_spot(conn: &mut SqliteConnection, s: NewSpot) -> Result<Spot> {
    let new_spot = models::NewSpot {
        owner_id: s.owner_id.as_i64(),
        address: &s.address.street,
        city: &s.address.city,
        state: &s.address.state,
        country: &s.address.country,
        lat: s.pos.lat(),
        lng: s.pos.lng(),
        name: &s.name,
        description: &s.description,
        price: s.price,
        created_at: s.created_at.as_millis(),
        updated_at: s.created_at.as_millis(),
    };
    diesel::insert_into(schema::spots::table)
        .values(&new_spot)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewSpot {
        owner_id,
        address,
        pos,
        name,
        description,
        price,
        created_at,
    } = s;
    Ok(Spot {
        id,
        owner_id,
        address,
        pos,
        name,
        description,
        price,
        created_at,
        updated_at: created_at,
    })
}

fn update_spot(conn: &mut SqliteConnection, s: &Spot) -> Result<()> {
    use schema::spots::dsl;
    let changeset = models::NewSpot {
        owner_id: s.owner_id.as_i64(),
        address: &s.address.street,
        city: &s.address.city,
        state: &s.address.state,
        country: &s.address.country,
        lat: s.pos.lat(),
        lng: s.pos.lng(),
        name: &s.name,
        description: &s.description,
        price: s.price,
        created_at: s.created_at.as_millis(),
        updated_at: s.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::spots.filter(dsl::id.eq(s.id.as_i64())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_spot(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    let id = id.as_i64();
    // Foreign key enforcement is a per-connection setting
    // and cascading deletes must not rely on it.
    {
        use schema::reviews::dsl as review_dsl;
        use schema::review_images::dsl;
        let review_ids = review_dsl::reviews
            .select(review_dsl::id)
            .filter(review_dsl::spot_id.eq(id));
        diesel::delete(dsl::review_images.filter(dsl::review_id.eq_any(review_ids)))
            .execute(conn)
            .map_err(from_diesel_err)?;
        diesel::delete(review_dsl::reviews.filter(review_dsl::spot_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::spot_images::dsl;
        diesel::delete(dsl::spot_images.filter(dsl::spot_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::bookings::dsl;
        diesel::delete(dsl::bookings.filter(dsl::spot_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::spots::dsl;
    let count = diesel::delete(dsl::spots.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_spot(conn: &mut SqliteConnection, id: Id) -> Result<Spot> {
    use schema::spots::dsl;
    let spot = dsl::spots
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?;
    load_spot(spot)
}

fn get_spots(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<Spot>> {
    use schema::spots::dsl;
    dsl::spots
        .filter(dsl::id.eq_any(to_i64s(ids)))
        .order_by(dsl::id)
        .load::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_spot)
        .collect()
}

fn query_spots(
    conn: &mut SqliteConnection,
    filter: &SpotFilter,
    pagination: &Pagination,
) -> Result<Vec<Spot>> {
    use schema::spots::dsl;
    let mut query = dsl::spots.order_by(dsl::id).into_boxed();
    for constraint in filter.constraints() {
        let value = constraint.value;
        query = match (constraint.dimension, constraint.comparison) {
            (Dimension::Lat, Comparison::Ge) => query.filter(dsl::lat.ge(value)),
            (Dimension::Lat, Comparison::Le) => query.filter(dsl::lat.le(value)),
            (Dimension::Lng, Comparison::Ge) => query.filter(dsl::lng.ge(value)),
            (Dimension::Lng, Comparison::Le) => query.filter(dsl::lng.le(value)),
            (Dimension::Price, Comparison::Ge) => query.filter(dsl::price.ge(value)),
            (Dimension::Price, Comparison::Le) => query.filter(dsl::price.le(value)),
        };
    }
    let Pagination { offset, limit } = *pagination;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    // SQLite does not support an OFFSET without a LIMIT
    query = query.limit(limit).offset(offset);
    query
        .load::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_spot)
        .collect()
}

fn load_spots_of_owner(conn: &mut SqliteConnection, owner_id: Id) -> Result<Vec<Spot>> {
    use schema::spots::dsl;
    dsl::spots
        .filter(dsl::owner_id.eq(owner_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_spot)
        .collect()
}

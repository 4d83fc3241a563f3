use super::*;

impl ReviewRepo for DbReadOnly<'_> {
    fn create_review(&self, _review: NewReview) -> Result<Review> {
        unreachable!();
    }
    fn delete_review(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_spot(&self, spot_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), &[spot_id])
    }
    fn load_reviews_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn try_get_review_of_user_for_spot(&self, user_id: Id, spot_id: Id) -> Result<Option<Review>> {
        try_get_review_of_user_for_spot(&mut self.conn.borrow_mut(), user_id, spot_id)
    }
}

impl ReviewRepo for DbReadWrite<'_> {
    fn create_review(&self, review: NewReview) -> Result<Review> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: Id) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }

    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_spot(&self, spot_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), &[spot_id])
    }
    fn load_reviews_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn try_get_review_of_user_for_spot(&self, user_id: Id, spot_id: Id) -> Result<Option<Review>> {
        try_get_review_of_user_for_spot(&mut self.conn.borrow_mut(), user_id, spot_id)
    }
}

impl ReviewRepo for DbConnection<'_> {
    fn create_review(&self, review: NewReview) -> Result<Review> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: Id) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }

    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_spot(&self, spot_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), &[spot_id])
    }
    fn load_reviews_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<Review>> {
        load_reviews_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn try_get_review_of_user_for_spot(&self, user_id: Id, spot_id: Id) -> Result<Option<Review>> {
        try_get_review_of_user_for_spot(&mut self.conn.borrow_mut(), user_id, spot_id)
    }
}

fn create_review(conn: &mut SqliteConnection, r: NewReview) -> Result<Review> {
    let new_review = models::NewReview {
        spot_id: r.spot_id.as_i64(),
        user_id: r.user_id.as_i64(),
        review: &r.text,
        stars: r.stars.value(),
        created_at: r.created_at.as_millis(),
        updated_at: r.created_at.as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewReview {
        spot_id,
        user_id,
        text,
        stars,
        created_at,
    } = r;
    Ok(Review {
        id,
        spot_id,
        user_id,
        text,
        stars,
        created_at,
        updated_at: created_at,
    })
}

fn delete_review(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    let id = id.as_i64();
    {
        use schema::review_images::dsl;
        diesel::delete(dsl::review_images.filter(dsl::review_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: Id) -> Result<Review> {
    use schema::reviews::dsl;
    let review = dsl::reviews
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_review(review)
}

fn load_reviews_of_spots(conn: &mut SqliteConnection, spot_ids: &[Id]) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::spot_id.eq_any(to_i64s(spot_ids)))
        .order_by(dsl::id)
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

fn load_reviews_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::user_id.eq(user_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

fn try_get_review_of_user_for_spot(
    conn: &mut SqliteConnection,
    user_id: Id,
    spot_id: Id,
) -> Result<Option<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::user_id.eq(user_id.as_i64()))
        .filter(dsl::spot_id.eq(spot_id.as_i64()))
        .first::<models::ReviewEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_review)
        .transpose()
}

use super::*;

impl SpotImageRepo for DbReadOnly<'_> {
    fn create_spot_image(&self, _image: NewSpotImage) -> Result<SpotImage> {
        unreachable!();
    }
    fn delete_spot_images(&self, _spot_id: Id) -> Result<usize> {
        unreachable!();
    }

    fn load_spot_images(&self, spot_id: Id) -> Result<Vec<SpotImage>> {
        load_spot_images(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_preview_images_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<SpotImage>> {
        load_preview_images_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
}

impl SpotImageRepo for DbReadWrite<'_> {
    fn create_spot_image(&self, image: NewSpotImage) -> Result<SpotImage> {
        create_spot_image(&mut self.conn.borrow_mut(), image)
    }
    fn delete_spot_images(&self, spot_id: Id) -> Result<usize> {
        delete_spot_images(&mut self.conn.borrow_mut(), spot_id)
    }

    fn load_spot_images(&self, spot_id: Id) -> Result<Vec<SpotImage>> {
        load_spot_images(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_preview_images_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<SpotImage>> {
        load_preview_images_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
}

impl SpotImageRepo for DbConnection<'_> {
    fn create_spot_image(&self, image: NewSpotImage) -> Result<SpotImage> {
        create_spot_image(&mut self.conn.borrow_mut(), image)
    }
    fn delete_spot_images(&self, spot_id: Id) -> Result<usize> {
        delete_spot_images(&mut self.conn.borrow_mut(), spot_id)
    }

    fn load_spot_images(&self, spot_id: Id) -> Result<Vec<SpotImage>> {
        load_spot_images(&mut self.conn.borrow_mut(), spot_id)
    }
    fn load_preview_images_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<SpotImage>> {
        load_preview_images_of_spots(&mut self.conn.borrow_mut(), spot_ids)
    }
}

impl ReviewImageRepo for DbReadOnly<'_> {
    fn create_review_image(&self, _image: NewReviewImage) -> Result<ReviewImage> {
        unreachable!();
    }

    fn load_review_images_of_reviews(&self, review_ids: &[Id]) -> Result<Vec<ReviewImage>> {
        load_review_images_of_reviews(&mut self.conn.borrow_mut(), review_ids)
    }
}

impl ReviewImageRepo for DbReadWrite<'_> {
    fn create_review_image(&self, image: NewReviewImage) -> Result<ReviewImage> {
        create_review_image(&mut self.conn.borrow_mut(), image)
    }

    fn load_review_images_of_reviews(&self, review_ids: &[Id]) -> Result<Vec<ReviewImage>> {
        load_review_images_of_reviews(&mut self.conn.borrow_mut(), review_ids)
    }
}

impl ReviewImageRepo for DbConnection<'_> {
    fn create_review_image(&self, image: NewReviewImage) -> Result<ReviewImage> {
        create_review_image(&mut self.conn.borrow_mut(), image)
    }

    fn load_review_images_of_reviews(&self, review_ids: &[Id]) -> Result<Vec<ReviewImage>> {
        load_review_images_of_reviews(&mut self.conn.borrow_mut(), review_ids)
    }
}

fn create_spot_image(conn: &mut SqliteConnection, i: NewSpotImage) -> Result<SpotImage> {
    let new_image = models::NewSpotImage {
        spot_id: i.spot_id.as_i64(),
        url: i.url.as_str(),
        preview: i.preview,
    };
    diesel::insert_into(schema::spot_images::table)
        .values(&new_image)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewSpotImage {
        spot_id,
        url,
        preview,
    } = i;
    Ok(SpotImage {
        id,
        spot_id,
        url,
        preview,
    })
}

fn delete_spot_images(conn: &mut SqliteConnection, spot_id: Id) -> Result<usize> {
    use schema::spot_images::dsl;
    diesel::delete(dsl::spot_images.filter(dsl::spot_id.eq(spot_id.as_i64())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn load_spot_images(conn: &mut SqliteConnection, spot_id: Id) -> Result<Vec<SpotImage>> {
    use schema::spot_images::dsl;
    dsl::spot_images
        .filter(dsl::spot_id.eq(spot_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::SpotImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_spot_image)
        .collect()
}

fn load_preview_images_of_spots(
    conn: &mut SqliteConnection,
    spot_ids: &[Id],
) -> Result<Vec<SpotImage>> {
    use schema::spot_images::dsl;
    dsl::spot_images
        .filter(dsl::spot_id.eq_any(to_i64s(spot_ids)))
        .filter(dsl::preview.eq(true))
        .order_by(dsl::id)
        .load::<models::SpotImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_spot_image)
        .collect()
}

fn create_review_image(conn: &mut SqliteConnection, i: NewReviewImage) -> Result<ReviewImage> {
    let new_image = models::NewReviewImage {
        review_id: i.review_id.as_i64(),
        url: i.url.as_str(),
    };
    diesel::insert_into(schema::review_images::table)
        .values(&new_image)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewReviewImage { review_id, url } = i;
    Ok(ReviewImage { id, review_id, url })
}

fn load_review_images_of_reviews(
    conn: &mut SqliteConnection,
    review_ids: &[Id],
) -> Result<Vec<ReviewImage>> {
    use schema::review_images::dsl;
    dsl::review_images
        .filter(dsl::review_id.eq_any(to_i64s(review_ids)))
        .order_by(dsl::id)
        .load::<models::ReviewImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review_image)
        .collect()
}

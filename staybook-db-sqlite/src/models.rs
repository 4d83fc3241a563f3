#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = spots)]
pub struct NewSpot<'a> {
    pub owner_id: i64,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct SpotEntity {
    pub id: i64,
    pub owner_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub spot_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct BookingEntity {
    pub id: i64,
    pub spot_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub spot_id: i64,
    pub user_id: i64,
    pub review: &'a str,
    pub stars: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub spot_id: i64,
    pub user_id: i64,
    pub review: String,
    pub stars: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = spot_images)]
pub struct NewSpotImage<'a> {
    pub spot_id: i64,
    pub url: &'a str,
    pub preview: bool,
}

#[derive(Queryable)]
pub struct SpotImageEntity {
    pub id: i64,
    pub spot_id: i64,
    pub url: String,
    pub preview: bool,
}

#[derive(Insertable)]
#[diesel(table_name = review_images)]
pub struct NewReviewImage<'a> {
    pub review_id: i64,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct ReviewImageEntity {
    pub id: i64,
    pub review_id: i64,
    pub url: String,
}

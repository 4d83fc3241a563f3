use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

// ---   spots   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id          : i64,
    pub owner_id    : i64,
    pub address     : String,
    pub city        : String,
    pub state       : String,
    pub country     : String,
    pub lat         : f64,
    pub lng         : f64,
    pub name        : String,
    pub description : String,
    pub price       : f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at  : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at  : OffsetDateTime,
}

/// A spot as listed in search results.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct SpotListItem {
    #[serde(flatten)]
    pub spot: Spot,
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Spots {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotListItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct SpotDetails {
    #[serde(flatten)]
    pub spot: Spot,
    pub num_reviews: u64,
    pub avg_star_rating: Option<f64>,
    #[serde(rename = "SpotImages")]
    pub spot_images: Vec<SpotImage>,
    #[serde(rename = "Owner")]
    pub owner: UserSummary,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewSpot {
    pub address     : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub country     : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub name        : Option<String>,
    pub description : Option<String>,
    pub price       : Option<f64>,
}

// ---   images   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SpotImage {
    pub id: i64,
    pub url: String,
    pub preview: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewImage {
    pub id: i64,
    pub url: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewImage {
    pub url: Option<String>,
    pub preview: Option<bool>,
}

// ---   bookings   --- //

/// Dates are formatted as `YYYY-MM-DD`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id         : i64,
    pub spot_id    : i64,
    pub user_id    : i64,
    pub start_date : String,
    pub end_date   : String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at : OffsetDateTime,
}

/// Only the booked period without any personal details.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PublicBooking {
    pub spot_id: i64,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OwnerBooking {
    #[serde(rename = "User")]
    pub user: UserSummary,
    #[serde(flatten)]
    pub booking: Booking,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum SpotBooking {
    Owner(OwnerBooking),
    Public(PublicBooking),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserBooking {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(rename = "Spot")]
    pub spot: SpotListItem,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Bookings<T> {
    #[serde(rename = "Bookings")]
    pub bookings: Vec<T>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// ---   reviews   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id         : i64,
    pub user_id    : i64,
    pub spot_id    : i64,
    pub review     : String,
    pub stars      : u8,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SpotReview {
    #[serde(flatten)]
    pub review: Review,
    #[serde(rename = "User")]
    pub user: UserSummary,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImage>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserReview {
    #[serde(flatten)]
    pub review: Review,
    #[serde(rename = "User")]
    pub user: UserSummary,
    #[serde(rename = "Spot")]
    pub spot: SpotListItem,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImage>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Reviews<T> {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<T>,
}

/// Stars are accepted as any JSON number and
/// validated to be an integer by the server.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReview {
    pub review: Option<String>,
    pub stars: Option<f64>,
}

// ---   users   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id         : i64,
    pub email      : String,
    pub username   : String,
    pub first_name : String,
    pub last_name  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CurrentUser {
    pub user: Option<User>,
}

// ---   misc   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Message {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    #[serde(rename = "statusCode")]
    pub http_status: u16,
    pub message: String,
    /// Field name -> violation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::FromPrimitive as _;
use url::Url;

use staybook_core::{
    entities::*,
    repositories::{self as repo, *},
    spot_query::{Comparison, Dimension, Pagination, SpotFilter},
};

use super::*;

mod booking;
mod image;
mod review;
mod spot;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

fn last_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(from_diesel_err)
}

fn load_url(url: String) -> Result<Url> {
    url.parse().map_err(|err| {
        // This should never happen if URLs have been validated properly on insert
        log::error!("Failed to load invalid URL '{url}': {err}");
        anyhow!("Invalid URL '{url}': {err}").into()
    })
}

fn load_date(date: &str) -> Result<time::Date> {
    parse_iso_date(date).map_err(|err| anyhow!(err).into())
}

fn load_user(user: models::UserEntity) -> User {
    let models::UserEntity {
        id,
        email,
        username,
        first_name,
        last_name,
        created_at,
    } = user;
    User {
        id: id.into(),
        email,
        username,
        first_name,
        last_name,
        created_at: Timestamp::from_millis(created_at),
    }
}

fn load_spot(spot: models::SpotEntity) -> Result<Spot> {
    let models::SpotEntity {
        id,
        owner_id,
        address,
        city,
        state,
        country,
        lat,
        lng,
        name,
        description,
        price,
        created_at,
        updated_at,
    } = spot;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of spot {id}: {err}"))?;
    Ok(Spot {
        id: id.into(),
        owner_id: owner_id.into(),
        address: Address {
            street: address,
            city,
            state,
            country,
        },
        pos,
        name,
        description,
        price,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_booking(booking: models::BookingEntity) -> Result<Booking> {
    let models::BookingEntity {
        id,
        spot_id,
        user_id,
        start_date,
        end_date,
        created_at,
        updated_at,
    } = booking;
    let period = DateRange::try_new(load_date(&start_date)?, load_date(&end_date)?)
        .map_err(|err| anyhow!("Invalid period of booking {id}: {err}"))?;
    Ok(Booking {
        id: id.into(),
        spot_id: spot_id.into(),
        user_id: user_id.into(),
        period,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_review(review: models::ReviewEntity) -> Result<Review> {
    let models::ReviewEntity {
        id,
        spot_id,
        user_id,
        review: text,
        stars,
        created_at,
        updated_at,
    } = review;
    let stars = Stars::from_i16(stars)
        .ok_or_else(|| anyhow!("Invalid star rating of review {id}: {stars}"))?;
    Ok(Review {
        id: id.into(),
        spot_id: spot_id.into(),
        user_id: user_id.into(),
        text,
        stars,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_spot_image(image: models::SpotImageEntity) -> Result<SpotImage> {
    let models::SpotImageEntity {
        id,
        spot_id,
        url,
        preview,
    } = image;
    Ok(SpotImage {
        id: id.into(),
        spot_id: spot_id.into(),
        url: load_url(url)?,
        preview,
    })
}

fn load_review_image(image: models::ReviewImageEntity) -> Result<ReviewImage> {
    let models::ReviewImageEntity { id, review_id, url } = image;
    Ok(ReviewImage {
        id: id.into(),
        review_id: review_id.into(),
        url: load_url(url)?,
    })
}

fn to_i64s(ids: &[Id]) -> Vec<i64> {
    ids.iter().copied().map(Id::as_i64).collect()
}

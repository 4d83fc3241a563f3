// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::{
    entities::*,
    spot_query::{Pagination, SpotFilter},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: NewUser) -> Result<User>;
    fn get_user(&self, id: Id) -> Result<User>;
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>>;

    fn try_get_user(&self, id: Id) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait SpotRepo {
    fn create_spot(&self, spot: NewSpot) -> Result<Spot>;
    fn get_spot(&self, id: Id) -> Result<Spot>;
    fn get_spots(&self, ids: &[Id]) -> Result<Vec<Spot>>;
    fn update_spot(&self, spot: &Spot) -> Result<()>;
    // Deletes all dependent bookings, reviews and images
    fn delete_spot(&self, id: Id) -> Result<()>;

    /// Ordered by id
    fn query_spots(&self, filter: &SpotFilter, pagination: &Pagination) -> Result<Vec<Spot>>;
    fn load_spots_of_owner(&self, owner_id: Id) -> Result<Vec<Spot>>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: NewBooking) -> Result<Booking>;
    fn load_bookings_of_spot(&self, spot_id: Id) -> Result<Vec<Booking>>;
    fn load_bookings_of_user(&self, user_id: Id) -> Result<Vec<Booking>>;

    /// All bookings of the spot that have at least one
    /// date in common with the given period, including
    /// the boundary dates.
    fn load_bookings_of_spot_in_range(&self, spot_id: Id, period: &DateRange)
        -> Result<Vec<Booking>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: NewReview) -> Result<Review>;
    fn get_review(&self, id: Id) -> Result<Review>;
    fn delete_review(&self, id: Id) -> Result<()>;

    fn load_reviews_of_spot(&self, spot_id: Id) -> Result<Vec<Review>>;
    fn load_reviews_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<Review>>;
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>>;

    fn try_get_review_of_user_for_spot(&self, user_id: Id, spot_id: Id) -> Result<Option<Review>>;
}

pub trait SpotImageRepo {
    fn create_spot_image(&self, image: NewSpotImage) -> Result<SpotImage>;
    fn load_spot_images(&self, spot_id: Id) -> Result<Vec<SpotImage>>;
    fn delete_spot_images(&self, spot_id: Id) -> Result<usize>;

    /// Only images flagged as preview, ordered by id
    fn load_preview_images_of_spots(&self, spot_ids: &[Id]) -> Result<Vec<SpotImage>>;
}

pub trait ReviewImageRepo {
    fn create_review_image(&self, image: NewReviewImage) -> Result<ReviewImage>;
    fn load_review_images_of_reviews(&self, review_ids: &[Id]) -> Result<Vec<ReviewImage>>;
}

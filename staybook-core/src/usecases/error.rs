use crate::{availability::BookingConflict, repositories, util::validate::FieldErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bad Request")]
    Validation(FieldErrors),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Spot couldn't be found")]
    SpotNotFound,
    #[error("Review couldn't be found")]
    ReviewNotFound,
    #[error("Spot must belong to the current user")]
    NotSpotOwner,
    #[error("Review must belong to the current user")]
    NotReviewAuthor,
    #[error("Forbidden")]
    OwnSpotBooking,
    #[error("Sorry, this spot is already booked for the specified dates")]
    BookingConflict(BookingConflict),
    #[error("User already has a review for this spot")]
    ReviewExists,
    #[error("The user already exists")]
    UserExists,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<FieldErrors> for Error {
    fn from(from: FieldErrors) -> Self {
        Self::Validation(from)
    }
}

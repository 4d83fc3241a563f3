mod add_review_image;
mod create_booking;
mod create_review;
mod create_spot;
mod create_user;
mod delete_review;
mod delete_spot;
mod error;
mod load_bookings;
mod load_reviews;
mod load_spot;
mod search_spots;
mod spot_images;
mod update_spot;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_review_image::*, create_booking::*, create_review::*, create_spot::*, create_user::*,
    delete_review::*, delete_spot::*, error::Error, load_bookings::*, load_reviews::*,
    load_spot::*, search_spots::*, spot_images::*, update_spot::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, util::validate::*, RepoError};
}
use self::prelude::*;

/// Loads an existing spot.
pub fn get_spot<R: SpotRepo>(repo: &R, id: Id) -> Result<Spot> {
    repo.get_spot(id).map_err(|err| match err {
        RepoError::NotFound => Error::SpotNotFound,
        err => err.into(),
    })
}

/// Loads an existing spot that must be owned by the given user.
pub fn get_owned_spot<R: SpotRepo>(repo: &R, owner: &User, id: Id) -> Result<Spot> {
    let spot = get_spot(repo, id)?;
    if !spot.is_owned_by(owner.id) {
        log::debug!(
            "User {} is not allowed to modify spot {} of user {}",
            owner.id,
            spot.id,
            spot.owner_id
        );
        return Err(Error::NotSpotOwner);
    }
    Ok(spot)
}

pub fn get_review<R: ReviewRepo>(repo: &R, id: Id) -> Result<Review> {
    repo.get_review(id).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewNotFound,
        err => err.into(),
    })
}

pub fn load_current_user<R: UserRepo>(repo: &R, user_id: Option<Id>) -> Result<Option<User>> {
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    let user = repo.try_get_user(user_id)?;
    if user.is_none() {
        log::debug!("Unknown user {user_id}");
    }
    Ok(user)
}

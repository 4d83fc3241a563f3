use super::{get_spot, prelude::*};
use crate::rating::{AvgRating, Rated};

#[derive(Debug, Clone, PartialEq)]
pub struct SpotDetails {
    pub spot: Spot,
    pub num_reviews: usize,
    pub avg_star_rating: Option<AvgRating>,
    pub images: Vec<SpotImage>,
    pub owner: User,
}

pub fn load_spot_details<R>(repo: &R, spot_id: Id) -> Result<SpotDetails>
where
    R: SpotRepo + ReviewRepo + SpotImageRepo + UserRepo,
{
    let spot = get_spot(repo, spot_id)?;
    let reviews = repo.load_reviews_of_spot(spot.id)?;
    let images = repo.load_spot_images(spot.id)?;
    let owner = repo.get_user(spot.owner_id)?;
    Ok(SpotDetails {
        num_reviews: reviews.len(),
        avg_star_rating: spot.avg_rating(&reviews),
        images,
        owner,
        spot,
    })
}

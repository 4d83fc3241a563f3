use std::collections::HashMap;

use super::{get_spot, prelude::*, summarize_spots, SpotSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetails {
    pub review: Review,
    pub author: User,
    pub images: Vec<ReviewImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOfUser {
    pub review: Review,
    pub spot: SpotSummary,
    pub images: Vec<ReviewImage>,
}

fn group_images_by_review<R: ReviewImageRepo>(
    repo: &R,
    reviews: &[Review],
) -> Result<HashMap<Id, Vec<ReviewImage>>> {
    let review_ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
    let mut images: HashMap<_, Vec<_>> = HashMap::new();
    for image in repo.load_review_images_of_reviews(&review_ids)? {
        images.entry(image.review_id).or_default().push(image);
    }
    Ok(images)
}

pub fn load_reviews_of_spot<R>(repo: &R, spot_id: Id) -> Result<Vec<ReviewDetails>>
where
    R: SpotRepo + ReviewRepo + ReviewImageRepo + UserRepo,
{
    let spot = get_spot(repo, spot_id)?;
    let reviews = repo.load_reviews_of_spot(spot.id)?;
    let mut images = group_images_by_review(repo, &reviews)?;
    let mut author_ids: Vec<_> = reviews.iter().map(|r| r.user_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let authors: HashMap<_, _> = repo
        .get_users(&author_ids)?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    Ok(reviews
        .into_iter()
        .filter_map(|review| {
            let Some(author) = authors.get(&review.user_id).cloned() else {
                // This should never happen
                log::warn!(
                    "Referential integrity violation: User with id = {} of review {} not found",
                    review.user_id,
                    review.id
                );
                return None;
            };
            let images = images.remove(&review.id).unwrap_or_default();
            Some(ReviewDetails {
                review,
                author,
                images,
            })
        })
        .collect())
}

pub fn load_reviews_of_user<R>(repo: &R, author: &User) -> Result<Vec<ReviewOfUser>>
where
    R: SpotRepo + ReviewRepo + ReviewImageRepo + SpotImageRepo,
{
    let reviews = repo.load_reviews_of_user(author.id)?;
    let mut images = group_images_by_review(repo, &reviews)?;
    let mut spot_ids: Vec<_> = reviews.iter().map(|r| r.spot_id).collect();
    spot_ids.sort_unstable();
    spot_ids.dedup();
    let spots = repo.get_spots(&spot_ids)?;
    let spots: HashMap<_, _> = summarize_spots(repo, spots)?
        .into_iter()
        .map(|s| (s.spot.id, s))
        .collect();
    Ok(reviews
        .into_iter()
        .filter_map(|review| {
            let spot = spots.get(&review.spot_id)?.clone();
            let images = images.remove(&review.id).unwrap_or_default();
            Some(ReviewOfUser {
                review,
                spot,
                images,
            })
        })
        .collect())
}

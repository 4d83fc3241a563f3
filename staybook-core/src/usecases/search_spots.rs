use std::collections::HashMap;

use url::Url;

use super::prelude::*;
use crate::{
    rating::{avg_stars, AvgRating},
    spot_query::SpotQuery,
};

/// A spot as presented in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotSummary {
    pub spot: Spot,
    pub avg_rating: Option<AvgRating>,
    pub preview_image: Option<Url>,
}

/// Annotates each spot with its average rating and
/// the first of its preview images.
pub fn summarize_spots<R>(repo: &R, spots: Vec<Spot>) -> Result<Vec<SpotSummary>>
where
    R: ReviewRepo + SpotImageRepo,
{
    if spots.is_empty() {
        return Ok(vec![]);
    }
    let spot_ids: Vec<_> = spots.iter().map(|s| s.id).collect();

    let mut stars_by_spot: HashMap<Id, Vec<Stars>> = HashMap::new();
    for review in repo.load_reviews_of_spots(&spot_ids)? {
        stars_by_spot
            .entry(review.spot_id)
            .or_default()
            .push(review.stars);
    }

    let mut preview_by_spot: HashMap<Id, Url> = HashMap::new();
    for image in repo.load_preview_images_of_spots(&spot_ids)? {
        debug_assert!(image.preview);
        preview_by_spot.entry(image.spot_id).or_insert(image.url);
    }

    Ok(spots
        .into_iter()
        .map(|spot| {
            let avg_rating = stars_by_spot
                .remove(&spot.id)
                .and_then(|stars| avg_stars(stars));
            let preview_image = preview_by_spot.remove(&spot.id);
            SpotSummary {
                spot,
                avg_rating,
                preview_image,
            }
        })
        .collect())
}

pub fn search_spots<R>(repo: &R, query: &SpotQuery) -> Result<Vec<SpotSummary>>
where
    R: SpotRepo + ReviewRepo + SpotImageRepo,
{
    let pagination = query.pagination();
    let spots = repo.query_spots(&query.filter, &pagination)?;
    log::debug!(
        "Found {} spot(s) (offset = {}, limit = {})",
        spots.len(),
        pagination.offset,
        pagination.limit
    );
    summarize_spots(repo, spots)
}

pub fn load_spots_of_owner<R>(repo: &R, owner: &User) -> Result<Vec<SpotSummary>>
where
    R: SpotRepo + ReviewRepo + SpotImageRepo,
{
    let spots = repo.load_spots_of_owner(owner.id)?;
    summarize_spots(repo, spots)
}

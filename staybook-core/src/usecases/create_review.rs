use super::{get_spot, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct ReviewParams {
    pub review: Option<String>,
    pub stars: Option<f64>,
}

fn validate_stars(stars: Option<f64>) -> std::result::Result<Stars, &'static str> {
    let stars = stars.ok_or("Stars rating is required")?;
    const INVALID: &str = "Stars must be an integer between 1 and 5";
    if stars.fract() != 0.0 {
        return Err(INVALID);
    }
    Stars::try_from(stars as i64).map_err(|_| INVALID)
}

pub fn validate_review_params(
    params: ReviewParams,
    spot_id: Id,
    author_id: Id,
    created_at: Timestamp,
) -> std::result::Result<NewReview, FieldErrors> {
    let ReviewParams { review, stars } = params;
    let mut errors = FieldErrors::new();
    let stars = validate_stars(stars)
        .map_err(|msg| errors.add("stars", msg))
        .unwrap_or(Stars::One);
    let review = NewReview {
        spot_id,
        user_id: author_id,
        text: review.map(|s| s.trim().to_owned()).unwrap_or_default(),
        stars,
        created_at,
    };
    if let Err(review_errors) = review.validate() {
        for (field, message) in review_errors.iter() {
            errors.add(field, message);
        }
    }
    errors.into_result(review)
}

/// Each user may only review a spot once.
pub fn create_review<R>(repo: &R, author: &User, spot_id: Id, params: ReviewParams) -> Result<Review>
where
    R: SpotRepo + ReviewRepo,
{
    let new_review = validate_review_params(params, spot_id, author.id, Timestamp::now())?;
    let spot = get_spot(repo, spot_id)?;
    if repo
        .try_get_review_of_user_for_spot(author.id, spot.id)?
        .is_some()
    {
        log::debug!("User {} already reviewed spot {}", author.id, spot.id);
        return Err(Error::ReviewExists);
    }
    let review = repo.create_review(new_review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::ReviewExists,
        err => err.into(),
    })?;
    log::info!("User {} reviewed spot {}", author.id, spot.id);
    Ok(review)
}

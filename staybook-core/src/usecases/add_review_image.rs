use super::{get_own_review, prelude::*, ImageParams};

pub fn add_review_image<R>(
    repo: &R,
    author: &User,
    review_id: Id,
    params: ImageParams,
) -> Result<ReviewImage>
where
    R: ReviewRepo + ReviewImageRepo,
{
    let Some(url) = params.url.as_deref().and_then(parse_web_url) else {
        let mut errors = FieldErrors::new();
        errors.add("url", "Image URL must be valid");
        return Err(errors.into());
    };
    let review = get_own_review(repo, author, review_id)?;
    let image = repo.create_review_image(NewReviewImage {
        review_id: review.id,
        url,
    })?;
    log::info!("Added image {} to review {}", image.id, review.id);
    Ok(image)
}

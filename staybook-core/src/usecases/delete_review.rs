use super::{get_review, prelude::*};

/// Loads an existing review that must have been written by the given user.
pub fn get_own_review<R: ReviewRepo>(repo: &R, author: &User, review_id: Id) -> Result<Review> {
    let review = get_review(repo, review_id)?;
    if review.user_id != author.id {
        log::debug!(
            "User {} is not the author of review {}",
            author.id,
            review.id
        );
        return Err(Error::NotReviewAuthor);
    }
    Ok(review)
}

pub fn delete_review<R: ReviewRepo>(repo: &R, author: &User, review_id: Id) -> Result<()> {
    let review = get_own_review(repo, author, review_id)?;
    repo.delete_review(review.id)?;
    log::info!("User {} deleted review {}", author.id, review.id);
    Ok(())
}

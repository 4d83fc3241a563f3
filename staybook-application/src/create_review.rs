use super::*;

pub fn create_review(
    connections: &sqlite::Connections,
    author: &User,
    spot_id: Id,
    params: usecases::ReviewParams,
) -> Result<Review> {
    let review = connections
        .exclusive()?
        .transaction(|conn| usecases::create_review(conn, author, spot_id, params))?;
    Ok(review)
}

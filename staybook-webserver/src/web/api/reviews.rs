use super::*;

#[get("/spots/<id>/reviews")]
pub fn get_reviews_of_spot(
    connections: sqlite::Connections,
    id: i64,
) -> Result<json::Reviews<json::SpotReview>> {
    let reviews = usecases::load_reviews_of_spot(&connections.shared()?, id.into())?;
    Ok(Json(json::Reviews {
        reviews: reviews.into_iter().map(to_json::spot_review).collect(),
    }))
}

#[post("/spots/<id>/reviews", format = "application/json", data = "<review>")]
pub fn post_review(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    review: JsonResult<json::NewReview>,
) -> CreatedResult<json::Review> {
    let author = auth.required_user()?;
    let params = from_json::review_params(review?.into_inner());
    let review = flows::create_review(&connections, author, id.into(), params)?;
    Ok(created(review.into()))
}

#[get("/reviews/current")]
pub fn get_reviews_of_current_user(
    connections: sqlite::Connections,
    auth: Auth,
) -> Result<json::Reviews<json::UserReview>> {
    let author = auth.required_user()?;
    let reviews = usecases::load_reviews_of_user(&connections.shared()?, author)?;
    Ok(Json(json::Reviews {
        reviews: reviews
            .into_iter()
            .map(|review| to_json::user_review(review, author))
            .collect(),
    }))
}

#[delete("/reviews/<id>")]
pub fn delete_review(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
) -> Result<json::Message> {
    let author = auth.required_user()?;
    usecases::delete_review(&connections.exclusive()?, author, id.into())?;
    Ok(deleted())
}

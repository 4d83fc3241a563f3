use super::*;

#[post("/spots/<id>/images", format = "application/json", data = "<image>")]
pub fn post_spot_image(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    image: JsonResult<json::NewImage>,
) -> CreatedResult<json::SpotImage> {
    let owner = auth.required_user()?;
    let params = from_json::image_params(image?.into_inner());
    let image = usecases::add_spot_image(&connections.exclusive()?, owner, id.into(), params)?;
    Ok(created(image.into()))
}

/// Replaces all images of a spot by the given list of images.
#[put("/spots/<id>/images", format = "application/json", data = "<images>")]
pub fn put_spot_images(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    images: JsonResult<Vec<json::NewImage>>,
) -> Result<Vec<json::SpotImage>> {
    let owner = auth.required_user()?;
    let images = images?
        .into_inner()
        .into_iter()
        .map(from_json::image_params)
        .collect();
    let images = flows::replace_spot_images(&connections, owner, id.into(), images)?;
    Ok(Json(images.into_iter().map(Into::into).collect()))
}

#[delete("/spots/<id>/images")]
pub fn delete_spot_images(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
) -> Result<json::Message> {
    let owner = auth.required_user()?;
    flows::delete_spot_images(&connections, owner, id.into())?;
    Ok(deleted())
}

#[post("/reviews/<id>/images", format = "application/json", data = "<image>")]
pub fn post_review_image(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    image: JsonResult<json::NewImage>,
) -> CreatedResult<json::ReviewImage> {
    let author = auth.required_user()?;
    let params = from_json::image_params(image?.into_inner());
    let image = usecases::add_review_image(&connections.exclusive()?, author, id.into(), params)?;
    Ok(created(image.into()))
}

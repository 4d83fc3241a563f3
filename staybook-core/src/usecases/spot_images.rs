use super::{get_owned_spot, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct ImageParams {
    pub url: Option<String>,
    pub preview: Option<bool>,
}

pub fn add_spot_image<R>(repo: &R, owner: &User, spot_id: Id, params: ImageParams) -> Result<SpotImage>
where
    R: SpotRepo + SpotImageRepo,
{
    let ImageParams { url, preview } = params;
    let Some(url) = url.as_deref().and_then(parse_web_url) else {
        let mut errors = FieldErrors::new();
        errors.add("url", "Image URL must be valid");
        return Err(errors.into());
    };
    let spot = get_owned_spot(repo, owner, spot_id)?;
    let image = repo.create_spot_image(NewSpotImage {
        spot_id: spot.id,
        url,
        preview: preview.unwrap_or(false),
    })?;
    log::info!("Added image {} to spot {}", image.id, spot.id);
    Ok(image)
}

/// Replaces all images of a spot.
///
/// The existing images are deleted before the new images are
/// created one after another. The first invalid image aborts
/// the operation, so this use case must be executed within a
/// transaction that is rolled back on error.
pub fn replace_spot_images<R>(
    repo: &R,
    owner: &User,
    spot_id: Id,
    images: Vec<ImageParams>,
) -> Result<Vec<SpotImage>>
where
    R: SpotRepo + SpotImageRepo,
{
    if images.is_empty() {
        let mut errors = FieldErrors::new();
        errors.add("images", "At least one image is required");
        return Err(errors.into());
    }
    let spot = get_owned_spot(repo, owner, spot_id)?;
    let deleted = repo.delete_spot_images(spot.id)?;
    log::debug!("Deleted {deleted} image(s) of spot {}", spot.id);
    let mut created = Vec::with_capacity(images.len());
    for (index, ImageParams { url, preview }) in images.into_iter().enumerate() {
        let Some(url) = url.as_deref().and_then(parse_web_url) else {
            let mut errors = FieldErrors::new();
            errors.add(format!("images[{index}].url"), "Each image URL must be valid");
            return Err(errors.into());
        };
        let image = repo.create_spot_image(NewSpotImage {
            spot_id: spot.id,
            url,
            preview: preview.unwrap_or(false),
        })?;
        created.push(image);
    }
    log::info!(
        "Replaced {deleted} image(s) of spot {} by {} new image(s)",
        spot.id,
        created.len()
    );
    Ok(created)
}

pub fn delete_spot_images<R>(repo: &R, owner: &User, spot_id: Id) -> Result<usize>
where
    R: SpotRepo + SpotImageRepo,
{
    let spot = get_owned_spot(repo, owner, spot_id)?;
    let deleted = repo.delete_spot_images(spot.id)?;
    log::info!("Deleted {deleted} image(s) of spot {}", spot.id);
    Ok(deleted)
}

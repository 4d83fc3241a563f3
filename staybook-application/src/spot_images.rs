use super::*;

/// Replaces all images of a spot atomically.
///
/// Either all new images are stored or the
/// existing images remain unchanged.
pub fn replace_spot_images(
    connections: &sqlite::Connections,
    owner: &User,
    spot_id: Id,
    images: Vec<usecases::ImageParams>,
) -> Result<Vec<SpotImage>> {
    let images = connections
        .exclusive()?
        .transaction(|conn| usecases::replace_spot_images(conn, owner, spot_id, images))?;
    Ok(images)
}

pub fn delete_spot_images(
    connections: &sqlite::Connections,
    owner: &User,
    spot_id: Id,
) -> Result<usize> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_spot_images(conn, owner, spot_id))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use staybook_core::repositories::SpotImageRepo as _;

    fn image(url: &str, preview: bool) -> usecases::ImageParams {
        usecases::ImageParams {
            url: Some(url.into()),
            preview: Some(preview),
        }
    }

    fn stored_urls(fixture: &BackendFixture, spot_id: Id) -> Vec<String> {
        fixture
            .db_connections
            .shared()
            .unwrap()
            .load_spot_images(spot_id)
            .unwrap()
            .into_iter()
            .map(|i| i.url.to_string())
            .collect()
    }

    #[test]
    fn replace_images() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user("owner");
        let spot = fixture.create_spot(&owner);
        flows::replace_spot_images(
            &fixture.db_connections,
            &owner,
            spot.id,
            vec![image("https://example.com/a.png", true)],
        )
        .unwrap();
        let images = flows::replace_spot_images(
            &fixture.db_connections,
            &owner,
            spot.id,
            vec![
                image("https://example.com/b.png", true),
                image("https://example.com/c.png", false),
            ],
        )
        .unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(
            stored_urls(&fixture, spot.id),
            vec!["https://example.com/b.png", "https://example.com/c.png"]
        );
        assert_eq!(
            flows::delete_spot_images(&fixture.db_connections, &owner, spot.id).unwrap(),
            2
        );
        assert!(stored_urls(&fixture, spot.id).is_empty());
    }

    #[test]
    fn keep_existing_images_if_any_new_image_is_invalid() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user("owner");
        let spot = fixture.create_spot(&owner);
        flows::replace_spot_images(
            &fixture.db_connections,
            &owner,
            spot.id,
            vec![image("https://example.com/a.png", true)],
        )
        .unwrap();
        let err = flows::replace_spot_images(
            &fixture.db_connections,
            &owner,
            spot.id,
            vec![
                image("https://example.com/b.png", true),
                image("https://example.com/c.png", false),
                image("ftp:/c.png", false),
            ],
        )
        .unwrap_err();
        let AppError::Business(BError::Parameter(usecases::Error::Validation(errors))) = err
        else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(
            errors.get("images[2].url"),
            Some("Each image URL must be valid")
        );
        assert_eq!(
            stored_urls(&fixture, spot.id),
            vec!["https://example.com/a.png"]
        );
    }
}

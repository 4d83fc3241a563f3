use super::{get_owned_spot, prelude::*, validate_spot_params, SpotParams};

pub fn update_spot<R: SpotRepo>(
    repo: &R,
    owner: &User,
    spot_id: Id,
    params: SpotParams,
) -> Result<Spot> {
    let old_spot = get_owned_spot(repo, owner, spot_id)?;
    let now = Timestamp::now();
    let NewSpot {
        address,
        pos,
        name,
        description,
        price,
        ..
    } = validate_spot_params(params, owner.id, now)?;
    let spot = Spot {
        address,
        pos,
        name,
        description,
        price,
        updated_at: now,
        ..old_spot
    };
    repo.update_spot(&spot)?;
    log::info!("User {} updated spot {}", owner.id, spot.id);
    Ok(spot)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn update_own_spot() {
        let db = MockDb::default();
        let owner = db.add_user("owner");
        let spot = db.add_spot(&owner, 80.0);
        let params = SpotParams {
            name: Some("Renamed".into()),
            price: Some(99.0),
            ..spot_params()
        };
        let updated = update_spot(&db, &owner, spot.id, params).unwrap();
        assert_eq!(updated.id, spot.id);
        assert_eq!(updated.created_at, spot.created_at);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(db.spots.borrow()[0].price, 99.0);
    }

    #[test]
    fn only_the_owner_may_update_a_spot() {
        let db = MockDb::default();
        let owner = db.add_user("owner");
        let other = db.add_user("other");
        let spot = db.add_spot(&owner, 80.0);
        assert!(matches!(
            update_spot(&db, &other, spot.id, spot_params()),
            Err(Error::NotSpotOwner)
        ));
        assert!(matches!(
            update_spot(&db, &owner, Id::new(999), spot_params()),
            Err(Error::SpotNotFound)
        ));
    }
}

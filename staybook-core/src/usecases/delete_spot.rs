use super::{get_owned_spot, prelude::*};

/// Deletes the spot together with all of its bookings,
/// reviews and images.
pub fn delete_spot<R: SpotRepo>(repo: &R, owner: &User, spot_id: Id) -> Result<()> {
    let spot = get_owned_spot(repo, owner, spot_id)?;
    repo.delete_spot(spot.id)?;
    log::info!("User {} deleted spot {}", owner.id, spot.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn delete_own_spot() {
        let db = MockDb::default();
        let owner = db.add_user("owner");
        let spot = db.add_spot(&owner, 80.0);
        assert!(delete_spot(&db, &owner, spot.id).is_ok());
        assert!(db.spots.borrow().is_empty());
        assert!(matches!(
            delete_spot(&db, &owner, spot.id),
            Err(Error::SpotNotFound)
        ));
    }

    #[test]
    fn delete_spot_of_another_user() {
        let db = MockDb::default();
        let owner = db.add_user("owner");
        let other = db.add_user("other");
        let spot = db.add_spot(&owner, 80.0);
        assert!(matches!(
            delete_spot(&db, &other, spot.id),
            Err(Error::NotSpotOwner)
        ));
        assert_eq!(db.spots.borrow().len(), 1);
    }
}

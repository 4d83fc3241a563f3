use super::*;

/// Deletes a spot together with all of its bookings,
/// reviews and images.
pub fn delete_spot(connections: &sqlite::Connections, owner: &User, spot_id: Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_spot(conn, owner, spot_id))?;
    info!("Deleted spot {spot_id}");
    Ok(())
}

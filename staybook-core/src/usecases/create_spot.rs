use super::prelude::*;

/// Unvalidated properties of a spot as submitted by its owner.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct SpotParams {
    pub address     : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub country     : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub name        : Option<String>,
    pub description : Option<String>,
    pub price       : Option<f64>,
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> String {
    let value = value.map(|s| s.trim().to_owned()).unwrap_or_default();
    if value.is_empty() {
        errors.add(field, message);
    }
    value
}

pub fn validate_spot_params(
    params: SpotParams,
    owner_id: Id,
    created_at: Timestamp,
) -> std::result::Result<NewSpot, FieldErrors> {
    let SpotParams {
        address,
        city,
        state,
        country,
        lat,
        lng,
        name,
        description,
        price,
    } = params;
    let mut errors = FieldErrors::new();
    let street = required_text(&mut errors, "address", address, "Street address is required");
    let city = required_text(&mut errors, "city", city, "City is required");
    let state = required_text(&mut errors, "state", state, "State is required");
    let country = required_text(&mut errors, "country", country, "Country is required");
    let lat = lat.filter(|lat| is_valid_lat_deg(*lat));
    if lat.is_none() {
        errors.add("lat", "Latitude is not valid");
    }
    let lng = lng.filter(|lng| is_valid_lng_deg(*lng));
    if lng.is_none() {
        errors.add("lng", "Longitude is not valid");
    }
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_default(),
        _ => MapPoint::default(),
    };
    let spot = NewSpot {
        owner_id,
        address: Address {
            street,
            city,
            state,
            country,
        },
        pos,
        name: name.map(|s| s.trim().to_owned()).unwrap_or_default(),
        description: description.map(|s| s.trim().to_owned()).unwrap_or_default(),
        price: price.unwrap_or_default(),
        created_at,
    };
    if let Err(spot_errors) = spot.validate() {
        for (field, message) in spot_errors.iter() {
            errors.add(field, message);
        }
    }
    errors.into_result(spot)
}

pub fn create_spot<R: SpotRepo>(repo: &R, owner: &User, params: SpotParams) -> Result<Spot> {
    let new_spot = validate_spot_params(params, owner.id, Timestamp::now())?;
    let spot = repo.create_spot(new_spot)?;
    log::info!("User {} created spot {}", owner.id, spot.id);
    Ok(spot)
}

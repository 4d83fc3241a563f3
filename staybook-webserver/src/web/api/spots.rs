use rocket::FromForm;

use super::*;
use crate::core::spot_query::{build_spot_query, SpotQueryParams};

#[derive(Debug, Default, FromForm)]
pub struct SpotSearchQuery {
    page: Option<String>,
    size: Option<String>,
    #[field(name = "minLat")]
    min_lat: Option<String>,
    #[field(name = "maxLat")]
    max_lat: Option<String>,
    #[field(name = "minLng")]
    min_lng: Option<String>,
    #[field(name = "maxLng")]
    max_lng: Option<String>,
    #[field(name = "minPrice")]
    min_price: Option<String>,
    #[field(name = "maxPrice")]
    max_price: Option<String>,
}

impl From<SpotSearchQuery> for SpotQueryParams {
    fn from(from: SpotSearchQuery) -> Self {
        let SpotSearchQuery {
            page,
            size,
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            min_price,
            max_price,
        } = from;
        Self {
            page,
            size,
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            min_price,
            max_price,
        }
    }
}

#[get("/spots?<query..>")]
pub fn get_spots(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    query: SpotSearchQuery,
) -> Result<json::Spots> {
    let query = build_spot_query(&query.into(), &cfg.page_limits)?;
    let spots = usecases::search_spots(&connections.shared()?, &query)?;
    Ok(Json(json::Spots {
        spots: spots.into_iter().map(to_json::spot_list_item).collect(),
        page: Some(query.page),
        size: Some(query.size),
    }))
}

#[post("/spots", format = "application/json", data = "<spot>")]
pub fn post_spot(
    connections: sqlite::Connections,
    auth: Auth,
    spot: JsonResult<json::NewSpot>,
) -> CreatedResult<json::Spot> {
    let owner = auth.required_user()?;
    let params = from_json::spot_params(spot?.into_inner());
    let spot = usecases::create_spot(&connections.exclusive()?, owner, params)?;
    Ok(created(spot.into()))
}

#[get("/spots/current")]
pub fn get_spots_of_current_user(
    connections: sqlite::Connections,
    auth: Auth,
) -> Result<json::Spots> {
    let owner = auth.required_user()?;
    let spots = usecases::load_spots_of_owner(&connections.shared()?, owner)?;
    Ok(Json(json::Spots {
        spots: spots.into_iter().map(to_json::spot_list_item).collect(),
        page: None,
        size: None,
    }))
}

#[get("/spots/<id>")]
pub fn get_spot(connections: sqlite::Connections, id: i64) -> Result<json::SpotDetails> {
    let details = usecases::load_spot_details(&connections.shared()?, id.into())?;
    Ok(Json(to_json::spot_details(details)))
}

#[put("/spots/<id>", format = "application/json", data = "<spot>")]
pub fn put_spot(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    spot: JsonResult<json::NewSpot>,
) -> Result<json::Spot> {
    let owner = auth.required_user()?;
    let params = from_json::spot_params(spot?.into_inner());
    let spot = usecases::update_spot(&connections.exclusive()?, owner, id.into(), params)?;
    Ok(Json(spot.into()))
}

#[delete("/spots/<id>")]
pub fn delete_spot(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
) -> Result<json::Message> {
    let owner = auth.required_user()?;
    flows::delete_spot(&connections, owner, id.into())?;
    Ok(deleted())
}

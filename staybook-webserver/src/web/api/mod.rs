use std::{collections::BTreeMap, fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, status, Responder},
    routes, Route, State,
};
use staybook_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::usecases,
    web::{sqlite, Cfg},
};
use staybook_application::prelude as flows;

mod bookings;
mod error;
mod images;
mod reviews;
mod spots;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<status::Custom<Json<T>>, ApiError>;

fn created<T>(body: T) -> status::Custom<Json<T>> {
    status::Custom(Status::Created, Json(body))
}

fn deleted() -> Json<json::Message> {
    Json(json::Message {
        message: "Successfully deleted".to_owned(),
    })
}

pub fn routes() -> Vec<Route> {
    routes![
        // ---   spots   --- //
        spots::get_spots,
        spots::post_spot,
        spots::get_spots_of_current_user,
        spots::get_spot,
        spots::put_spot,
        spots::delete_spot,
        // ---   images   --- //
        images::post_spot_image,
        images::put_spot_images,
        images::delete_spot_images,
        images::post_review_image,
        // ---   bookings   --- //
        bookings::get_bookings_of_spot,
        bookings::post_booking,
        bookings::get_bookings_of_current_user,
        // ---   reviews   --- //
        reviews::get_reviews_of_spot,
        reviews::post_review,
        reviews::get_reviews_of_current_user,
        reviews::delete_review,
        // ---   users   --- //
        users::get_current_user,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    json_error_response_with_fields(req, err, status, None)
}

fn json_error_response_with_fields<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
    errors: Option<BTreeMap<String, String>>,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        errors,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

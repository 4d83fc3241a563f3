use std::collections::BTreeMap;

use super::{json_error_response, json_error_response_with_fields};
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use staybook_application::error::{AppError, BError};
pub use staybook_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use staybook_core::{availability::BookingConflict, util::validate::FieldErrors};
use thiserror::Error;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn field_errors(errors: &FieldErrors) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|(field, message)| (field.to_owned(), message.to_owned()))
        .collect()
}

fn conflict_errors(conflict: &BookingConflict) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if conflict.start_date {
        errors.insert(
            "startDate".to_owned(),
            "Start date conflicts with an existing booking".to_owned(),
        );
    }
    if conflict.end_date {
        errors.insert(
            "endDate".to_owned(),
            "End date conflicts with an existing booking".to_owned(),
        );
    }
    errors
}

fn parameter_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &ParameterError,
) -> response::Result<'o> {
    match err {
        ParameterError::Validation(errors) => json_error_response_with_fields(
            req,
            err,
            Status::BadRequest,
            Some(field_errors(errors)),
        ),
        ParameterError::BookingConflict(conflict) => json_error_response_with_fields(
            req,
            err,
            Status::Forbidden,
            Some(conflict_errors(conflict)),
        ),
        ParameterError::Unauthorized => json_error_response(req, err, Status::Unauthorized),
        ParameterError::SpotNotFound | ParameterError::ReviewNotFound => {
            json_error_response(req, err, Status::NotFound)
        }
        ParameterError::NotSpotOwner
        | ParameterError::NotReviewAuthor
        | ParameterError::OwnSpotBooking
        | ParameterError::ReviewExists => json_error_response(req, err, Status::Forbidden),
        ParameterError::UserExists => json_error_response(req, err, Status::Conflict),
        ParameterError::Repo(_) => {
            error!("Error: {err}");
            json_error_response(req, &INTERNAL_SERVER_ERROR, Status::InternalServerError)
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            return parameter_error_response(req, err);
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_SERVER_ERROR, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_SERVER_ERROR, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<FieldErrors> for Error {
    fn from(err: FieldErrors) -> Self {
        ParameterError::from(err).into()
    }
}

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::{sqlite, Cfg};
use crate::core::{entities::*, usecases};
use staybook_application::error::AppError;
use staybook_core::usecases::Error as ParameterError;

type Result<T> = std::result::Result<T, AppError>;

pub struct Version(pub &'static str);

/// The user that has been authenticated upstream.
///
/// Requests without a valid identity are anonymous.
#[derive(Debug)]
pub struct Auth {
    user: Option<User>,
}

impl Auth {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn required_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn user_id_from_header(request: &Request, header_name: &str) -> Option<Id> {
        let value = request.headers().get_one(header_name)?;
        match value.trim().parse() {
            Ok(id) => Some(id),
            Err(_) => {
                debug!("Ignoring malformed user id in header '{header_name}': {value}");
                None
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cfg = try_outcome!(request.guard::<&State<Cfg>>().await);
        let Some(user_id) = Self::user_id_from_header(request, &cfg.identity_header) else {
            return Outcome::Success(Self { user: None });
        };
        let connections = try_outcome!(request.guard::<sqlite::Connections>().await);
        let user = connections
            .shared()
            .map_err(AppError::from)
            .and_then(|db| Ok(usecases::load_current_user(&db, Some(user_id))?));
        match user {
            Ok(user) => Outcome::Success(Self { user }),
            Err(err) => {
                error!("Failed to load user {user_id}: {err}");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}

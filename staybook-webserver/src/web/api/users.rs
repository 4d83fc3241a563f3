use super::*;

#[get("/users/current")]
pub fn get_current_user(auth: Auth) -> Json<json::CurrentUser> {
    Json(json::CurrentUser {
        user: auth.user().cloned().map(Into::into),
    })
}

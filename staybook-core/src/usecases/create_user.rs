use super::prelude::*;

pub use fast_chemail::is_valid_email;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UserParams {
    pub email      : String,
    pub username   : String,
    pub first_name : String,
    pub last_name  : String,
}

pub fn create_user<R: UserRepo>(repo: &R, params: UserParams) -> Result<User> {
    let UserParams {
        email,
        username,
        first_name,
        last_name,
    } = params;
    let mut errors = FieldErrors::new();
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        errors.add("email", "Invalid email");
    }
    if is_blank(&username) {
        errors.add("username", "Username is required");
    }
    if is_blank(&first_name) {
        errors.add("firstName", "First Name is required");
    }
    if is_blank(&last_name) {
        errors.add("lastName", "Last Name is required");
    }
    let new_user = errors.into_result(NewUser {
        email,
        username: username.trim().to_owned(),
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        created_at: Timestamp::now(),
    })?;
    let user = repo.create_user(new_user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    log::info!("Created user {} ({})", user.id, user.username);
    Ok(user)
}

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub email      : String,
    pub username   : String,
    pub first_name : String,
    pub last_name  : String,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email      : String,
    pub username   : String,
    pub first_name : String,
    pub last_name  : String,
    pub created_at : Timestamp,
}

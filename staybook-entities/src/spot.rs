use crate::{address::Address, geo::MapPoint, id::Id, time::Timestamp};

pub const MAX_NAME_LEN: usize = 50;

/// Price per day
pub type Price = f64;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id          : Id,
    pub owner_id    : Id,
    pub address     : Address,
    pub pos         : MapPoint,
    pub name        : String,
    pub description : String,
    pub price       : Price,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl Spot {
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.owner_id == user_id
    }
}

/// A spot that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpot {
    pub owner_id    : Id,
    pub address     : Address,
    pub pos         : MapPoint,
    pub name        : String,
    pub description : String,
    pub price       : Price,
    pub created_at  : Timestamp,
}

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumCount, EnumIter};
use thiserror::Error;

use crate::{id::Id, time::Timestamp};

pub const MAX_REVIEW_LEN: usize = 4000;

pub type StarsPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount)]
pub enum Stars {
    One   = 1,
    Two   = 2,
    Three = 3,
    Four  = 4,
    Five  = 5,
}

impl Stars {
    pub fn value(self) -> StarsPrimitive {
        self.into()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid star rating: {0}")]
pub struct InvalidStars(pub i64);

impl TryFrom<i64> for Stars {
    type Error = InvalidStars;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        Self::from_i64(from).ok_or(InvalidStars(from))
    }
}

impl From<Stars> for StarsPrimitive {
    fn from(from: Stars) -> Self {
        from.to_i16().expect("star rating primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub spot_id    : Id,
    pub user_id    : Id,
    pub text       : String,
    pub stars      : Stars,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub spot_id    : Id,
    pub user_id    : Id,
    pub text       : String,
    pub stars      : Stars,
    pub created_at : Timestamp,
}

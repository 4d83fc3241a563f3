use crate::{date::DateRange, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id         : Id,
    pub spot_id    : Id,
    pub user_id    : Id,
    pub period     : DateRange,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub spot_id    : Id,
    pub user_id    : Id,
    pub period     : DateRange,
    pub created_at : Timestamp,
}

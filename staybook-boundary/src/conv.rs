use super::*;
use staybook_entities as e;

impl From<e::spot::Spot> for Spot {
    fn from(from: e::spot::Spot) -> Self {
        let e::spot::Spot {
            id,
            owner_id,
            address:
                e::address::Address {
                    street,
                    city,
                    state,
                    country,
                },
            pos,
            name,
            description,
            price,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            address: street,
            city,
            state,
            country,
            lat: pos.lat(),
            lng: pos.lng(),
            name,
            description,
            price,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::image::SpotImage> for SpotImage {
    fn from(from: e::image::SpotImage) -> Self {
        let e::image::SpotImage {
            id,
            spot_id: _,
            url,
            preview,
        } = from;
        Self {
            id: id.into(),
            url: url.into(),
            preview,
        }
    }
}

impl From<e::image::ReviewImage> for ReviewImage {
    fn from(from: e::image::ReviewImage) -> Self {
        let e::image::ReviewImage {
            id,
            review_id: _,
            url,
        } = from;
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
            id,
            spot_id,
            user_id,
            period,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            spot_id: spot_id.into(),
            user_id: user_id.into(),
            start_date: e::date::format_iso_date(period.start()),
            end_date: e::date::format_iso_date(period.end()),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::booking::Booking> for PublicBooking {
    fn from(from: e::booking::Booking) -> Self {
        Self {
            spot_id: from.spot_id.into(),
            start_date: e::date::format_iso_date(from.period.start()),
            end_date: e::date::format_iso_date(from.period.end()),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            spot_id,
            user_id,
            text,
            stars,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            spot_id: spot_id.into(),
            review: text,
            stars: stars.value() as u8,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            username,
            first_name,
            last_name,
            created_at: _,
        } = from;
        Self {
            id: id.into(),
            email,
            username,
            first_name,
            last_name,
        }
    }
}

impl From<e::user::User> for UserSummary {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            first_name,
            last_name,
            ..
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
        }
    }
}

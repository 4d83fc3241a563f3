pub use staybook_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn spot_params(from: NewSpot) -> usecases::SpotParams {
        let NewSpot {
            address,
            city,
            state,
            country,
            lat,
            lng,
            name,
            description,
            price,
        } = from;
        usecases::SpotParams {
            address,
            city,
            state,
            country,
            lat,
            lng,
            name,
            description,
            price,
        }
    }

    pub fn booking_request(from: NewBooking) -> usecases::BookingRequest {
        let NewBooking {
            start_date,
            end_date,
        } = from;
        usecases::BookingRequest {
            start_date,
            end_date,
        }
    }

    pub fn review_params(from: NewReview) -> usecases::ReviewParams {
        let NewReview { review, stars } = from;
        usecases::ReviewParams { review, stars }
    }

    pub fn image_params(from: NewImage) -> usecases::ImageParams {
        let NewImage { url, preview } = from;
        usecases::ImageParams { url, preview }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn spot_list_item(from: usecases::SpotSummary) -> SpotListItem {
        let usecases::SpotSummary {
            spot,
            avg_rating,
            preview_image,
        } = from;
        SpotListItem {
            spot: spot.into(),
            avg_rating: avg_rating.map(Into::into),
            preview_image: preview_image.map(Into::into),
        }
    }

    pub fn spot_details(from: usecases::SpotDetails) -> SpotDetails {
        let usecases::SpotDetails {
            spot,
            num_reviews,
            avg_star_rating,
            images,
            owner,
        } = from;
        SpotDetails {
            spot: spot.into(),
            num_reviews: num_reviews as u64,
            avg_star_rating: avg_star_rating.map(Into::into),
            spot_images: images.into_iter().map(Into::into).collect(),
            owner: owner.into(),
        }
    }

    pub fn spot_bookings(from: usecases::SpotBookings) -> Vec<SpotBooking> {
        match from {
            usecases::SpotBookings::Owner(bookings) => bookings
                .into_iter()
                .map(|(booking, user)| {
                    SpotBooking::Owner(OwnerBooking {
                        user: user.into(),
                        booking: booking.into(),
                    })
                })
                .collect(),
            usecases::SpotBookings::Public(bookings) => bookings
                .into_iter()
                .map(|booking| SpotBooking::Public(booking.into()))
                .collect(),
        }
    }

    pub fn user_booking(booking: e::Booking, spot: usecases::SpotSummary) -> UserBooking {
        UserBooking {
            booking: booking.into(),
            spot: spot_list_item(spot),
        }
    }

    pub fn spot_review(from: usecases::ReviewDetails) -> SpotReview {
        let usecases::ReviewDetails {
            review,
            author,
            images,
        } = from;
        SpotReview {
            review: review.into(),
            user: author.into(),
            review_images: images.into_iter().map(Into::into).collect(),
        }
    }

    pub fn user_review(from: usecases::ReviewOfUser, author: &e::User) -> UserReview {
        let usecases::ReviewOfUser {
            review,
            spot,
            images,
        } = from;
        UserReview {
            review: review.into(),
            user: author.clone().into(),
            spot: spot_list_item(spot),
            review_images: images.into_iter().map(Into::into).collect(),
        }
    }
}

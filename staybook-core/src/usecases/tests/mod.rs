use std::{cell::RefCell, result};

use time::Date;

use super::SpotParams;
use crate::{
    availability::is_candidate,
    entities::*,
    repositories::{Error as RepoError, *},
    spot_query::{Pagination, SpotFilter},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> Id;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(impl Key for $t {
            fn key(&self) -> Id {
                self.id
            }
        })*
    };
}

impl_key!(User, Spot, Booking, Review, SpotImage, ReviewImage);

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub spots: RefCell<Vec<Spot>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub reviews: RefCell<Vec<Review>>,
    pub spot_images: RefCell<Vec<SpotImage>>,
    pub review_images: RefCell<Vec<ReviewImage>>,
}

fn get<T: Clone + Key>(objects: &[T], id: Id) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn next_id<T: Key>(objects: &[T]) -> Id {
    let max = objects.iter().map(|x| x.key().as_i64()).max().unwrap_or(0);
    Id::new(max + 1)
}

impl UserRepo for MockDb {
    fn create_user(&self, u: NewUser) -> RepoResult<User> {
        let mut users = self.users.borrow_mut();
        if users
            .iter()
            .any(|x| x.email == u.email || x.username == u.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        let NewUser {
            email,
            username,
            first_name,
            last_name,
            created_at,
        } = u;
        let user = User {
            id: next_id(&users),
            email,
            username,
            first_name,
            last_name,
            created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn get_users(&self, ids: &[Id]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

impl SpotRepo for MockDb {
    fn create_spot(&self, s: NewSpot) -> RepoResult<Spot> {
        let mut spots = self.spots.borrow_mut();
        let NewSpot {
            owner_id,
            address,
            pos,
            name,
            description,
            price,
            created_at,
        } = s;
        let spot = Spot {
            id: next_id(&spots),
            owner_id,
            address,
            pos,
            name,
            description,
            price,
            created_at,
            updated_at: created_at,
        };
        spots.push(spot.clone());
        Ok(spot)
    }

    fn get_spot(&self, id: Id) -> RepoResult<Spot> {
        get(&self.spots.borrow(), id)
    }

    fn get_spots(&self, ids: &[Id]) -> RepoResult<Vec<Spot>> {
        Ok(self
            .spots
            .borrow()
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    fn update_spot(&self, spot: &Spot) -> RepoResult<()> {
        let mut spots = self.spots.borrow_mut();
        let existing = spots
            .iter_mut()
            .find(|s| s.id == spot.id)
            .ok_or(RepoError::NotFound)?;
        *existing = spot.clone();
        Ok(())
    }

    fn delete_spot(&self, id: Id) -> RepoResult<()> {
        let mut spots = self.spots.borrow_mut();
        let len = spots.len();
        spots.retain(|s| s.id != id);
        if spots.len() == len {
            return Err(RepoError::NotFound);
        }
        self.bookings.borrow_mut().retain(|b| b.spot_id != id);
        let mut reviews = self.reviews.borrow_mut();
        let review_ids: Vec<_> = reviews
            .iter()
            .filter(|r| r.spot_id == id)
            .map(|r| r.id)
            .collect();
        reviews.retain(|r| r.spot_id != id);
        self.review_images
            .borrow_mut()
            .retain(|i| !review_ids.contains(&i.review_id));
        self.spot_images.borrow_mut().retain(|i| i.spot_id != id);
        Ok(())
    }

    fn query_spots(&self, filter: &SpotFilter, pagination: &Pagination) -> RepoResult<Vec<Spot>> {
        let mut spots: Vec<_> = self
            .spots
            .borrow()
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        spots.sort_by_key(|s| s.id);
        Ok(spots
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    fn load_spots_of_owner(&self, owner_id: Id) -> RepoResult<Vec<Spot>> {
        Ok(self
            .spots
            .borrow()
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, b: NewBooking) -> RepoResult<Booking> {
        let mut bookings = self.bookings.borrow_mut();
        let NewBooking {
            spot_id,
            user_id,
            period,
            created_at,
        } = b;
        let booking = Booking {
            id: next_id(&bookings),
            spot_id,
            user_id,
            period,
            created_at,
            updated_at: created_at,
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    fn load_bookings_of_spot(&self, spot_id: Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.spot_id == spot_id)
            .cloned()
            .collect())
    }

    fn load_bookings_of_user(&self, user_id: Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    fn load_bookings_of_spot_in_range(
        &self,
        spot_id: Id,
        period: &DateRange,
    ) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.spot_id == spot_id && is_candidate(&b.period, period))
            .cloned()
            .collect())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, r: NewReview) -> RepoResult<Review> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews
            .iter()
            .any(|x| x.spot_id == r.spot_id && x.user_id == r.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        let NewReview {
            spot_id,
            user_id,
            text,
            stars,
            created_at,
        } = r;
        let review = Review {
            id: next_id(&reviews),
            spot_id,
            user_id,
            text,
            stars,
            created_at,
            updated_at: created_at,
        };
        reviews.push(review.clone());
        Ok(review)
    }

    fn get_review(&self, id: Id) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }

    fn delete_review(&self, id: Id) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let len = reviews.len();
        reviews.retain(|r| r.id != id);
        if reviews.len() == len {
            return Err(RepoError::NotFound);
        }
        self.review_images.borrow_mut().retain(|i| i.review_id != id);
        Ok(())
    }

    fn load_reviews_of_spot(&self, spot_id: Id) -> RepoResult<Vec<Review>> {
        self.load_reviews_of_spots(&[spot_id])
    }

    fn load_reviews_of_spots(&self, spot_ids: &[Id]) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| spot_ids.contains(&r.spot_id))
            .cloned()
            .collect())
    }

    fn load_reviews_of_user(&self, user_id: Id) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn try_get_review_of_user_for_spot(
        &self,
        user_id: Id,
        spot_id: Id,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.user_id == user_id && r.spot_id == spot_id)
            .cloned())
    }
}

impl SpotImageRepo for MockDb {
    fn create_spot_image(&self, i: NewSpotImage) -> RepoResult<SpotImage> {
        let mut images = self.spot_images.borrow_mut();
        let NewSpotImage {
            spot_id,
            url,
            preview,
        } = i;
        let image = SpotImage {
            id: next_id(&images),
            spot_id,
            url,
            preview,
        };
        images.push(image.clone());
        Ok(image)
    }

    fn load_spot_images(&self, spot_id: Id) -> RepoResult<Vec<SpotImage>> {
        Ok(self
            .spot_images
            .borrow()
            .iter()
            .filter(|i| i.spot_id == spot_id)
            .cloned()
            .collect())
    }

    fn delete_spot_images(&self, spot_id: Id) -> RepoResult<usize> {
        let mut images = self.spot_images.borrow_mut();
        let len = images.len();
        images.retain(|i| i.spot_id != spot_id);
        Ok(len - images.len())
    }

    fn load_preview_images_of_spots(&self, spot_ids: &[Id]) -> RepoResult<Vec<SpotImage>> {
        Ok(self
            .spot_images
            .borrow()
            .iter()
            .filter(|i| i.preview && spot_ids.contains(&i.spot_id))
            .cloned()
            .collect())
    }
}

impl ReviewImageRepo for MockDb {
    fn create_review_image(&self, i: NewReviewImage) -> RepoResult<ReviewImage> {
        let mut images = self.review_images.borrow_mut();
        let NewReviewImage { review_id, url } = i;
        let image = ReviewImage {
            id: next_id(&images),
            review_id,
            url,
        };
        images.push(image.clone());
        Ok(image)
    }

    fn load_review_images_of_reviews(&self, review_ids: &[Id]) -> RepoResult<Vec<ReviewImage>> {
        Ok(self
            .review_images
            .borrow()
            .iter()
            .filter(|i| review_ids.contains(&i.review_id))
            .cloned()
            .collect())
    }
}

impl MockDb {
    pub fn add_user(&self, name: &str) -> User {
        self.create_user(NewUser {
            email: format!("{name}@example.com"),
            username: name.into(),
            first_name: name.into(),
            last_name: "Tester".into(),
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_spot(&self, owner: &User, price: f64) -> Spot {
        let id = self.spots.borrow().len() + 1;
        self.create_spot(NewSpot {
            owner_id: owner.id,
            address: Address {
                street: format!("{id} Main Street"),
                city: "San Francisco".into(),
                state: "California".into(),
                country: "United States of America".into(),
            },
            pos: MapPoint::try_from_lat_lng_deg(37.7645358, -122.4730327).unwrap(),
            name: format!("Spot {id}"),
            description: "Place where web developers are created".into(),
            price,
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_booking(&self, user: &User, spot: &Spot, start: Date, end: Date) -> Booking {
        self.create_booking(NewBooking {
            spot_id: spot.id,
            user_id: user.id,
            period: DateRange::try_new(start, end).unwrap(),
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_review(&self, user: &User, spot: &Spot, stars: Stars) -> Review {
        self.create_review(NewReview {
            spot_id: spot.id,
            user_id: user.id,
            text: "This was an awesome spot!".into(),
            stars,
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_spot_image(&self, spot: &Spot, url: &str, preview: bool) -> SpotImage {
        self.create_spot_image(NewSpotImage {
            spot_id: spot.id,
            url: url.parse().unwrap(),
            preview,
        })
        .unwrap()
    }

    pub fn add_review_image(&self, review: &Review, url: &str) -> ReviewImage {
        self.create_review_image(NewReviewImage {
            review_id: review.id,
            url: url.parse().unwrap(),
        })
        .unwrap()
    }
}

pub fn spot_params() -> SpotParams {
    SpotParams {
        address: Some("123 Disney Lane".into()),
        city: Some("San Francisco".into()),
        state: Some("California".into()),
        country: Some("United States of America".into()),
        lat: Some(37.7645358),
        lng: Some(-122.4730327),
        name: Some("App Academy".into()),
        description: Some("Place where web developers are created".into()),
        price: Some(123.0),
    }
}

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, spot_builder::*};

pub mod spot_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, spot::*, time::*};

    #[derive(Debug)]
    pub struct SpotBuild {
        spot: Spot,
    }

    impl SpotBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.spot.id = id.into();
            self
        }
        pub fn owner_id(mut self, owner_id: i64) -> Self {
            self.spot.owner_id = owner_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.spot.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.spot.address.city = city.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.spot.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self.pos(pos)
        }
        pub fn price(mut self, price: Price) -> Self {
            self.spot.price = price;
            self
        }
        pub fn finish(self) -> Spot {
            self.spot
        }
    }

    impl Builder for Spot {
        type Build = SpotBuild;
        fn build() -> SpotBuild {
            let now = Timestamp::now();
            SpotBuild {
                spot: Spot {
                    id: Id::new(1),
                    owner_id: Id::new(1),
                    address: Address {
                        street: "1 Main Street".into(),
                        city: "Springfield".into(),
                        state: "Oregon".into(),
                        country: "United States".into(),
                    },
                    pos: MapPoint::default(),
                    name: "A spot".into(),
                    description: "A nice place to stay".into(),
                    price: 100.0,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, date::*, id::*, time::*};
    use time::Date;

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn spot_id(mut self, spot_id: i64) -> Self {
            self.booking.spot_id = spot_id.into();
            self
        }
        pub fn user_id(mut self, user_id: i64) -> Self {
            self.booking.user_id = user_id.into();
            self
        }
        pub fn period(mut self, start: Date, end: Date) -> Self {
            self.booking.period = DateRange::try_new(start, end).unwrap();
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            let now = Timestamp::now();
            let start = Date::from_calendar_date(2099, time::Month::January, 1).unwrap();
            let end = start.next_day().unwrap();
            BookingBuild {
                booking: Booking {
                    id: Id::new(1),
                    spot_id: Id::new(1),
                    user_id: Id::new(2),
                    period: DateRange::try_new(start, end).unwrap(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

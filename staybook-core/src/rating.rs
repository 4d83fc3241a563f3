use crate::entities::*;

/// Average star rating, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

fn round_to_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// `None` if nothing has been rated yet.
pub fn avg_stars(stars: impl IntoIterator<Item = Stars>) -> Option<AvgRating> {
    let (sum, count) = stars
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), stars| {
            (sum + i64::from(stars.value()), count + 1)
        });
    if count == 0 {
        return None;
    }
    Some(AvgRating(round_to_one_decimal(sum as f64 / count as f64)))
}

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> Option<AvgRating>;
}

impl Rated for Spot {
    fn avg_rating(&self, reviews: &[Review]) -> Option<AvgRating> {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.spot_id == self.id).count()
        );
        avg_stars(reviews.iter().map(|r| r.stars))
    }
}

use url::Url;

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotImage {
    pub id      : Id,
    pub spot_id : Id,
    pub url     : Url,
    pub preview : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpotImage {
    pub spot_id : Id,
    pub url     : Url,
    pub preview : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewImage {
    pub id        : Id,
    pub review_id : Id,
    pub url       : Url,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReviewImage {
    pub review_id : Id,
    pub url       : Url,
}
